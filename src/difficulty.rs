#![warn(clippy::all, clippy::pedantic)]
#![allow(
    // Allow precision loss when casting levels to f32; levels stay far below 2^24
    clippy::cast_precision_loss
)]

use log::debug;
use serde::{Deserialize, Serialize};

use crate::config::DifficultyConfig;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameMode {
    #[default]
    Classic,
    Hardcore,
}

impl GameMode {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            GameMode::Classic => "Classic",
            GameMode::Hardcore => "Hardcore",
        }
    }
}

/// Level and speed policy consulted by the stack.
///
/// The stack never decides how hard the game is; it asks this controller for
/// the speed, width and tolerance of the next block and reports progress back.
pub trait DifficultyController: Send + Sync {
    fn current_speed(&self) -> f32;
    fn level(&self) -> u32;
    fn hit_window_tolerance(&self) -> f32;
    fn block_width_for_level(&mut self, previous_width: f32) -> f32;
    fn should_apply_forced_drop(&mut self) -> bool;
    fn set_base_position(&mut self, x: f32);
    fn complete_level(&mut self);
    fn start_new_game(&mut self, mode: GameMode);
}

/// Default controller: one level per placed block, linear speed ramp,
/// narrowing hit window.
#[derive(Debug)]
pub struct LevelProgression {
    config: DifficultyConfig,
    min_block_width: f32,
    mode: GameMode,
    level: u32,
    base_position: Option<f32>,
    rng: fastrand::Rng,
}

impl LevelProgression {
    #[must_use]
    pub fn new(config: DifficultyConfig, min_block_width: f32) -> Self {
        let rng = match config.seed {
            Some(seed) => fastrand::Rng::with_seed(seed),
            None => fastrand::Rng::new(),
        };

        Self {
            level: config.starting_level,
            config,
            min_block_width,
            mode: GameMode::Classic,
            base_position: None,
            rng,
        }
    }

    #[must_use]
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    #[must_use]
    pub fn base_position(&self) -> Option<f32> {
        self.base_position
    }

    fn levels_completed(&self) -> f32 {
        self.level.saturating_sub(self.config.starting_level) as f32
    }
}

impl DifficultyController for LevelProgression {
    fn current_speed(&self) -> f32 {
        let base = match self.mode {
            GameMode::Classic => self.config.base_speed,
            GameMode::Hardcore => self.config.base_speed * self.config.hardcore_speed_multiplier,
        };
        (base + self.config.speed_step * self.levels_completed()).min(self.config.max_speed)
    }

    fn level(&self) -> u32 {
        self.level
    }

    fn hit_window_tolerance(&self) -> f32 {
        (self.config.perfect_tolerance - self.config.tolerance_step * self.levels_completed())
            .max(self.config.min_tolerance)
    }

    fn block_width_for_level(&mut self, previous_width: f32) -> f32 {
        match self.mode {
            GameMode::Classic => previous_width,
            GameMode::Hardcore => {
                (previous_width - self.config.hardcore_width_step).max(self.min_block_width)
            }
        }
    }

    fn should_apply_forced_drop(&mut self) -> bool {
        if self.mode != GameMode::Hardcore || self.level < self.config.forced_drop_min_level {
            return false;
        }
        self.rng.f32() < self.config.forced_drop_chance
    }

    fn set_base_position(&mut self, x: f32) {
        debug!("Tower base established at x = {x:.1}");
        self.base_position = Some(x);
    }

    fn complete_level(&mut self) {
        self.level = (self.level + 1).min(self.config.max_level);
        debug!(
            "Level {} (speed {:.1}, tolerance {:.2})",
            self.level,
            self.current_speed(),
            self.hit_window_tolerance()
        );
    }

    fn start_new_game(&mut self, mode: GameMode) {
        self.mode = mode;
        self.level = self.config.starting_level;
        self.base_position = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_caps_at_max() {
        let config = DifficultyConfig {
            max_level: 3,
            ..DifficultyConfig::default()
        };
        let mut progression = LevelProgression::new(config, 10.0);
        progression.start_new_game(GameMode::Classic);

        for _ in 0..10 {
            progression.complete_level();
        }

        assert_eq!(progression.level(), 3);
    }
}
