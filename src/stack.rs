#![warn(clippy::all, clippy::pedantic)]

//! The tower: placed blocks, the falling block, and the scoring rules that
//! decide what happens when the player stops a block.
//!
//! A game moves through [`GamePhase::NotStarted`] → [`GamePhase::Playing`] →
//! [`GamePhase::GameOver`]. The only ways to mutate it are
//! [`Stack::start_game`], [`Stack::update`] and [`Stack::stop_current_block`].
//! The UI reads state through accessors or [`Stack::snapshot`] and reacts to
//! [`StackEvent`]s drained with [`Stack::drain_events`].

use std::collections::VecDeque;
use std::collections::vec_deque::Drain;
use std::fmt;

use bevy_ecs::prelude::*;
use log::{debug, info};

use crate::block::{Block, BlockColor, StackAlignment};
use crate::config::{Config, GameplayConfig};
use crate::difficulty::{DifficultyController, GameMode, LevelProgression};
use crate::stats::{GameRecord, NullStats, StatsRecorder};

/// Events kept for a caller that never drains them; the oldest are dropped first.
pub const MAX_PENDING_EVENTS: usize = 256;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum GamePhase {
    #[default]
    NotStarted,
    Playing,
    GameOver,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOverReason {
    /// The block missed the tower entirely.
    NoOverlap,
    /// What was left of the block was too narrow to build on.
    BelowMinimumWidth,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PlacementOutcome {
    Settled { perfect: bool, points: u32 },
    GameOver(GameOverReason),
    /// Nothing was falling, or the game is not running.
    Ignored,
}

impl PlacementOutcome {
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, PlacementOutcome::Settled { .. })
    }
}

/// The pieces chopped off the last imperfect placement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Overhang {
    pub left: f32,
    pub right: f32,
    /// Left edge of the block before it was trimmed.
    pub origin_x: f32,
    /// Width of the block before it was trimmed.
    pub origin_width: f32,
    pub y: f32,
    pub color: BlockColor,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StackEvent {
    GameStarted(GameMode),
    BlockSpawned { index: usize, width: f32, speed: f32 },
    BlockPlaced { index: usize, perfect: bool, points: u32 },
    Chopped(Overhang),
    ComboGrew { combo: u32, width: f32 },
    ForcedShrink { width: f32 },
    GameOver {
        reason: GameOverReason,
        score: u32,
        /// The block that ended the run.
        block: Block,
    },
}

/// Immutable copy of everything the UI may display.
#[derive(Debug, Clone, PartialEq)]
pub struct StackSnapshot {
    pub placed: Vec<Block>,
    pub falling: Option<Block>,
    pub score: u32,
    pub combo: u32,
    pub highest_combo: u32,
    pub perfect_count: u32,
    pub level: u32,
    pub phase: GamePhase,
    pub mode: GameMode,
    pub last_overhang: Option<Overhang>,
    pub play_width: f32,
}

impl StackSnapshot {
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }
}

#[derive(Resource)]
pub struct Stack {
    rules: GameplayConfig,
    difficulty: Box<dyn DifficultyController>,
    stats: Box<dyn StatsRecorder>,
    placed: Vec<Block>,
    falling: Option<Block>,
    score: u32,
    combo: u32,
    highest_combo: u32,
    perfect_count: u32,
    phase: GamePhase,
    mode: GameMode,
    last_overhang: Option<Overhang>,
    play_width: f32,
    stats_recorded: bool,
    events: VecDeque<StackEvent>,
}

impl fmt::Debug for Stack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Stack")
            .field("phase", &self.phase)
            .field("mode", &self.mode)
            .field("placed", &self.placed.len())
            .field("falling", &self.falling)
            .field("score", &self.score)
            .field("combo", &self.combo)
            .finish_non_exhaustive()
    }
}

impl Stack {
    #[must_use]
    pub fn new(
        rules: GameplayConfig,
        difficulty: Box<dyn DifficultyController>,
        stats: Box<dyn StatsRecorder>,
    ) -> Self {
        Self {
            play_width: rules.play_width,
            rules,
            difficulty,
            stats,
            placed: Vec::new(),
            falling: None,
            score: 0,
            combo: 0,
            highest_combo: 0,
            perfect_count: 0,
            phase: GamePhase::NotStarted,
            mode: GameMode::Classic,
            last_overhang: None,
            stats_recorded: false,
            events: VecDeque::new(),
        }
    }

    /// Builds a stack with the default level curve from `config`.
    #[must_use]
    pub fn from_config(config: &Config, stats: Box<dyn StatsRecorder>) -> Self {
        let difficulty =
            LevelProgression::new(config.difficulty.clone(), config.gameplay.min_block_width);
        Self::new(config.gameplay.clone(), Box::new(difficulty), stats)
    }

    /// Swaps in the gameplay rules and level curve from `config`. Takes
    /// effect from the next [`Stack::start_game`]; the stats recorder is kept.
    pub fn apply_config(&mut self, config: &Config) {
        self.difficulty = Box::new(LevelProgression::new(
            config.difficulty.clone(),
            config.gameplay.min_block_width,
        ));
        self.rules = config.gameplay.clone();
        self.play_width = self.rules.play_width;
    }

    // Accessors

    #[must_use]
    pub fn placed(&self) -> &[Block] {
        &self.placed
    }

    #[must_use]
    pub fn falling_block(&self) -> Option<&Block> {
        self.falling.as_ref()
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn combo(&self) -> u32 {
        self.combo
    }

    #[must_use]
    pub fn highest_combo(&self) -> u32 {
        self.highest_combo
    }

    #[must_use]
    pub fn perfect_count(&self) -> u32 {
        self.perfect_count
    }

    #[must_use]
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    #[must_use]
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    #[must_use]
    pub fn level(&self) -> u32 {
        self.difficulty.level()
    }

    #[must_use]
    pub fn last_overhang(&self) -> Option<&Overhang> {
        self.last_overhang.as_ref()
    }

    #[must_use]
    pub fn play_width(&self) -> f32 {
        self.play_width
    }

    #[must_use]
    pub fn rules(&self) -> &GameplayConfig {
        &self.rules
    }

    #[must_use]
    pub fn best_score(&self) -> Option<u32> {
        self.stats.best_score()
    }

    /// Top edge of the tower, or the start height when it is empty.
    #[must_use]
    pub fn tower_top(&self) -> f32 {
        self.placed
            .last()
            .map_or(self.rules.start_height, Block::top)
    }

    #[must_use]
    pub fn snapshot(&self) -> StackSnapshot {
        StackSnapshot {
            placed: self.placed.clone(),
            falling: self.falling,
            score: self.score,
            combo: self.combo,
            highest_combo: self.highest_combo,
            perfect_count: self.perfect_count,
            level: self.difficulty.level(),
            phase: self.phase,
            mode: self.mode,
            last_overhang: self.last_overhang,
            play_width: self.play_width,
        }
    }

    /// Hands over queued events, oldest first. At most
    /// [`MAX_PENDING_EVENTS`] are held between drains.
    pub fn drain_events(&mut self) -> Drain<'_, StackEvent> {
        self.events.drain(..)
    }

    #[must_use]
    pub fn pending_events(&self) -> usize {
        self.events.len()
    }

    fn push_event(&mut self, event: StackEvent) {
        if self.events.len() >= MAX_PENDING_EVENTS {
            self.events.pop_front();
        }
        self.events.push_back(event);
    }

    // Commands

    pub fn start_game(&mut self, mode: GameMode) {
        info!("Starting {} game", mode.label());

        self.placed.clear();
        self.falling = None;
        self.score = 0;
        self.combo = 0;
        self.highest_combo = 0;
        self.perfect_count = 0;
        self.last_overhang = None;
        self.stats_recorded = false;
        self.events.clear();
        self.mode = mode;

        self.difficulty.start_new_game(mode);
        self.phase = GamePhase::Playing;
        self.push_event(StackEvent::GameStarted(mode));

        self.spawn_next();
    }

    /// Puts a new block in motion above the tower. Does nothing unless a game
    /// is running and no block is already falling.
    pub fn spawn_next(&mut self) {
        if self.phase != GamePhase::Playing || self.falling.is_some() {
            return;
        }

        let index = self.placed.len();
        let previous_width = self
            .placed
            .last()
            .map_or(self.rules.initial_block_width, |top| top.width);
        let width = self.difficulty.block_width_for_level(previous_width);
        let speed = self.difficulty.current_speed();

        // Alternate the side blocks enter from
        let (x, velocity) = if index % 2 == 0 {
            (0.0, speed)
        } else {
            ((self.play_width - width).max(0.0), -speed)
        };

        let block = Block::new(
            x,
            self.tower_top(),
            width,
            velocity,
            BlockColor::cycle(index),
            self.difficulty.level(),
        );

        debug!("Spawned block {index}: width {width:.1}, speed {speed:.1}");
        self.push_event(StackEvent::BlockSpawned {
            index,
            width,
            speed,
        });
        self.falling = Some(block);
    }

    /// Advances the falling block by one frame.
    pub fn update(&mut self, tick: f32, boundary_width: f32) {
        if boundary_width > 0.0 {
            self.play_width = boundary_width;
        }
        if let Some(block) = self.falling.as_mut() {
            block.advance(tick, self.play_width);
        }
    }

    /// Stops the falling block and settles it on the tower.
    pub fn stop_current_block(&mut self) -> PlacementOutcome {
        if self.phase != GamePhase::Playing {
            return PlacementOutcome::Ignored;
        }
        let Some(mut block) = self.falling.take() else {
            return PlacementOutcome::Ignored;
        };
        block.stop();

        let Some(below) = self.placed.last().copied() else {
            return self.settle_first(block);
        };

        let tolerance = self.difficulty.hit_window_tolerance();
        let mut alignment = block.compute_alignment(&below, tolerance);
        if !alignment.has_overlap() {
            return self.end_game(GameOverReason::NoOverlap, block);
        }

        if self.difficulty.should_apply_forced_drop() {
            block.apply_forced_shrink(self.rules.forced_shrink_step, self.rules.min_block_width);
            alignment = block.compute_alignment(&below, tolerance);
            debug!("Forced shrink to width {:.1}", block.width);
            self.push_event(StackEvent::ForcedShrink { width: block.width });
        }

        let points = if alignment.is_perfect {
            self.score_perfect(&mut block, &below)
        } else {
            self.score_chop(&mut block, &alignment)
        };

        // Points stay awarded even when the placement below loses the game
        let min_width = self.rules.min_block_width;
        if alignment.overlap_width < min_width || block.width < min_width {
            return self.end_game(GameOverReason::BelowMinimumWidth, block);
        }

        let index = self.placed.len();
        self.placed.push(block);
        self.difficulty.complete_level();
        self.push_event(StackEvent::BlockPlaced {
            index,
            perfect: alignment.is_perfect,
            points,
        });

        self.spawn_next();

        PlacementOutcome::Settled {
            perfect: alignment.is_perfect,
            points,
        }
    }

    /// Reports the finished run to the stats collaborator once per game.
    pub fn record_stats(&mut self) {
        if self.stats_recorded {
            return;
        }
        self.stats_recorded = true;

        let record = self.game_record();
        self.stats.record_game(&record);
    }

    #[must_use]
    pub fn game_record(&self) -> GameRecord {
        GameRecord {
            mode: self.mode,
            score: self.score,
            blocks: u32::try_from(self.placed.len()).unwrap_or(u32::MAX),
            perfect_stacks: self.perfect_count,
            highest_combo: self.highest_combo,
        }
    }

    fn settle_first(&mut self, block: Block) -> PlacementOutcome {
        self.difficulty.set_base_position(block.center());

        let points = self.rules.normal_score;
        self.score = self.score.saturating_add(points);
        self.placed.push(block);
        self.push_event(StackEvent::BlockPlaced {
            index: 0,
            perfect: false,
            points,
        });

        self.spawn_next();

        PlacementOutcome::Settled {
            perfect: false,
            points,
        }
    }

    fn score_perfect(&mut self, block: &mut Block, below: &Block) -> u32 {
        let points = self
            .rules
            .perfect_bonus
            .saturating_mul(self.difficulty.level());
        self.score = self.score.saturating_add(points);
        self.combo += 1;
        self.perfect_count += 1;
        self.highest_combo = self.highest_combo.max(self.combo);
        self.last_overhang = None;

        block.x = below.x;

        if self.combo > self.rules.combo_growth_threshold {
            block.grow(
                self.rules.combo_growth_factor,
                self.rules.initial_block_width,
                self.play_width,
            );
            self.push_event(StackEvent::ComboGrew {
                combo: self.combo,
                width: block.width,
            });
        }

        debug!("Perfect placement, combo {}", self.combo);
        points
    }

    fn score_chop(&mut self, block: &mut Block, alignment: &StackAlignment) -> u32 {
        let points = self
            .rules
            .normal_score
            .saturating_mul(self.difficulty.level());
        self.score = self.score.saturating_add(points);
        self.combo = 0;

        let overhang = Overhang {
            left: alignment.left_overhang,
            right: alignment.right_overhang,
            origin_x: block.x,
            origin_width: block.width,
            y: block.y,
            color: block.color,
        };
        self.last_overhang = Some(overhang);
        self.push_event(StackEvent::Chopped(overhang));

        block.trim_to(alignment);

        debug!(
            "Chopped {:.1} left / {:.1} right, width now {:.1}",
            overhang.left, overhang.right, block.width
        );
        points
    }

    fn end_game(&mut self, reason: GameOverReason, block: Block) -> PlacementOutcome {
        self.phase = GamePhase::GameOver;
        self.falling = None;

        info!(
            "Game over ({reason:?}): score {}, {} blocks, highest combo {}",
            self.score,
            self.placed.len(),
            self.highest_combo
        );
        self.push_event(StackEvent::GameOver {
            reason,
            score: self.score,
            block,
        });

        self.record_stats();
        PlacementOutcome::GameOver(reason)
    }

    #[cfg(test)]
    pub(crate) fn falling_mut(&mut self) -> Option<&mut Block> {
        self.falling.as_mut()
    }
}

impl Default for Stack {
    fn default() -> Self {
        Self::from_config(&Config::default(), Box::new(NullStats))
    }
}
