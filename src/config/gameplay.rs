use serde::{Deserialize, Serialize};

use crate::game;

// Rules the stack applies when settling blocks
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameplayConfig {
    pub play_width: f32,
    pub start_height: f32,
    pub initial_block_width: f32,
    pub min_block_width: f32,
    pub forced_shrink_step: f32,
    pub combo_growth_factor: f32,
    pub combo_growth_threshold: u32,
    pub normal_score: u32,
    pub perfect_bonus: u32,
}

impl Default for GameplayConfig {
    fn default() -> Self {
        Self {
            play_width: game::PLAY_WIDTH,
            start_height: game::START_HEIGHT,
            initial_block_width: game::INITIAL_BLOCK_WIDTH,
            min_block_width: game::MIN_BLOCK_WIDTH,
            forced_shrink_step: game::FORCED_SHRINK_STEP,
            combo_growth_factor: game::COMBO_GROWTH_FACTOR,
            combo_growth_threshold: game::COMBO_GROWTH_THRESHOLD,
            normal_score: game::NORMAL_SCORE,
            perfect_bonus: game::PERFECT_BONUS,
        }
    }
}

// Level curve used by the default difficulty controller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DifficultyConfig {
    pub starting_level: u32,
    pub max_level: u32,
    pub base_speed: f32,
    pub speed_step: f32,
    pub max_speed: f32,
    pub perfect_tolerance: f32,
    pub tolerance_step: f32,
    pub min_tolerance: f32,
    pub hardcore_speed_multiplier: f32,
    pub hardcore_width_step: f32,
    pub forced_drop_chance: f32,
    pub forced_drop_min_level: u32,
    pub seed: Option<u64>, // Fixed seed for reproducible forced drops
}

impl Default for DifficultyConfig {
    fn default() -> Self {
        Self {
            starting_level: game::STARTING_LEVEL,
            max_level: game::MAX_LEVEL,
            base_speed: game::BASE_SPEED,
            speed_step: game::SPEED_STEP,
            max_speed: game::MAX_SPEED,
            perfect_tolerance: game::PERFECT_TOLERANCE,
            tolerance_step: game::TOLERANCE_STEP,
            min_tolerance: game::MIN_TOLERANCE,
            hardcore_speed_multiplier: game::HARDCORE_SPEED_MULTIPLIER,
            hardcore_width_step: game::HARDCORE_WIDTH_STEP,
            forced_drop_chance: game::FORCED_DROP_CHANCE,
            forced_drop_min_level: game::FORCED_DROP_MIN_LEVEL,
            seed: None,
        }
    }
}
