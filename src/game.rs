#![warn(clippy::all, clippy::pedantic)]

// Play field dimensions in world units
pub const PLAY_WIDTH: f32 = 300.0;
pub const BLOCK_HEIGHT: f32 = 20.0;
pub const START_HEIGHT: f32 = 0.0;

// Block widths
pub const INITIAL_BLOCK_WIDTH: f32 = 150.0; // Also the cap for combo growth
pub const MIN_BLOCK_WIDTH: f32 = 10.0; // Anything narrower ends the run
pub const FORCED_SHRINK_STEP: f32 = 5.0;
pub const COMBO_GROWTH_FACTOR: f32 = 1.05; // 5% wider per perfect once the combo passes the threshold
pub const COMBO_GROWTH_THRESHOLD: u32 = 2;

// Alignment
pub const PERFECT_TOLERANCE: f32 = 2.0; // Max edge delta for a perfect placement

// Scoring (multiplied by level)
pub const NORMAL_SCORE: u32 = 10;
pub const PERFECT_BONUS: u32 = 50;

// Difficulty curve
pub const STARTING_LEVEL: u32 = 1;
pub const MAX_LEVEL: u32 = 50;
pub const BASE_SPEED: f32 = 120.0; // World units per second
pub const SPEED_STEP: f32 = 6.0;
pub const MAX_SPEED: f32 = 420.0;
pub const TOLERANCE_STEP: f32 = 0.05;
pub const MIN_TOLERANCE: f32 = 0.75;

// Hardcore mode
pub const HARDCORE_SPEED_MULTIPLIER: f32 = 1.4;
pub const HARDCORE_WIDTH_STEP: f32 = 2.0;
pub const FORCED_DROP_CHANCE: f32 = 0.15;
pub const FORCED_DROP_MIN_LEVEL: u32 = 5;
