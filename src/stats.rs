#![warn(clippy::all, clippy::pedantic)]

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::{error, info};
use serde::{Deserialize, Serialize};

use crate::difficulty::GameMode;

// Environment variable overriding the stats file location
pub const STATS_ENV_VAR: &str = "STACKBLOCKS_STATS";

/// Final numbers of one finished run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    pub mode: GameMode,
    pub score: u32,
    pub blocks: u32,
    pub perfect_stacks: u32,
    pub highest_combo: u32,
}

pub trait StatsRecorder: Send + Sync {
    fn record_game(&mut self, record: &GameRecord);

    /// Highest score seen so far, if the recorder keeps history.
    fn best_score(&self) -> Option<u32> {
        None
    }
}

/// Discards every record.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullStats;

impl StatsRecorder for NullStats {
    fn record_game(&mut self, _record: &GameRecord) {}
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LifetimeStats {
    pub games_played: u32,
    pub best_score: u32,
    pub best_height: u32,
    pub best_combo: u32,
    pub total_blocks: u64,
    pub total_perfect_stacks: u64,
    pub last_game: Option<GameRecord>,
}

impl LifetimeStats {
    pub fn absorb(&mut self, record: &GameRecord) {
        self.games_played += 1;
        self.best_score = self.best_score.max(record.score);
        self.best_height = self.best_height.max(record.blocks);
        self.best_combo = self.best_combo.max(record.highest_combo);
        self.total_blocks += u64::from(record.blocks);
        self.total_perfect_stacks += u64::from(record.perfect_stacks);
        self.last_game = Some(*record);
    }
}

/// Lifetime statistics persisted as TOML after every game.
#[derive(Debug, Clone)]
pub struct StatsStore {
    path: PathBuf,
    stats: LifetimeStats,
}

impl StatsStore {
    /// Opens the store at the default location, starting empty if the file
    /// is missing or unreadable.
    #[must_use]
    pub fn open_default() -> Self {
        let path = default_stats_path();
        match Self::open(&path) {
            Ok(store) => store,
            Err(e) => {
                error!("Failed to load stats from {}: {e:#}", path.display());
                Self {
                    path,
                    stats: LifetimeStats::default(),
                }
            }
        }
    }

    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let stats = if path.exists() {
            let contents = fs::read_to_string(&path)
                .with_context(|| format!("reading {}", path.display()))?;
            toml::from_str(&contents).with_context(|| format!("parsing {}", path.display()))?
        } else {
            LifetimeStats::default()
        };

        Ok(Self { path, stats })
    }

    #[must_use]
    pub fn stats(&self) -> &LifetimeStats {
        &self.stats
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("creating {}", parent.display()))?;
            }
        }

        let contents = toml::to_string_pretty(&self.stats).context("serializing stats")?;
        fs::write(&self.path, contents)
            .with_context(|| format!("writing {}", self.path.display()))?;
        Ok(())
    }
}

impl StatsRecorder for StatsStore {
    fn record_game(&mut self, record: &GameRecord) {
        self.stats.absorb(record);
        info!(
            "Recorded game: score {}, {} blocks, {} perfect, best combo {}",
            record.score, record.blocks, record.perfect_stacks, record.highest_combo
        );

        // Save failures are logged, not propagated
        if let Err(e) = self.save() {
            error!("Failed to save stats: {e:#}");
        }
    }

    fn best_score(&self) -> Option<u32> {
        Some(self.stats.best_score)
    }
}

#[must_use]
pub fn default_stats_path() -> PathBuf {
    if let Ok(path) = std::env::var(STATS_ENV_VAR) {
        return PathBuf::from(path);
    }

    dirs::data_dir().map_or_else(
        || PathBuf::from("stackblocks_stats.toml"),
        |dir| dir.join("stackblocks").join("stats.toml"),
    )
}
