#![warn(clippy::all, clippy::pedantic)]

#[cfg(test)]
mod tests {
    use crate::difficulty::GameMode;
    use crate::stats::{GameRecord, LifetimeStats, NullStats, StatsRecorder, StatsStore};
    use std::fs;
    use tempfile::tempdir;

    fn record(score: u32, blocks: u32) -> GameRecord {
        GameRecord {
            mode: GameMode::Classic,
            score,
            blocks,
            perfect_stacks: 2,
            highest_combo: 3,
        }
    }

    #[test]
    fn test_absorb_tracks_bests_and_totals() {
        let mut stats = LifetimeStats::default();

        stats.absorb(&record(120, 8));
        stats.absorb(&record(80, 12));

        assert_eq!(stats.games_played, 2);
        assert_eq!(stats.best_score, 120);
        assert_eq!(stats.best_height, 12);
        assert_eq!(stats.best_combo, 3);
        assert_eq!(stats.total_blocks, 20);
        assert_eq!(stats.total_perfect_stacks, 4);
        assert_eq!(stats.last_game, Some(record(80, 12)));
    }

    #[test]
    fn test_missing_file_starts_empty() {
        let dir = tempdir().expect("Failed to create temp directory");
        let store = StatsStore::open(dir.path().join("stats.toml")).expect("open should succeed");

        assert_eq!(store.stats(), &LifetimeStats::default());
        assert_eq!(store.best_score(), Some(0));
    }

    #[test]
    fn test_record_game_persists() {
        let dir = tempdir().expect("Failed to create temp directory");
        let path = dir.path().join("nested").join("stats.toml");

        let mut store = StatsStore::open(&path).expect("open should succeed");
        store.record_game(&record(250, 15));
        assert!(path.exists(), "stats file should be written after a game");

        let reopened = StatsStore::open(&path).expect("reopen should succeed");
        assert_eq!(reopened.stats().games_played, 1);
        assert_eq!(reopened.stats().best_score, 250);
        assert_eq!(reopened.best_score(), Some(250));
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = tempdir().expect("Failed to create temp directory");
        let path = dir.path().join("stats.toml");
        fs::write(&path, "games_played = \"lots\"").expect("Failed to write test file");

        assert!(StatsStore::open(&path).is_err());
    }

    #[test]
    fn test_null_stats_keeps_nothing() {
        let mut stats = NullStats;

        stats.record_game(&record(500, 30));

        assert_eq!(stats.best_score(), None);
    }
}
