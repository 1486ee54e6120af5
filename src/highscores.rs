//! Persisted best score
//!
//! A single integer under a fixed key in the platform key-value store,
//! encoded as a decimal string. Anything unreadable degrades to 0.

use crate::platform::KeyValueStore;

/// Storage key for the persisted best score
pub const STORAGE_KEY: &str = "arena_dash_high_score";

/// Best score across runs
#[derive(Debug, Clone, Copy, Default)]
pub struct HighScore {
    best: u32,
}

impl HighScore {
    /// Read the stored value, defaulting to 0 when absent or unparsable
    pub fn load(store: &dyn KeyValueStore) -> Self {
        let best = store
            .get(STORAGE_KEY)
            .and_then(|raw| raw.trim().parse().ok())
            .unwrap_or(0);
        Self { best }
    }

    pub fn best(&self) -> u32 {
        self.best
    }

    /// Record a finished run.
    ///
    /// Persists and returns true only when the score strictly exceeds the
    /// stored best.
    pub fn record(&mut self, score: u32, store: &mut dyn KeyValueStore) -> bool {
        if score <= self.best {
            return false;
        }
        self.best = score;
        store.set(STORAGE_KEY, &score.to_string());
        log::info!("new high score {score}");
        true
    }
}
