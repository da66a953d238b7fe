//! Usage counter
//!
//! Tallies how often each provider link is opened. The counter is advisory
//! telemetry: its failures are reported on their own and never reach
//! classification. Every read-increment-write runs inside a lock so concurrent
//! callers cannot lose updates.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};

use crate::console_log;
use crate::error::StatsError;

pub type Counts = BTreeMap<String, u64>;

lazy_static! {
    // One lock for all file stores in the process; they may share a path.
    static ref FILE_LOCK: Mutex<()> = Mutex::new(());
}

/// Result of the counter accessor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsResponse {
    pub success: bool,
    pub provider: String,
    pub count: Option<u64>,
    pub error: Option<String>,
}

impl StatsResponse {
    pub fn from_increment(provider: &str, outcome: Result<u64, StatsError>) -> Self {
        match outcome {
            Ok(count) => Self {
                success: true,
                provider: provider.to_string(),
                count: Some(count),
                error: None,
            },
            Err(e) => Self {
                success: false,
                provider: provider.to_string(),
                count: None,
                error: Some(e.to_string()),
            },
        }
    }
}

/// In-memory counter
#[derive(Debug, Default)]
pub struct StatsCounter {
    counts: Mutex<Counts>,
}

impl StatsCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_counts(counts: Counts) -> Self {
        Self {
            counts: Mutex::new(counts),
        }
    }

    /// Add one to `key` and return the new tally
    pub fn increment(&self, key: &str) -> Result<u64, StatsError> {
        let key = normalize_key(key)?;
        let mut counts = self.counts.lock().map_err(|_| StatsError::Poisoned)?;
        Ok(bump(&mut counts, key))
    }

    pub fn get(&self, key: &str) -> Result<u64, StatsError> {
        let counts = self.counts.lock().map_err(|_| StatsError::Poisoned)?;
        Ok(counts.get(key).copied().unwrap_or(0))
    }

    pub fn snapshot(&self) -> Result<Counts, StatsError> {
        let counts = self.counts.lock().map_err(|_| StatsError::Poisoned)?;
        Ok(counts.clone())
    }

    /// Replace the tallies, e.g. with ones restored from browser storage
    pub fn replace(&self, counts: Counts) -> Result<(), StatsError> {
        let mut current = self.counts.lock().map_err(|_| StatsError::Poisoned)?;
        *current = counts;
        Ok(())
    }

    pub fn to_json(&self) -> Result<String, StatsError> {
        Ok(serde_json::to_string(&self.snapshot()?)?)
    }

    pub fn from_json(json: &str) -> Result<Self, StatsError> {
        Ok(Self::with_counts(serde_json::from_str(json)?))
    }
}

/// Counter persisted as a JSON object of `provider -> count`
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load, add one to `key`, write back
    pub fn increment(&self, key: &str) -> Result<u64, StatsError> {
        let key = normalize_key(key)?;
        let _guard = FILE_LOCK.lock().map_err(|_| StatsError::Poisoned)?;
        let mut counts = self.read_counts()?;
        let count = bump(&mut counts, key);
        self.write_counts(&counts)?;
        console_log!("{} -> {} ({})", key, count, self.path.display());
        Ok(count)
    }

    /// Current tallies; a missing file reads as no tallies
    pub fn load(&self) -> Result<Counts, StatsError> {
        let _guard = FILE_LOCK.lock().map_err(|_| StatsError::Poisoned)?;
        self.read_counts()
    }

    fn read_counts(&self) -> Result<Counts, StatsError> {
        match std::fs::read_to_string(&self.path) {
            Ok(raw) if raw.trim().is_empty() => Ok(Counts::new()),
            Ok(raw) => Ok(serde_json::from_str(&raw)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Counts::new()),
            Err(e) => Err(e.into()),
        }
    }

    fn write_counts(&self, counts: &Counts) -> Result<(), StatsError> {
        let raw = serde_json::to_string_pretty(counts)?;
        std::fs::write(&self.path, raw)?;
        Ok(())
    }
}

fn normalize_key(key: &str) -> Result<&str, StatsError> {
    let key = key.trim();
    if key.is_empty() {
        Err(StatsError::EmptyKey)
    } else {
        Ok(key)
    }
}

fn bump(counts: &mut Counts, key: &str) -> u64 {
    let entry = counts.entry(key.to_string()).or_insert(0);
    *entry += 1;
    *entry
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    // The directory is removed when the returned guard drops, even on a failed assert
    fn temp_store() -> (tempfile::TempDir, JsonFileStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("stats.json"));
        (dir, store)
    }

    #[test]
    fn test_increment_returns_new_tally() {
        let counter = StatsCounter::new();
        assert_eq!(counter.increment("moonpay").unwrap(), 1);
        assert_eq!(counter.increment("moonpay").unwrap(), 2);
        assert_eq!(counter.increment("banxa").unwrap(), 1);
        assert_eq!(counter.get("moonpay").unwrap(), 2);
        assert_eq!(counter.get("bity").unwrap(), 0);
    }

    #[test]
    fn test_empty_key_rejected() {
        let counter = StatsCounter::new();
        assert!(matches!(counter.increment("  "), Err(StatsError::EmptyKey)));
    }

    #[test]
    fn test_concurrent_increments_not_lost() {
        let counter = Arc::new(StatsCounter::new());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let counter = Arc::clone(&counter);
                thread::spawn(move || {
                    for _ in 0..100 {
                        counter.increment("changenow").unwrap();
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
        assert_eq!(counter.get("changenow").unwrap(), 800);
    }

    #[test]
    fn test_json_round_trip_keeps_tallies() {
        let counter = StatsCounter::from_json(r#"{"paybis": 4}"#).unwrap();
        counter.increment("paybis").unwrap();
        assert_eq!(counter.to_json().unwrap(), r#"{"paybis":5}"#);
    }

    #[test]
    fn test_file_store_persists() {
        let (_dir, store) = temp_store();
        assert_eq!(store.increment("simplex").unwrap(), 1);
        assert_eq!(store.increment("simplex").unwrap(), 2);
        assert_eq!(store.load().unwrap().get("simplex"), Some(&2));
    }

    #[test]
    fn test_file_store_concurrent_writers() {
        let (_dir, store) = temp_store();
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let store = store.clone();
                thread::spawn(move || {
                    for _ in 0..25 {
                        store.increment("letsexchange").unwrap();
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
        assert_eq!(store.load().unwrap().get("letsexchange"), Some(&100));
    }

    #[test]
    fn test_corrupt_file_reports_error() {
        let (_dir, store) = temp_store();
        std::fs::write(store.path(), "not json").unwrap();
        assert!(matches!(store.increment("bity"), Err(StatsError::Json(_))));
        let response = StatsResponse::from_increment("bity", store.increment("bity"));
        assert!(!response.success);
        assert!(response.count.is_none());
    }
}
