// Cache store for the per-username events snapshot.
// The whole mapping is one JSON file, read and rewritten wholesale.

use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::github::Event;

/// Cache file kept in the working directory.
pub const CACHE_FILE: &str = ".github_activity_cache.json";

/// How long a cached entry is served without hitting the network.
pub const CACHE_DURATION_MS: i64 = 60_000;

/// Snapshot of one user's fetched events.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CacheEntry {
    /// Wall-clock fetch time in epoch milliseconds, never backdated.
    pub timestamp: i64,
    /// Full unfiltered payload, most recent first.
    pub data: Vec<Event>,
}

impl CacheEntry {
    /// Whether this entry is still inside the freshness window. An entry
    /// exactly at the threshold counts as stale.
    pub fn is_fresh(&self, now_ms: i64) -> bool {
        now_ms - self.timestamp < CACHE_DURATION_MS
    }
}

/// Mapping from username to cached snapshot.
pub type Cache = BTreeMap<String, CacheEntry>;

/// Default cache location.
pub fn cache_path() -> PathBuf {
    PathBuf::from(CACHE_FILE)
}

/// Load the cache, treating a missing, unreadable, or unparsable file as
/// empty. Cold start is not an error, and a corrupt file is never partially
/// trusted.
pub fn load(path: &Path) -> Cache {
    let Ok(contents) = fs::read_to_string(path) else {
        return Cache::new();
    };
    serde_json::from_str(&contents).unwrap_or_default()
}

/// Persist the entire cache, overwriting the file in one operation.
///
/// Writes via a temp file and rename so a concurrent reader never sees a
/// half-written mapping; between concurrent invocations the last save wins.
/// Write failure is fatal for the invocation and propagated to the caller.
pub fn save(path: &Path, cache: &Cache) -> Result<()> {
    let json = serde_json::to_string(cache)?;

    let persist = |path: &Path| -> std::io::Result<()> {
        let temp_path = path.with_extension("tmp");
        let mut file = fs::File::create(&temp_path)?;
        file.write_all(json.as_bytes())?;
        file.sync_all()?;
        fs::rename(&temp_path, path)
    };

    persist(path).map_err(|source| Error::CachePersist {
        path: path.to_path_buf(),
        source,
    })
}
