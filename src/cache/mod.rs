// Cache module for local filesystem caching.
// Persists each user's last fetched events to avoid repeated API calls.

pub mod store;

pub use store::{CACHE_DURATION_MS, Cache, CacheEntry, cache_path, load, save};
