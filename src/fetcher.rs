// Fetch orchestration: decide whether to trust the cache or hit the network.
//
// The cache is an explicit value owned by the caller, and the clock comes in
// as a parameter, so the whole decision is testable without touching the
// filesystem or the network. Persisting the updated cache is the caller's job.

use crate::cache::{Cache, CacheEntry};
use crate::error::{Error, Result};
use crate::github::{Event, FetchError, GitHubClient};

/// Where the network sits behind the orchestrator. Tests substitute a stub.
pub trait EventSource {
    async fn user_events(&self, username: &str) -> std::result::Result<Vec<Event>, FetchError>;
}

impl EventSource for GitHubClient {
    async fn user_events(&self, username: &str) -> std::result::Result<Vec<Event>, FetchError> {
        GitHubClient::user_events(self, username).await
    }
}

/// Resolved events plus how they were obtained. `from_cache` tells the caller
/// whether the cache was mutated and needs persisting.
#[derive(Debug)]
pub struct Activity {
    pub events: Vec<Event>,
    pub from_cache: bool,
}

/// Resolve a user's events, serving from a fresh cache entry when one exists
/// and otherwise fetching and recording the full payload under `now_ms`.
///
/// A fresh entry means no network call at all. On a miss or a stale entry
/// exactly one fetch happens; failures leave the cache untouched. A 404
/// becomes the user-facing `UserNotFound`, every other failure keeps its
/// classification.
pub async fn user_activity<S: EventSource>(
    source: &S,
    cache: &mut Cache,
    username: &str,
    now_ms: i64,
) -> Result<Activity> {
    if let Some(entry) = cache.get(username) {
        if entry.is_fresh(now_ms) {
            return Ok(Activity {
                events: entry.data.clone(),
                from_cache: true,
            });
        }
    }

    let events = source.user_events(username).await.map_err(|err| match err {
        FetchError::Http { status: 404, .. } => Error::UserNotFound(username.to_string()),
        other => other.into_error(),
    })?;

    cache.insert(
        username.to_string(),
        CacheEntry {
            timestamp: now_ms,
            data: events.clone(),
        },
    );

    Ok(Activity {
        events,
        from_cache: false,
    })
}

/// Keep only events whose kind is in the requested set, preserving order.
///
/// `None` means no filter was given; an empty or all-unknown set simply
/// matches nothing. Filtering happens after cache/network resolution, so it
/// never affects what gets cached.
pub fn filter_events(events: Vec<Event>, kinds: Option<&[String]>) -> Vec<Event> {
    match kinds {
        None => events,
        Some(kinds) => events
            .into_iter()
            .filter(|event| kinds.iter().any(|k| *k == event.kind))
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use chrono::Utc;

    use super::*;
    use crate::cache::CACHE_DURATION_MS;
    use crate::github::Repo;

    enum StubOutcome {
        Events(Vec<Event>),
        NotFound,
        Transport,
    }

    struct StubSource {
        outcome: StubOutcome,
        calls: Cell<usize>,
    }

    impl StubSource {
        fn new(outcome: StubOutcome) -> Self {
            Self {
                outcome,
                calls: Cell::new(0),
            }
        }
    }

    impl EventSource for StubSource {
        async fn user_events(
            &self,
            username: &str,
        ) -> std::result::Result<Vec<Event>, FetchError> {
            self.calls.set(self.calls.get() + 1);
            match &self.outcome {
                StubOutcome::Events(events) => Ok(events.clone()),
                StubOutcome::NotFound => Err(FetchError::Http {
                    status: 404,
                    status_text: "Not Found".to_string(),
                    url: format!("https://api.github.com/users/{}/events", username),
                }),
                StubOutcome::Transport => {
                    Err(FetchError::Transport("connection refused".to_string()))
                }
            }
        }
    }

    fn event(kind: &str, repo: &str) -> Event {
        Event {
            kind: kind.to_string(),
            repo: Repo {
                name: repo.to_string(),
            },
            created_at: Utc::now(),
        }
    }

    fn cached(cache: &mut Cache, username: &str, timestamp: i64, events: Vec<Event>) {
        cache.insert(
            username.to_string(),
            CacheEntry {
                timestamp,
                data: events,
            },
        );
    }

    #[tokio::test]
    async fn test_fresh_entry_skips_network() {
        let events = vec![event("PushEvent", "foo/bar")];
        let source = StubSource::new(StubOutcome::Transport);
        let mut cache = Cache::new();
        cached(&mut cache, "alice", 1_000, events.clone());

        let activity = user_activity(&source, &mut cache, "alice", 1_000 + CACHE_DURATION_MS - 1)
            .await
            .unwrap();

        assert_eq!(source.calls.get(), 0);
        assert!(activity.from_cache);
        assert_eq!(activity.events, events);
    }

    #[tokio::test]
    async fn test_miss_fetches_and_caches_full_payload() {
        let events = vec![event("PushEvent", "foo/bar"), event("WatchEvent", "foo/baz")];
        let source = StubSource::new(StubOutcome::Events(events.clone()));
        let mut cache = Cache::new();

        let activity = user_activity(&source, &mut cache, "alice", 5_000)
            .await
            .unwrap();

        assert_eq!(source.calls.get(), 1);
        assert!(!activity.from_cache);
        assert_eq!(activity.events, events);

        let entry = cache.get("alice").unwrap();
        assert_eq!(entry.timestamp, 5_000);
        assert_eq!(entry.data, events);
    }

    #[tokio::test]
    async fn test_entry_at_threshold_is_stale() {
        let old = vec![event("WatchEvent", "foo/old")];
        let new = vec![event("PushEvent", "foo/new")];
        let source = StubSource::new(StubOutcome::Events(new.clone()));
        let mut cache = Cache::new();
        cached(&mut cache, "alice", 1_000, old);

        let now = 1_000 + CACHE_DURATION_MS;
        let activity = user_activity(&source, &mut cache, "alice", now)
            .await
            .unwrap();

        assert_eq!(source.calls.get(), 1);
        assert_eq!(activity.events, new);
        assert_eq!(cache.get("alice").unwrap().timestamp, now);
    }

    #[tokio::test]
    async fn test_second_call_within_window_uses_cache() {
        let events = vec![event("PushEvent", "foo/bar")];
        let source = StubSource::new(StubOutcome::Events(events.clone()));
        let mut cache = Cache::new();

        let first = user_activity(&source, &mut cache, "alice", 10_000)
            .await
            .unwrap();
        let second = user_activity(&source, &mut cache, "alice", 10_500)
            .await
            .unwrap();

        assert_eq!(source.calls.get(), 1);
        assert_eq!(first.events, second.events);
        assert!(second.from_cache);
    }

    #[tokio::test]
    async fn test_404_is_user_not_found_and_cache_untouched() {
        let source = StubSource::new(StubOutcome::NotFound);
        let mut cache = Cache::new();

        let err = user_activity(&source, &mut cache, "doesnotexist", 1_000)
            .await
            .unwrap_err();

        assert!(matches!(err, Error::UserNotFound(ref name) if name == "doesnotexist"));
        assert_eq!(err.to_string(), "User doesnotexist not found");
        assert!(cache.is_empty());
    }

    #[tokio::test]
    async fn test_transport_failure_propagates() {
        let source = StubSource::new(StubOutcome::Transport);
        let mut cache = Cache::new();

        let err = user_activity(&source, &mut cache, "alice", 1_000)
            .await
            .unwrap_err();

        assert!(matches!(err, Error::Transport(_)));
        assert!(cache.is_empty());
    }

    #[test]
    fn test_filter_preserves_order_and_subsets() {
        let events = vec![
            event("PushEvent", "a"),
            event("WatchEvent", "b"),
            event("PushEvent", "c"),
        ];

        let kinds = vec!["PushEvent".to_string()];
        let filtered = filter_events(events.clone(), Some(&kinds));
        assert_eq!(filtered.len(), 2);
        assert_eq!(filtered[0].repo.name, "a");
        assert_eq!(filtered[1].repo.name, "c");

        // No filter returns everything unchanged.
        assert_eq!(filter_events(events.clone(), None), events);
    }

    #[test]
    fn test_filter_unknown_and_empty_match_nothing() {
        let events = vec![event("PushEvent", "a")];

        let unknown = vec!["BogusEvent".to_string()];
        assert!(filter_events(events.clone(), Some(&unknown)).is_empty());

        let empty: Vec<String> = Vec::new();
        assert!(filter_events(events, Some(&empty)).is_empty());
    }
}
