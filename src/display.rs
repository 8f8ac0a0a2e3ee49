// Presentation: map raw events to human-readable summary lines.

use crate::github::{Event, EventKind};

/// Verb phrase for a known event kind.
pub fn verb(kind: EventKind) -> &'static str {
    match kind {
        EventKind::WatchEvent => "starred",
        EventKind::ForkEvent => "forked",
        EventKind::CreateEvent => "created",
        EventKind::DeleteEvent => "deleted",
        EventKind::PushEvent => "pushed to",
        EventKind::IssuesEvent => "updated an issue in",
        EventKind::IssueCommentEvent => "commented on an issue in",
        EventKind::PullRequestEvent => "made a pull request in",
        EventKind::PullRequestReviewEvent => "reviewed a pull request in",
        EventKind::PullRequestReviewCommentEvent => "commented on a pull request in",
        EventKind::PullRequestReviewThreadEvent => "started a review thread in",
        EventKind::CommitCommentEvent => "commented on a commit in",
        EventKind::ReleaseEvent => "created a release in",
        EventKind::PublicEvent => "made public",
        EventKind::MemberEvent => "updated collaborators in",
        EventKind::SponsorshipEvent => "updated sponsorship for",
    }
}

/// Verb phrase for a raw kind name. The event type set grows over time, so
/// unrecognized kinds get a generic phrase instead of failing.
pub fn verb_for(kind_name: &str) -> &'static str {
    EventKind::from_name(kind_name)
        .map(verb)
        .unwrap_or("interacted with")
}

/// One summary line for an event.
pub fn format_event(event: &Event) -> String {
    format!("- {} {}", verb_for(&event.kind), event.repo.name)
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::github::{KNOWN_KINDS, Repo};

    #[test]
    fn test_known_verbs() {
        assert_eq!(verb_for("WatchEvent"), "starred");
        assert_eq!(verb_for("PushEvent"), "pushed to");
        assert_eq!(verb_for("ReleaseEvent"), "created a release in");
    }

    #[test]
    fn test_every_known_kind_has_a_specific_verb() {
        for kind in KNOWN_KINDS {
            assert_ne!(verb(kind), "interacted with");
        }
    }

    #[test]
    fn test_unknown_kind_falls_back() {
        assert_eq!(verb_for("SomeFutureEvent"), "interacted with");
    }

    #[test]
    fn test_format_event() {
        let event = Event {
            kind: "WatchEvent".to_string(),
            repo: Repo {
                name: "foo/bar".to_string(),
            },
            created_at: Utc::now(),
        };
        assert_eq!(format_event(&event), "- starred foo/bar");

        let unknown = Event {
            kind: "SomeFutureEvent".to_string(),
            ..event
        };
        assert_eq!(format_event(&unknown), "- interacted with foo/bar");
    }
}
