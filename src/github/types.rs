// GitHub API response types.
// Defines structs for deserializing the public events feed.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single public activity record from a user's event feed.
///
/// The kind is kept as the raw string rather than an enum so that event types
/// GitHub adds later survive caching and filtering untouched; only the
/// presentation layer cares whether a kind is one of the known ones.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    #[serde(rename = "type")]
    pub kind: String,
    pub repo: Repo,
    pub created_at: DateTime<Utc>,
}

/// Repository an event happened in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Repo {
    pub name: String,
}

/// The event kinds this tool knows how to describe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    CommitCommentEvent,
    CreateEvent,
    DeleteEvent,
    ForkEvent,
    IssueCommentEvent,
    IssuesEvent,
    MemberEvent,
    PublicEvent,
    PullRequestEvent,
    PullRequestReviewEvent,
    PullRequestReviewCommentEvent,
    PullRequestReviewThreadEvent,
    PushEvent,
    ReleaseEvent,
    SponsorshipEvent,
    WatchEvent,
}

/// All known kinds, in the order they are listed in help output.
pub const KNOWN_KINDS: [EventKind; 16] = [
    EventKind::CommitCommentEvent,
    EventKind::CreateEvent,
    EventKind::DeleteEvent,
    EventKind::ForkEvent,
    EventKind::IssueCommentEvent,
    EventKind::IssuesEvent,
    EventKind::MemberEvent,
    EventKind::PublicEvent,
    EventKind::PullRequestEvent,
    EventKind::PullRequestReviewEvent,
    EventKind::PullRequestReviewCommentEvent,
    EventKind::PullRequestReviewThreadEvent,
    EventKind::PushEvent,
    EventKind::ReleaseEvent,
    EventKind::SponsorshipEvent,
    EventKind::WatchEvent,
];

impl EventKind {
    /// The wire name of this kind, as it appears in the API `type` field.
    pub fn name(&self) -> &'static str {
        match self {
            EventKind::CommitCommentEvent => "CommitCommentEvent",
            EventKind::CreateEvent => "CreateEvent",
            EventKind::DeleteEvent => "DeleteEvent",
            EventKind::ForkEvent => "ForkEvent",
            EventKind::IssueCommentEvent => "IssueCommentEvent",
            EventKind::IssuesEvent => "IssuesEvent",
            EventKind::MemberEvent => "MemberEvent",
            EventKind::PublicEvent => "PublicEvent",
            EventKind::PullRequestEvent => "PullRequestEvent",
            EventKind::PullRequestReviewEvent => "PullRequestReviewEvent",
            EventKind::PullRequestReviewCommentEvent => "PullRequestReviewCommentEvent",
            EventKind::PullRequestReviewThreadEvent => "PullRequestReviewThreadEvent",
            EventKind::PushEvent => "PushEvent",
            EventKind::ReleaseEvent => "ReleaseEvent",
            EventKind::SponsorshipEvent => "SponsorshipEvent",
            EventKind::WatchEvent => "WatchEvent",
        }
    }

    /// Look up a kind by its wire name. Unknown names return `None`.
    pub fn from_name(name: &str) -> Option<Self> {
        KNOWN_KINDS.iter().copied().find(|k| k.name() == name)
    }
}
