// GitHub API module.
// Provides client and types for interacting with the GitHub REST API.

pub mod client;
pub mod endpoints;
pub mod types;

pub use client::{FetchError, GitHubClient};
pub use types::*;
