// GitHub API endpoint functions.
// Provides typed methods for fetching data from the GitHub REST API.

use super::client::{FetchError, GITHUB_API_BASE, GitHubClient};
use super::types::Event;

impl GitHubClient {
    /// Get a user's recent public events, most recent first (the API's
    /// default page; no pagination).
    pub async fn user_events(&self, username: &str) -> Result<Vec<Event>, FetchError> {
        let url = format!("{}/users/{}/events", GITHUB_API_BASE, username);
        self.fetch_json(&url).await
    }
}
