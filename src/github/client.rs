// GitHub API HTTP client.
// Builds the preconfigured reqwest client and classifies request outcomes.

use std::time::Duration;

use reqwest::{
    Client,
    header::{ACCEPT, HeaderMap, HeaderValue, USER_AGENT},
};
use serde::de::DeserializeOwned;

use crate::error::Error;

pub const GITHUB_API_BASE: &str = "https://api.github.com";
const GITHUB_API_VERSION: &str = "2022-11-28";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Classified failure from a single fetch.
///
/// `Http` means the request completed but the server said no; the caller gets
/// the status so it can decide domain-specific handling (404 vs everything
/// else). `Transport` covers everything below that: DNS, connect, timeout,
/// and a 2xx body that does not parse as the expected payload.
#[derive(Debug)]
pub enum FetchError {
    Http {
        status: u16,
        status_text: String,
        url: String,
    },
    Transport(String),
}

impl FetchError {
    /// Promote into the application error taxonomy.
    pub fn into_error(self) -> Error {
        match self {
            FetchError::Http {
                status,
                status_text,
                url,
            } => Error::Http {
                status,
                status_text,
                url,
            },
            FetchError::Transport(message) => Error::Transport(message),
        }
    }
}

/// GitHub API client for unauthenticated public endpoints.
pub struct GitHubClient {
    client: Client,
}

impl GitHubClient {
    /// Create a new client with the standard GitHub headers and a request
    /// timeout, so a hung connection fails instead of blocking forever.
    pub fn new() -> crate::error::Result<Self> {
        let mut headers = HeaderMap::new();

        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/vnd.github+json"),
        );
        headers.insert(
            "X-GitHub-Api-Version",
            HeaderValue::from_static(GITHUB_API_VERSION),
        );
        headers.insert(USER_AGENT, HeaderValue::from_static("github-activity-cli"));

        let client = Client::builder()
            .default_headers(headers)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| Error::Transport(e.to_string()))?;

        Ok(Self { client })
    }

    /// Issue exactly one GET request and classify the outcome.
    ///
    /// No retries and no side effects beyond the network call itself.
    pub async fn fetch_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, FetchError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Http {
                status: status.as_u16(),
                status_text: status.canonical_reason().unwrap_or("Unknown").to_string(),
                url: response.url().to_string(),
            });
        }

        response
            .json()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))
    }
}
