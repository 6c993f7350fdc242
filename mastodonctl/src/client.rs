//! HTTP client for communicating with a Mastodon server.

use mastodon_core::api::{ApiErrorBody, TimelineStatus};
use mastodon_core::{
    Account, AccountsQuery, HashtagPost, HashtagQuery, MastodonError, Result, Status, StatusQuery,
};
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;

/// Deadline applied to every request
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Normalize a server URL by removing trailing slashes.
fn normalize_url(url: &str) -> String {
    url.trim_end_matches('/').to_string()
}

/// HTTP client for the Mastodon REST API.
///
/// Each operation performs exactly one GET request:
/// - no retries, a failed or timed out request is returned as an error
/// - the bearer token is only attached when the query carries one
/// - non-success status codes are reported with the server's error message
///
/// # Examples
///
/// ```no_run
/// use mastodon_core::{Configuration, StatusQuery};
/// use mastodonctl::client::MastodonClient;
///
/// # async fn example() -> anyhow::Result<()> {
/// let config = Configuration::default();
/// let client = MastodonClient::new()?;
///
/// let status = client.fetch_status(&StatusQuery::new(&config, "109372")).await?;
/// println!("{} wrote {}", status.username(), status.content);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct MastodonClient {
    client: Client,
    timeout: Duration,
}

impl MastodonClient {
    /// Create a client with the default 5 second deadline.
    pub fn new() -> Result<Self> {
        Self::with_timeout(DEFAULT_TIMEOUT)
    }

    /// Create a client with a custom request deadline.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn with_timeout(timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("mastodonctl/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| MastodonError::Client(e.to_string()))?;

        Ok(Self { client, timeout })
    }

    /// The deadline applied to each request
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Map a transport error to the error taxonomy.
    fn transport_error(&self, err: reqwest::Error, endpoint: &str) -> MastodonError {
        if err.is_timeout() {
            MastodonError::Timeout {
                endpoint: endpoint.to_string(),
                timeout: self.timeout,
            }
        } else {
            MastodonError::Network {
                endpoint: endpoint.to_string(),
                reason: err.to_string(),
            }
        }
    }

    /// Process an HTTP response and decode the JSON body.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The HTTP status code indicates failure (4xx or 5xx)
    /// - The response body cannot be read
    /// - The JSON cannot be deserialized into `T`
    async fn handle_response<T: DeserializeOwned>(
        &self,
        response: Response,
        endpoint: &str,
    ) -> Result<T> {
        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| self.transport_error(e, endpoint))?;

        debug!("{} answered {} ({} bytes)", endpoint, status, text.len());

        if !status.is_success() {
            let detail = serde_json::from_str::<ApiErrorBody>(&text)
                .map(|body| body.error)
                .unwrap_or(text);
            let message = match status {
                StatusCode::NOT_FOUND => format!("Not found: {}", detail),
                StatusCode::UNAUTHORIZED => format!("Unauthorized access: {}", detail),
                StatusCode::FORBIDDEN => format!("Access forbidden: {}", detail),
                StatusCode::TOO_MANY_REQUESTS => format!("Rate limited: {}", detail),
                _ => detail,
            };
            return Err(MastodonError::Http {
                endpoint: endpoint.to_string(),
                status: status.as_u16(),
                message,
            });
        }

        serde_json::from_str(&text).map_err(|e| MastodonError::Decode {
            endpoint: endpoint.to_string(),
            reason: e.to_string(),
        })
    }

    /// Send one authenticated GET request and decode its body.
    async fn get<T: DeserializeOwned>(
        &self,
        api_url: &str,
        path: &str,
        auth_token: &str,
        endpoint: &str,
    ) -> Result<T> {
        let url = format!("{}{}", normalize_url(api_url), path);
        debug!("GET {}", url);

        let mut request = self
            .client
            .get(&url)
            .header(CONTENT_TYPE, "application/json");
        if !auth_token.is_empty() {
            request = request.bearer_auth(auth_token);
        }

        let response = request
            .send()
            .await
            .map_err(|e| self.transport_error(e, endpoint))?;

        self.handle_response(response, endpoint).await
    }

    /// Retrieve a single status by its identifier.
    ///
    /// # Errors
    ///
    /// Returns an error if the identifier is empty, without contacting the
    /// server, or if the request fails.
    pub async fn fetch_status(&self, query: &StatusQuery) -> Result<Status> {
        if query.id.trim().is_empty() {
            return Err(MastodonError::InvalidInput(
                "Status ID cannot be empty".to_string(),
            ));
        }

        let endpoint = format!("statuses/{}", query.id.trim());
        self.get(&query.api_url, &query.path(), &query.auth_token, &endpoint)
            .await
    }

    /// Search accounts by username.
    ///
    /// An empty username is forwarded as-is; the server decides what it
    /// returns. An empty result is not an error.
    pub async fn fetch_accounts(&self, query: &AccountsQuery) -> Result<Vec<Account>> {
        self.get(
            &query.api_url,
            &query.path(),
            &query.auth_token,
            "accounts/search",
        )
        .await
    }

    /// Retrieve the latest posts of a hashtag timeline.
    ///
    /// # Errors
    ///
    /// Returns an error if the hashtag is empty, without contacting the
    /// server, or if the request fails.
    pub async fn fetch_hashtag_posts(&self, query: &HashtagQuery) -> Result<Vec<HashtagPost>> {
        let tag = query.tag();
        if tag.is_empty() {
            return Err(MastodonError::InvalidInput(
                "Hashtag cannot be empty".to_string(),
            ));
        }

        let endpoint = format!("timelines/tag/{}", tag);
        let timeline: Vec<TimelineStatus> = self
            .get(&query.api_url, &query.path(), &query.auth_token, &endpoint)
            .await?;

        Ok(timeline
            .into_iter()
            .map(|entry| entry.into_hashtag_post(tag))
            .collect())
    }
}
