//! GitHub client implementation
//!
//! Every API operation goes through [`GitHubClient::perform`]: one
//! authenticated request, one response, classified against the status codes
//! the call site accepts.

use crate::error::{GitHubError, Result};
use crate::pagination;
use reqwest::header::{AUTHORIZATION, HeaderMap, LINK, USER_AGENT};
use serde::de::DeserializeOwned;
use std::fmt;
use std::sync::OnceLock;
use tracing::debug;

/// GitHub API base URL
pub const API_BASE: &str = "https://api.github.com";

/// Default User-Agent header for API requests
pub const DEFAULT_USER_AGENT: &str = concat!("reports/", env!("CARGO_PKG_VERSION"));

/// Statuses accepted by plain reads and creations
pub const DEFAULT_ACCEPTED_STATUSES: &[u16] = &[200, 201];

/// HTTP methods the client issues
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Method> for reqwest::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Delete => reqwest::Method::DELETE,
        }
    }
}

/// A response whose status was accepted by the caller
#[derive(Debug)]
pub struct ApiResponse {
    pub status: u16,
    pub headers: HeaderMap,
    pub body: String,
}

impl ApiResponse {
    /// Decode the response body as JSON
    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        Ok(serde_json::from_str(&self.body)?)
    }

    /// URL of the next page, taken from the `Link` header's `rel="next"` entry
    pub fn next_page_url(&self) -> Option<String> {
        self.headers
            .get(LINK)
            .and_then(|value| value.to_str().ok())
            .and_then(pagination::next_page_url)
    }
}

/// GitHub API client for making authenticated requests
///
/// The underlying `reqwest::Client` is created on the first request and
/// reused for the lifetime of the client.
pub struct GitHubClient {
    http: OnceLock<reqwest::Client>,
    token: String,
    base_url: String,
}

impl GitHubClient {
    /// Create a new GitHub client authenticating with `token`
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            http: OnceLock::new(),
            token: token.into(),
            base_url: API_BASE.to_string(),
        }
    }

    /// Point the client at another API root, e.g. a GitHub Enterprise instance
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build an absolute URL for an API path such as `/users/octocat/repos`
    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn http(&self) -> &reqwest::Client {
        self.http.get_or_init(reqwest::Client::new)
    }

    /// Issue a single authenticated request
    ///
    /// # Arguments
    /// * `method` - HTTP method
    /// * `url` - Fully-qualified request URL
    /// * `body` - Optional JSON request body
    /// * `accepted` - Status codes that count as success for this call
    ///
    /// # Errors
    /// Returns [`GitHubError::RequestFailure`] carrying the method, URL,
    /// status and body when the status is not in `accepted`. Transport
    /// faults are passed through as [`GitHubError::Transport`].
    pub async fn perform(
        &self,
        method: Method,
        url: &str,
        body: Option<&serde_json::Value>,
        accepted: &[u16],
    ) -> Result<ApiResponse> {
        debug!(%method, url, "sending GitHub API request");

        let mut request = self
            .http()
            .request(method.into(), url)
            .header(USER_AGENT, DEFAULT_USER_AGENT)
            .header(AUTHORIZATION, format!("token {}", self.token));

        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;
        let status = response.status().as_u16();
        let headers = response.headers().clone();
        let body = response.text().await?;

        debug!(%method, url, status, "received GitHub API response");

        if !accepted.contains(&status) {
            return Err(GitHubError::RequestFailure {
                method,
                url: url.to_string(),
                status,
                body,
            });
        }

        Ok(ApiResponse {
            status,
            headers,
            body,
        })
    }
}

impl fmt::Debug for GitHubClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GitHubClient")
            .field("base_url", &self.base_url)
            .field("token", &"<redacted>")
            .finish()
    }
}
