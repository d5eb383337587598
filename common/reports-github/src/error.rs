//! GitHub API error types

use crate::client::Method;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GitHubError {
    /// The response status was not in the set accepted by the call site
    #[error("{method} to {url} returned {status}\n{body}")]
    RequestFailure {
        method: Method,
        url: String,
        status: u16,
        body: String,
    },

    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("GitHub API JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid repository name '{0}': expected owner/name")]
    InvalidRepoName(String),
}

impl GitHubError {
    /// Status code of a rejected response, if this is a request failure
    pub fn status(&self) -> Option<u16> {
        match self {
            GitHubError::RequestFailure { status, .. } => Some(*status),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, GitHubError>;
