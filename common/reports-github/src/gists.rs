//! Gist operations

use crate::client::{DEFAULT_ACCEPTED_STATUSES, GitHubClient, Method};
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A created gist
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Gist {
    pub url: String,
}

#[derive(Serialize)]
pub(crate) struct CreateGistPayload<'a> {
    description: &'a str,
    public: bool,
    files: BTreeMap<&'a str, GistFile<'a>>,
}

#[derive(Serialize)]
struct GistFile<'a> {
    content: &'a str,
}

#[derive(Deserialize)]
struct GistResponse {
    html_url: String,
}

impl GitHubClient {
    /// Create a private gist holding a single file
    ///
    /// # Arguments
    /// * `description` - Gist description
    /// * `filename` - Name of the single file in the gist
    /// * `contents` - File contents
    ///
    /// # Returns
    /// A [`Gist`] pointing at the gist's page on GitHub
    pub async fn create_private_gist(
        &self,
        description: &str,
        filename: &str,
        contents: &str,
    ) -> Result<Gist> {
        let payload = CreateGistPayload {
            description,
            public: false,
            files: BTreeMap::from([(filename, GistFile { content: contents })]),
        };
        let body = serde_json::to_value(&payload)?;

        let url = self.url("/gists");
        let response = self
            .perform(Method::Post, &url, Some(&body), DEFAULT_ACCEPTED_STATUSES)
            .await?;

        let created: GistResponse = response.json()?;
        Ok(Gist {
            url: created.html_url,
        })
    }
}
