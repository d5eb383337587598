//! Repository-related operations

use crate::client::{DEFAULT_ACCEPTED_STATUSES, GitHubClient, Method};
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

/// A public repository together with its language breakdown in bytes
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Repo {
    pub name: String,
    pub languages: BTreeMap<String, u64>,
}

/// Options for [`GitHubClient::public_repos_for_user`]
#[derive(Debug, Clone, Copy, Default)]
pub struct ListReposOptions {
    /// Include forked repositories in the listing
    pub include_forks: bool,
}

impl ListReposOptions {
    pub fn with_forks(mut self) -> Self {
        self.include_forks = true;
        self
    }
}

#[derive(Deserialize)]
struct RepoListing {
    name: String,
    full_name: String,
    #[serde(default)]
    fork: bool,
}

impl GitHubClient {
    /// List public repositories of `username` with their languages
    ///
    /// Forks are dropped unless `options.include_forks` is set. Languages are
    /// fetched one repository at a time, in listing order.
    pub async fn public_repos_for_user(
        &self,
        username: &str,
        options: ListReposOptions,
    ) -> Result<Vec<Repo>> {
        let url = self.url(&format!("/users/{}/repos", username));
        let listings: Vec<RepoListing> = self.fetch_all_pages(&url).await?;

        let mut repos = Vec::with_capacity(listings.len());
        for listing in listings {
            if listing.fork && !options.include_forks {
                debug!(repo = %listing.full_name, "skipping fork");
                continue;
            }

            let languages = self.repo_languages(&listing.full_name).await?;
            repos.push(Repo {
                name: listing.name,
                languages,
            });
        }

        Ok(repos)
    }

    async fn repo_languages(&self, full_name: &str) -> Result<BTreeMap<String, u64>> {
        let url = self.url(&format!("/repos/{}/languages", full_name));
        let response = self
            .perform(Method::Get, &url, None, DEFAULT_ACCEPTED_STATUSES)
            .await?;
        response.json()
    }
}
