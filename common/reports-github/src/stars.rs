//! Star operations for the authenticated user

use crate::client::{GitHubClient, Method};
use crate::error::Result;
use crate::util::parse_repo_name;

impl GitHubClient {
    fn starred_url(&self, repo: &str) -> Result<String> {
        let full_name = parse_repo_name(repo)?;
        Ok(self.url(&format!("/user/starred/{}", full_name)))
    }

    /// Check whether the authenticated user has starred `repo` (`owner/name`)
    ///
    /// GitHub answers 204 for starred and 404 for not starred; both are
    /// successful calls.
    pub async fn is_starred(&self, repo: &str) -> Result<bool> {
        let url = self.starred_url(repo)?;
        let response = self.perform(Method::Get, &url, None, &[204, 404]).await?;
        Ok(response.status == 204)
    }

    /// Star `repo` (`owner/name`) as the authenticated user
    pub async fn star(&self, repo: &str) -> Result<()> {
        let url = self.starred_url(repo)?;
        self.perform(Method::Put, &url, None, &[204]).await?;
        Ok(())
    }

    /// Remove the authenticated user's star from `repo` (`owner/name`)
    pub async fn unstar(&self, repo: &str) -> Result<()> {
        let url = self.starred_url(repo)?;
        self.perform(Method::Delete, &url, None, &[204]).await?;
        Ok(())
    }
}
