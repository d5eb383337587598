//! Base types and traits for the command pattern

use anyhow::Result;
use reports_github::GitHubClient;

/// Context passed to all commands
pub struct CommandContext {
    /// Authenticated GitHub API client
    pub client: GitHubClient,
}

impl CommandContext {
    pub fn new(client: GitHubClient) -> Self {
        Self { client }
    }
}

/// Trait that all commands must implement
#[async_trait::async_trait]
pub trait Command {
    /// Execute the command with the given context
    async fn execute(&self, context: &CommandContext) -> Result<()>;
}
