//! Star commands implementation

use super::{Command, CommandContext};
use anyhow::Result;
use async_trait::async_trait;
use colored::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StarAction {
    /// Report whether the repository is starred
    Check,
    Star,
    Unstar,
}

/// Check, add or remove the authenticated user's star on a repository
pub struct StarCommand {
    /// Full repository name (`owner/name`)
    pub repo: String,
    pub action: StarAction,
}

impl StarCommand {
    /// Run the star action and render its outcome
    pub async fn report(&self, context: &CommandContext) -> Result<String> {
        let client = &context.client;
        let repo = self.repo.cyan().bold();

        let outcome = match self.action {
            StarAction::Check => {
                if client.is_starred(&self.repo).await? {
                    "starred".green()
                } else {
                    "not starred".yellow()
                }
            }
            StarAction::Star => {
                client.star(&self.repo).await?;
                "Starred".green()
            }
            StarAction::Unstar => {
                client.unstar(&self.repo).await?;
                "Unstarred".green()
            }
        };

        Ok(format!("{} | {}", repo, outcome))
    }
}

#[async_trait]
impl Command for StarCommand {
    async fn execute(&self, context: &CommandContext) -> Result<()> {
        println!("{}", self.report(context).await?);
        Ok(())
    }
}
