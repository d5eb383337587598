//! Repositories command implementation

use super::{Command, CommandContext};
use anyhow::Result;
use async_trait::async_trait;
use colored::*;
use reports_github::{ListReposOptions, Repo};
use std::collections::BTreeMap;
use std::fmt::Write;

/// List a user's public repositories with their language breakdown
pub struct RepositoriesCommand {
    pub username: String,
    /// Include forked repositories
    pub include_forks: bool,
    /// Output in JSON format for machine consumption
    pub json: bool,
}

/// A language's share of a repository
#[derive(Debug, PartialEq)]
pub struct LanguageShare {
    pub language: String,
    pub bytes: u64,
    pub percent: f64,
}

/// Languages ordered by size, largest first, with their percentage share
pub fn language_shares(languages: &BTreeMap<String, u64>) -> Vec<LanguageShare> {
    let total: u64 = languages.values().sum();

    let mut shares: Vec<LanguageShare> = languages
        .iter()
        .map(|(language, &bytes)| LanguageShare {
            language: language.clone(),
            bytes,
            percent: if total == 0 {
                0.0
            } else {
                bytes as f64 * 100.0 / total as f64
            },
        })
        .collect();
    shares.sort_by(|a, b| b.bytes.cmp(&a.bytes).then_with(|| a.language.cmp(&b.language)));
    shares
}

impl RepositoriesCommand {
    /// Render the repository listing exactly as `execute` prints it
    pub async fn report(&self, context: &CommandContext) -> Result<String> {
        let options = ListReposOptions {
            include_forks: self.include_forks,
        };
        let repos = context
            .client
            .public_repos_for_user(&self.username, options)
            .await?;

        if self.json {
            return Ok(serde_json::to_string_pretty(&repos)?);
        }

        self.render_listing(&repos)
    }

    fn render_listing(&self, repos: &[Repo]) -> Result<String> {
        let mut out = String::new();

        if repos.is_empty() {
            write!(
                out,
                "{} | {}",
                self.username.cyan().bold(),
                "No public repositories found".yellow()
            )?;
            return Ok(out);
        }

        write!(
            out,
            "{} | {} repositories",
            self.username.cyan().bold(),
            repos.len().to_string().green()
        )?;

        for repo in repos {
            write!(out, "\n\n{}", repo.name.bold())?;
            let shares = language_shares(&repo.languages);
            if shares.is_empty() {
                write!(out, "\n  {}", "no languages detected".dimmed())?;
                continue;
            }
            for share in shares {
                write!(
                    out,
                    "\n  {:<20} {:>5.1}%  ({} bytes)",
                    share.language, share.percent, share.bytes
                )?;
            }
        }

        Ok(out)
    }
}

#[async_trait]
impl Command for RepositoriesCommand {
    async fn execute(&self, context: &CommandContext) -> Result<()> {
        println!("{}", self.report(context).await?);
        Ok(())
    }
}
