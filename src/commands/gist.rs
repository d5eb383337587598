//! Gist command implementation

use super::{Command, CommandContext};
use anyhow::{Context, Result, anyhow};
use async_trait::async_trait;
use colored::*;
use reports_github::Gist;
use std::path::PathBuf;

/// Upload a local file as a private gist
pub struct GistCommand {
    pub path: PathBuf,
    pub description: Option<String>,
    /// Name of the file inside the gist; defaults to the local file name
    pub filename: Option<String>,
}

impl GistCommand {
    /// File name the gist entry will be stored under
    pub fn gist_filename(&self) -> Result<String> {
        if let Some(filename) = &self.filename {
            return Ok(filename.clone());
        }

        self.path
            .file_name()
            .and_then(|name| name.to_str())
            .map(str::to_string)
            .ok_or_else(|| anyhow!("Cannot determine a file name for {}", self.path.display()))
    }

    /// Read the file and create the private gist
    pub async fn upload(&self, context: &CommandContext) -> Result<Gist> {
        let contents = std::fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read {}", self.path.display()))?;
        let filename = self.gist_filename()?;
        let description = self.description.as_deref().unwrap_or_default();

        let gist = context
            .client
            .create_private_gist(description, &filename, &contents)
            .await?;
        Ok(gist)
    }
}

#[async_trait]
impl Command for GistCommand {
    async fn execute(&self, context: &CommandContext) -> Result<()> {
        let gist = self.upload(context).await?;
        println!(
            "{} | {} {}",
            self.gist_filename()?.cyan().bold(),
            "Gist created:".green(),
            gist.url
        );
        Ok(())
    }
}
