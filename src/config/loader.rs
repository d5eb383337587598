//! Configuration file loading and credential resolution

use super::validation;
use crate::constants::config::TOKEN_ENV_VAR;
use anyhow::{Context, Result};
use reports_github::API_BASE;
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Config {
    /// GitHub personal access token
    #[serde(default)]
    pub token: Option<String>,
    /// API root, for GitHub Enterprise instances
    #[serde(default)]
    pub api_url: Option<String>,
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a file
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file '{}'", path))?;

        let config: Config = if content.trim().is_empty() {
            Config::new()
        } else {
            serde_yaml::from_str(&content)
                .with_context(|| format!("Failed to parse config file '{}'", path))?
        };

        validation::validate_config(&config)?;
        debug!(path, "loaded config file");

        Ok(config)
    }

    /// Load configuration from a file, or fall back to defaults if it does not exist
    pub fn load_or_default(path: &str) -> Result<Self> {
        if Path::new(path).exists() {
            Self::load(path)
        } else {
            Ok(Self::new())
        }
    }

    /// Pick the token to authenticate with
    ///
    /// Precedence: explicit flag, then `GITHUB_TOKEN`, then the config file.
    /// Empty values are ignored.
    pub fn resolve_token(&self, flag: Option<String>) -> Option<String> {
        let env_token = std::env::var(TOKEN_ENV_VAR).ok();

        [flag, env_token, self.token.clone()]
            .into_iter()
            .flatten()
            .find(|token| !token.trim().is_empty())
    }

    /// Pick the API root: explicit flag, then the config file, then github.com
    pub fn resolve_api_url(&self, flag: Option<String>) -> String {
        flag.or_else(|| self.api_url.clone())
            .unwrap_or_else(|| API_BASE.to_string())
    }
}
