//! Configuration validation utilities

use super::Config;
use anyhow::{Result, bail};

/// Validate a loaded configuration
pub fn validate_config(config: &Config) -> Result<()> {
    if let Some(token) = &config.token
        && token.trim().is_empty()
    {
        bail!("Config token cannot be empty; remove the key to use GITHUB_TOKEN instead");
    }

    if let Some(url) = &config.api_url {
        validate_api_url(url)?;
    }

    Ok(())
}

/// Ensure an API root is an absolute http(s) URL
pub fn validate_api_url(url: &str) -> Result<()> {
    let rest = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"));

    match rest {
        Some(host) if !host.trim_matches('/').is_empty() => Ok(()),
        _ => bail!(
            "Invalid API URL '{}': expected an absolute http:// or https:// URL",
            url
        ),
    }
}
