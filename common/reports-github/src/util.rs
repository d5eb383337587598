//! Utility functions for GitHub operations

use crate::error::{GitHubError, Result};

/// Normalize a repository reference to its `owner/name` full name
///
/// Accepts the full name itself as well as common GitHub URL formats:
/// - Full name: `owner/repo`
/// - SSH: `git@github.com:owner/repo.git`
/// - HTTPS: `https://github.com/owner/repo.git`
/// - Legacy: `github.com/owner/repo`
///
/// # Errors
/// Returns [`GitHubError::InvalidRepoName`] if no owner and repository name
/// can be recovered
pub fn parse_repo_name(input: &str) -> Result<String> {
    let trimmed = input.trim();
    let reference = trimmed.trim_end_matches('/').trim_end_matches(".git");
    let invalid = || GitHubError::InvalidRepoName(trimmed.to_string());

    let (owner, repo) = if reference.starts_with("git@") {
        let (_, after_colon) = reference.split_once(':').ok_or_else(invalid)?;
        after_colon.split_once('/').ok_or_else(invalid)?
    } else if reference.starts_with("https://") || reference.starts_with("http://") {
        let without_protocol = reference
            .trim_start_matches("https://")
            .trim_start_matches("http://");
        let parts: Vec<&str> = without_protocol.split('/').collect();
        if parts.len() < 3 {
            return Err(invalid());
        }
        (parts[1], parts[2])
    } else if let Some(path) = reference.strip_prefix("github.com/") {
        path.split_once('/').ok_or_else(invalid)?
    } else {
        reference.split_once('/').ok_or_else(invalid)?
    };

    let valid_part = |part: &str| {
        !part.is_empty() && !part.contains('/') && !part.chars().any(char::is_whitespace)
    };
    if !valid_part(owner) || !valid_part(repo) {
        return Err(invalid());
    }

    Ok(format!("{}/{}", owner, repo))
}
