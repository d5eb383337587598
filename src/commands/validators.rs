//! Command argument validation utilities
//!
//! This module provides centralized validation logic for command arguments
//! after clap parsing. Everything here runs before any request is sent.

use anyhow::{Result, anyhow};
use std::path::Path;

/// Validation errors for command arguments
#[derive(Debug, PartialEq)]
pub enum CommandValidationError {
    /// Required argument was not provided
    MissingRequired {
        argument: String,
        alternatives: Vec<String>,
    },
    /// Invalid argument value
    InvalidValue {
        argument: String,
        value: String,
        reason: String,
    },
}

impl std::fmt::Display for CommandValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CommandValidationError::MissingRequired {
                argument,
                alternatives,
            } => {
                if alternatives.is_empty() {
                    write!(f, "{} is required", argument)
                } else {
                    write!(
                        f,
                        "Either {} or {} must be provided",
                        alternatives.join(", "),
                        argument
                    )
                }
            }
            CommandValidationError::InvalidValue {
                argument,
                value,
                reason,
            } => {
                write!(f, "Invalid value '{}' for {}: {}", value, argument, reason)
            }
        }
    }
}

impl std::error::Error for CommandValidationError {}

/// Convert validation error to anyhow::Error
pub fn validation_error_to_anyhow(error: CommandValidationError) -> anyhow::Error {
    anyhow!(error.to_string())
}

fn invalid(argument: &str, value: &str, reason: &str) -> anyhow::Error {
    validation_error_to_anyhow(CommandValidationError::InvalidValue {
        argument: argument.to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    })
}

/// Validate a GitHub username
///
/// Usernames end up in request paths; GitHub only allows alphanumerics and
/// hyphens in them
pub fn validate_username(username: &str) -> Result<()> {
    if username.trim().is_empty() {
        return Err(invalid(
            "username",
            username,
            "username cannot be empty or whitespace only",
        ));
    }

    if !username
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-')
    {
        return Err(invalid(
            "username",
            username,
            "username may only contain alphanumeric characters and hyphens",
        ));
    }

    Ok(())
}

/// Validate a repository reference and normalize it to `owner/name`
pub fn validate_repo_name(repo: &str) -> Result<String> {
    reports_github::parse_repo_name(repo)
        .map_err(|_| invalid("repository", repo, "expected owner/name or a GitHub URL"))
}

/// Validate the file to upload as a gist
pub fn validate_gist_path(path: &Path) -> Result<()> {
    if !path.is_file() {
        return Err(invalid(
            "file",
            &path.display().to_string(),
            "file does not exist or is not a regular file",
        ));
    }
    Ok(())
}

/// Validate an explicit gist file name
pub fn validate_gist_filename(filename: &Option<String>) -> Result<()> {
    if let Some(name) = filename {
        if name.trim().is_empty() {
            return Err(invalid(
                "filename",
                name,
                "filename cannot be empty or whitespace only",
            ));
        }

        if name.contains('/') || name.contains('\\') {
            return Err(invalid(
                "filename",
                name,
                "filename cannot contain path separators",
            ));
        }
    }
    Ok(())
}

/// Validate that a GitHub token is available from some source
pub fn validate_token(token: &Option<String>) -> Result<String> {
    match token {
        Some(token) if !token.trim().is_empty() => Ok(token.clone()),
        _ => Err(validation_error_to_anyhow(
            CommandValidationError::MissingRequired {
                argument: "GitHub token".to_string(),
                alternatives: vec![
                    "--token".to_string(),
                    "GITHUB_TOKEN environment variable".to_string(),
                    "token in the config file".to_string(),
                ],
            },
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_validate_username_valid() {
        assert!(validate_username("octocat").is_ok());
        assert!(validate_username("some-user-42").is_ok());
    }

    #[test]
    fn test_validate_username_empty() {
        let result = validate_username("   ");
        assert!(result.is_err());
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("username cannot be empty")
        );
    }

    #[test]
    fn test_validate_username_with_slash() {
        let result = validate_username("octocat/hello");
        assert!(result.is_err());
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("alphanumeric characters and hyphens")
        );
    }

    #[test]
    fn test_validate_username_rejects_url_syntax() {
        for username in ["octo?x", "octo#x", "octo%2Fx", "octo cat", "octo.cat"] {
            assert!(
                validate_username(username).is_err(),
                "expected '{}' to be rejected",
                username
            );
        }
    }

    #[test]
    fn test_validate_repo_name_normalizes() {
        assert_eq!(
            validate_repo_name("https://github.com/rust-lang/rust.git").unwrap(),
            "rust-lang/rust"
        );
        assert_eq!(validate_repo_name("a/b").unwrap(), "a/b");
    }

    #[test]
    fn test_validate_repo_name_invalid() {
        let result = validate_repo_name("just-a-name");
        assert!(result.is_err());
        assert_eq!(
            result.unwrap_err().to_string(),
            "Invalid value 'just-a-name' for repository: expected owner/name or a GitHub URL"
        );
    }

    #[test]
    fn test_validate_gist_path() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("notes.md");
        std::fs::write(&file, "hello").unwrap();

        assert!(validate_gist_path(&file).is_ok());
        assert!(validate_gist_path(dir.path()).is_err());
        assert!(validate_gist_path(&dir.path().join("missing.md")).is_err());
    }

    #[test]
    fn test_validate_gist_filename() {
        assert!(validate_gist_filename(&None).is_ok());
        assert!(validate_gist_filename(&Some("main.rs".to_string())).is_ok());
        assert!(validate_gist_filename(&Some("".to_string())).is_err());
        assert!(validate_gist_filename(&Some("src/main.rs".to_string())).is_err());
    }

    #[test]
    fn test_validate_token() {
        assert_eq!(
            validate_token(&Some("ghp_abc".to_string())).unwrap(),
            "ghp_abc"
        );

        let result = validate_token(&None);
        assert!(result.is_err());
        let message = result.unwrap_err().to_string();
        assert!(message.contains("GitHub token"));
        assert!(message.contains("--token"));

        assert!(validate_token(&Some("  ".to_string())).is_err());
    }

    #[test]
    fn test_missing_required_display_without_alternatives() {
        let err = CommandValidationError::MissingRequired {
            argument: "username".to_string(),
            alternatives: vec![],
        };
        assert_eq!(err.to_string(), "username is required");
    }
}
