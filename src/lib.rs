//! Reports - A CLI tool for reporting on GitHub users and repositories

pub mod commands;
pub mod config;
pub mod constants;
pub mod logging;

pub type Result<T> = anyhow::Result<T>;

// Re-export commonly used types
pub use commands::{Command, CommandContext};
pub use config::Config;
pub use reports_github::GitHubClient;
