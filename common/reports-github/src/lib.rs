//! GitHub API client library
//!
//! This library provides the request/response layer used by `reports`:
//! authenticated dispatch with per-call status validation, transparent
//! `Link`-header pagination, and the handful of domain operations built on
//! top of them.
//!
//! ## Modules
//!
//! - [`client`]: Core client, authenticated dispatch and status validation
//! - [`error`]: The [`GitHubError`] type
//! - [`pagination`]: `Link` header cursor extraction and page aggregation
//! - [`events`]: Public event listing
//! - [`repositories`]: Public repository listing with language breakdowns
//! - [`gists`]: Private gist creation
//! - [`stars`]: Star check, star and unstar
//! - [`util`]: Repository name parsing

mod client;
mod error;
mod events;
mod gists;
mod pagination;
mod repositories;
mod stars;
mod util;

// Re-export public API
pub use client::{
    API_BASE, ApiResponse, DEFAULT_ACCEPTED_STATUSES, DEFAULT_USER_AGENT, GitHubClient, Method,
};
pub use error::{GitHubError, Result};
pub use events::Event;
pub use gists::Gist;
pub use pagination::next_page_url;
pub use repositories::{ListReposOptions, Repo};
pub use util::parse_repo_name;
