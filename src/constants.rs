//! Central constants for the reports application

/// Default values for configuration
pub mod config {
    /// Default configuration file name
    pub const DEFAULT_CONFIG_FILE: &str = "reports.yaml";

    /// Environment variable holding the GitHub token
    pub const TOKEN_ENV_VAR: &str = "GITHUB_TOKEN";
}

/// Default values for logging
pub mod logging {
    /// Filter used when neither `--verbose` nor `RUST_LOG` is given
    pub const DEFAULT_FILTER: &str = "warn";

    /// Filter used with `--verbose`
    pub const VERBOSE_FILTER: &str = "warn,reports=debug,reports_github=debug";
}
