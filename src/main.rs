use anyhow::Result;
use clap::{Parser, Subcommand};
use reports::commands::validators;
use reports::config::validation;
use reports::{commands::*, config::Config, constants, logging};
use reports_github::GitHubClient;
use std::path::PathBuf;
use tracing::debug;

#[derive(Parser)]
#[command(name = "reports")]
#[command(about = "Report on GitHub users' public activity and repositories")]
#[command(version)]
struct Cli {
    /// GitHub token (falls back to GITHUB_TOKEN, then the config file)
    #[arg(long, global = true)]
    token: Option<String>,

    /// Configuration file path (default: reports.yaml, if present)
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// GitHub API root, for GitHub Enterprise
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// Log API requests to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Summarize a user's recent public events
    Activity {
        /// GitHub username
        username: String,

        /// Output the event list as JSON
        #[arg(long)]
        json: bool,
    },

    /// List a user's public repositories with their languages
    #[command(alias = "repos")]
    Repositories {
        /// GitHub username
        username: String,

        /// Include forked repositories
        #[arg(long)]
        forks: bool,

        /// Output in JSON format for machine consumption
        #[arg(long)]
        json: bool,
    },

    /// Upload a file as a private gist
    Gist {
        /// File to upload
        path: PathBuf,

        /// Gist description
        #[arg(short, long)]
        description: Option<String>,

        /// File name inside the gist (default: the local file name)
        #[arg(long)]
        filename: Option<String>,
    },

    /// Check whether you have starred a repository
    Starred {
        /// Repository as owner/name or GitHub URL
        repo: String,
    },

    /// Star a repository
    Star {
        /// Repository as owner/name or GitHub URL
        repo: String,
    },

    /// Remove your star from a repository
    Unstar {
        /// Repository as owner/name or GitHub URL
        repo: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    // Validate arguments before touching credentials or the network
    let command = build_command(cli.command)?;

    let config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::load_or_default(constants::config::DEFAULT_CONFIG_FILE)?,
    };

    let token = validators::validate_token(&config.resolve_token(cli.token))?;
    let api_url = config.resolve_api_url(cli.api_url);
    validation::validate_api_url(&api_url)?;

    debug!(api_url = %api_url, "resolved GitHub API root");

    let client = GitHubClient::new(token).with_base_url(api_url);
    let context = CommandContext::new(client);
    command.execute(&context).await
}

fn build_command(command: Commands) -> Result<Box<dyn Command + Send + Sync>> {
    let command: Box<dyn Command + Send + Sync> = match command {
        Commands::Activity { username, json } => {
            validators::validate_username(&username)?;
            Box::new(ActivityCommand { username, json })
        }
        Commands::Repositories {
            username,
            forks,
            json,
        } => {
            validators::validate_username(&username)?;
            Box::new(RepositoriesCommand {
                username,
                include_forks: forks,
                json,
            })
        }
        Commands::Gist {
            path,
            description,
            filename,
        } => {
            validators::validate_gist_path(&path)?;
            validators::validate_gist_filename(&filename)?;
            Box::new(GistCommand {
                path,
                description,
                filename,
            })
        }
        Commands::Starred { repo } => star_command(&repo, StarAction::Check)?,
        Commands::Star { repo } => star_command(&repo, StarAction::Star)?,
        Commands::Unstar { repo } => star_command(&repo, StarAction::Unstar)?,
    };

    Ok(command)
}

fn star_command(repo: &str, action: StarAction) -> Result<Box<dyn Command + Send + Sync>> {
    let repo = validators::validate_repo_name(repo)?;
    Ok(Box::new(StarCommand { repo, action }))
}
