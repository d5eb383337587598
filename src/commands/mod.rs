//! Command implementations

pub mod activity;
pub mod base;
pub mod gist;
pub mod repositories;
pub mod star;
pub mod validators;

pub use activity::ActivityCommand;
pub use base::{Command, CommandContext};
pub use gist::GistCommand;
pub use repositories::RepositoriesCommand;
pub use star::{StarAction, StarCommand};
