//! acton-actions CLI library

#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic, clippy::nursery)]
#![warn(clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

pub mod commands;

use anyhow::{Context, Result};
use clap::Subcommand;
use std::path::Path;

pub use commands::{MakeCommand, PublishCommand, PublishTarget};

/// Top-level subcommand
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate code (actions)
    Make {
        /// Make subcommand to execute
        #[command(subcommand)]
        command: MakeCommand,
    },
    /// Publish the default config and stub into the project
    Publish(PublishCommand),
}

/// Boot the provider for `project` and run a command against it
///
/// # Errors
///
/// Returns an error if the configuration cannot be loaded or the command
/// fails.
pub fn run(project: &Path, command: Command) -> Result<()> {
    let provider = acton_actions::boot(project).with_context(|| {
        format!("Failed to load action configuration for {}", project.display())
    })?;

    tracing::debug!(project = %project.display(), ?command, "running command");

    match command {
        Command::Make { command } => command.execute(&provider),
        Command::Publish(command) => command.execute(&provider),
    }
}
