//! Publish bundled assets into the project

use acton_actions::provider::{PublishOutcome, PublishTag};
use acton_actions::ActionsProvider;
use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use console::{style, Emoji};

static CHECK: Emoji<'_, '_> = Emoji("✓ ", "");
static SKIP: Emoji<'_, '_> = Emoji("• ", "- ");

/// Asset group selectable on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PublishTarget {
    /// `config/actions.toml`
    Config,
    /// `stubs/action.stub`
    Stub,
}

impl From<PublishTarget> for PublishTag {
    fn from(target: PublishTarget) -> Self {
        match target {
            PublishTarget::Config => Self::Config,
            PublishTarget::Stub => Self::Stub,
        }
    }
}

/// Copy the default config and stub into the project for customization
#[derive(Debug, Args)]
pub struct PublishCommand {
    /// Only publish one asset group (default: all)
    #[arg(long, value_enum)]
    pub tag: Option<PublishTarget>,

    /// Overwrite files that already exist
    #[arg(short, long)]
    pub force: bool,
}

impl PublishCommand {
    /// Execute the publish command
    ///
    /// # Errors
    ///
    /// Returns an error if an asset cannot be written.
    pub fn execute(&self, provider: &ActionsProvider) -> Result<()> {
        let outcomes = provider
            .publish(self.tag.map(PublishTag::from), self.force)
            .context("Failed to publish assets")?;

        println!();
        for outcome in &outcomes {
            match outcome {
                PublishOutcome::Published(path) => {
                    println!("  {CHECK}Published {}", style(path.display()).green());
                }
                PublishOutcome::Replaced(path) => {
                    println!("  {CHECK}Replaced {}", style(path.display()).yellow());
                }
                PublishOutcome::Skipped(path) => {
                    println!(
                        "  {SKIP}Skipped {} {}",
                        style(path.display()).dim(),
                        style("(exists, use --force to overwrite)").dim()
                    );
                }
            }
        }
        println!();

        Ok(())
    }
}
