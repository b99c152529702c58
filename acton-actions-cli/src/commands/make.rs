//! Code generation commands

use acton_actions::ActionsProvider;
use anyhow::{Context, Result};
use clap::Subcommand;
use console::{style, Emoji};
use std::path::PathBuf;

static SUCCESS: Emoji<'_, '_> = Emoji("✓", "√");
static PACKAGE: Emoji<'_, '_> = Emoji("📦", ">>");

/// Code generation commands
#[derive(Debug, Subcommand)]
pub enum MakeCommand {
    /// Generate a new action
    ///
    /// Examples:
    ///   acton-actions make action CreateUser
    ///   acton-actions make action CreateUser --force
    ///   acton-actions make action SendInvoice --namespace crate::billing
    Action {
        /// Action name (`PascalCase`, e.g., `CreateUser`)
        name: String,

        /// Overwrite the action if it already exists
        #[arg(short, long)]
        force: bool,

        /// Namespace substituted into the stub (default: from config)
        #[arg(long)]
        namespace: Option<String>,

        /// Output directory, relative to the project (default: from config)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

impl MakeCommand {
    /// Execute the make command
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The action name is not a valid identifier
    /// - The action already exists and `--force` was not given
    /// - The stub template is missing or malformed
    /// - The file cannot be written
    pub fn execute(&self, provider: &ActionsProvider) -> Result<()> {
        match self {
            Self::Action {
                name,
                force,
                namespace,
                output,
            } => make_action(provider, name, *force, namespace.as_deref(), output.as_ref()),
        }
    }
}

fn make_action(
    provider: &ActionsProvider,
    name: &str,
    force: bool,
    namespace: Option<&str>,
    output: Option<&PathBuf>,
) -> Result<()> {
    println!(
        "\n{} Generating action: {}",
        style(PACKAGE).bold(),
        style(name).cyan().bold()
    );

    let mut config = provider.config().clone();
    if let Some(namespace) = namespace {
        config.namespace = namespace.to_string();
    }
    if let Some(output) = output {
        config.output_dir = provider.project_root().join(output);
    }
    let namespace = config.namespace.clone();

    let artifact = provider
        .make_action_with(config, name, force)
        .with_context(|| format!("Failed to generate action '{name}'"))?;

    let verb = if artifact.replaced { "Replaced" } else { "Created" };
    println!();
    println!(
        "  {} {} action file: {}",
        SUCCESS,
        verb,
        style(artifact.path.display()).green()
    );

    let module = artifact
        .path
        .file_stem()
        .map_or_else(|| name.to_string(), |stem| stem.to_string_lossy().into_owned());

    println!();
    println!("{}", style("Next steps:").bold().underlined());
    println!("  1. Declare the module next to the file:");
    println!("     {}", style(format!("pub mod {module};")).cyan());
    if !namespace.is_empty() {
        println!();
        println!("  2. Use it from the rest of the crate:");
        println!(
            "     {}",
            style(format!("use {namespace}::{module}::{module};")).cyan()
        );
    }
    println!();

    Ok(())
}
