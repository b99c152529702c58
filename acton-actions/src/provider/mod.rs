//! Provider bootstrap
//!
//! [`boot`] is the single entry point a host calls at startup. It
//!
//! - registers the publishable assets (default config and stub),
//! - merges the action configuration for the project, and
//! - hands back an [`ActionsProvider`] whose [`ActionsProvider::make_action`]
//!   backs the `make action` command.
//!
//! # Example
//!
//! ```rust,no_run
//! # fn example() -> Result<(), acton_actions::ActionsError> {
//! let provider = acton_actions::provider::boot(".")?;
//! let artifact = provider.make_action("CreateUser", false)?;
//! println!("created {}", artifact.path.display());
//! # Ok(())
//! # }
//! ```

use std::fmt;
use std::path::{Path, PathBuf};

use crate::config::{ActionsConfig, CONFIG_PATH, DEFAULT_CONFIG};
use crate::error::{ActionsError, ScaffoldError};
use crate::scaffold::stub::{BUNDLED_STUB, STUB_PATH};
use crate::scaffold::writer::write_atomic;
use crate::scaffold::{
    ActionName, GeneratedArtifact, GenerationRequest, ScaffoldGenerator, StubSource,
};

/// Group of publishable assets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PublishTag {
    /// `config/actions.toml`
    Config,
    /// `stubs/action.stub`
    Stub,
}

impl fmt::Display for PublishTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config => f.write_str("config"),
            Self::Stub => f.write_str("stub"),
        }
    }
}

/// A bundled file the host project may copy into its own tree
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Publishable {
    /// Group the asset belongs to
    pub tag: PublishTag,
    /// Destination relative to the project root
    pub destination: &'static str,
    /// File contents
    pub contents: &'static str,
}

/// Assets registered at boot
pub const PUBLISHABLES: &[Publishable] = &[
    Publishable {
        tag: PublishTag::Config,
        destination: CONFIG_PATH,
        contents: DEFAULT_CONFIG,
    },
    Publishable {
        tag: PublishTag::Stub,
        destination: STUB_PATH,
        contents: BUNDLED_STUB,
    },
];

/// Result of publishing one asset
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PublishOutcome {
    /// Written to a fresh path
    Published(PathBuf),
    /// Existing file replaced (forced)
    Replaced(PathBuf),
    /// Existing file left alone
    Skipped(PathBuf),
}

impl PublishOutcome {
    /// Path the outcome refers to
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::Published(path) | Self::Replaced(path) | Self::Skipped(path) => path,
        }
    }
}

/// Booted provider for one project
#[derive(Debug, Clone)]
pub struct ActionsProvider {
    project_root: PathBuf,
    config: ActionsConfig,
    publishes: &'static [Publishable],
}

/// Boot the provider for the project at `project_root`
///
/// # Errors
///
/// Returns [`ActionsError::Config`] if the merged configuration is invalid.
pub fn boot(project_root: impl Into<PathBuf>) -> Result<ActionsProvider, ActionsError> {
    let project_root = project_root.into();
    let config = ActionsConfig::load(&project_root)?;

    tracing::debug!(
        project = %project_root.display(),
        namespace = %config.namespace,
        output_dir = %config.output_dir.display(),
        "actions provider booted"
    );

    Ok(ActionsProvider {
        project_root,
        config,
        publishes: PUBLISHABLES,
    })
}

impl ActionsProvider {
    /// Project the provider was booted for
    #[must_use]
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Merged configuration
    #[must_use]
    pub const fn config(&self) -> &ActionsConfig {
        &self.config
    }

    /// Registered publishable assets
    #[must_use]
    pub const fn publishes(&self) -> &'static [Publishable] {
        self.publishes
    }

    /// Generator using the project's stub
    #[must_use]
    pub fn generator(&self) -> ScaffoldGenerator {
        self.generator_for(&self.config)
    }

    /// Generate an action using the merged configuration
    ///
    /// `name` is validated, then the configured suffix is applied.
    ///
    /// # Errors
    ///
    /// See [`ScaffoldGenerator::generate`].
    pub fn make_action(&self, name: &str, force: bool) -> Result<GeneratedArtifact, ScaffoldError> {
        self.make_action_with(self.config.clone(), name, force)
    }

    /// Generate an action using an explicit configuration
    ///
    /// Used when a single invocation overrides configured values.
    ///
    /// # Errors
    ///
    /// See [`ScaffoldGenerator::generate`].
    pub fn make_action_with(
        &self,
        config: ActionsConfig,
        name: &str,
        force: bool,
    ) -> Result<GeneratedArtifact, ScaffoldError> {
        // The suffix alone must never stand in for a missing name
        let requested = ActionName::parse(name)?;
        let generator = self.generator_for(&config);
        let request = GenerationRequest::new(
            &config.qualify_name(requested.as_str()),
            config.output_dir,
            config.namespace,
        )?
        .with_extension(&config.extension)?
        .with_force(force);

        generator.generate(&request)
    }

    /// Copy publishable assets into the project
    ///
    /// `None` publishes every asset. Existing files are skipped unless
    /// `force` is set.
    ///
    /// # Errors
    ///
    /// Returns [`ScaffoldError::Write`] if an asset cannot be written.
    pub fn publish(
        &self,
        tag: Option<PublishTag>,
        force: bool,
    ) -> Result<Vec<PublishOutcome>, ScaffoldError> {
        self.publishes
            .iter()
            .filter(|asset| tag.is_none_or(|tag| asset.tag == tag))
            .map(|asset| self.publish_one(asset, force))
            .collect()
    }

    fn publish_one(&self, asset: &Publishable, force: bool) -> Result<PublishOutcome, ScaffoldError> {
        let path = self.project_root.join(asset.destination);
        let existed = path.exists();
        if existed && !force {
            tracing::debug!(path = %path.display(), tag = %asset.tag, "publish skipped");
            return Ok(PublishOutcome::Skipped(path));
        }

        match write_atomic(&path, asset.contents, force) {
            Ok(()) => {
                tracing::info!(path = %path.display(), tag = %asset.tag, "asset published");
                Ok(if existed {
                    PublishOutcome::Replaced(path)
                } else {
                    PublishOutcome::Published(path)
                })
            }
            Err(ScaffoldError::AlreadyExists(path)) => Ok(PublishOutcome::Skipped(path)),
            Err(e) => Err(e),
        }
    }

    fn generator_for(&self, config: &ActionsConfig) -> ScaffoldGenerator {
        ScaffoldGenerator::new(StubSource::resolve(
            &self.project_root,
            config.stub.as_deref(),
        ))
    }
}
