//! Configuration management for acton-actions
//!
//! Configuration is merged from several sources with clear precedence:
//!
//! 1. Environment variables (highest priority, `ACTON_ACTIONS_` prefix)
//! 2. `<project>/config/actions.toml` (the published copy, if any)
//! 3. Bundled defaults (`config/actions.toml` shipped with this crate)
//!
//! # Example Configuration
//!
//! ```toml
//! # config/actions.toml
//! namespace = "crate::domain::actions"
//! output_dir = "src/domain/actions"
//! suffix = "Action"
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use acton_actions::config::ActionsConfig;
//!
//! # fn example() -> Result<(), acton_actions::ActionsError> {
//! let config = ActionsConfig::load(".")?;
//! println!("actions go to {}", config.output_dir.display());
//! # Ok(())
//! # }
//! ```

use figment::providers::{Env, Format, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::ActionsError;

/// Bundled default configuration, also published into host projects
pub const DEFAULT_CONFIG: &str = include_str!("../../config/actions.toml");

/// Location of the published configuration, relative to the project root
pub const CONFIG_PATH: &str = "config/actions.toml";

/// Environment variable prefix
pub const ENV_PREFIX: &str = "ACTON_ACTIONS_";

/// Action scaffolding configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionsConfig {
    /// Module path substituted into generated actions (may be empty)
    pub namespace: String,

    /// Directory receiving generated actions
    pub output_dir: PathBuf,

    /// File extension of generated actions, without the dot
    pub extension: String,

    /// Suffix appended to action names that lack it
    #[serde(default)]
    pub suffix: String,

    /// Custom stub template
    #[serde(default)]
    pub stub: Option<PathBuf>,
}

impl ActionsConfig {
    /// Load and merge configuration for the project at `project_root`
    ///
    /// Relative `output_dir` and `stub` paths are resolved against
    /// `project_root`.
    ///
    /// # Errors
    ///
    /// Returns [`ActionsError::Config`] if the published file cannot be
    /// parsed or a merged value has the wrong type.
    pub fn load(project_root: impl AsRef<Path>) -> Result<Self, ActionsError> {
        let project_root = project_root.as_ref();
        let published = project_root.join(CONFIG_PATH);

        let mut figment = Figment::new().merge(Toml::string(DEFAULT_CONFIG));
        if published.exists() {
            tracing::debug!(path = %published.display(), "merging published actions config");
            figment = figment.merge(Toml::file(&published));
        }
        figment = figment.merge(Env::prefixed(ENV_PREFIX));

        let config: Self = figment.extract()?;
        Ok(config.resolved_against(project_root))
    }

    /// Load defaults, a specific file, and the environment
    ///
    /// Paths stay as written; nothing is resolved against a project root.
    ///
    /// # Errors
    ///
    /// Returns [`ActionsError::Config`] if the file contains invalid TOML or
    /// a merged value has the wrong type.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, ActionsError> {
        let config = Figment::new()
            .merge(Toml::string(DEFAULT_CONFIG))
            .merge(Toml::file(path.as_ref()))
            .merge(Env::prefixed(ENV_PREFIX))
            .extract()?;

        Ok(config)
    }

    /// Apply the configured suffix to a requested action name
    ///
    /// Names already ending in the suffix are returned unchanged.
    #[must_use]
    pub fn qualify_name(&self, name: &str) -> String {
        let name = name.trim();
        if self.suffix.is_empty() || name.ends_with(&self.suffix) {
            name.to_string()
        } else {
            format!("{name}{}", self.suffix)
        }
    }

    fn resolved_against(mut self, project_root: &Path) -> Self {
        if self.output_dir.is_relative() {
            self.output_dir = project_root.join(&self.output_dir);
        }
        self.stub = self.stub.map(|stub| {
            if stub.is_relative() {
                project_root.join(stub)
            } else {
                stub
            }
        });
        self
    }
}

impl Default for ActionsConfig {
    fn default() -> Self {
        Self {
            namespace: "crate::actions".to_string(),
            output_dir: PathBuf::from("src/actions"),
            extension: "rs".to_string(),
            suffix: String::new(),
            stub: None,
        }
    }
}
