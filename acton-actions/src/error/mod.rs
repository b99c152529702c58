//! Error types and error handling

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while scaffolding or publishing files
#[derive(Debug, Error)]
pub enum ScaffoldError {
    /// Requested name is not a usable type identifier
    #[error("Invalid action name '{name}': {reason}")]
    InvalidName {
        /// Name as supplied by the caller
        name: String,
        /// Why the name was rejected
        reason: &'static str,
    },

    /// Configured file extension would change the destination directory
    #[error("Invalid action file extension '{0}': path separators are not allowed")]
    InvalidExtension(String),

    /// Destination is occupied and overwriting was not requested
    #[error("File already exists: {} (use --force to overwrite)", .0.display())]
    AlreadyExists(PathBuf),

    /// Stub template could not be found
    #[error("Stub template not found: {}", .0.display())]
    TemplateNotFound(PathBuf),

    /// Stub template is malformed or references unknown placeholders
    #[error("Failed to render stub template: {0}")]
    Render(String),

    /// Stub template exists but could not be read
    #[error("Failed to read stub template {}: {source}", path.display())]
    Read {
        /// Stub path
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Filesystem failure while writing
    #[error("Failed to write {}: {source}", path.display())]
    Write {
        /// Path being written
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },
}

impl ScaffoldError {
    pub(crate) fn write(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Write {
            path: path.into(),
            source,
        }
    }
}

/// Top-level error type for the provider
#[derive(Debug, Error)]
pub enum ActionsError {
    /// Configuration could not be loaded or merged
    #[error("Configuration error: {0}")]
    Config(Box<figment::Error>),

    /// Scaffolding failed
    #[error(transparent)]
    Scaffold(#[from] ScaffoldError),
}

impl From<figment::Error> for ActionsError {
    fn from(err: figment::Error) -> Self {
        Self::Config(Box::new(err))
    }
}
