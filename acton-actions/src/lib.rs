//! # acton-actions
//!
//! Action scaffolding for acton projects.
//!
//! The crate ships a publishable default configuration, merges it with the
//! host project's copy at boot, and generates "action" source files from a
//! stub template.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use acton_actions::provider;
//!
//! # fn main() -> Result<(), acton_actions::ActionsError> {
//! let actions = provider::boot(".")?;
//!
//! // Copy config/actions.toml into the project for editing
//! actions.publish(Some(provider::PublishTag::Config), false)?;
//!
//! // Writes src/actions/CreateUser.rs
//! let artifact = actions.make_action("CreateUser", false)?;
//! println!("{}", artifact.path.display());
//! # Ok(())
//! # }
//! ```
//!
//! For one-off use without a project, [`generate`] renders the bundled stub
//! straight into a directory.

#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic, clippy::nursery)]
#![warn(clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

pub mod config;
pub mod error;
pub mod observability;
pub mod provider;
pub mod scaffold;

pub use config::ActionsConfig;
pub use error::{ActionsError, ScaffoldError};
pub use provider::{boot, ActionsProvider};
pub use scaffold::{generate, GeneratedArtifact, GenerationRequest, ScaffoldGenerator};

pub mod prelude {
    //! Convenience re-exports for common types
    //!
    //! ```rust
    //! use acton_actions::prelude::*;
    //! ```

    pub use crate::config::ActionsConfig;
    pub use crate::error::{ActionsError, ScaffoldError};
    pub use crate::provider::{boot, ActionsProvider, PublishOutcome, PublishTag};
    pub use crate::scaffold::{
        generate, ActionName, GeneratedArtifact, GenerationRequest, ScaffoldGenerator, StubSource,
    };
}
