//! Action scaffolding
//!
//! Generates action source files from a stub template.

pub mod generator;
pub mod name;
pub mod stub;
pub mod writer;

pub use generator::{generate, GeneratedArtifact, GenerationRequest, ScaffoldGenerator};
pub use name::ActionName;
pub use stub::StubSource;
