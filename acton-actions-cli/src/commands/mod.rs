//! CLI command implementations

pub mod make;
pub mod publish;

pub use make::MakeCommand;
pub use publish::{PublishCommand, PublishTarget};
