//! Action scaffold generator
//!
//! Turns a requested action name into a source file:
//! 1. Validate the name
//! 2. Resolve `output_root/<name>.<extension>`
//! 3. Refuse to replace an existing file unless forced
//! 4. Load and render the stub
//! 5. Write the result atomically

use std::path::{Path, PathBuf};

use super::name::ActionName;
use super::stub::{self, StubSource};
use super::writer::write_atomic;
use crate::error::ScaffoldError;

/// Extension of generated actions unless configured otherwise
pub const DEFAULT_EXTENSION: &str = "rs";

/// Everything needed to generate one action
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    name: ActionName,
    namespace: String,
    output_root: PathBuf,
    extension: String,
    force: bool,
}

impl GenerationRequest {
    /// Build a request, validating the name
    ///
    /// # Errors
    ///
    /// Returns [`ScaffoldError::InvalidName`] if `name` is not a valid
    /// identifier.
    pub fn new(
        name: &str,
        output_root: impl Into<PathBuf>,
        namespace: impl Into<String>,
    ) -> Result<Self, ScaffoldError> {
        Ok(Self {
            name: ActionName::parse(name)?,
            namespace: namespace.into(),
            output_root: output_root.into(),
            extension: DEFAULT_EXTENSION.to_string(),
            force: false,
        })
    }

    /// Use a different file extension (a leading dot is ignored)
    ///
    /// # Errors
    ///
    /// Returns [`ScaffoldError::InvalidExtension`] if `extension` contains a
    /// path separator or NUL, which would move the file out of the output
    /// root.
    pub fn with_extension(mut self, extension: &str) -> Result<Self, ScaffoldError> {
        if extension.contains(['/', '\\', '\0']) {
            return Err(ScaffoldError::InvalidExtension(extension.to_string()));
        }
        self.extension = extension.trim_start_matches('.').to_string();
        Ok(self)
    }

    /// Allow replacing an existing file
    #[must_use]
    pub fn with_force(mut self, force: bool) -> Self {
        self.force = force;
        self
    }

    /// Validated action name
    #[must_use]
    pub const fn name(&self) -> &ActionName {
        &self.name
    }

    /// Namespace substituted into the stub
    #[must_use]
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Whether an existing file may be replaced
    #[must_use]
    pub const fn force(&self) -> bool {
        self.force
    }

    /// Path the action will be written to
    #[must_use]
    pub fn destination(&self) -> PathBuf {
        let file_name = if self.extension.is_empty() {
            self.name.to_string()
        } else {
            format!("{}.{}", self.name, self.extension)
        };
        self.output_root.join(file_name)
    }
}

/// A rendered action and where it lives
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedArtifact {
    /// Destination path
    pub path: PathBuf,
    /// Rendered source text
    pub contents: String,
    /// Whether an existing file was replaced
    pub replaced: bool,
}

/// Stub-driven action generator
#[derive(Debug, Clone, Default)]
pub struct ScaffoldGenerator {
    stub: StubSource,
}

impl ScaffoldGenerator {
    /// Create a generator reading its stub from `stub`
    #[must_use]
    pub const fn new(stub: StubSource) -> Self {
        Self { stub }
    }

    /// Stub this generator renders
    #[must_use]
    pub const fn stub(&self) -> &StubSource {
        &self.stub
    }

    /// Render an action without touching the filesystem
    ///
    /// # Errors
    ///
    /// Returns [`ScaffoldError::TemplateNotFound`], [`ScaffoldError::Read`] or
    /// [`ScaffoldError::Render`] if the stub cannot be loaded or rendered.
    pub fn render(&self, request: &GenerationRequest) -> Result<String, ScaffoldError> {
        let template = self.stub.load()?;
        stub::render(&template, request.namespace(), request.name().as_str())
    }

    /// Generate and write an action
    ///
    /// # Errors
    ///
    /// Returns [`ScaffoldError::AlreadyExists`] if the destination exists and
    /// the request is not forced, a stub error from [`Self::render`], or
    /// [`ScaffoldError::Write`] if the file cannot be written. Nothing is left
    /// at the destination after a failure.
    pub fn generate(&self, request: &GenerationRequest) -> Result<GeneratedArtifact, ScaffoldError> {
        let path = request.destination();
        let replaced = path.exists();
        if replaced && !request.force() {
            return Err(ScaffoldError::AlreadyExists(path));
        }

        tracing::debug!(
            name = %request.name(),
            path = %path.display(),
            stub = ?self.stub,
            "generating action"
        );

        let contents = self.render(request)?;
        write_atomic(&path, &contents, request.force())?;

        tracing::info!(path = %path.display(), replaced, "action written");

        Ok(GeneratedArtifact {
            path,
            contents,
            replaced,
        })
    }
}

/// Generate an action from the bundled stub
///
/// Writes `output_root/<requested_name>.rs`, creating `output_root` if
/// needed. Never replaces an existing file.
///
/// # Errors
///
/// Returns [`ScaffoldError::InvalidName`] for a malformed name,
/// [`ScaffoldError::AlreadyExists`] if the file exists, or
/// [`ScaffoldError::Write`] if it cannot be written.
///
/// # Example
///
/// ```rust,no_run
/// # fn example() -> Result<(), acton_actions::ScaffoldError> {
/// let path = acton_actions::generate("CreateUser", "src/actions", "crate::actions")?;
/// assert!(path.ends_with("CreateUser.rs"));
/// # Ok(())
/// # }
/// ```
pub fn generate(
    requested_name: &str,
    output_root: impl AsRef<Path>,
    namespace: &str,
) -> Result<PathBuf, ScaffoldError> {
    let request = GenerationRequest::new(requested_name, output_root.as_ref(), namespace)?;
    ScaffoldGenerator::default()
        .generate(&request)
        .map(|artifact| artifact.path)
}
