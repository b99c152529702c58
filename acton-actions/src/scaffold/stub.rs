//! Stub template lookup and rendering

use std::borrow::Cow;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use handlebars::Handlebars;
use serde_json::json;

use crate::error::ScaffoldError;

/// Stub bundled with the crate
pub const BUNDLED_STUB: &str = include_str!("../../stubs/action.stub");

/// Location of a published stub, relative to the project root
pub const STUB_PATH: &str = "stubs/action.stub";

/// Where a stub template comes from
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum StubSource {
    /// The stub compiled into this crate
    #[default]
    Bundled,
    /// A stub file on disk
    File(PathBuf),
}

impl StubSource {
    /// Pick the stub for a project
    ///
    /// An explicitly configured path always wins, even if it does not exist,
    /// so a typo surfaces as [`ScaffoldError::TemplateNotFound`] instead of
    /// silently falling back. Otherwise a published `stubs/action.stub` is
    /// used when present, then the bundled stub.
    #[must_use]
    pub fn resolve(project_root: &Path, configured: Option<&Path>) -> Self {
        if let Some(path) = configured {
            return Self::File(path.to_path_buf());
        }

        let published = project_root.join(STUB_PATH);
        if published.is_file() {
            Self::File(published)
        } else {
            Self::Bundled
        }
    }

    /// Read the template text
    ///
    /// # Errors
    ///
    /// Returns [`ScaffoldError::TemplateNotFound`] if the file is missing and
    /// [`ScaffoldError::Read`] if it cannot be read.
    pub fn load(&self) -> Result<Cow<'static, str>, ScaffoldError> {
        match self {
            Self::Bundled => Ok(Cow::Borrowed(BUNDLED_STUB)),
            Self::File(path) => match fs::read_to_string(path) {
                Ok(text) => Ok(Cow::Owned(text)),
                Err(e) if e.kind() == io::ErrorKind::NotFound => {
                    Err(ScaffoldError::TemplateNotFound(path.clone()))
                }
                Err(e) => Err(ScaffoldError::Read {
                    path: path.clone(),
                    source: e,
                }),
            },
        }
    }
}

/// Substitute `{{namespace}}` and `{{name}}` into a stub
///
/// Rendering is strict: any other placeholder is an error. A `{{` that cannot
/// open a placeholder, such as the brace escape in `write!(f, "{{}}", x)`, is
/// copied through unchanged.
///
/// # Errors
///
/// Returns [`ScaffoldError::Render`] if the stub is not a valid template or
/// references an unknown placeholder.
pub fn render(template: &str, namespace: &str, name: &str) -> Result<String, ScaffoldError> {
    let template = escape_literal_braces(template);
    let mut handlebars = Handlebars::new();

    // Generated source code, not HTML
    handlebars.register_escape_fn(handlebars::no_escape);
    handlebars.set_strict_mode(true);

    let context = json!({
        "namespace": namespace,
        "name": name,
    });

    handlebars
        .render_template(&template, &context)
        .map_err(|e| ScaffoldError::Render(e.to_string()))
}

/// Prefix `\` to every `{{` run that is not followed by a tag
///
/// Handlebars renders `\{{` as a literal `{{`. Runs already preceded by a
/// backslash are left for Handlebars to handle.
fn escape_literal_braces(template: &str) -> Cow<'_, str> {
    let mut escaped = String::with_capacity(template.len());
    let mut rest = template;
    let mut changed = false;

    while let Some(start) = rest.find("{{") {
        let (before, braces_onward) = rest.split_at(start);
        escaped.push_str(before);

        let after = braces_onward.trim_start_matches('{');
        let opens_tag = after
            .trim_start_matches('~')
            .trim_start()
            .starts_with(|c: char| c.is_ascii_alphabetic() || "_#/^!>@.&*".contains(c));
        if !opens_tag && !escaped.ends_with('\\') {
            escaped.push('\\');
            changed = true;
        }

        escaped.push_str(&braces_onward[..braces_onward.len() - after.len()]);
        rest = after;
    }

    if changed {
        escaped.push_str(rest);
        Cow::Owned(escaped)
    } else {
        Cow::Borrowed(template)
    }
}
