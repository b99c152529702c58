//! Action name validation

use std::fmt;

use crate::error::ScaffoldError;

/// Words that cannot name a generated type
const RESERVED: &[&str] = &[
    "as", "async", "await", "break", "const", "continue", "crate", "dyn", "else", "enum",
    "extern", "false", "fn", "for", "if", "impl", "in", "let", "loop", "match", "mod", "move",
    "mut", "pub", "ref", "return", "self", "Self", "static", "struct", "super", "trait", "true",
    "type", "unsafe", "use", "where", "while", "abstract", "become", "box", "do", "final", "gen",
    "macro", "override", "priv", "try", "typeof", "unsized", "virtual", "yield",
];

/// A validated action name
///
/// ASCII letters, digits and underscores, not starting with a digit, and not
/// a reserved word.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ActionName(String);

impl ActionName {
    /// Validate a requested name
    ///
    /// Surrounding whitespace is ignored.
    ///
    /// # Errors
    ///
    /// Returns [`ScaffoldError::InvalidName`] if the name is empty, starts with
    /// a digit, contains anything other than ASCII letters, digits and
    /// underscores, or is reserved.
    pub fn parse(requested: &str) -> Result<Self, ScaffoldError> {
        let name = requested.trim();
        let invalid = |reason| ScaffoldError::InvalidName {
            name: requested.to_string(),
            reason,
        };

        let Some(first) = name.chars().next() else {
            return Err(invalid("name must not be empty"));
        };
        if first.is_ascii_digit() {
            return Err(invalid("name must not start with a digit"));
        }
        if !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
            return Err(invalid(
                "name may only contain ASCII letters, digits and underscores",
            ));
        }
        if name == "_" || RESERVED.contains(&name) {
            return Err(invalid("name is reserved"));
        }

        Ok(Self(name.to_string()))
    }

    /// The validated name
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for ActionName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ActionName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_names() {
        for name in ["CreateUser", "create_user", "_Private", "A", "Action2", "snake_case_9"] {
            assert_eq!(ActionName::parse(name).unwrap().as_str(), name);
        }
    }

    #[test]
    fn test_surrounding_whitespace_is_trimmed() {
        assert_eq!(ActionName::parse("  SendInvoice\n").unwrap().as_str(), "SendInvoice");
    }

    #[test]
    fn test_invalid_names() {
        for name in [
            "",
            "   ",
            "123bad",
            "9",
            "Create User",
            "Create-User",
            "Users/CreateUser",
            "..",
            "Créer",
            "_",
            "fn",
            "Self",
            "struct",
        ] {
            let err = ActionName::parse(name).unwrap_err();
            assert!(
                matches!(err, ScaffoldError::InvalidName { .. }),
                "expected InvalidName for {name:?}, got {err:?}"
            );
        }
    }

    #[test]
    fn test_error_reports_original_input() {
        let err = ActionName::parse("123bad").unwrap_err();
        assert!(err.to_string().contains("'123bad'"));
        assert!(err.to_string().contains("digit"));
    }
}
