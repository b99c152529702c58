//! Atomic file writes

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use tempfile::Builder;

use crate::error::ScaffoldError;

/// Write `contents` to `path` via a temp file in the same directory
///
/// Missing parent directories are created. Without `overwrite` the final
/// rename refuses to replace an existing file. On failure the temp file is
/// removed and `path` is untouched.
///
/// # Errors
///
/// Returns [`ScaffoldError::AlreadyExists`] if `path` exists and `overwrite`
/// is false, or [`ScaffoldError::Write`] for any filesystem failure.
pub fn write_atomic(path: &Path, contents: &str, overwrite: bool) -> Result<(), ScaffoldError> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir).map_err(|e| ScaffoldError::write(dir, e))?;

    let mut builder = Builder::new();
    builder.prefix(".acton-actions-").suffix(".tmp");
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(fs::Permissions::from_mode(0o644));
    }

    let mut tmp = builder
        .tempfile_in(dir)
        .map_err(|e| ScaffoldError::write(path, e))?;
    tmp.write_all(contents.as_bytes())
        .and_then(|()| tmp.as_file().sync_all())
        .map_err(|e| ScaffoldError::write(path, e))?;

    let persisted = if overwrite {
        tmp.persist(path)
    } else {
        tmp.persist_noclobber(path)
    };

    match persisted {
        Ok(_) => Ok(()),
        Err(e) if !overwrite && e.error.kind() == io::ErrorKind::AlreadyExists => {
            Err(ScaffoldError::AlreadyExists(path.to_path_buf()))
        }
        Err(e) => Err(ScaffoldError::write(path, e.error)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn entries(dir: &Path) -> Vec<String> {
        let mut names: Vec<_> = fs::read_dir(dir)
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }

    #[test]
    fn test_writes_and_creates_parents() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("a/b/File.rs");

        write_atomic(&path, "hello", false).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "hello");
        assert_eq!(entries(&temp.path().join("a/b")), vec!["File.rs"]);
    }

    #[test]
    fn test_refuses_to_clobber() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("File.rs");
        fs::write(&path, "original").unwrap();

        let err = write_atomic(&path, "new", false).unwrap_err();

        assert!(matches!(err, ScaffoldError::AlreadyExists(_)));
        assert_eq!(fs::read_to_string(&path).unwrap(), "original");
        // No temp file left behind
        assert_eq!(entries(temp.path()), vec!["File.rs"]);
    }

    #[test]
    fn test_overwrite_replaces() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("File.rs");
        fs::write(&path, "original").unwrap();

        write_atomic(&path, "new", true).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "new");
        assert_eq!(entries(temp.path()), vec!["File.rs"]);
    }

    #[test]
    fn test_blocked_directory_is_write_error() {
        let temp = TempDir::new().unwrap();
        let blocker = temp.path().join("out");
        fs::write(&blocker, "not a directory").unwrap();

        let err = write_atomic(&blocker.join("File.rs"), "x", false).unwrap_err();

        assert!(matches!(err, ScaffoldError::Write { .. }));
        assert_eq!(entries(temp.path()), vec!["out"]);
    }
}
