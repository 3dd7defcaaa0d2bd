//! Filesystem steps: project directory creation and baseline file writes.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

use crate::core::content::{ContentEngine, GITIGNORE};
use crate::core::types::ProjectName;
use crate::error::ScaffoldError;

/// What the directory step found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirStatus {
    Created,
    AlreadyExisted,
}

/// Create `path` as a directory unless one is already there.
///
/// Non-recursive: the parent must exist.
pub fn ensure_project_dir(path: &Path) -> Result<DirStatus, ScaffoldError> {
    if path.exists() {
        if !path.is_dir() {
            return Err(ScaffoldError::NotADirectory {
                path: path.to_path_buf(),
            });
        }
        debug!(path = %path.display(), "project directory already exists");
        return Ok(DirStatus::AlreadyExisted);
    }
    fs::create_dir(path).map_err(|source| ScaffoldError::CreateDirectory {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), "created project directory");
    Ok(DirStatus::Created)
}

/// Write `README.md`, overwriting any existing file.
pub fn write_readme(path: &Path, engine: &ContentEngine, name: &ProjectName) -> Result<()> {
    let body = engine.render_readme(name).context("render README")?;
    write_file(path, &body)
}

/// Write `.gitignore`, overwriting any existing file.
pub fn write_gitignore(path: &Path) -> Result<()> {
    write_file(path, GITIGNORE)
}

fn write_file(path: &Path, contents: &str) -> Result<()> {
    fs::write(path, contents).with_context(|| format!("write file {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ensure_is_idempotent() {
        let temp = tempfile::tempdir().expect("tempdir");
        let dir = temp.path().join("demo");

        assert_eq!(ensure_project_dir(&dir).expect("first"), DirStatus::Created);
        assert_eq!(
            ensure_project_dir(&dir).expect("second"),
            DirStatus::AlreadyExisted
        );
        assert!(dir.is_dir());
        let entries = fs::read_dir(temp.path()).expect("read_dir").count();
        assert_eq!(entries, 1);
    }

    #[test]
    fn ensure_rejects_existing_file() {
        let temp = tempfile::tempdir().expect("tempdir");
        let file = temp.path().join("demo");
        fs::write(&file, "not a dir").expect("write");

        let err = ensure_project_dir(&file).unwrap_err();
        assert!(matches!(err, ScaffoldError::NotADirectory { .. }));
        assert_eq!(fs::read_to_string(&file).expect("read"), "not a dir");
    }

    #[test]
    fn ensure_does_not_create_parents() {
        let temp = tempfile::tempdir().expect("tempdir");
        let nested = temp.path().join("missing").join("demo");

        let err = ensure_project_dir(&nested).unwrap_err();
        assert!(matches!(err, ScaffoldError::CreateDirectory { .. }));
        assert!(!temp.path().join("missing").exists());
    }

    #[test]
    fn writes_overwrite_existing_files() {
        let temp = tempfile::tempdir().expect("tempdir");
        let readme = temp.path().join("README.md");
        let ignore = temp.path().join(".gitignore");
        fs::write(&readme, "old readme").expect("seed");
        fs::write(&ignore, "target/\n").expect("seed");

        let name = ProjectName::new("demo").expect("name");
        write_readme(&readme, &ContentEngine::new(), &name).expect("readme");
        write_gitignore(&ignore).expect("gitignore");

        assert_eq!(
            fs::read_to_string(&readme).expect("read"),
            "# demo\n\nStarter project initialized.\n"
        );
        assert_eq!(
            fs::read_to_string(&ignore).expect("read"),
            "node_modules\n.env\n"
        );
    }
}
