//! Derived filesystem locations for a single scaffolding run.

use std::path::{Path, PathBuf};

use crate::core::types::{ProjectName, StarterChoice};

pub const README_FILE: &str = "README.md";
pub const IGNORE_FILE: &str = ".gitignore";

/// Archive location for a starter: `<templates_dir>/<StarterChoice>.<extension>`.
pub fn starter_archive_path(
    templates_dir: &Path,
    starter: StarterChoice,
    extension: &str,
) -> PathBuf {
    templates_dir.join(format!("{}.{}", starter.as_str(), extension))
}

/// All paths touched by a run, computed once from the inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectPaths {
    pub project_dir: PathBuf,
    pub readme_path: PathBuf,
    pub ignore_path: PathBuf,
    pub archive_path: PathBuf,
}

impl ProjectPaths {
    /// `cwd` is joined with the project name; an absolute name replaces it.
    pub fn new(
        cwd: &Path,
        name: &ProjectName,
        starter: StarterChoice,
        templates_dir: &Path,
        extension: &str,
    ) -> Self {
        let project_dir = cwd.join(name.as_str());
        Self {
            readme_path: project_dir.join(README_FILE),
            ignore_path: project_dir.join(IGNORE_FILE),
            archive_path: starter_archive_path(templates_dir, starter, extension),
            project_dir,
        }
    }
}
