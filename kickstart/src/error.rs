//! Failures that abort a run before the VCS and extraction branches start.
//!
//! Branch failures are not errors at this level; they are recorded in
//! [`crate::scaffold::ScaffoldOutcome`].

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScaffoldError {
    #[error("prompt failed: {0:#}")]
    Prompt(anyhow::Error),

    #[error("invalid project name: {0:#}")]
    InvalidName(anyhow::Error),

    #[error("configuration error: {0:#}")]
    Config(anyhow::Error),

    #[error("{} exists but is not a directory", path.display())]
    NotADirectory { path: PathBuf },

    #[error("create directory {}: {source}", path.display())]
    CreateDirectory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("read current directory: {0}")]
    CurrentDir(#[source] std::io::Error),
}
