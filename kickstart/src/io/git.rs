//! Version-control adapter for new projects.
//!
//! The [`Vcs`] trait decouples scaffolding from the `git` binary. Tests use
//! recording fakes that never spawn processes.

use std::path::Path;
use std::process::Command;
use std::time::Duration;

use anyhow::{Context, Result};
use tracing::{debug, instrument};

use crate::io::process::run_command;

/// Version-control operations the VCS branch needs.
pub trait Vcs: Sync {
    /// Create an empty repository at `path`.
    fn init(&self, path: &Path) -> Result<()>;

    /// Stage everything under `path` and commit it with `message`.
    fn commit_all(&self, path: &Path, message: &str) -> Result<()>;
}

/// [`Vcs`] backed by a git-compatible executable.
#[derive(Debug, Clone)]
pub struct GitVcs {
    executable: String,
    timeout: Option<Duration>,
    output_limit_bytes: usize,
}

impl GitVcs {
    pub fn new(
        executable: impl Into<String>,
        timeout: Option<Duration>,
        output_limit_bytes: usize,
    ) -> Self {
        Self {
            executable: executable.into(),
            timeout,
            output_limit_bytes,
        }
    }

    fn run_checked(&self, args: &[&str], path: &Path) -> Result<()> {
        let mut cmd = Command::new(&self.executable);
        cmd.args(args).arg(path);
        self.execute(cmd, args)
    }

    fn run_in(&self, workdir: &Path, args: &[&str]) -> Result<()> {
        let mut cmd = Command::new(&self.executable);
        cmd.arg("-C").arg(workdir).args(args);
        self.execute(cmd, args)
    }

    fn execute(&self, cmd: Command, args: &[&str]) -> Result<()> {
        let label = format!("{} {}", self.executable, args.join(" "));
        let output = run_command(cmd, self.timeout, self.output_limit_bytes)
            .with_context(|| format!("run {label}"))?;
        output.ensure_success(&label, self.timeout)
    }
}

impl Vcs for GitVcs {
    #[instrument(skip_all, fields(path = %path.display()))]
    fn init(&self, path: &Path) -> Result<()> {
        debug!("initializing repository");
        self.run_checked(&["init"], path)
    }

    #[instrument(skip_all, fields(path = %path.display()))]
    fn commit_all(&self, path: &Path, message: &str) -> Result<()> {
        debug!("staging all files");
        self.run_in(path, &["add", "-A"])?;
        debug!("committing staged changes");
        self.run_in(path, &["commit", "-m", message])
    }
}
