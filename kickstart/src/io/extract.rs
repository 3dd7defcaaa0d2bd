//! Starter archive extraction.

use std::path::Path;
use std::process::Command;
use std::time::Duration;

use anyhow::{Context, Result};
use tracing::{debug, instrument};

use crate::io::process::run_command;

/// Unpacks an archive into an existing directory.
pub trait Extractor: Sync {
    fn extract(&self, archive: &Path, destination: &Path) -> Result<()>;
}

/// [`Extractor`] that shells out to an `unzip`-compatible program.
///
/// Invoked as `<exe> -o <archive> -d <destination>`; `-o` overwrites existing
/// files instead of prompting.
#[derive(Debug, Clone)]
pub struct UnzipExtractor {
    executable: String,
    timeout: Option<Duration>,
    output_limit_bytes: usize,
}

impl UnzipExtractor {
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
}

impl Extractor for UnzipExtractor {
    #[instrument(skip_all, fields(archive = %archive.display(), destination = %destination.display()))]
    fn extract(&self, archive: &Path, destination: &Path) -> Result<()> {
        let mut cmd = Command::new(&self.executable);
        cmd.arg("-o").arg(archive).arg("-d").arg(destination);
        debug!(executable = %self.executable, "extracting archive");
        let output = run_command(cmd, self.timeout, self.output_limit_bytes)
            .with_context(|| format!("run {}", self.executable))?;
        output.ensure_success(&self.executable, self.timeout)
    }
}
