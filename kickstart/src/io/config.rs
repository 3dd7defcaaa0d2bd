//! Kickstart configuration, read from `kickstart.toml` by default.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};

/// Default location of the config file, relative to the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "kickstart.toml";

/// Kickstart configuration (TOML).
///
/// Missing fields default to values matching a stock `git` + `unzip` setup.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct KickstartConfig {
    /// Directory holding one archive per starter. Relative paths resolve
    /// against the working directory.
    pub templates_directory: PathBuf,

    /// Archive extension without the leading dot.
    pub archive_extension: String,

    /// Program invoked for `init`, `add` and `commit`.
    pub vcs_executable: String,

    /// Program invoked to unpack the starter archive.
    pub extract_executable: String,

    pub commit_message: String,

    /// Kill any child process running longer than this. Unset waits forever.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub process_timeout_secs: Option<u64>,

    /// Truncate captured child stdout/stderr beyond this many bytes.
    pub output_limit_bytes: usize,
}

impl Default for KickstartConfig {
    fn default() -> Self {
        Self {
            templates_directory: PathBuf::from("templates"),
            archive_extension: "zip".to_string(),
            vcs_executable: "git".to_string(),
            extract_executable: "unzip".to_string(),
            commit_message: "Initial commit".to_string(),
            process_timeout_secs: None,
            output_limit_bytes: 100_000,
        }
    }
}

impl KickstartConfig {
    pub fn validate(&self) -> Result<()> {
        if self.templates_directory.as_os_str().is_empty() {
            return Err(anyhow!("templates_directory must not be empty"));
        }
        if self.archive_extension.trim().is_empty() {
            return Err(anyhow!("archive_extension must not be empty"));
        }
        if self.archive_extension.starts_with('.') {
            return Err(anyhow!("archive_extension must not start with '.'"));
        }
        if self.vcs_executable.trim().is_empty() {
            return Err(anyhow!("vcs_executable must not be empty"));
        }
        if self.extract_executable.trim().is_empty() {
            return Err(anyhow!("extract_executable must not be empty"));
        }
        if self.commit_message.trim().is_empty() {
            return Err(anyhow!("commit_message must not be empty"));
        }
        if self.process_timeout_secs == Some(0) {
            return Err(anyhow!("process_timeout_secs must be > 0"));
        }
        if self.output_limit_bytes == 0 {
            return Err(anyhow!("output_limit_bytes must be > 0"));
        }
        Ok(())
    }

    pub fn process_timeout(&self) -> Option<Duration> {
        self.process_timeout_secs.map(Duration::from_secs)
    }

    /// Templates directory made absolute against `cwd`.
    pub fn templates_dir_in(&self, cwd: &Path) -> PathBuf {
        cwd.join(&self.templates_directory)
    }
}

/// Load config from a TOML file.
///
/// If the file is missing, returns `KickstartConfig::default()`.
pub fn load_config(path: &Path) -> Result<KickstartConfig> {
    if !path.exists() {
        let cfg = KickstartConfig::default();
        cfg.validate()?;
        return Ok(cfg);
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: KickstartConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()?;
    Ok(cfg)
}

/// Atomically write config to disk (temp file + rename).
pub fn write_config(path: &Path, cfg: &KickstartConfig) -> Result<()> {
    cfg.validate()?;
    let mut buf = toml::to_string_pretty(cfg).context("serialize config toml")?;
    buf.push('\n');
    write_atomic(path, &buf)
}

fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("create directory {}", parent.display()))?;
    }
    let tmp_path = path.with_extension("toml.tmp");
    fs::write(&tmp_path, contents)
        .with_context(|| format!("write temp config {}", tmp_path.display()))?;
    fs::rename(&tmp_path, path).with_context(|| format!("replace config {}", path.display()))?;
    Ok(())
}
