//! Test-only fakes for the prompt, VCS, extraction, and reporting collaborators.

use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Result, anyhow};

use crate::core::paths::starter_archive_path;
use crate::core::types::StarterChoice;
use crate::io::config::KickstartConfig;
use crate::io::extract::Extractor;
use crate::io::git::Vcs;
use crate::io::prompt::Prompter;
use crate::io::report::Reporter;

/// Scratch working directory with a `templates/` folder beside it.
pub struct TestWorkspace {
    dir: tempfile::TempDir,
}

impl TestWorkspace {
    pub fn new() -> Result<Self> {
        let dir = tempfile::tempdir()?;
        fs::create_dir(dir.path().join("templates"))?;
        Ok(Self { dir })
    }

    /// Directory acting as the current working directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn templates_dir(&self) -> PathBuf {
        self.dir.path().join("templates")
    }

    /// Config pointing at this workspace's templates directory.
    pub fn config(&self) -> KickstartConfig {
        KickstartConfig {
            templates_directory: self.templates_dir(),
            ..KickstartConfig::default()
        }
    }

    /// Drop a placeholder archive for `starter` and return its path.
    pub fn add_archive(&self, starter: StarterChoice) -> Result<PathBuf> {
        let path = starter_archive_path(&self.templates_dir(), starter, "zip");
        fs::write(&path, b"PK\x05\x06")?;
        Ok(path)
    }
}

/// Prompter returning fixed answers (or a fixed error) and recording which
/// prompts were shown.
pub struct ScriptedPrompter {
    answers: Result<(String, StarterChoice), String>,
    asked: RefCell<Vec<&'static str>>,
}

impl ScriptedPrompter {
    pub fn answering(name: &str, starter: StarterChoice) -> Self {
        Self {
            answers: Ok((name.to_string(), starter)),
            asked: RefCell::new(Vec::new()),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            answers: Err(message.to_string()),
            asked: RefCell::new(Vec::new()),
        }
    }

    pub fn asked(&self) -> Vec<&'static str> {
        self.asked.borrow().clone()
    }
}

impl Prompter for ScriptedPrompter {
    fn project_name(&self) -> Result<String> {
        self.asked.borrow_mut().push("name");
        match &self.answers {
            Ok((name, _)) => Ok(name.clone()),
            Err(msg) => Err(anyhow!("{msg}")),
        }
    }

    fn starter(&self, choices: &[StarterChoice]) -> Result<StarterChoice> {
        self.asked.borrow_mut().push("starter");
        match &self.answers {
            Ok((_, starter)) if choices.contains(starter) => Ok(*starter),
            Ok((_, starter)) => Err(anyhow!("{starter} not offered")),
            Err(msg) => Err(anyhow!("{msg}")),
        }
    }
}

/// A commit as seen by [`RecordingVcs`]: target dir, message, and the file
/// names present at commit time (sorted).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCommit {
    pub path: PathBuf,
    pub message: String,
    pub files: Vec<String>,
}

/// [`Vcs`] fake that records calls and can fail either step.
#[derive(Default)]
pub struct RecordingVcs {
    init_error: Option<String>,
    commit_error: Option<String>,
    inits: Mutex<Vec<PathBuf>>,
    commits: Mutex<Vec<RecordedCommit>>,
}

impl RecordingVcs {
    pub fn succeeding() -> Self {
        Self::default()
    }

    pub fn failing_init(message: &str) -> Self {
        Self {
            init_error: Some(message.to_string()),
            ..Self::default()
        }
    }

    pub fn failing_commit(message: &str) -> Self {
        Self {
            commit_error: Some(message.to_string()),
            ..Self::default()
        }
    }

    pub fn inits(&self) -> Vec<PathBuf> {
        self.inits.lock().expect("inits lock").clone()
    }

    pub fn commits(&self) -> Vec<RecordedCommit> {
        self.commits.lock().expect("commits lock").clone()
    }
}

impl Vcs for RecordingVcs {
    fn init(&self, path: &Path) -> Result<()> {
        self.inits.lock().expect("inits lock").push(path.to_path_buf());
        match &self.init_error {
            Some(msg) => Err(anyhow!("{msg}")),
            None => Ok(()),
        }
    }

    fn commit_all(&self, path: &Path, message: &str) -> Result<()> {
        let mut files: Vec<String> = fs::read_dir(path)?
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.file_name().to_string_lossy().to_string())
            .collect();
        files.sort();
        self.commits.lock().expect("commits lock").push(RecordedCommit {
            path: path.to_path_buf(),
            message: message.to_string(),
            files,
        });
        match &self.commit_error {
            Some(msg) => Err(anyhow!("{msg}")),
            None => Ok(()),
        }
    }
}

/// File written into the destination by [`RecordingExtractor::unpacking`].
pub const UNPACKED_MARKER: &str = "STARTER";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ExtractMode {
    Succeed,
    Fail,
    Unpack,
}

/// [`Extractor`] fake that records `(archive, destination)` pairs.
pub struct RecordingExtractor {
    mode: ExtractMode,
    message: String,
    calls: Mutex<Vec<(PathBuf, PathBuf)>>,
}

impl RecordingExtractor {
    pub fn succeeding() -> Self {
        Self::with_mode(ExtractMode::Succeed, "")
    }

    pub fn failing(message: &str) -> Self {
        Self::with_mode(ExtractMode::Fail, message)
    }

    /// Fails like `unzip` when the archive is missing; otherwise writes
    /// [`UNPACKED_MARKER`] holding the archive file name.
    pub fn unpacking() -> Self {
        Self::with_mode(ExtractMode::Unpack, "")
    }

    fn with_mode(mode: ExtractMode, message: &str) -> Self {
        Self {
            mode,
            message: message.to_string(),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<(PathBuf, PathBuf)> {
        self.calls.lock().expect("calls lock").clone()
    }
}

impl Extractor for RecordingExtractor {
    fn extract(&self, archive: &Path, destination: &Path) -> Result<()> {
        self.calls
            .lock()
            .expect("calls lock")
            .push((archive.to_path_buf(), destination.to_path_buf()));
        match self.mode {
            ExtractMode::Succeed => Ok(()),
            ExtractMode::Fail => Err(anyhow!("{}", self.message)),
            ExtractMode::Unpack => {
                if !archive.is_file() {
                    return Err(anyhow!(
                        "cannot find or open {}",
                        archive.display()
                    ));
                }
                let name = archive
                    .file_name()
                    .map(|n| n.to_string_lossy().to_string())
                    .unwrap_or_default();
                fs::write(destination.join(UNPACKED_MARKER), name)?;
                Ok(())
            }
        }
    }
}

/// [`Reporter`] that keeps every line in order, tagged by kind.
#[derive(Default)]
pub struct RecordingReporter {
    lines: Mutex<Vec<(bool, String)>>,
}

impl RecordingReporter {
    /// All lines in emission order.
    pub fn lines(&self) -> Vec<String> {
        self.lines
            .lock()
            .expect("lines lock")
            .iter()
            .map(|(_, line)| line.clone())
            .collect()
    }

    pub fn successes(&self) -> Vec<String> {
        self.filtered(true)
    }

    pub fn failures(&self) -> Vec<String> {
        self.filtered(false)
    }

    fn filtered(&self, ok: bool) -> Vec<String> {
        self.lines
            .lock()
            .expect("lines lock")
            .iter()
            .filter(|(is_ok, _)| *is_ok == ok)
            .map(|(_, line)| line.clone())
            .collect()
    }
}

impl Reporter for RecordingReporter {
    fn success(&self, line: &str) {
        self.lines
            .lock()
            .expect("lines lock")
            .push((true, line.to_string()));
    }

    fn failure(&self, line: &str) {
        self.lines
            .lock()
            .expect("lines lock")
            .push((false, line.to_string()));
    }
}
