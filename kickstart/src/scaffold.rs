//! Orchestration for scaffolding one project.
//!
//! Sequence: ensure the project directory, then launch two independent
//! branches and join both before returning:
//!
//! - **VCS branch**: `init` → README + ignore-file → stage-all + commit.
//! - **Extraction branch**: unpack the starter archive into the project.
//!
//! A branch failure is reported once through the [`Reporter`] and recorded in
//! the [`ScaffoldOutcome`]; it never stops the sibling branch. Nothing is
//! retried or rolled back.

use std::fmt;
use std::path::Path;
use std::thread;

use tracing::{debug, info, instrument, warn};

use crate::core::content::ContentEngine;
use crate::core::paths::ProjectPaths;
use crate::core::types::{Answers, ProjectName, StarterChoice};
use crate::error::ScaffoldError;
use crate::io::config::KickstartConfig;
use crate::io::extract::Extractor;
use crate::io::files::{DirStatus, ensure_project_dir, write_gitignore, write_readme};
use crate::io::git::Vcs;
use crate::io::report::Reporter;

/// Everything a run needs, resolved before any side effect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldPlan {
    pub name: ProjectName,
    pub starter: StarterChoice,
    pub paths: ProjectPaths,
    pub commit_message: String,
}

impl ScaffoldPlan {
    pub fn new(cwd: &Path, answers: Answers, config: &KickstartConfig) -> Self {
        let paths = ProjectPaths::new(
            cwd,
            &answers.project_name,
            answers.starter,
            &config.templates_dir_in(cwd),
            &config.archive_extension,
        );
        Self {
            name: answers.project_name,
            starter: answers.starter,
            paths,
            commit_message: config.commit_message.clone(),
        }
    }
}

/// External collaborators shared by both branches.
#[derive(Clone, Copy)]
pub struct Collaborators<'a> {
    pub vcs: &'a dyn Vcs,
    pub extractor: &'a dyn Extractor,
    pub reporter: &'a dyn Reporter,
}

/// Step at which a branch stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    VcsInit,
    GenerateFiles,
    Commit,
    Extract,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Stage::VcsInit => "vcs init",
            Stage::GenerateFiles => "file generation",
            Stage::Commit => "initial commit",
            Stage::Extract => "archive extraction",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BranchFailure {
    pub stage: Stage,
    pub message: String,
}

impl BranchFailure {
    fn new(stage: Stage, err: &anyhow::Error) -> Self {
        Self {
            stage,
            message: format!("{err:#}"),
        }
    }
}

pub type BranchResult = Result<(), BranchFailure>;

/// Per-branch results of a completed run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldOutcome {
    pub dir_status: DirStatus,
    pub vcs: BranchResult,
    pub extract: BranchResult,
}

impl ScaffoldOutcome {
    pub fn is_success(&self) -> bool {
        self.vcs.is_ok() && self.extract.is_ok()
    }

    pub fn failures(&self) -> Vec<&BranchFailure> {
        [&self.vcs, &self.extract]
            .into_iter()
            .filter_map(|r| r.as_ref().err())
            .collect()
    }
}

/// Scaffold the project described by `plan`.
///
/// Errors only when the project directory cannot be ensured; branch failures
/// land in the returned outcome.
#[instrument(skip_all, fields(name = %plan.name, starter = %plan.starter))]
pub fn run_scaffold(
    plan: &ScaffoldPlan,
    collab: Collaborators<'_>,
) -> Result<ScaffoldOutcome, ScaffoldError> {
    let dir_status = ensure_project_dir(&plan.paths.project_dir)?;
    collab
        .reporter
        .success(&format!("Project folder created: {}", plan.name));

    let (vcs, extract) = thread::scope(|scope| {
        let vcs_handle = scope.spawn(|| run_vcs_branch(plan, collab));
        let extract_handle = scope.spawn(|| run_extract_branch(plan, collab));
        (
            join_branch(vcs_handle.join(), Stage::VcsInit),
            join_branch(extract_handle.join(), Stage::Extract),
        )
    });

    let outcome = ScaffoldOutcome {
        dir_status,
        vcs,
        extract,
    };
    if outcome.is_success() {
        info!("scaffold complete");
    } else {
        warn!(failures = outcome.failures().len(), "scaffold finished with failures");
    }
    Ok(outcome)
}

fn join_branch(joined: thread::Result<BranchResult>, stage: Stage) -> BranchResult {
    joined.unwrap_or_else(|_| {
        Err(BranchFailure {
            stage,
            message: "branch panicked".to_string(),
        })
    })
}

#[instrument(skip_all)]
fn run_vcs_branch(plan: &ScaffoldPlan, collab: Collaborators<'_>) -> BranchResult {
    let Collaborators { vcs, reporter, .. } = collab;
    let dir = &plan.paths.project_dir;

    if let Err(err) = vcs.init(dir) {
        reporter.failure(&format!("Failed to initialize Git repository: {err:#}"));
        return Err(BranchFailure::new(Stage::VcsInit, &err));
    }
    reporter.success(&format!("Git repository initialized in {}", plan.name));

    let engine = ContentEngine::new();
    if let Err(err) = write_readme(&plan.paths.readme_path, &engine, &plan.name) {
        reporter.failure(&format!("Failed to create README.md: {err:#}"));
        return Err(BranchFailure::new(Stage::GenerateFiles, &err));
    }
    reporter.success("README.md file created.");

    if let Err(err) = write_gitignore(&plan.paths.ignore_path) {
        reporter.failure(&format!("Failed to create .gitignore: {err:#}"));
        return Err(BranchFailure::new(Stage::GenerateFiles, &err));
    }
    reporter.success(".gitignore file created.");

    if let Err(err) = vcs.commit_all(dir, &plan.commit_message) {
        reporter.failure(&format!("Failed to commit initial files: {err:#}"));
        return Err(BranchFailure::new(Stage::Commit, &err));
    }
    reporter.success("Initial commit created.");
    debug!("vcs branch complete");
    Ok(())
}

#[instrument(skip_all)]
fn run_extract_branch(plan: &ScaffoldPlan, collab: Collaborators<'_>) -> BranchResult {
    let Collaborators {
        extractor,
        reporter,
        ..
    } = collab;

    match extractor.extract(&plan.paths.archive_path, &plan.paths.project_dir) {
        Ok(()) => {
            reporter.success(&format!(
                "Starter project ({}) unzipped into {}.",
                plan.starter, plan.name
            ));
            debug!("extraction branch complete");
            Ok(())
        }
        Err(err) => {
            reporter.failure(&format!(
                "Failed to unzip starter project ({}): {err:#}",
                plan.starter
            ));
            Err(BranchFailure::new(Stage::Extract, &err))
        }
    }
}
