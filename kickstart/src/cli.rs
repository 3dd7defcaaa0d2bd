//! CLI command implementations.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use clap::Args;
use tracing::{debug, info};

use crate::core::paths::starter_archive_path;
use crate::core::types::StarterChoice;
use crate::error::ScaffoldError;
use crate::exit_codes;
use crate::io::config::{DEFAULT_CONFIG_FILE, KickstartConfig, load_config, write_config};
use crate::io::extract::UnzipExtractor;
use crate::io::git::GitVcs;
use crate::io::prompt::{DialoguerPrompter, Prompter, collect_answers};
use crate::io::report::ConsoleReporter;
use crate::scaffold::{Collaborators, ScaffoldOutcome, ScaffoldPlan, run_scaffold};

/// Arguments for creating a project. Anything omitted is prompted for or
/// taken from the config file.
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct NewArgs {
    /// Project name; also the directory created under the current directory.
    pub name: Option<String>,

    /// Starter template to extract.
    #[arg(short, long, value_enum, ignore_case = true)]
    pub starter: Option<StarterChoice>,

    #[command(flatten)]
    pub overrides: ConfigArgs,
}

/// Config file location plus per-run overrides.
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigArgs {
    /// Config file (defaults to `kickstart.toml` in the current directory).
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Directory holding `<Starter>.zip` archives.
    #[arg(long, value_name = "DIR")]
    pub templates_dir: Option<PathBuf>,

    /// Version-control executable.
    #[arg(long = "vcs", value_name = "EXE")]
    pub vcs_executable: Option<String>,

    /// Archive-extraction executable.
    #[arg(long = "extract", value_name = "EXE")]
    pub extract_executable: Option<String>,

    /// Kill external tools running longer than this.
    #[arg(long, value_name = "SECS")]
    pub timeout_secs: Option<u64>,
}

/// Load the config file and apply command-line overrides.
pub fn resolve_config(args: &ConfigArgs, cwd: &Path) -> Result<KickstartConfig, ScaffoldError> {
    let path = match &args.config {
        Some(path) => {
            let path = cwd.join(path);
            if !path.exists() {
                return Err(ScaffoldError::Config(anyhow!(
                    "config file {} not found",
                    path.display()
                )));
            }
            path
        }
        None => cwd.join(DEFAULT_CONFIG_FILE),
    };
    let mut cfg = load_config(&path).map_err(ScaffoldError::Config)?;
    if let Some(dir) = &args.templates_dir {
        cfg.templates_directory = dir.clone();
    }
    if let Some(exe) = &args.vcs_executable {
        cfg.vcs_executable = exe.clone();
    }
    if let Some(exe) = &args.extract_executable {
        cfg.extract_executable = exe.clone();
    }
    if let Some(secs) = args.timeout_secs {
        cfg.process_timeout_secs = Some(secs);
    }
    cfg.validate().map_err(ScaffoldError::Config)?;
    debug!(config = ?cfg, "config resolved");
    Ok(cfg)
}

/// Resolve config and answers into a plan. Performs no side effects.
pub fn prepare_plan(
    args: NewArgs,
    cwd: &Path,
    prompter: &dyn Prompter,
) -> Result<(ScaffoldPlan, KickstartConfig), ScaffoldError> {
    let cfg = resolve_config(&args.overrides, cwd)?;
    let answers = collect_answers(prompter, args.name, args.starter)?;
    let plan = ScaffoldPlan::new(cwd, answers, &cfg);
    Ok((plan, cfg))
}

/// Create a project interactively; returns the process exit code.
pub fn new_project(args: NewArgs) -> Result<i32> {
    let cwd = std::env::current_dir().map_err(ScaffoldError::CurrentDir)?;
    let (plan, cfg) = prepare_plan(args, &cwd, &DialoguerPrompter::new())?;
    info!(project_dir = %plan.paths.project_dir.display(), "scaffolding project");

    let timeout = cfg.process_timeout();
    let vcs = GitVcs::new(&cfg.vcs_executable, timeout, cfg.output_limit_bytes);
    let extractor = UnzipExtractor::new(&cfg.extract_executable, timeout, cfg.output_limit_bytes);
    let outcome = run_scaffold(
        &plan,
        Collaborators {
            vcs: &vcs,
            extractor: &extractor,
            reporter: &ConsoleReporter,
        },
    )?;
    Ok(exit_code(&outcome))
}

pub fn exit_code(outcome: &ScaffoldOutcome) -> i32 {
    if outcome.is_success() {
        exit_codes::OK
    } else {
        exit_codes::PARTIAL
    }
}

/// Print every starter with its archive path, flagging missing archives.
pub fn list_starters(args: &ConfigArgs) -> Result<()> {
    let cwd = std::env::current_dir().context("read current directory")?;
    let cfg = resolve_config(args, &cwd)?;
    let templates_dir = cfg.templates_dir_in(&cwd);
    for starter in StarterChoice::ALL {
        let archive = starter_archive_path(&templates_dir, starter, &cfg.archive_extension);
        let missing = if archive.is_file() { "" } else { "  (missing)" };
        println!("{:<18} {}{}", starter.as_str(), archive.display(), missing);
    }
    Ok(())
}

/// Write a default config file.
///
/// Fails if the file exists unless `force` is set.
pub fn init_config(path: Option<&Path>, force: bool) -> Result<PathBuf> {
    let path = path.map_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE), Path::to_path_buf);
    if path.exists() && !force {
        return Err(anyhow!(
            "{} already exists (use --force to overwrite)",
            path.display()
        ));
    }
    write_config(&path, &KickstartConfig::default())?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{ScriptedPrompter, TestWorkspace};
    use std::fs;

    #[test]
    fn overrides_win_over_config_file() {
        let ws = TestWorkspace::new().expect("workspace");
        fs::write(
            ws.path().join(DEFAULT_CONFIG_FILE),
            "vcs_executable = \"hg\"\nextract_executable = \"bsdtar\"\n",
        )
        .expect("write config");
        let args = ConfigArgs {
            vcs_executable: Some("jj".to_string()),
            timeout_secs: Some(5),
            ..ConfigArgs::default()
        };

        let cfg = resolve_config(&args, ws.path()).expect("resolve");
        assert_eq!(cfg.vcs_executable, "jj");
        assert_eq!(cfg.extract_executable, "bsdtar");
        assert_eq!(cfg.process_timeout_secs, Some(5));
    }

    #[test]
    fn explicit_missing_config_is_an_error() {
        let ws = TestWorkspace::new().expect("workspace");
        let args = ConfigArgs {
            config: Some(PathBuf::from("nope.toml")),
            ..ConfigArgs::default()
        };
        let err = resolve_config(&args, ws.path()).unwrap_err();
        assert!(matches!(err, ScaffoldError::Config(_)));
    }

    #[test]
    fn invalid_override_is_rejected() {
        let ws = TestWorkspace::new().expect("workspace");
        let args = ConfigArgs {
            timeout_secs: Some(0),
            ..ConfigArgs::default()
        };
        assert!(matches!(
            resolve_config(&args, ws.path()),
            Err(ScaffoldError::Config(_))
        ));
    }

    #[test]
    fn prepare_plan_has_no_side_effects() {
        let ws = TestWorkspace::new().expect("workspace");
        let prompter = ScriptedPrompter::answering("demo", StarterChoice::RelationalStarter);
        let args = NewArgs {
            overrides: ConfigArgs {
                templates_dir: Some(ws.templates_dir()),
                ..ConfigArgs::default()
            },
            ..NewArgs::default()
        };

        let (plan, _) = prepare_plan(args, ws.path(), &prompter).expect("plan");
        assert_eq!(plan.paths.project_dir, ws.path().join("demo"));
        assert_eq!(
            plan.paths.archive_path,
            ws.templates_dir().join("RelationalStarter.zip")
        );
        assert!(!plan.paths.project_dir.exists());
    }

    #[test]
    fn init_config_refuses_to_overwrite_without_force() {
        let ws = TestWorkspace::new().expect("workspace");
        let path = ws.path().join(DEFAULT_CONFIG_FILE);

        init_config(Some(&path), false).expect("first");
        fs::write(&path, "commit_message = \"custom\"\n").expect("customize");
        let err = init_config(Some(&path), false).unwrap_err();
        assert!(err.to_string().contains("already exists"));

        init_config(Some(&path), true).expect("force");
        assert_eq!(load_config(&path).expect("load"), KickstartConfig::default());
    }
}
