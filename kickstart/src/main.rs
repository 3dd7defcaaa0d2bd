//! Project scaffolding CLI.
//!
//! Prompts for a project name and starter template, then creates the
//! directory, initializes git, writes `README.md` and `.gitignore`, and
//! unpacks the starter archive.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use kickstart::cli::{self, ConfigArgs, NewArgs};
use kickstart::{exit_codes, logging};

#[derive(Parser)]
#[command(
    name = "kickstart",
    version,
    about = "Scaffold a new project from a starter template",
    args_conflicts_with_subcommands = true
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    #[command(flatten)]
    new: NewArgs,
}

#[derive(Subcommand)]
enum Command {
    /// Create a project (the default when no subcommand is given).
    New(NewArgs),
    /// List starters and where their archives are expected.
    List(ConfigArgs),
    /// Manage the config file.
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand)]
enum ConfigCommand {
    /// Write a config file with default values.
    Init {
        /// Destination (defaults to `kickstart.toml`).
        #[arg(long)]
        path: Option<PathBuf>,
        /// Overwrite an existing file.
        #[arg(short, long)]
        force: bool,
    },
}

fn main() {
    logging::init();
    match run() {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("Error during project initialization: {:#}", err);
            std::process::exit(exit_codes::INVALID);
        }
    }
}

fn run() -> Result<i32> {
    let cli = Cli::parse();
    match cli.command {
        None => cli::new_project(cli.new),
        Some(Command::New(args)) => cli::new_project(args),
        Some(Command::List(args)) => {
            cli::list_starters(&args)?;
            Ok(exit_codes::OK)
        }
        Some(Command::Config {
            command: ConfigCommand::Init { path, force },
        }) => {
            let written = cli::init_config(path.as_deref(), force)?;
            println!("Config written: {}", written.display());
            Ok(exit_codes::OK)
        }
    }
}
