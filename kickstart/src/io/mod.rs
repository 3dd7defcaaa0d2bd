//! I/O adapters for kickstart: config, prompts, child processes, filesystem.

pub mod config;
pub mod extract;
pub mod files;
pub mod git;
pub mod process;
pub mod prompt;
pub mod report;
