//! Deterministic, pure logic shared by the scaffolder.
//!
//! Core modules must be free of I/O side effects. They compute names, paths,
//! and file contents from the collected inputs.

pub mod content;
pub mod paths;
pub mod types;
