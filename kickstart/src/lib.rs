//! Project scaffolding: prompt for a name and starter, create the directory,
//! bootstrap version control, write baseline files, and unpack the starter.
//!
//! - **[`core`]**: Pure logic (names, derived paths, file contents).
//! - **[`io`]**: Side-effecting adapters (config, prompts, processes, filesystem).
//!   Each external tool sits behind a trait so tests can swap in fakes.
//!
//! [`scaffold`] sequences the steps; [`cli`] wires them to the command line.

pub mod cli;
pub mod core;
pub mod error;
pub mod exit_codes;
pub mod io;
pub mod logging;
pub mod scaffold;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
