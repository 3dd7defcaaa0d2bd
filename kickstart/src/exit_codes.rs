//! Stable exit codes for kickstart CLI commands.

/// Project scaffolded and both branches succeeded.
pub const OK: i32 = 0;
/// Run aborted before or during directory creation (input, config, or filesystem error).
pub const INVALID: i32 = 1;
/// Project directory exists but the VCS or extraction branch failed.
pub const PARTIAL: i32 = 2;
