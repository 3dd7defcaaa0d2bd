//! User-facing progress lines.
//!
//! Each scaffolding step reports exactly one success or failure line. Both
//! branches report from their own threads, so sinks must be `Sync`.

use std::io::Write;

/// Sink for step progress lines.
pub trait Reporter: Sync {
    fn success(&self, line: &str);
    fn failure(&self, line: &str);
}

/// Success lines to stdout, failure lines to stderr.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleReporter;

impl Reporter for ConsoleReporter {
    fn success(&self, line: &str) {
        // One lock per line; branches report concurrently.
        let mut out = std::io::stdout().lock();
        let _ = writeln!(out, "{line}");
    }

    fn failure(&self, line: &str) {
        let mut err = std::io::stderr().lock();
        let _ = writeln!(err, "{line}");
    }
}
