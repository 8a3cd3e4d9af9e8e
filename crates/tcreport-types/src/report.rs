use crate::diagnostic::Diagnostic;
use std::io;

/// The reporting contract consumed from the analysis pipeline.
///
/// Implementations own their output target; write failures are surfaced as
/// `io::Error` and are fatal to the reporting run (no local recovery).
pub trait Reporter {
    /// Emit a plain informational message, unconditionally.
    fn report_message(&mut self, text: &str) -> io::Result<()>;

    /// Emit one analysis finding.
    fn report_diagnostic(&mut self, diagnostic: &Diagnostic) -> io::Result<()>;

    /// Emit a progress notice for `(subject, stage)`. `value` is a numeric
    /// progress indicator some callers pass; implementations may ignore it.
    fn report_progress(&mut self, subject: &str, stage: &str, value: usize) -> io::Result<()>;
}
