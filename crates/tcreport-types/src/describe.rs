//! Catalog descriptions: the set of diagnostic kinds a component can produce.
//!
//! Each diagnostic-producing component (checks, the preprocessor) can
//! enumerate its kinds without running any analysis. Reporters use this to
//! publish a catalog ahead of findings.

use crate::severity::Severity;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Description of one diagnostic kind, independent of any concrete finding.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct DiagnosticDescription {
    /// Stable kind id, same namespace as [`Diagnostic::kind`](crate::Diagnostic).
    pub kind: String,
    pub short: String,
    pub verbose: String,
    pub severity: Severity,
}

/// Receives descriptions during catalog enumeration.
///
/// Two capabilities only: plain text (which catalog consumers may discard)
/// and diagnostic descriptions. Implementations are one-shot and carry no
/// dedup state.
pub trait DescriptionSink {
    fn accept_plain_text(&mut self, text: &str);
    fn accept_description(&mut self, description: &DiagnosticDescription);
}

/// A component that can enumerate every diagnostic kind it produces.
pub trait DiagnosticSource {
    fn describe(&self, sink: &mut dyn DescriptionSink);
}

/// Static description table, the common case for check components whose
/// kinds are known at compile time.
impl DiagnosticSource for [DiagnosticDescription] {
    fn describe(&self, sink: &mut dyn DescriptionSink) {
        for description in self {
            sink.accept_description(description);
        }
    }
}

impl DiagnosticSource for Vec<DiagnosticDescription> {
    fn describe(&self, sink: &mut dyn DescriptionSink) {
        self.as_slice().describe(sink);
    }
}
