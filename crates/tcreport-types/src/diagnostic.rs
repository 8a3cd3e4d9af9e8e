use crate::severity::Severity;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// One frame in a diagnostic's location stack. The first frame is the
/// primary location reported to CI.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct FileLocation {
    pub file: String,
    pub line: u32,
    pub column: u32,
}

/// One analysis finding, as handed over by the analysis engine.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Diagnostic {
    /// Stable string id for the diagnostic kind (e.g. `nullPointer`).
    pub kind: String,

    /// One-line human message.
    pub short: String,

    /// Full human message; reporters pick this when verbose output is on.
    pub verbose: String,

    pub severity: Severity,

    /// Finding could not be confirmed; reported but flagged.
    #[serde(default)]
    pub inconclusive: bool,

    /// CWE id when the finding maps to a weakness class. Zero and absent
    /// both mean "no classifier".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cwe: Option<u32>,

    /// Fallback file for diagnostics without location frames (tool-level
    /// findings about a file as a whole).
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub file: String,

    /// Location stack, primary frame first. May be empty.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub frames: Vec<FileLocation>,
}

impl Diagnostic {
    /// The frame whose file/line/column is reported to CI, if any.
    pub fn primary_frame(&self) -> Option<&FileLocation> {
        self.frames.first()
    }

    /// CWE id, filtered to non-zero values.
    pub fn cwe_id(&self) -> Option<u32> {
        self.cwe.filter(|id| *id != 0)
    }

    /// Compute a stable SHA-256 fingerprint for duplicate suppression.
    ///
    /// Identity fields are everything a reporter reads or emits: kind,
    /// both messages, severity, inconclusive flag, CWE, fallback file, and
    /// the full frame stack. Two diagnostics with equal fingerprints
    /// produce the same wire output.
    pub fn fingerprint(&self) -> String {
        let mut parts: Vec<String> = vec![
            self.kind.clone(),
            self.short.clone(),
            self.verbose.clone(),
            self.severity.as_str().to_string(),
            self.inconclusive.to_string(),
            self.cwe.unwrap_or(0).to_string(),
            self.file.clone(),
        ];
        for frame in &self.frames {
            parts.push(format!("{}:{}:{}", frame.file, frame.line, frame.column));
        }
        let canonical = parts.join("|");

        let mut hasher = Sha256::new();
        hasher.update(canonical.as_bytes());
        let digest = hasher.finalize();
        hex::encode(digest)
    }
}
