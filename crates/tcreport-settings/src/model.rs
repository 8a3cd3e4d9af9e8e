use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// `tcreport.toml` schema v1.
///
/// This is a *user-facing* config model: it is intentionally permissive so forward-compat is easy.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ReportConfigV1 {
    /// Optional schema string for tooling (`tcreport.config.v1`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    /// Report the verbose diagnostic message instead of the short one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verbose: Option<bool>,

    /// Base directories that absolute file paths are rewritten against.
    /// First match wins.
    #[serde(default)]
    pub base_paths: Vec<String>,
}
