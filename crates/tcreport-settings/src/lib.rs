//! Config parsing and override resolution.
//!
//! This crate is intentionally IO-free: it parses and resolves configuration provided as strings.

#![forbid(unsafe_code)]

mod model;
mod resolve;

pub use model::ReportConfigV1;
pub use resolve::{Overrides, Settings};

/// Parse `tcreport.toml` (or equivalent) into a typed model.
pub fn parse_config_toml(input: &str) -> anyhow::Result<ReportConfigV1> {
    let cfg: ReportConfigV1 = toml::from_str(input)?;
    Ok(cfg)
}

/// Resolve the effective settings used by reporters (config + overrides).
pub fn resolve_config(cfg: ReportConfigV1, overrides: Overrides) -> Settings {
    resolve::resolve_config(cfg, overrides)
}
