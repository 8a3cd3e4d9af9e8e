use crate::model::ReportConfigV1;

/// CLI-level overrides layered on top of the parsed config.
#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub verbose: Option<bool>,
    /// Extra base paths, tried before the configured ones.
    pub base_paths: Vec<String>,
}

/// Effective settings consumed by reporters.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Settings {
    pub verbose: bool,
    pub base_paths: Vec<String>,
}

pub fn resolve_config(cfg: ReportConfigV1, overrides: Overrides) -> Settings {
    let verbose = overrides.verbose.or(cfg.verbose).unwrap_or(false);

    let mut base_paths = overrides.base_paths;
    base_paths.extend(cfg.base_paths);

    Settings {
        verbose,
        base_paths,
    }
}
