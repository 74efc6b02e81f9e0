// ============================================================
// Layer 6 - Config File
// ============================================================
// Reads and writes AppConfig as pretty-printed JSON.
//
// A config file is optional. When one is named on the command
// line it must exist and parse; a typo in the path is reported
// instead of silently falling back to defaults.
//
// `pdf-research config --write settings.json` dumps the resolved
// configuration so it can be edited and passed back in with
// `--config settings.json`.

use anyhow::{Context, Result};
use std::{fs, path::Path};

use crate::application::config::AppConfig;

/// Load an AppConfig from a JSON file.
/// Missing keys take their default values.
pub fn load_config(path: &Path) -> Result<AppConfig> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("Cannot read config from '{}'", path.display()))?;

    let cfg = serde_json::from_str(&json)
        .with_context(|| format!("Invalid config in '{}'", path.display()))?;

    tracing::debug!("Loaded config from '{}'", path.display());
    Ok(cfg)
}

/// Write an AppConfig to `path` as pretty JSON.
/// The API token is never written out.
pub fn save_config(path: &Path, cfg: &AppConfig) -> Result<()> {
    let mut cfg = cfg.clone();
    cfg.summarizer.api_token = None;

    let json = serde_json::to_string_pretty(&cfg)?;
    fs::write(path, json)
        .with_context(|| format!("Cannot write config to '{}'", path.display()))?;

    tracing::debug!("Saved config to '{}'", path.display());
    Ok(())
}
