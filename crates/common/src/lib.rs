// # -----------------------------
// # crates/common/src/lib.rs
// # -----------------------------
pub mod fs;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_FILE: &str = "bugtrack.toml";
pub const CONFIG_ENV: &str = "BUGTRACK_CONFIG";
pub const REPORTS_DIR_ENV: &str = "BUGTRACK_DIR";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub store: StoreCfg,
    pub logging: LoggingCfg,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreCfg {
    /// Directory report names are resolved against.
    pub reports_dir: PathBuf,
}

impl Default for StoreCfg {
    fn default() -> Self {
        Self {
            reports_dir: PathBuf::from("."),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingCfg {
    /// Filter directive, e.g. "warn" or "bugtrack_cli=debug".
    pub level: Option<String>,
}

/// Where a resolved setting came from: "param" | "env" | "file" | "default".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SettingSource {
    Param,
    Env,
    File,
    Default,
}

#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: Config,
    /// File the config was read from, if any.
    pub path: Option<PathBuf>,
    pub reports_dir_source: SettingSource,
}

/// Loads the config file and applies env and CLI overrides on top of it.
///
/// `explicit` is a path passed on the command line; it must exist. Without
/// it, `BUGTRACK_CONFIG` is consulted and finally `bugtrack.toml`, which is
/// optional.
pub fn load_config(explicit: Option<&Path>, reports_dir: Option<&Path>) -> Result<LoadedConfig> {
    let env_path = std::env::var_os(CONFIG_ENV).map(PathBuf::from);
    let (candidate, required) = match (explicit, env_path) {
        (Some(p), _) => (p.to_path_buf(), true),
        (None, Some(p)) => (p, true),
        (None, None) => (PathBuf::from(DEFAULT_CONFIG_FILE), false),
    };

    let (mut config, path) = if candidate.exists() || required {
        let raw = std::fs::read_to_string(&candidate)
            .with_context(|| format!("unable to read config at {}", candidate.display()))?;
        let cfg: Config = toml::from_str(&raw)
            .with_context(|| format!("invalid config at {}", candidate.display()))?;
        tracing::debug!(path = %candidate.display(), "configuration file loaded");
        (cfg, Some(candidate))
    } else {
        (Config::default(), None)
    };

    let mut source = if path.is_some() && config.store != StoreCfg::default() {
        SettingSource::File
    } else {
        SettingSource::Default
    };

    if let Some(dir) = std::env::var_os(REPORTS_DIR_ENV).filter(|v| !v.is_empty()) {
        config.store.reports_dir = PathBuf::from(dir);
        source = SettingSource::Env;
    }
    if let Some(dir) = reports_dir {
        config.store.reports_dir = dir.to_path_buf();
        source = SettingSource::Param;
    }

    Ok(LoadedConfig {
        config,
        path,
        reports_dir_source: source,
    })
}
