use std::path::{Path, PathBuf};

use speclint_core::{Config, ConfigError};

/// Looked up in the working directory when no `--config` is given.
pub const DEFAULT_CONFIG_FILE: &str = "speclint.yaml";

/// Resolve the rule configuration for a command.
///
/// An explicit path must exist. Without one, `speclint.yaml` in `dir` is used
/// when present, and an empty configuration (every rule off) otherwise.
pub fn resolve(dir: &Path, explicit: Option<PathBuf>) -> Result<Config, ConfigError> {
    if let Some(path) = explicit {
        return Config::load(&path);
    }
    let fallback = dir.join(DEFAULT_CONFIG_FILE);
    if fallback.is_file() {
        tracing::debug!(path = %fallback.display(), "using default config file");
        Config::load(&fallback)
    } else {
        tracing::debug!("no config file found, every rule is off");
        Ok(Config::default())
    }
}

/// [`resolve`] relative to the process working directory.
pub fn resolve_from_cwd(explicit: Option<PathBuf>) -> Result<Config, ConfigError> {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    resolve(&cwd, explicit)
}
