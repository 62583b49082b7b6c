pub mod check;
pub mod completion;
pub mod rules;

use std::path::{Path, PathBuf};

use argguard_core::config::{Config, ConfigError};

/// Pick the configuration file: an explicit path (flag or `ARGGUARD_CONFIG`)
/// wins, otherwise the first default file name found in `cwd`.
pub(crate) fn resolve_config_path(
    explicit: Option<PathBuf>,
    cwd: &Path,
) -> Result<PathBuf, ConfigError> {
    match explicit {
        Some(path) => Ok(path),
        None => Config::discover(cwd),
    }
}

/// Resolve and load the configuration, reporting failures on stderr.
/// `Err` carries the exit code.
pub(crate) fn load_config(command: &str, explicit: Option<PathBuf>) -> Result<Config, i32> {
    let cwd = std::env::current_dir().map_err(|e| {
        eprintln!("argguard {command}: failed to get current directory: {e}");
        2
    })?;

    let path = resolve_config_path(explicit, &cwd).map_err(|e| {
        eprintln!("argguard {command}: {e}");
        2
    })?;

    let config = Config::load(&path).map_err(|e| {
        eprintln!("argguard {command}: {}: {e}", path.display());
        2
    })?;

    tracing::debug!(
        config = %path.display(),
        rules = config.rules.len(),
        policies = config.policy_count(),
        "loaded configuration"
    );
    Ok(config)
}
