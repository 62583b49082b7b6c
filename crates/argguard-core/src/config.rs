//! Rule configuration loading for argguard.
//!
//! Reads a YAML document of the form `rules: [...]` and validates it.
//! Unlike pattern errors, which surface per declaration, a configuration
//! that cannot be read or parsed is fatal to the caller.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::policy::Rule;

/// File names probed, in order, when no configuration path is given.
pub const DEFAULT_CONFIG_FILES: [&str; 2] = ["argguard.yaml", ".argguard.yaml"];

/// Environment variable naming the configuration file.
pub const CONFIG_ENV: &str = "ARGGUARD_CONFIG";

/// Top-level argguard configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub rules: Vec<Rule>,
}

/// Errors raised while loading a configuration file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid configuration syntax: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("{rule}: {message}")]
    Invalid { rule: String, message: String },

    #[error("no configuration file found (tried {0})")]
    NotFound(String),
}

impl Config {
    pub fn new(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    /// Parse and validate a YAML document.
    pub fn from_yaml_str(content: &str) -> Result<Self, ConfigError> {
        // An empty document deserializes to `()`, not a map.
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Config = serde_yaml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate the configuration at `path`.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml_str(&content)
    }

    /// Find the first of [`DEFAULT_CONFIG_FILES`] present in `dir`.
    pub fn discover(dir: &Path) -> Result<PathBuf, ConfigError> {
        DEFAULT_CONFIG_FILES
            .iter()
            .map(|name| dir.join(name))
            .find(|p| p.is_file())
            .ok_or_else(|| ConfigError::NotFound(DEFAULT_CONFIG_FILES.join(", ")))
    }

    /// Structural checks serde cannot express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (i, rule) in self.rules.iter().enumerate() {
            for (j, policy) in rule.argument_policies.iter().enumerate() {
                let invalid = |message: &str| ConfigError::Invalid {
                    rule: rule.label(i),
                    message: format!("args[{j}]: {message}"),
                };
                if policy.type_name.trim().is_empty() {
                    return Err(invalid("`type` must not be empty"));
                }
                if policy.namespace_alias.is_some() && policy.namespace_path.is_none() {
                    return Err(invalid("`pkg_name` requires `pkg`"));
                }
                if policy.namespace_path.as_deref() == Some("") {
                    return Err(invalid("`pkg` must not be empty"));
                }
            }
        }
        Ok(())
    }

    pub fn policy_count(&self) -> usize {
        self.rules.iter().map(|r| r.argument_policies.len()).sum()
    }
}
