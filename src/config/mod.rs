//! Kit configuration
//!
//! `KernelConfig` is read from a TOML file and then overridden from the
//! environment:
//!
//! | Field            | TOML key         | Environment variable      |
//! |------------------|------------------|---------------------------|
//! | `log_level`      | `log_level`      | `UTILKIT_LOG_LEVEL`       |
//! | `shuffle_policy` | `shuffle_policy` | `UTILKIT_SHUFFLE_POLICY`  |
//! | `memo_key`       | `memo_key`       | `UTILKIT_MEMO_KEY`        |
//!
//! Missing keys take their defaults, so an empty file is a valid config.

use crate::core::ShufflePolicy;
use crate::decorators::MemoKeyPolicy;
use crate::error::{ErrorCode, KernelError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

pub const ENV_LOG_LEVEL: &str = "UTILKIT_LOG_LEVEL";
pub const ENV_SHUFFLE_POLICY: &str = "UTILKIT_SHUFFLE_POLICY";
pub const ENV_MEMO_KEY: &str = "UTILKIT_MEMO_KEY";

/// Levels accepted for `log_level`
pub const VALID_LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error", "off"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct KernelConfig {
    pub log_level: String,
    pub shuffle_policy: ShufflePolicy,
    pub memo_key: MemoKeyPolicy,
}

impl Default for KernelConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            shuffle_policy: ShufflePolicy::default(),
            memo_key: MemoKeyPolicy::default(),
        }
    }
}

impl KernelConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse and validate a TOML document.
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let config: KernelConfig = toml::from_str(contents).map_err(|e| {
            KernelError::config_with_code(
                ErrorCode::CONFIG_INVALID_TOML,
                "failed to parse configuration",
                None,
            )
            .with_source(e)
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate the TOML file at `path`.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            KernelError::config_with_code(
                ErrorCode::CONFIG_NOT_FOUND,
                "failed to read configuration file",
                Some(path.to_path_buf()),
            )
            .with_source(e)
        })?;

        let config = Self::from_toml_str(&contents).map_err(|e| match e {
            KernelError::Config {
                code,
                message,
                source,
                ..
            } => KernelError::Config {
                code,
                message,
                path: Some(path.to_path_buf()),
                source,
            },
            other => other,
        })?;

        debug!(path = %path.display(), "Loaded configuration");
        Ok(config)
    }

    /// Apply `UTILKIT_*` overrides from the process environment.
    pub fn merge_env_vars(&mut self) -> Result<()> {
        self.merge_vars(|name| std::env::var(name).ok())
    }

    /// Apply overrides looked up through `lookup`, then validate.
    pub fn merge_vars<L>(&mut self, lookup: L) -> Result<()>
    where
        L: Fn(&str) -> Option<String>,
    {
        if let Some(level) = lookup(ENV_LOG_LEVEL) {
            self.log_level = level.trim().to_lowercase();
        }

        if let Some(policy) = lookup(ENV_SHUFFLE_POLICY) {
            self.shuffle_policy = policy.parse().map_err(|message: String| {
                KernelError::config_with_code(ErrorCode::CONFIG_INVALID_VALUE, message, None)
                    .with_context(ENV_SHUFFLE_POLICY)
            })?;
        }

        if let Some(policy) = lookup(ENV_MEMO_KEY) {
            self.memo_key = policy.parse().map_err(|message: String| {
                KernelError::config_with_code(ErrorCode::CONFIG_INVALID_VALUE, message, None)
                    .with_context(ENV_MEMO_KEY)
            })?;
        }

        self.validate()
    }

    pub fn validate(&self) -> Result<()> {
        if !VALID_LOG_LEVELS.contains(&self.log_level.as_str()) {
            return Err(KernelError::config_with_code(
                ErrorCode::CONFIG_INVALID_VALUE,
                format!(
                    "invalid log_level '{}' (expected one of {})",
                    self.log_level,
                    VALID_LOG_LEVELS.join(", ")
                ),
                None,
            ));
        }
        Ok(())
    }
}
