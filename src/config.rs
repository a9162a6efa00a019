//! Rule configuration
//!
//! [`RuleConfig`] selects the policies the rules leave open. It is plain
//! serde data and can be kept in a JSON file next to whatever hosts the
//! engine.
//!
//! # Error Handling
//!
//! [`RuleConfig::load`] reports I/O and parse failures as
//! [`ConfigError`]. [`RuleConfig::load_or_default`] logs the failure and
//! falls back to defaults, so a broken file never stops a game from
//! starting.
//!
//! Missing fields take their default values.

use crate::error::{ConfigError, ConfigResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::{info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuleConfig {
    /// Accept a pass (origin == destination) even while the passer is in
    /// check. Official Janggi forbids this; the default keeps the
    /// unconditional pass.
    pub allow_pass_in_check: bool,

    /// Skip bounded-reach attackers (horse, elephant, soldier) that stand
    /// too far from the general to reach it. Chariots and cannons are
    /// always scanned.
    pub prune_distant_attackers: bool,
}

impl Default for RuleConfig {
    fn default() -> Self {
        Self {
            allow_pass_in_check: true,
            prune_distant_attackers: true,
        }
    }
}

impl RuleConfig {
    /// Official-rules profile: no passing out of check
    pub fn official() -> Self {
        Self {
            allow_pass_in_check: false,
            ..Self::default()
        }
    }

    pub fn from_json_str(json: &str) -> ConfigResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json_string(&self) -> ConfigResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Read a config file
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)?;
        let config = Self::from_json_str(&contents)?;
        info!("[CONFIG] Loaded rule config from {:?}", path);
        Ok(config)
    }

    /// Read a config file, using defaults if it is missing or invalid
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        if !path.exists() {
            info!("[CONFIG] No rule config at {:?}. Using defaults.", path);
            return Self::default();
        }

        match Self::load(path) {
            Ok(config) => config,
            Err(ConfigError::Io(e)) => {
                warn!(
                    "[CONFIG] Failed to read rule config at {:?}: {}. Using defaults.",
                    path, e
                );
                Self::default()
            }
            Err(ConfigError::Serialization(e)) => {
                warn!(
                    "[CONFIG] Failed to parse rule config at {:?}: {}. Using defaults.",
                    path, e
                );
                Self::default()
            }
        }
    }

    /// Write the config as pretty JSON, creating parent directories
    pub fn save(&self, path: impl AsRef<Path>) -> ConfigResult<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(path, self.to_json_string()?)?;
        info!("[CONFIG] Saved rule config to {:?}", path);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    /// Per-test directory, so parallel tests can each remove their own
    fn scratch_dir(test: &str) -> PathBuf {
        std::env::temp_dir().join(format!("janggi-config-{}-{}", std::process::id(), test))
    }

    #[test]
    fn test_defaults() {
        let config = RuleConfig::default();
        assert!(config.allow_pass_in_check);
        assert!(config.prune_distant_attackers);
        assert!(!RuleConfig::official().allow_pass_in_check);
    }

    #[test]
    fn test_missing_fields_take_defaults() {
        let config = RuleConfig::from_json_str(r#"{"allow_pass_in_check": false}"#).unwrap();
        assert!(!config.allow_pass_in_check);
        assert!(config.prune_distant_attackers);

        let empty = RuleConfig::from_json_str("{}").unwrap();
        assert_eq!(empty, RuleConfig::default());
    }

    #[test]
    fn test_invalid_json_is_serialization_error() {
        let result = RuleConfig::from_json_str("{ not json");
        assert!(matches!(result, Err(ConfigError::Serialization(_))));
    }

    #[test]
    fn test_save_then_load() {
        let dir = scratch_dir("save_then_load");
        let path = dir.join("nested").join("rules.json");
        let config = RuleConfig {
            allow_pass_in_check: false,
            prune_distant_attackers: false,
        };
        config.save(&path).unwrap();
        assert_eq!(RuleConfig::load(&path).unwrap(), config);

        fs::remove_dir_all(&dir).unwrap();
        assert!(!dir.exists());
    }

    #[test]
    fn test_load_missing_file() {
        let dir = scratch_dir("load_missing_file");
        let path = dir.join("does_not_exist.json");
        assert!(matches!(RuleConfig::load(&path), Err(ConfigError::Io(_))));
        assert_eq!(RuleConfig::load_or_default(&path), RuleConfig::default());
        assert!(!dir.exists(), "loading never creates directories");
    }

    #[test]
    fn test_load_or_default_on_garbage() {
        let dir = scratch_dir("load_or_default_on_garbage");
        let path = dir.join("garbage.json");
        fs::create_dir_all(&dir).unwrap();
        fs::write(&path, "allow_pass_in_check = false").unwrap();
        assert_eq!(RuleConfig::load_or_default(&path), RuleConfig::default());

        fs::remove_dir_all(&dir).unwrap();
        assert!(!dir.exists());
    }
}
