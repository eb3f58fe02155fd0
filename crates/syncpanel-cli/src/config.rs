//! Persistent CLI configuration.
//!
//! `config.json` remembers the selected sync folder; sync settings live next
//! to it in `settings.json`, owned by the workbench store.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use syncpanel_core::util::normalize_text_option;

use crate::error::CliError;

const CONFIG_DIR_NAME: &str = "syncpanel";
const CONFIG_FILE_NAME: &str = "config.json";
const SETTINGS_FILE_NAME: &str = "settings.json";
const CONFIG_ENV_VAR: &str = "SYNCPANEL_CONFIG";

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CliConfig {
    #[serde(default = "default_config_version")]
    pub version: u32,
    #[serde(default)]
    pub sync_folder: Option<PathBuf>,
}

const fn default_config_version() -> u32 {
    1
}

/// Where the config and settings files live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigPaths {
    pub config_file: PathBuf,
    pub settings_file: PathBuf,
}

impl ConfigPaths {
    /// Resolve from `--config`, then `SYNCPANEL_CONFIG`, then the platform
    /// config directory.
    pub fn resolve(explicit: Option<PathBuf>) -> Result<Self, CliError> {
        let from_env = normalize_text_option(std::env::var(CONFIG_ENV_VAR).ok()).map(PathBuf::from);
        let config_file = match explicit.or(from_env) {
            Some(path) => path,
            None => dirs::config_dir()
                .ok_or_else(|| {
                    CliError::Config("Failed to resolve CLI config directory".to_string())
                })?
                .join(CONFIG_DIR_NAME)
                .join(CONFIG_FILE_NAME),
        };
        Ok(Self::for_config_file(config_file))
    }

    /// Put the settings file beside `config_file`.
    pub fn for_config_file(config_file: PathBuf) -> Self {
        let settings_file = config_file
            .parent()
            .map_or_else(|| PathBuf::from(SETTINGS_FILE_NAME), |dir| {
                dir.join(SETTINGS_FILE_NAME)
            });
        Self {
            config_file,
            settings_file,
        }
    }
}

impl CliConfig {
    pub fn load_from_path(path: &Path) -> Result<Self, CliError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let raw = std::fs::read_to_string(path).map_err(|error| {
            CliError::Config(format!(
                "Failed to read config at {}: {}",
                path.display(),
                error
            ))
        })?;
        let mut config = serde_json::from_str::<Self>(&raw).map_err(|error| {
            CliError::Config(format!(
                "Failed to parse config at {}: {}",
                path.display(),
                error
            ))
        })?;
        config.normalize();
        Ok(config)
    }

    pub fn save_to_path(&self, path: &Path) -> Result<(), CliError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|error| {
                CliError::Config(format!(
                    "Failed to create config directory {}: {}",
                    parent.display(),
                    error
                ))
            })?;
        }

        let mut normalized = self.clone();
        normalized.normalize();
        let serialized = serde_json::to_string_pretty(&normalized)?;
        std::fs::write(path, serialized).map_err(|error| {
            CliError::Config(format!(
                "Failed to write config at {}: {}",
                path.display(),
                error
            ))
        })
    }

    fn normalize(&mut self) {
        self.version = default_config_version();
        self.sync_folder = normalize_text_option(
            self.sync_folder
                .take()
                .map(|path| path.to_string_lossy().into_owned()),
        )
        .map(PathBuf::from);
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn missing_config_loads_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = CliConfig::load_from_path(&dir.path().join("config.json")).unwrap();
        assert_eq!(config.sync_folder, None);
    }

    #[test]
    fn config_roundtrip_preserves_folder() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");

        let config = CliConfig {
            version: 0,
            sync_folder: Some(PathBuf::from("/work/site")),
        };
        config.save_to_path(&path).unwrap();

        assert_eq!(
            CliConfig::load_from_path(&path).unwrap(),
            CliConfig {
                version: 1,
                sync_folder: Some(PathBuf::from("/work/site")),
            }
        );
    }

    #[test]
    fn blank_folder_is_dropped() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"version":1,"syncFolder":"   "}"#).unwrap();

        assert_eq!(CliConfig::load_from_path(&path).unwrap().sync_folder, None);
    }

    #[test]
    fn invalid_json_is_reported_with_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{not json").unwrap();

        let error = CliConfig::load_from_path(&path).unwrap_err();
        assert!(error.to_string().contains("Failed to parse config"));
    }

    #[test]
    fn settings_file_sits_beside_config() {
        let paths = ConfigPaths::for_config_file(PathBuf::from("/tmp/syncpanel/config.json"));
        assert_eq!(
            paths.settings_file,
            PathBuf::from("/tmp/syncpanel/settings.json")
        );
    }

    #[test]
    fn explicit_config_path_wins() {
        let paths = ConfigPaths::resolve(Some(PathBuf::from("/opt/panel/custom.json"))).unwrap();
        assert_eq!(paths.config_file, PathBuf::from("/opt/panel/custom.json"));
        assert_eq!(paths.settings_file, PathBuf::from("/opt/panel/settings.json"));
    }
}
