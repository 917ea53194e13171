use std::path::{Path, PathBuf};
use std::result::Result as StdResult;
use std::str::FromStr;

use anyhow::Context as _;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub user: UserConfig,
    #[serde(default)]
    pub setting: SettingConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserConfig {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettingConfig {
    #[serde(default, rename = "defaultTemplate")]
    pub default_template: String,
}

/// Keys accepted by [`Config::set`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display, strum::EnumString)]
pub enum ConfigKey {
    #[strum(serialize = "email")]
    Email,
    #[strum(serialize = "password")]
    Password,
    #[strum(serialize = "defaultTemplate")]
    DefaultTemplate,
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("Unknown config key '{0}' (available keys: email, password, defaultTemplate)")]
    UnknownKey(String),
}

impl Config {
    pub const FILENAME: &str = "config.toml";

    pub fn filepath(config_dir: impl AsRef<Path>) -> PathBuf {
        config_dir.as_ref().join(Self::FILENAME)
    }

    /// Loads `config.toml` in `config_dir`. A missing file is not an error: defaults are used.
    pub fn load(config_dir: impl AsRef<Path>) -> anyhow::Result<Self> {
        let filepath = Self::filepath(config_dir);
        match fsutil::read_toml_with_deserialize(&filepath) {
            Ok(cfg) => Ok(cfg),
            Err(e) if e.is_not_found() => {
                log::debug!("{:?} does not exist; using default config", filepath);
                Ok(Self::default())
            }
            Err(e) => Err(e).context("Failed to load config"),
        }
    }

    pub fn save(&self, config_dir: impl AsRef<Path>) -> anyhow::Result<()> {
        let filepath = Self::filepath(config_dir);
        fsutil::write_toml_with_mkdir(&filepath, self).context("Failed to save config")
    }

    pub fn set(&mut self, key: &str, value: impl Into<String>) -> StdResult<(), ConfigError> {
        let key = ConfigKey::from_str(key).map_err(|_| ConfigError::UnknownKey(key.to_owned()))?;
        let value = value.into();
        match key {
            ConfigKey::Email => self.user.email = value,
            ConfigKey::Password => self.user.password = value,
            ConfigKey::DefaultTemplate => self.setting.default_template = value,
        }
        Ok(())
    }

    /// Copy of the config that is safe to print.
    pub fn masked(&self) -> Self {
        let mut cfg = self.clone();
        if !cfg.user.password.is_empty() {
            cfg.user.password = "*".repeat(8);
        }
        cfg
    }

    pub fn to_toml(&self) -> StdResult<String, toml::ser::Error> {
        toml::to_string(self)
    }
}
