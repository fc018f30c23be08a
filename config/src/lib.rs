//! Configuration loading for formnav.
//!
//! The config file lives at `~/.formnav/config.toml` unless `FORMNAV_CONFIG`
//! points elsewhere. A missing file is not an error; callers fall back to the
//! built-in demo form.

mod form;

pub use form::{FormConfig, FormConfigError, SectionConfig};

use serde::Deserialize;
use std::{
    env,
    ffi::OsString,
    fs,
    path::{Path, PathBuf},
};

use formnav_types::ui::UiOptions;

/// Environment variable overriding the config file location.
pub const CONFIG_PATH_ENV: &str = "FORMNAV_CONFIG";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config at {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config at {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

impl ConfigError {
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            ConfigError::Read { path, .. } | ConfigError::Parse { path, .. } => path,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct FormnavConfig {
    #[serde(default)]
    pub app: AppConfig,
    pub form: Option<FormConfig>,
}

#[derive(Debug, Default, Clone, Copy, Deserialize)]
pub struct AppConfig {
    /// Use ASCII-only glyphs for section markers.
    #[serde(default)]
    pub ascii_only: bool,
    /// Enable a high-contrast color palette.
    #[serde(default)]
    pub high_contrast: bool,
}

impl AppConfig {
    #[must_use]
    pub fn ui_options(self) -> UiOptions {
        UiOptions {
            ascii_only: self.ascii_only,
            high_contrast: self.high_contrast,
        }
    }
}

impl FormnavConfig {
    /// Load from the default location. `Ok(None)` when there is no file.
    ///
    /// A path named by `FORMNAV_CONFIG` must exist; a missing file there is a
    /// [`ConfigError::Read`].
    pub fn load() -> Result<Option<Self>, ConfigError> {
        Self::load_location(config_location())
    }

    fn load_location(location: Option<ConfigLocation>) -> Result<Option<Self>, ConfigError> {
        match location {
            None => Ok(None),
            Some(ConfigLocation::Override(path)) => Self::load_from(&path).map(Some),
            Some(ConfigLocation::Default(path)) if !path.exists() => {
                tracing::debug!(path = %path.display(), "No config file; using defaults");
                Ok(None)
            }
            Some(ConfigLocation::Default(path)) => Self::load_from(&path).map(Some),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) => {
                tracing::warn!("Failed to read config at {:?}: {}", path, err);
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source: err,
                });
            }
        };

        match toml::from_str(&content) {
            Ok(config) => Ok(config),
            Err(err) => {
                tracing::warn!("Failed to parse config at {:?}: {}", path, err);
                Err(ConfigError::Parse {
                    path: path.to_path_buf(),
                    source: err,
                })
            }
        }
    }

    #[must_use]
    pub fn path() -> Option<PathBuf> {
        config_path()
    }

    /// The configured form, or the built-in demo when none is defined.
    #[must_use]
    pub fn form_or_demo(&self) -> FormConfig {
        self.form.clone().unwrap_or_else(FormConfig::demo)
    }
}

/// Where the config file is looked up.
#[derive(Debug, Clone, PartialEq, Eq)]
enum ConfigLocation {
    /// Named by `FORMNAV_CONFIG`.
    Override(PathBuf),
    /// `~/.formnav/config.toml`
    Default(PathBuf),
}

impl ConfigLocation {
    fn into_path(self) -> PathBuf {
        match self {
            ConfigLocation::Override(path) | ConfigLocation::Default(path) => path,
        }
    }
}

fn resolve_location(override_path: Option<OsString>, home: Option<PathBuf>) -> Option<ConfigLocation> {
    if let Some(custom) = override_path.filter(|value| !value.is_empty()) {
        return Some(ConfigLocation::Override(PathBuf::from(custom)));
    }
    home.map(|home| ConfigLocation::Default(home.join(".formnav").join("config.toml")))
}

fn config_location() -> Option<ConfigLocation> {
    resolve_location(env::var_os(CONFIG_PATH_ENV), dirs::home_dir())
}

#[must_use]
pub fn config_path() -> Option<PathBuf> {
    config_location().map(ConfigLocation::into_path)
}
