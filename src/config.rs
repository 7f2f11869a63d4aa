//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/comida/comida.toml`
//! 3. Local config: `<dir>/.comida.toml`
//! 4. Environment variables: `COMIDA_*` prefix (`__` separates sections)

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::application::ApplicationError;
use crate::domain::RenderOptions;

/// How recipes are printed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct RenderSettings {
    /// Prefix repeated once per tree level (default: tab)
    pub indent: String,
    /// Fixed decimals for quantities (default: shortest exact form)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub precision: Option<usize>,
}

impl Default for RenderSettings {
    fn default() -> Self {
        let defaults = RenderOptions::default();
        Self {
            indent: defaults.indent,
            precision: defaults.precision,
        }
    }
}

impl RenderSettings {
    pub fn options(&self) -> RenderOptions {
        RenderOptions {
            indent: self.indent.clone(),
            precision: self.precision,
        }
    }
}

/// Raw render settings: `None` means "not specified, inherit".
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawRenderSettings {
    pub indent: Option<String>,
    pub precision: Option<usize>,
}

/// Raw settings for intermediate parsing.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub strict: Option<bool>,
    pub render: RawRenderSettings,
}

/// Unified configuration for comida.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct Settings {
    /// Reject non-positive quantities and scale factors instead of ignoring them
    pub strict: bool,
    /// Output formatting
    pub render: RenderSettings,
}

/// Get the XDG config directory for comida.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "comida").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("comida.toml"))
}

/// Get the path to the local config file in a directory.
pub fn local_config_path(dir: &Path) -> PathBuf {
    dir.join(".comida.toml")
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> Result<RawSettings, ApplicationError> {
    let content = std::fs::read_to_string(path).map_err(|e| ApplicationError::Config {
        message: format!("read {}: {}", path.display(), e),
    })?;
    toml::from_str(&content).map_err(|e| ApplicationError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}

impl Settings {
    /// Overlay wins wherever it specifies a value.
    fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            strict: overlay.strict.unwrap_or(self.strict),
            render: RenderSettings {
                indent: overlay
                    .render
                    .indent
                    .clone()
                    .unwrap_or_else(|| self.render.indent.clone()),
                precision: overlay.render.precision.or(self.render.precision),
            },
        }
    }

    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `local_dir` - Optional directory holding a `.comida.toml`
    pub fn load(local_dir: Option<&Path>) -> Result<Self, ApplicationError> {
        let mut current = Self::default();

        if let Some(global_path) = global_config_path() {
            if global_path.exists() {
                debug!("global config: {}", global_path.display());
                current = current.merge_with(&load_raw_settings(&global_path)?);
            }
        }

        if let Some(dir) = local_dir {
            let local_path = local_config_path(dir);
            if local_path.exists() {
                debug!("local config: {}", local_path.display());
                current = current.merge_with(&load_raw_settings(&local_path)?);
            }
        }

        Self::apply_env_overrides(current)
    }

    /// Apply COMIDA_* environment variables as explicit overrides.
    fn apply_env_overrides(mut settings: Self) -> Result<Self, ApplicationError> {
        let config = Config::builder()
            .add_source(Environment::with_prefix("COMIDA").separator("__"))
            .build()
            .map_err(config_err)?;

        if let Ok(val) = config.get_bool("strict") {
            settings.strict = val;
        }
        if let Ok(val) = config.get_string("render.indent") {
            settings.render.indent = val;
        }
        if let Ok(val) = config.get_int("render.precision") {
            let precision = usize::try_from(val).map_err(|_| ApplicationError::Config {
                message: format!("render.precision must not be negative, got {}", val),
            })?;
            settings.render.precision = Some(precision);
        }

        Ok(settings)
    }

    /// Render the effective settings as TOML.
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize settings: {}", e),
        })
    }
}
