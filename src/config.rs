//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/treegen/treegen.toml`
//! 3. Local config: `<dir>/.treegen.toml`
//! 4. Environment variables: `TREEGEN_*` prefix
//!
//! Command-line flags are applied on top by the CLI.

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment, Map};
use directories::ProjectDirs;
use serde::Deserialize;

use crate::application::ApplicationError;
use crate::domain::{Charset, DomainError, RenderConfig};

/// Raw settings for intermediate parsing (`None` means "not specified, inherit").
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub charset: Option<String>,
    pub trailing_slash: Option<bool>,
    pub full_path: Option<bool>,
    pub root_dot: Option<bool>,
}

/// Unified configuration for treegen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Charset identifier: `ascii` or `utf-8`
    pub charset: String,
    /// Append `/` to names with children
    pub trailing_slash: bool,
    /// Render each name with its full ancestor path
    pub full_path: bool,
    /// Emit the `.` root row
    pub root_dot: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            charset: Charset::default().to_string(),
            trailing_slash: false,
            full_path: false,
            root_dot: true,
        }
    }
}

/// Get the XDG config directory for treegen.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "treegen").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("treegen.toml"))
}

/// Get the path to the local config file in a directory.
pub fn local_config_path(dir: &Path) -> PathBuf {
    dir.join(".treegen.toml")
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

/// Unset keys are `None`; a value that fails to convert is an error.
fn optional<T>(value: Result<T, ConfigError>) -> Result<Option<T>, ApplicationError> {
    match value {
        Ok(val) => Ok(Some(val)),
        Err(ConfigError::NotFound(_)) => Ok(None),
        Err(e) => Err(config_err(e)),
    }
}

impl Settings {
    /// Overlay wins where it specifies a value.
    fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            charset: overlay
                .charset
                .clone()
                .unwrap_or_else(|| self.charset.clone()),
            trailing_slash: overlay.trailing_slash.unwrap_or(self.trailing_slash),
            full_path: overlay.full_path.unwrap_or(self.full_path),
            root_dot: overlay.root_dot.unwrap_or(self.root_dot),
        }
    }

    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `local_dir` - Optional directory searched for `.treegen.toml`
    pub fn load(local_dir: Option<&Path>) -> Result<Self, ApplicationError> {
        // 1. Start with defaults
        let mut current = Self::default();

        // 2. Global config
        if let Some(global_path) = global_config_path() {
            if global_path.exists() {
                let raw = load_raw_settings(&global_path)?;
                current = current.merge_with(&raw);
            }
        }

        // 3. Local config
        if let Some(dir) = local_dir {
            let local_path = local_config_path(dir);
            if local_path.exists() {
                let raw = load_raw_settings(&local_path)?;
                current = current.merge_with(&raw);
            }
        }

        // 4. Environment variables
        Self::apply_env_overrides(current, None)
    }

    /// Apply TREEGEN_* environment variables as explicit overrides.
    ///
    /// `source` replaces the process environment when given.
    fn apply_env_overrides(
        mut settings: Self,
        source: Option<Map<String, String>>,
    ) -> Result<Self, ApplicationError> {
        let config = Config::builder()
            .add_source(
                Environment::with_prefix("TREEGEN")
                    .prefix_separator("_")
                    .separator("__")
                    .source(source),
            )
            .build()
            .map_err(config_err)?;

        if let Some(val) = optional(config.get_string("charset"))? {
            settings.charset = val;
        }
        if let Some(val) = optional(config.get_bool("trailing_slash"))? {
            settings.trailing_slash = val;
        }
        if let Some(val) = optional(config.get_bool("full_path"))? {
            settings.full_path = val;
        }
        if let Some(val) = optional(config.get_bool("root_dot"))? {
            settings.root_dot = val;
        }

        Ok(settings)
    }

    /// Validate into render options. Unknown charsets are rejected here,
    /// before any rendering work.
    pub fn render_config(&self) -> Result<RenderConfig, DomainError> {
        Ok(RenderConfig {
            charset: self.charset.parse()?,
            trailing_slash: self.trailing_slash,
            full_path: self.full_path,
            root_dot: self.root_dot,
        })
    }
}
