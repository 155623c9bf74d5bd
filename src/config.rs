//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/rstree/rstree.toml`
//! 3. Local config: `./.rstree.toml`
//! 4. Environment variables: `RSTREE_*` prefix

use std::path::{Path, PathBuf};

use config::{Config, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::errors::{TreeError, TreeResult};
use crate::node::DEFAULT_MAX_DEPTH;

/// Unified configuration for rstree.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Recursion cap for aggregation and depth calculations
    pub max_depth: usize,
    /// Disable colored terminal output
    pub no_color: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            no_color: false,
        }
    }
}

/// Raw settings for intermediate parsing (fields are `Option` to distinguish
/// "not specified" from an explicit value).
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
struct RawSettings {
    max_depth: Option<usize>,
    no_color: Option<bool>,
}

/// Get the XDG config directory for rstree.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "rstree").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("rstree.toml"))
}

/// Get the path to the local config file in the working directory.
pub fn local_config_path() -> PathBuf {
    PathBuf::from(".rstree.toml")
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> TreeResult<RawSettings> {
    let content = std::fs::read_to_string(path)?;
    toml::from_str(&content).map_err(|e| TreeError::InvalidConfig {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}

impl Settings {
    /// Overlay wins if specified, otherwise keep base.
    fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            max_depth: overlay.max_depth.unwrap_or(self.max_depth),
            no_color: overlay.no_color.unwrap_or(self.no_color),
        }
    }

    /// Load settings with layered precedence.
    ///
    /// # Precedence (lowest to highest)
    /// 1. Compiled defaults
    /// 2. Global config: `$XDG_CONFIG_HOME/rstree/rstree.toml`
    /// 3. Local config: `./.rstree.toml`
    /// 4. Environment variables: `RSTREE_*` prefix (explicit override)
    pub fn load() -> TreeResult<Self> {
        let mut current = Self::default();

        if let Some(global_path) = global_config_path() {
            if global_path.exists() {
                let raw = load_raw_settings(&global_path)?;
                current = current.merge_with(&raw);
            }
        }

        let local_path = local_config_path();
        if local_path.exists() {
            let raw = load_raw_settings(&local_path)?;
            current = current.merge_with(&raw);
        }

        Self::apply_env_overrides(current)
    }

    /// Load settings from a single explicit file on top of the compiled
    /// defaults, ignoring the global/local layers and the environment.
    pub fn load_from(path: &Path) -> TreeResult<Self> {
        let raw = load_raw_settings(path)?;
        Ok(Self::default().merge_with(&raw))
    }

    /// Apply RSTREE_* environment variables as explicit overrides.
    fn apply_env_overrides(mut settings: Self) -> TreeResult<Self> {
        let config = Config::builder()
            .add_source(Environment::with_prefix("RSTREE"))
            .build()?;

        if let Ok(val) = config.get_int("max_depth") {
            settings.max_depth = val.max(0) as usize;
        }
        if let Ok(val) = config.get_bool("no_color") {
            settings.no_color = val;
        }

        Ok(settings)
    }
}

/// Commented template written by `rstree config init`.
pub fn config_template() -> String {
    format!(
        r#"# rstree configuration
#
# Layered on top of compiled defaults; the local ./.rstree.toml and
# RSTREE_* environment variables override this file.

# Recursion cap for aggregation and depth calculations
# max_depth = {}

# Disable colored terminal output
# no_color = false
"#,
        DEFAULT_MAX_DEPTH
    )
}
