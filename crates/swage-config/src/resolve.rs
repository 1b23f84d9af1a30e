//! Configuration discovery.
//!
//! Resolution order: explicit path → environment variables → project file
//! (searched upward from the working directory) → XDG user config →
//! built-in defaults.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::validate::ConfigResult;
use crate::Config;

/// Where a configuration was found.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ConfigSource {
    /// Explicitly provided by the caller.
    Explicit,

    /// Set via environment variable.
    Environment,

    /// `swage.toml` found in the project tree.
    ProjectFile,

    /// Found in the XDG config directory.
    XdgConfig,

    /// Using built-in defaults.
    #[default]
    BuiltinDefault,
}

impl std::fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigSource::Explicit => write!(f, "explicit path"),
            ConfigSource::Environment => write!(f, "environment variable"),
            ConfigSource::ProjectFile => write!(f, "project file"),
            ConfigSource::XdgConfig => write!(f, "XDG config"),
            ConfigSource::BuiltinDefault => write!(f, "builtin default"),
        }
    }
}

/// Environment variable names.
pub const ENV_CONFIG_PATH: &str = "SWAGE_CONFIG";
pub const ENV_CONFIG_DIR: &str = "SWAGE_CONFIG_DIR";

/// Application name for XDG directories.
const APP_NAME: &str = "swage";

/// A discovered configuration file and its provenance.
#[derive(Debug, Clone, Default)]
pub struct ConfigLocation {
    /// Path to the declaration file, or `None` for built-in defaults.
    pub path: Option<PathBuf>,

    /// Where the path came from (for diagnostics).
    pub source: ConfigSource,
}

/// Resolve the configuration file using the standard resolution order.
///
/// 1. Explicit path (if provided)
/// 2. `SWAGE_CONFIG` environment variable (direct path)
/// 3. `SWAGE_CONFIG_DIR` environment variable + `swage.toml`
/// 4. `swage.toml` in the working directory or any ancestor
/// 5. XDG config directory (`~/.config/swage/swage.toml`)
/// 6. Built-in defaults (no file)
///
/// Candidates that do not exist on disk fall through to the next step.
pub fn resolve_config(explicit: Option<&Path>) -> ConfigLocation {
    // 1. Explicit path
    if let Some(path) = explicit {
        if path.exists() {
            return ConfigLocation {
                path: Some(path.to_path_buf()),
                source: ConfigSource::Explicit,
            };
        }
    }

    // 2. Environment variable (direct path)
    if let Ok(env_path) = std::env::var(ENV_CONFIG_PATH) {
        let path = PathBuf::from(env_path);
        if path.exists() {
            return ConfigLocation {
                path: Some(path),
                source: ConfigSource::Environment,
            };
        }
    }

    // 3. Environment variable (config dir)
    if let Ok(config_dir) = std::env::var(ENV_CONFIG_DIR) {
        let path = PathBuf::from(config_dir).join(crate::CONFIG_FILE_NAME);
        if path.exists() {
            return ConfigLocation {
                path: Some(path),
                source: ConfigSource::Environment,
            };
        }
    }

    // 4. Project file, searched upward
    if let Ok(cwd) = std::env::current_dir() {
        if let Some(path) = find_project_file(&cwd) {
            return ConfigLocation {
                path: Some(path),
                source: ConfigSource::ProjectFile,
            };
        }
    }

    // 5. XDG config directory
    if let Some(xdg_config) = dirs::config_dir() {
        let path = xdg_config.join(APP_NAME).join(crate::CONFIG_FILE_NAME);
        if path.exists() {
            return ConfigLocation {
                path: Some(path),
                source: ConfigSource::XdgConfig,
            };
        }
    }

    // 6. Built-in defaults
    ConfigLocation::default()
}

/// Search for `swage.toml` in `start` and each ancestor directory.
pub fn find_project_file(start: &Path) -> Option<PathBuf> {
    let mut dir = start;
    loop {
        let candidate = dir.join(crate::CONFIG_FILE_NAME);
        if candidate.is_file() {
            return Some(candidate);
        }
        dir = dir.parent()?;
    }
}

/// XDG config directory for swage.
pub fn xdg_config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join(APP_NAME))
}

/// Resolve, parse, and finalize a configuration in one step.
///
/// Falls back to built-in defaults when no declaration file is found. The
/// returned record has been through [`Config::load`].
pub fn load_config(explicit: Option<&Path>) -> ConfigResult<(Config, ConfigLocation)> {
    let location = resolve_config(explicit);

    let config = match &location.path {
        Some(path) => {
            debug!(path = %path.display(), source = %location.source, "Loading configuration");
            Config::from_file(path)?
        }
        None => {
            debug!("No configuration file found, using builtin defaults");
            Config::default()
        }
    };

    Ok((config.load()?, location))
}
