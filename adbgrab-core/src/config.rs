//! src/config.rs
//! ============================================================================
//! # Config: Application Configuration Loader
//!
//! Loads user-editable settings as TOML from the proper cross-platform config
//! path using the [`directories`](https://docs.rs/directories) crate, with
//! robust defaulting when no config file exists. The config is read-only:
//! nothing about a session (paths, selection) is ever written back.

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::AppError;

/// Main configuration struct for the application.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Name or path of the adb executable.
    pub adb_path: String,
    /// Initial device directory for every run.
    pub device_root: String,
    /// Include dotfiles in device and host listings.
    pub show_hidden: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            adb_path: "adb".to_string(),
            // More reliable than /sdcard across devices
            device_root: "/storage/emulated/0".to_string(),
            show_hidden: false,
        }
    }
}

impl Config {
    /// Loads config from the TOML file at the XDG-compliant app config dir,
    /// or returns defaults if the file does not exist.
    pub fn load() -> Result<Self, AppError> {
        let path: PathBuf = Self::config_path()?;
        if path.exists() {
            let text: String =
                std::fs::read_to_string(&path).map_err(|source| AppError::ConfigIo {
                    path: path.clone(),
                    source,
                })?;
            let cfg: Config = toml::from_str(&text)?;
            Ok(cfg)
        } else {
            Ok(Config::default())
        }
    }

    /// Returns the canonical config file path using `directories::ProjectDirs`.
    pub fn config_path() -> Result<PathBuf, AppError> {
        let proj_dirs: ProjectDirs = ProjectDirs::from("org", "adbgrab", "adbgrab")
            .ok_or_else(|| AppError::Other("Could not determine config directory.".to_string()))?;
        Ok(proj_dirs.config_dir().join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_fixed_startup_contract() {
        let cfg = Config::default();
        assert_eq!(cfg.adb_path, "adb");
        assert_eq!(cfg.device_root, "/storage/emulated/0");
        assert!(!cfg.show_hidden);
    }

    #[test]
    fn partial_toml_falls_back_to_defaults() {
        let cfg: Config = toml::from_str("show_hidden = true").unwrap();
        assert!(cfg.show_hidden);
        assert_eq!(cfg.adb_path, "adb");
        assert_eq!(cfg.device_root, "/storage/emulated/0");
    }
}
