//! Where edgedock keeps its files
//!
//! One directory holds `config.yaml` next to the `themes/` and `logs/`
//! subdirectories.

use std::fs;
use std::path::PathBuf;

const APP_DIR: &str = "edgedock";
const CONFIG_FILE: &str = "config.yaml";
const THEMES_DIR: &str = "themes";
const LOGS_DIR: &str = "logs";

#[cfg(target_os = "windows")]
fn base_dir() -> Option<PathBuf> {
    dirs::config_dir()
}

/// XDG location on every Unix, macOS included
#[cfg(not(target_os = "windows"))]
fn base_dir() -> Option<PathBuf> {
    std::env::var_os("XDG_CONFIG_HOME")
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
        .or_else(|| dirs::home_dir().map(|home| home.join(".config")))
}

pub fn config_dir() -> Option<PathBuf> {
    base_dir().map(|base| base.join(APP_DIR))
}

pub fn config_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join(CONFIG_FILE))
}

/// User themes, looked up before the builtin ones
pub fn themes_dir() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join(THEMES_DIR))
}

pub fn logs_dir() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join(LOGS_DIR))
}

/// Create `dir` and any missing parents
fn create(dir: Option<PathBuf>) -> Result<PathBuf, String> {
    let dir = dir.ok_or_else(|| "No config directory available".to_string())?;
    fs::create_dir_all(&dir)
        .map_err(|e| format!("Failed to create directory {}: {}", dir.display(), e))?;
    Ok(dir)
}

pub fn ensure_logs_dir() -> Result<PathBuf, String> {
    create(logs_dir())
}

/// Create the config directory with its themes and logs subdirectories
pub fn ensure_all_config_dirs() {
    for result in [create(themes_dir()), create(logs_dir())] {
        match result {
            Ok(dir) => tracing::debug!("Config directory ready: {}", dir.display()),
            Err(e) => tracing::warn!("Failed to ensure config directories: {}", e),
        }
    }
}
