//! Shell configuration persistence
//!
//! Stores user preferences in `~/.config/edgedock/config.yaml`. A missing file
//! is created with defaults; a corrupt one is reported and left alone while
//! the shell runs on defaults. Values that make the layout impossible are
//! rejected by `validate()` and abort startup.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::panel::{Alignment, BarLayout, Orientation};

/// Fatal configuration problems
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("unsupported orientation '{0}' (expected north, south, east or west)")]
    InvalidOrientation(String),
    #[error("unsupported button alignment '{0}'")]
    InvalidAlignment(String),
    #[error("invalid geometry: {0}")]
    InvalidGeometry(String),
    #[error("the dashboard needs at least one page")]
    NoPages,
}

/// Shell configuration that persists across sessions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShellConfig {
    /// Theme id (e.g., "default-dark", "slate-light")
    #[serde(default = "default_style")]
    pub style: String,

    #[serde(default = "default_language")]
    pub language: String,

    /// Screen edge: north, south, east or west
    #[serde(default = "default_orientation")]
    pub orientation: String,

    /// Slide animation length in milliseconds (0 disables the tween)
    #[serde(default = "default_animation_ms")]
    pub animation_ms: u64,

    /// Font used for indicator labels and page titles
    #[serde(default)]
    pub font: Option<PathBuf>,

    #[serde(default)]
    pub dashboard: DashboardConfig,

    #[serde(default)]
    pub panel: PanelConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardConfig {
    /// Fraction of the screen the dashboard covers, in (0, 1]
    #[serde(default = "default_ratio")]
    pub ratio: f64,

    #[serde(default = "default_pages")]
    pub pages: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PanelConfig {
    #[serde(default = "default_margin")]
    pub margin_vertical: u32,

    #[serde(default = "default_margin")]
    pub margin_horizontal: u32,

    #[serde(default = "default_margin")]
    pub button_spacing: u32,

    /// left/right/top/bottom/center (or start/end)
    #[serde(default = "default_alignment")]
    pub button_alignment: String,

    /// Depth of the bar in pixels
    #[serde(default = "default_thickness")]
    pub thickness: u32,
}

fn default_style() -> String {
    "default-dark".to_string()
}

fn default_language() -> String {
    "english".to_string()
}

fn default_orientation() -> String {
    "south".to_string()
}

fn default_animation_ms() -> u64 {
    200
}

fn default_ratio() -> f64 {
    0.8
}

fn default_pages() -> Vec<String> {
    vec!["Home".to_string(), "System".to_string(), "Network".to_string()]
}

fn default_margin() -> u32 {
    2
}

fn default_alignment() -> String {
    "center".to_string()
}

fn default_thickness() -> u32 {
    25
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            ratio: default_ratio(),
            pages: default_pages(),
        }
    }
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            margin_vertical: default_margin(),
            margin_horizontal: default_margin(),
            button_spacing: default_margin(),
            button_alignment: default_alignment(),
            thickness: default_thickness(),
        }
    }
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            style: default_style(),
            language: default_language(),
            orientation: default_orientation(),
            animation_ms: default_animation_ms(),
            font: None,
            dashboard: DashboardConfig::default(),
            panel: PanelConfig::default(),
        }
    }
}

/// Where a loaded configuration came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigSource {
    /// Parsed from an existing file
    File,
    /// No file existed; defaults were written to disk
    Created,
    /// The file was unreadable or corrupt; running on defaults
    Defaulted,
}

#[derive(Debug, Clone)]
pub struct ConfigLoad {
    pub config: ShellConfig,
    pub source: ConfigSource,
}

/// Configuration values checked and converted to their typed form
#[derive(Debug, Clone)]
pub struct ValidatedConfig {
    pub orientation: Orientation,
    pub bar: BarLayout,
    pub thickness: u32,
    pub ratio: f64,
    pub pages: Vec<String>,
    pub slide_duration: Duration,
}

impl ShellConfig {
    /// Load config from the default location
    pub fn load() -> ConfigLoad {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return ConfigLoad {
                config: Self::default(),
                source: ConfigSource::Defaulted,
            };
        };
        Self::load_from(&path)
    }

    /// Load config from `path`, creating it with defaults if it doesn't exist
    pub fn load_from(path: &Path) -> ConfigLoad {
        tracing::info!("Fetching configuration file at {}", path.display());

        if !path.exists() {
            tracing::info!(
                "Config file not found at {}, creating it with defaults",
                path.display()
            );
            let config = Self::default();
            let source = match config.save_to(path) {
                Ok(()) => ConfigSource::Created,
                Err(e) => {
                    tracing::error!("{}", e);
                    ConfigSource::Defaulted
                }
            };
            return ConfigLoad { config, source };
        }

        let defaulted = ConfigLoad {
            config: Self::default(),
            source: ConfigSource::Defaulted,
        };

        match std::fs::read_to_string(path) {
            Ok(content) => match serde_yaml::from_str(&content) {
                Ok(config) => {
                    tracing::info!("Loaded config from {}", path.display());
                    ConfigLoad {
                        config,
                        source: ConfigSource::File,
                    }
                }
                Err(e) => {
                    tracing::warn!("Failed to parse config at {}: {}", path.display(), e);
                    defaulted
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read config at {}: {}", path.display(), e);
                defaulted
            }
        }
    }

    /// Save config to `path`
    ///
    /// Creates the parent directory if it doesn't exist.
    pub fn save_to(&self, path: &Path) -> Result<(), String> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create config directory: {}", e))?;
        }

        let content = serde_yaml::to_string(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;

        std::fs::write(path, content)
            .map_err(|e| format!("Failed to write config to {}: {}", path.display(), e))?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }

    /// Check every value the layout depends on
    pub fn validate(&self) -> Result<ValidatedConfig, ConfigError> {
        let orientation: Orientation = self.orientation.parse()?;
        let alignment = Alignment::resolve(&self.panel.button_alignment, orientation)?;

        if self.panel.thickness == 0 {
            return Err(ConfigError::InvalidGeometry(
                "panel thickness must be positive".to_string(),
            ));
        }

        let ratio = self.dashboard.ratio;
        if !(ratio > 0.0 && ratio <= 1.0) {
            return Err(ConfigError::InvalidGeometry(format!(
                "dashboard ratio {} outside (0, 1]",
                ratio
            )));
        }

        if self.dashboard.pages.is_empty() {
            return Err(ConfigError::NoPages);
        }

        Ok(ValidatedConfig {
            orientation,
            bar: BarLayout {
                orientation,
                alignment,
                margin_vertical: self.panel.margin_vertical,
                margin_horizontal: self.panel.margin_horizontal,
                button_spacing: self.panel.button_spacing,
            },
            thickness: self.panel.thickness,
            ratio,
            pages: self.dashboard.pages.clone(),
            slide_duration: Duration::from_millis(self.animation_ms),
        })
    }
}
