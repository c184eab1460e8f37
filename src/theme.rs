//! Theme system for the panel and dashboard
//!
//! Provides YAML-based theming support with compile-time embedded themes
//! and user-defined themes from config directories.
//!
//! Theme loading priority:
//! 1. User config: `~/.config/edgedock/themes/{id}.yaml`
//! 2. Embedded: built-in theme with that id
//! 3. Embedded: `default-dark`
//! 4. Hard-coded fallback palette

use std::path::{Path, PathBuf};

use serde::Deserialize;

// Embed theme YAML files at compile time
pub const DEFAULT_DARK_YAML: &str = include_str!("../themes/default-dark.yaml");
pub const SLATE_LIGHT_YAML: &str = include_str!("../themes/slate-light.yaml");

pub const DEFAULT_THEME_ID: &str = "default-dark";

/// A built-in theme entry
pub struct BuiltinTheme {
    /// Stable identifier for config (e.g. "default-dark", "slate-light")
    pub id: &'static str,
    /// Embedded YAML content
    pub yaml: &'static str,
}

/// Registry of all built-in themes
pub const BUILTIN_THEMES: &[BuiltinTheme] = &[
    BuiltinTheme {
        id: DEFAULT_THEME_ID,
        yaml: DEFAULT_DARK_YAML,
    },
    BuiltinTheme {
        id: "slate-light",
        yaml: SLATE_LIGHT_YAML,
    },
];

/// Where the active theme came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeSource {
    /// User-defined theme in ~/.config/edgedock/themes/
    User,
    /// Built-in theme matching the requested id
    Builtin,
    /// Requested theme unavailable; built-in default used instead
    Default,
    /// Nothing loadable; hard-coded palette
    Fallback,
}

#[derive(Debug, Clone)]
pub struct ThemeLoad {
    pub theme: Theme,
    pub source: ThemeSource,
}

/// Load a theme from a YAML file
pub fn from_file(path: &Path) -> Result<Theme, String> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| format!("Failed to read theme file {}: {}", path.display(), e))?;
    Theme::from_yaml(&content)
}

/// Load theme by id from the user themes directory or the builtins
pub fn load_theme(id: &str) -> ThemeLoad {
    load_theme_from(id, crate::config_paths::themes_dir().as_deref())
}

/// Load theme by id, searching `user_dir` before the builtins
///
/// Never fails: every miss is logged and the next source is tried, ending
/// with the hard-coded palette.
pub fn load_theme_from(id: &str, user_dir: Option<&Path>) -> ThemeLoad {
    tracing::info!("Requested style is '{}'", id);

    if let Some(user_path) = user_dir.map(|dir| user_theme_path(dir, id)) {
        if user_path.exists() {
            match from_file(&user_path) {
                Ok(theme) => {
                    tracing::info!("Loaded user theme from {}", user_path.display());
                    return ThemeLoad {
                        theme,
                        source: ThemeSource::User,
                    };
                }
                Err(e) => tracing::warn!("{}", e),
            }
        }
    }

    match Theme::from_builtin(id) {
        Ok(theme) => {
            tracing::info!("Loaded builtin theme: {}", id);
            return ThemeLoad {
                theme,
                source: ThemeSource::Builtin,
            };
        }
        Err(e) => tracing::warn!("{}", e),
    }

    if id != DEFAULT_THEME_ID {
        tracing::info!("Reverting to default style");
        match Theme::from_builtin(DEFAULT_THEME_ID) {
            Ok(theme) => {
                return ThemeLoad {
                    theme,
                    source: ThemeSource::Default,
                }
            }
            Err(e) => tracing::warn!("Default style unusable: {}", e),
        }
    }

    tracing::warn!("Running without style");
    ThemeLoad {
        theme: Theme::fallback(),
        source: ThemeSource::Fallback,
    }
}

fn user_theme_path(dir: &Path, id: &str) -> PathBuf {
    dir.join(format!("{}.yaml", id))
}

/// RGBA color (0-255 per channel)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    /// Create a new color from RGB values (alpha defaults to 255)
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Create a new color from RGBA values
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Convert to ARGB u32 for softbuffer
    pub fn to_argb_u32(&self) -> u32 {
        ((self.a as u32) << 24) | ((self.r as u32) << 16) | ((self.g as u32) << 8) | (self.b as u32)
    }

    /// Parse from "#RRGGBB" or "#RRGGBBAA" hex string
    pub fn from_hex(s: &str) -> Result<Self, String> {
        let s = s.trim_start_matches('#');
        let channel = |range: std::ops::Range<usize>| {
            s.get(range)
                .ok_or_else(|| format!("Invalid color format: {}", s))
                .and_then(|hex| u8::from_str_radix(hex, 16).map_err(|e| e.to_string()))
        };
        match s.len() {
            6 => Ok(Color::rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?)),
            8 => Ok(Color::rgba(
                channel(0..2)?,
                channel(2..4)?,
                channel(4..6)?,
                channel(6..8)?,
            )),
            _ => Err(format!("Invalid color format: {}", s)),
        }
    }
}

fn parse_optional(value: &Option<String>, default: Color) -> Result<Color, String> {
    value
        .as_ref()
        .map(|s| Color::from_hex(s))
        .transpose()
        .map(|c| c.unwrap_or(default))
}

/// Raw theme data as parsed from YAML
#[derive(Debug, Clone, Deserialize)]
pub struct ThemeData {
    pub version: u32,
    pub name: String,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    pub ui: UiThemeData,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UiThemeData {
    pub panel: PanelThemeData,
    pub indicator: IndicatorThemeData,
    pub dashboard: DashboardThemeData,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PanelThemeData {
    pub background: String,
    #[serde(default)]
    pub border: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct IndicatorThemeData {
    pub background: String,
    pub foreground: String,
    pub active: String,
    #[serde(default)]
    pub background_hover: Option<String>,
    #[serde(default)]
    pub background_pressed: Option<String>,
    #[serde(default)]
    pub notify: Option<String>,
    #[serde(default)]
    pub border: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DashboardThemeData {
    pub background: String,
    pub title: String,
    #[serde(default)]
    pub border: Option<String>,
}

/// Resolved theme with parsed colors
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,
    pub panel: PanelTheme,
    pub indicator: IndicatorTheme,
    pub dashboard: DashboardTheme,
}

#[derive(Debug, Clone)]
pub struct PanelTheme {
    pub background: Color,
    pub border: Color,
}

#[derive(Debug, Clone)]
pub struct IndicatorTheme {
    pub background: Color,
    pub background_hover: Color,
    pub background_pressed: Color,
    /// Fill of the indicator whose page is current and shown
    pub active: Color,
    /// Marker for pages with unseen activity
    pub notify: Color,
    pub foreground: Color,
    pub border: Color,
}

#[derive(Debug, Clone)]
pub struct DashboardTheme {
    pub background: Color,
    pub border: Color,
    pub title: Color,
}

impl Theme {
    /// Load theme from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self, String> {
        let data: ThemeData =
            serde_yaml::from_str(yaml).map_err(|e| format!("YAML parse error: {}", e))?;
        Self::from_data(data)
    }

    /// Load a built-in theme by id
    pub fn from_builtin(id: &str) -> Result<Self, String> {
        let entry = BUILTIN_THEMES
            .iter()
            .find(|t| t.id == id)
            .ok_or_else(|| format!("Unknown theme id: {}", id))?;
        Theme::from_yaml(entry.yaml)
    }

    /// Convert raw theme data to resolved theme
    pub fn from_data(data: ThemeData) -> Result<Self, String> {
        let fallback = Theme::fallback();
        let ui = data.ui;

        let indicator_bg = Color::from_hex(&ui.indicator.background)?;

        Ok(Theme {
            name: data.name,
            panel: PanelTheme {
                background: Color::from_hex(&ui.panel.background)?,
                border: parse_optional(&ui.panel.border, fallback.panel.border)?,
            },
            indicator: IndicatorTheme {
                background: indicator_bg,
                background_hover: parse_optional(&ui.indicator.background_hover, indicator_bg)?,
                background_pressed: parse_optional(
                    &ui.indicator.background_pressed,
                    indicator_bg,
                )?,
                active: Color::from_hex(&ui.indicator.active)?,
                notify: parse_optional(&ui.indicator.notify, fallback.indicator.notify)?,
                foreground: Color::from_hex(&ui.indicator.foreground)?,
                border: parse_optional(&ui.indicator.border, fallback.indicator.border)?,
            },
            dashboard: DashboardTheme {
                background: Color::from_hex(&ui.dashboard.background)?,
                border: parse_optional(&ui.dashboard.border, fallback.dashboard.border)?,
                title: Color::from_hex(&ui.dashboard.title)?,
            },
        })
    }

    /// Hard-coded palette used when no theme can be loaded
    pub fn fallback() -> Self {
        Theme {
            name: "Unstyled".to_string(),
            panel: PanelTheme {
                background: Color::rgb(0x20, 0x20, 0x20),
                border: Color::rgb(0x40, 0x40, 0x40),
            },
            indicator: IndicatorTheme {
                background: Color::rgb(0x30, 0x30, 0x30),
                background_hover: Color::rgb(0x3A, 0x3A, 0x3A),
                background_pressed: Color::rgb(0x28, 0x28, 0x28),
                active: Color::rgb(0x00, 0x7A, 0xCC),
                notify: Color::rgb(0xE5, 0xA5, 0x0A),
                foreground: Color::rgb(0xE0, 0xE0, 0xE0),
                border: Color::rgb(0x40, 0x40, 0x40),
            },
            dashboard: DashboardTheme {
                background: Color::rgb(0x1E, 0x1E, 0x1E),
                border: Color::rgb(0x40, 0x40, 0x40),
                title: Color::rgb(0xFF, 0xFF, 0xFF),
            },
        }
    }

    /// Default dark theme (YAML-backed with Rust fallback)
    pub fn default_dark() -> Self {
        Theme::from_yaml(DEFAULT_DARK_YAML).unwrap_or_else(|_| Theme::fallback())
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::default_dark()
    }
}
