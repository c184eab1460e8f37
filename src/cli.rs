//! Command-line argument parsing for the shell
//!
//! Supports:
//! - Verbose console logging
//! - Alternative configuration file
//! - Orientation and screen size overrides
//! - Printing the computed layout without opening windows

use clap::Parser;
use std::path::PathBuf;

use crate::config::ShellConfig;
use crate::panel::{Orientation, ScreenGeometry};

/// Screen size assumed by `--dump-layout` when none is given
pub const DEFAULT_DUMP_SCREEN: ScreenGeometry = ScreenGeometry::new(1920, 1080);

/// An edge panel with a sliding dashboard
#[derive(Parser, Debug)]
#[command(
    name = "edgedock",
    version,
    about = "An edge panel with a sliding dashboard"
)]
pub struct CliArgs {
    /// Log to the console at info level
    #[arg(short = 'v', long)]
    pub verbose: bool,

    /// Use this configuration file instead of the default one
    #[arg(short = 'c', long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Screen edge to attach to (north, south, east, west)
    #[arg(short = 'o', long, value_name = "EDGE")]
    pub orientation: Option<String>,

    /// Override the detected screen size, e.g. 2560x1440
    #[arg(long, value_name = "WxH", value_parser = parse_screen)]
    pub screen: Option<ScreenGeometry>,

    /// Print the computed layout as JSON and exit
    #[arg(long)]
    pub dump_layout: bool,
}

/// What the process should do after startup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartupMode {
    /// Open the panel and dashboard windows
    Run,
    /// Print the layout for the given screen and exit
    DumpLayout(ScreenGeometry),
}

/// Configuration derived from CLI arguments
#[derive(Debug, Clone)]
pub struct StartupConfig {
    pub mode: StartupMode,
    pub verbose: bool,
    pub config_path: Option<PathBuf>,
    pub orientation: Option<Orientation>,
    /// Screen size to use instead of querying the primary monitor
    pub screen: Option<ScreenGeometry>,
}

impl CliArgs {
    /// Convert parsed CLI args into startup configuration
    pub fn into_config(self) -> Result<StartupConfig, String> {
        let orientation = self
            .orientation
            .as_deref()
            .map(str::parse::<Orientation>)
            .transpose()
            .map_err(|e| e.to_string())?;

        let mode = if self.dump_layout {
            StartupMode::DumpLayout(self.screen.unwrap_or(DEFAULT_DUMP_SCREEN))
        } else {
            StartupMode::Run
        };

        Ok(StartupConfig {
            mode,
            verbose: self.verbose,
            config_path: self.config,
            orientation,
            screen: self.screen,
        })
    }
}

impl StartupConfig {
    /// Apply command-line overrides on top of the loaded configuration
    pub fn apply_overrides(&self, config: &mut ShellConfig) {
        if let Some(orientation) = self.orientation {
            tracing::info!("Orientation overridden from command line: {}", orientation);
            config.orientation = orientation.as_str().to_string();
        }
    }
}

/// Parse a `WIDTHxHEIGHT` screen size
pub fn parse_screen(value: &str) -> Result<ScreenGeometry, String> {
    let (width, height) = value
        .trim()
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected WIDTHxHEIGHT, got '{}'", value))?;

    let width: u32 = width
        .trim()
        .parse()
        .map_err(|e| format!("invalid width '{}': {}", width, e))?;
    let height: u32 = height
        .trim()
        .parse()
        .map_err(|e| format!("invalid height '{}': {}", height, e))?;

    let screen = ScreenGeometry::new(width, height);
    if !screen.is_usable() {
        return Err(format!(
            "screen size {}x{} outside 1..={} per side",
            width,
            height,
            ScreenGeometry::MAX_DIMENSION
        ));
    }
    Ok(screen)
}
