//! edgedock - edge panel with a sliding dashboard

use anyhow::{Context as _, Result};
use clap::Parser;
use winit::event_loop::EventLoop;

use edgedock::cli::{CliArgs, StartupConfig, StartupMode};
use edgedock::config::{ConfigLoad, ShellConfig};
use edgedock::model::ShellModel;
use edgedock::panel::ScreenGeometry;
use edgedock::theme::{load_theme, Theme};

mod runtime;
mod view;

use runtime::App;

fn load_config(startup: &StartupConfig) -> ShellConfig {
    let ConfigLoad { mut config, source } = match &startup.config_path {
        Some(path) => ShellConfig::load_from(path),
        None => ShellConfig::load(),
    };
    tracing::debug!(?source, "configuration loaded");
    startup.apply_overrides(&mut config);
    config
}

/// Print the layout computed for `screen` as JSON
fn dump_layout(config: &ShellConfig, theme: Theme, screen: ScreenGeometry) -> Result<()> {
    let model = ShellModel::new(config, theme, screen)?;
    let json = serde_json::to_string_pretty(&model.layout_report())
        .context("Failed to serialize layout")?;
    println!("{}", json);
    Ok(())
}

fn main() -> Result<()> {
    let startup = CliArgs::parse()
        .into_config()
        .map_err(|e| anyhow::anyhow!(e))?;

    edgedock::tracing::init(startup.verbose);
    edgedock::config_paths::ensure_all_config_dirs();

    let config = load_config(&startup);
    let theme = load_theme(&config.style).theme;

    if let StartupMode::DumpLayout(screen) = startup.mode {
        return dump_layout(&config, theme, screen);
    }

    // Fail before opening windows on settings the layout cannot use
    config.validate()?;

    let event_loop = EventLoop::new()?;
    let mut app = App::new(config, theme, startup.screen);

    event_loop.run_app(&mut app)?;

    match app.take_error() {
        Some(e) => Err(e),
        None => Ok(()),
    }
}
