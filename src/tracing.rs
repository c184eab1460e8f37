//! Logging infrastructure
//!
//! Provides structured logging with scoped filtering for diagnosing layout
//! and slide state transitions.
//!
//! # Usage
//!
//! Configure via RUST_LOG environment variable:
//! - `RUST_LOG=debug` - all debug logs
//! - `RUST_LOG=slide=debug` - only slide transitions
//! - `RUST_LOG=edgedock::update=debug` - module-level filtering
//!
//! # Log Files
//!
//! Logs are written to `~/.config/edgedock/logs/edgedock.log` with daily rotation.
//! File logging uses debug level by default for more verbose troubleshooting.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::model::ShellModel;
use crate::slide::Visibility;

/// Initialize tracing subscriber with console and file logging
///
/// Console output respects RUST_LOG; without it the level is `info` when
/// `verbose` is set and `warn` otherwise.
pub fn init(verbose: bool) {
    let fallback = if verbose { "info" } else { "warn" };
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    let console_layer = fmt::layer()
        .with_target(true)
        .with_line_number(true)
        .with_filter(console_filter);

    // File layer - always debug level for troubleshooting
    let file_layer = match crate::config_paths::ensure_logs_dir() {
        Ok(logs_dir) => {
            let file_appender = tracing_appender::rolling::daily(logs_dir, "edgedock.log");
            Some(
                fmt::layer()
                    .with_writer(file_appender)
                    .with_ansi(false)
                    .with_target(true)
                    .with_line_number(true)
                    .with_filter(EnvFilter::new("debug")),
            )
        }
        Err(e) => {
            eprintln!("Warning: Could not initialize file logging: {}", e);
            None
        }
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();
}

/// Lightweight snapshot of dashboard state for diffing
#[derive(Debug, Clone, PartialEq)]
pub struct ShellSnapshot {
    pub page: usize,
    pub visibility: Option<Visibility>,
    pub animating: bool,
}

impl ShellSnapshot {
    pub fn from_model(model: &ShellModel) -> Self {
        Self {
            page: model.pages.current_index(),
            visibility: model.dashboard.visibility(),
            animating: model.dashboard.is_animating(),
        }
    }

    /// Generate a diff description between two snapshots
    pub fn diff(&self, other: &ShellSnapshot) -> Option<String> {
        let mut changes = Vec::new();

        if self.page != other.page {
            changes.push(format!("page: {} → {}", self.page, other.page));
        }
        if self.visibility != other.visibility {
            changes.push(format!(
                "visibility: {:?} → {:?}",
                self.visibility, other.visibility
            ));
        }
        if self.animating != other.animating {
            let status = if other.animating { "started" } else { "finished" };
            changes.push(format!("slide {}", status));
        }

        if changes.is_empty() {
            None
        } else {
            Some(changes.join("; "))
        }
    }
}
