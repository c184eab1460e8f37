//! edgedock - edge panel with a sliding dashboard
//!
//! This crate provides the core types and logic for the shell: panel and
//! dashboard geometry, the dashboard slide state machine and the indicator
//! page stack, wired together with the Elm Architecture pattern.

pub mod cli;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod messages;
pub mod model;
pub mod pages;
pub mod panel;
pub mod slide;
pub mod theme;
pub mod tracing;
pub mod update;

// Re-export commonly used types
pub use commands::Cmd;
pub use config::ShellConfig;
pub use messages::Msg;
pub use model::ShellModel;
pub use theme::Theme;
