//! Runtime module - winit/platform integration
//!
//! This module contains platform-specific code for running the shell:
//! - `app` - ApplicationHandler owning the panel and dashboard windows
//! - `wm` - window attributes, screen detection and reserved space
//! - `input` - pointer and keyboard event to message mapping

pub mod app;
pub mod input;
pub mod wm;

pub use app::App;
