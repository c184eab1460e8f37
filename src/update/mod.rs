//! Update functions for the Elm-style architecture
//!
//! All state transformations flow through these functions.

mod app;
mod dashboard;
mod indicator;

use crate::commands::Cmd;
use crate::messages::Msg;
use crate::model::ShellModel;

#[cfg(debug_assertions)]
use crate::tracing::ShellSnapshot;
#[cfg(debug_assertions)]
use tracing::{debug, span, Level};

pub use app::update_app;
pub use dashboard::update_dashboard;
pub use indicator::update_indicator;

/// Main update function - dispatches to sub-handlers
///
/// In debug builds, this wraps with tracing instrumentation.
/// In release builds, it's a direct dispatch with zero overhead.
#[inline]
pub fn update(model: &mut ShellModel, msg: Msg) -> Option<Cmd> {
    #[cfg(debug_assertions)]
    {
        update_traced(model, msg)
    }
    #[cfg(not(debug_assertions))]
    {
        update_inner(model, msg)
    }
}

/// Inner update logic (no tracing)
fn update_inner(model: &mut ShellModel, msg: Msg) -> Option<Cmd> {
    match msg {
        Msg::Indicator(m) => indicator::update_indicator(model, m),
        Msg::Dashboard(m) => dashboard::update_dashboard(model, m),
        Msg::App(m) => app::update_app(model, m),
    }
}

/// Traced update wrapper (debug builds only)
///
/// Captures before/after page and visibility and logs the diff.
/// Frame ticks and hover moves are not logged.
#[cfg(debug_assertions)]
fn update_traced(model: &mut ShellModel, msg: Msg) -> Option<Cmd> {
    use crate::messages::{DashboardMsg, IndicatorMsg};

    let is_noisy = matches!(
        &msg,
        Msg::Dashboard(DashboardMsg::Tick(_)) | Msg::Indicator(IndicatorMsg::Hover(_))
    );

    let msg_name = msg_type_name(&msg);
    let _span = if is_noisy {
        None
    } else {
        Some(span!(Level::DEBUG, "update", msg = %msg_name).entered())
    };

    let before = ShellSnapshot::from_model(model);

    if !is_noisy {
        debug!(target: "message", msg = %msg_name, "processing");
    }

    let result = update_inner(model, msg);

    if let Some(diff) = before.diff(&ShellSnapshot::from_model(model)) {
        debug!(target: "shell", %diff, "state changed");
    }

    result
}

/// Get a display name for a message type
///
/// Example outputs:
/// - `Indicator::Clicked(2)`
/// - `Dashboard::Toggle`
/// - `App::Notify(1)`
#[cfg(debug_assertions)]
fn msg_type_name(msg: &Msg) -> String {
    match msg {
        Msg::Indicator(m) => format!("Indicator::{:?}", m),
        Msg::Dashboard(m) => format!("Dashboard::{:?}", m),
        Msg::App(m) => format!("App::{:?}", m),
    }
}
