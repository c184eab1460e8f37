//! Message types for the Elm-style architecture
//!
//! All state changes flow through these message types.

use std::time::Instant;

/// Pointer interaction with the indicator buttons on the panel bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndicatorMsg {
    /// Pointer moved over an indicator (None = between or off buttons)
    Hover(Option<usize>),
    /// Mouse button went down on an indicator
    Press(usize),
    /// Mouse button released over the given indicator (if any)
    ///
    /// Completes a click only when released on the pressed indicator.
    Release(Option<usize>),
    /// A full click on an indicator
    Clicked(usize),
    /// Pointer left the panel window
    PointerLeft,
}

/// Dashboard slide messages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardMsg {
    Toggle,
    Show,
    Hide,
    /// Advance an in-flight slide to the given instant
    Tick(Instant),
}

/// Application-level messages
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppMsg {
    /// Flag activity on a page so its indicator draws attention
    Notify(usize),
    /// Renderer measured indicator label lengths (pixels along the bar)
    IndicatorsMeasured(Vec<u32>),
    /// Request application exit
    Quit,
}

/// Top-level message type
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    Indicator(IndicatorMsg),
    Dashboard(DashboardMsg),
    App(AppMsg),
}
