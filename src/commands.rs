//! Command types for the Elm-style architecture
//!
//! Commands represent side effects that should be performed after an update.

use crate::panel::Point;

/// Commands returned by update functions
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Cmd {
    /// No command - do nothing
    #[default]
    None,
    /// Repaint both windows
    Redraw,
    /// Move the dashboard window to a new outer position
    MoveDashboard(Point),
    /// Execute multiple commands
    Batch(Vec<Cmd>),
    /// Request application exit
    Quit,
}

impl Cmd {
    /// Create a batch command, flattening a single command to itself
    pub fn batch(cmds: Vec<Cmd>) -> Self {
        let mut cmds: Vec<Cmd> = cmds.into_iter().filter(|c| *c != Cmd::None).collect();
        match cmds.len() {
            0 => Cmd::None,
            1 => cmds.remove(0),
            _ => Cmd::Batch(cmds),
        }
    }

    /// Check if this command requires a redraw
    pub fn needs_redraw(&self) -> bool {
        match self {
            Cmd::None => false,
            Cmd::Redraw => true,
            // The dashboard repaints when the compositor exposes its new area
            Cmd::MoveDashboard(_) => false,
            Cmd::Batch(cmds) => cmds.iter().any(|c| c.needs_redraw()),
            // Quit doesn't need redraw - app is exiting
            Cmd::Quit => false,
        }
    }

    /// Final dashboard position requested by this command, if any
    pub fn dashboard_target(&self) -> Option<Point> {
        match self {
            Cmd::MoveDashboard(point) => Some(*point),
            Cmd::Batch(cmds) => cmds.iter().rev().find_map(|c| c.dashboard_target()),
            _ => None,
        }
    }

    pub fn is_quit(&self) -> bool {
        match self {
            Cmd::Quit => true,
            Cmd::Batch(cmds) => cmds.iter().any(|c| c.is_quit()),
            _ => false,
        }
    }
}
