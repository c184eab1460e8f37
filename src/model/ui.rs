//! Pointer state for the indicator bar

use crate::panel::{hit_test, Rect};

/// Transient UI state that never affects layout
#[derive(Debug, Clone, Default)]
pub struct UiState {
    /// Indicator under the pointer
    pub hovered: Option<usize>,
    /// Indicator holding a mouse press that has not been released yet
    pub pressed: Option<usize>,
    /// Indicator buttons in panel-window coordinates, one per page
    pub indicator_rects: Vec<Rect>,
}

impl UiState {
    pub fn indicator_at(&self, x: f64, y: f64) -> Option<usize> {
        hit_test(&self.indicator_rects, x, y)
    }

    /// Forget pointer state, e.g. when the pointer leaves the panel
    pub fn clear_pointer(&mut self) {
        self.hovered = None;
        self.pressed = None;
    }
}
