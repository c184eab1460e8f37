//! Pointer and keyboard event to message mapping

use winit::event::{ElementState, KeyEvent, MouseButton};
use winit::keyboard::{Key, NamedKey};

use edgedock::messages::{DashboardMsg, IndicatorMsg, Msg};
use edgedock::model::ShellModel;

/// Pointer moved to `(x, y)` in panel-window coordinates
pub fn panel_cursor_moved(model: &ShellModel, x: f64, y: f64) -> Msg {
    Msg::Indicator(IndicatorMsg::Hover(model.ui.indicator_at(x, y)))
}

/// Mouse button event on the panel window
pub fn panel_mouse_input(
    model: &ShellModel,
    position: Option<(f64, f64)>,
    state: ElementState,
    button: MouseButton,
) -> Option<Msg> {
    if button != MouseButton::Left {
        return None;
    }
    let hit = position.and_then(|(x, y)| model.ui.indicator_at(x, y));

    match state {
        ElementState::Pressed => hit.map(|index| Msg::Indicator(IndicatorMsg::Press(index))),
        ElementState::Released => Some(Msg::Indicator(IndicatorMsg::Release(hit))),
    }
}

/// Keyboard shortcuts, active while a shell window has focus
///
/// Escape hides the dashboard, F12 toggles it.
pub fn key_input(event: &KeyEvent) -> Option<Msg> {
    if event.state != ElementState::Pressed || event.repeat {
        return None;
    }
    match event.logical_key {
        Key::Named(NamedKey::Escape) => Some(Msg::Dashboard(DashboardMsg::Hide)),
        Key::Named(NamedKey::F12) => Some(Msg::Dashboard(DashboardMsg::Toggle)),
        _ => None,
    }
}
