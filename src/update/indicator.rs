//! Indicator button handlers
//!
//! Pointer tracking for the panel bar and the click decision table that ties
//! indicators to dashboard pages.

use std::time::Instant;

use crate::commands::Cmd;
use crate::messages::IndicatorMsg;
use crate::model::ShellModel;
use crate::pages::{resolve_click, IndicatorAction};
use crate::slide::Visibility;

use super::dashboard::apply_transition;

/// Update function for indicator messages
pub fn update_indicator(model: &mut ShellModel, msg: IndicatorMsg) -> Option<Cmd> {
    match msg {
        IndicatorMsg::Hover(index) => {
            if model.ui.hovered == index {
                return None;
            }
            model.ui.hovered = index;
            Some(Cmd::Redraw)
        }

        IndicatorMsg::Press(index) => {
            model.ui.pressed = Some(index);
            Some(Cmd::Redraw)
        }

        IndicatorMsg::Release(index) => match (model.ui.pressed.take(), index) {
            (Some(pressed), Some(released)) if pressed == released => {
                let cmd = click(model, released).unwrap_or_default();
                Some(Cmd::batch(vec![Cmd::Redraw, cmd]))
            }
            (Some(_), _) => Some(Cmd::Redraw),
            (None, _) => None,
        },

        IndicatorMsg::Clicked(index) => click(model, index),

        IndicatorMsg::PointerLeft => {
            if model.ui.hovered.is_none() && model.ui.pressed.is_none() {
                return None;
            }
            model.ui.clear_pointer();
            Some(Cmd::Redraw)
        }
    }
}

/// Apply the decision table to a click on indicator `clicked`
///
/// While the dashboard slides, the click is judged against where it is
/// heading; the page switch applies and the slide request is dropped.
fn click(model: &mut ShellModel, clicked: usize) -> Option<Cmd> {
    let visibility = model.dashboard.target_visibility()?;
    let action = resolve_click(clicked, model.pages.current_index(), visibility);
    tracing::debug!(
        target: "indicator",
        clicked,
        current = model.pages.current_index(),
        ?visibility,
        ?action,
        "indicator clicked"
    );

    let now = Instant::now();
    match action {
        IndicatorAction::Hide => {
            let result = model.dashboard.hide(now);
            apply_transition(model, result)
        }
        IndicatorAction::Show => {
            let result = model.dashboard.show(now);
            apply_transition(model, result)
        }
        IndicatorAction::SwitchAndShow(index) => {
            if !select_page(model, index) {
                return None;
            }
            let result = model.dashboard.show(now);
            let cmd = apply_transition(model, result).unwrap_or_default();
            Some(Cmd::batch(vec![Cmd::Redraw, cmd]))
        }
        IndicatorAction::Switch(index) => {
            if !select_page(model, index) {
                return None;
            }
            if model.dashboard.target_visibility() == Some(Visibility::Shown) {
                model.pages.acknowledge_current();
            }
            Some(Cmd::Redraw)
        }
    }
}

fn select_page(model: &mut ShellModel, index: usize) -> bool {
    match model.pages.select(index) {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!("Ignoring indicator click: {}", e);
            false
        }
    }
}
