//! Dashboard slide handlers

use std::time::Instant;

use crate::commands::Cmd;
use crate::messages::DashboardMsg;
use crate::model::ShellModel;
use crate::slide::{SlideError, Transition, Visibility};

/// Update function for dashboard messages
pub fn update_dashboard(model: &mut ShellModel, msg: DashboardMsg) -> Option<Cmd> {
    match msg {
        DashboardMsg::Toggle => {
            let result = model.dashboard.toggle(Instant::now());
            apply_transition(model, result)
        }
        DashboardMsg::Show => {
            let result = model.dashboard.show(Instant::now());
            apply_transition(model, result)
        }
        DashboardMsg::Hide => {
            let result = model.dashboard.hide(Instant::now());
            apply_transition(model, result)
        }
        DashboardMsg::Tick(now) => {
            let position = model.dashboard.tick(now)?;
            if !model.dashboard.is_animating() {
                tracing::debug!(
                    target: "slide",
                    visibility = ?model.dashboard.visibility(),
                    "slide finished"
                );
            }
            Some(Cmd::MoveDashboard(position))
        }
    }
}

/// Turn the outcome of a slide request into side effects
///
/// A request rejected because a slide is already running is dropped.
pub(super) fn apply_transition(
    model: &mut ShellModel,
    result: Result<Transition, SlideError>,
) -> Option<Cmd> {
    match result {
        Ok(Transition::Started(target)) => {
            tracing::debug!(target: "slide", ?target, "slide started");
            if target == Visibility::Shown {
                model.pages.acknowledge_current();
            }
            Some(Cmd::batch(vec![
                Cmd::MoveDashboard(model.dashboard.position()),
                Cmd::Redraw,
            ]))
        }
        Ok(Transition::AlreadyThere) => None,
        Err(e) => {
            tracing::debug!(target: "slide", "ignoring slide request: {}", e);
            None
        }
    }
}
