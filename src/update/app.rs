//! App message handlers

use crate::commands::Cmd;
use crate::messages::AppMsg;
use crate::model::ShellModel;
use crate::slide::Visibility;

/// Handle app messages
pub fn update_app(model: &mut ShellModel, msg: AppMsg) -> Option<Cmd> {
    match msg {
        AppMsg::Notify(index) => {
            // A page sliding into view counts as in view
            let in_view = index == model.pages.current_index()
                && model.dashboard.target_visibility() == Some(Visibility::Shown);
            if in_view {
                return None;
            }
            match model.pages.notify(index) {
                Ok(()) => Some(Cmd::Redraw),
                Err(e) => {
                    tracing::warn!("Ignoring notification: {}", e);
                    None
                }
            }
        }

        AppMsg::IndicatorsMeasured(lengths) => {
            model.set_indicator_lengths(&lengths);
            Some(Cmd::Redraw)
        }

        AppMsg::Quit => Some(Cmd::Quit),
    }
}
