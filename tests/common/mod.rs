//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use std::time::{Duration, Instant};

use edgedock::commands::Cmd;
use edgedock::config::ShellConfig;
use edgedock::messages::{DashboardMsg, IndicatorMsg, Msg};
use edgedock::model::ShellModel;
use edgedock::panel::{Orientation, ScreenGeometry, Size};
use edgedock::slide::Visibility;
use edgedock::theme::Theme;
use edgedock::update::update;

pub const SCREEN: ScreenGeometry = ScreenGeometry::new(1920, 1080);

/// Component sizes exercised by the geometry property tests
pub const SIZES: &[Size] = &[
    Size::new(1, 1),
    Size::new(25, 25),
    Size::new(400, 800),
    Size::new(1536, 864),
    Size::new(1919, 1079),
    Size::new(1920, 1080),
    Size::new(1001, 333),
];

/// Config with the given page names and default everything else
pub fn config_with_pages(pages: &[&str]) -> ShellConfig {
    let mut config = ShellConfig::default();
    config.dashboard.pages = pages.iter().map(|p| p.to_string()).collect();
    config
}

pub fn test_model() -> ShellModel {
    test_model_with(&ShellConfig::default())
}

pub fn test_model_with(config: &ShellConfig) -> ShellModel {
    ShellModel::new(config, Theme::fallback(), SCREEN).expect("valid test config")
}

pub fn test_model_oriented(orientation: Orientation) -> ShellModel {
    let mut config = ShellConfig::default();
    config.orientation = orientation.as_str().to_string();
    test_model_with(&config)
}

/// Let any in-flight slide run to completion
pub fn settle(model: &mut ShellModel) -> Option<Cmd> {
    let later = Instant::now() + Duration::from_secs(5);
    update(model, Msg::Dashboard(DashboardMsg::Tick(later)))
}

/// Click an indicator and let the resulting slide finish
pub fn click_and_settle(model: &mut ShellModel, index: usize) {
    update(model, Msg::Indicator(IndicatorMsg::Clicked(index)));
    settle(model);
}

/// Put the model into a resting state with `page` current
pub fn at_rest(model: &mut ShellModel, page: usize, visibility: Visibility) {
    if model.pages.current_index() != page {
        model.pages.select(page).expect("page in range");
    }
    let now = Instant::now();
    let _ = match visibility {
        Visibility::Shown => model.dashboard.show(now),
        Visibility::Hidden => model.dashboard.hide(now),
    };
    model.dashboard.finish();
    assert_eq!(model.dashboard.visibility(), Some(visibility));
}
