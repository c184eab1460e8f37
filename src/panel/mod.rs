//! Panel geometry - edge anchoring for the bar and the sliding dashboard
//!
//! Everything in this module is pure arithmetic over screen and component
//! sizes. The host runtime feeds it the screen geometry once at startup and
//! moves windows to the points it returns.
//!
//! ## Architecture
//!
//! - `Orientation`: which screen edge the panel and dashboard hug
//! - `Axis`: the axis the panel bar runs along
//! - `PositionSet`: anchor/show/hide points for a sliding component
//! - `PanelPlacement`: anchor and size of the always-visible bar
//! - `ReservedSpace`: work-area margins requested from the window manager
//! - `BarLayout`: indicator button rects along the bar

mod bar;
mod orientation;
mod placement;

pub use bar::{hit_test, Alignment, BarLayout, Rect};

pub use orientation::{Axis, Orientation};
pub use placement::{
    compute_panel_placement, compute_positions, dashboard_size, reserved_space, PanelPlacement,
    Point, PositionSet, ReservedSpace, ScreenGeometry, Size,
};
