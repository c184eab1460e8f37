//! Show/hide positions, panel anchoring and reserved work area
//!
//! Coordinates are screen pixels with the origin at the top-left corner.
//! Hide positions may be negative or beyond the screen: a hidden dashboard
//! sits fully outside the visible area.

use serde::Serialize;

use super::orientation::Orientation;

/// A screen position in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Width and height of a component in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// Dimensions of the screen the shell lives on
///
/// Queried once at startup; monitor changes are not tracked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScreenGeometry {
    pub width: u32,
    pub height: u32,
}

impl ScreenGeometry {
    /// Largest accepted screen edge, the X11 coordinate limit
    ///
    /// Keeps every show and hide coordinate inside `i32`.
    pub const MAX_DIMENSION: u32 = i16::MAX as u32;

    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Both dimensions are non-zero and at most `MAX_DIMENSION`
    pub fn is_usable(&self) -> bool {
        (1..=Self::MAX_DIMENSION).contains(&self.width)
            && (1..=Self::MAX_DIMENSION).contains(&self.height)
    }

    /// Extent of the screen across the given orientation's edge
    ///
    /// Height for north/south, width for east/west.
    pub fn depth(&self, orientation: Orientation) -> u32 {
        match orientation {
            Orientation::North | Orientation::South => self.height,
            Orientation::East | Orientation::West => self.width,
        }
    }
}

/// Anchor, show and hide points for a sliding component
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PositionSet {
    pub anchor: Point,
    pub show_position: Point,
    pub hide_position: Point,
}

/// Permanent placement of the panel bar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PanelPlacement {
    pub anchor: Point,
    pub size: Size,
}

/// Work-area margins the window manager should keep clear
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct ReservedSpace {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl ReservedSpace {
    /// `[left, right, top, bottom]`, the order window-manager strut hints use
    pub fn as_array(&self) -> [u32; 4] {
        [self.left, self.right, self.top, self.bottom]
    }

    pub fn non_zero_count(&self) -> usize {
        self.as_array().iter().filter(|v| **v != 0).count()
    }
}

/// Compute where a sliding component sits when shown and when hidden
///
/// The component is centred along the anchored edge. When shown it touches
/// the edge; when hidden it is pushed fully off-screen past that edge.
/// Coordinates fit `i32` for any screen that `is_usable`.
pub fn compute_positions(
    orientation: Orientation,
    screen: ScreenGeometry,
    component: Size,
) -> PositionSet {
    let screen_w = screen.width as i32;
    let screen_h = screen.height as i32;
    let comp_w = component.width as i32;
    let comp_h = component.height as i32;

    let (show, hide) = match orientation {
        Orientation::South => {
            let x = (screen_w - comp_w) / 2;
            (Point::new(x, screen_h - comp_h), Point::new(x, screen_h + comp_h))
        }
        Orientation::North => {
            let x = (screen_w - comp_w) / 2;
            (Point::new(x, 0), Point::new(x, -comp_h))
        }
        Orientation::West => {
            let y = (screen_h - comp_h) / 2;
            (Point::new(0, y), Point::new(-comp_w, y))
        }
        Orientation::East => {
            let y = (screen_h - comp_h) / 2;
            (Point::new(screen_w - comp_w, y), Point::new(screen_w + comp_w, y))
        }
    };

    PositionSet {
        anchor: show,
        show_position: show,
        hide_position: hide,
    }
}

/// Compute the permanent placement of the panel bar
///
/// The bar spans the whole edge and is `thickness` pixels deep. It never
/// hides, so there is only an anchor.
pub fn compute_panel_placement(
    orientation: Orientation,
    screen: ScreenGeometry,
    thickness: u32,
) -> PanelPlacement {
    let screen_w = screen.width as i32;
    let screen_h = screen.height as i32;
    let depth = thickness as i32;

    let (anchor, size) = match orientation {
        Orientation::South => (
            Point::new(0, screen_h - depth),
            Size::new(screen.width, thickness),
        ),
        Orientation::North => (Point::new(0, 0), Size::new(screen.width, thickness)),
        Orientation::West => (Point::new(0, 0), Size::new(thickness, screen.height)),
        Orientation::East => (
            Point::new(screen_w - depth, 0),
            Size::new(thickness, screen.height),
        ),
    };

    PanelPlacement { anchor, size }
}

/// Reserved work area for a panel of the given thickness
pub fn reserved_space(orientation: Orientation, thickness: u32) -> ReservedSpace {
    let mut space = ReservedSpace::default();
    match orientation {
        Orientation::South => space.bottom = thickness,
        Orientation::North => space.top = thickness,
        Orientation::West => space.left = thickness,
        Orientation::East => space.right = thickness,
    }
    space
}

/// Dashboard size as a fraction of the screen, truncated to whole pixels
pub fn dashboard_size(screen: ScreenGeometry, ratio: f64) -> Size {
    Size::new(
        (screen.width as f64 * ratio).floor() as u32,
        (screen.height as f64 * ratio).floor() as u32,
    )
}
