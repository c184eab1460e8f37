//! Position calculator tests
//!
//! Geometric properties over every orientation plus the literal layouts of
//! a 1920x1080 screen.

mod common;

use common::{SCREEN, SIZES};
use edgedock::panel::{
    compute_panel_placement, compute_positions, dashboard_size, reserved_space, Orientation,
    Point, ReservedSpace, ScreenGeometry, Size,
};

// ========================================================================
// Properties
// ========================================================================

#[test]
fn test_show_and_hide_differ_only_across_the_edge() {
    for orientation in Orientation::ALL {
        for &size in SIZES {
            let set = compute_positions(orientation, SCREEN, size);
            let (show, hide) = (set.show_position, set.hide_position);
            match orientation {
                Orientation::North | Orientation::South => {
                    assert_eq!(show.x, hide.x, "{orientation} {size:?}");
                    assert_ne!(show.y, hide.y, "{orientation} {size:?}");
                }
                Orientation::East | Orientation::West => {
                    assert_eq!(show.y, hide.y, "{orientation} {size:?}");
                    assert_ne!(show.x, hide.x, "{orientation} {size:?}");
                }
            }
        }
    }
}

#[test]
fn test_hidden_component_is_fully_off_screen() {
    let screen_w = SCREEN.width as i32;
    let screen_h = SCREEN.height as i32;

    for orientation in Orientation::ALL {
        for &size in SIZES {
            let hide = compute_positions(orientation, SCREEN, size).hide_position;
            let (w, h) = (size.width as i32, size.height as i32);
            let off_screen = match orientation {
                Orientation::North => hide.y + h <= 0,
                Orientation::South => hide.y >= screen_h,
                Orientation::West => hide.x + w <= 0,
                Orientation::East => hide.x >= screen_w,
            };
            assert!(off_screen, "{orientation} {size:?} hides at {hide:?}");
        }
    }
}

#[test]
fn test_shown_component_touches_its_edge() {
    for orientation in Orientation::ALL {
        let size = Size::new(300, 200);
        let show = compute_positions(orientation, SCREEN, size).show_position;
        match orientation {
            Orientation::North => assert_eq!(show.y, 0),
            Orientation::South => assert_eq!(show.y + 200, SCREEN.height as i32),
            Orientation::West => assert_eq!(show.x, 0),
            Orientation::East => assert_eq!(show.x + 300, SCREEN.width as i32),
        }
    }
}

#[test]
fn test_anchor_is_show_position() {
    for orientation in Orientation::ALL {
        let set = compute_positions(orientation, SCREEN, Size::new(640, 480));
        assert_eq!(set.anchor, set.show_position);
    }
}

#[test]
fn test_reserved_space_has_one_matching_side() {
    for orientation in Orientation::ALL {
        let space = reserved_space(orientation, 30);
        assert_eq!(space.non_zero_count(), 1, "{orientation}");
        let side = match orientation {
            Orientation::North => space.top,
            Orientation::South => space.bottom,
            Orientation::East => space.right,
            Orientation::West => space.left,
        };
        assert_eq!(side, 30);
    }
}

#[test]
fn test_panel_spans_its_edge() {
    for orientation in Orientation::ALL {
        let placement = compute_panel_placement(orientation, SCREEN, 25);
        let right = placement.anchor.x + placement.size.width as i32;
        let bottom = placement.anchor.y + placement.size.height as i32;
        assert!(placement.anchor.x >= 0 && placement.anchor.y >= 0);
        assert!(right <= SCREEN.width as i32 && bottom <= SCREEN.height as i32);
        match orientation {
            Orientation::North | Orientation::South => {
                assert_eq!(placement.size, Size::new(SCREEN.width, 25))
            }
            Orientation::East | Orientation::West => {
                assert_eq!(placement.size, Size::new(25, SCREEN.height))
            }
        }
    }
}

// ========================================================================
// Literal layouts
// ========================================================================

#[test]
fn test_south_dashboard_on_full_hd() {
    let size = dashboard_size(SCREEN, 0.8);
    assert_eq!(size, Size::new(1536, 864));

    let set = compute_positions(Orientation::South, SCREEN, size);
    assert_eq!(set.show_position, Point::new(192, 216));
    assert_eq!(set.hide_position, Point::new(192, 1944));
}

#[test]
fn test_west_reserved_space() {
    assert_eq!(
        reserved_space(Orientation::West, 25),
        ReservedSpace {
            left: 25,
            right: 0,
            top: 0,
            bottom: 0
        }
    );
    assert_eq!(reserved_space(Orientation::West, 25).as_array(), [25, 0, 0, 0]);
}

#[test]
fn test_odd_remainders_truncate() {
    let set = compute_positions(
        Orientation::North,
        ScreenGeometry::new(1001, 600),
        Size::new(500, 100),
    );
    assert_eq!(set.show_position, Point::new(250, 0));
    assert_eq!(set.hide_position, Point::new(250, -100));
}

#[test]
fn test_component_larger_than_screen_truncates_toward_zero() {
    // (100 - 101) / 2 truncates to 0, not -1
    let set = compute_positions(
        Orientation::South,
        ScreenGeometry::new(100, 100),
        Size::new(101, 50),
    );
    assert_eq!(set.show_position.x, 0);
}

#[test]
fn test_east_panel_anchor() {
    let placement = compute_panel_placement(Orientation::East, SCREEN, 40);
    assert_eq!(placement.anchor, Point::new(1880, 0));
}
