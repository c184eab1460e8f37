//! Slide state machine tests
//!
//! Time is injected through `Instant` offsets so every frame is exact.

mod common;

use std::time::{Duration, Instant};

use edgedock::panel::{compute_positions, Orientation, Point, PositionSet, Size};
use edgedock::slide::{Slide, SlideError, Transition, Visibility, DEFAULT_SLIDE_DURATION};

fn ms(millis: u64) -> Duration {
    Duration::from_millis(millis)
}

fn south_positions() -> PositionSet {
    compute_positions(Orientation::South, common::SCREEN, Size::new(1536, 864))
}

fn new_slide(initial: Visibility) -> Slide {
    Slide::new(south_positions(), initial, ms(200))
}

#[test]
fn test_default_duration_is_200ms() {
    assert_eq!(DEFAULT_SLIDE_DURATION, ms(200));
}

#[test]
fn test_toggle_twice_from_shown_returns_to_shown() {
    let mut slide = new_slide(Visibility::Shown);
    let t0 = Instant::now();

    assert_eq!(slide.toggle(t0), Ok(Transition::Started(Visibility::Hidden)));
    slide.tick(t0 + ms(200));
    assert_eq!(slide.visibility(), Some(Visibility::Hidden));

    let t1 = t0 + ms(300);
    assert_eq!(slide.toggle(t1), Ok(Transition::Started(Visibility::Shown)));
    slide.tick(t1 + ms(250));
    assert_eq!(slide.visibility(), Some(Visibility::Shown));
    assert_eq!(slide.position(), Point::new(192, 216));
}

#[test]
fn test_toggle_while_animating_is_ignored() {
    let mut slide = new_slide(Visibility::Hidden);
    let t0 = Instant::now();
    slide.toggle(t0).unwrap();
    slide.tick(t0 + ms(50));
    let mid = slide.position();

    assert_eq!(slide.toggle(t0 + ms(60)), Err(SlideError::InFlight));
    assert_eq!(slide.show(t0 + ms(60)), Err(SlideError::InFlight));
    assert_eq!(slide.hide(t0 + ms(60)), Err(SlideError::InFlight));
    assert_eq!(slide.position(), mid);
    assert_eq!(slide.target_visibility(), Some(Visibility::Shown));

    slide.tick(t0 + ms(200));
    assert_eq!(slide.visibility(), Some(Visibility::Shown));
}

#[test]
fn test_visibility_is_none_mid_flight() {
    let mut slide = new_slide(Visibility::Hidden);
    let t0 = Instant::now();
    slide.show(t0).unwrap();
    assert!(slide.is_animating());
    assert_eq!(slide.visibility(), None);
}

#[test]
fn test_tick_interpolates_linearly() {
    let mut slide = new_slide(Visibility::Hidden);
    let t0 = Instant::now();
    slide.show(t0).unwrap();

    // hide y = 1944, show y = 216, distance 1728
    assert_eq!(slide.tick(t0 + ms(50)), Some(Point::new(192, 1512)));
    assert_eq!(slide.tick(t0 + ms(100)), Some(Point::new(192, 1080)));
    assert_eq!(slide.tick(t0 + ms(150)), Some(Point::new(192, 648)));
    assert_eq!(slide.tick(t0 + ms(200)), Some(Point::new(192, 216)));
    assert!(!slide.is_animating());
}

#[test]
fn test_tick_past_end_snaps_exactly() {
    let mut slide = new_slide(Visibility::Shown);
    let t0 = Instant::now();
    slide.hide(t0).unwrap();
    assert_eq!(slide.tick(t0 + Duration::from_secs(10)), Some(Point::new(192, 1944)));
    assert_eq!(slide.visibility(), Some(Visibility::Hidden));
    assert_eq!(slide.tick(t0 + Duration::from_secs(11)), None);
}

#[test]
fn test_directional_requests_at_target_are_noops() {
    let mut slide = new_slide(Visibility::Shown);
    let now = Instant::now();
    assert_eq!(slide.show(now), Ok(Transition::AlreadyThere));
    assert!(!slide.is_animating());

    let mut slide = new_slide(Visibility::Hidden);
    assert_eq!(slide.hide(now), Ok(Transition::AlreadyThere));
}

#[test]
fn test_finish_jumps_to_target() {
    let mut slide = new_slide(Visibility::Hidden);
    slide.show(Instant::now()).unwrap();
    assert_eq!(slide.finish(), Some(Point::new(192, 216)));
    assert_eq!(slide.visibility(), Some(Visibility::Shown));
    assert_eq!(slide.finish(), None);
}

#[test]
fn test_every_orientation_round_trips() {
    for orientation in Orientation::ALL {
        let positions = compute_positions(orientation, common::SCREEN, Size::new(800, 600));
        let mut slide = Slide::new(positions, Visibility::Hidden, ms(120));
        let t0 = Instant::now();

        slide.toggle(t0).unwrap();
        slide.tick(t0 + ms(120));
        assert_eq!(slide.position(), positions.show_position, "{orientation}");

        slide.toggle(t0 + ms(200)).unwrap();
        slide.tick(t0 + ms(400));
        assert_eq!(slide.position(), positions.hide_position, "{orientation}");
    }
}
