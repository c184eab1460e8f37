//! Two-position slide state machine for the dashboard
//!
//! The dashboard lives at one of two fixed points: its show position or its
//! hide position. Transitions between them are a linear tween driven by
//! `tick()`; the caller supplies the clock so the machine stays deterministic.
//!
//! Transitions requested while a tween is in flight are rejected with
//! `SlideError::InFlight` and leave the state untouched.

use std::time::{Duration, Instant};

use serde::Serialize;

use crate::panel::{Point, PositionSet};

/// Default length of a slide animation
pub const DEFAULT_SLIDE_DURATION: Duration = Duration::from_millis(200);

/// Whether the dashboard is in view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Visibility {
    Shown,
    Hidden,
}

impl Visibility {
    pub fn flipped(&self) -> Visibility {
        match self {
            Visibility::Shown => Visibility::Hidden,
            Visibility::Hidden => Visibility::Shown,
        }
    }
}

/// Result of a successful transition request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// A tween toward the given visibility was started
    Started(Visibility),
    /// The dashboard already rests at the requested endpoint
    AlreadyThere,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SlideError {
    #[error("slide animation already in flight")]
    InFlight,
}

#[derive(Debug, Clone, Copy)]
struct Animation {
    from: Point,
    to: Point,
    target: Visibility,
    started: Instant,
}

/// Dashboard slide state
#[derive(Debug, Clone)]
pub struct Slide {
    positions: PositionSet,
    position: Point,
    duration: Duration,
    animation: Option<Animation>,
}

impl Slide {
    /// Create a slide resting at the endpoint for `initial`
    pub fn new(positions: PositionSet, initial: Visibility, duration: Duration) -> Self {
        Self {
            positions,
            position: Self::endpoint_of(&positions, initial),
            duration,
            animation: None,
        }
    }

    fn endpoint_of(positions: &PositionSet, visibility: Visibility) -> Point {
        match visibility {
            Visibility::Shown => positions.show_position,
            Visibility::Hidden => positions.hide_position,
        }
    }

    pub fn positions(&self) -> &PositionSet {
        &self.positions
    }

    /// Current window position (interpolated while animating)
    pub fn position(&self) -> Point {
        self.position
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// Classify the resting state
    ///
    /// `None` while a tween is in flight.
    pub fn visibility(&self) -> Option<Visibility> {
        if self.animation.is_some() {
            None
        } else if self.position == self.positions.show_position {
            Some(Visibility::Shown)
        } else if self.position == self.positions.hide_position {
            Some(Visibility::Hidden)
        } else {
            None
        }
    }

    /// Visibility the dashboard is resting at or heading toward
    pub fn target_visibility(&self) -> Option<Visibility> {
        match self.animation {
            Some(animation) => Some(animation.target),
            None => self.visibility(),
        }
    }

    /// Flip between shown and hidden
    pub fn toggle(&mut self, now: Instant) -> Result<Transition, SlideError> {
        match self.visibility() {
            Some(current) => Ok(self.start(current.flipped(), now)),
            None => Err(SlideError::InFlight),
        }
    }

    pub fn show(&mut self, now: Instant) -> Result<Transition, SlideError> {
        self.go_to(Visibility::Shown, now)
    }

    pub fn hide(&mut self, now: Instant) -> Result<Transition, SlideError> {
        self.go_to(Visibility::Hidden, now)
    }

    fn go_to(&mut self, target: Visibility, now: Instant) -> Result<Transition, SlideError> {
        match self.visibility() {
            None => Err(SlideError::InFlight),
            Some(current) if current == target => Ok(Transition::AlreadyThere),
            Some(_) => Ok(self.start(target, now)),
        }
    }

    fn start(&mut self, target: Visibility, now: Instant) -> Transition {
        let to = Self::endpoint_of(&self.positions, target);

        if self.duration.is_zero() {
            self.position = to;
        } else {
            self.animation = Some(Animation {
                from: self.position,
                to,
                target,
                started: now,
            });
        }

        Transition::Started(target)
    }

    /// Advance the tween to `now`
    ///
    /// Returns the new position when it moved. The final frame lands exactly
    /// on the endpoint and ends the animation.
    pub fn tick(&mut self, now: Instant) -> Option<Point> {
        let animation = self.animation?;

        #[cfg(feature = "profile-tracing")]
        let _span = tracing::trace_span!("slide_tick").entered();

        let elapsed = now.saturating_duration_since(animation.started);
        let progress = (elapsed.as_secs_f64() / self.duration.as_secs_f64()).clamp(0.0, 1.0);

        let next = if progress >= 1.0 {
            self.animation = None;
            animation.to
        } else {
            lerp(animation.from, animation.to, progress)
        };

        if next == self.position {
            return None;
        }
        self.position = next;
        Some(next)
    }

    /// Jump straight to the in-flight target
    ///
    /// Returns the final position if an animation was cut short.
    pub fn finish(&mut self) -> Option<Point> {
        let animation = self.animation.take()?;
        self.position = animation.to;
        Some(animation.to)
    }
}

fn lerp(from: Point, to: Point, progress: f64) -> Point {
    let step = |a: i32, b: i32| a + ((b - a) as f64 * progress).round() as i32;
    Point::new(step(from.x, to.x), step(from.y, to.y))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn positions() -> PositionSet {
        PositionSet {
            anchor: Point::new(0, 100),
            show_position: Point::new(0, 100),
            hide_position: Point::new(0, 300),
        }
    }

    #[test]
    fn test_lerp_midpoint() {
        assert_eq!(lerp(Point::new(0, 100), Point::new(0, 300), 0.5), Point::new(0, 200));
        assert_eq!(lerp(Point::new(10, 0), Point::new(-10, 0), 0.25), Point::new(5, 0));
    }

    #[test]
    fn test_starts_at_initial_endpoint() {
        let slide = Slide::new(positions(), Visibility::Hidden, DEFAULT_SLIDE_DURATION);
        assert_eq!(slide.position(), Point::new(0, 300));
        assert_eq!(slide.visibility(), Some(Visibility::Hidden));
    }

    #[test]
    fn test_zero_duration_snaps() {
        let mut slide = Slide::new(positions(), Visibility::Hidden, Duration::ZERO);
        let now = Instant::now();
        assert_eq!(slide.show(now), Ok(Transition::Started(Visibility::Shown)));
        assert!(!slide.is_animating());
        assert_eq!(slide.visibility(), Some(Visibility::Shown));
    }

    #[test]
    fn test_tick_before_start_time_does_not_move() {
        let mut slide = Slide::new(positions(), Visibility::Shown, DEFAULT_SLIDE_DURATION);
        let now = Instant::now();
        slide.hide(now).unwrap();
        assert_eq!(slide.tick(now), None);
        assert_eq!(slide.position(), Point::new(0, 100));
    }
}
