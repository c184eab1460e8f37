//! Indicator button layout on the panel bar
//!
//! Rects are local to the panel window (origin at its top-left corner).

use serde::Serialize;

use super::orientation::{Axis, Orientation};
use super::placement::Size;
use crate::config::ConfigError;

/// Where the row of indicator buttons sits along the bar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    /// Left on a horizontal bar, top on a vertical one
    Start,
    #[default]
    Center,
    /// Right on a horizontal bar, bottom on a vertical one
    End,
}

impl Alignment {
    /// Parse a configured alignment, falling back to centre when it does
    /// not make sense for the bar's direction (e.g. `left` on an east bar)
    pub fn resolve(value: &str, orientation: Orientation) -> Result<Alignment, ConfigError> {
        let value = value.trim().to_ascii_lowercase();
        let (alignment, wants_axis) = match value.as_str() {
            "center" | "centre" => return Ok(Alignment::Center),
            "start" => return Ok(Alignment::Start),
            "end" => return Ok(Alignment::End),
            "left" => (Alignment::Start, Axis::Horizontal),
            "right" => (Alignment::End, Axis::Horizontal),
            "top" => (Alignment::Start, Axis::Vertical),
            "bottom" => (Alignment::End, Axis::Vertical),
            _ => return Err(ConfigError::InvalidAlignment(value.clone())),
        };

        if orientation.axis() != wants_axis {
            tracing::warn!(
                "Button alignment '{}' is not coherent with {} orientation, using center",
                value,
                orientation
            );
            return Ok(Alignment::Center);
        }
        Ok(alignment)
    }
}

/// Axis-aligned rectangle in window pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.x as f64
            && y >= self.y as f64
            && x < self.x as f64 + self.width as f64
            && y < self.y as f64 + self.height as f64
    }
}

/// Spacing and alignment of the indicator row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BarLayout {
    pub orientation: Orientation,
    pub alignment: Alignment,
    /// Inset on the left and right edges
    pub margin_vertical: u32,
    /// Inset on the top and bottom edges
    pub margin_horizontal: u32,
    pub button_spacing: u32,
}

impl BarLayout {
    /// Lay out one button per entry of `lengths` (extent along the bar)
    ///
    /// Buttons fill the bar's depth minus the margins. When the row is longer
    /// than the bar it starts at the leading margin and overflows the end.
    pub fn indicator_rects(&self, bar: Size, lengths: &[u32]) -> Vec<Rect> {
        if lengths.is_empty() {
            return Vec::new();
        }

        let inner_x = i64::from(self.margin_vertical);
        let inner_y = i64::from(self.margin_horizontal);
        let inner_w = bar.width.saturating_sub(self.margin_vertical.saturating_mul(2));
        let inner_h = bar.height.saturating_sub(self.margin_horizontal.saturating_mul(2));

        let gaps = u32::try_from(lengths.len() - 1).unwrap_or(u32::MAX);
        let total = lengths
            .iter()
            .fold(self.button_spacing.saturating_mul(gaps), |acc, &len| {
                acc.saturating_add(len)
            });

        let axis = self.orientation.axis();
        let (start, extent) = match axis {
            Axis::Horizontal => (inner_x, inner_w),
            Axis::Vertical => (inner_y, inner_h),
        };
        let slack = i64::from(extent.saturating_sub(total));
        let mut cursor = match self.alignment {
            Alignment::Start => start,
            Alignment::Center => start + slack / 2,
            Alignment::End => start + slack,
        };

        lengths
            .iter()
            .map(|&len| {
                let rect = match axis {
                    Axis::Horizontal => Rect::new(pixel(cursor), pixel(inner_y), len, inner_h),
                    Axis::Vertical => Rect::new(pixel(inner_x), pixel(cursor), inner_w, len),
                };
                cursor += i64::from(len) + i64::from(self.button_spacing);
                rect
            })
            .collect()
    }
}

/// Window coordinate for a non-negative layout offset, pinned at `i32::MAX`
fn pixel(offset: i64) -> i32 {
    i32::try_from(offset).unwrap_or(i32::MAX)
}

/// Index of the indicator under the given window-local point
pub fn hit_test(rects: &[Rect], x: f64, y: f64) -> Option<usize> {
    rects.iter().position(|r| r.contains(x, y))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout(orientation: Orientation, alignment: Alignment) -> BarLayout {
        BarLayout {
            orientation,
            alignment,
            margin_vertical: 2,
            margin_horizontal: 2,
            button_spacing: 2,
        }
    }

    #[test]
    fn test_resolve_incoherent_alignment_falls_back_to_center() {
        assert_eq!(
            Alignment::resolve("left", Orientation::East).unwrap(),
            Alignment::Center
        );
        assert_eq!(
            Alignment::resolve("top", Orientation::South).unwrap(),
            Alignment::Center
        );
        assert_eq!(
            Alignment::resolve("bottom", Orientation::West).unwrap(),
            Alignment::End
        );
        assert_eq!(
            Alignment::resolve("left", Orientation::North).unwrap(),
            Alignment::Start
        );
    }

    #[test]
    fn test_resolve_unknown_alignment_is_error() {
        assert!(matches!(
            Alignment::resolve("diagonal", Orientation::South),
            Err(ConfigError::InvalidAlignment(_))
        ));
    }

    #[test]
    fn test_horizontal_center_layout() {
        let rects = layout(Orientation::South, Alignment::Center)
            .indicator_rects(Size::new(1000, 25), &[100, 100, 100]);
        // total = 300 + 2*2 = 304, inner = 996, slack = 692 → start at 2 + 346
        assert_eq!(rects[0], Rect::new(348, 2, 100, 21));
        assert_eq!(rects[1], Rect::new(450, 2, 100, 21));
        assert_eq!(rects[2], Rect::new(552, 2, 100, 21));
    }

    #[test]
    fn test_vertical_end_layout() {
        let rects = layout(Orientation::West, Alignment::End)
            .indicator_rects(Size::new(25, 500), &[50, 50]);
        // inner_y = 2, inner_h = 496, total = 102, slack = 394
        assert_eq!(rects[0], Rect::new(2, 396, 21, 50));
        assert_eq!(rects[1], Rect::new(2, 448, 21, 50));
    }

    #[test]
    fn test_overflowing_row_starts_at_margin() {
        let rects = layout(Orientation::North, Alignment::Center)
            .indicator_rects(Size::new(100, 25), &[80, 80]);
        assert_eq!(rects[0].x, 2);
    }

    #[test]
    fn test_huge_spacing_and_margins_do_not_overflow() {
        let bar = BarLayout {
            orientation: Orientation::South,
            alignment: Alignment::End,
            margin_vertical: u32::MAX,
            margin_horizontal: u32::MAX,
            button_spacing: u32::MAX,
        };
        let rects = bar.indicator_rects(Size::new(1920, 25), &[u32::MAX, 100, 100]);
        assert_eq!(rects.len(), 3);
        assert_eq!(rects[0].width, u32::MAX);
        assert_eq!(rects[0].height, 0);
        assert_eq!(rects[2].x, i32::MAX);
    }

    #[test]
    fn test_hit_test() {
        let rects = vec![Rect::new(0, 0, 10, 10), Rect::new(12, 0, 10, 10)];
        assert_eq!(hit_test(&rects, 5.0, 5.0), Some(0));
        assert_eq!(hit_test(&rects, 15.0, 9.5), Some(1));
        assert_eq!(hit_test(&rects, 11.0, 5.0), None);
        assert_eq!(hit_test(&rects, 22.0, 5.0), None);
    }
}
