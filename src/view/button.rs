//! Indicator button rendering
//!
//! Pure functions: callers derive the visual state from the model and pass
//! it in.

use edgedock::panel::Rect;
use edgedock::theme::Theme;

use super::frame::{Frame, TextPainter};

/// Pointer state of a button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonState {
    #[default]
    Normal,
    Hovered,
    Pressed,
}

impl ButtonState {
    pub fn for_indicator(index: usize, hovered: Option<usize>, pressed: Option<usize>) -> Self {
        if pressed == Some(index) {
            ButtonState::Pressed
        } else if hovered == Some(index) {
            ButtonState::Hovered
        } else {
            ButtonState::Normal
        }
    }
}

/// Everything needed to draw one indicator
#[derive(Debug, Clone, Copy)]
pub struct IndicatorLook<'a> {
    pub rect: Rect,
    pub label: &'a str,
    pub state: ButtonState,
    /// Its page is current and the dashboard is (heading) in view
    pub active: bool,
    /// Its page has unseen activity
    pub notified: bool,
}

/// Width of the bar marking active and notified indicators
const MARKER_PX: usize = 3;

/// Render an indicator with its centred label
///
/// Without a painter only the button chrome is drawn.
pub fn render_indicator(
    frame: &mut Frame,
    painter: Option<&mut TextPainter>,
    theme: &Theme,
    look: IndicatorLook,
) {
    let ind = &theme.indicator;

    let bg = if look.active {
        ind.active
    } else {
        match look.state {
            ButtonState::Normal => ind.background,
            ButtonState::Hovered => ind.background_hover,
            ButtonState::Pressed => ind.background_pressed,
        }
    };
    frame.draw_bordered(look.rect, bg.to_argb_u32(), ind.border.to_argb_u32());

    let x = look.rect.x.max(0) as usize;
    let y = look.rect.y.max(0) as usize;
    let w = look.rect.width as usize;
    let h = look.rect.height as usize;

    if look.notified {
        frame.fill_rect_px(
            x + 1,
            y + h.saturating_sub(MARKER_PX + 1),
            w.saturating_sub(2),
            MARKER_PX,
            ind.notify.to_argb_u32() | 0xFF000000,
        );
    }

    if let Some(painter) = painter {
        let text_w = painter.measure_width(look.label).round() as usize;
        let text_x = x + w.saturating_sub(text_w) / 2;
        let text_y = y + h.saturating_sub(painter.line_height()) / 2;
        painter.draw(frame, text_x, text_y, look.label, ind.foreground.to_argb_u32());
    }
}
