//! Frame abstraction for drawing primitives
//!
//! Provides a simple, safe API for pixel buffer operations instead of
//! direct buffer indexing scattered throughout rendering code.

use edgedock::panel::Rect;
use fontdue::Font;

use super::GlyphCache;

/// Blend a foreground color onto a background color using alpha compositing.
///
/// Both colors are in ARGB format (0xAARRGGBB).
/// Returns the blended color with full opacity (alpha = 0xFF).
#[inline]
pub fn blend_colors(bg: u32, fg: u32, alpha: f32) -> u32 {
    let bg_r = ((bg >> 16) & 0xFF) as f32;
    let bg_g = ((bg >> 8) & 0xFF) as f32;
    let bg_b = (bg & 0xFF) as f32;

    let fg_r = ((fg >> 16) & 0xFF) as f32;
    let fg_g = ((fg >> 8) & 0xFF) as f32;
    let fg_b = (fg & 0xFF) as f32;

    let final_r = (bg_r * (1.0 - alpha) + fg_r * alpha) as u32;
    let final_g = (bg_g * (1.0 - alpha) + fg_g * alpha) as u32;
    let final_b = (bg_b * (1.0 - alpha) + fg_b * alpha) as u32;

    0xFF000000 | (final_r << 16) | (final_g << 8) | final_b
}

/// A frame buffer wrapper providing safe drawing primitives.
///
/// All coordinates are in pixels. Out-of-bounds operations are clipped.
pub struct Frame<'a> {
    buffer: &'a mut [u32],
    width: usize,
    height: usize,
}

impl<'a> Frame<'a> {
    /// Create a new frame from a mutable pixel buffer
    ///
    /// If the buffer is smaller than width*height, the height shrinks to fit.
    pub fn new(buffer: &'a mut [u32], width: usize, height: usize) -> Self {
        let height = if width > 0 {
            height.min(buffer.len() / width)
        } else {
            0
        };
        Self {
            buffer,
            width,
            height,
        }
    }

    /// Clear the entire buffer with a solid color
    #[inline]
    pub fn clear(&mut self, color: u32) {
        self.buffer.fill(color | 0xFF000000);
    }

    /// Fill a rectangle specified by pixel coordinates
    pub fn fill_rect_px(&mut self, x: usize, y: usize, w: usize, h: usize, color: u32) {
        let x1 = (x + w).min(self.width);
        let y1 = (y + h).min(self.height);

        for py in y.min(self.height)..y1 {
            let row_start = py * self.width;
            self.buffer[row_start + x.min(x1)..row_start + x1].fill(color);
        }
    }

    /// Fill a rectangle with alpha blending (pixel coordinates, ARGB format)
    pub fn blend_rect_px(&mut self, x: usize, y: usize, w: usize, h: usize, color: u32) {
        let alpha = ((color >> 24) & 0xFF) as f32 / 255.0;
        if alpha <= 0.0 {
            return;
        }
        if alpha >= 1.0 {
            return self.fill_rect_px(x, y, w, h, color | 0xFF000000);
        }

        let x1 = (x + w).min(self.width);
        let y1 = (y + h).min(self.height);

        for py in y.min(self.height)..y1 {
            let row_start = py * self.width;
            for px in x.min(x1)..x1 {
                self.buffer[row_start + px] =
                    blend_colors(self.buffer[row_start + px], color, alpha);
            }
        }
    }

    /// Draw a rectangle with a 1px border
    pub fn draw_bordered_rect(
        &mut self,
        x: usize,
        y: usize,
        w: usize,
        h: usize,
        fill_color: u32,
        border_color: u32,
    ) {
        self.blend_rect_px(x, y, w, h, fill_color);

        // Border is always opaque
        let opaque_border = border_color | 0xFF000000;
        self.fill_rect_px(x, y, w, 1, opaque_border);
        self.fill_rect_px(x, y + h.saturating_sub(1), w, 1, opaque_border);
        self.fill_rect_px(x, y, 1, h, opaque_border);
        self.fill_rect_px(x + w.saturating_sub(1), y, 1, h, opaque_border);
    }

    /// Draw a bordered `Rect`; parts left of or above the origin are dropped
    pub fn draw_bordered(&mut self, rect: Rect, fill_color: u32, border_color: u32) {
        let x = rect.x.max(0) as usize;
        let y = rect.y.max(0) as usize;
        let w = (rect.width as i64 + rect.x.min(0) as i64).max(0) as usize;
        let h = (rect.height as i64 + rect.y.min(0) as i64).max(0) as usize;
        self.draw_bordered_rect(x, y, w, h, fill_color, border_color);
    }
}

/// Text rendering context wrapping font and glyph cache.
pub struct TextPainter<'a> {
    font: &'a Font,
    glyph_cache: &'a mut GlyphCache,
    font_size: f32,
    ascent: f32,
    line_height: usize,
}

impl<'a> TextPainter<'a> {
    pub fn new(
        font: &'a Font,
        glyph_cache: &'a mut GlyphCache,
        font_size: f32,
        ascent: f32,
        line_height: usize,
    ) -> Self {
        Self {
            font,
            glyph_cache,
            font_size,
            ascent,
            line_height,
        }
    }

    /// Get the line height in pixels
    #[inline]
    pub fn line_height(&self) -> usize {
        self.line_height
    }

    /// Draw text with its top-left corner at the given position
    pub fn draw(&mut self, frame: &mut Frame, x: usize, y: usize, text: &str, color: u32) {
        let mut current_x = x as f32;
        let baseline = y as f32 + self.ascent;

        for ch in text.chars() {
            let key = (ch, self.font_size.to_bits());
            let (metrics, bitmap) = self
                .glyph_cache
                .entry(key)
                .or_insert_with(|| self.font.rasterize(ch, self.font_size));

            let glyph_top = baseline - metrics.height as f32 - metrics.ymin as f32;

            for bitmap_y in 0..metrics.height {
                for bitmap_x in 0..metrics.width {
                    let alpha = bitmap[bitmap_y * metrics.width + bitmap_x];
                    if alpha == 0 {
                        continue;
                    }

                    let px = current_x as isize + bitmap_x as isize + metrics.xmin as isize;
                    let py = (glyph_top + bitmap_y as f32) as isize;
                    if px < 0 || py < 0 {
                        continue;
                    }

                    let (px, py) = (px as usize, py as usize);
                    if px < frame.width && py < frame.height {
                        let idx = py * frame.width + px;
                        frame.buffer[idx] =
                            blend_colors(frame.buffer[idx], color, alpha as f32 / 255.0);
                    }
                }
            }

            current_x += metrics.advance_width;
        }
    }

    /// Measure text width in pixels
    pub fn measure_width(&mut self, text: &str) -> f32 {
        let mut width = 0.0;
        for ch in text.chars() {
            let key = (ch, self.font_size.to_bits());
            let (metrics, _) = self
                .glyph_cache
                .entry(key)
                .or_insert_with(|| self.font.rasterize(ch, self.font_size));
            width += metrics.advance_width;
        }
        width
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blend_colors_extremes() {
        assert_eq!(blend_colors(0xFF000000, 0xFFFFFFFF, 0.0), 0xFF000000);
        assert_eq!(blend_colors(0xFF000000, 0xFFFFFFFF, 1.0), 0xFFFFFFFF);
    }

    #[test]
    fn test_fill_rect_clips_to_frame() {
        let mut buffer = vec![0u32; 4 * 4];
        let mut frame = Frame::new(&mut buffer, 4, 4);
        frame.fill_rect_px(2, 2, 10, 10, 0xFF112233);
        assert_eq!(buffer[2 * 4 + 2], 0xFF112233);
        assert_eq!(buffer[3 * 4 + 3], 0xFF112233);
        assert_eq!(buffer[0], 0);
    }

    #[test]
    fn test_bordered_rect_draws_edges() {
        let mut buffer = vec![0u32; 5 * 5];
        let mut frame = Frame::new(&mut buffer, 5, 5);
        frame.draw_bordered(Rect::new(0, 0, 5, 5), 0xFF000001, 0x00FF0000);
        assert_eq!(buffer[0], 0xFFFF0000);
        assert_eq!(buffer[2 * 5 + 2], 0xFF000001);
        assert_eq!(buffer[4 * 5 + 4], 0xFFFF0000);
    }
}
