//! View module - software rendering of the panel bar and the dashboard
//!
//! Each window owns a `Renderer` (softbuffer surface plus back buffer).
//! Both share one `Fonts` instance for labels and page titles.

pub mod button;
pub mod frame;

pub use frame::{Frame, TextPainter};

use anyhow::Result;
use fontdue::{Font, FontSettings, Metrics};
use softbuffer::Surface;
use std::collections::HashMap;
use std::num::NonZeroU32;
use std::path::{Path, PathBuf};
use std::rc::Rc;
use winit::window::Window;

use edgedock::model::{ShellModel, LABEL_PADDING};
use edgedock::panel::Axis;

use button::{render_indicator, ButtonState, IndicatorLook};

pub type GlyphCacheKey = (char, u32);

pub type GlyphCache = HashMap<GlyphCacheKey, (Metrics, Vec<u8>)>;

/// Base label size in logical pixels
const FONT_SIZE: f32 = 13.0;
/// Page title size in logical pixels
const TITLE_FONT_SIZE: f32 = 22.0;
/// Inset of the page title from the dashboard border
const TITLE_MARGIN: usize = 16;

/// Fonts tried when none is configured
const SYSTEM_FONT_CANDIDATES: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/usr/share/fonts/liberation/LiberationSans-Regular.ttf",
    "/usr/share/fonts/noto/NotoSans-Regular.ttf",
    "/usr/share/fonts/truetype/noto/NotoSans-Regular.ttf",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    "C:\\Windows\\Fonts\\segoeui.ttf",
];

fn load_font_file(path: &Path) -> Result<Font> {
    let bytes = std::fs::read(path)
        .map_err(|e| anyhow::anyhow!("Failed to read font {}: {}", path.display(), e))?;
    Font::from_bytes(bytes, FontSettings::default())
        .map_err(|e| anyhow::anyhow!("Failed to load font {}: {}", path.display(), e))
}

/// Locate a usable font: the configured one first, then system fonts
pub fn find_font(configured: Option<&Path>) -> Option<Font> {
    let candidates = configured
        .map(Path::to_path_buf)
        .into_iter()
        .chain(SYSTEM_FONT_CANDIDATES.iter().map(PathBuf::from));

    for path in candidates {
        if !path.exists() {
            continue;
        }
        match load_font_file(&path) {
            Ok(font) => {
                tracing::info!("Using font {}", path.display());
                return Some(font);
            }
            Err(e) => tracing::warn!("{}", e),
        }
    }

    tracing::warn!("No usable font found, indicator labels will not be drawn");
    None
}

/// Font metrics at one size
#[derive(Debug, Clone, Copy)]
struct TextSize {
    font_size: f32,
    ascent: f32,
    line_height: usize,
}

impl TextSize {
    fn new(font: &Font, font_size: f32) -> Self {
        match font.horizontal_line_metrics(font_size) {
            Some(m) => Self {
                font_size,
                ascent: m.ascent,
                line_height: m.new_line_size.ceil() as usize,
            },
            None => Self {
                font_size,
                ascent: font_size,
                line_height: (font_size * 1.25).ceil() as usize,
            },
        }
    }
}

/// Shared font and glyph cache
pub struct Fonts {
    font: Option<Font>,
    glyph_cache: GlyphCache,
    label: TextSize,
    title: TextSize,
}

impl Fonts {
    pub fn new(font: Option<Font>, scale_factor: f64) -> Self {
        let scale = scale_factor as f32;
        let (label, title) = match &font {
            Some(f) => (
                TextSize::new(f, FONT_SIZE * scale),
                TextSize::new(f, TITLE_FONT_SIZE * scale),
            ),
            None => {
                let placeholder = |size: f32| TextSize {
                    font_size: size,
                    ascent: size,
                    line_height: size.ceil() as usize,
                };
                (
                    placeholder(FONT_SIZE * scale),
                    placeholder(TITLE_FONT_SIZE * scale),
                )
            }
        };
        Self {
            font,
            glyph_cache: HashMap::new(),
            label,
            title,
        }
    }

    fn painter(&mut self, size: TextSize) -> Option<TextPainter<'_>> {
        let font = self.font.as_ref()?;
        Some(TextPainter::new(
            font,
            &mut self.glyph_cache,
            size.font_size,
            size.ascent,
            size.line_height,
        ))
    }

    /// Indicator lengths along the bar for the given labels
    ///
    /// None when no font is loaded and the model's estimates should stay.
    pub fn measure_indicators(&mut self, model: &ShellModel) -> Option<Vec<u32>> {
        let axis = model.orientation.axis();
        let thickness = model.thickness();
        let label = self.label;
        let mut painter = self.painter(label)?;

        let lengths: Vec<u32> = model
            .pages
            .indicators()
            .map(|indicator| {
                let text = match axis {
                    Axis::Horizontal => painter.measure_width(&indicator.label).ceil() as u32,
                    Axis::Vertical => painter.line_height() as u32,
                };
                (text + LABEL_PADDING).max(thickness)
            })
            .collect();
        Some(lengths)
    }
}

/// Window surface with a persistent back buffer
pub struct Renderer {
    surface: Surface<Rc<Window>, Rc<Window>>,
    back_buffer: Vec<u32>,
    width: u32,
    height: u32,
}

impl Renderer {
    pub fn new(window: Rc<Window>, context: &softbuffer::Context<Rc<Window>>) -> Result<Self> {
        let size = window.inner_size();
        let surface = Surface::new(context, Rc::clone(&window))
            .map_err(|e| anyhow::anyhow!("Failed to create surface: {}", e))?;

        let mut renderer = Self {
            surface,
            back_buffer: Vec::new(),
            width: 0,
            height: 0,
        };
        renderer.resize(size.width, size.height)?;
        Ok(renderer)
    }

    pub fn resize(&mut self, width: u32, height: u32) -> Result<()> {
        let (Some(w), Some(h)) = (NonZeroU32::new(width), NonZeroU32::new(height)) else {
            return Ok(());
        };
        self.surface
            .resize(w, h)
            .map_err(|e| anyhow::anyhow!("Failed to resize surface: {}", e))?;
        self.width = width;
        self.height = height;
        self.back_buffer = vec![0u32; width as usize * height as usize];
        Ok(())
    }

    fn frame(&mut self) -> Frame<'_> {
        Frame::new(
            &mut self.back_buffer,
            self.width as usize,
            self.height as usize,
        )
    }

    /// Copy back buffer to surface and present
    fn present(&mut self) -> Result<()> {
        if self.back_buffer.is_empty() {
            return Ok(());
        }
        let mut buffer = self
            .surface
            .buffer_mut()
            .map_err(|e| anyhow::anyhow!("Failed to get surface buffer: {}", e))?;
        buffer.copy_from_slice(&self.back_buffer);
        buffer
            .present()
            .map_err(|e| anyhow::anyhow!("Failed to present buffer: {}", e))?;
        Ok(())
    }

    /// Draw the bar background and one button per page
    pub fn render_panel(&mut self, model: &ShellModel, fonts: &mut Fonts) -> Result<()> {
        let theme = &model.theme;
        let (width, height) = (self.width as usize, self.height as usize);
        let label = fonts.label;

        {
            let mut frame = self.frame();
            frame.clear(theme.panel.background.to_argb_u32());
            frame.draw_bordered_rect(
                0,
                0,
                width,
                height,
                theme.panel.background.to_argb_u32(),
                theme.panel.border.to_argb_u32(),
            );

            let mut painter = fonts.painter(label);
            for (page, rect) in model.pages.pages().iter().zip(model.indicator_rects()) {
                let index = page.indicator.index;
                let look = IndicatorLook {
                    rect: *rect,
                    label: &page.indicator.label,
                    state: ButtonState::for_indicator(index, model.ui.hovered, model.ui.pressed),
                    active: model.is_indicator_active(index),
                    notified: page.notified,
                };
                render_indicator(&mut frame, painter.as_mut(), theme, look);
            }
        }

        self.present()
    }

    /// Draw the dashboard chrome and the current page's title
    pub fn render_dashboard(&mut self, model: &ShellModel, fonts: &mut Fonts) -> Result<()> {
        let theme = &model.theme.dashboard;
        let (width, height) = (self.width as usize, self.height as usize);
        let title = fonts.title;

        {
            let mut frame = self.frame();
            frame.clear(theme.background.to_argb_u32());
            frame.draw_bordered_rect(
                0,
                0,
                width,
                height,
                theme.background.to_argb_u32(),
                theme.border.to_argb_u32(),
            );

            if let Some(mut painter) = fonts.painter(title) {
                painter.draw(
                    &mut frame,
                    TITLE_MARGIN,
                    TITLE_MARGIN,
                    &model.pages.current().name,
                    theme.title.to_argb_u32(),
                );
            }
        }

        self.present()
    }
}
