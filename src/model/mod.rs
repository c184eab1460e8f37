//! Shell model - the complete state of the panel and dashboard
//!
//! Geometry is computed once from the validated configuration and the screen
//! size; afterwards only the slide position, the current page and pointer
//! state change, always through `update()`.

pub mod ui;

pub use ui::UiState;

use serde::Serialize;

use crate::config::{ConfigError, ShellConfig};
use crate::pages::PageStack;
use crate::panel::{
    compute_panel_placement, compute_positions, dashboard_size, reserved_space, Alignment, Axis,
    BarLayout, Orientation, PanelPlacement, PositionSet, Rect, ReservedSpace, ScreenGeometry,
    Size,
};
use crate::slide::{Slide, Visibility};
use crate::theme::Theme;

/// Approximate advance of one label glyph before the renderer measures text
pub const LABEL_CHAR_ADVANCE: u32 = 8;
/// Horizontal padding around an indicator label (both sides combined)
pub const LABEL_PADDING: u32 = 16;

/// Estimated indicator length for a label, never shorter than the bar is deep
pub fn estimate_indicator_length(label: &str, thickness: u32) -> u32 {
    let text = label.chars().count() as u32 * LABEL_CHAR_ADVANCE + LABEL_PADDING;
    text.max(thickness)
}

/// The complete shell model
#[derive(Debug)]
pub struct ShellModel {
    pub screen: ScreenGeometry,
    pub orientation: Orientation,
    /// Permanent placement of the panel bar window
    pub panel: PanelPlacement,
    /// Work area the panel asks the window manager to keep clear
    pub reserved: ReservedSpace,
    pub bar: BarLayout,
    pub dashboard_size: Size,
    pub dashboard: Slide,
    pub pages: PageStack,
    pub theme: Theme,
    pub ui: UiState,
}

impl ShellModel {
    /// Build the model from configuration, theme and the detected screen
    ///
    /// The dashboard starts hidden with the first page current.
    pub fn new(
        config: &ShellConfig,
        theme: Theme,
        screen: ScreenGeometry,
    ) -> Result<Self, ConfigError> {
        let validated = config.validate()?;
        let orientation = validated.orientation;

        if !screen.is_usable() {
            return Err(ConfigError::InvalidGeometry(format!(
                "screen {}x{} outside 1..={} per side",
                screen.width,
                screen.height,
                ScreenGeometry::MAX_DIMENSION
            )));
        }
        if validated.thickness >= screen.depth(orientation) {
            return Err(ConfigError::InvalidGeometry(format!(
                "panel thickness {} does not fit a {}x{} screen on the {} edge",
                validated.thickness, screen.width, screen.height, orientation
            )));
        }

        let bar_length = match orientation.axis() {
            Axis::Horizontal => screen.width,
            Axis::Vertical => screen.height,
        };
        let bar = validated.bar;
        let widest = bar
            .button_spacing
            .max(bar.margin_vertical)
            .max(bar.margin_horizontal);
        if widest >= bar_length {
            return Err(ConfigError::InvalidGeometry(format!(
                "panel margins and button spacing must be below the {} px bar length",
                bar_length
            )));
        }

        let panel = compute_panel_placement(orientation, screen, validated.thickness);
        let reserved = reserved_space(orientation, validated.thickness);
        let size = dashboard_size(screen, validated.ratio);
        let positions = compute_positions(orientation, screen, size);
        let pages = PageStack::from_names(&validated.pages)?;

        tracing::debug!(
            ?orientation,
            ?panel,
            ?positions,
            "computed shell geometry"
        );

        let mut model = Self {
            screen,
            orientation,
            panel,
            reserved,
            bar,
            dashboard_size: size,
            dashboard: Slide::new(positions, Visibility::Hidden, validated.slide_duration),
            pages,
            theme,
            ui: UiState::default(),
        };

        model.set_indicator_lengths(&[]);

        Ok(model)
    }

    /// Re-run the indicator layout with measured button lengths
    ///
    /// Extra lengths are ignored and missing ones are estimated, so the rects
    /// always pair one-to-one with the pages.
    pub fn set_indicator_lengths(&mut self, lengths: &[u32]) {
        let thickness = self.thickness();
        let lengths: Vec<u32> = self
            .pages
            .indicators()
            .map(|indicator| {
                lengths
                    .get(indicator.index)
                    .copied()
                    .unwrap_or_else(|| estimate_indicator_length(&indicator.label, thickness))
            })
            .collect();
        self.ui.indicator_rects = self.bar.indicator_rects(self.panel.size, &lengths);
    }

    /// Depth of the panel bar
    pub fn thickness(&self) -> u32 {
        match self.orientation.axis() {
            Axis::Horizontal => self.panel.size.height,
            Axis::Vertical => self.panel.size.width,
        }
    }

    pub fn indicator_rects(&self) -> &[Rect] {
        &self.ui.indicator_rects
    }

    /// Whether the indicator at `index` marks the page currently in view
    pub fn is_indicator_active(&self, index: usize) -> bool {
        index == self.pages.current_index()
            && self.dashboard.target_visibility() == Some(Visibility::Shown)
    }

    /// Snapshot of the computed layout for `--dump-layout`
    pub fn layout_report(&self) -> LayoutReport {
        LayoutReport {
            screen: self.screen,
            orientation: self.orientation,
            panel: self.panel,
            reserved: self.reserved,
            alignment: self.bar.alignment,
            dashboard_size: self.dashboard_size,
            dashboard: *self.dashboard.positions(),
            indicators: self
                .pages
                .indicators()
                .zip(&self.ui.indicator_rects)
                .map(|(indicator, rect)| IndicatorReport {
                    label: indicator.label.clone(),
                    index: indicator.index,
                    rect: *rect,
                })
                .collect(),
        }
    }
}

/// Computed layout, serialized by `--dump-layout`
#[derive(Debug, Clone, Serialize)]
pub struct LayoutReport {
    pub screen: ScreenGeometry,
    pub orientation: Orientation,
    pub panel: PanelPlacement,
    pub reserved: ReservedSpace,
    pub alignment: Alignment,
    pub dashboard_size: Size,
    pub dashboard: PositionSet,
    pub indicators: Vec<IndicatorReport>,
}

#[derive(Debug, Clone, Serialize)]
pub struct IndicatorReport {
    pub label: String,
    pub index: usize,
    pub rect: Rect,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::panel::Point;

    fn model(config: &ShellConfig) -> Result<ShellModel, ConfigError> {
        ShellModel::new(config, Theme::fallback(), ScreenGeometry::new(1920, 1080))
    }

    #[test]
    fn test_default_model_geometry() {
        let model = model(&ShellConfig::default()).unwrap();
        assert_eq!(model.panel.anchor, Point::new(0, 1055));
        assert_eq!(model.dashboard_size, Size::new(1536, 864));
        assert_eq!(model.dashboard.position(), Point::new(192, 1944));
        assert_eq!(model.dashboard.visibility(), Some(Visibility::Hidden));
        assert_eq!(model.indicator_rects().len(), model.pages.len());
        assert_eq!(model.reserved.bottom, 25);
    }

    #[test]
    fn test_thickness_must_fit_screen() {
        let mut config = ShellConfig::default();
        config.panel.thickness = 1080;
        assert!(matches!(
            model(&config),
            Err(ConfigError::InvalidGeometry(_))
        ));

        config.orientation = "west".to_string();
        assert!(model(&config).is_ok());
    }

    #[test]
    fn test_zero_screen_rejected() {
        let result = ShellModel::new(
            &ShellConfig::default(),
            Theme::fallback(),
            ScreenGeometry::new(0, 1080),
        );
        assert!(matches!(result, Err(ConfigError::InvalidGeometry(_))));
    }

    #[test]
    fn test_oversized_screen_rejected() {
        let result = ShellModel::new(
            &ShellConfig::default(),
            Theme::fallback(),
            ScreenGeometry::new(3_000_000_000, 1080),
        );
        assert!(matches!(result, Err(ConfigError::InvalidGeometry(_))));
    }

    #[test]
    fn test_spacing_wider_than_bar_rejected() {
        let mut config = ShellConfig::default();
        config.panel.button_spacing = u32::MAX;
        assert!(matches!(
            model(&config),
            Err(ConfigError::InvalidGeometry(_))
        ));

        let mut config = ShellConfig::default();
        config.panel.margin_horizontal = 1920;
        assert!(matches!(
            model(&config),
            Err(ConfigError::InvalidGeometry(_))
        ));
    }

    #[test]
    fn test_measured_lengths_keep_pairing() {
        let mut model = model(&ShellConfig::default()).unwrap();
        model.set_indicator_lengths(&[120]);
        assert_eq!(model.indicator_rects().len(), 3);
        assert_eq!(model.indicator_rects()[0].width, 120);
    }

    #[test]
    fn test_layout_report_lists_indicators() {
        let report = model(&ShellConfig::default()).unwrap().layout_report();
        let labels: Vec<_> = report.indicators.iter().map(|i| i.label.as_str()).collect();
        assert_eq!(labels, ["Home", "System", "Network"]);
        assert_eq!(report.dashboard.show_position, Point::new(192, 216));
    }
}
