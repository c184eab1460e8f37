//! Window-manager facing helpers
//!
//! Both shell windows are borderless, fixed-size and kept above normal
//! windows. On X11 they are typed as dock windows so window managers leave
//! them out of the taskbar and focus cycling.

use winit::dpi::{PhysicalPosition, PhysicalSize};
use winit::event_loop::ActiveEventLoop;
use winit::window::{Window, WindowAttributes, WindowLevel};

use edgedock::panel::{Point, ReservedSpace, ScreenGeometry, Size};

/// Attributes shared by the panel and dashboard windows
pub fn shell_window_attributes(title: &str, position: Point, size: Size) -> WindowAttributes {
    let attributes = Window::default_attributes()
        .with_title(title)
        .with_decorations(false)
        .with_resizable(false)
        .with_window_level(WindowLevel::AlwaysOnTop)
        .with_inner_size(PhysicalSize::new(size.width.max(1), size.height.max(1)))
        .with_position(PhysicalPosition::new(position.x, position.y));

    #[cfg(target_os = "linux")]
    let attributes = {
        use winit::platform::x11::{WindowAttributesExtX11, WindowType};
        attributes.with_x11_window_type(vec![WindowType::Dock])
    };

    attributes
}

/// Screen size from the override or the primary monitor
pub fn screen_geometry(
    event_loop: &ActiveEventLoop,
    screen_override: Option<ScreenGeometry>,
) -> Option<ScreenGeometry> {
    if let Some(screen) = screen_override {
        tracing::info!("Using screen size {}x{} from command line", screen.width, screen.height);
        return Some(screen);
    }

    let monitor = event_loop
        .primary_monitor()
        .or_else(|| event_loop.available_monitors().next())?;
    let size = monitor.size();
    tracing::info!(
        "Detected screen {}x{} on {}",
        size.width,
        size.height,
        monitor.name().unwrap_or_else(|| "unknown monitor".to_string())
    );
    Some(ScreenGeometry::new(size.width, size.height))
}

/// Announce the work area the panel occupies
///
/// The strut itself is left to the window manager's handling of dock
/// windows; this records what the panel expects to be kept clear.
pub fn announce_reserved_space(window: &Window, reserved: ReservedSpace) {
    let [left, right, top, bottom] = reserved.as_array();
    tracing::info!(
        window = ?window.id(),
        left,
        right,
        top,
        bottom,
        "panel reserves screen edge"
    );
}
