use std::rc::Rc;
use std::time::{Duration, Instant};

use anyhow::Result;
use softbuffer::Context;
use winit::application::ApplicationHandler;
use winit::dpi::PhysicalPosition;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow};
use winit::window::{Window, WindowId};

use edgedock::commands::Cmd;
use edgedock::config::ShellConfig;
use edgedock::messages::{AppMsg, DashboardMsg, IndicatorMsg, Msg};
use edgedock::model::ShellModel;
use edgedock::panel::ScreenGeometry;
use edgedock::theme::Theme;
use edgedock::update::update;

use super::{input, wm};
use crate::view::{find_font, Fonts, Renderer};

/// Interval between slide animation frames (~60 Hz)
const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// A shell window and its renderer
struct ShellWindow {
    window: Rc<Window>,
    renderer: Renderer,
}

/// Inputs needed to build the model once the screen is known
struct Startup {
    config: ShellConfig,
    theme: Theme,
    screen_override: Option<ScreenGeometry>,
}

pub struct App {
    startup: Option<Startup>,
    model: Option<ShellModel>,
    panel: Option<ShellWindow>,
    dashboard: Option<ShellWindow>,
    context: Option<Context<Rc<Window>>>,
    fonts: Option<Fonts>,
    mouse_position: Option<(f64, f64)>,
    next_frame: Option<Instant>,
    /// Fatal error that stopped the event loop
    error: Option<anyhow::Error>,
}

impl App {
    pub fn new(config: ShellConfig, theme: Theme, screen_override: Option<ScreenGeometry>) -> Self {
        Self {
            startup: Some(Startup {
                config,
                theme,
                screen_override,
            }),
            model: None,
            panel: None,
            dashboard: None,
            context: None,
            fonts: None,
            mouse_position: None,
            next_frame: None,
            error: None,
        }
    }

    /// Error that ended the event loop, if any
    pub fn take_error(&mut self) -> Option<anyhow::Error> {
        self.error.take()
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, error: anyhow::Error) {
        tracing::error!("{:#}", error);
        self.error = Some(error);
        event_loop.exit();
    }

    /// Build the model and both windows
    fn start(&mut self, event_loop: &ActiveEventLoop, startup: Startup) -> Result<()> {
        let screen = wm::screen_geometry(event_loop, startup.screen_override)
            .ok_or_else(|| anyhow::anyhow!("No monitor available"))?;
        let mut model = ShellModel::new(&startup.config, startup.theme, screen)?;

        let panel_window = Rc::new(event_loop.create_window(wm::shell_window_attributes(
            "edgedock-panel",
            model.panel.anchor,
            model.panel.size,
        ))?);
        let dashboard_window = Rc::new(event_loop.create_window(wm::shell_window_attributes(
            "edgedock-dashboard",
            model.dashboard.position(),
            model.dashboard_size,
        ))?);

        wm::announce_reserved_space(&panel_window, model.reserved);

        let context = Context::new(Rc::clone(&panel_window))
            .map_err(|e| anyhow::anyhow!("Failed to create graphics context: {}", e))?;
        let panel_renderer = Renderer::new(Rc::clone(&panel_window), &context)?;
        let dashboard_renderer = Renderer::new(Rc::clone(&dashboard_window), &context)?;

        let mut fonts = Fonts::new(
            find_font(startup.config.font.as_deref()),
            panel_window.scale_factor(),
        );
        if let Some(lengths) = fonts.measure_indicators(&model) {
            update(&mut model, Msg::App(AppMsg::IndicatorsMeasured(lengths)));
        }

        self.model = Some(model);
        self.panel = Some(ShellWindow {
            window: panel_window,
            renderer: panel_renderer,
        });
        self.dashboard = Some(ShellWindow {
            window: dashboard_window,
            renderer: dashboard_renderer,
        });
        self.context = Some(context);
        self.fonts = Some(fonts);
        Ok(())
    }

    fn dispatch(&mut self, event_loop: &ActiveEventLoop, msg: Msg) {
        let Some(model) = &mut self.model else {
            return;
        };
        if let Some(cmd) = update(model, msg) {
            self.process_cmd(event_loop, cmd);
        }
    }

    fn process_cmd(&mut self, event_loop: &ActiveEventLoop, cmd: Cmd) {
        if cmd.needs_redraw() {
            self.request_redraw();
        }
        if cmd.is_quit() {
            event_loop.exit();
            return;
        }
        if let (Some(point), Some(dashboard)) = (cmd.dashboard_target(), &self.dashboard) {
            dashboard
                .window
                .set_outer_position(PhysicalPosition::new(point.x, point.y));
        }
    }

    fn request_redraw(&self) {
        for shell_window in [&self.panel, &self.dashboard].into_iter().flatten() {
            shell_window.window.request_redraw();
        }
    }

    fn panel_event(&mut self, event_loop: &ActiveEventLoop, event: WindowEvent) {
        let Some(model) = &self.model else { return };

        let msg = match event {
            WindowEvent::CursorMoved { position, .. } => {
                self.mouse_position = Some((position.x, position.y));
                Some(input::panel_cursor_moved(model, position.x, position.y))
            }
            WindowEvent::CursorLeft { .. } => {
                self.mouse_position = None;
                Some(Msg::Indicator(IndicatorMsg::PointerLeft))
            }
            WindowEvent::MouseInput { state, button, .. } => {
                input::panel_mouse_input(model, self.mouse_position, state, button)
            }
            WindowEvent::KeyboardInput { event, .. } => input::key_input(&event),
            WindowEvent::Resized(size) => {
                if let Some(panel) = &mut self.panel {
                    if let Err(e) = panel.renderer.resize(size.width, size.height) {
                        tracing::error!("Panel resize failed: {}", e);
                    }
                    panel.window.request_redraw();
                }
                None
            }
            WindowEvent::RedrawRequested => {
                if let (Some(panel), Some(fonts)) = (&mut self.panel, &mut self.fonts) {
                    if let Err(e) = panel.renderer.render_panel(model, fonts) {
                        tracing::error!("Panel render error: {}", e);
                    }
                }
                None
            }
            _ => None,
        };

        if let Some(msg) = msg {
            self.dispatch(event_loop, msg);
        }
    }

    fn dashboard_event(&mut self, event_loop: &ActiveEventLoop, event: WindowEvent) {
        let Some(model) = &self.model else { return };

        let msg = match event {
            WindowEvent::KeyboardInput { event, .. } => input::key_input(&event),
            WindowEvent::Resized(size) => {
                if let Some(dashboard) = &mut self.dashboard {
                    if let Err(e) = dashboard.renderer.resize(size.width, size.height) {
                        tracing::error!("Dashboard resize failed: {}", e);
                    }
                    dashboard.window.request_redraw();
                }
                None
            }
            WindowEvent::RedrawRequested => {
                if let (Some(dashboard), Some(fonts)) = (&mut self.dashboard, &mut self.fonts) {
                    if let Err(e) = dashboard.renderer.render_dashboard(model, fonts) {
                        tracing::error!("Dashboard render error: {}", e);
                    }
                }
                None
            }
            _ => None,
        };

        if let Some(msg) = msg {
            self.dispatch(event_loop, msg);
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        let Some(startup) = self.startup.take() else {
            return;
        };
        if let Err(e) = self.start(event_loop, startup) {
            self.fail(event_loop, e);
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, window_id: WindowId, event: WindowEvent) {
        if matches!(event, WindowEvent::CloseRequested) {
            self.dispatch(event_loop, Msg::App(AppMsg::Quit));
            return;
        }

        let is_panel = self.panel.as_ref().map(|p| p.window.id()) == Some(window_id);
        let is_dashboard = self.dashboard.as_ref().map(|d| d.window.id()) == Some(window_id);

        if is_panel {
            self.panel_event(event_loop, event);
        } else if is_dashboard {
            self.dashboard_event(event_loop, event);
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        let animating = self
            .model
            .as_ref()
            .is_some_and(|model| model.dashboard.is_animating());

        if !animating {
            self.next_frame = None;
            event_loop.set_control_flow(ControlFlow::Wait);
            return;
        }

        let now = Instant::now();
        if self.next_frame.map_or(true, |next| now >= next) {
            self.dispatch(event_loop, Msg::Dashboard(DashboardMsg::Tick(now)));
            self.next_frame = Some(now + FRAME_INTERVAL);
        }
        if let Some(next) = self.next_frame {
            event_loop.set_control_flow(ControlFlow::WaitUntil(next));
        }
    }
}
