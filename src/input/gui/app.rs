//! Main GUI application loop.

use crate::controllers::slide_panel::SlidePanelController;
use crate::core::data::colour::Rgb;
use crate::core::data::pixel_image::PixelImage;
use crate::core::frost::frost_layer::build_frost_layer;
use crate::core::scene::compositor::compose_into;
use crate::core::slide::limits::SlideLimits;
use crate::input::gui::gesture::GestureInputState;
use crate::presenters::pixels::FramePresenter;
use crate::storage::background::load_background;
use egui::Context;
use egui_winit::State as EguiWinitState;
use std::time::Instant;
use winit::{
    dpi::LogicalSize,
    event::{Event, WindowEvent},
    event_loop::EventLoop,
    window::{Window, WindowBuilder},
};

const OVERLAY_TEXT: &str = "The overlaid text is clear and the background below is frosty.";
const OVERLAY_TEXT_SIZE: f32 = 25.0;
const MIDNIGHT_BLUE: egui::Color32 = egui::Color32::from_rgb(25, 25, 112);

/// Application state holding the scene layers, the slide controller and the
/// egui context.
struct App {
    limits: SlideLimits,
    controller: SlidePanelController,
    gesture: GestureInputState,
    background: PixelImage,
    frost: PixelImage,
    frame: PixelImage,
    presenter: FramePresenter,
    /// egui context for immediate mode UI.
    egui_ctx: Context,
    /// egui-winit state for input handling.
    egui_state: EguiWinitState,
    /// Set while a slide is running; `None` keeps the next tick at dt = 0 so
    /// idle time never advances the animation.
    last_tick: Option<Instant>,
}

impl App {
    /// Creates a new App: loads the background, builds the frost layer once
    /// and ties a pixels surface to the window.
    fn new(window: &'static Window, event_loop: &EventLoop<()>) -> Self {
        let limits = SlideLimits::default();
        let scale_factor = window.scale_factor();

        let background =
            load_background(&limits).expect("Failed to load bundled background image");
        let frost = build_frost_layer(&background, Rgb::AZURE, &limits)
            .expect("Frost layer matches the background dimensions");
        let frame = background.clone();

        let presenter = FramePresenter::new(window, limits.panel_width, limits.panel_height);

        let egui_ctx = Context::default();
        let egui_state = EguiWinitState::new(
            egui_ctx.clone(),
            egui_ctx.viewport_id(),
            event_loop,
            Some(scale_factor as f32),
            None, // max_texture_side, use default
        );

        Self {
            limits,
            controller: SlidePanelController::new(limits),
            gesture: GestureInputState::default(),
            background,
            frost,
            frame,
            presenter,
            egui_ctx,
            egui_state,
            last_tick: None,
        }
    }

    /// Runs one frame: applies pending gestures, advances the slide, composes
    /// the scene and presents it.
    ///
    /// Returns true when another redraw should follow immediately.
    fn redraw(&mut self, window: &Window) -> Result<bool, pixels::Error> {
        let now = Instant::now();
        let dt = self
            .last_tick
            .map_or(0.0, |tick| (now - tick).as_secs_f64());

        self.controller.handle_gesture(self.gesture.take_pending());
        let report = self.controller.tick(dt);
        self.last_tick = report.animating.then_some(now);

        let state = self.controller.frame_state();
        compose_into(&self.background, &self.frost, state.clip, &mut self.frame)
            .expect("layers share the panel dimensions");

        let mut egui_output = self.update_ui(window, state.content_visible);

        // Handle egui platform output (e.g., clipboard, cursor changes)
        let platform_output = std::mem::take(&mut egui_output.platform_output);
        self.egui_state
            .handle_platform_output(window, platform_output);

        let egui_repaint = egui_output
            .viewport_output
            .values()
            .any(|v| v.repaint_delay.is_zero());

        self.presenter
            .render(&self.frame, egui_output, &self.egui_ctx)?;

        Ok(report.animating || egui_repaint)
    }

    /// Runs the egui frame: the overlay label, centred over the frost,
    /// shown only while the slide-in has completed.
    fn update_ui(&mut self, window: &Window, content_visible: bool) -> egui::FullOutput {
        let raw_input = self.egui_state.take_egui_input(window);
        let max_width = self.limits.panel_width as f32 - 20.0;

        self.egui_ctx.run(raw_input, |ctx| {
            if content_visible {
                egui::Area::new(egui::Id::new("overlay_content"))
                    .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
                    .show(ctx, |ui| {
                        ui.set_max_width(max_width);
                        ui.label(
                            egui::RichText::new(OVERLAY_TEXT)
                                .size(OVERLAY_TEXT_SIZE)
                                .color(MIDNIGHT_BLUE),
                        );
                    });
            }
        })
    }

    /// Handles a window event, forwarding it to egui first.
    ///
    /// Returns true if egui consumed the event (e.g., click on UI element).
    fn handle_window_event(&mut self, window: &Window, event: &WindowEvent) -> bool {
        let response = self.egui_state.on_window_event(window, event);
        response.consumed
    }
}

/// Runs the GUI application.
///
/// This function does not return until the window is closed.
pub fn run_gui() {
    let event_loop = EventLoop::new().expect("Failed to create event loop");
    let limits = SlideLimits::default();

    // Leak the window to get a 'static reference for pixels
    let window: &'static Window = Box::leak(Box::new(
        WindowBuilder::new()
            .with_title("Frost Panel")
            .with_inner_size(LogicalSize::new(
                f64::from(limits.panel_width),
                f64::from(limits.panel_height),
            ))
            .with_resizable(false)
            .build(&event_loop)
            .expect("Failed to create window"),
    ));

    let mut app = App::new(window, &event_loop);

    // Track whether we need to redraw
    let mut redraw_pending = true;

    event_loop
        .run(|event, elwt| {
            match event {
                Event::WindowEvent {
                    ref event,
                    window_id,
                } if window_id == window.id() => {
                    // Forward event to egui first
                    let egui_consumed = app.handle_window_event(window, event);

                    match event {
                        WindowEvent::CloseRequested => {
                            elwt.exit();
                        }
                        WindowEvent::RedrawRequested => {
                            redraw_pending = false;

                            match app.redraw(window) {
                                Ok(animating) => {
                                    if animating {
                                        redraw_pending = true;
                                    }
                                }
                                Err(e) => {
                                    eprintln!("Render error: {e}");
                                    elwt.exit();
                                }
                            }
                        }
                        WindowEvent::MouseWheel { delta, .. } => {
                            if !egui_consumed {
                                app.gesture.handle_scroll(*delta);
                                redraw_pending = true;
                            }
                        }
                        WindowEvent::Touch(touch) => {
                            app.gesture
                                .handle_touch(touch.phase, touch.id, touch.location.y);
                            redraw_pending = true;
                        }
                        WindowEvent::Resized(size) => {
                            app.presenter.resize_surface(size.width, size.height);
                            redraw_pending = true;
                        }
                        WindowEvent::Focused(focused) => {
                            // A half-tracked touch must not fire on refocus
                            if !focused {
                                app.gesture.reset();
                            }
                        }
                        WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                            app.egui_ctx.set_pixels_per_point(*scale_factor as f32);
                            // Get the new physical size after scale factor change
                            let size = window.inner_size();
                            app.presenter.resize_surface(size.width, size.height);
                            redraw_pending = true;
                        }
                        _ => {
                            // For other events, request redraw if egui consumed them
                            // (indicates UI state changed)
                            if egui_consumed {
                                redraw_pending = true;
                            }
                        }
                    }
                }
                Event::AboutToWait => {
                    // Only request redraw if state changed
                    if redraw_pending {
                        window.request_redraw();
                    }
                }
                _ => {}
            }
        })
        .expect("Event loop error");
}
