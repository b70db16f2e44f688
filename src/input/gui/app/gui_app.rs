use egui::Context;
use egui_winit::State as EguiWinitState;
use winit::event::{ElementState, MouseButton, WindowEvent};
use winit::event_loop::EventLoop;
use winit::window::Window;

use crate::controllers::interactive::InteractiveController;
use crate::core::data::point::Point;
use crate::core::fractals::mandelbrot::mandelbrot_config::{
    INTERACTIVE_ITERATIONS_STEP, MAX_INTERACTIVE_ITERATIONS, MIN_INTERACTIVE_ITERATIONS,
};
use crate::core::zoom::ZoomOutcome;
use crate::input::gui::app::events::GuiEvent;
use crate::input::gui::app::ports::presenter::GuiPresenterPort;
use crate::input::gui::app::state::GuiAppState;

pub struct GuiApp<T: GuiPresenterPort> {
    presenter: T,
    controller: InteractiveController,
    pub state: GuiAppState,
    cursor: Option<Point>,
    pub egui_ctx: Context,
    pub egui_state: EguiWinitState,
}

impl<T: GuiPresenterPort> GuiApp<T> {
    pub fn new(
        window: &'static Window,
        event_loop: &EventLoop<GuiEvent>,
        presenter: T,
        controller: InteractiveController,
    ) -> Self {
        let scale_factor = window.scale_factor();
        let egui_ctx = Context::default();

        let egui_state = EguiWinitState::new(
            egui_ctx.clone(),
            egui_ctx.viewport_id(),
            event_loop,
            Some(scale_factor as f32),
            None,
        );

        Self {
            presenter,
            controller,
            state: GuiAppState::default(),
            cursor: None,
            egui_ctx,
            egui_state,
        }
    }

    /// Runs a queued render if its "Computing…" frame has already been shown.
    pub fn run_pending_render(&mut self) {
        if !self.state.begin_frame() {
            return;
        }

        self.state.slider_iterations = self
            .controller
            .set_max_iterations(self.state.slider_iterations);
        self.controller.render();
        self.presenter.poll_render_event();
        self.state.finish_render();
    }

    pub fn poll_render_event(&mut self) {
        self.presenter.poll_render_event();
        self.state.redraw_pending = true;
    }

    pub fn render(&mut self, egui_output: egui::FullOutput) -> Result<(), pixels::Error> {
        self.presenter
            .render(egui_output, &self.egui_ctx, self.controller.selection())
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }

        self.presenter.resize(width, height);
        self.state.redraw_pending = true;
    }

    pub fn update_ui(&mut self, window: &Window) -> egui::FullOutput {
        let raw_input = self.egui_state.take_egui_input(window);
        let status = self.state.status_text(&self.controller.status_line());
        let error_message = self.presenter.last_error_message().map(str::to_owned);
        let mut render_clicked = false;
        let mut reset_clicked = false;

        let output = self.egui_ctx.run(raw_input, |ctx| {
            egui::Window::new("Mandelbrot")
                .default_pos([10.0, 10.0])
                .resizable(false)
                .show(ctx, |ui| {
                    ui.horizontal(|ui| {
                        ui.label("Iterations:");
                        ui.add(
                            egui::Slider::new(
                                &mut self.state.slider_iterations,
                                MIN_INTERACTIVE_ITERATIONS..=MAX_INTERACTIVE_ITERATIONS,
                            )
                            .step_by(f64::from(INTERACTIVE_ITERATIONS_STEP)),
                        );
                    });

                    ui.horizontal(|ui| {
                        render_clicked = ui.button("Render").clicked();
                        reset_clicked = ui.button("Reset").clicked();
                    });

                    ui.separator();
                    ui.label(status.as_str());

                    if let Some(message) = &error_message {
                        ui.colored_label(egui::Color32::LIGHT_RED, message.as_str());
                    }
                });
        });

        if reset_clicked {
            self.controller.reset();
            self.state.request_render();
        } else if render_clicked {
            self.state.request_render();
        }

        output
    }

    /// Forwards a window event to egui. Returns `(consumed, repaint)`.
    pub fn handle_window_event(&mut self, window: &Window, event: &WindowEvent) -> (bool, bool) {
        let response = self.egui_state.on_window_event(window, event);
        (response.consumed, response.repaint)
    }

    /// Drives the zoom gesture from raw pointer events.
    pub fn handle_pointer_event(&mut self, event: &WindowEvent, egui_consumed: bool) {
        match event {
            WindowEvent::CursorMoved { position, .. } => {
                let point = self
                    .presenter
                    .window_pos_to_pixel((position.x as f32, position.y as f32));
                self.cursor = Some(point);

                if self.controller.drag(point).is_some() {
                    self.state.redraw_pending = true;
                }
            }
            WindowEvent::MouseInput {
                state: ElementState::Pressed,
                button: MouseButton::Left,
                ..
            } => {
                if egui_consumed || self.egui_ctx.is_pointer_over_area() {
                    return;
                }

                if let Some(point) = self.cursor {
                    self.controller.press(point);
                    self.state.redraw_pending = true;
                }
            }
            WindowEvent::MouseInput {
                state: ElementState::Released,
                button: MouseButton::Left,
                ..
            } => {
                let Some(point) = self.cursor else {
                    return;
                };

                if let ZoomOutcome::Zoomed(_) = self.controller.release(point) {
                    self.state.request_render();
                }
                self.state.redraw_pending = true;
            }
            WindowEvent::Focused(false) => {
                self.controller.cancel_selection();
                self.state.redraw_pending = true;
            }
            _ => {}
        }
    }
}
