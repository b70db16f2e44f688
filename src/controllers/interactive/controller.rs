use log::{info, warn};
use std::sync::Arc;
use std::time::Instant;

use crate::controllers::interactive::data::frame_data::FrameData;
use crate::controllers::interactive::errors::render_error::RenderError;
use crate::controllers::interactive::events::render_event::RenderEvent;
use crate::controllers::interactive::ports::presenter_port::InteractiveControllerPresenterPort;
use crate::core::actions::render_mandelbrot::{ComputeError, colorize, compute_viewport};
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;
use crate::core::data::viewport::Viewport;
use crate::core::fractals::mandelbrot::mandelbrot_config::{
    MandelbrotConfig, clamp_interactive_iterations, default_region,
};
use crate::core::zoom::{ZoomController, ZoomOutcome};

pub struct InteractiveController {
    presenter_port: Arc<dyn InteractiveControllerPresenterPort>,
    viewport: Viewport,
    max_iterations: u32,
    zoom: ZoomController,
    generation: u64,
}

impl InteractiveController {
    pub fn new(
        presenter_port: Arc<dyn InteractiveControllerPresenterPort>,
        pixel_rect: PixelRect,
    ) -> Self {
        let config = MandelbrotConfig::default();

        Self::with_viewport(
            presenter_port,
            config.viewport(pixel_rect),
            config.max_iterations,
        )
    }

    /// Starts from an explicit viewport and budget, taken as given.
    pub fn with_viewport(
        presenter_port: Arc<dyn InteractiveControllerPresenterPort>,
        viewport: Viewport,
        max_iterations: u32,
    ) -> Self {
        Self {
            presenter_port,
            viewport,
            max_iterations,
            zoom: ZoomController::new(),
            generation: 0,
        }
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[must_use]
    pub fn selection(&self) -> Option<PixelRect> {
        self.zoom.selection()
    }

    #[must_use]
    pub fn status_line(&self) -> String {
        format!("{}  iter={}", self.viewport.region(), self.max_iterations)
    }

    /// Sets the budget for the next render, snapped to the slider range.
    pub fn set_max_iterations(&mut self, max_iterations: u32) -> u32 {
        let clamped = clamp_interactive_iterations(max_iterations);

        if clamped != max_iterations {
            warn!(
                "iteration budget {} adjusted to {}",
                max_iterations, clamped
            );
        }

        self.max_iterations = clamped;
        clamped
    }

    pub fn press(&mut self, point: Point) {
        self.zoom.press(point);
    }

    pub fn drag(&mut self, point: Point) -> Option<PixelRect> {
        self.zoom.drag(point)
    }

    pub fn cancel_selection(&mut self) {
        self.zoom.cancel();
    }

    /// Finishes a zoom gesture. A `Zoomed` outcome has already replaced the
    /// viewport; the caller decides when to render it.
    pub fn release(&mut self, point: Point) -> ZoomOutcome {
        let outcome = self.zoom.release(point, &self.viewport);

        if let ZoomOutcome::Zoomed(viewport) = outcome {
            self.viewport = viewport;
        }

        outcome
    }

    /// Restores the default region; the budget is kept.
    pub fn reset(&mut self) {
        self.zoom.cancel();
        self.viewport = self.viewport.with_region(default_region());
        info!("view reset to {}", self.viewport.region());
    }

    /// Renders the current viewport and hands the result to the presenter.
    pub fn render(&mut self) -> u64 {
        self.generation += 1;
        let generation = self.generation;
        let viewport = self.viewport;
        let max_iterations = self.max_iterations;

        let start = Instant::now();
        let result = Self::render_viewport(&viewport, max_iterations);
        let render_duration = start.elapsed();

        match result {
            Ok(pixel_buffer) => {
                info!(
                    "render {}: {}x{} {}  iter={} in {:?}",
                    generation,
                    viewport.width(),
                    viewport.height(),
                    viewport.region(),
                    max_iterations,
                    render_duration
                );

                self.presenter_port.present(RenderEvent::Frame(FrameData {
                    generation,
                    pixel_buffer,
                    viewport,
                    max_iterations,
                    render_duration,
                }));
            }
            Err(error) => {
                let error = RenderError { generation, error };
                warn!("{}", error);

                self.presenter_port.present(RenderEvent::Error(error));
            }
        }

        generation
    }

    fn render_viewport(viewport: &Viewport, max_iterations: u32) -> Result<PixelBuffer, ComputeError> {
        let matrix = compute_viewport(viewport, max_iterations)?;

        Ok(colorize(&matrix, max_iterations))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::colour::Colour;
    use crate::core::data::complex::Complex;
    use crate::core::fractals::mandelbrot::errors::MandelbrotError;
    use std::sync::Mutex;

    #[derive(Default)]
    struct MockPresenterPort {
        events: Mutex<Vec<RenderEvent>>,
    }

    impl MockPresenterPort {
        fn take_events(&self) -> Vec<RenderEvent> {
            let mut guard = self.events.lock().unwrap();
            std::mem::take(&mut *guard)
        }
    }

    impl InteractiveControllerPresenterPort for MockPresenterPort {
        fn present(&self, event: RenderEvent) {
            self.events.lock().unwrap().push(event);
        }
    }

    fn create_controller(width: u32, height: u32) -> (Arc<MockPresenterPort>, InteractiveController) {
        let presenter_port = Arc::new(MockPresenterPort::default());
        let controller = InteractiveController::new(
            Arc::clone(&presenter_port) as Arc<dyn InteractiveControllerPresenterPort>,
            PixelRect::from_size(width, height).unwrap(),
        );

        (presenter_port, controller)
    }

    fn single_frame(presenter_port: &MockPresenterPort) -> FrameData {
        let mut events = presenter_port.take_events();
        assert_eq!(events.len(), 1, "expected exactly one render event");

        match events.remove(0) {
            RenderEvent::Frame(frame) => frame,
            RenderEvent::Error(error) => panic!("unexpected render error: {}", error),
        }
    }

    #[test]
    fn test_starts_with_default_view() {
        let (_, controller) = create_controller(700, 500);

        assert_eq!(controller.viewport().region(), default_region());
        assert_eq!(controller.max_iterations(), 256);
        assert_eq!(controller.generation(), 0);
        assert_eq!(
            controller.status_line(),
            "Re [-2.500, 1.000]  Im [-1.200, 1.200]  iter=256"
        );
    }

    #[test]
    fn test_render_emits_frame() {
        let (presenter_port, mut controller) = create_controller(700, 500);

        let generation = controller.render();
        let frame = single_frame(&presenter_port);

        assert_eq!(generation, 1);
        assert_eq!(frame.generation, generation);
        assert_eq!(frame.max_iterations, 256);
        assert_eq!(frame.viewport, controller.viewport());
        assert_eq!(frame.pixel_buffer.buffer_size(), 700 * 500 * 3);
        assert_eq!(
            frame.pixel_buffer.pixel(Point { x: 350, y: 250 }),
            Some(Colour::BLACK)
        );
    }

    #[test]
    fn test_generation_ids_increment() {
        let (presenter_port, mut controller) = create_controller(8, 6);

        let first = controller.render();
        let second = controller.render();

        assert!(second > first);
        assert_eq!(presenter_port.take_events().len(), 2);
    }

    #[test]
    fn test_render_error_is_presented() {
        let presenter_port = Arc::new(MockPresenterPort::default());
        let viewport = Viewport::from_bounds(4, 4, -2.5, 1.0, -1.2, 1.2).unwrap();
        let mut controller = InteractiveController::with_viewport(
            Arc::clone(&presenter_port) as Arc<dyn InteractiveControllerPresenterPort>,
            viewport,
            0,
        );

        let generation = controller.render();
        let events = presenter_port.take_events();

        assert_eq!(events.len(), 1);
        match &events[0] {
            RenderEvent::Error(error) => {
                assert_eq!(error.generation, generation);
                assert_eq!(
                    error.error,
                    ComputeError::Mandelbrot(MandelbrotError::ZeroMaxIterations)
                );
            }
            RenderEvent::Frame(_) => panic!("expected a render error"),
        }
    }

    #[test]
    fn test_set_max_iterations_snaps_to_slider() {
        let (presenter_port, mut controller) = create_controller(8, 6);

        assert_eq!(controller.set_max_iterations(512), 512);
        assert_eq!(controller.set_max_iterations(10), 64);
        assert_eq!(controller.set_max_iterations(100_000), 2048);
        assert_eq!(controller.max_iterations(), 2048);

        controller.render();
        assert_eq!(single_frame(&presenter_port).max_iterations, 2048);
    }

    #[test]
    fn test_small_selection_keeps_viewport() {
        let (_, mut controller) = create_controller(700, 500);
        let before = controller.viewport();

        controller.press(Point { x: 100, y: 100 });
        controller.drag(Point { x: 103, y: 300 });
        let outcome = controller.release(Point { x: 103, y: 300 });

        assert_eq!(outcome, ZoomOutcome::Discarded);
        assert_eq!(controller.viewport(), before);
    }

    #[test]
    fn test_selection_replaces_viewport() {
        let (presenter_port, mut controller) = create_controller(700, 500);

        controller.press(Point { x: 350, y: 250 });
        assert!(controller.drag(Point { x: 700, y: 500 }).is_some());
        let outcome = controller.release(Point { x: 700, y: 500 });

        assert_eq!(outcome, ZoomOutcome::Zoomed(controller.viewport()));
        assert_eq!(controller.viewport().region().top_left(), Complex::new(-0.75, 0.0));
        assert_eq!(controller.viewport().region().bottom_right(), Complex::new(1.0, 1.2));
        assert_eq!(controller.selection(), None);
        assert!(presenter_port.take_events().is_empty());
    }

    #[test]
    fn test_reset_restores_region_and_keeps_budget() {
        let (_, mut controller) = create_controller(700, 500);
        controller.set_max_iterations(1024);
        controller.press(Point { x: 10, y: 10 });
        controller.release(Point { x: 200, y: 200 });

        controller.reset();

        assert_eq!(controller.viewport().region(), default_region());
        assert_eq!(controller.max_iterations(), 1024);
        assert_eq!(
            controller.status_line(),
            "Re [-2.500, 1.000]  Im [-1.200, 1.200]  iter=1024"
        );
    }

    #[test]
    fn test_cancel_selection() {
        let (_, mut controller) = create_controller(700, 500);
        controller.press(Point { x: 10, y: 10 });
        controller.drag(Point { x: 200, y: 200 });

        controller.cancel_selection();

        assert_eq!(controller.selection(), None);
        assert_eq!(controller.release(Point { x: 200, y: 200 }), ZoomOutcome::Ignored);
    }
}
