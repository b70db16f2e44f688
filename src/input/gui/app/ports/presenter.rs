use std::sync::Arc;

use egui::Context as EguiContext;
use winit::{event_loop::EventLoopProxy, window::Window};

use crate::controllers::interactive::ports::presenter_port::InteractiveControllerPresenterPort;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;
use crate::input::gui::app::events::GuiEvent;

pub trait GuiPresenterPort {
    fn new(
        window: &'static Window,
        event_loop_proxy: EventLoopProxy<GuiEvent>,
        pixel_rect: PixelRect,
    ) -> Self;
    fn share_adapter(&self) -> Arc<dyn InteractiveControllerPresenterPort>;
    /// Takes the latest render event from the adapter, if any.
    fn poll_render_event(&mut self);
    fn last_error_message(&self) -> Option<&str>;
    /// Maps a physical window position to a raster pixel; positions outside the
    /// raster are returned unclamped.
    fn window_pos_to_pixel(&self, position: (f32, f32)) -> Point;
    fn render(
        &mut self,
        egui_output: egui::FullOutput,
        egui_ctx: &EguiContext,
        selection: Option<PixelRect>,
    ) -> Result<(), pixels::Error>;
    fn resize(&mut self, width: u32, height: u32);
}
