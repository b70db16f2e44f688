use winit::{event_loop::EventLoopProxy, window::Window};

use crate::core::data::pixel_rect::PixelRect;
use crate::input::gui::app::{events::GuiEvent, ports::presenter::GuiPresenterPort};
use crate::input::gui::commands::ports::presenter_factory::GuiPresenterFactoryPort;
use crate::presenters::pixels::presenter::PixelsPresenter;

#[derive(Debug, Default)]
pub struct PixelsPresenterFactory {}

impl GuiPresenterFactoryPort<PixelsPresenter> for PixelsPresenterFactory {
    fn build(
        &self,
        window: &'static Window,
        event_loop_proxy: EventLoopProxy<GuiEvent>,
        pixel_rect: PixelRect,
    ) -> PixelsPresenter {
        PixelsPresenter::new(window, event_loop_proxy, pixel_rect)
    }
}

impl PixelsPresenterFactory {
    #[must_use]
    pub fn new() -> Self {
        Self {}
    }
}
