use egui::Context as EguiContext;
use egui_wgpu::Renderer as EguiRenderer;
use log::warn;
use pixels::Pixels;
use pixels::SurfaceTexture;
use pixels::wgpu;
use std::sync::Arc;
use winit::event_loop::EventLoopProxy;
use winit::window::Window;

use crate::adapters::pixel_format::{RGBA_BYTES_PER_PIXEL, copy_rgb_to_rgba, draw_rect_outline};
use crate::controllers::interactive::events::render_event::RenderEvent;
use crate::controllers::interactive::ports::presenter_port::InteractiveControllerPresenterPort;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;
use crate::input::gui::app::events::GuiEvent;
use crate::input::gui::app::ports::presenter::GuiPresenterPort;
use crate::presenters::pixels::adapter::PixelsAdapter;

const SELECTION_COLOUR: [u8; 4] = [255, 255, 255, 255];

pub struct PixelsPresenter {
    pixels: Pixels<'static>,
    egui_renderer: EguiRenderer,
    adapter: Arc<PixelsAdapter>,
    pixel_rect: PixelRect,
    surface_width: u32,
    surface_height: u32,
    last_frame: Option<PixelBuffer>,
    last_presented_generation: u64,
    last_error_message: Option<String>,
}

impl GuiPresenterPort for PixelsPresenter {
    fn new(
        window: &'static Window,
        event_loop_proxy: EventLoopProxy<GuiEvent>,
        pixel_rect: PixelRect,
    ) -> Self {
        let size = window.inner_size();
        let surface_texture = SurfaceTexture::new(size.width, size.height, window);

        let pixels = Pixels::new(pixel_rect.width(), pixel_rect.height(), surface_texture)
            .expect("Failed to create pixels surface");

        let egui_renderer = EguiRenderer::new(
            pixels.device(),
            pixels.render_texture_format(),
            None,
            1,
        );

        Self {
            pixels,
            egui_renderer,
            adapter: Arc::new(PixelsAdapter::new(event_loop_proxy)),
            pixel_rect,
            surface_width: size.width,
            surface_height: size.height,
            last_frame: None,
            last_presented_generation: 0,
            last_error_message: None,
        }
    }

    fn share_adapter(&self) -> Arc<dyn InteractiveControllerPresenterPort> {
        Arc::clone(&self.adapter) as Arc<dyn InteractiveControllerPresenterPort>
    }

    fn poll_render_event(&mut self) {
        let Some(event) = self.adapter.take_render_event() else {
            return;
        };

        match event {
            RenderEvent::Frame(frame) => {
                if frame.generation > self.last_presented_generation
                    && frame.pixel_buffer.pixel_rect() == self.pixel_rect
                {
                    self.last_presented_generation = frame.generation;
                    self.last_frame = Some(frame.pixel_buffer);
                    self.last_error_message = None;
                }
            }
            RenderEvent::Error(error) => {
                if error.generation >= self.last_presented_generation {
                    self.last_error_message = Some(error.to_string());
                }
            }
        }
    }

    fn last_error_message(&self) -> Option<&str> {
        self.last_error_message.as_deref()
    }

    fn window_pos_to_pixel(&self, position: (f32, f32)) -> Point {
        let (x, y) = match self.pixels.window_pos_to_pixel(position) {
            Ok((x, y)) => (x as i64, y as i64),
            Err((x, y)) => (x as i64, y as i64),
        };

        Point {
            x: x.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32,
            y: y.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32,
        }
    }

    fn render(
        &mut self,
        egui_output: egui::FullOutput,
        egui_ctx: &EguiContext,
        selection: Option<PixelRect>,
    ) -> Result<(), pixels::Error> {
        if self.surface_width == 0 || self.surface_height == 0 {
            return Ok(());
        }

        self.draw_frame(selection);

        self.pixels.render_with(|encoder, render_target, context| {
            context.scaling_renderer.render(encoder, render_target);

            let clipped_primitives =
                egui_ctx.tessellate(egui_output.shapes, egui_ctx.pixels_per_point());

            let screen_descriptor = egui_wgpu::ScreenDescriptor {
                size_in_pixels: [self.surface_width, self.surface_height],
                pixels_per_point: egui_ctx.pixels_per_point(),
            };

            let textures_delta = egui_output.textures_delta;

            for (id, delta) in &textures_delta.set {
                self.egui_renderer
                    .update_texture(&context.device, &context.queue, *id, delta);
            }

            self.egui_renderer.update_buffers(
                &context.device,
                &context.queue,
                encoder,
                &clipped_primitives,
                &screen_descriptor,
            );

            {
                let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                    label: Some("egui"),
                    color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                        view: render_target,
                        resolve_target: None,
                        ops: wgpu::Operations {
                            load: wgpu::LoadOp::Load,
                            store: wgpu::StoreOp::Store,
                        },
                    })],
                    depth_stencil_attachment: None,
                    ..Default::default()
                });

                self.egui_renderer.render(
                    &mut render_pass,
                    &clipped_primitives,
                    &screen_descriptor,
                );
            }

            for id in &textures_delta.free {
                self.egui_renderer.free_texture(id);
            }

            Ok(())
        })
    }

    fn resize(&mut self, width: u32, height: u32) {
        if let Err(err) = self.pixels.resize_surface(width, height) {
            warn!("could not resize surface to {}x{}: {}", width, height, err);
            return;
        }

        self.surface_width = width;
        self.surface_height = height;
    }
}

impl PixelsPresenter {
    fn draw_frame(&mut self, selection: Option<PixelRect>) {
        let width = self.pixel_rect.width();
        let height = self.pixel_rect.height();
        let frame = self.pixels.frame_mut();

        match &self.last_frame {
            Some(pixel_buffer) => copy_rgb_to_rgba(pixel_buffer.buffer(), frame),
            None => {
                for pixel in frame.chunks_exact_mut(RGBA_BYTES_PER_PIXEL) {
                    pixel.copy_from_slice(&[0, 0, 0, 255]);
                }
            }
        }

        if let Some(rect) = selection {
            draw_rect_outline(frame, width, height, rect, SELECTION_COLOUR);
        }
    }
}
