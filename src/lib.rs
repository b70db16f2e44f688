mod adapters;
mod controllers;
mod core;
#[cfg(feature = "gui")]
mod input;
mod presenters;

pub use adapters::pixel_format::{copy_rgb_to_rgba, draw_rect_outline};
pub use controllers::batch::{BATCH_CASES, BatchCase, BatchController, BatchError, find_case};
pub use controllers::interactive::{
    FrameData, InteractiveController, InteractiveControllerPresenterPort, RenderError, RenderEvent,
};
pub use controllers::ports::file_presenter::FilePresenterPort;
pub use crate::core::actions::generate_fractal::generate_fractal_parallel_rayon::generate_fractal_parallel_rayon;
pub use crate::core::actions::generate_fractal::generate_fractal_serial::generate_fractal_serial;
pub use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
pub use crate::core::actions::render_mandelbrot::{ComputeError, colorize, compute, compute_viewport};
pub use crate::core::data::colour::Colour;
pub use crate::core::data::complex::Complex;
pub use crate::core::data::complex_rect::{ComplexRect, ComplexRectError};
pub use crate::core::data::iteration_matrix::{IterationMatrix, IterationMatrixError};
pub use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferError};
pub use crate::core::data::pixel_rect::{PixelRect, PixelRectError};
pub use crate::core::data::point::Point;
pub use crate::core::data::viewport::{Viewport, ViewportError};
pub use crate::core::fractals::mandelbrot::algorithm::MandelbrotAlgorithm;
pub use crate::core::fractals::mandelbrot::errors::MandelbrotError;
pub use crate::core::fractals::mandelbrot::mandelbrot_config::{
    DEFAULT_MAX_ITERATIONS, INTERACTIVE_ITERATIONS_STEP, MAX_INTERACTIVE_ITERATIONS,
    MIN_INTERACTIVE_ITERATIONS, MandelbrotConfig, clamp_interactive_iterations, default_region,
};
pub use crate::core::zoom::{MIN_SELECTION_PIXELS, ZoomController, ZoomOutcome, ZoomState};
pub use presenters::file::png::PngFilePresenter;

#[cfg(feature = "gui")]
pub use input::gui::commands::run_gui::RunGuiCommand;
#[cfg(feature = "gui")]
pub use presenters::pixels::factory::PixelsPresenterFactory;
