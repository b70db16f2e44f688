use log::debug;
use std::error::Error;
use std::fmt;
use std::time::Instant;

use crate::core::actions::generate_fractal::generate_fractal_parallel_rayon::generate_fractal_parallel_rayon;
use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::actions::generate_pixel_buffer::generate_pixel_buffer::generate_pixel_buffer;
use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::iteration_matrix::{IterationMatrix, IterationMatrixError};
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::viewport::{Viewport, ViewportError};
use crate::core::fractals::mandelbrot::algorithm::MandelbrotAlgorithm;
use crate::core::fractals::mandelbrot::colour_maps::log_gradient::MandelbrotLogGradient;
use crate::core::fractals::mandelbrot::errors::MandelbrotError;
use crate::core::util::pixel_to_complex_coords::PixelToComplexCoordsError;

#[derive(Debug, Clone, PartialEq)]
pub enum ComputeError {
    Viewport(ViewportError),
    Mandelbrot(MandelbrotError),
    PixelMapping(PixelToComplexCoordsError),
    IterationMatrix(IterationMatrixError),
}

impl fmt::Display for ComputeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Viewport(err) => write!(f, "invalid viewport: {}", err),
            Self::Mandelbrot(err) => write!(f, "invalid mandelbrot settings: {}", err),
            Self::PixelMapping(err) => write!(f, "pixel mapping failed: {}", err),
            Self::IterationMatrix(err) => write!(f, "iteration matrix error: {}", err),
        }
    }
}

impl Error for ComputeError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Viewport(err) => Some(err),
            Self::Mandelbrot(err) => Some(err),
            Self::PixelMapping(err) => Some(err),
            Self::IterationMatrix(err) => Some(err),
        }
    }
}

impl From<ViewportError> for ComputeError {
    fn from(err: ViewportError) -> Self {
        Self::Viewport(err)
    }
}

impl From<MandelbrotError> for ComputeError {
    fn from(err: MandelbrotError) -> Self {
        Self::Mandelbrot(err)
    }
}

impl From<PixelToComplexCoordsError> for ComputeError {
    fn from(err: PixelToComplexCoordsError) -> Self {
        Self::PixelMapping(err)
    }
}

impl From<IterationMatrixError> for ComputeError {
    fn from(err: IterationMatrixError) -> Self {
        Self::IterationMatrix(err)
    }
}

/// Escape-time counts for a `width × height` raster over the given bounds.
///
/// Deterministic and free of side effects; safe to call from several threads.
pub fn compute(
    width: u32,
    height: u32,
    min_real: f64,
    max_real: f64,
    min_imag: f64,
    max_imag: f64,
    max_iterations: u32,
) -> Result<IterationMatrix, ComputeError> {
    let viewport = Viewport::from_bounds(width, height, min_real, max_real, min_imag, max_imag)?;

    compute_viewport(&viewport, max_iterations)
}

pub fn compute_viewport(
    viewport: &Viewport,
    max_iterations: u32,
) -> Result<IterationMatrix, ComputeError> {
    let algorithm = MandelbrotAlgorithm::from_viewport(viewport, max_iterations)?;
    let started = Instant::now();

    let data = generate_fractal_parallel_rayon(algorithm.pixel_rect(), &algorithm)?;

    debug!(
        "computed {}x{} at {} iterations over {} in {:?}",
        viewport.width(),
        viewport.height(),
        max_iterations,
        viewport.region(),
        started.elapsed()
    );

    Ok(IterationMatrix::from_data(
        viewport.pixel_rect(),
        max_iterations,
        data,
    )?)
}

/// Colours an iteration matrix with the logarithmic gradient for `max_iterations`.
#[must_use]
pub fn colorize(matrix: &IterationMatrix, max_iterations: u32) -> PixelBuffer {
    let colour_map = MandelbrotLogGradient::new(max_iterations);

    debug!(
        "colouring {}x{} with {}",
        matrix.width(),
        matrix.height(),
        colour_map.display_name()
    );

    generate_pixel_buffer(matrix.data(), &colour_map, matrix.pixel_rect())
        .expect("iteration matrix length matches its pixel rect")
}
