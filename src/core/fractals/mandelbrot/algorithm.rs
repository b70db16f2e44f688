use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::complex::Complex;
use crate::core::data::complex_rect::ComplexRect;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;
use crate::core::data::viewport::Viewport;
use crate::core::fractals::mandelbrot::errors::MandelbrotError;
use crate::core::util::pixel_to_complex_coords::{
    PixelToComplexCoordsError, pixel_to_complex_coords,
};

/// Escape-time evaluation of `z ← z² + c` starting from `z = 0`.
///
/// A pixel's count is the first `n` at which `|z|² > 4`, or `max_iterations`
/// if the orbit stays bounded for the whole budget.
#[derive(Debug, Clone, Copy)]
pub struct MandelbrotAlgorithm {
    pixel_rect: PixelRect,
    complex_rect: ComplexRect,
    max_iterations: u32,
}

impl MandelbrotAlgorithm {
    pub fn new(
        pixel_rect: PixelRect,
        complex_rect: ComplexRect,
        max_iterations: u32,
    ) -> Result<Self, MandelbrotError> {
        if max_iterations == 0 {
            return Err(MandelbrotError::ZeroMaxIterations);
        }

        Ok(Self {
            pixel_rect,
            complex_rect,
            max_iterations,
        })
    }

    pub fn from_viewport(viewport: &Viewport, max_iterations: u32) -> Result<Self, MandelbrotError> {
        Self::new(viewport.pixel_rect(), viewport.region(), max_iterations)
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    #[must_use]
    pub fn escape_time(&self, c: Complex) -> u32 {
        let mut z = Complex::ZERO;

        for iteration in 0..self.max_iterations {
            if z.magnitude_squared() > 4.0 {
                return iteration;
            }
            z = z.square() + c;
        }

        self.max_iterations
    }
}

impl FractalAlgorithm for MandelbrotAlgorithm {
    type Success = u32;
    type Failure = PixelToComplexCoordsError;

    fn compute(&self, pixel: Point) -> Result<Self::Success, Self::Failure> {
        let c = pixel_to_complex_coords(pixel, self.pixel_rect, self.complex_rect)?;

        Ok(self.escape_time(c))
    }

    fn pixel_rect(&self) -> PixelRect {
        self.pixel_rect
    }
}
