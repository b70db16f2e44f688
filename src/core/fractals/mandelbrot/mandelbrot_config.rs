use crate::core::data::complex_rect::ComplexRect;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::viewport::Viewport;

pub const DEFAULT_MAX_ITERATIONS: u32 = 256;
pub const MIN_INTERACTIVE_ITERATIONS: u32 = 64;
pub const MAX_INTERACTIVE_ITERATIONS: u32 = 2048;
pub const INTERACTIVE_ITERATIONS_STEP: u32 = 64;

pub const DEFAULT_MIN_REAL: f64 = -2.5;
pub const DEFAULT_MAX_REAL: f64 = 1.0;
pub const DEFAULT_MIN_IMAG: f64 = -1.2;
pub const DEFAULT_MAX_IMAG: f64 = 1.2;

#[must_use]
pub fn default_region() -> ComplexRect {
    ComplexRect::from_bounds(
        DEFAULT_MIN_REAL,
        DEFAULT_MAX_REAL,
        DEFAULT_MIN_IMAG,
        DEFAULT_MAX_IMAG,
    )
    .expect("default fractal region is valid")
}

/// Snaps a requested budget onto the interactive slider's grid.
#[must_use]
pub fn clamp_interactive_iterations(max_iterations: u32) -> u32 {
    let clamped = max_iterations.clamp(MIN_INTERACTIVE_ITERATIONS, MAX_INTERACTIVE_ITERATIONS);
    let steps = (clamped + INTERACTIVE_ITERATIONS_STEP / 2) / INTERACTIVE_ITERATIONS_STEP;

    (steps * INTERACTIVE_ITERATIONS_STEP).clamp(MIN_INTERACTIVE_ITERATIONS, MAX_INTERACTIVE_ITERATIONS)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MandelbrotConfig {
    pub region: ComplexRect,
    pub max_iterations: u32,
}

impl Default for MandelbrotConfig {
    fn default() -> Self {
        Self {
            region: default_region(),
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

impl MandelbrotConfig {
    #[must_use]
    pub fn viewport(&self, pixel_rect: PixelRect) -> Viewport {
        Viewport::new(self.region, pixel_rect)
    }
}
