use std::error::Error;
use std::fmt;

use crate::core::actions::render_mandelbrot::ComputeError;

#[derive(Debug, Clone, PartialEq)]
pub struct RenderError {
    pub generation: u64,
    pub error: ComputeError,
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "render {} failed: {}", self.generation, self.error)
    }
}

impl Error for RenderError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.error)
    }
}
