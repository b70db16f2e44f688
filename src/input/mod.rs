//! Input adapters for the Mandelbrot viewer.

#[cfg(feature = "gui")]
pub mod gui;
