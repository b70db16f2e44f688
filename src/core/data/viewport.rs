use crate::core::data::complex::Complex;
use crate::core::data::complex_rect::{ComplexRect, ComplexRectError};
use crate::core::data::pixel_rect::{PixelRect, PixelRectError};
use crate::core::data::point::Point;
use crate::core::util::pixel_to_complex_coords::{
    PixelToComplexCoordsError, complex_to_pixel_coords, pixel_offset_to_complex,
    pixel_to_complex_coords,
};
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ViewportError {
    Region(ComplexRectError),
    Raster(PixelRectError),
}

impl fmt::Display for ViewportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Region(err) => write!(f, "invalid viewport region: {}", err),
            Self::Raster(err) => write!(f, "invalid viewport raster: {}", err),
        }
    }
}

impl Error for ViewportError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Region(err) => Some(err),
            Self::Raster(err) => Some(err),
        }
    }
}

impl From<ComplexRectError> for ViewportError {
    fn from(err: ComplexRectError) -> Self {
        Self::Region(err)
    }
}

impl From<PixelRectError> for ViewportError {
    fn from(err: PixelRectError) -> Self {
        Self::Raster(err)
    }
}

/// The region of the plane currently mapped onto a raster.
///
/// A value type: zooming or resetting builds a new `Viewport` and swaps it in
/// whole, so nobody ever observes a half-updated rectangle.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Viewport {
    region: ComplexRect,
    pixel_rect: PixelRect,
}

impl Viewport {
    #[must_use]
    pub fn new(region: ComplexRect, pixel_rect: PixelRect) -> Self {
        Self { region, pixel_rect }
    }

    pub fn from_bounds(
        width: u32,
        height: u32,
        min_real: f64,
        max_real: f64,
        min_imag: f64,
        max_imag: f64,
    ) -> Result<Self, ViewportError> {
        let pixel_rect = PixelRect::from_size(width, height)?;
        let region = ComplexRect::from_bounds(min_real, max_real, min_imag, max_imag)?;

        Ok(Self::new(region, pixel_rect))
    }

    #[must_use]
    pub fn region(&self) -> ComplexRect {
        self.region
    }

    #[must_use]
    pub fn pixel_rect(&self) -> PixelRect {
        self.pixel_rect
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.pixel_rect.width()
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.pixel_rect.height()
    }

    /// Same raster, different region.
    #[must_use]
    pub fn with_region(&self, region: ComplexRect) -> Self {
        Self::new(region, self.pixel_rect)
    }

    pub fn pixel_to_complex(&self, pixel: Point) -> Result<Complex, PixelToComplexCoordsError> {
        pixel_to_complex_coords(pixel, self.pixel_rect, self.region)
    }

    /// Maps a selection corner, which may sit on the raster's far edge.
    #[must_use]
    pub fn corner_to_complex(&self, corner: Point) -> Complex {
        pixel_offset_to_complex(
            f64::from(corner.x - self.pixel_rect.top_left().x),
            f64::from(corner.y - self.pixel_rect.top_left().y),
            self.pixel_rect,
            self.region,
        )
    }

    #[must_use]
    pub fn complex_to_pixel(&self, point: Complex) -> (f64, f64) {
        complex_to_pixel_coords(point, self.pixel_rect, self.region)
    }
}
