use crate::core::data::complex::Complex;
use crate::core::data::complex_rect::ComplexRect;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum PixelToComplexCoordsError {
    PointOutsideRect { point: Point, pixel_rect: PixelRect },
}

impl fmt::Display for PixelToComplexCoordsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PointOutsideRect { point, pixel_rect } => {
                write!(
                    f,
                    "point (x: {}, y: {}) is outside the rectangle with coords top-left: (x: {}, y: {}) bottom-right: (x: {}, y: {})",
                    point.x,
                    point.y,
                    pixel_rect.top_left().x,
                    pixel_rect.top_left().y,
                    pixel_rect.bottom_right().x,
                    pixel_rect.bottom_right().y
                )
            }
        }
    }
}

impl Error for PixelToComplexCoordsError {}

/// Maps a pixel to its sample in the plane: `min + offset / size * span` per axis.
///
/// The sample sits on the pixel's top-left corner, so the last column maps to
/// `max_real - step` rather than `max_real`.
pub fn pixel_to_complex_coords(
    pixel_position: Point,
    pixel_rect: PixelRect,
    complex_rect: ComplexRect,
) -> Result<Complex, PixelToComplexCoordsError> {
    if !pixel_rect.contains_point(pixel_position) {
        return Err(PixelToComplexCoordsError::PointOutsideRect {
            point: pixel_position,
            pixel_rect,
        });
    }

    let relative_x = f64::from(pixel_position.x - pixel_rect.top_left().x);
    let relative_y = f64::from(pixel_position.y - pixel_rect.top_left().y);

    Ok(pixel_offset_to_complex(
        relative_x,
        relative_y,
        pixel_rect,
        complex_rect,
    ))
}

/// Same linear mapping for a fractional offset from the raster's top-left.
///
/// Offsets in `[0, width] × [0, height]` land inside `complex_rect`; the far
/// edge maps exactly onto `max_real` / `max_imag`.
#[must_use]
pub fn pixel_offset_to_complex(
    relative_x: f64,
    relative_y: f64,
    pixel_rect: PixelRect,
    complex_rect: ComplexRect,
) -> Complex {
    let real = complex_rect.min_real()
        + relative_x / f64::from(pixel_rect.width()) * complex_rect.width();
    let imag = complex_rect.min_imag()
        + relative_y / f64::from(pixel_rect.height()) * complex_rect.height();

    Complex { real, imag }
}

/// Inverse mapping, unrounded: `(re - min_real) / width_span * width_px`.
///
/// Defined for any plane point; points outside `complex_rect` give offsets
/// outside the raster.
#[must_use]
pub fn complex_to_pixel_coords(
    point: Complex,
    pixel_rect: PixelRect,
    complex_rect: ComplexRect,
) -> (f64, f64) {
    let x = (point.real - complex_rect.min_real()) / complex_rect.width()
        * f64::from(pixel_rect.width());
    let y = (point.imag - complex_rect.min_imag()) / complex_rect.height()
        * f64::from(pixel_rect.height());

    (
        x + f64::from(pixel_rect.top_left().x),
        y + f64::from(pixel_rect.top_left().y),
    )
}
