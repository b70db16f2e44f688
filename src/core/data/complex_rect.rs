use crate::core::data::complex::Complex;
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ComplexRectError {
    InvalidSize { width: f64, height: f64 },
    NonFinite { top_left: Complex, bottom_right: Complex },
}

impl fmt::Display for ComplexRectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize { width, height } => {
                write!(
                    f,
                    "complex rect size must be positive: {}x{}",
                    width, height
                )
            }
            Self::NonFinite {
                top_left,
                bottom_right,
            } => {
                write!(
                    f,
                    "complex rect bounds and size must be finite: ({}, {}) to ({}, {})",
                    top_left.real, top_left.imag, bottom_right.real, bottom_right.imag
                )
            }
        }
    }
}

impl Error for ComplexRectError {}

/// An axis-aligned region of the complex plane.
///
/// `top_left` holds the minimum real and imaginary parts, `bottom_right` the
/// maximum ones, so row 0 of a raster samples `min_imag`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ComplexRect {
    top_left: Complex,
    bottom_right: Complex,
}

impl ComplexRect {
    pub fn new(top_left: Complex, bottom_right: Complex) -> Result<Self, ComplexRectError> {
        let width = bottom_right.real - top_left.real;
        let height = bottom_right.imag - top_left.imag;

        let finite = [top_left.real, top_left.imag, bottom_right.real, bottom_right.imag]
            .iter()
            .chain([width, height].iter())
            .all(|value| value.is_finite());

        if !finite {
            return Err(ComplexRectError::NonFinite {
                top_left,
                bottom_right,
            });
        }

        if !(width > 0.0 && height > 0.0) {
            return Err(ComplexRectError::InvalidSize { width, height });
        }

        Ok(Self {
            top_left,
            bottom_right,
        })
    }

    pub fn from_bounds(
        min_real: f64,
        max_real: f64,
        min_imag: f64,
        max_imag: f64,
    ) -> Result<Self, ComplexRectError> {
        Self::new(
            Complex::new(min_real, min_imag),
            Complex::new(max_real, max_imag),
        )
    }

    #[must_use]
    pub fn top_left(&self) -> Complex {
        self.top_left
    }

    #[must_use]
    pub fn bottom_right(&self) -> Complex {
        self.bottom_right
    }

    #[must_use]
    pub fn min_real(&self) -> f64 {
        self.top_left.real
    }

    #[must_use]
    pub fn max_real(&self) -> f64 {
        self.bottom_right.real
    }

    #[must_use]
    pub fn min_imag(&self) -> f64 {
        self.top_left.imag
    }

    #[must_use]
    pub fn max_imag(&self) -> f64 {
        self.bottom_right.imag
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.bottom_right.real - self.top_left.real
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.bottom_right.imag - self.top_left.imag
    }

    #[must_use]
    pub fn contains_point(&self, point: Complex) -> bool {
        self.top_left.real <= point.real
            && self.top_left.imag <= point.imag
            && self.bottom_right.real >= point.real
            && self.bottom_right.imag >= point.imag
    }

    #[must_use]
    pub fn contains_rect(&self, other: &ComplexRect) -> bool {
        self.contains_point(other.top_left) && self.contains_point(other.bottom_right)
    }
}

impl fmt::Display for ComplexRect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Re [{:.3}, {:.3}]  Im [{:.3}, {:.3}]",
            self.min_real(),
            self.max_real(),
            self.min_imag(),
            self.max_imag()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_bounds_orders_corners() {
        let rect = ComplexRect::from_bounds(-2.5, 1.0, -1.2, 1.2).unwrap();

        assert_eq!(rect.top_left(), Complex::new(-2.5, -1.2));
        assert_eq!(rect.bottom_right(), Complex::new(1.0, 1.2));
        assert_eq!(rect.min_real(), -2.5);
        assert_eq!(rect.max_real(), 1.0);
        assert_eq!(rect.min_imag(), -1.2);
        assert_eq!(rect.max_imag(), 1.2);
    }

    #[test]
    fn test_dimensions() {
        let rect = ComplexRect::from_bounds(-2.5, 1.0, -1.0, 1.0).unwrap();

        assert_eq!(rect.width(), 3.5);
        assert_eq!(rect.height(), 2.0);
    }

    #[test]
    fn test_min_must_be_below_max_on_both_axes() {
        assert_eq!(
            ComplexRect::from_bounds(0.0, 0.0, 0.0, 100.0),
            Err(ComplexRectError::InvalidSize {
                width: 0.0,
                height: 100.0
            })
        );
        assert_eq!(
            ComplexRect::from_bounds(0.0, -100.0, 0.0, 10.0),
            Err(ComplexRectError::InvalidSize {
                width: -100.0,
                height: 10.0
            })
        );
        assert_eq!(
            ComplexRect::from_bounds(0.0, 100.0, 0.0, 0.0),
            Err(ComplexRectError::InvalidSize {
                width: 100.0,
                height: 0.0
            })
        );
        assert_eq!(
            ComplexRect::from_bounds(2.0, -2.0, 2.0, -2.0),
            Err(ComplexRectError::InvalidSize {
                width: -4.0,
                height: -4.0
            })
        );
    }

    #[test]
    fn test_nan_bounds_are_rejected() {
        assert!(ComplexRect::from_bounds(f64::NAN, 1.0, -1.0, 1.0).is_err());
        assert!(ComplexRect::from_bounds(-1.0, 1.0, -1.0, f64::NAN).is_err());
    }

    #[test]
    fn test_infinite_bounds_are_rejected() {
        assert_eq!(
            ComplexRect::from_bounds(f64::NEG_INFINITY, 1.0, -1.0, 1.0),
            Err(ComplexRectError::NonFinite {
                top_left: Complex::new(f64::NEG_INFINITY, -1.0),
                bottom_right: Complex::new(1.0, 1.0),
            })
        );
        assert!(ComplexRect::from_bounds(-1.0, 1.0, -1.0, f64::INFINITY).is_err());
        assert!(ComplexRect::from_bounds(f64::NEG_INFINITY, f64::INFINITY, -1.0, 1.0).is_err());
    }

    #[test]
    fn test_overflowing_span_is_rejected() {
        assert_eq!(
            ComplexRect::from_bounds(-1e308, 1e308, -1.0, 1.0),
            Err(ComplexRectError::NonFinite {
                top_left: Complex::new(-1e308, -1.0),
                bottom_right: Complex::new(1e308, 1.0),
            })
        );
        assert!(ComplexRect::from_bounds(-1.0, 1.0, -f64::MAX, f64::MAX).is_err());
    }

    #[test]
    fn test_contains_point_includes_edges() {
        let rect = ComplexRect::from_bounds(-10.0, 100.0, -5.0, 200.0).unwrap();

        assert!(rect.contains_point(Complex::new(50.0, 50.0)));
        assert!(rect.contains_point(Complex::new(-10.0, -5.0)));
        assert!(rect.contains_point(Complex::new(100.0, 200.0)));
        assert!(!rect.contains_point(Complex::new(101.0, 50.0)));
        assert!(!rect.contains_point(Complex::new(50.0, -6.0)));
    }

    #[test]
    fn test_contains_rect() {
        let outer = ComplexRect::from_bounds(-2.5, 1.0, -1.2, 1.2).unwrap();
        let inner = ComplexRect::from_bounds(-1.0, 0.0, -0.5, 0.5).unwrap();
        let overlapping = ComplexRect::from_bounds(0.5, 1.5, -0.5, 0.5).unwrap();

        assert!(outer.contains_rect(&inner));
        assert!(outer.contains_rect(&outer));
        assert!(!outer.contains_rect(&overlapping));
        assert!(!inner.contains_rect(&outer));
    }

    #[test]
    fn test_display_matches_status_line_format() {
        let rect = ComplexRect::from_bounds(-2.5, 1.0, -1.2, 1.2).unwrap();

        assert_eq!(
            rect.to_string(),
            "Re [-2.500, 1.000]  Im [-1.200, 1.200]"
        );
    }
}
