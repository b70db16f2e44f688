use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;
use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IterationMatrixError {
    BoundsMismatch {
        pixel_rect_size: usize,
        data_size: usize,
    },
}

impl fmt::Display for IterationMatrixError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BoundsMismatch {
                pixel_rect_size,
                data_size,
            } => {
                write!(
                    f,
                    "pixel rect size {} does not match iteration count {}",
                    pixel_rect_size, data_size
                )
            }
        }
    }
}

impl Error for IterationMatrixError {}

/// Escape-time counts for one render, one entry per pixel in row-major order.
///
/// Every entry lies in `[0, max_iterations]`; a value equal to
/// `max_iterations` marks a point presumed inside the set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IterationMatrix {
    pixel_rect: PixelRect,
    max_iterations: u32,
    data: Vec<u32>,
}

impl IterationMatrix {
    pub fn from_data(
        pixel_rect: PixelRect,
        max_iterations: u32,
        data: Vec<u32>,
    ) -> Result<Self, IterationMatrixError> {
        let expected_size = pixel_rect.size() as usize;

        if expected_size != data.len() {
            return Err(IterationMatrixError::BoundsMismatch {
                pixel_rect_size: expected_size,
                data_size: data.len(),
            });
        }

        Ok(Self {
            pixel_rect,
            max_iterations,
            data,
        })
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

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    #[must_use]
    pub fn data(&self) -> &[u32] {
        &self.data
    }

    #[must_use]
    pub fn rows(&self) -> std::slice::ChunksExact<'_, u32> {
        self.data.chunks_exact(self.width() as usize)
    }

    #[must_use]
    pub fn get(&self, pixel: Point) -> Option<u32> {
        if !self.pixel_rect.contains_point(pixel) {
            return None;
        }

        let relative_x = (pixel.x - self.pixel_rect.top_left().x) as usize;
        let relative_y = (pixel.y - self.pixel_rect.top_left().y) as usize;

        Some(self.data[relative_y * self.width() as usize + relative_x])
    }
}
