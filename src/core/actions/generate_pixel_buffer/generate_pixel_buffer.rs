use rayon::prelude::*;

use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::data::pixel_buffer::{BYTES_PER_PIXEL, PixelBuffer, PixelBufferError};
use crate::core::data::pixel_rect::PixelRect;
use std::error::Error;
use std::fmt;

#[derive(Debug, PartialEq)]
pub enum GeneratePixelBufferError {
    InputSizeMismatch {
        pixel_rect_size: usize,
        input_size: usize,
    },
    PixelBuffer(PixelBufferError),
}

impl fmt::Display for GeneratePixelBufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InputSizeMismatch {
                pixel_rect_size,
                input_size,
            } => write!(
                f,
                "pixel rect size {} does not match input size {}",
                pixel_rect_size, input_size
            ),
            Self::PixelBuffer(err) => write!(f, "pixel buffer error: {}", err),
        }
    }
}

impl Error for GeneratePixelBufferError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InputSizeMismatch { .. } => None,
            Self::PixelBuffer(err) => Some(err),
        }
    }
}

impl From<PixelBufferError> for GeneratePixelBufferError {
    fn from(err: PixelBufferError) -> Self {
        Self::PixelBuffer(err)
    }
}

/// Generates an RGB pixel buffer by mapping row-major input values to colours.
///
/// Rows are coloured in parallel, each writing only its own slice of the
/// output.
pub fn generate_pixel_buffer<T, CMap>(
    input: &[T],
    mapper: &CMap,
    pixel_rect: PixelRect,
) -> Result<PixelBuffer, GeneratePixelBufferError>
where
    T: Copy + Sync,
    CMap: ColourMap<T> + Sync,
{
    let pixel_rect_size = pixel_rect.size() as usize;

    if input.len() != pixel_rect_size {
        return Err(GeneratePixelBufferError::InputSizeMismatch {
            pixel_rect_size,
            input_size: input.len(),
        });
    }

    let row_width = pixel_rect.width() as usize;
    let mut buffer = vec![0u8; pixel_rect_size * BYTES_PER_PIXEL];

    buffer
        .par_chunks_mut(row_width * BYTES_PER_PIXEL)
        .zip(input.par_chunks(row_width))
        .for_each(|(dst_row, src_row)| {
            for (dst_pixel, &value) in dst_row.chunks_exact_mut(BYTES_PER_PIXEL).zip(src_row) {
                let Colour { r, g, b } = mapper.map(value);

                dst_pixel[0] = r;
                dst_pixel[1] = g;
                dst_pixel[2] = b;
            }
        });

    Ok(PixelBuffer::from_data(pixel_rect, buffer)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct StubGreyColourMap {}

    impl ColourMap<u8> for StubGreyColourMap {
        fn map(&self, value: u8) -> Colour {
            Colour {
                r: value,
                g: value,
                b: value,
            }
        }

        fn display_name(&self) -> &str {
            "Stub grey"
        }
    }

    #[test]
    fn test_generates_pixel_buffer_correctly() {
        let input: Vec<u8> = vec![1, 2, 3, 4, 5, 6];
        let pixel_rect = PixelRect::from_size(3, 2).unwrap();

        let results = generate_pixel_buffer(&input, &StubGreyColourMap {}, pixel_rect).unwrap();

        assert_eq!(
            results.buffer(),
            &vec![1, 1, 1, 2, 2, 2, 3, 3, 3, 4, 4, 4, 5, 5, 5, 6, 6, 6]
        );
        assert_eq!(results.pixel_rect(), pixel_rect);
    }

    #[test]
    fn test_large_buffer_keeps_row_order() {
        let pixel_rect = PixelRect::from_size(64, 48).unwrap();
        let input: Vec<u8> = (0..pixel_rect.size()).map(|i| (i % 251) as u8).collect();

        let results = generate_pixel_buffer(&input, &StubGreyColourMap {}, pixel_rect).unwrap();

        for (i, pixel) in results.buffer().chunks_exact(3).enumerate() {
            assert_eq!(pixel, &[input[i]; 3]);
        }
    }

    #[test]
    fn test_input_size_mismatch_returns_err() {
        let input: Vec<u8> = vec![1, 2, 3, 4, 5, 6];
        let pixel_rect = PixelRect::from_size(2, 2).unwrap();

        let results = generate_pixel_buffer(&input, &StubGreyColourMap {}, pixel_rect);

        assert_eq!(
            results,
            Err(GeneratePixelBufferError::InputSizeMismatch {
                pixel_rect_size: 4,
                input_size: 6
            })
        );
    }

    #[test]
    fn test_error_display() {
        let err = GeneratePixelBufferError::InputSizeMismatch {
            pixel_rect_size: 4,
            input_size: 6,
        };

        assert_eq!(
            err.to_string(),
            "pixel rect size 4 does not match input size 6"
        );
    }
}
