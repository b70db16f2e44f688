use image::{ImageBuffer, Rgb};
use std::io;
use std::path::Path;

use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::data::pixel_buffer::PixelBuffer;

#[derive(Debug, Default)]
pub struct PngFilePresenter {}

impl FilePresenterPort for PngFilePresenter {
    fn present(&self, buffer: &PixelBuffer, filepath: &Path) -> io::Result<()> {
        let width = buffer.pixel_rect().width();
        let height = buffer.pixel_rect().height();

        let image = ImageBuffer::<Rgb<u8>, &[u8]>::from_raw(width, height, buffer.buffer().as_slice())
            .ok_or_else(|| {
                io::Error::new(
                    io::ErrorKind::InvalidInput,
                    format!("buffer does not hold a {}x{} RGB image", width, height),
                )
            })?;

        image
            .save_with_format(filepath, image::ImageFormat::Png)
            .map_err(io::Error::other)
    }
}

impl PngFilePresenter {
    #[must_use]
    pub fn new() -> Self {
        Self {}
    }
}
