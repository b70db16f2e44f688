//! Pixel format helpers for the framebuffer presenter.

use crate::core::data::pixel_rect::PixelRect;

pub const RGBA_BYTES_PER_PIXEL: usize = 4;

/// Expands a rendered RGB image into an opaque RGBA framebuffer.
///
/// # Panics
/// Panics if `src` is not a whole number of RGB pixels or `dst` does not hold
/// exactly as many RGBA pixels.
pub fn copy_rgb_to_rgba(src: &[u8], dst: &mut [u8]) {
    assert!(
        src.len() % 3 == 0,
        "src length {} is not a multiple of 3",
        src.len()
    );
    let expected_dst_len = (src.len() / 3) * RGBA_BYTES_PER_PIXEL;
    assert_eq!(
        dst.len(),
        expected_dst_len,
        "dst length {} does not match expected {}",
        dst.len(),
        expected_dst_len
    );

    for (src_pixel, dst_pixel) in src.chunks_exact(3).zip(dst.chunks_exact_mut(RGBA_BYTES_PER_PIXEL)) {
        dst_pixel[0] = src_pixel[0];
        dst_pixel[1] = src_pixel[1];
        dst_pixel[2] = src_pixel[2];
        dst_pixel[3] = 255;
    }
}

/// Draws a one pixel rectangle outline into an RGBA frame of `width × height`.
///
/// Parts of `rect` outside the frame are clipped.
pub fn draw_rect_outline(frame: &mut [u8], width: u32, height: u32, rect: PixelRect, colour: [u8; 4]) {
    if width == 0 || height == 0 {
        return;
    }

    let max_x = width as i64 - 1;
    let max_y = height as i64 - 1;
    let left = i64::from(rect.top_left().x);
    let top = i64::from(rect.top_left().y);
    let right = i64::from(rect.bottom_right().x);
    let bottom = i64::from(rect.bottom_right().y);

    if right < 0 || bottom < 0 || left > max_x || top > max_y {
        return;
    }

    let mut put = |x: i64, y: i64| {
        if (0..=max_x).contains(&x) && (0..=max_y).contains(&y) {
            let offset = (y as usize * width as usize + x as usize) * RGBA_BYTES_PER_PIXEL;
            if let Some(pixel) = frame.get_mut(offset..offset + RGBA_BYTES_PER_PIXEL) {
                pixel.copy_from_slice(&colour);
            }
        }
    };

    for x in left.max(0)..=right.min(max_x) {
        put(x, top);
        put(x, bottom);
    }

    for y in top.max(0)..=bottom.min(max_y) {
        put(left, y);
        put(right, y);
    }
}
