use rayon::prelude::*;

use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;

/// Generates fractal data in parallel using rayon's work-stealing scheduler.
///
/// The output is preallocated and split into one slice per row; each rayon
/// task fills its own row, so no two tasks ever touch the same memory and no
/// locking is involved. Results are row-major and identical to
/// [`generate_fractal_serial`](super::generate_fractal_serial::generate_fractal_serial).
///
/// The first algorithm failure aborts the remaining rows and is returned.
pub fn generate_fractal_parallel_rayon<Alg>(
    pixel_rect: PixelRect,
    algorithm: &Alg,
) -> Result<Vec<Alg::Success>, Alg::Failure>
where
    Alg: FractalAlgorithm + Sync,
    Alg::Success: Send + Default + Clone,
    Alg::Failure: Send,
{
    let row_width = pixel_rect.width() as usize;
    let x_start = pixel_rect.top_left().x;
    let y_start = pixel_rect.top_left().y;
    let mut results = vec![Alg::Success::default(); pixel_rect.size() as usize];

    results
        .par_chunks_mut(row_width)
        .enumerate()
        .try_for_each(|(row_index, row)| {
            let y = y_start + row_index as i32;

            for (column, slot) in row.iter_mut().enumerate() {
                *slot = algorithm.compute(Point {
                    x: x_start + column as i32,
                    y,
                })?;
            }

            Ok(())
        })?;

    Ok(results)
}
