use log::info;
use std::path::{Path, PathBuf};
use std::time::Instant;

use crate::controllers::batch::cases::{BATCH_HEIGHT, BATCH_WIDTH, BatchCase};
use crate::controllers::batch::errors::BatchError;
use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::actions::render_mandelbrot::{colorize, compute};

/// Renders a fixed list of regions to image files, one after another.
pub struct BatchController<P: FilePresenterPort> {
    presenter: P,
    width: u32,
    height: u32,
    max_iterations_override: Option<u32>,
}

impl<P: FilePresenterPort> BatchController<P> {
    pub fn new(presenter: P) -> Self {
        Self {
            presenter,
            width: BATCH_WIDTH,
            height: BATCH_HEIGHT,
            max_iterations_override: None,
        }
    }

    #[must_use]
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Uses `max_iterations` for every case instead of the case's own budget.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: Option<u32>) -> Self {
        self.max_iterations_override = max_iterations;
        self
    }

    pub fn render_case(&self, case: &BatchCase, output_dir: &Path) -> Result<PathBuf, BatchError> {
        let max_iterations = self.max_iterations_override.unwrap_or(case.max_iterations);
        let filepath = output_dir.join(case.file_name());

        info!("[{}]", case.description);

        let start = Instant::now();
        let matrix = compute(
            self.width,
            self.height,
            case.min_real,
            case.max_real,
            case.min_imag,
            case.max_imag,
            max_iterations,
        )
        .map_err(|source| BatchError::Compute {
            case: case.name,
            source,
        })?;
        let pixel_buffer = colorize(&matrix, max_iterations);
        let duration = start.elapsed();

        self.presenter
            .present(&pixel_buffer, &filepath)
            .map_err(|source| BatchError::Write {
                path: filepath.clone(),
                source,
            })?;

        info!(
            "  -> {}  ({}x{}, max_iter={}, {:?})",
            filepath.display(),
            self.width,
            self.height,
            max_iterations,
            duration
        );

        Ok(filepath)
    }

    pub fn run<'a>(
        &self,
        cases: impl IntoIterator<Item = &'a BatchCase>,
        output_dir: &Path,
    ) -> Result<Vec<PathBuf>, BatchError> {
        cases
            .into_iter()
            .map(|case| self.render_case(case, output_dir))
            .collect()
    }
}
