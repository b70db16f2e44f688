use std::error::Error;
use std::fmt;
use std::io;
use std::path::PathBuf;

use crate::core::actions::render_mandelbrot::ComputeError;

#[derive(Debug)]
pub enum BatchError {
    Compute {
        case: &'static str,
        source: ComputeError,
    },
    Write {
        path: PathBuf,
        source: io::Error,
    },
}

impl fmt::Display for BatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Compute { case, source } => write!(f, "case {} failed: {}", case, source),
            Self::Write { path, source } => {
                write!(f, "could not write {}: {}", path.display(), source)
            }
        }
    }
}

impl Error for BatchError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Compute { source, .. } => Some(source),
            Self::Write { source, .. } => Some(source),
        }
    }
}
