pub mod controller;
pub mod outcome;

pub use controller::{MIN_SELECTION_PIXELS, ZoomController};
pub use outcome::{ZoomOutcome, ZoomState};
