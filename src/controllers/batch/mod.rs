pub mod cases;
pub mod controller;
pub mod errors;

pub use cases::{BATCH_CASES, BatchCase, find_case};
pub use controller::BatchController;
pub use errors::BatchError;
