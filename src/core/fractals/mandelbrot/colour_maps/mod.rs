pub mod log_gradient;
