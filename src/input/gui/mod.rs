//! Windowed viewer: winit for the window and input, pixels for the
//! framebuffer and egui for the controls.

pub mod app;
pub mod commands;
