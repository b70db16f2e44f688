//! Interactive controller for the zoomable viewer.
//!
//! Owns the current viewport, the iteration budget and the zoom gesture state.
//! Renders run synchronously on the caller's thread and their results are
//! handed to an [`InteractiveControllerPresenterPort`].

mod controller;
pub mod data;
pub mod errors;
pub mod events;
pub mod ports;

pub use controller::InteractiveController;
pub use data::frame_data::FrameData;
pub use errors::render_error::RenderError;
pub use events::render_event::RenderEvent;
pub use ports::presenter_port::InteractiveControllerPresenterPort;
