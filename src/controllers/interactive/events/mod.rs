pub mod render_event;
