use crate::core::data::point::Point;
use crate::core::data::viewport::Viewport;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ZoomState {
    #[default]
    Idle,
    Selecting {
        anchor: Point,
        current: Point,
    },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ZoomOutcome {
    /// The selection became the new viewport; the raster is unchanged.
    Zoomed(Viewport),
    /// Too small on at least one axis, or below floating point resolution.
    Discarded,
    /// Release without a preceding press.
    Ignored,
}
