use log::{debug, warn};

use crate::core::data::complex_rect::ComplexRect;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;
use crate::core::data::viewport::Viewport;
use crate::core::zoom::outcome::{ZoomOutcome, ZoomState};

/// Selections narrower or shorter than this are treated as clicks.
pub const MIN_SELECTION_PIXELS: i32 = 5;

/// Rubber-band zoom: press to anchor, drag to preview, release to zoom.
///
/// The controller never mutates a viewport; a successful release hands back a
/// new one for the owner to swap in.
#[derive(Debug, Default)]
pub struct ZoomController {
    state: ZoomState,
}

impl ZoomController {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn state(&self) -> ZoomState {
        self.state
    }

    #[must_use]
    pub fn is_selecting(&self) -> bool {
        matches!(self.state, ZoomState::Selecting { .. })
    }

    /// Current overlay rectangle, normalized, if a selection is in progress.
    #[must_use]
    pub fn selection(&self) -> Option<PixelRect> {
        match self.state {
            ZoomState::Idle => None,
            ZoomState::Selecting { anchor, current } => {
                Some(PixelRect::from_corners(anchor, current))
            }
        }
    }

    pub fn press(&mut self, point: Point) {
        self.state = ZoomState::Selecting {
            anchor: point,
            current: point,
        };
    }

    pub fn drag(&mut self, point: Point) -> Option<PixelRect> {
        if let ZoomState::Selecting { current, .. } = &mut self.state {
            *current = point;
        }

        self.selection()
    }

    pub fn cancel(&mut self) {
        if self.is_selecting() {
            debug!("zoom selection cancelled");
        }

        self.state = ZoomState::Idle;
    }

    pub fn release(&mut self, point: Point, viewport: &Viewport) -> ZoomOutcome {
        let ZoomState::Selecting { anchor, .. } = std::mem::take(&mut self.state) else {
            return ZoomOutcome::Ignored;
        };

        let origin = viewport.pixel_rect().top_left();
        let far_edge = Point {
            x: origin.x + viewport.width() as i32,
            y: origin.y + viewport.height() as i32,
        };
        let start = anchor.clamp_to(origin, far_edge);
        let end = point.clamp_to(origin, far_edge);

        if (end.x - start.x).abs() < MIN_SELECTION_PIXELS
            || (end.y - start.y).abs() < MIN_SELECTION_PIXELS
        {
            debug!(
                "discarding zoom selection ({}, {}) -> ({}, {}): under {} pixels",
                start.x, start.y, end.x, end.y, MIN_SELECTION_PIXELS
            );
            return ZoomOutcome::Discarded;
        }

        let corners = PixelRect::from_corners(start, end);
        if corners.top_left() == origin && corners.bottom_right() == far_edge {
            debug!("discarding zoom selection: covers the whole view");
            return ZoomOutcome::Discarded;
        }

        let top_left = viewport.corner_to_complex(corners.top_left());
        let bottom_right = viewport.corner_to_complex(corners.bottom_right());

        match ComplexRect::new(top_left, bottom_right) {
            Ok(region) if region == viewport.region() => {
                debug!("discarding zoom selection: region unchanged at this precision");
                ZoomOutcome::Discarded
            }
            Ok(region) => {
                debug!("zooming to {}", region);
                ZoomOutcome::Zoomed(viewport.with_region(region))
            }
            Err(err) => {
                warn!("discarding zoom selection: {}", err);
                ZoomOutcome::Discarded
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::complex::Complex;

    fn default_viewport() -> Viewport {
        Viewport::from_bounds(700, 500, -2.5, 1.0, -1.2, 1.2).unwrap()
    }

    fn zoom(from: Point, to: Point, viewport: &Viewport) -> ZoomOutcome {
        let mut controller = ZoomController::new();
        controller.press(from);
        controller.drag(to);
        controller.release(to, viewport)
    }

    #[test]
    fn test_press_starts_selection() {
        let mut controller = ZoomController::new();

        controller.press(Point { x: 10, y: 20 });

        assert_eq!(
            controller.state(),
            ZoomState::Selecting {
                anchor: Point { x: 10, y: 20 },
                current: Point { x: 10, y: 20 }
            }
        );
    }

    #[test]
    fn test_drag_while_idle_is_ignored() {
        let mut controller = ZoomController::new();

        assert_eq!(controller.drag(Point { x: 10, y: 20 }), None);
        assert_eq!(controller.state(), ZoomState::Idle);
    }

    #[test]
    fn test_drag_returns_normalized_overlay() {
        let mut controller = ZoomController::new();
        controller.press(Point { x: 100, y: 80 });

        let overlay = controller.drag(Point { x: 40, y: 120 }).unwrap();

        assert_eq!(overlay.top_left(), Point { x: 40, y: 80 });
        assert_eq!(overlay.bottom_right(), Point { x: 100, y: 120 });
    }

    #[test]
    fn test_press_while_selecting_restarts() {
        let mut controller = ZoomController::new();
        controller.press(Point { x: 10, y: 10 });
        controller.drag(Point { x: 50, y: 50 });

        controller.press(Point { x: 200, y: 200 });

        assert_eq!(
            controller.selection().map(|rect| rect.top_left()),
            Some(Point { x: 200, y: 200 })
        );
        assert_eq!(controller.selection().map(|rect| rect.size()), Some(1));
    }

    #[test]
    fn test_release_while_idle_is_ignored() {
        let mut controller = ZoomController::new();

        assert_eq!(
            controller.release(Point { x: 10, y: 10 }, &default_viewport()),
            ZoomOutcome::Ignored
        );
    }

    #[test]
    fn test_small_selection_is_discarded() {
        let viewport = default_viewport();
        let cases = [
            (Point { x: 10, y: 10 }, Point { x: 14, y: 100 }),
            (Point { x: 10, y: 10 }, Point { x: 100, y: 14 }),
            (Point { x: 10, y: 10 }, Point { x: 10, y: 10 }),
            (Point { x: 100, y: 100 }, Point { x: 96, y: 0 }),
        ];

        for (from, to) in cases {
            assert_eq!(zoom(from, to, &viewport), ZoomOutcome::Discarded);
        }
    }

    #[test]
    fn test_release_returns_to_idle() {
        let mut controller = ZoomController::new();
        controller.press(Point { x: 10, y: 10 });

        controller.release(Point { x: 12, y: 12 }, &default_viewport());

        assert_eq!(controller.state(), ZoomState::Idle);
        assert_eq!(controller.selection(), None);
    }

    #[test]
    fn test_five_pixel_selection_zooms() {
        assert!(matches!(
            zoom(Point { x: 10, y: 10 }, Point { x: 15, y: 15 }, &default_viewport()),
            ZoomOutcome::Zoomed(_)
        ));
    }

    #[test]
    fn test_zoom_to_top_left_quadrant() {
        let viewport = default_viewport();

        let ZoomOutcome::Zoomed(zoomed) = zoom(Point { x: 0, y: 0 }, Point { x: 350, y: 250 }, &viewport)
        else {
            panic!("expected zoom");
        };

        assert_eq!(zoomed.region().top_left(), Complex::new(-2.5, -1.2));
        assert_eq!(zoomed.region().bottom_right(), Complex::new(-0.75, 0.0));
        assert_eq!(zoomed.pixel_rect(), viewport.pixel_rect());
    }

    #[test]
    fn test_zoom_is_orientation_independent() {
        let viewport = default_viewport();
        let forward = zoom(Point { x: 100, y: 100 }, Point { x: 300, y: 250 }, &viewport);

        let reversed = zoom(Point { x: 300, y: 250 }, Point { x: 100, y: 100 }, &viewport);
        let crossed = zoom(Point { x: 300, y: 100 }, Point { x: 100, y: 250 }, &viewport);

        assert!(matches!(forward, ZoomOutcome::Zoomed(_)));
        assert_eq!(forward, reversed);
        assert_eq!(forward, crossed);
    }

    #[test]
    fn test_zoomed_region_is_contained_in_previous() {
        let mut viewport = default_viewport();
        let selections = [
            (Point { x: 120, y: 40 }, Point { x: 610, y: 470 }),
            (Point { x: 5, y: 5 }, Point { x: 695, y: 495 }),
            (Point { x: 333, y: 222 }, Point { x: 345, y: 230 }),
        ];

        for (from, to) in selections {
            let ZoomOutcome::Zoomed(zoomed) = zoom(from, to, &viewport) else {
                panic!("expected zoom");
            };

            assert!(viewport.region().contains_rect(&zoomed.region()));
            assert_ne!(viewport.region(), zoomed.region());
            viewport = zoomed;
        }
    }

    #[test]
    fn test_release_outside_raster_zooms_to_edge() {
        let viewport = default_viewport();

        let ZoomOutcome::Zoomed(zoomed) =
            zoom(Point { x: 350, y: 250 }, Point { x: 900, y: 800 }, &viewport)
        else {
            panic!("expected zoom");
        };

        assert_eq!(zoomed.region().top_left(), Complex::new(-0.75, 0.0));
        assert_eq!(zoomed.region().bottom_right(), Complex::new(1.0, 1.2));
    }

    #[test]
    fn test_selection_covering_whole_view_is_discarded() {
        let viewport = default_viewport();
        let cases = [
            (Point { x: -20, y: -20 }, Point { x: 900, y: 800 }),
            (Point { x: 0, y: 0 }, Point { x: 700, y: 500 }),
            (Point { x: 750, y: -5 }, Point { x: -1, y: 520 }),
        ];

        for (from, to) in cases {
            assert_eq!(zoom(from, to, &viewport), ZoomOutcome::Discarded);
        }
    }

    #[test]
    fn test_selection_collapsed_by_clamping_is_discarded() {
        assert_eq!(
            zoom(Point { x: 698, y: 10 }, Point { x: 900, y: 200 }, &default_viewport()),
            ZoomOutcome::Discarded
        );
    }

    #[test]
    fn test_cancel_drops_selection() {
        let mut controller = ZoomController::new();
        controller.press(Point { x: 10, y: 10 });
        controller.drag(Point { x: 100, y: 100 });

        controller.cancel();

        assert_eq!(controller.state(), ZoomState::Idle);
        assert_eq!(
            controller.release(Point { x: 100, y: 100 }, &default_viewport()),
            ZoomOutcome::Ignored
        );
    }
}
