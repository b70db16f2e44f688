use crate::core::fractals::mandelbrot::mandelbrot_config::DEFAULT_MAX_ITERATIONS;

pub const COMPUTING_STATUS: &str = "Computing…";

/// Renders are deferred by one frame so "Computing…" is on screen while the
/// synchronous render blocks the event loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderPhase {
    Idle,
    Requested,
    Computing,
}

#[derive(Debug)]
pub struct GuiAppState {
    pub slider_iterations: u32,
    pub redraw_pending: bool,
    phase: RenderPhase,
}

impl Default for GuiAppState {
    fn default() -> Self {
        Self {
            slider_iterations: DEFAULT_MAX_ITERATIONS,
            redraw_pending: true,
            phase: RenderPhase::Requested,
        }
    }
}

impl GuiAppState {
    #[must_use]
    pub fn phase(&self) -> RenderPhase {
        self.phase
    }

    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.phase() != RenderPhase::Idle
    }

    /// Ignored while a render is already queued or running.
    pub fn request_render(&mut self) {
        if self.phase == RenderPhase::Idle {
            self.phase = RenderPhase::Requested;
        }
        self.redraw_pending = true;
    }

    /// Called once per redraw, before the UI is built. Returns `true` when the
    /// render should run now.
    pub fn begin_frame(&mut self) -> bool {
        match self.phase {
            RenderPhase::Idle => false,
            RenderPhase::Requested => {
                self.phase = RenderPhase::Computing;
                self.redraw_pending = true;
                false
            }
            RenderPhase::Computing => true,
        }
    }

    pub fn finish_render(&mut self) {
        self.phase = RenderPhase::Idle;
        self.redraw_pending = true;
    }

    #[must_use]
    pub fn status_text(&self, idle_status: &str) -> String {
        if self.is_busy() {
            COMPUTING_STATUS.to_string()
        } else {
            idle_status.to_string()
        }
    }
}
