use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;

const RED_SCALE: f64 = 100.0;
const GREEN_SCALE: f64 = 180.0;
const BLUE_SCALE: f64 = 255.0;

/// Dark-to-blue gradient over `ln(1 + n) / ln(1 + max_iterations)`.
///
/// Points that never escaped (`n >= max_iterations`) are black.
#[derive(Debug, Clone, Copy)]
pub struct MandelbrotLogGradient {
    max_iterations: u32,
    log_denominator: f64,
}

impl MandelbrotLogGradient {
    #[must_use]
    pub fn new(max_iterations: u32) -> Self {
        Self {
            max_iterations,
            log_denominator: f64::from(max_iterations).ln_1p(),
        }
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }
}

fn channel(scale: f64, t: f64) -> u8 {
    (scale * t).round().clamp(0.0, 255.0) as u8
}

impl ColourMap<u32> for MandelbrotLogGradient {
    fn map(&self, iterations: u32) -> Colour {
        if iterations >= self.max_iterations {
            return Colour::BLACK;
        }

        let t = (f64::from(iterations).ln_1p() / self.log_denominator).clamp(0.0, 1.0);

        Colour {
            r: channel(RED_SCALE, t),
            g: channel(GREEN_SCALE, t),
            b: channel(BLUE_SCALE, t),
        }
    }

    fn display_name(&self) -> &str {
        "Logarithmic blue"
    }
}
