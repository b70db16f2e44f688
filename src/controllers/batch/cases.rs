#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BatchCase {
    pub name: &'static str,
    pub description: &'static str,
    pub min_real: f64,
    pub max_real: f64,
    pub min_imag: f64,
    pub max_imag: f64,
    pub max_iterations: u32,
}

impl BatchCase {
    #[must_use]
    pub fn file_name(&self) -> String {
        format!("{}.png", self.name)
    }
}

pub const BATCH_WIDTH: u32 = 800;
pub const BATCH_HEIGHT: u32 = 600;

pub static BATCH_CASES: [BatchCase; 3] = [
    BatchCase {
        name: "mandelbrot_case_overview",
        description: "Overview of the Mandelbrot set",
        min_real: -2.5,
        max_real: 1.0,
        min_imag: -1.2,
        max_imag: 1.2,
        max_iterations: 256,
    },
    BatchCase {
        name: "mandelbrot_case_seahorse",
        description: "Seahorse Valley",
        min_real: -0.77,
        max_real: -0.73,
        min_imag: 0.05,
        max_imag: 0.09,
        max_iterations: 512,
    },
    BatchCase {
        name: "mandelbrot_case_spiral",
        description: "Spiral near the main bulb",
        min_real: -0.088,
        max_real: -0.064,
        min_imag: 0.654,
        max_imag: 0.672,
        max_iterations: 1024,
    },
];

/// Looks a case up by name, with or without the `.png` suffix.
#[must_use]
pub fn find_case(name: &str) -> Option<&'static BatchCase> {
    let stem = name.strip_suffix(".png").unwrap_or(name);

    BATCH_CASES.iter().find(|case| case.name == stem)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_names() {
        let names: Vec<String> = BATCH_CASES.iter().map(BatchCase::file_name).collect();

        assert_eq!(
            names,
            vec![
                "mandelbrot_case_overview.png",
                "mandelbrot_case_seahorse.png",
                "mandelbrot_case_spiral.png"
            ]
        );
    }

    #[test]
    fn test_find_case_accepts_stem_and_file_name() {
        assert_eq!(find_case("mandelbrot_case_spiral").map(|c| c.max_iterations), Some(1024));
        assert_eq!(
            find_case("mandelbrot_case_seahorse.png").map(|c| c.max_iterations),
            Some(512)
        );
        assert_eq!(find_case("mandelbrot_case_unknown"), None);
    }

    #[test]
    fn test_case_bounds_are_ordered() {
        for case in &BATCH_CASES {
            assert!(case.min_real < case.max_real, "{}", case.name);
            assert!(case.min_imag < case.max_imag, "{}", case.name);
            assert!(case.max_iterations > 0, "{}", case.name);
        }
    }
}
