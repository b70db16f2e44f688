use clap::Parser;
use log::info;
use std::error::Error;
use std::path::PathBuf;

use mandelbrot_viewer::{BATCH_CASES, BatchCase, BatchController, PngFilePresenter, find_case};

/// Renders the Mandelbrot study cases to PNG files.
#[derive(Debug, Parser)]
#[command(version)]
struct Args {
    /// Directory the images are written to; created if missing.
    #[arg(long, default_value = "output")]
    output_dir: PathBuf,

    /// Render only this case (file stem); may be repeated.
    #[arg(long = "case", value_name = "NAME")]
    cases: Vec<String>,

    /// Print the available cases and exit.
    #[arg(long)]
    list: bool,

    #[arg(long, default_value_t = 800, value_parser = clap::value_parser!(u32).range(1..))]
    width: u32,

    #[arg(long, default_value_t = 600, value_parser = clap::value_parser!(u32).range(1..))]
    height: u32,

    /// Overrides every case's iteration budget.
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    iterations: Option<u32>,
}

fn selected_cases(names: &[String]) -> Result<Vec<&'static BatchCase>, Box<dyn Error>> {
    if names.is_empty() {
        return Ok(BATCH_CASES.iter().collect());
    }

    names
        .iter()
        .map(|name| find_case(name).ok_or_else(|| format!("unknown case: {}", name).into()))
        .collect()
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    if args.list {
        for case in &BATCH_CASES {
            println!(
                "{:<28} {:<32} Re [{}, {}]  Im [{}, {}]  iter={}",
                case.name,
                case.description,
                case.min_real,
                case.max_real,
                case.min_imag,
                case.max_imag,
                case.max_iterations
            );
        }
        return Ok(());
    }

    let cases = selected_cases(&args.cases)?;
    std::fs::create_dir_all(&args.output_dir)?;

    let controller = BatchController::new(PngFilePresenter::new())
        .with_size(args.width, args.height)
        .with_max_iterations(args.iterations);

    info!("Mandelbrot study cases");
    let written = controller.run(cases, &args.output_dir)?;
    info!("done, {} image(s) written", written.len());

    Ok(())
}
