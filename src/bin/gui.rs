fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let presenter_factory = mandelbrot_viewer::PixelsPresenterFactory::new();
    let command = mandelbrot_viewer::RunGuiCommand::new(presenter_factory);

    command.execute()
}
