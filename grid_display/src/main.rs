// main.rs - Conway's Game of Life in a window: left button revives, right button kills,
// Space pauses, K clears, Up/Down change the time per generation

use clap::Parser;

mod app;
mod cli;
mod error;
mod input;
mod surface;

use app::GridDisplayApp;
use cli::Cli;
use error::AppError;

fn main() -> Result<(), AppError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Cli::parse().into_config()?;
    let (width, height) = config.pixel_size();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([width as f32, height as f32])
            .with_resizable(false),
        ..Default::default()
    };

    eframe::run_native(
        "Conway's Game of Life",
        options,
        Box::new(move |cc| Box::new(GridDisplayApp::new(cc, &config))),
    )?;
    Ok(())
}
