mod config;
mod ui;

use clap::Parser;
use eframe::egui;

use config::Config;
use ui::GameApp;

#[derive(Parser, Debug)]
#[command(name = "tictactoe_client", about = "Local two-player tic-tac-toe")]
struct Args {
    /// Path to the YAML config file; defaults to a file next to the executable.
    #[arg(long)]
    config: Option<String>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config_file = config::get_config_file(args.config.as_deref());
    let config = match config_file.load() {
        Ok(config) => config,
        Err(e) => {
            common::log!("Failed to load config, using defaults: {}", e);
            Config::default()
        }
    };

    common::log!("Starting tic-tac-toe");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window.width, config.window.height])
            .with_title("Tic-Tac-Toe"),
        ..Default::default()
    };

    eframe::run_native(
        "Tic-Tac-Toe",
        options,
        Box::new(|_cc| Ok(Box::new(GameApp::new()))),
    )?;

    Ok(())
}
