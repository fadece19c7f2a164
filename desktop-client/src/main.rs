mod colors;
mod config;
mod icon;
mod ui;

use common::config::LoadedConfig;
use common::log;
use common::logger::init_logger;
use common::tictactoe::{BoardLayout, GameController};
use eframe::egui;

use config::{get_config_manager, Config};
use ui::TicTacToeApp;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logger(Some("tictactoe".to_string()));

    let config_manager = get_config_manager();
    let config: Config = match config_manager.load_or_default() {
        LoadedConfig::Stored(config) => {
            log!("Loaded config from {}", config_manager.location());
            config
        }
        LoadedConfig::Missing(config) => {
            log!("No config at {}, using defaults", config_manager.location());
            config
        }
        LoadedConfig::Rejected { config, error } => {
            log!("Ignoring config at {}: {}", config_manager.location(), error);
            config
        }
    };

    let layout = BoardLayout::new(config.window.layout_settings());
    let (width, height) = layout.window_size();
    log!("Opening {}x{} window", width, height);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([width as f32, height as f32])
            .with_resizable(false)
            .with_title(config.window.title.clone())
            .with_icon(icon::icon_data()),
        ..Default::default()
    };

    let controller = GameController::new(layout);
    eframe::run_native(
        &config.window.title,
        options,
        Box::new(move |_cc| Ok(Box::new(TicTacToeApp::new(controller)))),
    )?;

    Ok(())
}
