use common::config::{check_range, Validate};
use common::tictactoe::LayoutSettings;
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub board_margin: i32,
    pub cell_size: i32,
    pub panel_height: i32,
}

impl WindowConfig {
    pub fn layout_settings(&self) -> LayoutSettings {
        LayoutSettings {
            board_margin: self.board_margin,
            cell_size: self.cell_size,
            panel_height: self.panel_height,
        }
    }
}

impl Validate for WindowConfig {
    fn validate(&self) -> Result<(), String> {
        if self.title.trim().is_empty() {
            return Err("Window title must not be empty".to_string());
        }
        check_range("board_margin", self.board_margin, 0, 50)?;
        check_range("cell_size", self.cell_size, 60, 300)?;
        // Play button row sits 83px into the panel.
        check_range("panel_height", self.panel_height, 130, 300)?;
        Ok(())
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        let settings = LayoutSettings::default();
        Self {
            title: "Tic Tac Toe".to_string(),
            board_margin: settings.board_margin,
            cell_size: settings.cell_size,
            panel_height: settings.panel_height,
        }
    }
}
