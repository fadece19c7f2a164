use eframe::egui::Color32;

pub const WINDOW_BACKGROUND: Color32 = Color32::WHITE;
pub const BOARD_BACKGROUND: Color32 = Color32::from_rgb(240, 240, 240);
pub const GRID_LINE: Color32 = Color32::BLACK;
pub const PANEL_BACKGROUND: Color32 = Color32::from_rgb(44, 62, 80);
pub const PANEL_TEXT: Color32 = Color32::from_rgb(236, 240, 241);
pub const MARK_X: Color32 = Color32::from_rgb(220, 50, 50);
pub const MARK_O: Color32 = Color32::from_rgb(50, 50, 220);
pub const HOVER: Color32 = Color32::from_rgba_premultiplied(40, 60, 100, 50);
pub const WINNING_LINE: Color32 = Color32::from_rgba_premultiplied(39, 156, 39, 200);
pub const PLAY_BUTTON: Color32 = Color32::from_rgb(39, 174, 96);
pub const CAT_FUR: Color32 = Color32::from_rgb(230, 150, 60);
pub const CAT_FEATURES: Color32 = Color32::from_rgb(60, 40, 20);
