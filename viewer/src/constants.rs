pub const CONFIG_PATH_ENV: &str = "CHESSBOARD_CONFIG";
pub const DEFAULT_CONFIG_PATH: &str = "chessboard.toml";
pub const LOG_LEVEL_ENV: &str = "CHESSBOARD_LOG";
pub const DEFAULT_LOG_LEVEL: &str = "info";

// UI 尺寸
pub const SIDE_PANEL_WIDTH: f32 = 240.0;
pub const WINDOW_MARGIN: f32 = 32.0;

// UI 間距
pub const SPACING_SMALL: f32 = 5.0;
pub const SPACING_MEDIUM: f32 = 10.0;

pub const STROKE_WIDTH: f32 = 4.0;

pub const MESSAGE_COLOR_INFO: egui::Color32 = egui::Color32::LIGHT_GREEN;
pub const MESSAGE_COLOR_ERROR: egui::Color32 = egui::Color32::LIGHT_RED;
