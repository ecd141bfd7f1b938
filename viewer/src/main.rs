mod app;
mod constants;
mod painter;

use anyhow::Context;
use app::ChessApp;
use chessboard::{AssetRegistry, BoardConfig};
use constants::{
    CONFIG_PATH_ENV, DEFAULT_CONFIG_PATH, DEFAULT_LOG_LEVEL, LOG_LEVEL_ENV, SIDE_PANEL_WIDTH,
    WINDOW_MARGIN,
};
use std::path::PathBuf;

fn main() -> anyhow::Result<()> {
    let env = env_logger::Env::default().filter_or(LOG_LEVEL_ENV, DEFAULT_LOG_LEVEL);
    env_logger::Builder::from_env(env).init();

    let config_path = std::env::var_os(CONFIG_PATH_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH));
    let config = BoardConfig::load(&config_path)
        .with_context(|| format!("載入設定檔失敗：{}", config_path.display()))?;
    let assets = AssetRegistry::from_directory(&config.asset_dir)
        .with_context(|| format!("載入棋子圖片失敗：{}", config.asset_dir.display()))?;
    let layout = config.load_layout().context("載入佈局失敗")?;
    let board = config.build_board();

    let board_size = board.pixel_size() as f32;
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([
            board_size + SIDE_PANEL_WIDTH + WINDOW_MARGIN,
            board_size + WINDOW_MARGIN,
        ]),
        ..Default::default()
    };

    eframe::run_native(
        &config.window_title,
        options,
        Box::new(move |cc| {
            egui_extras::install_image_loaders(&cc.egui_ctx);
            Ok(Box::new(ChessApp::new(board, layout, assets)))
        }),
    )
    .map_err(|e| anyhow::anyhow!("視窗執行失敗：{e}"))
}
