//! 測試輔助：記錄繪圖指令的繪圖目標、固定的圖片表

#![allow(dead_code)]

use chessboard::alias::Pixel;
use chessboard::assets::asset_file_name;
use chessboard::{AssetRegistry, Board, CellRect, ImageHandle, Layout, RenderTarget, Rgb};

/// 一筆繪圖指令
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Fill(CellRect, Rgb),
    Blit(String, (Pixel, Pixel), Pixel),
    Stroke(CellRect, Rgb),
}

/// 只記錄不繪製的繪圖目標
#[derive(Debug, Default)]
pub struct RecordingTarget {
    pub commands: Vec<DrawCommand>,
}

impl RenderTarget for RecordingTarget {
    fn fill_rect(&mut self, rect: CellRect, color: Rgb) {
        self.commands.push(DrawCommand::Fill(rect, color));
    }

    fn blit(&mut self, image: &ImageHandle, top_left: (Pixel, Pixel), size: Pixel) {
        self.commands
            .push(DrawCommand::Blit(image.uri().to_string(), top_left, size));
    }

    fn stroke_rect(&mut self, rect: CellRect, color: Rgb) {
        self.commands.push(DrawCommand::Stroke(rect, color));
    }
}

impl RecordingTarget {
    pub fn blits(&self) -> Vec<&DrawCommand> {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Blit(..)))
            .collect()
    }
}

/// 圖片 URI 直接使用檔名
pub fn test_assets() -> AssetRegistry {
    AssetRegistry::from_fn(asset_file_name)
}

/// 已完成標準開局的棋盤
pub fn standard_board() -> Board {
    let mut board = Board::default();
    board.initial_setup(&Layout::standard(), &test_assets());
    board
}

/// 格子中心的像素座標
pub fn center_of(board: &Board, x: usize, y: usize) -> (Pixel, Pixel) {
    let cell = board.cell_size();
    (
        x as Pixel * cell + cell / 2,
        y as Pixel * cell + cell / 2,
    )
}
