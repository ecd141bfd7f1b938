//! 棋盤常數定義

use crate::alias::{Coord, Pixel};
use crate::render::Rgb;

/// 棋盤邊長（格數）
pub const BOARD_SIZE: Coord = 8;

/// 預設格子邊長（像素），棋子圖片也以此尺寸繪製
pub const DEFAULT_CELL_SIZE: Pixel = 100;

/// 格子邊長上限，確保整個棋盤的像素邊長不會溢位
pub const MAX_CELL_SIZE: Pixel = Pixel::MAX / BOARD_SIZE as Pixel;

// 棋盤顏色
pub const LIGHT_SQUARE_COLOR: Rgb = Rgb(237, 199, 190);
pub const DARK_SQUARE_COLOR: Rgb = Rgb(115, 88, 81);
pub const HIGHLIGHT_COLOR: Rgb = Rgb(246, 246, 105);

/// 棋子圖片副檔名
pub const PIECE_IMAGE_EXTENSION: &str = "png";
