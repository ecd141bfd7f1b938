//! 型別別名

/// 棋盤格子座標（0..8）
pub type Coord = usize;

/// 視窗像素座標，可能為負（點擊在棋盤左上方之外）
pub type Pixel = i32;
