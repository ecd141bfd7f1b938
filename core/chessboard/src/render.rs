//! 繪圖目標抽象
//!
//! 核心只描述「畫什麼、畫在哪」，實際繪製由視窗端實作 `RenderTarget`。

use crate::alias::Pixel;
use crate::assets::ImageHandle;
use serde::{Deserialize, Serialize};

/// RGB 顏色
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// 像素矩形（左上角 + 寬高）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellRect {
    pub x: Pixel,
    pub y: Pixel,
    pub width: Pixel,
    pub height: Pixel,
}

impl CellRect {
    pub fn top_left(&self) -> (Pixel, Pixel) {
        (self.x, self.y)
    }

    pub fn contains(&self, x: Pixel, y: Pixel) -> bool {
        x >= self.x && y >= self.y && x < self.x + self.width && y < self.y + self.height
    }
}

/// 可接受填色、貼圖、描邊的繪圖面
pub trait RenderTarget {
    fn fill_rect(&mut self, rect: CellRect, color: Rgb);

    /// 以 `size` 邊長把圖片貼在 `top_left`
    fn blit(&mut self, image: &ImageHandle, top_left: (Pixel, Pixel), size: Pixel);

    fn stroke_rect(&mut self, rect: CellRect, color: Rgb);
}
