//! 以 egui 實作棋盤繪圖目標

use crate::constants::STROKE_WIDTH;
use chessboard::alias::Pixel;
use chessboard::{CellRect, ImageHandle, RenderTarget, Rgb};

/// 把棋盤像素座標平移到 `origin` 後畫在 egui 上
pub struct EguiTarget<'a> {
    ui: &'a egui::Ui,
    painter: &'a egui::Painter,
    origin: egui::Pos2,
}

impl<'a> EguiTarget<'a> {
    pub fn new(ui: &'a egui::Ui, painter: &'a egui::Painter, origin: egui::Pos2) -> Self {
        Self {
            ui,
            painter,
            origin,
        }
    }

    fn to_rect(&self, rect: CellRect) -> egui::Rect {
        egui::Rect::from_min_size(
            self.origin + egui::vec2(rect.x as f32, rect.y as f32),
            egui::vec2(rect.width as f32, rect.height as f32),
        )
    }
}

fn to_color(Rgb(r, g, b): Rgb) -> egui::Color32 {
    egui::Color32::from_rgb(r, g, b)
}

impl RenderTarget for EguiTarget<'_> {
    fn fill_rect(&mut self, rect: CellRect, color: Rgb) {
        self.painter
            .rect_filled(self.to_rect(rect), 0.0, to_color(color));
    }

    fn blit(&mut self, image: &ImageHandle, top_left: (Pixel, Pixel), size: Pixel) {
        let rect = self.to_rect(CellRect {
            x: top_left.0,
            y: top_left.1,
            width: size,
            height: size,
        });
        // 圖片由 egui_extras 的 loader 非同步載入，載入前不會顯示
        egui::Image::from_uri(image.uri()).paint_at(self.ui, rect);
    }

    fn stroke_rect(&mut self, rect: CellRect, color: Rgb) {
        self.painter.rect_stroke(
            self.to_rect(rect),
            0.0,
            egui::Stroke::new(STROKE_WIDTH, to_color(color)),
            egui::epaint::StrokeKind::Inside,
        );
    }
}
