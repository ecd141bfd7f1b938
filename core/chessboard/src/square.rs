//! 棋盤格子

use crate::alias::Pixel;
use crate::component::Position;
use crate::constants::{DARK_SQUARE_COLOR, LIGHT_SQUARE_COLOR};
use crate::piece::Piece;
use crate::render::{CellRect, RenderTarget, Rgb};

/// 格子深淺
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shade {
    Light,
    Dark,
}

impl Shade {
    /// 座標和為偶數是淺色
    pub fn of(pos: Position) -> Self {
        if (pos.x + pos.y) % 2 == 0 {
            Shade::Light
        } else {
            Shade::Dark
        }
    }

    pub fn color(self) -> Rgb {
        match self {
            Shade::Light => LIGHT_SQUARE_COLOR,
            Shade::Dark => DARK_SQUARE_COLOR,
        }
    }
}

/// 單一格子
///
/// `occupying_piece` 由 `Board` 直接改寫，格子本身不做任何檢查。
#[derive(Debug, Clone)]
pub struct Square {
    pos: Position,
    shade: Shade,
    color: Rgb,
    rect: CellRect,
    pub occupying_piece: Option<Piece>,
}

impl Square {
    pub fn new(pos: Position, cell_size: Pixel) -> Self {
        let rect = CellRect {
            x: pos.x as Pixel * cell_size,
            y: pos.y as Pixel * cell_size,
            width: cell_size,
            height: cell_size,
        };
        let shade = Shade::of(pos);
        Self {
            pos,
            shade,
            color: shade.color(),
            rect,
            occupying_piece: None,
        }
    }

    pub fn pos(&self) -> Position {
        self.pos
    }

    pub fn shade(&self) -> Shade {
        self.shade
    }

    pub fn color(&self) -> Rgb {
        self.color
    }

    /// 依深淺套用調色盤
    pub(crate) fn set_palette(&mut self, light: Rgb, dark: Rgb) {
        self.color = match self.shade {
            Shade::Light => light,
            Shade::Dark => dark,
        };
    }

    pub fn rect(&self) -> CellRect {
        self.rect
    }

    pub fn is_occupied(&self) -> bool {
        self.occupying_piece.is_some()
    }

    /// 先畫底色，有棋子再把圖片貼在左上角
    pub fn draw(&self, target: &mut impl RenderTarget) {
        target.fill_rect(self.rect, self.color);
        if let Some(piece) = &self.occupying_piece {
            target.blit(piece.image(), self.rect.top_left(), self.rect.width);
        }
    }
}
