//! 棋子：種類、顏色與對應圖片

use crate::assets::{AssetRegistry, ImageHandle};
use crate::layout::LayoutCell;
use strum_macros::{Display, EnumIter};

/// 棋子顏色
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, EnumIter)]
pub enum Color {
    #[strum(to_string = "白")]
    White,
    #[strum(to_string = "黑")]
    Black,
}

/// 棋子種類
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, EnumIter)]
pub enum PieceKind {
    #[strum(to_string = "城堡")]
    Rook,
    #[strum(to_string = "騎士")]
    Knight,
    #[strum(to_string = "主教")]
    Bishop,
    #[strum(to_string = "皇后")]
    Queen,
    #[strum(to_string = "國王")]
    King,
    #[strum(to_string = "士兵")]
    Pawn,
}

impl Color {
    /// 佈局表中的顏色字母
    pub fn letter(self) -> char {
        match self {
            Color::White => 'w',
            Color::Black => 'b',
        }
    }

    pub fn from_letter(letter: char) -> Option<Self> {
        match letter {
            'w' => Some(Color::White),
            'b' => Some(Color::Black),
            _ => None,
        }
    }

    /// 圖片檔名使用的英文名稱
    pub fn file_stem(self) -> &'static str {
        match self {
            Color::White => "white",
            Color::Black => "black",
        }
    }
}

impl PieceKind {
    /// 佈局表中的種類字母
    ///
    /// 騎士用 `K`，因此國王用 `G`。
    pub fn letter(self) -> char {
        match self {
            PieceKind::Rook => 'R',
            PieceKind::Knight => 'K',
            PieceKind::Bishop => 'B',
            PieceKind::Queen => 'Q',
            PieceKind::King => 'G',
            PieceKind::Pawn => 'P',
        }
    }

    pub fn from_letter(letter: char) -> Option<Self> {
        match letter {
            'R' => Some(PieceKind::Rook),
            'K' => Some(PieceKind::Knight),
            'B' => Some(PieceKind::Bishop),
            'Q' => Some(PieceKind::Queen),
            'G' => Some(PieceKind::King),
            'P' => Some(PieceKind::Pawn),
            _ => None,
        }
    }

    pub fn file_stem(self) -> &'static str {
        match self {
            PieceKind::Rook => "rook",
            PieceKind::Knight => "knight",
            PieceKind::Bishop => "bishop",
            PieceKind::Queen => "queen",
            PieceKind::King => "king",
            PieceKind::Pawn => "pawn",
        }
    }
}

/// 棋子
///
/// 不記錄自身位置，所在格子由 `Square` 決定。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Piece {
    kind: PieceKind,
    color: Color,
    image: ImageHandle,
}

impl Piece {
    /// 依種類與顏色從圖片表取得對應圖片
    pub fn new(kind: PieceKind, color: Color, assets: &AssetRegistry) -> Self {
        Self {
            kind,
            color,
            image: assets.get(kind, color).clone(),
        }
    }

    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn image(&self) -> &ImageHandle {
        &self.image
    }

    /// 佈局表代碼，例如 `"bR"`
    pub fn code(&self) -> String {
        LayoutCell::Occupied(self.color, self.kind).code()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn letters_round_trip() {
        for kind in PieceKind::iter() {
            assert_eq!(PieceKind::from_letter(kind.letter()), Some(kind));
        }
        for color in Color::iter() {
            assert_eq!(Color::from_letter(color.letter()), Some(color));
        }
        assert_eq!(PieceKind::from_letter('N'), None);
        assert_eq!(Color::from_letter('W'), None);
    }

    #[test]
    fn piece_takes_image_by_kind_and_color() {
        let assets = AssetRegistry::from_fn(|kind, color| {
            format!("{}-{}", kind.file_stem(), color.file_stem())
        });
        let piece = Piece::new(PieceKind::Queen, Color::Black, &assets);

        assert_eq!(piece.kind(), PieceKind::Queen);
        assert_eq!(piece.color(), Color::Black);
        assert_eq!(piece.image().uri(), "queen-black");
        assert_eq!(piece.code(), "bQ");
    }

    #[test]
    fn code_parses_back_as_layout_cell() {
        let assets = AssetRegistry::from_fn(|kind, color| format!("{kind}{color}"));
        for kind in PieceKind::iter() {
            for color in Color::iter() {
                let code = Piece::new(kind, color, &assets).code();
                let cell = LayoutCell::parse(&code, crate::component::Position::new(0, 0));
                assert_eq!(cell.unwrap(), LayoutCell::Occupied(color, kind), "代碼 {code}");
            }
        }
    }
}
