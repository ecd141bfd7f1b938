//! 初始佈局表
//!
//! 8x8 字串代碼表，列優先：
//! - `""`（ASCII 格式用 `.`）= 空格
//! - 其餘為「顏色字母 + 種類字母」，例如 `bR`、`wP`
//!
//! 解析時即轉為 `LayoutCell`，不符合「恰好一種顏色、一種棋子」的代碼一律拒絕。

use crate::component::Position;
use crate::constants::BOARD_SIZE;
use crate::error::{LayoutError, LoadError, Result};
use crate::piece::{Color, PieceKind};
use serde::{Deserialize, Serialize};

/// ASCII 格式中的空格符號
pub const EMPTY_ASCII_CELL: &str = ".";

/// 佈局表的單一格
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LayoutCell {
    #[default]
    Empty,
    Occupied(Color, PieceKind),
}

impl LayoutCell {
    /// 解析單格代碼
    pub fn parse(code: &str, pos: Position) -> Result<Self> {
        if code.is_empty() {
            return Ok(LayoutCell::Empty);
        }

        let malformed = || LayoutError::MalformedLayout {
            x: pos.x,
            y: pos.y,
            code: code.to_string(),
        };

        let mut chars = code.chars();
        let (Some(color), Some(kind), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(malformed().into());
        };
        let color = Color::from_letter(color).ok_or_else(malformed)?;
        let kind = PieceKind::from_letter(kind).ok_or_else(malformed)?;
        Ok(LayoutCell::Occupied(color, kind))
    }

    pub fn code(self) -> String {
        match self {
            LayoutCell::Empty => String::new(),
            LayoutCell::Occupied(color, kind) => format!("{}{}", color.letter(), kind.letter()),
        }
    }
}

/// TOML 佈局檔
#[derive(Debug, Serialize, Deserialize)]
struct LayoutFile {
    rows: Vec<Vec<String>>,
}

/// 8x8 初始佈局
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    cells: [[LayoutCell; BOARD_SIZE]; BOARD_SIZE],
}

impl Default for Layout {
    fn default() -> Self {
        Self::standard()
    }
}

impl Layout {
    /// 標準開局：第 0 列黑方底線、第 7 列白方底線，1、6 列為士兵
    pub fn standard() -> Self {
        use Color::{Black, White};
        use PieceKind::{Bishop, King, Knight, Pawn, Queen, Rook};

        let back_rank = [Rook, Knight, Bishop, Queen, King, Bishop, Knight, Rook];
        let mut cells = [[LayoutCell::Empty; BOARD_SIZE]; BOARD_SIZE];
        for (x, kind) in back_rank.into_iter().enumerate() {
            cells[0][x] = LayoutCell::Occupied(Black, kind);
            cells[1][x] = LayoutCell::Occupied(Black, Pawn);
            cells[6][x] = LayoutCell::Occupied(White, Pawn);
            cells[7][x] = LayoutCell::Occupied(White, kind);
        }
        Self { cells }
    }

    /// 從字串代碼表建立，必須是 8 列 x 8 格
    pub fn from_rows<S: AsRef<str>>(rows: &[Vec<S>]) -> Result<Self> {
        let wrong_dimensions = || LayoutError::WrongDimensions {
            rows: rows.len(),
            cols: rows.first().map_or(0, |row| row.len()),
        };
        if rows.len() != BOARD_SIZE {
            return Err(wrong_dimensions().into());
        }

        let mut cells = [[LayoutCell::Empty; BOARD_SIZE]; BOARD_SIZE];
        for (y, row) in rows.iter().enumerate() {
            if row.len() != BOARD_SIZE {
                return Err(LayoutError::WrongDimensions {
                    rows: rows.len(),
                    cols: row.len(),
                }
                .into());
            }
            for (x, code) in row.iter().enumerate() {
                cells[y][x] = LayoutCell::parse(code.as_ref(), Position { x, y })?;
            }
        }
        Ok(Self { cells })
    }

    /// 從 TOML 載入：`rows = [["bR", ...], ...]`
    pub fn from_toml(content: &str) -> Result<Self> {
        let file: LayoutFile = toml::from_str(content).map_err(|e| LoadError::DeserializeError {
            format: "TOML".to_string(),
            reason: e.to_string(),
        })?;
        Self::from_rows(&file.rows)
    }

    /// 輸出為 TOML
    pub fn to_toml(&self) -> Result<String> {
        let file = LayoutFile {
            rows: self.to_rows(),
        };
        toml::to_string(&file).map_err(|e| {
            LoadError::SerializeError {
                format: "TOML".to_string(),
                reason: e.to_string(),
            }
            .into()
        })
    }

    /// 從 ASCII 載入：每行以空白分隔的代碼，`.` 為空格
    ///
    /// 例如：
    /// ```text
    /// bR bK bB bQ bG bB bK bR
    /// bP bP bP bP bP bP bP bP
    /// . . . . . . . .
    /// ```
    pub fn from_ascii(ascii: &str) -> Result<Self> {
        let rows: Vec<Vec<&str>> = ascii
            .lines()
            .map(|l| l.trim())
            .filter(|l| !l.is_empty())
            .map(|l| {
                l.split_whitespace()
                    .map(|cell| if cell == EMPTY_ASCII_CELL { "" } else { cell })
                    .collect()
            })
            .collect();
        Self::from_rows(&rows)
    }

    pub fn cell(&self, pos: Position) -> Option<LayoutCell> {
        self.cells.get(pos.y)?.get(pos.x).copied()
    }

    /// 所有非空格（列優先）
    pub fn occupied(&self) -> impl Iterator<Item = (Position, Color, PieceKind)> + '_ {
        Position::all().filter_map(|pos| match self.cells[pos.y][pos.x] {
            LayoutCell::Empty => None,
            LayoutCell::Occupied(color, kind) => Some((pos, color, kind)),
        })
    }

    pub fn to_rows(&self) -> Vec<Vec<String>> {
        self.cells
            .iter()
            .map(|row| row.iter().map(|cell| cell.code()).collect())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_cell_codes() {
        let pos = Position::new(3, 4);
        assert_eq!(LayoutCell::parse("", pos).unwrap(), LayoutCell::Empty);
        assert_eq!(
            LayoutCell::parse("bG", pos).unwrap(),
            LayoutCell::Occupied(Color::Black, PieceKind::King)
        );
        assert_eq!(
            LayoutCell::parse("wK", pos).unwrap(),
            LayoutCell::Occupied(Color::White, PieceKind::Knight)
        );
    }

    #[test]
    fn reject_malformed_codes() {
        let pos = Position::new(2, 5);
        for code in ["w", "wRB", "xR", "wX", "Rw", "bRP", "ww", " wP"] {
            let err = LayoutCell::parse(code, pos).unwrap_err();
            match err.kind() {
                crate::error::ErrorKind::Layout(LayoutError::MalformedLayout { x, y, code: c }) => {
                    assert_eq!((*x, *y), (2, 5));
                    assert_eq!(c, code);
                }
                other => panic!("預期 MalformedLayout，得到 {other:?}"),
            }
        }
    }
}
