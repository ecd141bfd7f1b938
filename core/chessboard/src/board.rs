//! 棋盤與點擊移動狀態機
//!
//! 兩段式操作：
//! - 閒置時點擊有棋子的格子 → 選取
//! - 已選取時點擊任一格子 → 把棋子移過去（覆蓋原有棋子），回到閒置
//!
//! 不檢查走法是否合法，也不管輪到誰。

use crate::alias::Pixel;
use crate::assets::AssetRegistry;
use crate::component::Position;
use crate::constants::{BOARD_SIZE, DEFAULT_CELL_SIZE, HIGHLIGHT_COLOR, MAX_CELL_SIZE};
use crate::error::{BoardError, Result};
use crate::layout::Layout;
use crate::piece::Piece;
use crate::render::{RenderTarget, Rgb};
use crate::square::Square;
use std::collections::BTreeSet;

/// 棋盤狀態
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardState {
    /// 沒有選取任何格子
    Idle,
    /// 已選取一個有棋子的格子
    Selected(Position),
}

/// 一次點擊的結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickOutcome {
    /// 閒置時點到空格，什麼都沒發生
    Ignored,
    Selected(Position),
    Moved {
        from: Position,
        to: Position,
        /// 被覆蓋掉的棋子
        captured: Option<Piece>,
    },
}

#[derive(Debug, Clone)]
pub struct Board {
    // squares[y][x]
    squares: [[Square; BOARD_SIZE]; BOARD_SIZE],
    selected: Option<Position>,
    pending_redraw: BTreeSet<Position>,
    cell_size: Pixel,
    highlight_color: Rgb,
}

impl Default for Board {
    fn default() -> Self {
        Self::new(DEFAULT_CELL_SIZE)
    }
}

impl Board {
    /// 建立 64 個空格子，`cell_size` 限制在 `1..=MAX_CELL_SIZE`
    pub fn new(cell_size: Pixel) -> Self {
        let cell_size = cell_size.clamp(1, MAX_CELL_SIZE);
        let squares = std::array::from_fn(|y| {
            std::array::from_fn(|x| Square::new(Position { x, y }, cell_size))
        });
        Self {
            squares,
            selected: None,
            pending_redraw: BTreeSet::new(),
            cell_size,
            highlight_color: HIGHLIGHT_COLOR,
        }
    }

    pub fn with_colors(mut self, light: Rgb, dark: Rgb) -> Self {
        for square in self.squares.iter_mut().flatten() {
            square.set_palette(light, dark);
        }
        self
    }

    pub fn with_highlight_color(mut self, color: Rgb) -> Self {
        self.highlight_color = color;
        self
    }

    pub fn cell_size(&self) -> Pixel {
        self.cell_size
    }

    /// 棋盤邊長（像素）
    pub fn pixel_size(&self) -> Pixel {
        self.cell_size * BOARD_SIZE as Pixel
    }

    // ==================== 初始佈局 ====================

    /// 依佈局表擺放棋子，清除選取，並排程重繪全部格子
    ///
    /// 可重複呼叫，用於重新開局。
    pub fn initial_setup(&mut self, layout: &Layout, assets: &AssetRegistry) {
        for square in self.squares.iter_mut().flatten() {
            square.occupying_piece = None;
        }
        for (pos, color, kind) in layout.occupied() {
            self.squares[pos.y][pos.x].occupying_piece = Some(Piece::new(kind, color, assets));
        }
        self.selected = None;
        self.pending_redraw.extend(Position::all());
        log::info!("棋盤初始化完成，共 {} 枚棋子", self.occupied_count());
    }

    /// 直接從字串代碼表初始化，格式錯誤時棋盤保持不變
    pub fn setup_from_rows<S: AsRef<str>>(
        &mut self,
        rows: &[Vec<S>],
        assets: &AssetRegistry,
    ) -> Result<()> {
        let layout = Layout::from_rows(rows)?;
        self.initial_setup(&layout, assets);
        Ok(())
    }

    // ==================== 查詢 ====================

    pub fn state(&self) -> BoardState {
        match self.selected {
            Some(pos) => BoardState::Selected(pos),
            None => BoardState::Idle,
        }
    }

    pub fn selected(&self) -> Option<Position> {
        self.selected
    }

    pub fn is_selected(&self, pos: Position) -> bool {
        self.selected == Some(pos)
    }

    pub fn square(&self, pos: Position) -> Option<&Square> {
        self.squares.get(pos.y)?.get(pos.x)
    }

    pub fn piece_at(&self, pos: Position) -> Option<&Piece> {
        self.square(pos)?.occupying_piece.as_ref()
    }

    /// 依列優先順序走訪所有格子
    pub fn squares(&self) -> impl Iterator<Item = &Square> {
        self.squares.iter().flatten()
    }

    pub fn occupied_count(&self) -> usize {
        self.squares().filter(|s| s.is_occupied()).count()
    }

    /// 將視窗像素座標轉換為棋盤位置
    pub fn square_at_pixel(&self, x: Pixel, y: Pixel) -> Result<Position> {
        let size = self.pixel_size();
        if x < 0 || y < 0 || x >= size || y >= size {
            return Err(BoardError::InvalidCoordinate { x, y }.into());
        }
        Ok(Position {
            x: (x / self.cell_size) as usize,
            y: (y / self.cell_size) as usize,
        })
    }

    // ==================== 狀態機 ====================

    /// 處理一次點擊
    ///
    /// 座標超出棋盤時回傳 `InvalidCoordinate`，棋盤狀態不變。
    pub fn click(&mut self, x: Pixel, y: Pixel) -> Result<ClickOutcome> {
        let pos = self.square_at_pixel(x, y)?;

        match self.state() {
            BoardState::Idle => {
                if self.select_square(pos)? {
                    Ok(ClickOutcome::Selected(pos))
                } else {
                    Ok(ClickOutcome::Ignored)
                }
            }
            BoardState::Selected(from) => {
                let captured = self.move_piece(from, pos)?;
                Ok(ClickOutcome::Moved {
                    from,
                    to: pos,
                    captured,
                })
            }
        }
    }

    /// 取消原本的選取，若目標格有棋子則選取它
    ///
    /// 回傳是否選取成功。
    pub fn select_square(&mut self, pos: Position) -> Result<bool> {
        let occupied = self.checked_square(pos)?.is_occupied();

        if let Some(prev) = self.selected.take() {
            self.pending_redraw.insert(prev);
        }
        if !occupied {
            return Ok(false);
        }

        self.selected = Some(pos);
        self.pending_redraw.insert(pos);
        log::debug!("選取 {pos}");
        Ok(true)
    }

    /// 把 `from` 的棋子移到 `to`，回傳被覆蓋的棋子
    ///
    /// 目標格無條件被來源格取代，原有的棋子回傳。`from == to` 時棋子拿起又放回，結果不變。
    /// 結束後回到閒置狀態。
    pub fn move_piece(&mut self, from: Position, to: Position) -> Result<Option<Piece>> {
        self.checked_square(from)?;
        self.checked_square(to)?;

        // 來源是空格時目標也會被清空
        let moving = self.squares[from.y][from.x].occupying_piece.take();
        let captured = std::mem::replace(&mut self.squares[to.y][to.x].occupying_piece, moving);

        self.pending_redraw.insert(from);
        self.pending_redraw.insert(to);
        self.selected = None;

        match &captured {
            Some(piece) => log::info!("{from} → {to}，吃掉{}{}", piece.color(), piece.kind()),
            None => log::debug!("{from} → {to}"),
        }
        Ok(captured)
    }

    fn checked_square(&self, pos: Position) -> Result<&Square> {
        if !pos.is_on_board() {
            return Err(BoardError::OutOfBounds {
                x: pos.x,
                y: pos.y,
            }
            .into());
        }
        Ok(&self.squares[pos.y][pos.x])
    }

    // ==================== 繪製 ====================

    /// 繪製全部格子
    pub fn draw(&self, target: &mut impl RenderTarget) {
        for pos in Position::all() {
            self.draw_square(pos, target);
        }
    }

    /// 只繪製需要更新的格子，並清空排程
    pub fn flush_redraws(&mut self, target: &mut impl RenderTarget) {
        for pos in std::mem::take(&mut self.pending_redraw) {
            self.draw_square(pos, target);
        }
    }

    /// 等待重繪的格子（依位置排序）
    pub fn pending_redraws(&self) -> impl Iterator<Item = Position> + '_ {
        self.pending_redraw.iter().copied()
    }

    fn draw_square(&self, pos: Position, target: &mut impl RenderTarget) {
        let Some(square) = self.square(pos) else {
            return;
        };
        square.draw(target);
        if self.is_selected(pos) {
            target.stroke_rect(square.rect(), self.highlight_color);
        }
    }
}
