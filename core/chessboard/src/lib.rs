//! 可點擊移動棋子的西洋棋盤核心
//!
//! 只處理格子、棋子與「選取 → 移動」狀態機，不檢查走法規則。
//! 視窗、事件迴圈與圖片解碼由外部負責，透過 `RenderTarget` 繪製。

pub mod alias;
pub mod assets;
pub mod board;
pub mod component;
pub mod config;
pub mod constants;
pub mod error;
pub mod layout;
pub mod piece;
pub mod render;
pub mod square;

pub use assets::{AssetRegistry, ImageHandle};
pub use board::{Board, BoardState, ClickOutcome};
pub use component::Position;
pub use config::BoardConfig;
pub use error::{Error, ErrorKind, Result};
pub use layout::{Layout, LayoutCell};
pub use piece::{Color, Piece, PieceKind};
pub use render::{CellRect, RenderTarget, Rgb};
pub use square::{Shade, Square};
