//! 錯誤處理系統
//!
//! 所有錯誤都可恢復：無效輸入只回報給呼叫端，棋盤狀態保持不變。

use crate::alias::{Coord, Pixel};
use crate::piece::{Color, PieceKind};
use thiserror::Error as ThisError;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// 頂層錯誤，包含原始錯誤和 context 鏈
#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
    contexts: Vec<String>,
}

/// 錯誤種類
#[derive(Debug, ThisError)]
pub enum ErrorKind {
    #[error(transparent)]
    Board(#[from] BoardError),
    #[error(transparent)]
    Layout(#[from] LayoutError),
    #[error(transparent)]
    Load(#[from] LoadError),
}

/// 棋盤錯誤
#[derive(Debug, ThisError, PartialEq, Eq)]
pub enum BoardError {
    #[error("點擊座標超出棋盤範圍: ({x}, {y})")]
    InvalidCoordinate { x: Pixel, y: Pixel },
    #[error("位置超出棋盤邊界: ({x}, {y})")]
    OutOfBounds { x: Coord, y: Coord },
}

/// 初始佈局錯誤
#[derive(Debug, ThisError, PartialEq, Eq)]
pub enum LayoutError {
    #[error("佈局格式錯誤於 ({x}, {y}): {code:?}")]
    MalformedLayout { x: Coord, y: Coord, code: String },
    #[error("佈局尺寸錯誤: {rows} 列，第一列 {cols} 格，需為 8x8")]
    WrongDimensions { rows: usize, cols: usize },
}

/// 檔案與格式載入錯誤
#[derive(Debug, ThisError)]
pub enum LoadError {
    #[error("解析失敗: {0}")]
    ParseError(String),
    #[error("{format} 反序列化失敗: {reason}")]
    DeserializeError { format: String, reason: String },
    #[error("{format} 序列化失敗: {reason}")]
    SerializeError { format: String, reason: String },
    #[error("找不到棋子圖片 {color} {kind}: {path}")]
    MissingAsset {
        kind: PieceKind,
        color: Color,
        path: String,
    },
    #[error("讀取檔案失敗 {path}: {reason}")]
    Io { path: String, reason: String },
}

impl Error {
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    /// 添加錯誤上下文，自動記錄呼叫位置
    #[track_caller]
    pub fn context<C: Into<String>>(mut self, context: C) -> Self {
        let loc = std::panic::Location::caller();
        let msg = format!("{} [{}:{}]", context.into(), loc.file(), loc.line());
        self.contexts.push(msg);
        self
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.kind)?;
        for ctx in &self.contexts {
            write!(f, "\n  {}", ctx)?;
        }
        Ok(())
    }
}

impl std::error::Error for Error {}

impl<E: Into<ErrorKind>> From<E> for Error {
    fn from(error: E) -> Self {
        Self {
            kind: error.into(),
            contexts: Vec::new(),
        }
    }
}

/// Result 擴展 trait，用於添加錯誤上下文
pub trait Context<T> {
    fn context<C: Into<String>>(self, context: C) -> Result<T>;
}

impl<T> Context<T> for Result<T> {
    #[track_caller]
    fn context<C: Into<String>>(self, context: C) -> Result<T> {
        let loc = std::panic::Location::caller();
        self.map_err(|mut e| {
            let msg = format!("{} [{}:{}]", context.into(), loc.file(), loc.line());
            e.contexts.push(msg);
            e
        })
    }
}
