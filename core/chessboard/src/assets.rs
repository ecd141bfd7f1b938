//! 棋子圖片表
//!
//! 啟動時建立一次，之後唯讀，建立棋子時注入。圖片的解碼與縮放交給視窗端。

use crate::constants::PIECE_IMAGE_EXTENSION;
use crate::error::{LoadError, Result};
use crate::piece::{Color, PieceKind};
use std::path::Path;
use std::sync::Arc;
use strum::IntoEnumIterator;

/// 不透明的圖片代號（圖片 URI），複製成本低
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ImageHandle(Arc<str>);

impl ImageHandle {
    pub fn new(uri: impl Into<Arc<str>>) -> Self {
        Self(uri.into())
    }

    pub fn uri(&self) -> &str {
        &self.0
    }
}

/// (種類, 顏色) → 圖片，共 12 張
#[derive(Debug, Clone)]
pub struct AssetRegistry {
    // 依 PieceKind、Color 的宣告順序排列
    images: Vec<ImageHandle>,
}

impl AssetRegistry {
    /// 以命名函式建立圖片表
    pub fn from_fn<F, S>(mut uri_of: F) -> Self
    where
        F: FnMut(PieceKind, Color) -> S,
        S: Into<Arc<str>>,
    {
        let images = PieceKind::iter()
            .flat_map(|kind| Color::iter().map(move |color| (kind, color)))
            .map(|(kind, color)| ImageHandle::new(uri_of(kind, color)))
            .collect();
        Self { images }
    }

    /// 從目錄載入，每張圖片命名為 `<kind>_<color>.png`
    ///
    /// 任何一張不存在即回傳 `MissingAsset`。
    pub fn from_directory(dir: &Path) -> Result<Self> {
        let mut images = Vec::with_capacity(PieceKind::iter().len() * Color::iter().len());
        for kind in PieceKind::iter() {
            for color in Color::iter() {
                let path = dir.join(asset_file_name(kind, color));
                if !path.is_file() {
                    return Err(LoadError::MissingAsset {
                        kind,
                        color,
                        path: path.display().to_string(),
                    }
                    .into());
                }
                images.push(ImageHandle::new(format!("file://{}", path.display())));
            }
        }
        log::info!("已載入棋子圖片：{}", dir.display());
        Ok(Self { images })
    }

    pub fn get(&self, kind: PieceKind, color: Color) -> &ImageHandle {
        &self.images[kind as usize * Color::iter().len() + color as usize]
    }

    pub fn iter(&self) -> impl Iterator<Item = (PieceKind, Color, &ImageHandle)> {
        PieceKind::iter()
            .flat_map(|kind| Color::iter().map(move |color| (kind, color)))
            .map(|(kind, color)| (kind, color, self.get(kind, color)))
    }
}

/// 圖片檔名，例如 `rook_white.png`
pub fn asset_file_name(kind: PieceKind, color: Color) -> String {
    format!(
        "{}_{}.{}",
        kind.file_stem(),
        color.file_stem(),
        PIECE_IMAGE_EXTENSION
    )
}
