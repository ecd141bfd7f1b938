//! 棋盤設定（TOML）

use crate::alias::Pixel;
use crate::board::Board;
use crate::constants::{
    BOARD_SIZE, DARK_SQUARE_COLOR, DEFAULT_CELL_SIZE, HIGHLIGHT_COLOR, LIGHT_SQUARE_COLOR,
};
use crate::error::{LoadError, Result};
use crate::layout::Layout;
use crate::render::Rgb;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_ASSET_DIR: &str = "assets/pieces";
pub const DEFAULT_WINDOW_TITLE: &str = "西洋棋盤";

/// 棋盤顏色設定
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorConfig {
    pub light: Rgb,
    pub dark: Rgb,
    pub highlight: Rgb,
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            light: LIGHT_SQUARE_COLOR,
            dark: DARK_SQUARE_COLOR,
            highlight: HIGHLIGHT_COLOR,
        }
    }
}

/// 棋盤設定，所有欄位皆可省略
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub cell_size: Pixel,
    pub asset_dir: PathBuf,
    /// 未設定時使用標準開局
    pub layout_path: Option<PathBuf>,
    pub window_title: String,
    pub colors: ColorConfig,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            cell_size: DEFAULT_CELL_SIZE,
            asset_dir: PathBuf::from(DEFAULT_ASSET_DIR),
            layout_path: None,
            window_title: DEFAULT_WINDOW_TITLE.to_string(),
            colors: ColorConfig::default(),
        }
    }
}

impl BoardConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(|e| LoadError::DeserializeError {
            format: "TOML".to_string(),
            reason: e.to_string(),
        })?;
        if config.cell_size <= 0 {
            return Err(LoadError::ParseError(format!(
                "cell_size 必須為正數，得到 {}",
                config.cell_size
            ))
            .into());
        }
        if config.cell_size.checked_mul(BOARD_SIZE as Pixel).is_none() {
            return Err(LoadError::ParseError(format!(
                "cell_size 過大，棋盤邊長會溢位: {}",
                config.cell_size
            ))
            .into());
        }
        Ok(config)
    }

    /// 讀取設定檔，檔案不存在時使用預設值
    ///
    /// 檔案內的相對路徑以設定檔所在目錄為基準。
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::info!("找不到設定檔 {}，使用預設設定", path.display());
            return Ok(Self::default());
        }
        let content = read_file(path)?;
        let config = Self::from_toml_str(&content)?;
        let base = path.parent().unwrap_or(Path::new(""));
        Ok(config.relative_to(base))
    }

    /// 把相對路徑接到 `base` 之下，絕對路徑不變
    pub fn relative_to(mut self, base: &Path) -> Self {
        self.asset_dir = base.join(&self.asset_dir);
        self.layout_path = self.layout_path.map(|p| base.join(p));
        self
    }

    /// 讀取佈局檔，未設定時回傳標準開局
    pub fn load_layout(&self) -> Result<Layout> {
        match &self.layout_path {
            Some(path) => Layout::from_toml(&read_file(path)?),
            None => Ok(Layout::standard()),
        }
    }

    /// 依設定建立空棋盤
    pub fn build_board(&self) -> Board {
        Board::new(self.cell_size)
            .with_colors(self.colors.light, self.colors.dark)
            .with_highlight_color(self.colors.highlight)
    }
}

fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| {
        LoadError::Io {
            path: path.display().to_string(),
            reason: e.to_string(),
        }
        .into()
    })
}
