//! Image Placement Module
//!
//! 画面IDと画面名、デバイスキーからスクリーンショットのファイルを探し、
//! アスペクト比を保ったまま表示サイズを計算するモジュール。
//!
//! ファイルが存在しない、または読み込めない場合もエラーにはせず、
//! [`ImageOutcome`]の3つの結果のいずれかとして返します。
//! キャッシュやリトライは行わず、同じ入力に対しては（ファイルシステムが変わらない限り）
//! 常に同じ結果になります。

use std::path::{Path, PathBuf};

use log::{debug, warn};

use crate::api::DevicePreset;
use crate::error::ImageLoadError;
use crate::types::{ImageSize, Screen};

/// レイアウト単位からピクセルへの換算係数
///
/// レイアウト単位はシートの標準行高さ（15ポイント = 20ピクセル）を基準に
/// 設計されたもので、1単位を15ピクセルとして扱います。
/// デスクトップのプリセット（70）は1050ピクセルの高さになります。
pub const LAYOUT_UNIT_TO_PIXEL: f64 = 15.0;

/// ピクセルからポイントへの換算除数
///
/// 96 DPIの画面では1ポイント = 96/72 ≒ 1.33ピクセルです。
/// 画像を置く行の高さ（ポイント）は、表示高さ（ピクセル）をこの値で割って求めます。
pub const PIXEL_TO_POINT: f64 = 1.33;

/// スクリーンショットの拡張子
const SCREENSHOT_EXTENSION: &str = "png";

/// 埋め込み可能な画像
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedImage {
    /// 読み込んだファイルのパス
    pub path: PathBuf,

    /// 元画像のサイズ（ピクセル）
    pub original: (u32, u32),

    /// 表示サイズ（ピクセル）
    pub display: ImageSize,

    /// 画像を置く行の高さ（ポイント）
    pub row_height: f64,

    /// 画像ファイルの内容
    pub bytes: Vec<u8>,
}

/// 画像配置の解決結果
#[derive(Debug, Clone, PartialEq)]
pub enum ImageOutcome {
    /// 画像を読み込めた
    Found(PlacedImage),

    /// ファイルが存在しない
    NotFound {
        path: PathBuf,
    },

    /// ファイルを読み込めない、または存在を確認できない
    LoadError {
        path: PathBuf,
        reason: String,
    },
}

impl ImageOutcome {
    /// 画像が埋め込まれるかを判定
    pub fn is_found(&self) -> bool {
        matches!(self, ImageOutcome::Found(_))
    }
}

/// 表示サイズを計算する
///
/// 高さをレイアウト単位の`target_height`に固定し、幅は元画像の縦横比から求めます。
///
/// * 表示高さ = `target_height * LAYOUT_UNIT_TO_PIXEL`
/// * 表示幅 = 表示高さ × `original_width / original_height`
pub fn scaled_size(original_width: u32, original_height: u32, target_height: f64) -> ImageSize {
    let height = target_height * LAYOUT_UNIT_TO_PIXEL;
    let aspect_ratio = f64::from(original_width) / f64::from(original_height);
    ImageSize {
        width: height * aspect_ratio,
        height,
    }
}

/// 画像を置く行の高さ（ポイント）を計算する
pub fn row_height_for(display_height: f64) -> f64 {
    display_height / PIXEL_TO_POINT
}

/// スクリーンショットの配置を解決する
#[derive(Debug, Clone)]
pub struct ImageResolver {
    screenshot_dir: PathBuf,
}

impl ImageResolver {
    /// スクリーンショットのディレクトリを指定して生成
    pub fn new(screenshot_dir: impl Into<PathBuf>) -> Self {
        Self {
            screenshot_dir: screenshot_dir.into(),
        }
    }

    /// スクリーンショットのディレクトリ
    pub fn screenshot_dir(&self) -> &Path {
        &self.screenshot_dir
    }

    /// スクリーンショットのパス（`{id}_{name}_{device}.png`）
    pub fn screenshot_path(&self, screen: &Screen, device_key: &str) -> PathBuf {
        self.screenshot_dir.join(format!(
            "{}_{}_{}.{}",
            screen.id, screen.name, device_key, SCREENSHOT_EXTENSION
        ))
    }

    /// 画面とデバイスの組み合わせに対する画像配置を解決する
    pub fn resolve(&self, screen: &Screen, device: &DevicePreset) -> ImageOutcome {
        let path = self.screenshot_path(screen, &device.key);
        debug!("Resolving screenshot {}", path.display());

        match path.try_exists() {
            Ok(true) => {}
            Ok(false) => {
                debug!("Screenshot not found: {}", path.display());
                return ImageOutcome::NotFound { path };
            }
            Err(e) => {
                // 権限不足などで存在を確認できない
                warn!("Cannot access screenshot {}: {}", path.display(), e);
                return ImageOutcome::LoadError {
                    path,
                    reason: e.to_string(),
                };
            }
        }

        match load_image(&path, device.target_height) {
            Ok(placed) => ImageOutcome::Found(placed),
            Err(e) => {
                warn!("Failed to load screenshot {}: {}", path.display(), e);
                ImageOutcome::LoadError {
                    path,
                    reason: e.to_string(),
                }
            }
        }
    }
}

fn load_image(path: &Path, target_height: f64) -> Result<PlacedImage, ImageLoadError> {
    let bytes = std::fs::read(path)?;

    // 完全にデコードして破損を検出する
    let decoded = image::load_from_memory(&bytes)?;
    let (width, height) = (decoded.width(), decoded.height());
    if width == 0 || height == 0 {
        return Err(ImageLoadError::ZeroSize { width, height });
    }

    // ワークブックに埋め込めない形式はここで弾く
    rust_xlsxwriter::Image::new_from_buffer(&bytes)?;

    let display = scaled_size(width, height, target_height);
    Ok(PlacedImage {
        path: path.to_path_buf(),
        original: (width, height),
        display,
        row_height: row_height_for(display.height),
        bytes,
    })
}
