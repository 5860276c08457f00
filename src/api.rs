//! Public API Types
//!
//! 公開APIで使用する設定型を定義するモジュール。

use chrono::NaiveDate;

/// デバイスプリセット
///
/// スクリーンショットを撮影したビューポートと、シート上での表示高さを表します。
/// プリセットの並び順がそのまま詳細シート上の表示順になります。
#[derive(Debug, Clone, PartialEq)]
pub struct DevicePreset {
    /// ファイル名に使われるデバイスキー（例: `desktop`）
    pub key: String,

    /// シートに表示するラベル（例: `デスクトップ (1920x1080)`）
    pub label: String,

    /// 表示高さ（レイアウト単位）
    ///
    /// ピクセルへの換算は[`crate::LAYOUT_UNIT_TO_PIXEL`]を参照してください。
    pub target_height: f64,
}

impl DevicePreset {
    /// 新しいプリセットを生成
    pub fn new(key: impl Into<String>, label: impl Into<String>, target_height: f64) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            target_height,
        }
    }

    /// 標準のプリセット（デスクトップ、タブレット、モバイル）
    ///
    /// | key | label | target_height |
    /// | --- | ----- | ------------- |
    /// | desktop | デスクトップ (1920x1080) | 70 |
    /// | tablet | タブレット (768x1024) | 50 |
    /// | mobile | モバイル (375x667) | 35 |
    pub fn defaults() -> Vec<DevicePreset> {
        vec![
            DevicePreset::new("desktop", "デスクトップ (1920x1080)", 70.0),
            DevicePreset::new("tablet", "タブレット (768x1024)", 50.0),
            DevicePreset::new("mobile", "モバイル (375x667)", 35.0),
        ]
    }
}

/// 作成日の出力形式
///
/// 目次シートの作成日行で使用します。
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[non_exhaustive]
pub enum DateFormat {
    /// 日本語の年月日形式（デフォルト）
    ///
    /// 例: `2025年11月20日`
    #[default]
    Japanese,

    /// ISO 8601形式（YYYY-MM-DD）
    ///
    /// 例: `2025-11-20`
    Iso8601,

    /// カスタム形式（chrono互換フォーマット文字列）
    ///
    /// # 使用例
    ///
    /// ```rust,no_run
    /// use screendoc::{DocumentBuilder, DateFormat};
    ///
    /// # fn main() -> Result<(), screendoc::ScreenDocError> {
    /// let document = DocumentBuilder::new()
    ///     .with_date_format(DateFormat::Custom("%Y/%m/%d".to_string()))
    ///     .build()?;
    /// # Ok(())
    /// # }
    /// ```
    Custom(String),
}

impl DateFormat {
    /// chronoのフォーマット文字列
    pub fn pattern(&self) -> &str {
        match self {
            DateFormat::Japanese => "%Y年%m月%d日",
            DateFormat::Iso8601 => "%Y-%m-%d",
            DateFormat::Custom(pattern) => pattern,
        }
    }

    /// 日付を文字列に変換
    pub fn format(&self, date: NaiveDate) -> String {
        date.format(self.pattern()).to_string()
    }
}

/// シート上に出力する固定文言
///
/// デフォルトは日本語の画面設計書の文言です。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetLabels {
    /// 目次シートのシート名
    pub index_sheet: String,
    /// 作成日行の接頭辞
    pub created_on: String,
    /// 目次の列見出し（No.、画面ID、画面名、説明）
    pub index_headers: [String; 4],
    /// 「画面概要」セクション
    pub overview: String,
    /// 「主な機能」セクション
    pub features: String,
    /// 「画面要素」セクション
    pub elements: String,
    /// 画面要素表の列見出し（要素名、説明）
    pub element_headers: [String; 2],
    /// 「スクリーンショット」セクション
    pub screenshots: String,
    /// 機能行の行頭記号
    pub bullet: String,
    /// 画像ファイルが存在しない場合の文言
    pub image_not_found: String,
    /// 画像の読み込みに失敗した場合の接頭辞
    pub image_load_error: String,
}

impl Default for SheetLabels {
    fn default() -> Self {
        Self {
            index_sheet: "目次".to_string(),
            created_on: "作成日: ".to_string(),
            index_headers: [
                "No.".to_string(),
                "画面ID".to_string(),
                "画面名".to_string(),
                "説明".to_string(),
            ],
            overview: "画面概要".to_string(),
            features: "主な機能".to_string(),
            elements: "画面要素".to_string(),
            element_headers: ["要素名".to_string(), "説明".to_string()],
            screenshots: "スクリーンショット".to_string(),
            bullet: "• ".to_string(),
            image_not_found: "画像が見つかりません".to_string(),
            image_load_error: "画像読み込みエラー: ".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_devices_order() {
        let devices = DevicePreset::defaults();
        let keys: Vec<&str> = devices.iter().map(|d| d.key.as_str()).collect();
        assert_eq!(keys, vec!["desktop", "tablet", "mobile"]);

        // 高さは降順
        assert!(devices
            .windows(2)
            .all(|w| w[0].target_height > w[1].target_height));
    }

    #[test]
    fn test_date_format_japanese() {
        let date = NaiveDate::from_ymd_opt(2025, 1, 5).unwrap();
        assert_eq!(DateFormat::Japanese.format(date), "2025年01月05日");
        assert_eq!(DateFormat::default(), DateFormat::Japanese);
    }

    #[test]
    fn test_date_format_iso_and_custom() {
        let date = NaiveDate::from_ymd_opt(2025, 11, 20).unwrap();
        assert_eq!(DateFormat::Iso8601.format(date), "2025-11-20");
        assert_eq!(
            DateFormat::Custom("%d/%m/%Y".to_string()).format(date),
            "20/11/2025"
        );
    }
}
