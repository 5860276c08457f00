//! Builder Module
//!
//! Fluent Builder APIを提供し、`DesignDocument`インスタンスを段階的に構築する。

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use log::info;

use crate::api::{DateFormat, DevicePreset, SheetLabels};
use crate::catalog::ScreenCatalog;
use crate::detail_sheet::DetailSheetBuilder;
use crate::error::ScreenDocError;
use crate::index_sheet::IndexSheetBuilder;
use crate::layout::DocumentLayout;
use crate::placement::ImageResolver;
use crate::sheet_name::SheetNameAllocator;
use crate::style::{StyleRegistry, DEFAULT_FONT_FAMILY};

/// 標準の文書タイトル
pub const DEFAULT_DOCUMENT_TITLE: &str = "医療機器管理システム 画面設計書";

/// 標準のスクリーンショットディレクトリ
pub const DEFAULT_SCREENSHOT_DIR: &str = "docs/screenshots";

/// 生成処理の設定を保持する内部構造体
#[derive(Debug, Clone)]
pub(crate) struct GenerationConfig {
    /// 画面カタログ（Noneの場合は埋め込みカタログ）
    pub catalog: Option<ScreenCatalog>,

    /// スクリーンショットのディレクトリ
    pub screenshot_dir: PathBuf,

    /// デバイスプリセット
    pub devices: Vec<DevicePreset>,

    /// 作成日の形式
    pub date_format: DateFormat,

    /// 作成日（Noneの場合はビルド時のローカル日付）
    pub generated_on: Option<NaiveDate>,

    /// 目次シートの文書タイトル
    pub document_title: String,

    /// 固定文言
    pub labels: SheetLabels,

    /// フォントファミリー
    pub font_family: String,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            catalog: None,
            screenshot_dir: PathBuf::from(DEFAULT_SCREENSHOT_DIR),
            devices: DevicePreset::defaults(),
            date_format: DateFormat::Japanese,
            generated_on: None,
            document_title: DEFAULT_DOCUMENT_TITLE.to_string(),
            labels: SheetLabels::default(),
            font_family: DEFAULT_FONT_FAMILY.to_string(),
        }
    }
}

/// Fluent Builder APIを提供する構造体
///
/// すべての設定項目にデフォルト値が設定されており、必要な設定のみをオーバーライドできます。
///
/// # 使用例
///
/// ```rust,no_run
/// use screendoc::DocumentBuilder;
///
/// # fn main() -> Result<(), screendoc::ScreenDocError> {
/// let document = DocumentBuilder::new()
///     .with_screenshot_dir("docs/screenshots")
///     .build()?;
/// document.write_to("docs/画面設計書.xlsx")?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Default)]
pub struct DocumentBuilder {
    /// 内部設定（構築中）
    config: GenerationConfig,
}

impl DocumentBuilder {
    /// デフォルト設定を持つビルダーインスタンスを生成する
    ///
    /// # デフォルト設定
    ///
    /// - カタログ: 埋め込みの12画面
    /// - スクリーンショット: `docs/screenshots`
    /// - デバイス: デスクトップ、タブレット、モバイル
    /// - 日付形式: `%Y年%m月%d日`
    /// - フォント: メイリオ
    pub fn new() -> Self {
        Self {
            config: GenerationConfig::default(),
        }
    }

    /// 画面カタログを指定する
    pub fn with_catalog(mut self, catalog: ScreenCatalog) -> Self {
        self.config.catalog = Some(catalog);
        self
    }

    /// スクリーンショットのディレクトリを指定する
    pub fn with_screenshot_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config.screenshot_dir = dir.into();
        self
    }

    /// デバイスプリセットを指定する（並び順が表示順になる）
    pub fn with_devices(mut self, devices: Vec<DevicePreset>) -> Self {
        self.config.devices = devices;
        self
    }

    /// 作成日の形式を指定する
    pub fn with_date_format(mut self, format: DateFormat) -> Self {
        self.config.date_format = format;
        self
    }

    /// 作成日を固定する
    ///
    /// 同じカタログから同じ内容のワークブックを再生成したい場合に使用します。
    pub fn with_generated_on(mut self, date: NaiveDate) -> Self {
        self.config.generated_on = Some(date);
        self
    }

    /// 目次シートの文書タイトルを指定する
    pub fn with_document_title(mut self, title: impl Into<String>) -> Self {
        self.config.document_title = title.into();
        self
    }

    /// 固定文言を指定する
    pub fn with_labels(mut self, labels: SheetLabels) -> Self {
        self.config.labels = labels;
        self
    }

    /// フォントファミリーを指定する
    pub fn with_font_family(mut self, family: impl Into<String>) -> Self {
        self.config.font_family = family.into();
        self
    }

    /// 設定を検証し、`DesignDocument`インスタンスを生成する
    ///
    /// # 発生し得るエラー
    ///
    /// * `ScreenDocError::Config(String)`: 設定の検証に失敗した場合
    ///   * デバイスプリセットが空、キーが空または重複、高さが正の有限値でない
    ///   * カスタム日付形式が空の文字列を生成する
    ///   * 文書タイトルまたはフォントファミリーが空
    /// * 埋め込みカタログの読み込みに失敗した場合はそのエラー
    pub fn build(self) -> Result<DesignDocument, ScreenDocError> {
        let mut config = self.config;

        // 1. デバイスプリセットの検証
        if config.devices.is_empty() {
            return Err(ScreenDocError::Config(
                "At least one device preset is required".to_string(),
            ));
        }
        let mut keys = HashSet::new();
        for device in &config.devices {
            if device.key.trim().is_empty() {
                return Err(ScreenDocError::Config(
                    "Device preset key must not be empty".to_string(),
                ));
            }
            if !keys.insert(device.key.as_str()) {
                return Err(ScreenDocError::Config(format!(
                    "Duplicate device preset key: '{}'",
                    device.key
                )));
            }
            if !device.target_height.is_finite() || device.target_height <= 0.0 {
                return Err(ScreenDocError::Config(format!(
                    "Invalid target height for device '{}': {}",
                    device.key, device.target_height
                )));
            }
        }

        // 2. 日付形式の検証
        if let DateFormat::Custom(ref format_str) = config.date_format {
            let test_date = NaiveDate::from_ymd_opt(2025, 1, 1)
                .ok_or_else(|| ScreenDocError::Config("Failed to create test date".to_string()))?;
            let mut formatted = String::new();
            if std::fmt::write(&mut formatted, format_args!("{}", test_date.format(format_str)))
                .is_err()
                || formatted.is_empty()
            {
                return Err(ScreenDocError::Config(format!(
                    "Invalid date format string: '{}'",
                    format_str
                )));
            }
        }

        // 3. 文言の検証
        if config.document_title.trim().is_empty() {
            return Err(ScreenDocError::Config(
                "Document title must not be empty".to_string(),
            ));
        }
        if config.font_family.trim().is_empty() {
            return Err(ScreenDocError::Config(
                "Font family must not be empty".to_string(),
            ));
        }

        // 4. カタログの確定
        let catalog = match config.catalog.take() {
            Some(catalog) => catalog,
            None => ScreenCatalog::embedded()?,
        };
        let generated_on = config
            .generated_on
            .unwrap_or_else(|| chrono::Local::now().date_naive());

        Ok(DesignDocument {
            styles: StyleRegistry::new(config.font_family.clone()),
            resolver: ImageResolver::new(config.screenshot_dir.clone()),
            catalog,
            generated_on,
            config,
        })
    }
}

/// 画面設計書の生成処理のファサード
///
/// カタログ、スタイル、画像配置の解決を保持し、
/// 目次シートと詳細シートを順に構築してワークブックを出力します。
#[derive(Debug)]
pub struct DesignDocument {
    config: GenerationConfig,
    catalog: ScreenCatalog,
    styles: StyleRegistry,
    resolver: ImageResolver,
    generated_on: NaiveDate,
}

impl DesignDocument {
    /// 画面カタログ
    pub fn catalog(&self) -> &ScreenCatalog {
        &self.catalog
    }

    /// スタイルレジストリ
    pub fn styles(&self) -> &StyleRegistry {
        &self.styles
    }

    /// 作成日
    pub fn generated_on(&self) -> NaiveDate {
        self.generated_on
    }

    /// スクリーンショットのディレクトリ
    pub fn screenshot_dir(&self) -> &Path {
        self.resolver.screenshot_dir()
    }

    /// 全シートのレイアウトを構築する
    ///
    /// 目次シートが先頭、続いてカタログ順に詳細シートが並びます。
    /// シート名は[`crate::sanitize_sheet_name`]の規則で決まります。
    pub fn layout(&self) -> DocumentLayout {
        let labels = &self.config.labels;
        let mut names = SheetNameAllocator::new();
        let mut sheets = Vec::with_capacity(self.catalog.len() + 1);

        info!("Building index sheet");
        let created_on = self.config.date_format.format(self.generated_on);
        let index_name = names.allocate(&labels.index_sheet);
        sheets.push(IndexSheetBuilder::new(&self.styles, labels).build(
            &index_name,
            &self.config.document_title,
            &created_on,
            &self.catalog,
        ));

        let detail = DetailSheetBuilder::new(
            &self.styles,
            labels,
            &self.config.devices,
            &self.resolver,
        );
        for screen in &self.catalog {
            info!("Building sheet for {}", screen.title());
            let sheet_name = names.allocate(&screen.raw_sheet_name());
            sheets.push(detail.build(screen, &sheet_name));
        }

        DocumentLayout { sheets }
    }

    /// ワークブックをメモリ上に生成する
    pub fn to_buffer(&self) -> Result<Vec<u8>, ScreenDocError> {
        let layout = self.layout();
        let mut workbook = crate::writer::build_workbook(&layout)?;
        Ok(workbook.save_to_buffer()?)
    }

    /// ワークブックを生成して出力先に保存する
    ///
    /// 出力先の既存ファイルは上書きされます。書き込みは一時ファイル経由で行われ、
    /// 失敗した場合に出力先が途中までの内容になることはありません。
    pub fn write_to(&self, path: impl AsRef<Path>) -> Result<(), ScreenDocError> {
        let path = path.as_ref();
        let bytes = self.to_buffer()?;
        info!("Saving {}", path.display());
        crate::writer::save_atomically(&bytes, path)
    }
}
