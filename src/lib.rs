//! screendoc - Screen design document generator
//!
//! 画面カタログ（画面ID、画面名、概要、主な機能、画面要素）とデバイスごとの
//! スクリーンショットから、目次シートと画面ごとの詳細シートを持つ
//! XLSX形式の画面設計書を生成します。
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use screendoc::DocumentBuilder;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // 埋め込みカタログと docs/screenshots の画像から生成
//!     let document = DocumentBuilder::new().build()?;
//!     document.write_to("docs/画面設計書.xlsx")?;
//!     Ok(())
//! }
//! ```
//!
//! # Custom Catalog
//!
//! ```rust,no_run
//! use chrono::NaiveDate;
//! use screendoc::{DateFormat, DocumentBuilder, ScreenCatalog};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let catalog = ScreenCatalog::from_path("screens.json")?;
//!
//!     let document = DocumentBuilder::new()
//!         .with_catalog(catalog)
//!         .with_screenshot_dir("captures")
//!         .with_date_format(DateFormat::Iso8601)
//!         .with_generated_on(NaiveDate::from_ymd_opt(2025, 11, 20).unwrap())
//!         .build()?;
//!
//!     // 構造だけを確認する
//!     let layout = document.layout();
//!     for name in layout.sheet_names() {
//!         println!("{}", name);
//!     }
//!
//!     // メモリ上に生成する
//!     let bytes = document.to_buffer()?;
//!     println!("{} bytes", bytes.len());
//!     Ok(())
//! }
//! ```
//!
//! スクリーンショットが見つからない、または読み込めない場合も生成は中断されず、
//! 該当する行に説明文が出力されます。

mod api;
mod builder;
mod catalog;
mod detail_sheet;
mod error;
mod index_sheet;
mod layout;
mod placement;
mod sheet_name;
mod style;
mod types;
mod writer;

// 公開API
pub use api::{DateFormat, DevicePreset, SheetLabels};
pub use builder::{
    DesignDocument, DocumentBuilder, DEFAULT_DOCUMENT_TITLE, DEFAULT_SCREENSHOT_DIR,
};
pub use catalog::ScreenCatalog;
pub use detail_sheet::{
    detail_column_widths, DetailSheetBuilder, DETAIL_COLUMN_COUNT, ELEMENT_ROW_HEIGHT,
    OVERVIEW_ROW_HEIGHT,
};
pub use error::{ImageLoadError, ScreenDocError};
pub use index_sheet::{IndexSheetBuilder, INDEX_COLUMN_WIDTHS};
pub use layout::{CellValue, DocumentLayout, LayoutCell, LayoutRow, RowKind, SheetLayout};
pub use placement::{
    row_height_for, scaled_size, ImageOutcome, ImageResolver, PlacedImage,
    LAYOUT_UNIT_TO_PIXEL, PIXEL_TO_POINT,
};
pub use sheet_name::{sanitize_sheet_name, validate_sheet_name, MAX_SHEET_NAME_CHARS};
pub use style::{
    Alignment, BorderStyle, CellStyle, FontSpec, HorizontalAlign, StyleDescriptor,
    StyleRegistry, StyleRole, VerticalAlign,
};
pub use types::{CellCoord, ImageSize, Screen, ScreenElement};
