//! Error Types Module
//!
//! クレート全体で使用する構造化エラー型を定義するモジュール。
//! `thiserror`を使用して、エラーの自動変換とメッセージフォーマットを実現する。

use thiserror::Error;

/// screendocクレート全体で使用するエラー型
///
/// カタログの読み込み、設定の検証、ワークブックの生成と保存の途中で
/// 発生する致命的なエラーを統一的に扱います。
///
/// 個々のスクリーンショットの読み込み失敗はこの型では表現しません。
/// それらは[`ImageLoadError`]としてシート上のテキストに置き換えられ、
/// 生成処理は継続します。
///
/// # エラーの種類
///
/// - `Io`: I/O操作中に発生したエラー（カタログ読み込み失敗、出力先への書き込み失敗など）
/// - `Xlsx`: ワークブックの構築中に発生したエラー（rust_xlsxwriter由来）
/// - `CatalogFormat`: 画面カタログのJSONが不正な場合のエラー
/// - `DuplicateScreenId`: 画面IDが重複している場合のエラー
/// - `Config`: 設定の検証に失敗したエラー
///
/// # 使用例
///
/// ```rust,no_run
/// use screendoc::{ScreenCatalog, ScreenDocError};
///
/// fn load(path: &str) -> Result<ScreenCatalog, ScreenDocError> {
///     let catalog = ScreenCatalog::from_path(path)?;
///     Ok(catalog)
/// }
/// ```
#[derive(Error, Debug)]
pub enum ScreenDocError {
    /// I/O操作中に発生したエラー
    ///
    /// `#[from]`属性により、`std::io::Error`から自動的に変換されます。
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// ワークブックの構築・シリアライズ中に発生したエラー
    ///
    /// シート名の重複や不正なセル範囲など、rust_xlsxwriterが拒否した操作です。
    #[error("Failed to build workbook: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),

    /// 画面カタログのJSONが解析できないエラー
    #[error("Failed to parse screen catalog: {0}")]
    CatalogFormat(#[from] serde_json::Error),

    /// 画面IDの重複
    ///
    /// `first`と`second`はカタログ内の位置（0始まり）です。
    #[error("Duplicate screen id '{id}' at catalog entries {first} and {second}")]
    DuplicateScreenId {
        /// 重複した画面ID
        id: String,
        /// 最初に出現した位置
        first: usize,
        /// 重複して出現した位置
        second: usize,
    },

    /// 設定の検証に失敗したエラー
    ///
    /// `DocumentBuilder::build()`時、またはカタログの読み込み時に
    /// 無効な値が検出された場合に発生します。
    ///
    /// # 例
    ///
    /// ```rust,no_run
    /// use screendoc::{DocumentBuilder, ScreenDocError};
    ///
    /// let result = DocumentBuilder::new().with_devices(Vec::new()).build();
    ///
    /// match result {
    ///     Err(ScreenDocError::Config(msg)) => {
    ///         println!("設定エラー: {}", msg);
    ///     }
    ///     _ => {}
    /// }
    /// ```
    #[error("Configuration error: {0}")]
    Config(String),
}

/// スクリーンショット1枚の読み込みに失敗した理由
///
/// 画像配置の解決処理の内部でのみ発生し、呼び出し元には
/// 説明文字列として渡されます。
#[derive(Error, Debug)]
pub enum ImageLoadError {
    /// ファイルの読み込みに失敗
    #[error("failed to read file: {0}")]
    Read(#[from] std::io::Error),

    /// 画像としてデコードできない（破損、未対応形式など）
    #[error("failed to decode image: {0}")]
    Decode(#[from] image::ImageError),

    /// ワークブックに埋め込めない形式
    #[error("image cannot be embedded: {0}")]
    Embed(#[from] rust_xlsxwriter::XlsxError),

    /// 幅または高さが0
    #[error("image has zero size ({width}x{height})")]
    ZeroSize {
        /// 元画像の幅（ピクセル）
        width: u32,
        /// 元画像の高さ（ピクセル）
        height: u32,
    },
}
