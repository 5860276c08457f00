//! Screen Catalog Module
//!
//! 画面定義の一覧（カタログ）を宣言的なJSONから読み込み、検証するモジュール。
//! 読み込み後のカタログは不変で、変更APIを持ちません。

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;

use crate::error::ScreenDocError;
use crate::types::Screen;

/// コンパイル時に埋め込まれる標準カタログ
const EMBEDDED_CATALOG: &str = include_str!("../catalog/screens.json");

/// カタログJSONのトップレベル構造
#[derive(Debug, Deserialize)]
struct CatalogFile {
    screens: Vec<Screen>,
}

/// 検証済みの画面カタログ
///
/// 画面の並びはカタログ上の順序を保持します。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenCatalog {
    screens: Vec<Screen>,
}

impl ScreenCatalog {
    /// 画面のリストからカタログを生成し、検証する
    ///
    /// # 発生し得るエラー
    ///
    /// * `ScreenDocError::DuplicateScreenId`: 画面IDが重複している場合
    /// * `ScreenDocError::Config`: 画面IDまたは画面名が空の場合
    pub fn new(screens: Vec<Screen>) -> Result<Self, ScreenDocError> {
        Self::validate(&screens)?;
        Ok(Self { screens })
    }

    /// JSON文字列からカタログを読み込む
    ///
    /// ```rust
    /// use screendoc::ScreenCatalog;
    ///
    /// # fn main() -> Result<(), screendoc::ScreenDocError> {
    /// let catalog = ScreenCatalog::from_json_str(
    ///     r#"{"screens": [{"id": "01", "name": "Main", "description": "d", "features": ["f1"]}]}"#,
    /// )?;
    /// assert_eq!(catalog.len(), 1);
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_json_str(json: &str) -> Result<Self, ScreenDocError> {
        let file: CatalogFile = serde_json::from_str(json)?;
        Self::new(file.screens)
    }

    /// JSONファイルからカタログを読み込む
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ScreenDocError> {
        let json = std::fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&json)
    }

    /// 埋め込みの標準カタログ（医療機器管理システムの12画面）
    pub fn embedded() -> Result<Self, ScreenDocError> {
        Self::from_json_str(EMBEDDED_CATALOG)
    }

    /// 画面をカタログ順に列挙
    pub fn iter(&self) -> std::slice::Iter<'_, Screen> {
        self.screens.iter()
    }

    /// 画面のスライス
    pub fn screens(&self) -> &[Screen] {
        &self.screens
    }

    /// 画面数
    pub fn len(&self) -> usize {
        self.screens.len()
    }

    /// 画面が1つもないか
    pub fn is_empty(&self) -> bool {
        self.screens.is_empty()
    }

    /// 画面IDで検索
    pub fn get(&self, id: &str) -> Option<&Screen> {
        self.screens.iter().find(|s| s.id == id)
    }

    fn validate(screens: &[Screen]) -> Result<(), ScreenDocError> {
        let mut seen: HashMap<&str, usize> = HashMap::with_capacity(screens.len());

        for (index, screen) in screens.iter().enumerate() {
            if screen.id.trim().is_empty() {
                return Err(ScreenDocError::Config(format!(
                    "Screen at catalog entry {} has an empty id",
                    index
                )));
            }

            if screen.name.trim().is_empty() {
                return Err(ScreenDocError::Config(format!(
                    "Screen '{}' has an empty name",
                    screen.id
                )));
            }

            if let Some(&first) = seen.get(screen.id.as_str()) {
                return Err(ScreenDocError::DuplicateScreenId {
                    id: screen.id.clone(),
                    first,
                    second: index,
                });
            }
            seen.insert(screen.id.as_str(), index);
        }

        Ok(())
    }
}

impl<'a> IntoIterator for &'a ScreenCatalog {
    type Item = &'a Screen;
    type IntoIter = std::slice::Iter<'a, Screen>;

    fn into_iter(self) -> Self::IntoIter {
        self.screens.iter()
    }
}
