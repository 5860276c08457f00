//! Types Module
//!
//! クレート全体で使用する共通データ型を定義するモジュール。

use serde::{Deserialize, Serialize};

/// 画面要素（名前と説明のペア）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScreenElement {
    /// 要素名
    pub name: String,

    /// 要素の説明
    pub description: String,
}

impl ScreenElement {
    /// 新しい画面要素を生成
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }
}

/// 1つのUI画面を表すカタログエントリ
///
/// `features`と`elements`は挿入順がそのまま表示順になります。
/// `elements`が`None`または空の場合、詳細シートに画面要素の表は出力されません。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Screen {
    /// 画面ID（カタログ内で一意、シート名の一部になる）
    pub id: String,

    /// 画面名
    pub name: String,

    /// 画面概要
    #[serde(default)]
    pub description: String,

    /// 主な機能
    #[serde(default)]
    pub features: Vec<String>,

    /// 画面要素
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub elements: Option<Vec<ScreenElement>>,
}

impl Screen {
    /// 新しい画面を生成（機能・要素なし）
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            features: Vec::new(),
            elements: None,
        }
    }

    /// 機能リストを設定
    pub fn with_features<I, S>(mut self, features: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.features = features.into_iter().map(Into::into).collect();
        self
    }

    /// 画面要素リストを設定
    pub fn with_elements(mut self, elements: Vec<ScreenElement>) -> Self {
        self.elements = Some(elements);
        self
    }

    /// 画面要素の表を出力すべきかを判定
    pub fn has_elements(&self) -> bool {
        self.elements.as_ref().is_some_and(|e| !e.is_empty())
    }

    /// 詳細シートのタイトル行（例: "01. メイン画面"）
    pub fn title(&self) -> String {
        format!("{}. {}", self.id, self.name)
    }

    /// サニタイズ前のシート名（例: "01_メイン画面"）
    pub fn raw_sheet_name(&self) -> String {
        format!("{}_{}", self.id, self.name)
    }
}

/// セル座標（0始まり）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellCoord {
    pub row: u32,
    pub col: u16,
}

impl CellCoord {
    /// 新しい座標を生成
    pub fn new(row: u32, col: u16) -> Self {
        Self { row, col }
    }

    /// A1形式の文字列に変換（例: (0, 0) -> "A1"）
    #[allow(clippy::wrong_self_convention)]
    pub fn to_a1_notation(&self) -> String {
        let col_str = Self::col_index_to_letter(self.col);
        format!("{}{}", col_str, self.row + 1)
    }

    /// 列インデックスを文字列に変換（0 -> "A", 25 -> "Z", 26 -> "AA"）
    fn col_index_to_letter(col: u16) -> String {
        let mut col = u32::from(col);
        let mut result = String::new();
        loop {
            let remainder = col % 26;
            result.insert(0, (b'A' + remainder as u8) as char);
            if col < 26 {
                break;
            }
            col = col / 26 - 1;
        }
        result
    }
}

/// 画像の表示サイズ（ピクセル）
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImageSize {
    pub width: f64,
    pub height: f64,
}
