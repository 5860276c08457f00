//! Style Registry Module
//!
//! 意味的な役割（見出し、本文など）から具体的なスタイル（フォント、塗りつぶし、罫線）を
//! 引くためのレジストリ。目次シートとすべての詳細シートで同じインスタンスを共有し、
//! 同じ役割には常に同じスタイルが適用されます。

/// スタイルの役割
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleRole {
    /// 目次シートの文書タイトル
    DocumentTitle,
    /// 詳細シートのタイトル行
    Title,
    /// 表の見出し（濃色背景、白文字）
    Header,
    /// セクション見出し（薄い青の背景）
    SectionTitle,
    /// 画面要素表の見出し（薄い灰色の背景、罫線あり）
    ElementHeader,
    /// スクリーンショットのデバイスラベル（薄い灰色の背景、罫線なし）
    DeviceLabel,
    /// 本文
    Body,
    /// 罫線付きの表のセル
    TableBody,
}

/// フォント指定
#[derive(Debug, Clone, PartialEq)]
pub struct FontSpec {
    pub family: String,
    pub size: f64,
    pub bold: bool,
    /// 文字色（RGB）。`None`は既定色
    pub color: Option<u32>,
}

/// 罫線
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BorderStyle {
    None,
    Thin,
}

/// 役割に対応する具体的なスタイル
#[derive(Debug, Clone, PartialEq)]
pub struct StyleDescriptor {
    pub font: FontSpec,
    /// 背景色（RGB、単色塗りつぶし）
    pub fill: Option<u32>,
    pub border: BorderStyle,
}

/// 水平方向の配置
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HorizontalAlign {
    #[default]
    General,
    Left,
    Center,
}

/// 垂直方向の配置
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VerticalAlign {
    #[default]
    Bottom,
    Top,
    Center,
}

/// セルの配置と折り返し
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Alignment {
    pub horizontal: HorizontalAlign,
    pub vertical: VerticalAlign,
    pub wrap: bool,
}

impl Alignment {
    /// 中央揃え（水平・垂直）
    pub fn centered() -> Self {
        Self {
            horizontal: HorizontalAlign::Center,
            vertical: VerticalAlign::Center,
            wrap: false,
        }
    }

    /// 左揃え、垂直中央、折り返しあり
    pub fn left_wrapped() -> Self {
        Self {
            horizontal: HorizontalAlign::Left,
            vertical: VerticalAlign::Center,
            wrap: true,
        }
    }

    /// 上揃え、折り返しあり
    pub fn top_wrapped(horizontal: HorizontalAlign) -> Self {
        Self {
            horizontal,
            vertical: VerticalAlign::Top,
            wrap: true,
        }
    }
}

/// セルに適用される最終的なスタイル
#[derive(Debug, Clone, PartialEq)]
pub struct CellStyle {
    pub role: StyleRole,
    pub descriptor: StyleDescriptor,
    pub alignment: Alignment,
}

const HEADER_FILL: u32 = 0x4472C4;
const SECTION_FILL: u32 = 0xD9E1F2;
const ELEMENT_HEADER_FILL: u32 = 0xE7E6E6;
const WHITE: u32 = 0xFFFFFF;

/// 標準のフォントファミリー
pub const DEFAULT_FONT_FAMILY: &str = "メイリオ";

/// スタイルレジストリ
///
/// 状態を持たない純粋な参照テーブルです。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleRegistry {
    font_family: String,
}

impl Default for StyleRegistry {
    fn default() -> Self {
        Self::new(DEFAULT_FONT_FAMILY)
    }
}

impl StyleRegistry {
    /// 指定したフォントファミリーでレジストリを生成
    pub fn new(font_family: impl Into<String>) -> Self {
        Self {
            font_family: font_family.into(),
        }
    }

    /// フォントファミリー
    pub fn font_family(&self) -> &str {
        &self.font_family
    }

    /// 役割に対応するスタイルを取得
    pub fn get(&self, role: StyleRole) -> StyleDescriptor {
        let (size, bold, color, fill, border) = match role {
            StyleRole::DocumentTitle => (16.0, true, None, None, BorderStyle::None),
            StyleRole::Title => (14.0, true, None, None, BorderStyle::None),
            StyleRole::Header => (11.0, true, Some(WHITE), Some(HEADER_FILL), BorderStyle::Thin),
            StyleRole::SectionTitle => (11.0, true, None, Some(SECTION_FILL), BorderStyle::None),
            StyleRole::ElementHeader => {
                (10.0, true, None, Some(ELEMENT_HEADER_FILL), BorderStyle::Thin)
            }
            StyleRole::DeviceLabel => {
                (10.0, true, None, Some(ELEMENT_HEADER_FILL), BorderStyle::None)
            }
            StyleRole::Body => (10.0, false, None, None, BorderStyle::None),
            StyleRole::TableBody => (10.0, false, None, None, BorderStyle::Thin),
        };

        StyleDescriptor {
            font: FontSpec {
                family: self.font_family.clone(),
                size,
                bold,
                color,
            },
            fill,
            border,
        }
    }

    /// 役割と配置からセルスタイルを生成
    pub fn cell(&self, role: StyleRole, alignment: Alignment) -> CellStyle {
        CellStyle {
            role,
            descriptor: self.get(role),
            alignment,
        }
    }
}
