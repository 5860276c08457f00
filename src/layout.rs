//! Layout Module
//!
//! 出力形式に依存しないシートの論理レイアウトを表すモジュール。
//! シートビルダーはここに上から順に行を積み、ライターがそれをXLSXへ書き出します。
//! 行番号・結合範囲・行の高さ・列幅・埋め込み画像をすべて保持するため、
//! XLSXを読み戻さずに構造を検証できます。

use crate::placement::PlacedImage;
use crate::style::CellStyle;
use crate::types::CellCoord;

/// セルの値
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Text(String),
    Number(f64),
}

impl CellValue {
    /// 表示文字列
    pub fn as_text(&self) -> String {
        match self {
            CellValue::Text(s) => s.clone(),
            CellValue::Number(n) => n.to_string(),
        }
    }
}

/// 1つのセル（`first_col != last_col`の場合は横方向に結合される）
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutCell {
    pub first_col: u16,
    pub last_col: u16,
    pub value: CellValue,
    pub style: CellStyle,
}

impl LayoutCell {
    /// 結合しない単一セル
    pub fn single(col: u16, value: CellValue, style: CellStyle) -> Self {
        Self {
            first_col: col,
            last_col: col,
            value,
            style,
        }
    }

    /// 横方向に結合されたセル
    pub fn spanning(first_col: u16, last_col: u16, value: CellValue, style: CellStyle) -> Self {
        Self {
            first_col,
            last_col,
            value,
            style,
        }
    }

    /// 結合セルかどうか
    pub fn is_merged(&self) -> bool {
        self.first_col != self.last_col
    }
}

/// 行の種類
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RowKind {
    /// シートタイトル
    Title,
    /// 作成日
    Timestamp,
    /// セクション間の空行
    Spacer,
    /// セクション見出し
    SectionHeader,
    /// 折り返しのある本文
    Text,
    /// 機能の箇条書き
    Bullet,
    /// 表の見出し行
    TableHeader,
    /// 表のデータ行
    TableRow,
    /// デバイスラベル
    DeviceLabel,
    /// 画像
    Image,
    /// 画像の代わりに表示する文言
    Placeholder,
}

/// 1行分のレイアウト
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutRow {
    /// 行番号（0始まり）
    pub row: u32,
    pub kind: RowKind,
    pub cells: Vec<LayoutCell>,
    /// 行の高さ（ポイント）。`None`は既定の高さ
    pub height: Option<f64>,
    /// 埋め込む画像（A列に配置）
    pub image: Option<PlacedImage>,
}

impl LayoutRow {
    /// 最初のセルの表示文字列
    pub fn first_text(&self) -> Option<String> {
        self.cells.first().map(|c| c.value.as_text())
    }
}

/// 1シート分のレイアウト
#[derive(Debug, Clone, PartialEq)]
pub struct SheetLayout {
    name: String,
    column_widths: Vec<f64>,
    rows: Vec<LayoutRow>,
    next_row: u32,
}

impl SheetLayout {
    /// シート名と列幅を指定して空のレイアウトを生成
    pub fn new(name: impl Into<String>, column_widths: Vec<f64>) -> Self {
        Self {
            name: name.into(),
            column_widths,
            rows: Vec::new(),
            next_row: 0,
        }
    }

    /// シート名
    pub fn name(&self) -> &str {
        &self.name
    }

    /// 列幅（文字数単位）
    pub fn column_widths(&self) -> &[f64] {
        &self.column_widths
    }

    /// 使用する列数
    pub fn column_count(&self) -> u16 {
        self.column_widths.len() as u16
    }

    /// 行の一覧（行番号順）
    pub fn rows(&self) -> &[LayoutRow] {
        &self.rows
    }

    /// 使用した行数（空行を含む）
    pub fn row_count(&self) -> u32 {
        self.next_row
    }

    /// 指定した種類の行
    pub fn rows_of_kind(&self, kind: RowKind) -> impl Iterator<Item = &LayoutRow> {
        self.rows.iter().filter(move |r| r.kind == kind)
    }

    /// 指定した行番号の行
    pub fn row(&self, row: u32) -> Option<&LayoutRow> {
        self.rows.iter().find(|r| r.row == row)
    }

    /// 指定した座標のセル（結合範囲を考慮）
    pub fn cell_at(&self, coord: CellCoord) -> Option<&LayoutCell> {
        self.row(coord.row)?
            .cells
            .iter()
            .find(|c| c.first_col <= coord.col && coord.col <= c.last_col)
    }

    /// 埋め込まれる画像の数
    pub fn image_count(&self) -> usize {
        self.rows.iter().filter(|r| r.image.is_some()).count()
    }

    /// 行を追加し、その行番号を返す
    pub fn push_row(&mut self, kind: RowKind, cells: Vec<LayoutCell>, height: Option<f64>) -> u32 {
        let row = self.next_row;
        self.rows.push(LayoutRow {
            row,
            kind,
            cells,
            height,
            image: None,
        });
        self.next_row += 1;
        row
    }

    /// 画像行を追加し、その行番号を返す
    pub fn push_image(&mut self, image: PlacedImage) -> u32 {
        let row = self.next_row;
        self.rows.push(LayoutRow {
            row,
            kind: RowKind::Image,
            cells: Vec::new(),
            height: Some(image.row_height),
            image: Some(image),
        });
        self.next_row += 1;
        row
    }

    /// 空行を追加
    pub fn push_spacer(&mut self) -> u32 {
        self.push_row(RowKind::Spacer, Vec::new(), None)
    }

    /// 行の種類の並び
    pub fn kinds(&self) -> Vec<RowKind> {
        self.rows.iter().map(|r| r.kind).collect()
    }
}

/// ワークブック全体のレイアウト（目次シート + 詳細シート）
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentLayout {
    pub sheets: Vec<SheetLayout>,
}

impl DocumentLayout {
    /// シート名の一覧（ワークブック内の順序）
    pub fn sheet_names(&self) -> Vec<&str> {
        self.sheets.iter().map(SheetLayout::name).collect()
    }

    /// シート名で検索
    pub fn sheet(&self, name: &str) -> Option<&SheetLayout> {
        self.sheets.iter().find(|s| s.name() == name)
    }

    /// 埋め込まれる画像の総数
    pub fn image_count(&self) -> usize {
        self.sheets.iter().map(SheetLayout::image_count).sum()
    }
}
