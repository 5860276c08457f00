//! Index Sheet Module
//!
//! 画面カタログ全体を一覧表として描画する目次シートのビルダー。

use crate::api::SheetLabels;
use crate::catalog::ScreenCatalog;
use crate::layout::{CellValue, LayoutCell, RowKind, SheetLayout};
use crate::style::{Alignment, StyleRegistry, StyleRole};

/// 目次シートの列幅（No.、画面ID、画面名、説明）
pub const INDEX_COLUMN_WIDTHS: [f64; 4] = [6.0, 10.0, 25.0, 60.0];

const LAST_COL: u16 = INDEX_COLUMN_WIDTHS.len() as u16 - 1;

/// 目次シートのビルダー
#[derive(Debug, Clone, Copy)]
pub struct IndexSheetBuilder<'a> {
    styles: &'a StyleRegistry,
    labels: &'a SheetLabels,
}

impl<'a> IndexSheetBuilder<'a> {
    /// スタイルと文言を指定して生成
    pub fn new(styles: &'a StyleRegistry, labels: &'a SheetLabels) -> Self {
        Self { styles, labels }
    }

    /// 目次シートのレイアウトを構築する
    ///
    /// 1. 文書タイトル（A:D結合）
    /// 2. 作成日（A:D結合）
    /// 3. 空行
    /// 4. 見出し行（No.、画面ID、画面名、説明）
    /// 5. カタログ順に1画面1行
    ///
    /// カタログが空の場合は見出し行までのシートになります。
    pub fn build(
        &self,
        sheet_name: &str,
        document_title: &str,
        created_on: &str,
        catalog: &ScreenCatalog,
    ) -> SheetLayout {
        let mut layout = SheetLayout::new(sheet_name, INDEX_COLUMN_WIDTHS.to_vec());

        layout.push_row(
            RowKind::Title,
            vec![LayoutCell::spanning(
                0,
                LAST_COL,
                CellValue::Text(document_title.to_string()),
                self.styles
                    .cell(StyleRole::DocumentTitle, Alignment::default()),
            )],
            None,
        );

        layout.push_row(
            RowKind::Timestamp,
            vec![LayoutCell::spanning(
                0,
                LAST_COL,
                CellValue::Text(format!("{}{}", self.labels.created_on, created_on)),
                self.styles.cell(StyleRole::Body, Alignment::default()),
            )],
            None,
        );

        layout.push_spacer();

        let header_style = self.styles.cell(StyleRole::Header, Alignment::centered());
        let header_cells = self
            .labels
            .index_headers
            .iter()
            .enumerate()
            .map(|(col, label)| {
                LayoutCell::single(col as u16, CellValue::Text(label.clone()), header_style.clone())
            })
            .collect();
        layout.push_row(RowKind::TableHeader, header_cells, None);

        // No.と画面IDは中央揃え、画面名と説明は左揃えで折り返す
        let centered = self.styles.cell(StyleRole::TableBody, Alignment::centered());
        let wrapped = self
            .styles
            .cell(StyleRole::TableBody, Alignment::left_wrapped());

        for (idx, screen) in catalog.iter().enumerate() {
            layout.push_row(
                RowKind::TableRow,
                vec![
                    LayoutCell::single(0, CellValue::Number((idx + 1) as f64), centered.clone()),
                    LayoutCell::single(1, CellValue::Text(screen.id.clone()), centered.clone()),
                    LayoutCell::single(2, CellValue::Text(screen.name.clone()), wrapped.clone()),
                    LayoutCell::single(
                        3,
                        CellValue::Text(screen.description.clone()),
                        wrapped.clone(),
                    ),
                ],
                None,
            );
        }

        layout
    }
}
