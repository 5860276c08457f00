//! Detail Sheet Module
//!
//! 1画面分の詳細（概要、主な機能、画面要素、スクリーンショット）を
//! 1枚のシートに上から順に配置するビルダー。
//!
//! すべてのセクションはA:Fの6列の帯に配置され、セクションの間には空行が1行入ります。

use log::debug;

use crate::api::{DevicePreset, SheetLabels};
use crate::layout::{CellValue, LayoutCell, RowKind, SheetLayout};
use crate::placement::{ImageOutcome, ImageResolver};
use crate::style::{Alignment, HorizontalAlign, StyleRegistry, StyleRole};
use crate::types::Screen;

/// 詳細シートの列数（A:F）
pub const DETAIL_COLUMN_COUNT: u16 = 6;

/// A列（要素名・ラベル）の幅
pub const FIRST_COLUMN_WIDTH: f64 = 20.0;

/// B〜F列の幅
pub const OTHER_COLUMN_WIDTH: f64 = 15.0;

/// 概要行の高さ（ポイント）
pub const OVERVIEW_ROW_HEIGHT: f64 = 40.0;

/// 画面要素の行の高さ（ポイント）
pub const ELEMENT_ROW_HEIGHT: f64 = 30.0;

const LAST_COL: u16 = DETAIL_COLUMN_COUNT - 1;

/// 詳細シートの列幅
pub fn detail_column_widths() -> Vec<f64> {
    std::iter::once(FIRST_COLUMN_WIDTH)
        .chain(std::iter::repeat(OTHER_COLUMN_WIDTH).take(usize::from(DETAIL_COLUMN_COUNT - 1)))
        .collect()
}

/// 詳細シートのビルダー
#[derive(Debug, Clone, Copy)]
pub struct DetailSheetBuilder<'a> {
    styles: &'a StyleRegistry,
    labels: &'a SheetLabels,
    devices: &'a [DevicePreset],
    resolver: &'a ImageResolver,
}

impl<'a> DetailSheetBuilder<'a> {
    /// スタイル、文言、デバイスプリセット、画像の解決方法を指定して生成
    ///
    /// デバイスラベルと画像はプリセットの並び順で配置されます。
    pub fn new(
        styles: &'a StyleRegistry,
        labels: &'a SheetLabels,
        devices: &'a [DevicePreset],
        resolver: &'a ImageResolver,
    ) -> Self {
        Self {
            styles,
            labels,
            devices,
            resolver,
        }
    }

    /// 1画面分の詳細シートを構築する
    ///
    /// 画像の読み込みに失敗しても構築は中断せず、その行を説明文に置き換えて続行します。
    pub fn build(&self, screen: &Screen, sheet_name: &str) -> SheetLayout {
        let mut layout = SheetLayout::new(sheet_name, detail_column_widths());

        // タイトル
        layout.push_row(
            RowKind::Title,
            vec![LayoutCell::spanning(
                0,
                LAST_COL,
                CellValue::Text(screen.title()),
                self.styles.cell(StyleRole::Title, Alignment::default()),
            )],
            None,
        );
        layout.push_spacer();

        self.push_overview(&mut layout, screen);
        layout.push_spacer();

        self.push_features(&mut layout, screen);
        layout.push_spacer();

        if screen.has_elements() {
            self.push_elements(&mut layout, screen);
            layout.push_spacer();
        }

        self.push_screenshots(&mut layout, screen);

        layout
    }

    fn push_section_header(&self, layout: &mut SheetLayout, label: &str) {
        layout.push_row(
            RowKind::SectionHeader,
            vec![LayoutCell::spanning(
                0,
                LAST_COL,
                CellValue::Text(label.to_string()),
                self.styles
                    .cell(StyleRole::SectionTitle, Alignment::default()),
            )],
            None,
        );
    }

    fn push_overview(&self, layout: &mut SheetLayout, screen: &Screen) {
        self.push_section_header(layout, &self.labels.overview);
        layout.push_row(
            RowKind::Text,
            vec![LayoutCell::spanning(
                0,
                LAST_COL,
                CellValue::Text(screen.description.clone()),
                self.styles.cell(
                    StyleRole::Body,
                    Alignment::top_wrapped(HorizontalAlign::General),
                ),
            )],
            Some(OVERVIEW_ROW_HEIGHT),
        );
    }

    fn push_features(&self, layout: &mut SheetLayout, screen: &Screen) {
        self.push_section_header(layout, &self.labels.features);

        let style = self.styles.cell(StyleRole::Body, Alignment::default());
        for feature in &screen.features {
            layout.push_row(
                RowKind::Bullet,
                vec![LayoutCell::spanning(
                    0,
                    LAST_COL,
                    CellValue::Text(format!("{}{}", self.labels.bullet, feature)),
                    style.clone(),
                )],
                None,
            );
        }
    }

    fn push_elements(&self, layout: &mut SheetLayout, screen: &Screen) {
        let elements = match &screen.elements {
            Some(elements) if !elements.is_empty() => elements,
            _ => return,
        };

        self.push_section_header(layout, &self.labels.elements);

        let header_style = self
            .styles
            .cell(StyleRole::ElementHeader, Alignment::centered());
        let [name_label, description_label] = &self.labels.element_headers;
        layout.push_row(
            RowKind::TableHeader,
            vec![
                LayoutCell::single(0, CellValue::Text(name_label.clone()), header_style.clone()),
                LayoutCell::spanning(
                    1,
                    LAST_COL,
                    CellValue::Text(description_label.clone()),
                    header_style,
                ),
            ],
            None,
        );

        let cell_style = self.styles.cell(
            StyleRole::TableBody,
            Alignment::top_wrapped(HorizontalAlign::Left),
        );
        for element in elements {
            layout.push_row(
                RowKind::TableRow,
                vec![
                    LayoutCell::single(0, CellValue::Text(element.name.clone()), cell_style.clone()),
                    LayoutCell::spanning(
                        1,
                        LAST_COL,
                        CellValue::Text(element.description.clone()),
                        cell_style.clone(),
                    ),
                ],
                Some(ELEMENT_ROW_HEIGHT),
            );
        }
    }

    fn push_screenshots(&self, layout: &mut SheetLayout, screen: &Screen) {
        self.push_section_header(layout, &self.labels.screenshots);

        let label_style = self
            .styles
            .cell(StyleRole::DeviceLabel, Alignment::centered());
        let message_style = self.styles.cell(StyleRole::Body, Alignment::default());

        for device in self.devices {
            layout.push_row(
                RowKind::DeviceLabel,
                vec![LayoutCell::spanning(
                    0,
                    LAST_COL,
                    CellValue::Text(device.label.clone()),
                    label_style.clone(),
                )],
                None,
            );

            match self.resolver.resolve(screen, device) {
                ImageOutcome::Found(image) => {
                    debug!(
                        "Placing {} ({:.0}x{:.0}px) on sheet '{}'",
                        image.path.display(),
                        image.display.width,
                        image.display.height,
                        layout.name()
                    );
                    layout.push_image(image);
                }
                ImageOutcome::NotFound { .. } => {
                    layout.push_row(
                        RowKind::Placeholder,
                        vec![LayoutCell::single(
                            0,
                            CellValue::Text(self.labels.image_not_found.clone()),
                            message_style.clone(),
                        )],
                        None,
                    );
                }
                ImageOutcome::LoadError { reason, .. } => {
                    layout.push_row(
                        RowKind::Placeholder,
                        vec![LayoutCell::single(
                            0,
                            CellValue::Text(format!("{}{}", self.labels.image_load_error, reason)),
                            message_style.clone(),
                        )],
                        None,
                    );
                }
            }

            layout.push_spacer();
        }
    }
}
