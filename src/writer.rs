//! Workbook Writer Module
//!
//! 論理レイアウトを`rust_xlsxwriter`のワークシートへ書き出し、
//! 完成したワークブックを出力先へ原子的に保存するモジュール。

use std::io::Write;
use std::path::Path;

use log::{debug, info};
use rust_xlsxwriter::{
    Color, Format, FormatAlign, FormatBorder, FormatPattern, Image, Workbook, Worksheet,
};

use crate::error::ScreenDocError;
use crate::layout::{CellValue, DocumentLayout, LayoutCell, SheetLayout};
use crate::style::{BorderStyle, CellStyle, HorizontalAlign, VerticalAlign};
use crate::types::CellCoord;

/// セルスタイルを`Format`に変換する
pub(crate) fn to_format(style: &CellStyle) -> Format {
    let descriptor = &style.descriptor;
    let mut format = Format::new()
        .set_font_name(descriptor.font.family.as_str())
        .set_font_size(descriptor.font.size);

    if descriptor.font.bold {
        format = format.set_bold();
    }
    if let Some(color) = descriptor.font.color {
        format = format.set_font_color(Color::RGB(color));
    }
    if let Some(fill) = descriptor.fill {
        format = format
            .set_pattern(FormatPattern::Solid)
            .set_background_color(Color::RGB(fill));
    }
    if descriptor.border == BorderStyle::Thin {
        format = format.set_border(FormatBorder::Thin);
    }

    match style.alignment.horizontal {
        HorizontalAlign::General => {}
        HorizontalAlign::Left => format = format.set_align(FormatAlign::Left),
        HorizontalAlign::Center => format = format.set_align(FormatAlign::Center),
    }
    match style.alignment.vertical {
        VerticalAlign::Bottom => {}
        VerticalAlign::Top => format = format.set_align(FormatAlign::Top),
        VerticalAlign::Center => format = format.set_align(FormatAlign::VerticalCenter),
    }
    if style.alignment.wrap {
        format = format.set_text_wrap();
    }

    format
}

/// 1シート分のレイアウトをワークシートに書き出す
pub(crate) fn render_sheet(
    worksheet: &mut Worksheet,
    layout: &SheetLayout,
) -> Result<(), ScreenDocError> {
    worksheet.set_name(layout.name())?;

    for (col, width) in layout.column_widths().iter().enumerate() {
        worksheet.set_column_width(col as u16, *width)?;
    }

    for row in layout.rows() {
        for cell in &row.cells {
            write_cell(worksheet, row.row, cell)?;
        }

        if let Some(height) = row.height {
            worksheet.set_row_height(row.row, height)?;
        }

        if let Some(placed) = &row.image {
            let image = Image::new_from_buffer(&placed.bytes)?.set_scale_to_size(
                placed.display.width,
                placed.display.height,
                true,
            );
            worksheet.insert_image(row.row, 0, &image)?;
            debug!(
                "Inserted {} at '{}'!{}",
                placed.path.display(),
                layout.name(),
                CellCoord::new(row.row, 0).to_a1_notation()
            );
        }
    }

    Ok(())
}

fn write_cell(worksheet: &mut Worksheet, row: u32, cell: &LayoutCell) -> Result<(), ScreenDocError> {
    let format = to_format(&cell.style);

    if cell.is_merged() {
        // merge_rangeは文字列のみ受け付けるため、数値は結合後に書き直す
        worksheet.merge_range(
            row,
            cell.first_col,
            row,
            cell.last_col,
            &cell.value.as_text(),
            &format,
        )?;
        if let CellValue::Number(n) = cell.value {
            worksheet.write_number_with_format(row, cell.first_col, n, &format)?;
        }
        return Ok(());
    }

    match &cell.value {
        CellValue::Text(s) => {
            worksheet.write_string_with_format(row, cell.first_col, s, &format)?;
        }
        CellValue::Number(n) => {
            worksheet.write_number_with_format(row, cell.first_col, *n, &format)?;
        }
    }
    Ok(())
}

/// ドキュメント全体のレイアウトからワークブックを構築する
pub(crate) fn build_workbook(document: &DocumentLayout) -> Result<Workbook, ScreenDocError> {
    let mut workbook = Workbook::new();

    for layout in &document.sheets {
        let worksheet = workbook.add_worksheet();
        render_sheet(worksheet, layout)?;
    }

    Ok(workbook)
}

/// ワークブックを出力先に原子的に保存する
///
/// 同じディレクトリの一時ファイルへ書き込んでから名前を変更するため、
/// 途中で失敗しても出力先に壊れたファイルが残ることはありません。
/// 既存のファイルは上書きされます。
pub(crate) fn save_atomically(bytes: &[u8], path: &Path) -> Result<(), ScreenDocError> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(parent)?;

    let mut temp = tempfile::NamedTempFile::new_in(parent)?;
    temp.write_all(bytes)?;
    temp.as_file().sync_all()?;
    temp.persist(path).map_err(|e| ScreenDocError::Io(e.error))?;

    info!("Saved {} ({} bytes)", path.display(), bytes.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::RowKind;
    use crate::style::{Alignment, StyleRegistry, StyleRole};

    fn sample_layout(name: &str) -> SheetLayout {
        let styles = StyleRegistry::default();
        let mut layout = SheetLayout::new(name, vec![6.0, 10.0]);
        layout.push_row(
            RowKind::Title,
            vec![LayoutCell::spanning(
                0,
                1,
                CellValue::Text("Title".into()),
                styles.cell(StyleRole::Title, Alignment::default()),
            )],
            None,
        );
        layout.push_row(
            RowKind::TableRow,
            vec![
                LayoutCell::single(
                    0,
                    CellValue::Number(1.0),
                    styles.cell(StyleRole::TableBody, Alignment::centered()),
                ),
                LayoutCell::single(
                    1,
                    CellValue::Text("x".into()),
                    styles.cell(StyleRole::TableBody, Alignment::left_wrapped()),
                ),
            ],
            Some(30.0),
        );
        layout
    }

    #[test]
    fn test_build_workbook_serializes() {
        let document = DocumentLayout {
            sheets: vec![sample_layout("A"), sample_layout("B")],
        };
        let mut workbook = build_workbook(&document).unwrap();
        let bytes = workbook.save_to_buffer().unwrap();
        // ZIPシグネチャ
        assert_eq!(&bytes[..2], b"PK");
    }

    #[test]
    fn test_duplicate_sheet_names_rejected() {
        let document = DocumentLayout {
            sheets: vec![sample_layout("Same"), sample_layout("Same")],
        };
        let result = build_workbook(&document).and_then(|mut wb| Ok(wb.save_to_buffer()?));
        assert!(result.is_err());
    }

    #[test]
    fn test_header_format() {
        let styles = StyleRegistry::default();
        let format = to_format(&styles.cell(StyleRole::Header, Alignment::centered()));

        let expected = Format::new()
            .set_font_name("メイリオ")
            .set_font_size(11.0)
            .set_bold()
            .set_font_color(Color::RGB(0xFFFFFF))
            .set_pattern(FormatPattern::Solid)
            .set_background_color(Color::RGB(0x4472C4))
            .set_border(FormatBorder::Thin)
            .set_align(FormatAlign::Center)
            .set_align(FormatAlign::VerticalCenter);
        assert_eq!(format, expected);
    }

    #[test]
    fn test_body_format_wraps_without_fill_or_border() {
        let styles = StyleRegistry::default();
        let format = to_format(&styles.cell(
            StyleRole::Body,
            Alignment::top_wrapped(HorizontalAlign::General),
        ));

        let expected = Format::new()
            .set_font_name("メイリオ")
            .set_font_size(10.0)
            .set_align(FormatAlign::Top)
            .set_text_wrap();
        assert_eq!(format, expected);
    }

    #[test]
    fn test_formats_differ_between_roles() {
        let styles = StyleRegistry::default();
        let format = |role| to_format(&styles.cell(role, Alignment::default()));

        assert_ne!(format(StyleRole::Header), format(StyleRole::SectionTitle));
        assert_ne!(format(StyleRole::SectionTitle), format(StyleRole::ElementHeader));
        assert_ne!(format(StyleRole::ElementHeader), format(StyleRole::DeviceLabel));
        assert_ne!(format(StyleRole::Body), format(StyleRole::TableBody));
        assert_ne!(format(StyleRole::DocumentTitle), format(StyleRole::Title));
    }

    #[test]
    fn test_save_atomically_overwrites_and_creates_parent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("out.xlsx");

        save_atomically(b"first", &path).unwrap();
        save_atomically(b"second", &path).unwrap();

        assert_eq!(std::fs::read(&path).unwrap(), b"second");
        // 一時ファイルは残らない
        let entries = std::fs::read_dir(path.parent().unwrap()).unwrap().count();
        assert_eq!(entries, 1);
    }

    #[test]
    fn test_save_atomically_unwritable_destination() {
        let dir = tempfile::tempdir().unwrap();
        // 出力先がディレクトリの場合は名前の変更に失敗する
        let target = dir.path().join("occupied");
        std::fs::create_dir(&target).unwrap();
        std::fs::write(target.join("keep"), b"x").unwrap();

        let result = save_atomically(b"data", &target);
        assert!(matches!(result, Err(ScreenDocError::Io(_))));
    }
}
