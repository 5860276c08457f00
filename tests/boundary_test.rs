//! Boundary Tests for screendoc
//!
//! シート名の制約、空のカタログ、画面要素の有無、
//! 読み込めないスクリーンショットなどの境界条件を検証します。

use calamine::{open_workbook_from_rs, Reader, Xlsx};
use chrono::NaiveDate;
use screendoc::{
    validate_sheet_name, DateFormat, DevicePreset, DocumentBuilder, ImageOutcome, RowKind,
    Screen, ScreenCatalog, ScreenDocError, ScreenElement, MAX_SHEET_NAME_CHARS,
};
use std::io::Cursor;

fn document_for(screens: Vec<Screen>, dir: &std::path::Path) -> screendoc::DesignDocument {
    DocumentBuilder::new()
        .with_catalog(ScreenCatalog::new(screens).unwrap())
        .with_screenshot_dir(dir)
        .with_generated_on(NaiveDate::from_ymd_opt(2025, 1, 31).unwrap())
        .build()
        .unwrap()
}

fn sheet_names_of(bytes: Vec<u8>) -> Vec<String> {
    let workbook: Xlsx<_> = open_workbook_from_rs(Cursor::new(bytes)).unwrap();
    workbook.sheet_names()
}

/// 31文字を超える画面名は切り詰められ、衝突は連番で回避される
#[test]
fn test_long_names_truncated_and_disambiguated() {
    let dir = tempfile::tempdir().unwrap();
    let long_name = "とても長い画面名".repeat(6);
    let document = document_for(
        vec![
            Screen::new("ab", long_name.clone(), "first"),
            Screen::new("cd", long_name.clone(), "second"),
            Screen::new("AB", format!("{}別", long_name), "third"),
        ],
        dir.path(),
    );

    let layout = document.layout();
    let names: Vec<&str> = layout.sheet_names();
    assert_eq!(names.len(), 4);

    for name in &names {
        assert!(name.chars().count() <= MAX_SHEET_NAME_CHARS, "{}", name);
        assert!(validate_sheet_name(name).is_ok(), "{}", name);
    }

    // 1件目と3件目は切り詰め後に大文字小文字を除いて同じ名前になる
    assert!(names[3].ends_with("~2"), "{}", names[3]);
    assert!(names[3].starts_with("AB_"), "{}", names[3]);
    assert_eq!(names[3].chars().count(), MAX_SHEET_NAME_CHARS);
    assert_eq!(
        names[1].chars().skip(2).take(MAX_SHEET_NAME_CHARS - 4).collect::<String>(),
        names[3].chars().skip(2).take(MAX_SHEET_NAME_CHARS - 4).collect::<String>()
    );

    // ワークブックとして保存できる
    let sheets = sheet_names_of(document.to_buffer().unwrap());
    assert_eq!(sheets.len(), 4);
}

/// 使用禁止文字は置換される
#[test]
fn test_invalid_characters_in_screen_name() {
    let dir = tempfile::tempdir().unwrap();
    let document = document_for(
        vec![Screen::new("07", "申請[一覧]/詳細:*?", "d")],
        dir.path(),
    );

    let sheets = sheet_names_of(document.to_buffer().unwrap());
    assert_eq!(sheets, vec!["目次", "07_申請_一覧__詳細___"]);

    // 詳細シートのタイトルは元の画面名のまま
    let layout = document.layout();
    let detail = layout.sheet("07_申請_一覧__詳細___").unwrap();
    assert_eq!(
        detail.row(0).and_then(|r| r.first_text()).as_deref(),
        Some("07. 申請[一覧]/詳細:*?")
    );
}

/// 大文字小文字だけが異なるシート名は衝突として扱われる
#[test]
fn test_case_insensitive_collision() {
    let dir = tempfile::tempdir().unwrap();
    let document = document_for(
        vec![
            Screen::new("a", "Main", "lower"),
            Screen::new("A", "MAIN", "upper"),
        ],
        dir.path(),
    );

    let layout = document.layout();
    assert_eq!(layout.sheet_names(), vec!["目次", "a_Main", "A_MAIN~2"]);
    assert!(document.to_buffer().is_ok());
}

/// 空のカタログでも目次シートだけのワークブックが生成される
#[test]
fn test_empty_catalog() {
    let dir = tempfile::tempdir().unwrap();
    let document = document_for(Vec::new(), dir.path());

    let layout = document.layout();
    assert_eq!(layout.sheet_names(), vec!["目次"]);
    let index = layout.sheet("目次").unwrap();
    assert_eq!(index.rows_of_kind(RowKind::TableHeader).count(), 1);
    assert_eq!(index.rows_of_kind(RowKind::TableRow).count(), 0);

    let sheets = sheet_names_of(document.to_buffer().unwrap());
    assert_eq!(sheets, vec!["目次"]);
}

/// 画面要素がない画面と空の画面要素リストは同じレイアウトになる
#[test]
fn test_absent_and_empty_elements_are_equivalent() {
    let dir = tempfile::tempdir().unwrap();
    let absent = document_for(vec![Screen::new("01", "Main", "d")], dir.path());
    let empty = document_for(
        vec![Screen::new("01", "Main", "d").with_elements(Vec::new())],
        dir.path(),
    );

    let a = absent.layout();
    let b = empty.layout();
    let sheet_a = a.sheet("01_Main").unwrap();
    let sheet_b = b.sheet("01_Main").unwrap();
    assert_eq!(sheet_a.kinds(), sheet_b.kinds());
    assert_eq!(sheet_a.rows_of_kind(RowKind::TableHeader).count(), 0);
}

/// 多数の機能と画面要素を持つ画面
#[test]
fn test_many_features_and_elements() {
    let dir = tempfile::tempdir().unwrap();
    let features: Vec<String> = (1..=50).map(|i| format!("機能{}", i)).collect();
    let elements: Vec<ScreenElement> = (1..=40)
        .map(|i| ScreenElement::new(format!("要素{}", i), format!("説明{}", i)))
        .collect();
    let document = document_for(
        vec![Screen::new("99", "Large", "many rows")
            .with_features(features)
            .with_elements(elements)],
        dir.path(),
    );

    let layout = document.layout();
    let sheet = layout.sheet("99_Large").unwrap();
    assert_eq!(sheet.rows_of_kind(RowKind::Bullet).count(), 50);
    assert_eq!(sheet.rows_of_kind(RowKind::TableRow).count(), 40);
    assert_eq!(sheet.rows_of_kind(RowKind::Placeholder).count(), 3);

    let bytes = document.to_buffer().unwrap();
    assert_eq!(sheet_names_of(bytes).len(), 2);
}

/// スクリーンショットのディレクトリが存在しなくても生成できる
#[test]
fn test_missing_screenshot_directory() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("no-such-dir");
    let document = document_for(vec![Screen::new("01", "Main", "d")], &missing);

    let layout = document.layout();
    let sheet = layout.sheet("01_Main").unwrap();
    assert_eq!(sheet.image_count(), 0);
    assert_eq!(sheet.rows_of_kind(RowKind::Placeholder).count(), 3);
    assert!(document.to_buffer().is_ok());
}

/// 空のファイル・サイズ0の画像・ディレクトリは読み込みエラーとして扱われる
#[test]
fn test_unreadable_screenshots() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("01_Main_desktop.png"), b"").unwrap();
    std::fs::write(dir.path().join("01_Main_tablet.png"), b"GIF89a").unwrap();
    std::fs::create_dir(dir.path().join("01_Main_mobile.png")).unwrap();

    let document = document_for(vec![Screen::new("01", "Main", "d")], dir.path());
    let resolver = screendoc::ImageResolver::new(dir.path());
    let screen = document.catalog().get("01").unwrap();

    for device in DevicePreset::defaults() {
        let outcome = resolver.resolve(screen, &device);
        assert!(
            matches!(outcome, ImageOutcome::LoadError { .. }),
            "{}: {:?}",
            device.key,
            outcome
        );
    }

    let layout = document.layout();
    let sheet = layout.sheet("01_Main").unwrap();
    let messages: Vec<String> = sheet
        .rows_of_kind(RowKind::Placeholder)
        .filter_map(|r| r.first_text())
        .collect();
    assert_eq!(messages.len(), 3);
    assert!(messages.iter().all(|m| m.starts_with("画像読み込みエラー: ")));
    assert!(document.to_buffer().is_ok());
}

/// 重複した画面IDはカタログの読み込み時に拒否される
#[test]
fn test_duplicate_screen_ids_rejected() {
    let json = r#"{"screens": [
        {"id": "01", "name": "A", "description": "", "features": []},
        {"id": "01", "name": "B", "description": "", "features": []}
    ]}"#;
    let result = ScreenCatalog::from_json_str(json);
    assert!(matches!(
        result,
        Err(ScreenDocError::DuplicateScreenId { first: 0, second: 1, .. })
    ));
}

/// 壊れたカタログJSON
#[test]
fn test_malformed_catalog_json() {
    assert!(matches!(
        ScreenCatalog::from_json_str("{\"screens\": [ {\"id\": 1} ]}"),
        Err(ScreenDocError::CatalogFormat(_))
    ));
    assert!(matches!(
        ScreenCatalog::from_json_str("not json"),
        Err(ScreenDocError::CatalogFormat(_))
    ));
}

/// 不正な設定はbuild時に拒否される
#[test]
fn test_invalid_configuration() {
    let no_devices = DocumentBuilder::new().with_devices(Vec::new()).build();
    assert!(matches!(no_devices, Err(ScreenDocError::Config(_))));

    let bad_height = DocumentBuilder::new()
        .with_devices(vec![DevicePreset::new("desktop", "Desktop", 0.0)])
        .build();
    assert!(matches!(bad_height, Err(ScreenDocError::Config(_))));

    let empty_format = DocumentBuilder::new()
        .with_date_format(DateFormat::Custom(String::new()))
        .build();
    assert!(matches!(empty_format, Err(ScreenDocError::Config(_))));

    let empty_title = DocumentBuilder::new().with_document_title("  ").build();
    assert!(matches!(empty_title, Err(ScreenDocError::Config(_))));
}
