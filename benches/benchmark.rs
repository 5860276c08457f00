//! パフォーマンスベンチマーク
//!
//! 画面設計書の生成処理（レイアウト構築とXLSXへの書き出し）の所要時間を測定します。
//!
//! 実装するベンチマーク:
//! - 埋め込みカタログ（12画面）でスクリーンショットなしの生成
//! - 全デバイスのスクリーンショットを持つ生成
//! - 画面数を増やした場合のスループット

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use image::{Rgb, RgbImage};
use screendoc::{DevicePreset, DocumentBuilder, Screen, ScreenCatalog, ScreenElement};
use std::path::Path;

fn fixed_date() -> chrono::NaiveDate {
    chrono::NaiveDate::from_ymd_opt(2025, 11, 20).unwrap()
}

/// 全画面・全デバイス分のスクリーンショットを書き出す
fn write_screenshots(dir: &Path, catalog: &ScreenCatalog) {
    for (i, screen) in catalog.iter().enumerate() {
        for (j, device) in DevicePreset::defaults().iter().enumerate() {
            // 同一内容の画像がまとめられないように色を変える
            let shade = ((i * 3 + j) % 256) as u8;
            let file = format!("{}_{}_{}.png", screen.id, screen.name, device.key);
            RgbImage::from_pixel(320, 180, Rgb([shade, 0x72, 0xC4]))
                .save(dir.join(file))
                .unwrap();
        }
    }
}

fn synthetic_catalog(count: usize) -> ScreenCatalog {
    let screens = (1..=count)
        .map(|i| {
            Screen::new(format!("{:03}", i), format!("画面{}", i), "ベンチマーク用の画面")
                .with_features((1..=5).map(|f| format!("機能{}", f)))
                .with_elements(
                    (1..=8)
                        .map(|e| ScreenElement::new(format!("要素{}", e), "説明"))
                        .collect(),
                )
        })
        .collect();
    ScreenCatalog::new(screens).unwrap()
}

/// 埋め込みカタログ、スクリーンショットなし
fn benchmark_embedded_catalog(c: &mut Criterion) {
    let dir = tempfile::tempdir().unwrap();
    let document = DocumentBuilder::new()
        .with_screenshot_dir(dir.path())
        .with_generated_on(fixed_date())
        .build()
        .unwrap();

    let mut group = c.benchmark_group("embedded_catalog");
    group.bench_function("layout", |b| b.iter(|| black_box(document.layout())));
    group.bench_function("to_buffer", |b| {
        b.iter(|| black_box(document.to_buffer().unwrap()))
    });
    group.finish();
}

/// 埋め込みカタログ、全デバイスのスクリーンショットあり
fn benchmark_with_screenshots(c: &mut Criterion) {
    let dir = tempfile::tempdir().unwrap();
    let catalog = ScreenCatalog::embedded().unwrap();
    write_screenshots(dir.path(), &catalog);

    let document = DocumentBuilder::new()
        .with_catalog(catalog)
        .with_screenshot_dir(dir.path())
        .with_generated_on(fixed_date())
        .build()
        .unwrap();

    let mut group = c.benchmark_group("with_screenshots");
    group.sample_size(20); // 画像のデコードを含むため、サンプル数を減らす
    group.bench_function("to_buffer", |b| {
        b.iter(|| black_box(document.to_buffer().unwrap()))
    });
    group.finish();
}

/// 画面数に対するスループット
fn benchmark_catalog_size(c: &mut Criterion) {
    let dir = tempfile::tempdir().unwrap();

    let mut group = c.benchmark_group("catalog_size");
    for count in [10usize, 50, 200] {
        let document = DocumentBuilder::new()
            .with_catalog(synthetic_catalog(count))
            .with_screenshot_dir(dir.path())
            .with_generated_on(fixed_date())
            .build()
            .unwrap();

        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &document, |b, doc| {
            b.iter(|| black_box(doc.to_buffer().unwrap()))
        });
    }
    group.finish();
}

criterion_group! {
    name = benches;
    config = Criterion::default()
        .measurement_time(std::time::Duration::from_secs(10))
        .warm_up_time(std::time::Duration::from_secs(3));
    targets = benchmark_embedded_catalog, benchmark_with_screenshots, benchmark_catalog_size
}

criterion_main!(benches);
