//! Benchmarks for the conversion pipeline.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use sheetshift::raster::RGB;
use sheetshift::{remove_background, reposition_rows, scale, Raster};

/// A 256x192 sheet (8 rows of 32px sprites, 12 columns of 16px) with a
/// flat background and a block of colour in every cell.
fn synthetic_sheet() -> Raster {
    let (height, width) = (256, 192);
    let mut data = Vec::with_capacity(height * width * RGB);
    for y in 0..height {
        for x in 0..width {
            let in_sprite = (4..28).contains(&(y % 32)) && (3..13).contains(&(x % 16));
            if in_sprite {
                data.extend_from_slice(&[(y / 32 * 30) as u8, (x / 16 * 20) as u8, 128]);
            } else {
                data.extend_from_slice(&[0, 255, 0]);
            }
        }
    }
    Raster::new(height, width, RGB, data).unwrap()
}

fn bench_stages(c: &mut Criterion) {
    let mut group = c.benchmark_group("stages");
    let sheet = synthetic_sheet();

    group.bench_function("scale_2x", |b| {
        b.iter(|| scale(black_box(&sheet), 2).unwrap())
    });

    group.bench_function("scale_4x", |b| {
        b.iter(|| scale(black_box(&sheet), 4).unwrap())
    });

    group.bench_function("reposition_rows", |b| {
        b.iter(|| reposition_rows(black_box(&sheet)).unwrap())
    });

    group.bench_function("remove_background", |b| {
        b.iter(|| remove_background(black_box(&sheet), 0).unwrap())
    });

    group.finish();
}

fn bench_pipeline(c: &mut Criterion) {
    let sheet = synthetic_sheet();

    c.bench_function("full_pipeline_2x", |b| {
        b.iter(|| {
            let scaled = scale(black_box(&sheet), 2).unwrap();
            let moved = reposition_rows(&scaled).unwrap();
            remove_background(&moved, 0).unwrap()
        })
    });
}

criterion_group!(benches, bench_stages, bench_pipeline);
criterion_main!(benches);
