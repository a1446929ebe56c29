//! Benchmarks for the skin pipeline.
//!
//! Run with: cargo bench -p skinpack-core

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use image::{ImageFormat, Rgba, RgbaImage};
use skinpack_core::pipeline::{data_uri, is_slim, render_head, SkinDecoder, TextureHasher};
use skinpack_core::{Config, SkinAssembler, SkinFile};
use std::io::Cursor;

fn sample_skin() -> RgbaImage {
    RgbaImage::from_fn(64, 64, |x, y| Rgba([(x * 4) as u8, (y * 4) as u8, 128, 255]))
}

fn sample_png() -> Vec<u8> {
    let mut buffer = Cursor::new(Vec::new());
    sample_skin()
        .write_to(&mut buffer, ImageFormat::Png)
        .expect("encode sample skin");
    buffer.into_inner()
}

fn benchmark_texture_id(c: &mut Criterion) {
    let bytes = sample_png();

    c.bench_function("texture_id", |b| {
        b.iter(|| TextureHasher::texture_id(black_box(&bytes)))
    });
}

fn benchmark_decode(c: &mut Criterion) {
    let bytes = sample_png();

    c.bench_function("decode_skin", |b| {
        b.iter(|| {
            let _ = SkinDecoder::decode_sync(black_box(&bytes), "bench.png");
        })
    });
}

fn benchmark_classify(c: &mut Criterion) {
    let skin = sample_skin();

    c.bench_function("classify_slim", |b| b.iter(|| is_slim(black_box(&skin))));
}

fn benchmark_preview(c: &mut Criterion) {
    let skin = sample_skin();

    c.bench_function("head_preview_png", |b| {
        b.iter(|| {
            let _ = data_uri::encode_png(&render_head(black_box(&skin)));
        })
    });
}

fn benchmark_assemble(c: &mut Criterion) {
    let bytes = sample_png();
    let assembler = SkinAssembler::new(&Config::default());
    let rt = tokio::runtime::Runtime::new().expect("tokio runtime");

    c.bench_function("assemble_16_skins", |b| {
        b.iter(|| {
            let files: Vec<SkinFile> = (0..16)
                .map(|i| SkinFile::new(format!("skin{i}.png"), bytes.clone()))
                .collect();
            let _ = rt.block_on(assembler.assemble(black_box(files)));
        })
    });
}

criterion_group!(
    benches,
    benchmark_texture_id,
    benchmark_decode,
    benchmark_classify,
    benchmark_preview,
    benchmark_assemble,
);
criterion_main!(benches);
