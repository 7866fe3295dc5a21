//! Benchmarks for the favemoji pipeline.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use favemoji::{encode_ico, render_glyph, resize_set, BASE_SIZE};

// -- Rendering benchmarks --

fn bench_rendering(c: &mut Criterion) {
    let mut group = c.benchmark_group("rendering");

    group.bench_function("render_glyph_64", |b| {
        b.iter(|| render_glyph(black_box("✨"), 64).unwrap())
    });

    group.bench_function("render_glyph_256", |b| {
        b.iter(|| render_glyph(black_box("✨"), BASE_SIZE).unwrap())
    });

    group.finish();
}

// -- Packaging benchmarks --

fn bench_packaging(c: &mut Criterion) {
    let mut group = c.benchmark_group("packaging");

    let base = render_glyph("✨", BASE_SIZE).unwrap();

    group.bench_function("resize_set", |b| b.iter(|| resize_set(black_box(&base))));

    let variants = resize_set(&base);

    group.bench_function("encode_ico", |b| {
        b.iter(|| {
            let dir = encode_ico(black_box(&variants)).unwrap();
            let mut buf = Vec::new();
            dir.write(&mut buf).unwrap();
            buf
        })
    });

    group.finish();
}

criterion_group!(benches, bench_rendering, bench_packaging);
criterion_main!(benches);
