use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

use relook_core::config::EngineTuning;
use relook_core::{analyze, synthesize, ParameterVector, PixelBuffer};

fn gradient_buffer(width: u32, height: u32) -> PixelBuffer {
    let mut data = Vec::with_capacity(width as usize * height as usize * 3);
    for y in 0..height {
        for x in 0..width {
            let r = (x as f32 / (width - 1) as f32 * 255.0) as u8;
            let g = (y as f32 / (height - 1) as f32 * 255.0) as u8;
            let b = ((x + y) % 256) as u8;
            data.extend_from_slice(&[r, g, b]);
        }
    }
    PixelBuffer::from_rgb8(width, height, data).unwrap()
}

fn bench_analyze(c: &mut Criterion) {
    let buffer = gradient_buffer(512, 512);
    let tuning = EngineTuning::default();

    c.bench_function("analyze_512", |b| {
        b.iter(|| analyze(black_box(&buffer), &tuning).unwrap())
    });
}

fn bench_synthesize(c: &mut Criterion) {
    let buffer = gradient_buffer(512, 512);
    let tuning = EngineTuning::default();
    let vector =
        ParameterVector::new(12.0, 8.0, 15.0, 25.0, 200.0, 20.0, 10.0, -10.0).unwrap();

    c.bench_function("synthesize_512", |b| {
        b.iter(|| synthesize(black_box(&buffer), &vector, &tuning).unwrap())
    });
}

criterion_group!(benches, bench_analyze, bench_synthesize);
criterion_main!(benches);
