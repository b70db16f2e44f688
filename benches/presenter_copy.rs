//! Benchmarks for the RGB to RGBA framebuffer copy and selection overlay.

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use mandelbrot_viewer::{PixelRect, Point, copy_rgb_to_rgba, draw_rect_outline};

fn bench_copy_rgb_to_rgba(c: &mut Criterion) {
    let mut group = c.benchmark_group("copy_rgb_to_rgba");

    for (width, height) in [(700usize, 500usize), (1920, 1080)] {
        let src: Vec<u8> = (0..width * height * 3).map(|i| (i % 251) as u8).collect();
        let mut dst = vec![0u8; width * height * 4];
        group.throughput(Throughput::Bytes((width * height * 4) as u64));

        group.bench_function(BenchmarkId::from_parameter(format!("{}x{}", width, height)), |b| {
            b.iter(|| copy_rgb_to_rgba(black_box(&src), black_box(&mut dst)));
        });
    }

    group.finish();
}

fn bench_draw_rect_outline(c: &mut Criterion) {
    let (width, height) = (700u32, 500u32);
    let mut frame = vec![0u8; (width * height * 4) as usize];
    let rect = PixelRect::from_corners(Point { x: 50, y: 40 }, Point { x: 650, y: 460 });

    c.bench_function("draw_rect_outline/700x500", |b| {
        b.iter(|| draw_rect_outline(black_box(&mut frame), width, height, rect, [255; 4]));
    });
}

criterion_group!(benches, bench_copy_rgb_to_rgba, bench_draw_rect_outline);
criterion_main!(benches);
