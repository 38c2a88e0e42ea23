use criterion::{Criterion, criterion_group, criterion_main};
use image::{Rgba, RgbaImage};
use sketch_lab::brush_engine::{HighlightOptions, RegionHighlighter, StrokeSteps, paint_segment};
use sketch_lab::canvas::Canvas;
use sketch_lab::canvas::canvas::BACKGROUND;
use sketch_lab::utils::vector::Vec2;

fn bench_fill_preview(c: &mut Criterion) {
    let uniform = RgbaImage::from_pixel(400, 400, Rgba([255, 255, 255, 255]));
    let mut highlighter = RegionHighlighter::new(400, 400, HighlightOptions::default());

    // Worst case: the radius covers the whole canvas and nothing stops the fill.
    c.bench_function("fill_preview_400px_full", |b| {
        b.iter(|| highlighter.run(&uniform, (200, 200), 400.0));
    });

    c.bench_function("fill_preview_400px_r50", |b| {
        b.iter(|| highlighter.run(&uniform, (200, 200), 50.0));
    });
}

fn bench_stroke(c: &mut Criterion) {
    let mut canvas = Canvas::new(400, 400, BACKGROUND);
    let black = Rgba([0, 0, 0, 255]);

    c.bench_function("stroke_steps_diagonal", |b| {
        b.iter(|| StrokeSteps::new(Vec2::ZERO, Vec2::new(399.0, 399.0)).count());
    });

    c.bench_function("paint_segment_d20", |b| {
        b.iter(|| {
            paint_segment(
                &mut canvas,
                Vec2::new(10.0, 200.0),
                Vec2::new(390.0, 200.0),
                20.0,
                black,
            )
        });
    });
}

criterion_group!(benches, bench_fill_preview, bench_stroke);
criterion_main!(benches);
