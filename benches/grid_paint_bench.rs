use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use timeline_grid::api::{TimelineGrid, TimelineGridConfig};
use timeline_grid::core::Viewport;
use timeline_grid::render::NullRenderer;

fn build_grid(markers: u64) -> TimelineGrid<NullRenderer> {
    let config = TimelineGridConfig::new(Viewport::new(1920, 50));
    let mut grid = TimelineGrid::new(NullRenderer::default(), config).expect("grid init");
    grid.set_full_range(1_000_000);
    grid.set_visible_start_time(100_000);
    grid.set_visible_range(500_000);
    grid.set_selected_time(150_000);
    grid.set_end_selected_time(450_000);
    for i in 0..markers {
        grid.add_marker(100_000 + (i * 7_919) % 500_000);
    }
    grid
}

fn bench_paint_ticks_only(c: &mut Criterion) {
    let grid = build_grid(0);
    c.bench_function("paint_ticks_only", |b| b.iter(|| black_box(grid.paint())));
}

fn bench_paint_with_200_markers(c: &mut Criterion) {
    let grid = build_grid(200);
    c.bench_function("paint_with_200_markers", |b| {
        b.iter(|| black_box(grid.paint()))
    });
}

fn bench_resize_and_render(c: &mut Criterion) {
    let mut grid = build_grid(32);
    let mut width = 800u32;
    c.bench_function("resize_and_render", |b| {
        b.iter(|| {
            width = if width >= 1920 { 800 } else { width + 16 };
            grid.resize(black_box(Viewport::new(width, 50)));
            grid.render().expect("render should succeed");
        })
    });
}

criterion_group!(
    benches,
    bench_paint_ticks_only,
    bench_paint_with_200_markers,
    bench_resize_and_render
);
criterion_main!(benches);
