use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use planner_model::{Obstacle, Point, Rect, Size};
use planner_route::{RouteOptions, compute_route};
use std::hint::black_box;
use std::time::Duration;

fn block_grid(cols: usize, rows: usize) -> Vec<Obstacle> {
    let mut out = Vec::with_capacity(cols * rows);
    for c in 0..cols {
        for r in 0..rows {
            out.push(Obstacle::new(
                format!("b{c}_{r}"),
                Rect::new(
                    100.0 + c as f64 * 450.0,
                    50.0 + r as f64 * 250.0,
                    300.0,
                    180.0,
                ),
            ));
        }
    }
    out
}

fn bench_route(c: &mut Criterion) {
    let mut group = c.benchmark_group("route");
    group.measurement_time(Duration::from_secs(5));
    let options = RouteOptions::default();

    for &(cols, rows) in &[(2usize, 2usize), (4, 4), (8, 6)] {
        let obstacles = block_grid(cols, rows);
        let canvas = Size::new(cols as f64 * 450.0 + 200.0, rows as f64 * 250.0 + 100.0);
        let from = Point::new(400.0, 140.0);
        let to = Point::new(canvas.width - 150.0, canvas.height - 100.0);
        group.bench_with_input(
            BenchmarkId::new("grid", cols * rows),
            &obstacles,
            |b, obstacles| {
                b.iter(|| {
                    compute_route(
                        Some(black_box(from)),
                        Some(black_box(to)),
                        black_box(obstacles),
                        canvas,
                        false,
                        &options,
                    )
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_route);
criterion_main!(benches);
