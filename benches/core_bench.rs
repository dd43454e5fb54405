use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use glam::Vec2;
use std::hint::black_box;
use whiteboard_stroke_editor::{split_by_circle, Sketch, Stroke, StrokeId};

/// Baut einen synthetischen Sketch: `stroke_count` horizontale Polylinien
/// mit je `points_per_stroke` Punkten, vertikal gestaffelt.
fn build_synthetic_sketch(stroke_count: usize, points_per_stroke: usize) -> Sketch {
    let mut sketch = Sketch::new();

    for row in 0..stroke_count {
        let y = row as f32 * 4.0;
        let points: Vec<Vec2> = (0..points_per_stroke)
            .map(|col| Vec2::new(col as f32 * 5.0, y + (col % 3) as f32 * 0.5))
            .collect();
        sketch.push_stroke(Stroke {
            id: StrokeId::new(format!("s{}", row + 1)),
            points,
            color: [0.0, 0.0, 0.0, 1.0],
            width: 2.0,
        });
    }

    sketch
}

fn build_query_points(count: usize) -> Vec<Vec2> {
    (0..count)
        .map(|i| {
            let x = ((i * 13) % 320) as f32 + 0.37;
            let y = ((i * 7) % 400) as f32 + 0.63;
            Vec2::new(x, y)
        })
        .collect()
}

fn bench_hit_testing(c: &mut Criterion) {
    let mut group = c.benchmark_group("hit_testing");

    for &stroke_count in &[100usize, 1000usize] {
        let sketch = build_synthetic_sketch(stroke_count, 64);
        let query_points = build_query_points(1024);

        group.bench_with_input(
            BenchmarkId::new("find_stroke_at_batch", stroke_count),
            &sketch,
            |b, sketch| {
                b.iter(|| {
                    let mut hits = 0usize;
                    for point in &query_points {
                        if sketch.find_stroke_at(black_box(*point), 6.0).is_some() {
                            hits += 1;
                        }
                    }
                    black_box(hits)
                })
            },
        );
    }

    group.finish();
}

fn bench_circle_splitting(c: &mut Criterion) {
    let mut group = c.benchmark_group("circle_splitting");

    for &point_count in &[1_000usize, 10_000usize] {
        // Zick-Zack-Polylinie, die der Radier-Kreis mehrfach kreuzt
        let points: Vec<Vec2> = (0..point_count)
            .map(|i| Vec2::new(i as f32 * 3.0, if i % 2 == 0 { 0.0 } else { 12.0 }))
            .collect();
        let stroke = Stroke {
            id: StrokeId::new("zigzag"),
            points,
            color: [0.0, 0.0, 0.0, 1.0],
            width: 2.0,
        };
        let center = Vec2::new(point_count as f32 * 1.5, 6.0);

        group.bench_with_input(
            BenchmarkId::new("split_by_circle", point_count),
            &stroke,
            |b, stroke| {
                b.iter(|| {
                    let fragments = split_by_circle(black_box(stroke), black_box(center), 40.0);
                    black_box(fragments.len())
                })
            },
        );
    }

    group.finish();
}

criterion_group!(core_benches, bench_hit_testing, bench_circle_splitting);
criterion_main!(core_benches);
