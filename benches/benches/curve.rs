// Copyright 2025 the Plotstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use kurbo::Affine;
use peniko::Color;
use plotstory_curve::{Curve, DataPoint, Symbol};
use plotstory_paint::RecordingPainter;

#[derive(Clone)]
struct Lcg(u64);

impl Lcg {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next_f64(&mut self) -> f64 {
        // Numerical Recipes LCG parameters.
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.0 >> 11) as f64 / (1_u64 << 53) as f64
    }
}

fn random_points(n: usize, seed: u64) -> Vec<DataPoint> {
    let mut rng = Lcg::new(seed);
    (0..n)
        .map(|i| DataPoint::new(i as f64, rng.next_f64() * 100.0))
        .collect()
}

fn build_curve(n: usize, continuous: bool) -> Curve {
    let mut curve = Curve::from_points(random_points(n, 0xC0_FFEE));
    curve.set_continuous(continuous);
    curve
}

fn bench_curve(c: &mut Criterion) {
    let mut group = c.benchmark_group("plotstory_curve");
    group.sample_size(50);

    for &n in &[256_usize, 4_096, 65_536] {
        let replacement = random_points(n, 0xBEEF);
        let grown = random_points(n + n / 4, 0xFEED);

        group.bench_function(format!("set_data_same_count(n={n})"), |b| {
            b.iter_batched(
                || build_curve(n, false),
                |mut curve| {
                    curve.set_points(replacement.iter().copied());
                    black_box(curve);
                },
                BatchSize::LargeInput,
            );
        });

        group.bench_function(format!("set_data_grow(n={n})"), |b| {
            b.iter_batched(
                || build_curve(n, false),
                |mut curve| {
                    curve.set_points(grown.iter().copied());
                    black_box(curve);
                },
                BatchSize::LargeInput,
            );
        });

        group.bench_function(format!("partial_color(n={n})"), |b| {
            b.iter_batched(
                || build_curve(n, false),
                |mut curve| {
                    curve.set_color(Color::WHITE);
                    black_box(curve);
                },
                BatchSize::LargeInput,
            );
        });

        group.bench_function(format!("batched_restyle(n={n})"), |b| {
            b.iter_batched(
                || build_curve(n, false),
                |mut curve| {
                    curve.batch(|c| {
                        c.set_color(Color::WHITE);
                        c.set_symbol(Symbol::Diamond);
                        c.set_point_size(9.0);
                        c.set_graph_transform(Affine::scale(2.0));
                    });
                    black_box(curve);
                },
                BatchSize::LargeInput,
            );
        });

        group.bench_function(format!("update_all_discrete(n={n})"), |b| {
            b.iter_batched(
                || build_curve(n, false),
                |mut curve| {
                    curve.update_all();
                    black_box(curve);
                },
                BatchSize::LargeInput,
            );
        });

        group.bench_function(format!("update_all_continuous(n={n})"), |b| {
            b.iter_batched(
                || build_curve(n, true),
                |mut curve| {
                    curve.update_all();
                    black_box(curve);
                },
                BatchSize::LargeInput,
            );
        });

        group.bench_function(format!("paint_discrete(n={n})"), |b| {
            let curve = build_curve(n, false);
            b.iter_batched(
                RecordingPainter::new,
                |mut painter| {
                    curve.paint(&mut painter);
                    black_box(painter);
                },
                BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

criterion_group!(benches, bench_curve);
criterion_main!(benches);
