use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use kd_neighbors::kdtree::{KDTree, KDTreeBuilder, NeighborhoodParams};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn generate_points(n: usize) -> Vec<[f64; 3]> {
    let mut rng = StdRng::seed_from_u64(42);
    (0..n)
        .map(|_| {
            [
                rng.gen_range(-100.0..100.0),
                rng.gen_range(-100.0..100.0),
                rng.gen_range(-100.0..100.0),
            ]
        })
        .collect()
}

fn build_tree(points: &[[f64; 3]]) -> KDTree<f64, 3> {
    let mut builder = KDTreeBuilder::new(16, f64::INFINITY).unwrap();
    builder.reserve(points.len());
    for p in points {
        builder.add(*p).unwrap();
    }
    builder.build()
}

pub fn criterion_benchmark(c: &mut Criterion) {
    for size in [1_000, 100_000] {
        let points = generate_points(size);

        c.bench_with_input(BenchmarkId::new("construction", size), &points, |b, points| {
            b.iter(|| build_tree(points))
        });

        let tree = build_tree(&points);
        let queries = generate_points(1_000);

        c.bench_with_input(BenchmarkId::new("16 nearest", size), &queries, |b, queries| {
            b.iter(|| {
                for q in queries {
                    tree.query(q).unwrap();
                }
            })
        });

        let params = NeighborhoodParams::within(25.0).unwrap();
        c.bench_with_input(BenchmarkId::new("within r=5", size), &queries, |b, queries| {
            b.iter(|| {
                for q in queries {
                    tree.query_with(q, &params).unwrap();
                }
            })
        });

        let few_queries = queries[..10].to_vec();
        c.bench_with_input(
            BenchmarkId::new("exhaustive 16 nearest", size),
            &few_queries,
            |b, queries| {
                b.iter(|| {
                    for q in queries {
                        tree.query_exhaustive(q, tree.params()).unwrap();
                    }
                })
            },
        );
    }
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
