use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use mesh_sfc::prelude::*;

fn random_ids<E: SfcElement>(level: u8, n: usize) -> Vec<E> {
    let mut rng = SmallRng::seed_from_u64(42);
    let count = E::count_at_level(level);
    (0..n)
        .map(|_| E::from_linear_id(level, rng.gen_range(0..count - 1)))
        .collect()
}

fn bench_successor(c: &mut Criterion) {
    let mut group = c.benchmark_group("successor");

    for &level in &[4u8, 12u8, 20u8] {
        let prisms = random_ids::<Prism>(level, 256);
        let triangles = random_ids::<Triangle>(level, 256);

        group.bench_with_input(BenchmarkId::new("prism", level), &level, |b, &level| {
            b.iter(|| {
                for p in &prisms {
                    black_box(p.successor(level));
                }
            });
        });

        group.bench_with_input(BenchmarkId::new("triangle", level), &level, |b, &level| {
            b.iter(|| {
                for t in &triangles {
                    black_box(t.successor(level));
                }
            });
        });

        group.bench_with_input(BenchmarkId::new("prism_linear_id", level), &level, |b, &level| {
            b.iter(|| {
                for p in &prisms {
                    black_box(Prism::from_linear_id(level, p.linear_id(level)));
                }
            });
        });
    }

    group.bench_function("prism_level_walk_4", |b| {
        b.iter(|| black_box(LevelIter::<Prism>::new(4).count()));
    });

    group.finish();
}

criterion_group!(benches, bench_successor);
criterion_main!(benches);
