use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use greedy_change::{CoinSet, StrategyKind};

fn bench_strategies(c: &mut Criterion) {
    let coins = CoinSet::new([200, 100, 50, 25, 20, 10, 5, 2, 1]).unwrap();
    let mut group = c.benchmark_group("greedy_change");

    for target in [99, 1_234, 98_765] {
        for kind in StrategyKind::ALL {
            group.bench_with_input(BenchmarkId::new(kind.name(), target), &target, |b, &v| {
                b.iter(|| kind.strategy().make_change(black_box(&coins), black_box(v)))
            });
        }
    }

    group.finish();
}

criterion_group!(benches, bench_strategies);
criterion_main!(benches);
