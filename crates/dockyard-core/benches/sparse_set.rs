//! Benchmarks for the SparseSet arena

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use dockyard_core::alloc::sparse_set::SparseSet;

fn bench_push(c: &mut Criterion) {
    let mut group = c.benchmark_group("sparse_set_push");

    for size in [10, 100, 1000] {
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            b.iter(|| {
                let mut set = SparseSet::new();
                for i in 0..size {
                    set.push(black_box(i));
                }
                set
            });
        });
    }

    group.finish();
}

fn bench_churn(c: &mut Criterion) {
    c.bench_function("sparse_set_churn", |b| {
        let mut set = SparseSet::new();
        b.iter(|| {
            let handles: Vec<_> = (0..64).map(|i| set.push(i)).collect();
            for handle in handles {
                black_box(set.remove(handle));
            }
        });
    });
}

criterion_group!(benches, bench_push, bench_churn);
criterion_main!(benches);
