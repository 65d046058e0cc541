use criterion::{criterion_group, criterion_main, Criterion, BenchmarkId, BatchSize, Throughput};
use sort_trace::{
    AlgorithmKind,
    EngineConfig,
    GeneratorPolicy,
    SequenceGenerator,
    SortExecutionService,
};
use std::hint::black_box;
use std::time::Duration;

fn create_input(size: usize) -> Vec<i32> {
    SequenceGenerator::new(Some(7))
        .generate(GeneratorPolicy::Random, size, -1_000_000..=1_000_000)
        .unwrap_or_default()
}

const FAST_KINDS: [AlgorithmKind; 8] = [
    AlgorithmKind::Shell,
    AlgorithmKind::Merge,
    AlgorithmKind::Quick,
    AlgorithmKind::Heap,
    AlgorithmKind::Radix,
    AlgorithmKind::Bucket,
    AlgorithmKind::Tim,
    AlgorithmKind::Comb,
];

//  ИНСТРУМЕНТИРОВАННЫЙ ДВИЖОК ПРОТИВ std

fn bench_engine_vs_std(c: &mut Criterion) {
    let service = SortExecutionService::with_config(EngineConfig::new().with_max_snapshots(0));
    let mut group = c.benchmark_group("engine_vs_std");
    group.measurement_time(Duration::from_secs(10));
    for size in [1_000, 10_000, 100_000].iter() {
        group.throughput(Throughput::Elements(*size as u64));
        let input = create_input(*size);

        group.bench_with_input(BenchmarkId::new("std_sort_unstable", size), &input, |b, input| {
            b.iter_batched(
                || input.clone(),
                |mut data| {
                    data.sort_unstable();
                    black_box(data)
                },
                BatchSize::LargeInput,
            );
        });

        for kind in [AlgorithmKind::Quick, AlgorithmKind::Merge, AlgorithmKind::Radix] {
            group.bench_with_input(BenchmarkId::new(kind.id(), size), &input, |b, input| {
                b.iter(|| black_box(service.execute(kind, black_box(input))));
            });
        }
    }
    group.finish();
}

//  SIDE BY SIDE (Rayon)

fn bench_side_by_side(c: &mut Criterion) {
    let service = SortExecutionService::with_config(EngineConfig::new().with_max_snapshots(0));
    let mut group = c.benchmark_group("side_by_side");
    for size in [1_000, 10_000].iter() {
        let input = create_input(*size);
        group.bench_with_input(BenchmarkId::new("sequential", size), &input, |b, input| {
            b.iter(|| {
                let results: Vec<_> = FAST_KINDS
                    .iter()
                    .map(|&kind| service.execute(kind, input))
                    .collect();
                black_box(results)
            });
        });
        group.bench_with_input(BenchmarkId::new("parallel", size), &input, |b, input| {
            b.iter(|| black_box(service.compare(&FAST_KINDS, input)));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_engine_vs_std, bench_side_by_side);
criterion_main!(benches);
