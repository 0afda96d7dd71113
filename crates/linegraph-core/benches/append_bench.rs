use criterion::{black_box, criterion_group, criterion_main, Criterion};
use linegraph_core::{GraphComponent, GraphConfiguration, SeriesBuffer};

fn bench_append(c: &mut Criterion) {
    let mut group = c.benchmark_group("append");
    for &cap in &[720usize, 100_000usize] {
        group.bench_function(format!("streaming_{cap}"), |b| {
            let graph = GraphComponent::new(SeriesBuffer::streaming(cap), GraphConfiguration::default());
            let mut i = 0u64;
            b.iter(|| {
                i += 1;
                graph.append(black_box((i as f64 * 0.01).sin()));
            });
        });
    }
    group.bench_function("static_batch_10k", |b| {
        b.iter(|| {
            let graph = GraphComponent::for_values((0..10_000).map(|i| (i as f64 * 0.01).sin()), GraphConfiguration::default());
            black_box(graph.len());
        });
    });
    group.finish();
}

criterion_group!(benches, bench_append);
criterion_main!(benches);
