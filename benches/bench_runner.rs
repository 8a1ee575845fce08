use std::time::Duration;

use criterion::{Criterion, criterion_group, criterion_main};
use perfcurve::{Benchmark, BenchmarkConfig, Scale, fixtures};

const SAMPLE_SIZE: usize = 10;
const WARM_UP: Duration = Duration::from_millis(300);
const MEASURE: Duration = Duration::from_millis(500);

fn runner_config() -> BenchmarkConfig {
    BenchmarkConfig::default()
        .with_scale(Scale::Small)
        .with_trial_count(5)
}

fn bench_runner_overhead(c: &mut Criterion) {
    let mut group = c.benchmark_group("runner");
    group.sample_size(SAMPLE_SIZE);
    group.warm_up_time(WARM_UP);
    group.measurement_time(MEASURE);
    let config = runner_config();
    group.bench_function("non_mutating", |b| {
        b.iter(|| {
            Benchmark::non_mutating(&config, fixtures::sequential_vec, |values| {
                std::hint::black_box(values.len());
            })
        });
    });
    group.bench_function("mutating", |b| {
        b.iter(|| {
            Benchmark::mutating(&config, fixtures::sequential_vec, |values| values.push(0))
        });
    });
    group.finish();
}

criterion_group!(benches, bench_runner_overhead);
criterion_main!(benches);
