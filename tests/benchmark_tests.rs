use std::cell::RefCell;

use perfcurve::{
    Benchmark, BenchmarkConfig, DataPoint, Operation, PerfCurveError, TestPoint,
    config::validate_data, fixtures, run_benchmark,
};

fn small_config() -> BenchmarkConfig {
    BenchmarkConfig::new((0..5).collect(), 10)
}

#[test]
fn test_mutating_test_points_count() {
    let benchmark =
        Benchmark::mutating(&small_config(), |_| Vec::<u64>::new(), |_| {}).expect("benchmark");
    assert_eq!(benchmark.len(), 5);
    for point in benchmark.test_points() {
        assert_eq!(point.trials().len(), 10);
    }
}

#[test]
fn test_non_mutating_test_points_count() {
    let benchmark =
        Benchmark::non_mutating(&small_config(), |_| Vec::<u64>::new(), |_| {}).expect("benchmark");
    assert_eq!(benchmark.len(), 5);
    assert!(benchmark.test_points().iter().all(|p| p.trials().len() == 10));
}

#[test]
fn test_test_points_keep_caller_order() {
    let config = BenchmarkConfig::new(vec![40, 10, 30], 2);
    let benchmark =
        Benchmark::non_mutating(&config, fixtures::sequential_vec, |v| {
            std::hint::black_box(v.len());
        })
        .expect("benchmark");
    let sizes: Vec<usize> = benchmark.test_points().iter().map(TestPoint::size).collect();
    assert_eq!(sizes, vec![40, 10, 30]);
    let data = benchmark.data();
    assert_eq!(data[1].size, 10.0);
    assert!(data.iter().all(|p| p.time >= 0.0));
}

#[test]
fn test_mutating_trials_start_from_fresh_copy() {
    let observed = RefCell::new(Vec::new());
    let config = BenchmarkConfig::new(vec![3, 7], 5);
    Benchmark::mutating(&config, fixtures::sequential_vec, |values| {
        observed.borrow_mut().push(values.len());
        values.push(0);
    })
    .expect("benchmark");
    assert_eq!(observed.into_inner(), vec![3, 3, 3, 3, 3, 7, 7, 7, 7, 7]);
}

#[test]
fn test_non_mutating_trials_share_one_subject() {
    let addresses = RefCell::new(Vec::new());
    let config = BenchmarkConfig::new(vec![4, 8], 3);
    Benchmark::non_mutating(&config, fixtures::sequential_vec, |values| {
        addresses.borrow_mut().push(values.as_ptr() as usize);
    })
    .expect("benchmark");
    let addresses = addresses.into_inner();
    assert_eq!(addresses.len(), 6);
    assert!(addresses[..3].iter().all(|a| *a == addresses[0]));
    assert!(addresses[3..].iter().all(|a| *a == addresses[3]));
}

#[test]
fn test_setup_runs_once_per_size() {
    let mut calls = Vec::new();
    let config = BenchmarkConfig::new(vec![0, 2, 4], 6);
    Benchmark::mutating(
        &config,
        |size| {
            calls.push(size);
            fixtures::sequential_vec(size)
        },
        |values| values.clear(),
    )
    .expect("benchmark");
    assert_eq!(calls, vec![0, 2, 4]);
}

#[test]
fn test_run_benchmark_dispatches_on_operation_kind() {
    let observed = RefCell::new(Vec::new());
    let append = |values: &mut Vec<u64>| {
        observed.borrow_mut().push(values.len());
        values.push(1);
    };
    let benchmark = run_benchmark(
        &BenchmarkConfig::new(vec![1, 2], 3),
        fixtures::sequential_vec,
        Operation::mutating(&append),
    )
    .expect("benchmark");
    assert_eq!(benchmark.len(), 2);
    assert_eq!(observed.into_inner(), vec![1, 1, 1, 2, 2, 2]);

    let read = |values: &Vec<u64>| {
        std::hint::black_box(values.first());
    };
    let benchmark = run_benchmark(
        &small_config(),
        fixtures::sequential_vec,
        Operation::NonMutating(&read),
    )
    .expect("benchmark");
    assert_eq!(benchmark.len(), 5);
}

struct Handle {
    items: Vec<u64>,
}

#[test]
fn test_run_benchmark_accepts_subjects_without_clone() {
    let read = |handle: &Handle| {
        std::hint::black_box(handle.items.len());
    };
    let operation = Operation::non_mutating(&read);
    assert!(!operation.is_mutating());
    let benchmark = run_benchmark(
        &BenchmarkConfig::new(vec![2, 4, 6], 4),
        |size| Handle {
            items: fixtures::sequential_vec(size),
        },
        operation,
    )
    .expect("benchmark");
    assert_eq!(benchmark.len(), 3);
    assert!(benchmark.test_points().iter().all(|p| p.trials().len() == 4));
}

#[test]
fn test_invalid_configs_fail_fast() {
    let cases = [
        BenchmarkConfig::new(vec![], 10),
        BenchmarkConfig::new(vec![1, 2, 3], 0),
        BenchmarkConfig::new(vec![5, 5, 5], 10),
    ];
    for config in &cases {
        let result = Benchmark::non_mutating(config, |_| (), |_| {});
        assert!(
            matches!(result, Err(PerfCurveError::InvalidConfig(_))),
            "{config:?}"
        );
    }
}

#[test]
fn test_operation_panics_propagate() {
    let result = std::panic::catch_unwind(|| {
        Benchmark::non_mutating(&small_config(), |_| (), |_| panic!("broken operation"))
    });
    assert!(result.is_err());
}

#[test]
fn test_validate_data_requires_two_distinct_sizes() {
    let repeated: Vec<DataPoint> = (1..=3).map(|i| DataPoint::new(0.1, i as f64)).collect();
    assert!(matches!(
        validate_data(&repeated),
        Err(PerfCurveError::InvalidConfig(_))
    ));
    assert!(validate_data(&[]).is_err());
    let spread = [DataPoint::new(0.1, 1.0), DataPoint::new(0.2, 1.0)];
    assert!(validate_data(&spread).is_ok());
}

#[test]
fn test_test_point_average_and_invariant() {
    let point = TestPoint::new(12, vec![1.0, 2.0, 3.0]).expect("point");
    assert_eq!(point.size(), 12);
    assert_eq!(point.average(), 2.0);
    assert!(matches!(
        TestPoint::new(12, vec![]),
        Err(PerfCurveError::InvalidConfig(_))
    ));
}

#[test]
fn test_from_measurements_records_one_trial_per_size() {
    let benchmark =
        Benchmark::from_measurements(&[10, 20, 30], |n| (n * n) as f64).expect("benchmark");
    assert_eq!(benchmark.len(), 3);
    assert_eq!(benchmark.data()[2].time, 900.0);
    assert!(benchmark.test_points().iter().all(|p| p.trials().len() == 1));
}

#[test]
fn test_default_config() {
    let config = BenchmarkConfig::default();
    assert_eq!(config.trial_count, 10);
    assert_eq!(config.test_points.len(), 10);
    assert_eq!(config.test_points[0], 100);
    assert!(config.validate().is_ok());
}
