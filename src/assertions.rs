//! Test-facing helpers that panic with full diagnostics when an operation does
//! not scale as claimed.

use crate::{
    PerfCurveError,
    benchmark::Benchmark,
    classifier::evaluate_benchmark,
    complexity::Complexity,
    config::{BenchmarkConfig, FitConfig, Logging},
    report::ComplexityReport,
};

/// Evaluates without panicking. The report is printed at `fit.logging`.
pub fn check_complexity(
    benchmark: &Benchmark,
    complexity: &Complexity,
    fit: &FitConfig,
) -> ComplexityReport {
    let report = evaluate_benchmark(benchmark, complexity, fit);
    report.emit(fit.logging);
    report
}

#[track_caller]
pub fn assert_complexity(
    benchmark: &Benchmark,
    complexity: &Complexity,
    fit: &FitConfig,
) -> ComplexityReport {
    let report = check_complexity(benchmark, complexity, fit);
    if !report.fits {
        panic!(
            "performance does not fit {}\n{}",
            complexity,
            report.render(Logging::Detailed)
        );
    }
    report
}

/// Asserts over a closure that receives a size and returns its own measured
/// time, typically via [`crate::mean_execution_time`].
#[track_caller]
pub fn assert_performance<F>(
    complexity: &Complexity,
    test_points: &[usize],
    fit: &FitConfig,
    measure: F,
) -> ComplexityReport
where
    F: FnMut(usize) -> f64,
{
    let benchmark = expect_config(Benchmark::from_measurements(test_points, measure));
    assert_complexity(&benchmark, complexity, fit)
}

#[track_caller]
pub fn assert_non_mutating_performance<S, F, O>(
    complexity: &Complexity,
    config: &BenchmarkConfig,
    fit: &FitConfig,
    setup: F,
    operation: O,
) -> ComplexityReport
where
    F: FnMut(usize) -> S,
    O: Fn(&S),
{
    let benchmark = expect_config(Benchmark::non_mutating(config, setup, operation));
    assert_complexity(&benchmark, complexity, fit)
}

#[track_caller]
pub fn assert_mutating_performance<S, F, O>(
    complexity: &Complexity,
    config: &BenchmarkConfig,
    fit: &FitConfig,
    setup: F,
    operation: O,
) -> ComplexityReport
where
    S: Clone,
    F: FnMut(usize) -> S,
    O: Fn(&mut S),
{
    let benchmark = expect_config(Benchmark::mutating(config, setup, operation));
    assert_complexity(&benchmark, complexity, fit)
}

// Misconfigured benchmarks are bugs in the test itself.
#[track_caller]
fn expect_config(result: Result<Benchmark, PerfCurveError>) -> Benchmark {
    match result {
        Ok(benchmark) => benchmark,
        Err(err) => panic!("{err}"),
    }
}
