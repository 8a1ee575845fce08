//! Benchmark runner: trials across input sizes.

use serde::Serialize;
use tracing::{debug, trace};

use crate::{
    PerfCurveError,
    config::BenchmarkConfig,
    regression::{DataPoint, mean},
    timing::Trial,
};

/// Every trial measured at one input size.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TestPoint {
    size: usize,
    trials: Vec<f64>,
}

impl TestPoint {
    pub fn new(size: usize, trials: Vec<f64>) -> Result<Self, PerfCurveError> {
        if trials.is_empty() {
            return Err(PerfCurveError::invalid_config(format!(
                "test point {size} has no trials"
            )));
        }
        Ok(Self { size, trials })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn trials(&self) -> &[f64] {
        &self.trials
    }

    pub fn average(&self) -> f64 {
        mean(&self.trials)
    }
}

/// The operation under test, tagged by whether it mutates its subject.
///
/// A mutating operation carries the function that copies the baseline before
/// each trial, so only mutating runs need a copyable subject.
pub enum Operation<'a, S> {
    NonMutating(&'a dyn Fn(&S)),
    Mutating {
        operation: &'a dyn Fn(&mut S),
        copy: fn(&S) -> S,
    },
}

impl<'a, S> Operation<'a, S> {
    pub fn non_mutating(operation: &'a dyn Fn(&S)) -> Self {
        Operation::NonMutating(operation)
    }

    pub fn mutating(operation: &'a dyn Fn(&mut S)) -> Self
    where
        S: Clone,
    {
        Operation::Mutating {
            operation,
            copy: S::clone,
        }
    }

    pub fn is_mutating(&self) -> bool {
        matches!(self, Operation::Mutating { .. })
    }
}

/// Ordered test points of one operation over varying input sizes.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Benchmark {
    test_points: Vec<TestPoint>,
}

impl Benchmark {
    pub fn new(test_points: Vec<TestPoint>) -> Self {
        Self { test_points }
    }

    /// Times `operation` against the subject built by `setup`, reusing one
    /// subject for every trial at a size.
    pub fn non_mutating<S, F, O>(
        config: &BenchmarkConfig,
        setup: F,
        operation: O,
    ) -> Result<Self, PerfCurveError>
    where
        F: FnMut(usize) -> S,
        O: Fn(&S),
    {
        run_trials(config, setup, |subject| {
            Trial::non_mutating(subject, &operation).time()
        })
    }

    /// Times `operation` against a fresh clone of the subject built by `setup`
    /// on every trial.
    pub fn mutating<S, F, O>(
        config: &BenchmarkConfig,
        setup: F,
        operation: O,
    ) -> Result<Self, PerfCurveError>
    where
        S: Clone,
        F: FnMut(usize) -> S,
        O: Fn(&mut S),
    {
        run_trials(config, setup, |subject| {
            Trial::mutating(subject, &operation).time()
        })
    }

    /// One trial per size from a closure that measures its own timing.
    pub fn from_measurements<F>(test_points: &[usize], mut measure: F) -> Result<Self, PerfCurveError>
    where
        F: FnMut(usize) -> f64,
    {
        BenchmarkConfig::new(test_points.to_vec(), 1).validate()?;
        let points = test_points
            .iter()
            .map(|&size| TestPoint::new(size, vec![measure(size)]))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(points))
    }

    pub fn test_points(&self) -> &[TestPoint] {
        &self.test_points
    }

    pub fn len(&self) -> usize {
        self.test_points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.test_points.is_empty()
    }

    /// `(size, average time)` for each test point, in order.
    pub fn data(&self) -> Vec<DataPoint> {
        self.test_points
            .iter()
            .map(|point| DataPoint::new(point.size as f64, point.average()))
            .collect()
    }
}

pub fn run_benchmark<S, F>(
    config: &BenchmarkConfig,
    setup: F,
    operation: Operation<'_, S>,
) -> Result<Benchmark, PerfCurveError>
where
    F: FnMut(usize) -> S,
{
    match operation {
        Operation::NonMutating(op) => {
            run_trials(config, setup, |subject| Trial::non_mutating(subject, op).time())
        }
        Operation::Mutating { operation, copy } => run_trials(config, setup, |subject| {
            Trial::mutating_with(subject, copy, operation).time()
        }),
    }
}

fn run_trials<S, F, T>(
    config: &BenchmarkConfig,
    mut setup: F,
    mut trial: T,
) -> Result<Benchmark, PerfCurveError>
where
    F: FnMut(usize) -> S,
    T: FnMut(&S) -> f64,
{
    config.validate()?;
    let mut test_points = Vec::with_capacity(config.test_points.len());
    for &size in &config.test_points {
        let baseline = setup(size);
        let trials: Vec<f64> = (0..config.trial_count)
            .map(|index| {
                let elapsed = trial(&baseline);
                trace!(size, index, elapsed, "trial");
                elapsed
            })
            .collect();
        let point = TestPoint::new(size, trials)?;
        debug!(
            size,
            trials = config.trial_count,
            average = point.average(),
            "test point"
        );
        test_points.push(point);
    }
    Ok(Benchmark::new(test_points))
}
