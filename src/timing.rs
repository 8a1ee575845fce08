//! Single-shot timing and trials.

use std::time::Instant;

use crate::regression::mean;

/// Seconds taken by exactly one call of `operation`.
///
/// Measured with the monotonic clock, so the result is never negative.
pub fn time<F>(operation: F) -> f64
where
    F: FnOnce(),
{
    let start = Instant::now();
    operation();
    start.elapsed().as_secs_f64()
}

/// One timed execution of an operation against a subject.
///
/// A non-mutating trial borrows the prepared subject, so every trial at a size
/// shares it. A mutating trial owns a private copy taken before the timed
/// region, so state never leaks from one trial into the next.
pub enum Trial<'a, S> {
    NonMutating {
        subject: &'a S,
        operation: &'a dyn Fn(&S),
    },
    Mutating {
        subject: S,
        operation: &'a dyn Fn(&mut S),
    },
}

impl<'a, S> Trial<'a, S> {
    pub fn non_mutating(subject: &'a S, operation: &'a dyn Fn(&S)) -> Self {
        Trial::NonMutating { subject, operation }
    }

    pub fn mutating(baseline: &S, operation: &'a dyn Fn(&mut S)) -> Self
    where
        S: Clone,
    {
        Self::mutating_with(baseline, S::clone, operation)
    }

    /// Like [`Trial::mutating`], with `copy` producing the private subject.
    pub fn mutating_with(
        baseline: &S,
        copy: fn(&S) -> S,
        operation: &'a dyn Fn(&mut S),
    ) -> Self {
        Trial::Mutating {
            subject: copy(baseline),
            operation,
        }
    }

    pub fn is_mutating(&self) -> bool {
        matches!(self, Trial::Mutating { .. })
    }

    /// Runs the operation once and returns the elapsed seconds. The mutated
    /// copy is dropped after the clock stops.
    pub fn time(self) -> f64 {
        match self {
            Trial::NonMutating { subject, operation } => time(|| operation(subject)),
            Trial::Mutating {
                mut subject,
                operation,
            } => time(|| operation(&mut subject)),
        }
    }
}

/// Mean duration of `iterations` timed calls of `operation`.
pub fn mean_execution_time<F>(iterations: usize, mut operation: F) -> f64
where
    F: FnMut(),
{
    mean_outcome(iterations, || time(&mut operation))
}

/// Mean of `iterations` values produced by `outcome`. Useful when the closure
/// prepares fresh state and times only part of its body.
pub fn mean_outcome<F>(iterations: usize, mut outcome: F) -> f64
where
    F: FnMut() -> f64,
{
    let samples: Vec<f64> = (0..iterations).map(|_| outcome()).collect();
    mean(&samples)
}
