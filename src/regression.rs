//! Ordinary least-squares fit over `(size, time)` points.
//!
//! The correlation reported here is `sqrt(Σ(x - x̄)² / Σ(y - ȳ)²) * slope`, the
//! goodness-of-fit statistic the classifier thresholds against. It is defined as
//! `0.0` whenever either variance is zero so degenerate data is rejected instead
//! of producing `NaN`.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    pub size: f64,
    pub time: f64,
}

impl DataPoint {
    pub fn new(size: f64, time: f64) -> Self {
        Self { size, time }
    }
}

impl From<(f64, f64)> for DataPoint {
    fn from((size, time): (f64, f64)) -> Self {
        Self { size, time }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RegressionResult {
    pub slope: f64,
    pub intercept: f64,
    pub correlation: f64,
}

pub fn linear_regression(points: &[DataPoint]) -> RegressionResult {
    // fewer than two distinct sizes leaves slope and intercept undefined
    if !has_distinct_sizes(points) {
        return RegressionResult {
            slope: f64::NAN,
            intercept: f64::NAN,
            correlation: 0.0,
        };
    }
    let n = points.len() as f64;
    let sum_x = sum(points.iter().map(|p| p.size));
    let sum_y = sum(points.iter().map(|p| p.time));
    let sum_xx = sum(points.iter().map(|p| p.size * p.size));
    let sum_xy = sum(points.iter().map(|p| p.size * p.time));

    let denominator = n * sum_xx - sum_x * sum_x;
    let slope = (n * sum_xy - sum_x * sum_y) / denominator;
    let intercept = (sum_y * sum_xx - sum_x * sum_xy) / denominator;

    RegressionResult {
        slope,
        intercept,
        correlation: correlation(points, sum_x, sum_y, slope),
    }
}

/// Whether at least two points differ in size.
pub fn has_distinct_sizes(points: &[DataPoint]) -> bool {
    match points.split_first() {
        Some((first, rest)) => rest.iter().any(|p| p.size != first.size),
        None => false,
    }
}

fn correlation(points: &[DataPoint], sum_x: f64, sum_y: f64, slope: f64) -> f64 {
    let n = points.len() as f64;
    let mean_y = sum_y / n;
    let squared_error_y = sum(points.iter().map(|p| (p.time - mean_y).powi(2)));
    if squared_error_y == 0.0 {
        return 0.0;
    }
    let mean_x = sum_x / n;
    let squared_error_x = sum(points.iter().map(|p| (p.size - mean_x).powi(2)));
    (squared_error_x / squared_error_y).sqrt() * slope
}

pub fn sum<I>(values: I) -> f64
where
    I: IntoIterator<Item = f64>,
{
    values.into_iter().fold(0.0, |acc, v| acc + v)
}

/// Arithmetic mean. Panics on an empty slice.
pub fn mean(values: &[f64]) -> f64 {
    assert!(!values.is_empty(), "mean of an empty sequence is undefined");
    sum(values.iter().copied()) / values.len() as f64
}

pub fn is_approximately_equal(value: f64, other: f64, epsilon: f64) -> bool {
    value == other || (other - value).abs() < epsilon
}
