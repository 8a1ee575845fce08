//! Accept/reject decision for a claimed complexity class.

use tracing::debug;

use crate::{
    benchmark::Benchmark,
    complexity::Complexity,
    config::FitConfig,
    regression::{DataPoint, linear_regression},
    report::{ComplexityReport, Threshold},
};

/// Maps each time through the inverse of `complexity`, keeping sizes.
pub fn linearize(data: &[DataPoint], complexity: &Complexity) -> Vec<DataPoint> {
    data.iter()
        .map(|point| DataPoint::new(point.size, complexity.inverse(point.time)))
        .collect()
}

/// Fits `data` against `complexity`.
///
/// Constant time is judged on the raw data: the slope must be within
/// `slope_tolerance` of zero and, when a ceiling is configured, the
/// correlation must stay below it. Every other class is linearized first and
/// must reach `minimum_correlation`. `NaN` statistics never pass.
pub fn evaluate(data: &[DataPoint], complexity: &Complexity, fit: &FitConfig) -> ComplexityReport {
    let mut failures = Vec::new();
    let (points, threshold) = if complexity.is_constant() {
        (
            data.to_vec(),
            Threshold::SlopeTolerance {
                tolerance: fit.slope_tolerance,
                ceiling: fit.correlation_ceiling,
            },
        )
    } else {
        (
            linearize(data, complexity),
            Threshold::MinimumCorrelation {
                minimum: fit.minimum_correlation,
            },
        )
    };
    let regression = linear_regression(&points);

    match threshold {
        Threshold::SlopeTolerance { tolerance, ceiling } => {
            if !(regression.slope.abs() < tolerance) {
                failures.push(format!(
                    "slope {} outside tolerance {}",
                    regression.slope, tolerance
                ));
            }
            if let Some(ceiling) = ceiling {
                if !(regression.correlation < ceiling) {
                    failures.push(format!(
                        "correlation {} not below ceiling {}; constant time should not trend with size",
                        regression.correlation, ceiling
                    ));
                }
            }
        }
        Threshold::MinimumCorrelation { minimum } => {
            if !(regression.correlation >= minimum) {
                failures.push(format!(
                    "correlation {} below minimum {}",
                    regression.correlation, minimum
                ));
            }
        }
    }

    let fits = failures.is_empty();
    debug!(
        complexity = complexity.name(),
        fits,
        slope = regression.slope,
        intercept = regression.intercept,
        correlation = regression.correlation,
        "complexity evaluated"
    );
    ComplexityReport {
        complexity: complexity.to_string(),
        fits,
        regression,
        points,
        threshold,
        failures,
    }
}

pub fn evaluate_benchmark(
    benchmark: &Benchmark,
    complexity: &Complexity,
    fit: &FitConfig,
) -> ComplexityReport {
    evaluate(&benchmark.data(), complexity, fit)
}

/// Whether the curve of `data` resembles `complexity` under default thresholds.
pub fn curve_is(data: &[DataPoint], complexity: &Complexity) -> bool {
    evaluate(data, complexity, &FitConfig::default()).fits
}
