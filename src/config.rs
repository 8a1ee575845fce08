//! Runner and classifier configuration.

use std::{fmt, str::FromStr};

use ahash::AHashSet;
use serde::{Deserialize, Serialize};

use crate::{
    PerfCurveError,
    regression::{DataPoint, has_distinct_sizes},
    scale::Scale,
};

pub const DEFAULT_TRIAL_COUNT: usize = 10;
pub const DEFAULT_MINIMUM_CORRELATION: f64 = 0.9;
pub const DEFAULT_SLOPE_TOLERANCE: f64 = 0.01;
pub const DEFAULT_CORRELATION_CEILING: f64 = 0.9;

/// How much diagnostic output the assertion helpers print.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Logging {
    /// Nothing is printed.
    #[default]
    None,
    /// One summary line per evaluated operation.
    Overview,
    /// Every data point plus the full regression.
    Detailed,
}

impl fmt::Display for Logging {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Logging::None => "none",
            Logging::Overview => "overview",
            Logging::Detailed => "detailed",
        };
        f.write_str(name)
    }
}

impl FromStr for Logging {
    type Err = PerfCurveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "none" => Ok(Logging::None),
            "overview" => Ok(Logging::Overview),
            "detailed" => Ok(Logging::Detailed),
            other => Err(PerfCurveError::invalid_input(format!(
                "unknown logging level {other}"
            ))),
        }
    }
}

/// Input sizes and repetitions for a benchmark run.
///
/// # Default Configuration
///
/// ```rust
/// use perfcurve::{BenchmarkConfig, Scale};
/// let config = BenchmarkConfig::default();
/// assert_eq!(config.trial_count, 10);
/// assert_eq!(config.test_points, Scale::Medium.points());
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkConfig {
    /// Input sizes, benchmarked in the given order.
    pub test_points: Vec<usize>,
    /// Timed repetitions per input size.
    pub trial_count: usize,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            test_points: Scale::default().points(),
            trial_count: DEFAULT_TRIAL_COUNT,
        }
    }
}

impl BenchmarkConfig {
    pub fn new(test_points: Vec<usize>, trial_count: usize) -> Self {
        Self {
            test_points,
            trial_count,
        }
    }

    pub fn with_test_points(mut self, test_points: Vec<usize>) -> Self {
        self.test_points = test_points;
        self
    }

    pub fn with_scale(mut self, scale: Scale) -> Self {
        self.test_points = scale.points();
        self
    }

    pub fn with_trial_count(mut self, trial_count: usize) -> Self {
        self.trial_count = trial_count;
        self
    }

    pub fn validate(&self) -> Result<(), PerfCurveError> {
        if self.test_points.is_empty() {
            return Err(PerfCurveError::invalid_config("test points must not be empty"));
        }
        if self.trial_count == 0 {
            return Err(PerfCurveError::invalid_config(
                "trial count must be at least 1",
            ));
        }
        let distinct: AHashSet<usize> = self.test_points.iter().copied().collect();
        require_distinct_sizes(distinct.len() >= 2)
    }
}

/// Rejects measured data that cannot be fitted: fewer than two distinct sizes.
pub fn validate_data(points: &[DataPoint]) -> Result<(), PerfCurveError> {
    if points.is_empty() {
        return Err(PerfCurveError::invalid_config("no data points"));
    }
    require_distinct_sizes(has_distinct_sizes(points))
}

fn require_distinct_sizes(distinct: bool) -> Result<(), PerfCurveError> {
    if distinct {
        Ok(())
    } else {
        Err(PerfCurveError::invalid_config(
            "test points need at least two distinct sizes",
        ))
    }
}

/// Acceptance thresholds for the complexity classifier.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FitConfig {
    /// Lowest correlation accepted for every non-constant class.
    pub minimum_correlation: f64,
    /// Largest absolute slope accepted for the constant class.
    pub slope_tolerance: f64,
    /// Constant-class data must also correlate below this, when set.
    pub correlation_ceiling: Option<f64>,
    pub logging: Logging,
}

impl Default for FitConfig {
    fn default() -> Self {
        Self {
            minimum_correlation: DEFAULT_MINIMUM_CORRELATION,
            slope_tolerance: DEFAULT_SLOPE_TOLERANCE,
            correlation_ceiling: Some(DEFAULT_CORRELATION_CEILING),
            logging: Logging::None,
        }
    }
}

impl FitConfig {
    pub fn with_minimum_correlation(mut self, minimum_correlation: f64) -> Self {
        self.minimum_correlation = minimum_correlation;
        self
    }

    pub fn with_slope_tolerance(mut self, slope_tolerance: f64) -> Self {
        self.slope_tolerance = slope_tolerance;
        self
    }

    pub fn with_correlation_ceiling(mut self, ceiling: Option<f64>) -> Self {
        self.correlation_ceiling = ceiling;
        self
    }

    pub fn with_logging(mut self, logging: Logging) -> Self {
        self.logging = logging;
        self
    }
}
