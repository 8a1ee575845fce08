//! Classifier verdicts and their printable diagnostics.

use std::fmt::{self, Write};

use serde::Serialize;

use crate::{
    PerfCurveError,
    config::Logging,
    regression::{DataPoint, RegressionResult},
};

/// The acceptance rule that was applied.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Threshold {
    SlopeTolerance { tolerance: f64, ceiling: Option<f64> },
    MinimumCorrelation { minimum: f64 },
}

impl fmt::Display for Threshold {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Threshold::SlopeTolerance {
                tolerance,
                ceiling: Some(ceiling),
            } => write!(f, "|slope| < {tolerance}, correlation < {ceiling}"),
            Threshold::SlopeTolerance {
                tolerance,
                ceiling: None,
            } => write!(f, "|slope| < {tolerance}"),
            Threshold::MinimumCorrelation { minimum } => write!(f, "correlation >= {minimum}"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ComplexityReport {
    pub complexity: String,
    pub fits: bool,
    pub regression: RegressionResult,
    /// The points the regression ran on; linearized for non-constant classes.
    pub points: Vec<DataPoint>,
    pub threshold: Threshold,
    pub failures: Vec<String>,
}

impl ComplexityReport {
    pub fn summary(&self) -> String {
        format!(
            "{}: {} (slope={} intercept={} correlation={}; {})",
            self.complexity,
            if self.fits { "fits" } else { "rejected" },
            self.regression.slope,
            self.regression.intercept,
            self.regression.correlation,
            self.threshold
        )
    }

    pub fn render(&self, logging: Logging) -> String {
        match logging {
            Logging::None => String::new(),
            Logging::Overview => format!("{}\n", self.summary()),
            Logging::Detailed => self.detailed(),
        }
    }

    /// Prints the report to stdout at the given level.
    pub fn emit(&self, logging: Logging) {
        let text = self.render(logging);
        if !text.is_empty() {
            print!("{text}");
        }
    }

    pub fn to_json(&self) -> Result<String, PerfCurveError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    fn detailed(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "complexity: {}", self.complexity);
        for (index, point) in self.points.iter().enumerate() {
            let _ = writeln!(
                out,
                "point {}: size: {}, time: {}",
                index + 1,
                point.size,
                point.time
            );
        }
        let _ = writeln!(out, "slope: {}", self.regression.slope);
        let _ = writeln!(out, "intercept: {}", self.regression.intercept);
        let _ = writeln!(out, "correlation: {}", self.regression.correlation);
        let _ = writeln!(out, "threshold: {}", self.threshold);
        let _ = writeln!(out, "verdict: {}", if self.fits { "fits" } else { "rejected" });
        for failure in &self.failures {
            let _ = writeln!(out, "failure: {failure}");
        }
        out
    }
}

impl fmt::Display for ComplexityReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.summary())
    }
}
