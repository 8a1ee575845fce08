use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::PerfCurveError;

const POINTS_PER_SCALE: usize = 10;

/// Preset ranges of input sizes, each an approximately exponential series.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scale {
    Tiny,
    Small,
    #[default]
    Medium,
    Large,
}

impl Scale {
    pub fn bounds(self) -> (usize, usize) {
        match self {
            Scale::Tiny => (5, 100),
            Scale::Small => (10, 1_000),
            Scale::Medium => (100, 1_000_000),
            Scale::Large => (1_000, 1_000_000_000),
        }
    }

    pub fn points(self) -> Vec<usize> {
        let (from, to) = self.bounds();
        exponential_series(POINTS_PER_SCALE, from, to)
    }
}

impl fmt::Display for Scale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Scale::Tiny => "tiny",
            Scale::Small => "small",
            Scale::Medium => "medium",
            Scale::Large => "large",
        };
        f.write_str(name)
    }
}

impl FromStr for Scale {
    type Err = PerfCurveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "tiny" => Ok(Scale::Tiny),
            "small" => Ok(Scale::Small),
            "medium" => Ok(Scale::Medium),
            "large" => Ok(Scale::Large),
            other => Err(PerfCurveError::invalid_input(format!("unknown scale {other}"))),
        }
    }
}

/// `count` rounded sizes spaced geometrically from `from` to `to`, both ends
/// included.
pub fn exponential_series(count: usize, from: usize, to: usize) -> Vec<usize> {
    assert!(count > 1, "an exponential series needs at least two points");
    assert!(to > from, "series end must exceed its start");
    let range = (to - from + 1) as f64;
    let base = range.powf(1.0 / (count - 1) as f64);
    (0..count)
        .map(|i| (base.powi(i as i32) + from as f64 - 1.0).round() as usize)
        .collect()
}
