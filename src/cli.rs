use std::io::Read;

use serde::Deserialize;

use crate::{
    PerfCurveError,
    complexity::Complexity,
    config::{
        DEFAULT_CORRELATION_CEILING, DEFAULT_MINIMUM_CORRELATION, DEFAULT_SLOPE_TOLERANCE,
        FitConfig, Logging,
    },
    regression::DataPoint,
    scale::Scale,
};

#[derive(Clone, Debug, PartialEq)]
pub struct CommandLineConfig {
    pub command: String,
    pub complexity: String,
    pub input: String,
    pub minimum_correlation: f64,
    pub slope_tolerance: f64,
    pub correlation_ceiling: Option<f64>,
    pub logging: Logging,
    pub scale: Scale,
    pub json: bool,
}

impl Default for CommandLineConfig {
    fn default() -> Self {
        Self {
            command: String::from("fit"),
            complexity: String::from("linear"),
            input: String::from("-"),
            minimum_correlation: DEFAULT_MINIMUM_CORRELATION,
            slope_tolerance: DEFAULT_SLOPE_TOLERANCE,
            correlation_ceiling: Some(DEFAULT_CORRELATION_CEILING),
            logging: Logging::Overview,
            scale: Scale::default(),
            json: false,
        }
    }
}

impl CommandLineConfig {
    pub fn from_args(args: &[&str]) -> Result<Self, PerfCurveError> {
        let mut config = Self::default();
        let mut iter = args.iter().skip(1);
        while let Some(arg) = iter.next() {
            match *arg {
                "--command" => config.command = value(&mut iter, arg)?.to_string(),
                "--complexity" => config.complexity = value(&mut iter, arg)?.to_string(),
                "--input" => config.input = value(&mut iter, arg)?.to_string(),
                "--min-correlation" => {
                    config.minimum_correlation = number(value(&mut iter, arg)?, arg)?;
                }
                "--slope-tolerance" => {
                    config.slope_tolerance = number(value(&mut iter, arg)?, arg)?;
                }
                "--ceiling" => {
                    config.correlation_ceiling = match value(&mut iter, arg)? {
                        "none" => None,
                        raw => Some(number(raw, arg)?),
                    };
                }
                "--logging" => config.logging = value(&mut iter, arg)?.parse()?,
                "--scale" => config.scale = value(&mut iter, arg)?.parse()?,
                "--json" => config.json = true,
                other if other.starts_with('-') => {
                    return Err(PerfCurveError::invalid_input(format!("unknown flag {other}")));
                }
                _ => config.command = arg.to_string(),
            }
        }
        Ok(config)
    }

    pub fn help() -> &'static str {
        "Usage: perfcurve [--command fit|scale] [--complexity NAME] [--input PATH|-]\n\
         \x20                [--min-correlation X] [--slope-tolerance X] [--ceiling X|none]\n\
         \x20                [--logging none|overview|detailed] [--scale tiny|small|medium|large] [--json]\n"
    }

    pub fn complexity(&self) -> Result<Complexity, PerfCurveError> {
        self.complexity.parse()
    }

    pub fn fit_config(&self) -> FitConfig {
        FitConfig::default()
            .with_minimum_correlation(self.minimum_correlation)
            .with_slope_tolerance(self.slope_tolerance)
            .with_correlation_ceiling(self.correlation_ceiling)
            .with_logging(self.logging)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum PointInput {
    Pair(f64, f64),
    Point(DataPoint),
}

/// Reads a JSON array of `[size, time]` pairs or `{"size", "time"}` objects.
pub fn read_points<R: Read>(reader: R) -> Result<Vec<DataPoint>, PerfCurveError> {
    let raw: Vec<PointInput> = serde_json::from_reader(reader)
        .map_err(|e| PerfCurveError::invalid_input(e.to_string()))?;
    Ok(raw
        .into_iter()
        .map(|point| match point {
            PointInput::Pair(size, time) => DataPoint::new(size, time),
            PointInput::Point(point) => point,
        })
        .collect())
}

fn value<'a, 'b, I>(iter: &mut I, flag: &str) -> Result<&'a str, PerfCurveError>
where
    'a: 'b,
    I: Iterator<Item = &'b &'a str>,
{
    iter.next()
        .copied()
        .ok_or_else(|| PerfCurveError::invalid_input(format!("{flag} requires a value")))
}

fn number(raw: &str, flag: &str) -> Result<f64, PerfCurveError> {
    raw.parse()
        .map_err(|_| PerfCurveError::invalid_input(format!("{flag} expects a number, got {raw}")))
}
