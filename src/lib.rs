//! Empirical complexity assertions.
//!
//! perfcurve times an operation across a range of input sizes, fits the
//! resulting `(size, time)` curve to a claimed complexity class and reports
//! whether the fit is acceptable. Every class is reduced to a straight-line
//! fit by mapping the measured times through the inverse of the class's
//! growth function.
//!
//! ```rust,no_run
//! use perfcurve::{BenchmarkConfig, Complexity, FitConfig, Scale, assertions, fixtures};
//!
//! let config = BenchmarkConfig::default().with_scale(Scale::Small);
//! assertions::assert_non_mutating_performance(
//!     &Complexity::Linear,
//!     &config,
//!     &FitConfig::default(),
//!     fixtures::sequential_vec,
//!     |values| {
//!         std::hint::black_box(values.iter().sum::<u64>());
//!     },
//! );
//! ```

pub mod assertions;
pub mod benchmark;
pub mod classifier;
pub mod cli;
pub mod complexity;
pub mod config;
pub mod errors;
pub mod fixtures;
pub mod regression;
pub mod report;
pub mod scale;
pub mod timing;

pub use crate::benchmark::{Benchmark, Operation, TestPoint, run_benchmark};
pub use crate::classifier::{curve_is, evaluate, evaluate_benchmark, linearize};
pub use crate::complexity::{Complexity, CustomInverse};
pub use crate::config::{BenchmarkConfig, FitConfig, Logging};
pub use crate::errors::PerfCurveError;
pub use crate::regression::{DataPoint, RegressionResult, linear_regression};
pub use crate::report::{ComplexityReport, Threshold};
pub use crate::scale::{Scale, exponential_series};
pub use crate::timing::{Trial, mean_execution_time, mean_outcome, time};
