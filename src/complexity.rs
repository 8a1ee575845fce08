//! Complexity classes and their linearizing inverse functions.
//!
//! If an operation's running time grows like `f(n)`, applying `f⁻¹` to each
//! measured time yields values that are approximately linear in `n`. The
//! classifier relies on this to reduce every class to a straight-line fit.

use std::{fmt, str::FromStr, sync::Arc};

use crate::PerfCurveError;

/// Caller-supplied inverse function for [`Complexity::Custom`].
#[derive(Clone)]
pub struct CustomInverse(Arc<dyn Fn(f64) -> f64 + Send + Sync>);

impl CustomInverse {
    pub fn new<F>(inverse: F) -> Self
    where
        F: Fn(f64) -> f64 + Send + Sync + 'static,
    {
        Self(Arc::new(inverse))
    }

    pub fn apply(&self, time: f64) -> f64 {
        (self.0)(time)
    }
}

impl fmt::Debug for CustomInverse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("CustomInverse(..)")
    }
}

/// Big-O style complexity classes.
#[derive(Clone, Debug)]
pub enum Complexity {
    Constant,
    Logarithmic,
    SquareRoot,
    Linear,
    Quadratic,
    Cubic,
    Exponential,
    Custom(CustomInverse),
}

impl Complexity {
    pub fn custom<F>(inverse: F) -> Self
    where
        F: Fn(f64) -> f64 + Send + Sync + 'static,
    {
        Complexity::Custom(CustomInverse::new(inverse))
    }

    /// Maps a measured time onto a scale that is linear in the input size when
    /// the time grows according to this class.
    pub fn inverse(&self, time: f64) -> f64 {
        match self {
            Complexity::Constant | Complexity::Linear => time,
            Complexity::Logarithmic => time.exp(),
            Complexity::SquareRoot => time * time,
            Complexity::Quadratic => time.sqrt(),
            Complexity::Cubic => time.cbrt(),
            Complexity::Exponential => time.ln(),
            Complexity::Custom(inverse) => inverse.apply(time),
        }
    }

    /// The growth function itself. Custom classes only carry an inverse, so
    /// they have no growth function.
    pub fn growth(&self, size: f64) -> Option<f64> {
        let value = match self {
            Complexity::Constant => 1.0,
            Complexity::Logarithmic => size.ln(),
            Complexity::SquareRoot => size.sqrt(),
            Complexity::Linear => size,
            Complexity::Quadratic => size * size,
            Complexity::Cubic => size * size * size,
            Complexity::Exponential => size.exp(),
            Complexity::Custom(_) => return None,
        };
        Some(value)
    }

    pub fn is_constant(&self) -> bool {
        matches!(self, Complexity::Constant)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Complexity::Constant => "constant",
            Complexity::Logarithmic => "logarithmic",
            Complexity::SquareRoot => "square-root",
            Complexity::Linear => "linear",
            Complexity::Quadratic => "quadratic",
            Complexity::Cubic => "cubic",
            Complexity::Exponential => "exponential",
            Complexity::Custom(_) => "custom",
        }
    }

    pub fn notation(&self) -> &'static str {
        match self {
            Complexity::Constant => "O(1)",
            Complexity::Logarithmic => "O(log n)",
            Complexity::SquareRoot => "O(sqrt n)",
            Complexity::Linear => "O(n)",
            Complexity::Quadratic => "O(n^2)",
            Complexity::Cubic => "O(n^3)",
            Complexity::Exponential => "O(e^n)",
            Complexity::Custom(_) => "O(f(n))",
        }
    }
}

impl fmt::Display for Complexity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.name(), self.notation())
    }
}

impl FromStr for Complexity {
    type Err = PerfCurveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "constant" | "o(1)" => Ok(Complexity::Constant),
            "logarithmic" | "log" => Ok(Complexity::Logarithmic),
            "square-root" | "squareroot" | "sqrt" => Ok(Complexity::SquareRoot),
            "linear" => Ok(Complexity::Linear),
            "quadratic" => Ok(Complexity::Quadratic),
            "cubic" => Ok(Complexity::Cubic),
            "exponential" | "exp" => Ok(Complexity::Exponential),
            other => Err(PerfCurveError::invalid_input(format!(
                "unknown complexity class {other}"
            ))),
        }
    }
}
