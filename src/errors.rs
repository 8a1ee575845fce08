use thiserror::Error;

#[derive(Debug, Error)]
pub enum PerfCurveError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("serialization error: {0}")]
    Serialization(String),
}

impl PerfCurveError {
    pub fn invalid_config<T: Into<String>>(msg: T) -> Self {
        PerfCurveError::InvalidConfig(msg.into())
    }

    pub fn invalid_input<T: Into<String>>(msg: T) -> Self {
        PerfCurveError::InvalidInput(msg.into())
    }

    pub fn serialization<T: Into<String>>(msg: T) -> Self {
        PerfCurveError::Serialization(msg.into())
    }
}

impl From<serde_json::Error> for PerfCurveError {
    fn from(err: serde_json::Error) -> Self {
        PerfCurveError::serialization(err.to_string())
    }
}
