//! Error types for the toll inference library.

use std::fmt;

/// Result type alias for prediction operations.
pub type Result<T> = std::result::Result<T, PredictError>;

/// Main error type for the toll inference library.
#[derive(Debug)]
pub enum PredictError {
    /// Error loading the ONNX model artifact.
    ModelLoadError(String),
    /// Error during the forward-inference call.
    InferenceError(String),
    /// Error serializing the prediction record.
    OutputError(String),
    /// Wrapped `std::io::Error`.
    Io(std::io::Error),
}

impl fmt::Display for PredictError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ModelLoadError(msg) => write!(f, "Model load error: {msg}"),
            Self::InferenceError(msg) => write!(f, "Inference error: {msg}"),
            Self::OutputError(msg) => write!(f, "Output error: {msg}"),
            Self::Io(err) => write!(f, "IO error: {err}"),
        }
    }
}

impl std::error::Error for PredictError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for PredictError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_json::Error> for PredictError {
    fn from(err: serde_json::Error) -> Self {
        Self::OutputError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PredictError::ModelLoadError("test".to_string());
        assert_eq!(err.to_string(), "Model load error: test");

        let err = PredictError::InferenceError("test".to_string());
        assert_eq!(err.to_string(), "Inference error: test");
    }

    #[test]
    fn test_io_error_source() {
        use std::error::Error;
        let err = PredictError::from(std::io::Error::new(std::io::ErrorKind::Other, "boom"));
        assert!(err.source().is_some());
    }
}
