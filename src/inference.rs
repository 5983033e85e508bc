//! Inference configuration.
//!
//! This module defines the [`InferenceConfig`] struct, which controls session
//! options for the forward-inference call.

/// Configuration for a toll model inference session.
///
/// Uses a builder pattern for convenient construction.
///
/// # Example
///
/// ```rust
/// use toll_inference::InferenceConfig;
///
/// let config = InferenceConfig::new().with_threads(1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct InferenceConfig {
    /// Number of intra-op threads for ONNX Runtime.
    /// `0` (the default) lets ONNX Runtime choose the optimal number.
    pub num_threads: usize,
}

impl InferenceConfig {
    /// Create a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of intra-op threads. Set to `0` for auto-configuration.
    #[must_use]
    pub const fn with_threads(mut self, threads: usize) -> Self {
        self.num_threads = threads;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = InferenceConfig::default();
        assert_eq!(config.num_threads, 0);
    }

    #[test]
    fn test_config_builder() {
        let config = InferenceConfig::new().with_threads(4);
        assert_eq!(config.num_threads, 4);
    }
}
