//! Prediction input features.
//!
//! The model takes exactly two features: a toll-zone area-type code and an
//! hour-of-day value. Both arrive as integers from the command line and are
//! widened to `f32` when packed into the input tensor.

use ndarray::Array2;

/// The `(areaType, hour)` input pair for a single prediction.
///
/// No range validation is performed; any integer is accepted, negative
/// included. The raw values are echoed verbatim in the output record.
///
/// # Example
///
/// ```rust
/// use toll_inference::TollFeatures;
///
/// let features = TollFeatures::new(2, 14);
/// let tensor = features.to_tensor();
/// assert_eq!(tensor.shape(), &[1, 2]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TollFeatures {
    /// Toll-zone area-type code.
    pub area_type: i64,
    /// Hour of day.
    pub hour: i64,
}

impl TollFeatures {
    /// Create a feature pair from raw command-line integers.
    #[must_use]
    pub const fn new(area_type: i64, hour: i64) -> Self {
        Self { area_type, hour }
    }

    /// Pack the features into a single-row, two-column `f32` tensor,
    /// the input shape the regression model was exported with.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn to_tensor(&self) -> Array2<f32> {
        ndarray::arr2(&[[self.area_type as f32, self.hour as f32]])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tensor_shape() {
        let features = TollFeatures::new(2, 14);
        let tensor = features.to_tensor();
        assert_eq!(tensor.shape(), &[1, 2]);
        assert!((tensor[[0, 0]] - 2.0).abs() < f32::EPSILON);
        assert!((tensor[[0, 1]] - 14.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_negative_inputs_accepted() {
        // No range validation: semantically invalid codes flow through.
        let features = TollFeatures::new(-1, 30);
        let tensor = features.to_tensor();
        assert!((tensor[[0, 0]] + 1.0).abs() < f32::EPSILON);
        assert!((tensor[[0, 1]] - 30.0).abs() < f32::EPSILON);
    }
}
