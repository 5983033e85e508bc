//! Toll model loading and inference.
//!
//! This module provides the main `TollModel` struct for loading the ONNX
//! regression model and running a single forward pass.

use std::path::Path;

use ort::session::Session;
use ort::value::TensorRef;

use crate::error::{PredictError, Result};
use crate::features::TollFeatures;
use crate::inference::InferenceConfig;
use crate::prediction::Prediction;

/// Default model artifact path, fixed in source.
pub const DEFAULT_MODEL: &str = "toll_model.onnx";

/// Pre-trained toll price regression model.
///
/// This struct wraps an ONNX Runtime session and provides methods for
/// running a single prediction. The artifact is loaded once per process
/// and consumed read-only.
///
/// # Example
///
/// ```no_run
/// use toll_inference::TollModel;
///
/// let mut model = TollModel::load("toll_model.onnx").unwrap();
/// let prediction = model.predict_price(2, 14).unwrap();
/// println!("{}", prediction.to_json_line().unwrap());
/// ```
pub struct TollModel {
    /// ONNX Runtime session.
    session: Session,
    /// Input tensor name.
    input_name: String,
    /// Output tensor names.
    output_names: Vec<String>,
}

impl TollModel {
    /// Load the toll model from an ONNX file.
    ///
    /// # Errors
    ///
    /// Returns an error if the model file doesn't exist or can't be loaded.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::load_with_config(path, InferenceConfig::default())
    }

    /// Load the toll model with custom session configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the model file doesn't exist or can't be loaded.
    pub fn load_with_config<P: AsRef<Path>>(path: P, config: InferenceConfig) -> Result<Self> {
        let path = path.as_ref();

        // Check if file exists before touching ONNX Runtime
        if !path.exists() {
            return Err(PredictError::ModelLoadError(format!(
                "Model file not found: {}",
                path.display()
            )));
        }

        let session = Session::builder()
            .map_err(|e| {
                PredictError::ModelLoadError(format!("Failed to create session builder: {e}"))
            })?
            .with_optimization_level(ort::session::builder::GraphOptimizationLevel::Level3)
            .map_err(|e| {
                PredictError::ModelLoadError(format!("Failed to set optimization level: {e}"))
            })?
            .with_intra_threads(config.num_threads)
            .map_err(|e| {
                PredictError::ModelLoadError(format!("Failed to set intra-thread count: {e}"))
            })?
            .commit_from_file(path)
            .map_err(|e| PredictError::ModelLoadError(format!("Failed to load model: {e}")))?;

        // Get input/output names
        let input_name = session
            .inputs
            .first()
            .map(|i| i.name.clone())
            .unwrap_or_else(|| "input".to_string());

        let output_names: Vec<String> = session.outputs.iter().map(|o| o.name.clone()).collect();

        Ok(Self {
            session,
            input_name,
            output_names,
        })
    }

    /// Run one forward pass and return the model's scalar output.
    ///
    /// The scalar is the first element of the first row of the output
    /// tensor, matching the `[1, 1]` shape the model was exported with.
    ///
    /// # Errors
    ///
    /// Returns an error if the session call fails or the model produces an
    /// empty output.
    pub fn predict(&mut self, features: &TollFeatures) -> Result<f32> {
        let input = features.to_tensor();
        let (data, shape) = self.run_inference(&input)?;

        data.first().copied().ok_or_else(|| {
            PredictError::InferenceError(format!(
                "Model produced an empty output tensor (shape {shape:?})"
            ))
        })
    }

    /// Run one prediction end to end: features, forward pass, rounded record.
    ///
    /// # Errors
    ///
    /// Returns an error if inference fails.
    pub fn predict_price(&mut self, area_type: i64, hour: i64) -> Result<Prediction> {
        let raw = self.predict(&TollFeatures::new(area_type, hour))?;
        Ok(Prediction::new(area_type, hour, raw))
    }

    /// Run the ONNX session on a prepared input tensor.
    fn run_inference(&mut self, input: &ndarray::Array2<f32>) -> Result<(Vec<f32>, Vec<usize>)> {
        // Ensure input is contiguous in memory (CowArray)
        let input_contiguous = input.as_standard_layout();

        let input_tensor = TensorRef::from_array_view(&input_contiguous).map_err(|e| {
            PredictError::InferenceError(format!("Failed to create input tensor: {e}"))
        })?;

        let inputs = ort::inputs![&self.input_name => input_tensor];

        let outputs = self
            .session
            .run(inputs)
            .map_err(|e| PredictError::InferenceError(format!("Inference failed: {e}")))?;

        let output_name = self.output_names.first().ok_or_else(|| {
            PredictError::InferenceError("Model declares no output tensors".to_string())
        })?;
        let output = outputs.get(output_name.as_str()).ok_or_else(|| {
            PredictError::InferenceError(format!("Output '{output_name}' not found"))
        })?;

        let (shape, data) = output.try_extract_tensor::<f32>().map_err(|e| {
            PredictError::InferenceError(format!("Failed to extract output: {e}"))
        })?;

        let shape_vec: Vec<usize> = shape.iter().map(|&d| d as usize).collect();
        Ok((data.to_vec(), shape_vec))
    }

    /// Name of the model's input tensor.
    #[must_use]
    pub fn input_name(&self) -> &str {
        &self.input_name
    }

    /// Names of the model's output tensors.
    #[must_use]
    pub fn output_names(&self) -> &[String] {
        &self.output_names
    }
}

impl std::fmt::Debug for TollModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TollModel")
            .field("input_name", &self.input_name)
            .field("output_names", &self.output_names)
            .finish()
    }
}
