#![allow(clippy::multiple_crate_versions)]

//! # Toll Price Inference
//!
//! Command-line predictor for toll prices, backed by a pre-trained ONNX
//! regression model. Given a toll-zone area-type code and an hour of day,
//! it runs a single forward-inference call and emits one JSON record:
//!
//! ```text
//! $ toll-inference 2 14
//! {"areaType": 2, "hour": 14, "price": 3.7}
//! ```
//!
//! ## Quick Start (Library)
//!
//! ```no_run
//! use toll_inference::TollModel;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut model = TollModel::load("toll_model.onnx")?;
//!     let prediction = model.predict_price(2, 14)?;
//!     println!("{}", prediction.to_json_line()?);
//!     Ok(())
//! }
//! ```
//!
//! ## CLI Usage
//!
//! ```bash
//! # Predict with the default artifact (./toll_model.onnx)
//! toll-inference 2 14
//!
//! # Point at a different artifact
//! toll-inference 2 14 --model models/toll_model.onnx
//!
//! # Diagnostics on stderr; stdout stays a single JSON line
//! toll-inference 2 14 --verbose
//! ```
//!
//! The process is single-threaded and synchronous: argument parsing, model
//! load, inference, output write, in strict sequence. The first error is
//! fatal and exits non-zero with nothing on stdout.
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`model`] | Core [`TollModel`] for loading the artifact and running inference |
//! | [`features`] | Prediction input pair ([`TollFeatures`]) |
//! | [`prediction`] | Output record ([`Prediction`]) and rounding |
//! | [`inference`] | [`InferenceConfig`] for session options |
//! | [`error`] | Error types ([`PredictError`], [`Result`]) |

// Modules
pub mod error;
pub mod features;
pub mod inference;
pub mod model;
pub mod prediction;

/// CLI surface (argument parsing, logging, predict driver).
pub mod cli;

// Re-export main types for convenience
pub use error::{PredictError, Result};
pub use features::TollFeatures;
pub use inference::InferenceConfig;
pub use model::{TollModel, DEFAULT_MODEL};
pub use prediction::{round_to_tenth, Prediction};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name.
pub const NAME: &str = env!("CARGO_PKG_NAME");
