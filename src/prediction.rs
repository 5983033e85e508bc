//! Prediction output record.
//!
//! The CLI emits one JSON line per invocation:
//!
//! ```json
//! {"areaType": 2, "hour": 14, "price": 3.7}
//! ```
//!
//! The `areaType` and `hour` fields always echo the raw command-line integers;
//! `price` is the model's scalar output rounded to one decimal place.

use std::io;

use serde::{Deserialize, Serialize};

use crate::error::{PredictError, Result};

/// A single toll price prediction.
///
/// Field order matches the serialized key order: `areaType`, `hour`, `price`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    /// The area-type code given on the command line, echoed verbatim.
    #[serde(rename = "areaType")]
    pub area_type: i64,
    /// The hour given on the command line, echoed verbatim.
    pub hour: i64,
    /// Predicted toll price, rounded to one decimal place.
    pub price: f64,
}

impl Prediction {
    /// Build a prediction record from the raw inputs and the model's scalar
    /// output, rounding the price to one decimal place.
    #[must_use]
    pub fn new(area_type: i64, hour: i64, raw_price: f32) -> Self {
        Self {
            area_type,
            hour,
            price: round_to_tenth(f64::from(raw_price)),
        }
    }

    /// Serialize the record as a single JSON line (no trailing newline).
    ///
    /// Separators are `", "` and `": "`, so the line reads
    /// `{"areaType": 2, "hour": 14, "price": 3.7}`.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn to_json_line(&self) -> Result<String> {
        let mut buf = Vec::new();
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, SpacedFormatter);
        self.serialize(&mut ser)?;
        String::from_utf8(buf).map_err(|e| PredictError::OutputError(e.to_string()))
    }
}

/// Round a value to one decimal place, half away from zero (`3.65` → `3.7`).
#[must_use]
pub fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Single-line JSON formatter with a space after each colon and comma.
struct SpacedFormatter;

impl serde_json::ser::Formatter for SpacedFormatter {
    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        writer.write_all(b": ")
    }

    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }
}
