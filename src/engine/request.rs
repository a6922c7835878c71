//! Input JSON schema of a margin-line request.
//!
//! Mirrors the request document produced by the calling system. Unknown keys
//! are ignored; missing recognized keys are a parse error, which the engine
//! reports as invalid input.

use nalgebra::Point3;
use serde::Deserialize;

use crate::error::{Error, Result};

/// A complete margin-line request.
#[derive(Debug, Clone, Deserialize)]
pub struct Request {
    /// The mesh the operation runs on.
    pub model: Model,
    /// The requested operation.
    pub operation: Operation,
}

/// Metadata of the model file accompanying the request.
///
/// The mesh itself lives beside the request JSON in a file named
/// `model<type>`, e.g. `model.stl` for `"type": ".stl"`.
#[derive(Debug, Clone, Deserialize)]
pub struct Model {
    /// Caller-assigned model id.
    pub id: String,
    /// Human-readable model name.
    pub name: String,
    /// File extension of the mesh, leading dot included.
    #[serde(rename = "type")]
    pub kind: String,
    /// Encoding hint, e.g. `"binary"`; informational only.
    #[serde(rename = "subType")]
    pub sub_type: String,
    /// Inline payload slot; unused, the mesh is read from disk.
    pub data: String,
}

/// The operation envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct Operation {
    /// Operation discriminator; only `"marginline"` is supported.
    #[serde(rename = "type")]
    pub kind: String,
    /// Margin-line parameters.
    pub marginline: MarginlineParams,
}

/// Parameters of the margin-line operation.
#[derive(Debug, Clone, Deserialize)]
pub struct MarginlineParams {
    /// How the seed is specified; `"coordinate"` is the only form the
    /// calling system produces today.
    #[serde(rename = "type")]
    pub kind: String,
    /// Seed point as an x, y, z triple.
    pub seed: Vec<f64>,
    /// Requested number of output samples.
    pub num_samples: i64,
    /// Endpoint-trim threshold of the downsampler. Compared against a
    /// residual point *count*, not a distance.
    pub threshold_to_remove_last_point: f64,
}

impl Request {
    /// Check the request semantics beyond what deserialization enforces.
    pub fn validate(&self) -> Result<()> {
        if self.operation.kind != "marginline" {
            return Err(Error::InvalidInput(format!(
                "invalid operation type: {} (expected: marginline)",
                self.operation.kind
            )));
        }
        self.operation.marginline.seed_point()?;
        if self.operation.marginline.num_samples <= 0 {
            return Err(Error::InvalidInput(format!(
                "num_samples must be positive, got {}",
                self.operation.marginline.num_samples
            )));
        }
        Ok(())
    }
}

impl MarginlineParams {
    /// The seed as a 3-D point.
    pub fn seed_point(&self) -> Result<Point3<f64>> {
        if self.seed.len() != 3 {
            return Err(Error::InvalidInput(format!(
                "seed must have exactly 3 coordinates, got {}",
                self.seed.len()
            )));
        }
        Ok(Point3::new(self.seed[0], self.seed[1], self.seed[2]))
    }
}
