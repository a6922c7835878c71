//! Output JSON schema of a margin-line request.

use serde::{Deserialize, Serialize};

use crate::error::ReturnCode;

/// The complete output record written to `output.json`.
///
/// Always present, also on failure: errors are reported through
/// `return_code` and `message` with an empty result body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineOutput {
    /// Numeric status, also used as process exit code.
    pub return_code: i32,
    /// Human-readable status message; empty on success.
    pub message: String,
    /// The operation result.
    pub result: OutputResult,
}

/// Result envelope, tagged with the operation type.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputResult {
    /// Operation discriminator, `"marginline"` when populated.
    #[serde(rename = "type")]
    pub kind: String,
    /// The margin-line payload.
    pub marginline: MarginlineResult,
}

/// The margin-line payload of a successful request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MarginlineResult {
    /// Length of the raw traced path.
    pub num_original_points: usize,
    /// Length of the downsampled sequence.
    pub num_samples: usize,
    /// Downsampled vertex coordinates, ordered along the path.
    pub points: Vec<[f64; 3]>,
}

impl EngineOutput {
    /// A successful output wrapping a margin-line result.
    pub fn success(marginline: MarginlineResult) -> Self {
        EngineOutput {
            return_code: ReturnCode::Success.as_i32(),
            message: String::new(),
            result: OutputResult {
                kind: "marginline".to_string(),
                marginline,
            },
        }
    }

    /// A failed output with an empty result body.
    pub fn failure(code: ReturnCode, message: impl Into<String>) -> Self {
        EngineOutput {
            return_code: code.as_i32(),
            message: message.into(),
            result: OutputResult::default(),
        }
    }
}
