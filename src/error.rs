//! Error types for marginline.
//!
//! All failure paths in the library return a value of [`Error`]; no component
//! uses panics or out-of-band exceptions for control flow. The orchestrator
//! translates errors into the numeric return codes of the request/response
//! protocol via [`ReturnCode`].

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while processing a margin-line request.
#[derive(Error, Debug)]
pub enum Error {
    /// The request JSON is missing, malformed, or semantically invalid.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The mesh has no triangles.
    #[error("mesh has no triangles")]
    EmptyMesh,

    /// A triangle references an invalid vertex index.
    #[error("triangle {triangle} references invalid vertex index {vertex}")]
    InvalidVertexIndex {
        /// The triangle index.
        triangle: usize,
        /// The invalid vertex index.
        vertex: usize,
    },

    /// A triangle has duplicate vertex indices.
    #[error("triangle {triangle} is degenerate (has duplicate vertices)")]
    DegenerateTriangle {
        /// The triangle index.
        triangle: usize,
    },

    /// The mesh geometry prevents assembling the discrete curvature operator.
    #[error("degenerate geometry: {0}")]
    DegenerateGeometry(String),

    /// Error loading a mesh from file.
    #[error("failed to load mesh from {path}: {message}")]
    LoadError {
        /// The file path.
        path: PathBuf,
        /// Error message.
        message: String,
    },

    /// Unsupported mesh file format.
    #[error("unsupported file format: {extension}")]
    UnsupportedFormat {
        /// The file extension.
        extension: String,
    },

    /// The walker aborted with an internal inconsistency.
    ///
    /// Reserved: the current algorithm terminates cleanly on every input
    /// (dead ends, step-cap exhaustion, and length-1 paths are not errors).
    #[error("margin-line construction failed: {0}")]
    MarginConstruction(String),

    /// File I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Numeric return codes of the request/response protocol.
///
/// The code is written into `output.json` and doubles as the process exit
/// code of the `marginline` executable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReturnCode {
    /// The request completed successfully.
    Success = 0,
    /// Catch-all for unexpected failures.
    UnknownError = 1,
    /// The request JSON was missing, malformed, or invalid.
    InvalidInput = 101,
    /// The mesh was missing, unreadable, or geometrically unusable.
    InvalidModel = 102,
    /// Margin-line construction aborted.
    ErrorInMarginline = 201,
}

impl ReturnCode {
    /// The numeric value written to `output.json` and used as exit code.
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl From<&Error> for ReturnCode {
    fn from(err: &Error) -> Self {
        match err {
            Error::InvalidInput(_) => ReturnCode::InvalidInput,
            Error::EmptyMesh
            | Error::InvalidVertexIndex { .. }
            | Error::DegenerateTriangle { .. }
            | Error::DegenerateGeometry(_)
            | Error::LoadError { .. }
            | Error::UnsupportedFormat { .. } => ReturnCode::InvalidModel,
            Error::MarginConstruction(_) => ReturnCode::ErrorInMarginline,
            Error::Io(_) => ReturnCode::UnknownError,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_return_code_values() {
        assert_eq!(ReturnCode::Success.as_i32(), 0);
        assert_eq!(ReturnCode::UnknownError.as_i32(), 1);
        assert_eq!(ReturnCode::InvalidInput.as_i32(), 101);
        assert_eq!(ReturnCode::InvalidModel.as_i32(), 102);
        assert_eq!(ReturnCode::ErrorInMarginline.as_i32(), 201);
    }

    #[test]
    fn test_error_to_return_code() {
        let err = Error::InvalidInput("bad seed".to_string());
        assert_eq!(ReturnCode::from(&err), ReturnCode::InvalidInput);

        let err = Error::EmptyMesh;
        assert_eq!(ReturnCode::from(&err), ReturnCode::InvalidModel);

        let err = Error::UnsupportedFormat {
            extension: ".obj".to_string(),
        };
        assert_eq!(ReturnCode::from(&err), ReturnCode::InvalidModel);

        let err = Error::Io(std::io::Error::other("boom"));
        assert_eq!(ReturnCode::from(&err), ReturnCode::UnknownError);
    }
}
