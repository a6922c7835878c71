//! Mesh file I/O.
//!
//! This module provides functions for loading meshes from disk.
//!
//! # Supported Formats
//!
//! | Format | Extension | Notes |
//! |--------|-----------|-------|
//! | PLY | `.ply` | Stanford polygon format, ASCII and binary |
//! | STL | `.stl` | Binary and ASCII, vertices welded on load |
//!
//! Any other extension is rejected with [`Error::UnsupportedFormat`].
//!
//! ```no_run
//! use marginline::io::load;
//!
//! let mesh = load("model.ply").unwrap();
//! println!("{} vertices", mesh.num_vertices());
//! ```
//!
//! The [`vtk`] submodule exports a mesh with its curvature field as a legacy
//! ASCII VTK file for inspection in external viewers.

pub mod ply;
pub mod stl;
pub mod vtk;

use std::path::Path;

use crate::error::{Error, Result};
use crate::mesh::TriMesh;

/// Supported mesh file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// PLY (Stanford polygon) format.
    Ply,
    /// STL (stereolithography) format.
    Stl,
}

impl Format {
    /// Detect format from a file extension (without the dot, case-insensitive).
    pub fn from_extension(ext: &str) -> Option<Format> {
        match ext.to_lowercase().as_str() {
            "ply" => Some(Format::Ply),
            "stl" => Some(Format::Stl),
            _ => None,
        }
    }

    /// Detect format from a file path.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Option<Format> {
        path.as_ref()
            .extension()
            .and_then(|ext| ext.to_str())
            .and_then(Format::from_extension)
    }
}

/// Load a mesh from a file with automatic format detection.
///
/// The format is determined by the file extension; only `.ply` and `.stl`
/// are recognized.
pub fn load<P: AsRef<Path>>(path: P) -> Result<TriMesh> {
    let path = path.as_ref();
    let format = Format::from_path(path).ok_or_else(|| Error::UnsupportedFormat {
        extension: path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("(none)")
            .to_string(),
    })?;

    match format {
        Format::Ply => ply::load(path),
        Format::Stl => stl::load(path),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_detection() {
        assert_eq!(Format::from_extension("ply"), Some(Format::Ply));
        assert_eq!(Format::from_extension("STL"), Some(Format::Stl));
        assert_eq!(Format::from_extension("obj"), None);

        assert_eq!(Format::from_path("dir/model.ply"), Some(Format::Ply));
        assert_eq!(Format::from_path("model"), None);
    }

    #[test]
    fn test_load_unsupported_extension() {
        let result = load("model.obj");
        assert!(matches!(result, Err(Error::UnsupportedFormat { .. })));
    }
}
