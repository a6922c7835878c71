//! STL (stereolithography) format support.
//!
//! This module provides loading of meshes in the STL format. Both binary and
//! ASCII files are handled. STL stores a bare triangle soup, so vertices are
//! welded on load to recover shared connectivity.

use std::fs::File;
use std::path::Path;

use nalgebra::Point3;

use crate::error::{Error, Result};
use crate::mesh::TriMesh;

/// Load a mesh from an STL file.
///
/// Automatically detects binary vs ASCII format. Coincident vertices are
/// merged so that the triangles share indices, which the adjacency list
/// depends on. Triangles that collapse under welding are dropped.
///
/// # Example
///
/// ```no_run
/// use marginline::io::stl;
///
/// let mesh = stl::load("model.stl").unwrap();
/// ```
pub fn load<P: AsRef<Path>>(path: P) -> Result<TriMesh> {
    let path = path.as_ref();
    let mut file = File::open(path).map_err(|e| Error::LoadError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let stl = stl_io::read_stl(&mut file).map_err(|e| Error::LoadError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let positions: Vec<Point3<f64>> = stl
        .vertices
        .iter()
        .map(|v| Point3::new(v[0] as f64, v[1] as f64, v[2] as f64))
        .collect();

    let mut triangles: Vec<[usize; 3]> = Vec::with_capacity(stl.faces.len());
    for tri in &stl.faces {
        let [i0, i1, i2] = tri.vertices;
        // stl_io has already indexed coincident vertices; drop collapsed triangles
        if i0 != i1 && i1 != i2 && i0 != i2 {
            triangles.push([i0, i1, i2]);
        }
    }

    if triangles.is_empty() {
        return Err(Error::LoadError {
            path: path.to_path_buf(),
            message: "STL file contains no valid triangles".to_string(),
        });
    }

    TriMesh::new(positions, triangles)
}
