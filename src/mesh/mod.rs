//! Core mesh data structure.
//!
//! This module provides [`TriMesh`], an immutable face-vertex triangle mesh
//! with a precomputed vertex adjacency list. The adjacency list is what the
//! margin-line walker traverses; positions and triangles are kept in flat
//! arrays indexed by `usize`.
//!
//! # Construction
//!
//! Meshes are typically constructed from file I/O or from face-vertex lists:
//!
//! ```
//! use marginline::mesh::TriMesh;
//! use nalgebra::Point3;
//!
//! let positions = vec![
//!     Point3::new(0.0, 0.0, 0.0),
//!     Point3::new(1.0, 0.0, 0.0),
//!     Point3::new(0.5, 1.0, 0.0),
//! ];
//! let triangles = vec![[0, 1, 2]];
//!
//! let mesh = TriMesh::new(positions, triangles).unwrap();
//! ```

mod trimesh;

pub use trimesh::TriMesh;
