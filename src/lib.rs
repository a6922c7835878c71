//! # Marginline
//!
//! Curvature-guided margin-line extraction on triangle meshes.
//!
//! Marginline traces an ordered, approximately closed polyline of mesh
//! vertices along a ridge of high mean curvature. The motivating use case
//! is dental CAD — finding the preparation margin on a scanned tooth — but
//! the pipeline is purely geometric: it only ever sees vertex positions,
//! triangles, and the per-vertex curvature field.
//!
//! ## Pipeline
//!
//! 1. Load a PLY or STL mesh into a [`mesh::TriMesh`] with a precomputed
//!    vertex adjacency list.
//! 2. Estimate per-vertex curvature ([`algo::curvature`]): mean, Gaussian,
//!    and principal curvatures with principal directions.
//! 3. Grow the margin line from a seed vertex ([`algo::marginline`]): a
//!    greedy walk preferring neighbors along the minimum-principal-curvature
//!    direction and ridges of high mean curvature.
//! 4. Downsample the polyline to a fixed sample count
//!    ([`algo::downsample`]).
//!
//! The [`engine`] module wires these stages into a JSON-driven request
//! processor used by the `marginline` executable.
//!
//! ## Quick Start
//!
//! ```no_run
//! use marginline::prelude::*;
//! use nalgebra::Point3;
//!
//! let mesh = marginline::io::load("tooth.ply").unwrap();
//! let field = compute_curvature(&mesh).unwrap();
//!
//! let seed = mesh.nearest_vertex(&Point3::new(4.2, -1.0, 12.5));
//! let mut line = Marginline::from_seed(seed);
//! trace(&mesh, &field, &mut line, &TraceOptions::default());
//!
//! let sampled = downsample(line.path(), 30, 3.0);
//! println!("{} of {} vertices kept", sampled.len(), line.path().len());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod algo;
pub mod engine;
pub mod error;
pub mod io;
pub mod mesh;

/// Prelude module for convenient imports.
///
/// ```
/// use marginline::prelude::*;
/// ```
pub mod prelude {
    pub use crate::algo::curvature::{compute as compute_curvature, CurvatureField};
    pub use crate::algo::downsample::downsample;
    pub use crate::algo::marginline::{trace, Marginline, TraceOptions};
    pub use crate::error::{Error, Result, ReturnCode};
    pub use crate::mesh::TriMesh;
}

// Re-export nalgebra types for convenience
pub use nalgebra;
