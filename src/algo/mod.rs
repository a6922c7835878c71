//! Margin-line algorithms.
//!
//! The three algorithmic stages of the pipeline, leaves first:
//!
//! - **Curvature**: per-vertex mean, Gaussian, and principal curvature with
//!   principal directions ([`curvature`])
//! - **Tracing**: the greedy curvature-guided walk that grows the margin
//!   line from a seed vertex ([`marginline`])
//! - **Downsampling**: reduction of the traced polyline to a fixed number
//!   of evenly spaced samples ([`downsample`])

pub mod curvature;
pub mod downsample;
pub mod marginline;
