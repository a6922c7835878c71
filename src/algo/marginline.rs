//! Curvature-guided margin-line tracing.
//!
//! The walker grows an ordered polyline of vertex indices from a seed
//! vertex, following a ridge of high mean curvature across the mesh graph.
//! Each step tries two rules in order:
//!
//! 1. **Ridge climb**: move to the unvisited neighbor with the largest mean
//!    curvature, but only if that strictly improves on the current vertex
//!    and the move does not reverse the recent walking direction.
//! 2. **Direction alignment**: otherwise move to the unvisited neighbor
//!    whose edge best aligns with the minimum-principal-curvature direction
//!    at the current vertex, skipping moves from convex into concave
//!    territory.
//!
//! When a step is taken, *every* neighbor of the departed vertex is marked
//! visited, not just the chosen one. This wide exclusion keeps the walk from
//! folding back into its own 1-ring and is load-bearing: a narrower
//! exclusion produces visibly different paths.
//!
//! The very first advance therefore excludes the whole 1-ring of the start
//! vertex, which would make a loop around a closed ridge unreachable: the
//! walk would dead-end one or two hops short of where it began. Closure is
//! carved out of the exclusion explicitly. Once the walk has left the start
//! vertex's 1-ring, a member of that ring it never stepped on becomes
//! admissible again (the approach hop), and from inside the ring the start
//! vertex itself becomes admissible (the closing hop, which ends the walk).
//!
//! The walk ends when the path returns to its first vertex (loop closure),
//! when no admissible neighbor remains (dead end), or when the step cap is
//! reached. Dead ends and capped walks return the partial path; they are
//! not errors.
//!
//! # Example
//!
//! ```no_run
//! use marginline::algo::marginline::{trace, Marginline, TraceOptions};
//! use marginline::algo::curvature;
//! use marginline::io;
//!
//! let mesh = io::load("model.ply").unwrap();
//! let field = curvature::compute(&mesh).unwrap();
//!
//! let seed = mesh.nearest_vertex(&nalgebra::Point3::new(0.0, 0.0, 10.0));
//! let mut line = Marginline::from_seed(seed);
//! trace(&mesh, &field, &mut line, &TraceOptions::default());
//!
//! println!("{} vertices, closed: {}", line.path().len(), line.is_closed());
//! ```

use std::collections::HashSet;

use crate::algo::curvature::CurvatureField;
use crate::mesh::TriMesh;

/// Options for margin-line tracing.
#[derive(Debug, Clone)]
pub struct TraceOptions {
    /// Hard cap on walker steps; the walk stops with a partial path when
    /// exhausted.
    pub max_steps: usize,

    /// Number of recent path edges checked by the direction-reversal guard.
    pub num_hops: usize,

    /// Apply the direction-reversal guard in the ridge-climb rule.
    pub reversal_guard_on_climb: bool,

    /// Apply the direction-reversal guard in the direction-alignment rule.
    ///
    /// Off by default: leaving the fallback rule unguarded lets the walk
    /// recover when the ridge curves sharply. Exposed for A/B comparison.
    pub reversal_guard_on_alignment: bool,
}

impl Default for TraceOptions {
    fn default() -> Self {
        Self {
            max_steps: 10_000,
            num_hops: 10,
            reversal_guard_on_climb: true,
            reversal_guard_on_alignment: false,
        }
    }
}

impl TraceOptions {
    /// Set the step cap.
    pub fn with_max_steps(mut self, max_steps: usize) -> Self {
        self.max_steps = max_steps;
        self
    }

    /// Set the reversal-guard window length.
    pub fn with_num_hops(mut self, num_hops: usize) -> Self {
        self.num_hops = num_hops;
        self
    }

    /// Toggle the reversal guard in the ridge-climb rule.
    pub fn with_reversal_guard_on_climb(mut self, on: bool) -> Self {
        self.reversal_guard_on_climb = on;
        self
    }

    /// Toggle the reversal guard in the direction-alignment rule.
    pub fn with_reversal_guard_on_alignment(mut self, on: bool) -> Self {
        self.reversal_guard_on_alignment = on;
        self
    }
}

/// A margin line under construction or finished.
///
/// `path` is the ordered vertex sequence; `visited` is the set of vertices
/// excluded from further candidacy, a superset of the path that also holds
/// every neighbor of every departed vertex. Created with a single seed,
/// mutated only by [`trace`], then read out.
#[derive(Debug, Clone, Default)]
pub struct Marginline {
    path: Vec<usize>,
    visited: HashSet<usize>,
}

impl Marginline {
    /// Create a margin line holding a single seed vertex.
    pub fn from_seed(seed: usize) -> Self {
        Marginline {
            path: vec![seed],
            visited: HashSet::new(),
        }
    }

    /// The ordered vertex indices of the path.
    #[inline]
    pub fn path(&self) -> &[usize] {
        &self.path
    }

    /// Vertices excluded from further growth.
    #[inline]
    pub fn visited(&self) -> &HashSet<usize> {
        &self.visited
    }

    /// Whether the path returned to its first vertex.
    #[inline]
    pub fn is_closed(&self) -> bool {
        self.path.len() > 1 && self.path.first() == self.path.last()
    }
}

/// Check whether stepping from the path tail to `candidate` would reverse
/// any of the last `num_hops` edge directions of the path.
fn reverses_recent_direction(
    mesh: &TriMesh,
    path: &[usize],
    candidate: usize,
    num_hops: usize,
) -> bool {
    let tail = path[path.len() - 1];
    let direction = (mesh.position(candidate) - mesh.position(tail)).normalize();

    let start = path.len().saturating_sub(num_hops + 1);
    for k in start..path.len() - 1 {
        let existing = (mesh.position(path[k + 1]) - mesh.position(path[k])).normalize();
        if direction.dot(&existing) < 0.0 {
            return true;
        }
    }
    false
}

/// Whether `candidate` may still be stepped onto.
///
/// Visited vertices are excluded while the walk explores, with two
/// exceptions that let a loop close through the start vertex despite the
/// first advance having marked its entire 1-ring visited:
///
/// - the start vertex itself is admissible again once the path holds at
///   least three vertices (the closing hop; the length condition keeps the
///   second step from falling straight back onto it);
/// - a member of the start vertex's 1-ring that was never walked is
///   admissible again once the current tail is outside that ring (the
///   approach hop). Requiring the tail to be outside stops the walk from
///   hopping sideways through the ring instead of closing.
fn is_admissible(
    candidate: usize,
    path: &[usize],
    visited: &HashSet<usize>,
    seed_ring: &HashSet<usize>,
    on_path: &HashSet<usize>,
) -> bool {
    if !visited.contains(&candidate) {
        return true;
    }
    if path.len() < 3 {
        return false;
    }
    if candidate == path[0] {
        return true;
    }
    let tail = path[path.len() - 1];
    !seed_ring.contains(&tail) && seed_ring.contains(&candidate) && !on_path.contains(&candidate)
}

/// Grow a margin line along the curvature ridge.
///
/// Expects `line` to hold the seed vertex; an empty line is returned
/// untouched. On return the line holds the full traced path and its visited
/// set, with `line.is_closed()` telling whether the walk looped back to the
/// seed.
pub fn trace(
    mesh: &TriMesh,
    curvature: &CurvatureField,
    line: &mut Marginline,
    options: &TraceOptions,
) {
    if line.path.is_empty() {
        return;
    }

    line.visited.clear();
    line.visited.extend(line.path.iter().copied());

    // Closure bookkeeping: the start vertex's 1-ring, and the vertices the
    // path has actually stepped on (visited is a superset of both).
    let seed_ring: HashSet<usize> = mesh.neighbors(line.path[0]).iter().copied().collect();
    let mut on_path: HashSet<usize> = line.path.iter().copied().collect();

    for _ in 0..options.max_steps {
        if line.is_closed() {
            break;
        }

        let seed = line.path[line.path.len() - 1];
        let neighbors = mesh.neighbors(seed);
        let min_curvature_direction = &curvature.dir_min[seed];

        // Rule 1: climb toward strictly higher mean curvature
        {
            let mut best: Option<(usize, f64)> = None;
            for &neighbor in neighbors {
                if !is_admissible(neighbor, &line.path, &line.visited, &seed_ring, &on_path) {
                    continue;
                }
                if options.reversal_guard_on_climb
                    && reverses_recent_direction(mesh, &line.path, neighbor, options.num_hops)
                {
                    continue;
                }

                let mean = curvature.mean[neighbor];
                match best {
                    Some((_, best_mean)) if mean <= best_mean => {}
                    _ => best = Some((neighbor, mean)),
                }
            }

            if let Some((next, mean)) = best {
                if mean > curvature.mean[seed] {
                    line.path.push(next);
                    on_path.insert(next);
                    line.visited.extend(neighbors.iter().copied());
                    continue;
                }
            }
        }

        // Rule 2: follow the minimum-principal-curvature direction
        {
            let mut best: Option<(usize, f64)> = None;
            for &neighbor in neighbors {
                if !is_admissible(neighbor, &line.path, &line.visited, &seed_ring, &on_path) {
                    continue;
                }

                // Never step from a convex vertex onto a concave one
                if curvature.mean[seed] > 0.0 && curvature.mean[neighbor] < 0.0 {
                    continue;
                }

                if options.reversal_guard_on_alignment
                    && reverses_recent_direction(mesh, &line.path, neighbor, options.num_hops)
                {
                    continue;
                }

                let direction = (mesh.position(neighbor) - mesh.position(seed)).normalize();
                let alignment = direction.dot(min_curvature_direction).abs();
                match best {
                    Some((_, best_alignment)) if alignment <= best_alignment => {}
                    _ => best = Some((neighbor, alignment)),
                }
            }

            match best {
                Some((next, _)) => {
                    line.path.push(next);
                    on_path.insert(next);
                    line.visited.extend(neighbors.iter().copied());
                }
                None => break,
            }
        }
    }
}
