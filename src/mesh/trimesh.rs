//! Indexed triangle mesh with precomputed vertex adjacency.

use nalgebra::{Point3, Vector3};

use crate::error::{Error, Result};

/// An immutable triangle mesh in face-vertex form.
///
/// Holds vertex positions, triangle index triples, and a per-vertex adjacency
/// list derived at construction time. The adjacency list is symmetric and
/// duplicate-free; the order of neighbors within a vertex's list carries no
/// meaning and consumers must not rely on it.
///
/// # Example
///
/// ```
/// use marginline::mesh::TriMesh;
/// use nalgebra::Point3;
///
/// let positions = vec![
///     Point3::new(0.0, 0.0, 0.0),
///     Point3::new(1.0, 0.0, 0.0),
///     Point3::new(0.5, 1.0, 0.0),
/// ];
/// let triangles = vec![[0, 1, 2]];
///
/// let mesh = TriMesh::new(positions, triangles).unwrap();
/// assert_eq!(mesh.num_vertices(), 3);
/// assert_eq!(mesh.neighbors(0), &[1, 2]);
/// ```
#[derive(Debug, Clone)]
pub struct TriMesh {
    positions: Vec<Point3<f64>>,
    triangles: Vec<[usize; 3]>,
    adjacency: Vec<Vec<usize>>,
}

impl TriMesh {
    /// Build a mesh from vertex positions and triangle index triples.
    ///
    /// Validates that the triangle list is non-empty, that every index is in
    /// range, and that no triangle repeats a vertex, then derives the vertex
    /// adjacency list.
    pub fn new(positions: Vec<Point3<f64>>, triangles: Vec<[usize; 3]>) -> Result<Self> {
        if triangles.is_empty() {
            return Err(Error::EmptyMesh);
        }

        for (ti, tri) in triangles.iter().enumerate() {
            for &vi in tri {
                if vi >= positions.len() {
                    return Err(Error::InvalidVertexIndex {
                        triangle: ti,
                        vertex: vi,
                    });
                }
            }
            if tri[0] == tri[1] || tri[1] == tri[2] || tri[0] == tri[2] {
                return Err(Error::DegenerateTriangle { triangle: ti });
            }
        }

        let adjacency = build_adjacency(positions.len(), &triangles);

        Ok(TriMesh {
            positions,
            triangles,
            adjacency,
        })
    }

    /// Number of vertices.
    #[inline]
    pub fn num_vertices(&self) -> usize {
        self.positions.len()
    }

    /// Number of triangles.
    #[inline]
    pub fn num_triangles(&self) -> usize {
        self.triangles.len()
    }

    /// Position of vertex `v`.
    #[inline]
    pub fn position(&self, v: usize) -> &Point3<f64> {
        &self.positions[v]
    }

    /// All vertex positions.
    #[inline]
    pub fn positions(&self) -> &[Point3<f64>] {
        &self.positions
    }

    /// All triangle index triples.
    #[inline]
    pub fn triangles(&self) -> &[[usize; 3]] {
        &self.triangles
    }

    /// Vertices sharing an edge with `v`, sorted by index.
    #[inline]
    pub fn neighbors(&self, v: usize) -> &[usize] {
        &self.adjacency[v]
    }

    /// The full adjacency list.
    #[inline]
    pub fn adjacency(&self) -> &[Vec<usize>] {
        &self.adjacency
    }

    /// Index of the vertex closest in Euclidean distance to `p`.
    ///
    /// Ties are broken by the smallest vertex index. The query point may lie
    /// arbitrarily far from the surface.
    pub fn nearest_vertex(&self, p: &Point3<f64>) -> usize {
        let mut nearest = 0;
        let mut nearest_dist2 = f64::MAX;
        for (i, q) in self.positions.iter().enumerate() {
            let dist2 = (q - p).norm_squared();
            if dist2 < nearest_dist2 {
                nearest = i;
                nearest_dist2 = dist2;
            }
        }
        nearest
    }

    /// Axis-aligned bounding box, or `None` for an empty mesh.
    pub fn bounding_box(&self) -> Option<(Point3<f64>, Point3<f64>)> {
        let first = self.positions.first()?;
        let mut min = *first;
        let mut max = *first;
        for p in &self.positions[1..] {
            for k in 0..3 {
                min[k] = min[k].min(p[k]);
                max[k] = max[k].max(p[k]);
            }
        }
        Some((min, max))
    }

    /// Average length over all unique edges.
    pub fn average_edge_length(&self) -> f64 {
        let mut total = 0.0;
        let mut count = 0usize;
        for (v, neighbors) in self.adjacency.iter().enumerate() {
            for &n in neighbors {
                if n > v {
                    total += (self.positions[n] - self.positions[v]).norm();
                    count += 1;
                }
            }
        }
        if count == 0 {
            0.0
        } else {
            total / count as f64
        }
    }

    /// Area-weighted unit normal per vertex.
    ///
    /// Accumulates unnormalized triangle normals (whose magnitude is twice
    /// the triangle area) at each corner, then normalizes. A vertex whose
    /// accumulated normal vanishes gets the zero vector.
    pub fn vertex_normals(&self) -> Vec<Vector3<f64>> {
        let mut normals = vec![Vector3::zeros(); self.positions.len()];
        for tri in &self.triangles {
            let p0 = &self.positions[tri[0]];
            let p1 = &self.positions[tri[1]];
            let p2 = &self.positions[tri[2]];
            let n = (p1 - p0).cross(&(p2 - p0));
            for &vi in tri {
                normals[vi] += n;
            }
        }
        for n in &mut normals {
            let len = n.norm();
            if len > 1e-12 {
                *n /= len;
            }
        }
        normals
    }
}

/// Derive the vertex adjacency list from triangle index triples.
///
/// Each vertex's neighbor list is sorted and duplicate-free, and the relation
/// is symmetric by construction (every triangle edge contributes both ways).
fn build_adjacency(num_vertices: usize, triangles: &[[usize; 3]]) -> Vec<Vec<usize>> {
    let mut adjacency = vec![Vec::new(); num_vertices];
    for tri in triangles {
        for k in 0..3 {
            let a = tri[k];
            let b = tri[(k + 1) % 3];
            adjacency[a].push(b);
            adjacency[b].push(a);
        }
    }
    for neighbors in &mut adjacency {
        neighbors.sort_unstable();
        neighbors.dedup();
    }
    adjacency
}
