//! Discrete curvature computation on meshes.
//!
//! This module computes per-vertex curvature on a triangle mesh:
//!
//! - **Gaussian curvature K**: angle defect over the mixed Voronoi area
//! - **Principal curvatures k1, k2** with unit principal directions, from
//!   per-vertex quadric fitting over the two-ring neighborhood
//! - **Mean curvature H**: (k1 + k2) / 2
//!
//! The cotangent Laplacian of the vertex positions is assembled as well and
//! used to validate the discrete operator (degenerate geometry is reported
//! as an error instead of leaking NaNs into the field), but its magnitude is
//! not exported.
//!
//! Convexity with respect to the outward surface normal is positive: a unit
//! sphere has `mean ≈ 1` and `gaussian ≈ 1` everywhere.
//!
//! # Example
//!
//! ```no_run
//! use marginline::io;
//! use marginline::algo::curvature;
//!
//! let mesh = io::load("model.ply").unwrap();
//! let field = curvature::compute(&mesh).unwrap();
//!
//! println!("H[0] = {}", field.mean[0]);
//! let (k1, k2) = (field.k_max[0], field.k_min[0]);
//! assert!(k1 >= k2);
//! ```
//!
//! # References
//!
//! - Meyer, M., et al. (2003). "Discrete Differential-Geometry Operators for
//!   Triangulated 2-Manifolds." Visualization and Mathematics III.

use std::collections::HashMap;
use std::f64::consts::PI;

use nalgebra::{DMatrix, DVector, Matrix2, Point3, Vector3};
use rayon::prelude::*;

use crate::error::{Error, Result};
use crate::mesh::TriMesh;

/// Minimum number of neighborhood samples for the five-coefficient quadric.
const MIN_FIT_POINTS: usize = 5;

/// Per-vertex curvature data for a whole mesh.
///
/// All arrays have length `num_vertices`. `dir_max` and `dir_min` are unit
/// tangent vectors and mutually orthogonal at every vertex; their sign is
/// arbitrary (they are directions, not orientations), so consumers must only
/// rely on `|d · v|`.
#[derive(Debug, Clone)]
pub struct CurvatureField {
    /// Mean curvature H = (k1 + k2) / 2 per vertex.
    pub mean: Vec<f64>,
    /// Gaussian curvature K per vertex (angle defect over mixed area).
    pub gaussian: Vec<f64>,
    /// Maximum principal curvature k1 per vertex.
    pub k_max: Vec<f64>,
    /// Minimum principal curvature k2 per vertex, k2 <= k1.
    pub k_min: Vec<f64>,
    /// Unit direction of maximum normal curvature per vertex.
    pub dir_max: Vec<Vector3<f64>>,
    /// Unit direction of minimum normal curvature per vertex.
    pub dir_min: Vec<Vector3<f64>>,
}

impl CurvatureField {
    /// Number of vertices covered by the field.
    #[inline]
    pub fn len(&self) -> usize {
        self.mean.len()
    }

    /// Check if empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.mean.is_empty()
    }
}

/// Compute the angle at vertex `a` in triangle (a, b, c).
fn triangle_angle(a: &Point3<f64>, b: &Point3<f64>, c: &Point3<f64>) -> f64 {
    let ab = (b - a).normalize();
    let ac = (c - a).normalize();
    let dot = ab.dot(&ac).clamp(-1.0, 1.0);
    dot.acos()
}

/// Compute the cotangent of the angle at vertex `a` in triangle (a, b, c).
fn cotangent_angle(a: &Point3<f64>, b: &Point3<f64>, c: &Point3<f64>) -> f64 {
    let ab = b - a;
    let ac = c - a;
    let dot = ab.dot(&ac);
    let cross_norm = ab.cross(&ac).norm();
    if cross_norm < 1e-10 {
        0.0
    } else {
        dot / cross_norm
    }
}

/// Check if a triangle is obtuse and return the index (0, 1, 2) of the obtuse vertex.
fn obtuse_vertex(p0: &Point3<f64>, p1: &Point3<f64>, p2: &Point3<f64>) -> Option<usize> {
    let angle0 = triangle_angle(p0, p1, p2);
    let angle1 = triangle_angle(p1, p0, p2);
    let angle2 = triangle_angle(p2, p0, p1);

    let half_pi = PI / 2.0;
    if angle0 > half_pi {
        Some(0)
    } else if angle1 > half_pi {
        Some(1)
    } else if angle2 > half_pi {
        Some(2)
    } else {
        None
    }
}

/// Voronoi area contribution for a vertex in a non-obtuse triangle.
fn voronoi_area_contribution(
    p_vertex: &Point3<f64>,
    p_prev: &Point3<f64>,
    p_next: &Point3<f64>,
) -> f64 {
    // Voronoi area = (1/8) * (|PR|^2 * cot(Q) + |PQ|^2 * cot(R))
    // where P is the vertex, Q and R are the other vertices
    let pr = p_next - p_vertex;
    let pq = p_prev - p_vertex;

    let cot_q = cotangent_angle(p_prev, p_vertex, p_next);
    let cot_r = cotangent_angle(p_next, p_vertex, p_prev);

    0.125 * (pr.norm_squared() * cot_q + pq.norm_squared() * cot_r)
}

/// Per-vertex accumulators of the discrete operator assembly.
struct OperatorData {
    angle_sum: Vec<f64>,
    mixed_area: Vec<f64>,
    laplacian: Vec<Vector3<f64>>,
}

/// Assemble angle sums, mixed Voronoi areas, and the cotangent Laplacian of
/// the vertex positions in one pass over the triangles.
///
/// Uses the Meyer et al. mixed-area rule: Voronoi area for non-obtuse
/// triangles, area/2 at the obtuse corner, area/4 elsewhere.
fn assemble_operator(mesh: &TriMesh) -> Result<OperatorData> {
    let n = mesh.num_vertices();
    let mut angle_sum = vec![0.0; n];
    let mut mixed_area = vec![0.0; n];
    let mut edge_cotans: HashMap<(usize, usize), f64> = HashMap::new();

    for (ti, tri) in mesh.triangles().iter().enumerate() {
        let [i0, i1, i2] = *tri;
        let p0 = mesh.position(i0);
        let p1 = mesh.position(i1);
        let p2 = mesh.position(i2);

        let tri_area = 0.5 * (p1 - p0).cross(&(p2 - p0)).norm();
        if !(tri_area > 1e-12) {
            return Err(Error::DegenerateGeometry(format!(
                "triangle {} has zero area",
                ti
            )));
        }

        let obtuse = obtuse_vertex(p0, p1, p2);
        let corners = [(i0, p0, p2, p1), (i1, p1, p0, p2), (i2, p2, p1, p0)];
        for (local, (v, p_vertex, p_prev, p_next)) in corners.into_iter().enumerate() {
            angle_sum[v] += triangle_angle(p_vertex, p_prev, p_next);

            match obtuse {
                None => {
                    mixed_area[v] += voronoi_area_contribution(p_vertex, p_prev, p_next);
                }
                Some(obtuse_idx) if obtuse_idx == local => {
                    mixed_area[v] += tri_area / 2.0;
                }
                Some(_) => {
                    mixed_area[v] += tri_area / 4.0;
                }
            }
        }

        // Cotangent weight of each edge from the angle at its opposite vertex
        let edges = [(i0, i1, p2), (i1, i2, p0), (i2, i0, p1)];
        for (a, b, opposite) in edges {
            let key = if a < b { (a, b) } else { (b, a) };
            *edge_cotans.entry(key).or_insert(0.0) +=
                cotangent_angle(opposite, mesh.position(a), mesh.position(b));
        }
    }

    let mut laplacian = vec![Vector3::zeros(); n];
    for (&(a, b), &cot_sum) in &edge_cotans {
        // Clamp to avoid negative weights from near-degenerate triangles
        let weight = cot_sum.max(0.0);
        let edge = mesh.position(b) - mesh.position(a);
        laplacian[a] += weight * edge;
        laplacian[b] -= weight * edge;
    }

    Ok(OperatorData {
        angle_sum,
        mixed_area,
        laplacian,
    })
}

/// An orthonormal tangent basis (e1, e2) perpendicular to `normal`.
///
/// A zero or non-finite normal gets a fixed world-axis frame so callers
/// never see NaN basis vectors.
fn tangent_basis(normal: &Vector3<f64>) -> (Vector3<f64>, Vector3<f64>) {
    let axis = if normal.x.abs() < 0.9 {
        Vector3::x()
    } else {
        Vector3::y()
    };
    let e1 = normal.cross(&axis);
    let len = e1.norm();
    if !(len > 1e-12) {
        return (Vector3::x(), Vector3::y());
    }
    let e1 = e1 / len;
    let e2 = normal.cross(&e1);
    (e1, e2)
}

/// Vertices within two or more rings of `v`, excluding `v` itself.
///
/// Starts from the two-ring and widens until at least [`MIN_FIT_POINTS`]
/// samples are available or the neighborhood stops growing.
fn fitting_neighborhood(mesh: &TriMesh, v: usize) -> Vec<usize> {
    let mut ring: Vec<usize> = mesh.neighbors(v).to_vec();
    loop {
        let mut wider = ring.clone();
        for &u in &ring {
            wider.extend_from_slice(mesh.neighbors(u));
        }
        wider.sort_unstable();
        wider.dedup();
        wider.retain(|&u| u != v);

        let grown = wider.len() > ring.len();
        ring = wider;
        if ring.len() >= MIN_FIT_POINTS || !grown {
            return ring;
        }
    }
}

/// Result of the per-vertex quadric fit.
struct VertexFit {
    k_max: f64,
    k_min: f64,
    dir_max: Vector3<f64>,
    dir_min: Vector3<f64>,
}

/// Fit the quadric h(u, w) = a u^2 + b u w + c w^2 + d u + e w over the
/// vertex neighborhood in the tangent frame of `normal`, and diagonalize the
/// resulting Weingarten map.
///
/// Sign convention: heights are measured along the outward normal and the
/// shape operator is negated, so convex regions get positive curvature.
fn fit_vertex(mesh: &TriMesh, v: usize, normal: &Vector3<f64>) -> VertexFit {
    // Isolated vertices and cancelling incident triangles leave a zero
    // accumulated normal; substitute a fixed unit frame so the directions
    // come out finite and unit instead of NaN.
    let normal = if normal.norm() > 0.5 {
        *normal
    } else {
        Vector3::z()
    };
    let (e1, e2) = tangent_basis(&normal);
    let flat = VertexFit {
        k_max: 0.0,
        k_min: 0.0,
        dir_max: e1,
        dir_min: e2,
    };

    let neighborhood = fitting_neighborhood(mesh, v);
    if neighborhood.len() < MIN_FIT_POINTS {
        return flat;
    }

    let p = mesh.position(v);
    let mut rows = Vec::with_capacity(neighborhood.len() * 5);
    let mut heights = Vec::with_capacity(neighborhood.len());
    for &q in &neighborhood {
        let offset = mesh.position(q) - p;
        let u = offset.dot(&e1);
        let w = offset.dot(&e2);
        let h = offset.dot(&normal);
        rows.extend_from_slice(&[u * u, u * w, w * w, u, w]);
        heights.push(h);
    }

    let design = DMatrix::from_row_slice(neighborhood.len(), 5, &rows);
    let rhs = DVector::from_vec(heights);
    let coeffs = match design.svd(true, true).solve(&rhs, 1e-12) {
        Ok(c) => c,
        Err(_) => return flat,
    };
    let (a, b, c, d, e) = (coeffs[0], coeffs[1], coeffs[2], coeffs[3], coeffs[4]);

    // First and (negated) second fundamental forms of the Monge patch
    let denom = (1.0 + d * d + e * e).sqrt();
    let first = Matrix2::new(1.0 + d * d, d * e, d * e, 1.0 + e * e);
    let second = Matrix2::new(2.0 * a, b, b, 2.0 * c) / -denom;

    let Some(first_inv) = first.try_inverse() else {
        return flat;
    };
    let shape = first_inv * second;

    let trace = shape[(0, 0)] + shape[(1, 1)];
    let det = shape[(0, 0)] * shape[(1, 1)] - shape[(0, 1)] * shape[(1, 0)];
    let disc = (trace * trace - 4.0 * det).max(0.0).sqrt();
    let k_max = 0.5 * (trace + disc);
    let k_min = 0.5 * (trace - disc);

    // Eigenvector of the shape operator for k_max, in (u, w) coordinates
    let row0 = (shape[(0, 1)], k_max - shape[(0, 0)]);
    let row1 = (k_max - shape[(1, 1)], shape[(1, 0)]);
    let (x, y) = if row0.0.hypot(row0.1) >= row1.0.hypot(row1.1) {
        row0
    } else {
        row1
    };
    let (x, y) = if x.hypot(y) < 1e-12 { (1.0, 0.0) } else { (x, y) };

    // Back to 3-D through the patch tangents; exact orthogonality of the
    // pair comes from the final cross product
    let r_u = e1 + d * normal;
    let r_w = e2 + e * normal;
    let dir_max = (x * r_u + y * r_w).normalize();
    let dir_min = normal.cross(&dir_max).normalize();

    VertexFit {
        k_max,
        k_min,
        dir_max,
        dir_min,
    }
}

/// Compute the full curvature field of a mesh.
///
/// The quadric-fitting stage runs in parallel over the vertices. Use
/// [`compute_sequential`] for single-threaded execution.
///
/// # Errors
///
/// Returns [`Error::DegenerateGeometry`] if the discrete operator cannot be
/// assembled: a triangle with (numerically) zero area, or positions that
/// produce a non-finite Laplacian.
pub fn compute(mesh: &TriMesh) -> Result<CurvatureField> {
    compute_impl(mesh, true)
}

/// Compute the full curvature field of a mesh (sequential version).
///
/// Uses single-threaded execution. Useful for benchmarking.
pub fn compute_sequential(mesh: &TriMesh) -> Result<CurvatureField> {
    compute_impl(mesh, false)
}

fn compute_impl(mesh: &TriMesh, parallel: bool) -> Result<CurvatureField> {
    let n = mesh.num_vertices();
    let operator = assemble_operator(mesh)?;

    // Validation pass: the mean-curvature normal must be finite everywhere
    // before the field is trusted. Vertices not referenced by any triangle
    // have zero area and are left flat.
    for v in 0..n {
        let area = operator.mixed_area[v];
        if area > 1e-12 {
            let hn = operator.laplacian[v] / (2.0 * area);
            if !hn.iter().all(|x| x.is_finite()) {
                return Err(Error::DegenerateGeometry(format!(
                    "non-finite Laplacian at vertex {}",
                    v
                )));
            }
        }
    }

    let gaussian: Vec<f64> = (0..n)
        .map(|v| {
            let area = operator.mixed_area[v];
            if area > 1e-12 {
                (2.0 * PI - operator.angle_sum[v]) / area
            } else {
                0.0
            }
        })
        .collect();

    let normals = mesh.vertex_normals();
    let indices: Vec<usize> = (0..n).collect();
    let fits: Vec<VertexFit> = if parallel {
        indices
            .par_iter()
            .map(|&v| fit_vertex(mesh, v, &normals[v]))
            .collect()
    } else {
        indices
            .iter()
            .map(|&v| fit_vertex(mesh, v, &normals[v]))
            .collect()
    };

    let mut mean = Vec::with_capacity(n);
    let mut k_max = Vec::with_capacity(n);
    let mut k_min = Vec::with_capacity(n);
    let mut dir_max = Vec::with_capacity(n);
    let mut dir_min = Vec::with_capacity(n);
    for fit in fits {
        mean.push(0.5 * (fit.k_max + fit.k_min));
        k_max.push(fit.k_max);
        k_min.push(fit.k_min);
        dir_max.push(fit.dir_max);
        dir_min.push(fit.dir_min);
    }

    Ok(CurvatureField {
        mean,
        gaussian,
        k_max,
        k_min,
        dir_max,
        dir_min,
    })
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn create_flat_grid(n: usize) -> TriMesh {
        let mut positions = Vec::new();
        let mut triangles = Vec::new();

        for j in 0..=n {
            for i in 0..=n {
                positions.push(Point3::new(i as f64, j as f64, 0.0));
            }
        }

        for j in 0..n {
            for i in 0..n {
                let v00 = j * (n + 1) + i;
                let v10 = v00 + 1;
                let v01 = v00 + (n + 1);
                let v11 = v01 + 1;

                triangles.push([v00, v10, v11]);
                triangles.push([v00, v11, v01]);
            }
        }

        TriMesh::new(positions, triangles).unwrap()
    }

    pub(crate) fn create_icosphere(subdivisions: usize) -> TriMesh {
        // Start with icosahedron
        let phi = (1.0 + 5.0_f64.sqrt()) / 2.0;
        let scale = 1.0 / (1.0 + phi * phi).sqrt();

        let mut positions = vec![
            Point3::new(-1.0, phi, 0.0) * scale,
            Point3::new(1.0, phi, 0.0) * scale,
            Point3::new(-1.0, -phi, 0.0) * scale,
            Point3::new(1.0, -phi, 0.0) * scale,
            Point3::new(0.0, -1.0, phi) * scale,
            Point3::new(0.0, 1.0, phi) * scale,
            Point3::new(0.0, -1.0, -phi) * scale,
            Point3::new(0.0, 1.0, -phi) * scale,
            Point3::new(phi, 0.0, -1.0) * scale,
            Point3::new(phi, 0.0, 1.0) * scale,
            Point3::new(-phi, 0.0, -1.0) * scale,
            Point3::new(-phi, 0.0, 1.0) * scale,
        ];

        let mut triangles: Vec<[usize; 3]> = vec![
            [0, 11, 5],
            [0, 5, 1],
            [0, 1, 7],
            [0, 7, 10],
            [0, 10, 11],
            [1, 5, 9],
            [5, 11, 4],
            [11, 10, 2],
            [10, 7, 6],
            [7, 1, 8],
            [3, 9, 4],
            [3, 4, 2],
            [3, 2, 6],
            [3, 6, 8],
            [3, 8, 9],
            [4, 9, 5],
            [2, 4, 11],
            [6, 2, 10],
            [8, 6, 7],
            [9, 8, 1],
        ];

        for _ in 0..subdivisions {
            let mut new_triangles = Vec::new();
            let mut edge_midpoints: HashMap<(usize, usize), usize> = HashMap::new();

            for tri in &triangles {
                let mut mids = [0usize; 3];

                for i in 0..3 {
                    let v0 = tri[i];
                    let v1 = tri[(i + 1) % 3];
                    let key = if v0 < v1 { (v0, v1) } else { (v1, v0) };

                    mids[i] = *edge_midpoints.entry(key).or_insert_with(|| {
                        let mid = Point3::from((positions[v0].coords + positions[v1].coords) / 2.0);
                        positions.push(Point3::from(mid.coords.normalize()));
                        positions.len() - 1
                    });
                }

                new_triangles.push([tri[0], mids[0], mids[2]]);
                new_triangles.push([tri[1], mids[1], mids[0]]);
                new_triangles.push([tri[2], mids[2], mids[1]]);
                new_triangles.push([mids[0], mids[1], mids[2]]);
            }

            triangles = new_triangles;
        }

        TriMesh::new(positions, triangles).unwrap()
    }

    #[test]
    fn test_curvature_flat_plane() {
        let mesh = create_flat_grid(3);
        let field = compute(&mesh).unwrap();

        // Vertex (1,1) is interior (index 5)
        let v = 5;
        assert!(
            field.gaussian[v].abs() < 0.1,
            "Gaussian curvature should be ~0 for flat plane, got {}",
            field.gaussian[v]
        );
        assert!(
            field.mean[v].abs() < 0.1,
            "Mean curvature should be ~0 for flat plane, got {}",
            field.mean[v]
        );

        // Principal directions stay finite and unit even where curvature
        // does not single them out
        for v in 0..mesh.num_vertices() {
            assert!((field.dir_max[v].norm() - 1.0).abs() < 1e-9);
            assert!((field.dir_min[v].norm() - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_curvature_sphere() {
        let mesh = create_icosphere(2);
        let field = compute(&mesh).unwrap();

        // For a unit sphere, H = K = 1 with the convex-positive convention.
        // The discrete estimates are near-constant across the vertices.
        for v in 0..mesh.num_vertices() {
            assert!(
                (field.mean[v] - 1.0).abs() < 0.2,
                "sphere mean curvature off at vertex {}: {}",
                v,
                field.mean[v]
            );
            assert!(field.k_max[v] >= field.k_min[v], "k1 < k2 at vertex {}", v);
        }

        // Gauss-Bonnet: total angle-defect curvature is 4*pi for a sphere
        let mut total = 0.0;
        let operator = assemble_operator(&mesh).unwrap();
        for v in 0..mesh.num_vertices() {
            total += field.gaussian[v] * operator.mixed_area[v];
        }
        assert!(
            (total - 4.0 * PI).abs() < 0.5,
            "Gauss-Bonnet violated: got {}",
            total
        );
    }

    #[test]
    fn test_principal_directions_orthogonal_unit_tangent() {
        let mesh = create_icosphere(1);
        let field = compute(&mesh).unwrap();
        let normals = mesh.vertex_normals();

        for v in 0..mesh.num_vertices() {
            let d1 = &field.dir_max[v];
            let d2 = &field.dir_min[v];
            assert!((d1.norm() - 1.0).abs() < 1e-9);
            assert!((d2.norm() - 1.0).abs() < 1e-9);
            assert!(
                d1.dot(d2).abs() < 1e-9,
                "principal directions not orthogonal"
            );
            assert!(
                d2.dot(&normals[v]).abs() < 1e-9,
                "minimum principal direction not tangent"
            );
        }
    }

    #[test]
    fn test_mean_is_average_of_principals() {
        let mesh = create_icosphere(1);
        let field = compute(&mesh).unwrap();

        for v in 0..mesh.num_vertices() {
            let avg = 0.5 * (field.k_max[v] + field.k_min[v]);
            assert!((field.mean[v] - avg).abs() < 1e-12);
        }
    }

    #[test]
    fn test_sequential_matches_parallel() {
        let mesh = create_icosphere(1);
        let parallel = compute(&mesh).unwrap();
        let sequential = compute_sequential(&mesh).unwrap();

        for v in 0..mesh.num_vertices() {
            assert_eq!(parallel.mean[v], sequential.mean[v]);
            assert_eq!(parallel.k_min[v], sequential.k_min[v]);
        }
    }

    #[test]
    fn test_cylinder_minimum_direction_is_axial() {
        // Open cylinder along z: k1 = 1/r around, k2 = 0 along the axis,
        // so dir_min must line up with z away from the boundary rows.
        let (rings, segments, radius) = (8usize, 16usize, 1.0);
        let mut positions = Vec::new();
        let mut triangles = Vec::new();
        for j in 0..=rings {
            for i in 0..segments {
                let theta = 2.0 * PI * i as f64 / segments as f64;
                positions.push(Point3::new(
                    radius * theta.cos(),
                    radius * theta.sin(),
                    j as f64 * 0.4,
                ));
            }
        }
        for j in 0..rings {
            for i in 0..segments {
                let v00 = j * segments + i;
                let v10 = j * segments + (i + 1) % segments;
                let v01 = (j + 1) * segments + i;
                let v11 = (j + 1) * segments + (i + 1) % segments;
                triangles.push([v00, v10, v11]);
                triangles.push([v00, v11, v01]);
            }
        }
        let mesh = TriMesh::new(positions, triangles).unwrap();
        let field = compute(&mesh).unwrap();

        let mid = (rings / 2) * segments;
        for v in mid..mid + segments {
            let axial = field.dir_min[v].z.abs();
            assert!(
                axial > 0.9,
                "dir_min should be near-axial on a cylinder, got |z| = {}",
                axial
            );
            assert!(
                field.k_max[v] > 0.5,
                "k1 should be near 1/r, got {}",
                field.k_max[v]
            );
            assert!(
                field.k_min[v].abs() < 0.2,
                "k2 should be near 0, got {}",
                field.k_min[v]
            );
        }
    }

    #[test]
    fn test_isolated_vertex_gets_finite_unit_directions() {
        // Vertex 3 appears in the file but in no triangle: its accumulated
        // normal is zero, which must not leak NaN directions into the field
        let positions = vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.5, 1.0, 0.0),
            Point3::new(9.0, 9.0, 9.0),
        ];
        let mesh = TriMesh::new(positions, vec![[0, 1, 2]]).unwrap();
        let field = compute(&mesh).unwrap();

        for v in 0..mesh.num_vertices() {
            assert!(
                field.dir_max[v].iter().all(|x| x.is_finite()),
                "dir_max not finite at vertex {}",
                v
            );
            assert!(
                field.dir_min[v].iter().all(|x| x.is_finite()),
                "dir_min not finite at vertex {}",
                v
            );
            assert!((field.dir_max[v].norm() - 1.0).abs() < 1e-9);
            assert!((field.dir_min[v].norm() - 1.0).abs() < 1e-9);
        }
        assert_eq!(field.mean[3], 0.0);
        assert_eq!(field.gaussian[3], 0.0);
    }

    #[test]
    fn test_zero_area_triangle_rejected() {
        // Distinct indices, collinear points
        let positions = vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(2.0, 0.0, 0.0),
        ];
        let mesh = TriMesh::new(positions, vec![[0, 1, 2]]).unwrap();
        let result = compute(&mesh);
        assert!(matches!(result, Err(Error::DegenerateGeometry(_))));
    }
}
