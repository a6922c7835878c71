//! Legacy VTK export for curvature inspection.
//!
//! Writes the mesh as an ASCII VTK unstructured grid with per-vertex
//! curvature scalars and principal-direction vectors attached as point data.
//! Intended for debugging the curvature field in external viewers; the
//! production pipeline never calls this.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::algo::curvature::CurvatureField;
use crate::error::Result;
use crate::mesh::TriMesh;

/// Save a mesh and its curvature field as a legacy ASCII VTK file.
pub fn save<P: AsRef<Path>>(path: P, mesh: &TriMesh, curvature: &CurvatureField) -> Result<()> {
    let file = File::create(path.as_ref())?;
    let mut writer = BufWriter::new(file);

    writeln!(writer, "# vtk DataFile Version 2.0")?;
    writeln!(writer, "marginline curvature field")?;
    writeln!(writer, "ASCII")?;
    writeln!(writer, "DATASET UNSTRUCTURED_GRID")?;

    writeln!(writer, "POINTS {} float", mesh.num_vertices())?;
    for p in mesh.positions() {
        writeln!(writer, "{} {} {}", p.x, p.y, p.z)?;
    }

    writeln!(writer, "CELLS {} {}", mesh.num_triangles(), 4 * mesh.num_triangles())?;
    for tri in mesh.triangles() {
        writeln!(writer, "3 {} {} {}", tri[0], tri[1], tri[2])?;
    }

    // Cell type 5 = VTK_TRIANGLE
    writeln!(writer, "CELL_TYPES {}", mesh.num_triangles())?;
    for _ in 0..mesh.num_triangles() {
        writeln!(writer, "5")?;
    }

    writeln!(writer, "POINT_DATA {}", mesh.num_vertices())?;

    write_scalars(&mut writer, "mean_curvature", &curvature.mean)?;
    write_scalars(&mut writer, "gaussian_curvature", &curvature.gaussian)?;
    write_scalars(&mut writer, "principal_curvature_max", &curvature.k_max)?;
    write_scalars(&mut writer, "principal_curvature_min", &curvature.k_min)?;

    writeln!(writer, "VECTORS principal_direction_max float")?;
    for d in &curvature.dir_max {
        writeln!(writer, "{} {} {}", d.x, d.y, d.z)?;
    }

    writeln!(writer, "VECTORS principal_direction_min float")?;
    for d in &curvature.dir_min {
        writeln!(writer, "{} {} {}", d.x, d.y, d.z)?;
    }

    writer.flush()?;
    Ok(())
}

fn write_scalars<W: Write>(writer: &mut W, name: &str, values: &[f64]) -> Result<()> {
    writeln!(writer, "SCALARS {} float 1", name)?;
    writeln!(writer, "LOOKUP_TABLE default")?;
    for v in values {
        writeln!(writer, "{}", v)?;
    }
    Ok(())
}
