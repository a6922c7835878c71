//! Request orchestration.
//!
//! The engine drives a complete margin-line request: it reads the input
//! JSON, loads the mesh named `model<type>` from the same directory,
//! computes the curvature field, resolves the seed coordinate to its
//! nearest mesh vertex, traces and downsamples the margin line, and writes
//! `output.json` beside the input.
//!
//! [`run`] never fails out-of-band: every error is folded into the output
//! record as a return code plus message, and the record is handed back so
//! the caller can mirror the code into the process exit status.
//!
//! ```no_run
//! use std::path::Path;
//! use marginline::engine::{self, RunOptions};
//!
//! let output = engine::run(Path::new("job/input.json"), &RunOptions::default());
//! std::process::exit(output.return_code);
//! ```

pub mod request;
pub mod response;

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::algo::curvature::{self, CurvatureField};
use crate::algo::downsample::downsample;
use crate::algo::marginline::{trace, Marginline, TraceOptions};
use crate::error::{Error, Result, ReturnCode};
use crate::io as mesh_io;
use crate::io::vtk;
use crate::mesh::TriMesh;

pub use request::Request;
pub use response::{EngineOutput, MarginlineResult};

/// Options of an engine run.
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// Additionally write `curvatures.json` and `model.vtk` beside the
    /// input JSON for offline inspection of the curvature field.
    pub debug_artifacts: bool,

    /// Walker tuning; leave at default for production behavior.
    pub trace: TraceOptions,
}

/// Process one margin-line request.
///
/// Reads the request at `input_json`, executes the pipeline, writes
/// `output.json` into the request directory, and returns the output record.
/// All failures are reported inside the record; see [`ReturnCode`] for the
/// code taxonomy.
pub fn run(input_json: &Path, options: &RunOptions) -> EngineOutput {
    let output = match execute(input_json, options) {
        Ok(result) => EngineOutput::success(result),
        Err(err) => {
            log::error!("margin-line request failed: {}", err);
            EngineOutput::failure(ReturnCode::from(&err), err.to_string())
        }
    };

    let output_path = request_dir(input_json).join("output.json");
    if let Err(err) = write_output(&output_path, &output) {
        log::error!("failed to write {}: {}", output_path.display(), err);
    }

    output
}

/// Directory the request JSON lives in; also holds the model and outputs.
fn request_dir(input_json: &Path) -> PathBuf {
    match input_json.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

fn write_output(path: &Path, output: &EngineOutput) -> Result<()> {
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, output)
        .map_err(|e| Error::Io(std::io::Error::other(e)))?;
    Ok(())
}

fn execute(input_json: &Path, options: &RunOptions) -> Result<MarginlineResult> {
    let file = File::open(input_json).map_err(|e| {
        Error::InvalidInput(format!(
            "failed to open input json {}: {}",
            input_json.display(),
            e
        ))
    })?;
    let request: Request = serde_json::from_reader(BufReader::new(file))
        .map_err(|e| Error::InvalidInput(format!("failed to parse input json: {}", e)))?;
    log::info!("input json is loaded");

    request.validate()?;

    let dir = request_dir(input_json);
    let model_path = dir.join(format!("model{}", request.model.kind));
    let mesh = mesh_io::load(&model_path)?;
    log::info!(
        "model is loaded: {} vertices, {} triangles",
        mesh.num_vertices(),
        mesh.num_triangles()
    );

    let field = curvature::compute(&mesh)?;
    log::info!("curvature field is computed");

    if options.debug_artifacts {
        write_debug_artifacts(&dir, &mesh, &field);
    }

    let seed_point = request.operation.marginline.seed_point()?;
    let seed = mesh.nearest_vertex(&seed_point);
    log::info!("seed resolved to vertex {}", seed);

    let mut line = Marginline::from_seed(seed);
    trace(&mesh, &field, &mut line, &options.trace);
    log::info!(
        "margin line traced: {} vertices, closed: {}",
        line.path().len(),
        line.is_closed()
    );

    let params = &request.operation.marginline;
    let sampled = downsample(
        line.path(),
        params.num_samples as usize,
        params.threshold_to_remove_last_point,
    );

    let points = sampled
        .iter()
        .map(|&v| {
            let p = mesh.position(v);
            [p.x, p.y, p.z]
        })
        .collect();

    Ok(MarginlineResult {
        num_original_points: line.path().len(),
        num_samples: sampled.len(),
        points,
    })
}

/// Curvature arrays in the layout of the debug dump.
#[derive(Serialize)]
struct CurvatureDump<'a> {
    mean: &'a [f64],
    gaussian: &'a [f64],
    principal_value1: &'a [f64],
    principal_value2: &'a [f64],
    principal_directions1: Vec<[f64; 3]>,
    principal_directions2: Vec<[f64; 3]>,
}

/// Best-effort debug dumps; failures are logged, never fatal.
fn write_debug_artifacts(dir: &Path, mesh: &TriMesh, field: &CurvatureField) {
    let dump = CurvatureDump {
        mean: &field.mean,
        gaussian: &field.gaussian,
        principal_value1: &field.k_max,
        principal_value2: &field.k_min,
        principal_directions1: field.dir_max.iter().map(|d| [d.x, d.y, d.z]).collect(),
        principal_directions2: field.dir_min.iter().map(|d| [d.x, d.y, d.z]).collect(),
    };

    let json_path = dir.join("curvatures.json");
    let result = File::create(&json_path)
        .map_err(Error::Io)
        .and_then(|file| {
            serde_json::to_writer(BufWriter::new(file), &dump)
                .map_err(|e| Error::Io(std::io::Error::other(e)))
        });
    if let Err(err) = result {
        log::warn!("failed to save curvatures: {}", err);
    }

    let vtk_path = dir.join("model.vtk");
    if let Err(err) = vtk::save(&vtk_path, mesh, field) {
        log::warn!("failed to save vtk file: {}", err);
    }
}
