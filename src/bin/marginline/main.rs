//! Marginline CLI - JSON-driven margin-line extraction.
//!
//! Usage: marginline <INPUT_JSON>
//!
//! Reads the request JSON, processes the mesh file named `model<type>` from
//! the same directory, and writes `output.json` next to the input. The
//! process exit code equals the `return_code` of the output record.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use marginline::engine::{self, RunOptions};

#[derive(Parser)]
#[command(name = "marginline")]
#[command(version, about = "Margin-line extraction on triangle meshes", long_about = None)]
struct Cli {
    /// Path to the request JSON file
    input_json: PathBuf,

    /// Write curvatures.json and model.vtk beside the input for debugging
    #[arg(long)]
    debug_artifacts: bool,
}

fn main() -> ExitCode {
    env_logger::init();

    let cli = Cli::parse();
    let options = RunOptions {
        debug_artifacts: cli.debug_artifacts,
        ..Default::default()
    };

    let output = engine::run(&cli.input_json, &options);
    if output.return_code != 0 {
        eprintln!("Error: {}", output.message);
    }

    ExitCode::from(output.return_code.clamp(0, u8::MAX as i32) as u8)
}
