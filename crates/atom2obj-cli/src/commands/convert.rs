use crate::cli::ConvertArgs;
use crate::config::build_config;
use crate::error::{CliError, Result};
use atom2obj::workflows::translate::translate;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

pub fn run(args: ConvertArgs) -> Result<()> {
    info!("Merging configuration from file and CLI arguments...");
    let app = build_config(&args.translation)?;

    let output = output_path(&args);
    if same_file(&args.input, &output) {
        return Err(CliError::Argument(format!(
            "Output path {:?} is the input file; pass a different --output",
            &output
        )));
    }
    info!("Translating {:?} into {:?}", &args.input, &output);
    let summary = translate(&args.input, &output, &app.translation)?;

    println!(
        "✓ {} vertices, {} faces ({} dropped) written to: {}",
        summary.vertices,
        summary.faces.accepted,
        summary.faces.rejected(),
        output.display()
    );
    Ok(())
}

fn output_path(args: &ConvertArgs) -> PathBuf {
    args.output
        .clone()
        .unwrap_or_else(|| args.input.with_extension("obj"))
}

fn same_file(a: &Path, b: &Path) -> bool {
    if a == b {
        return true;
    }
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}
