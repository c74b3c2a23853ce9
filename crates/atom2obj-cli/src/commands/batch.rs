use crate::cli::BatchArgs;
use crate::config::build_config;
use crate::error::{CliError, Result};
use crate::utils::converter::SnapshotConverter;
use crate::utils::naming;
use crate::utils::progress::BatchProgress;
use atom2obj::engine::config::TranslationConfig;
use atom2obj::workflows::translate::translate;
use rayon::prelude::*;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, error, info, warn};

/// One snapshot of a batch with every path it touches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnapshotJob {
    pub restart: PathBuf,
    pub iteration: u64,
    pub intermediate: PathBuf,
    pub output: PathBuf,
}

impl SnapshotJob {
    fn label(&self) -> String {
        self.output
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}

#[derive(Debug, Default)]
pub struct BatchReport {
    pub succeeded: usize,
    pub failed: Vec<(PathBuf, String)>,
}

pub struct BatchOptions<'a> {
    pub converter: &'a SnapshotConverter,
    pub config: &'a TranslationConfig,
    pub keep_intermediate: bool,
    pub fail_fast: bool,
}

pub fn run(args: BatchArgs, quiet: bool) -> Result<()> {
    info!("Merging configuration from file and CLI arguments...");
    let app = build_config(&args.translation)?;

    let converter =
        SnapshotConverter::new(args.converter.clone().unwrap_or(app.batch.converter.clone()));
    let keep_intermediate = args.keep_intermediate || app.batch.keep_intermediate;
    let output_dir = args
        .output_dir
        .clone()
        .unwrap_or_else(|| args.directory.clone());
    fs::create_dir_all(&output_dir)?;

    let jobs = plan_batch(&args.directory, &output_dir)?;
    println!("Found {} restart file(s) in {}", jobs.len(), args.directory.display());
    if jobs.is_empty() {
        warn!("No restart snapshots found in {:?}", &args.directory);
        return Ok(());
    }

    info!("Using converter '{}'", converter.program());
    let progress = if quiet {
        BatchProgress::hidden(jobs.len() as u64)
    } else {
        BatchProgress::new(jobs.len() as u64)
    };
    let options = BatchOptions {
        converter: &converter,
        config: &app.translation,
        keep_intermediate,
        fail_fast: args.fail_fast,
    };
    let report = run_batch(&jobs, &options, &progress);
    progress.finish();
    let report = report?;

    if report.failed.is_empty() {
        println!("✓ {} mesh(es) written to {}", report.succeeded, output_dir.display());
        return Ok(());
    }
    for (path, reason) in &report.failed {
        error!("{:?}: {}", path, reason);
    }
    Err(CliError::Batch {
        failed: report.failed.len(),
        total: jobs.len(),
    })
}

/// Lists the restart snapshots in `directory`, ordered by iteration number.
///
/// Files whose name has no numeric iteration suffix are skipped with a warning.
pub fn plan_batch(directory: &Path, output_dir: &Path) -> Result<Vec<SnapshotJob>> {
    let mut found: Vec<(u64, String, PathBuf)> = Vec::new();
    for entry in fs::read_dir(directory)? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().into_owned();
        if !naming::is_restart_name(&name) {
            continue;
        }
        let Some(iteration) = naming::iteration_of(&name) else {
            warn!("Skipping {:?}: no iteration number after the last '.'", name);
            continue;
        };
        found.push((iteration, name, entry.path()));
    }
    found.sort();

    found
        .into_iter()
        .enumerate()
        .map(|(index, (iteration, name, restart))| {
            let unnamed = || CliError::Argument(format!("Cannot derive file names from {:?}", name));
            let intermediate = naming::intermediate_name(&name, index).ok_or_else(unnamed)?;
            let output = naming::output_name(&name, index).ok_or_else(unnamed)?;
            Ok(SnapshotJob {
                restart,
                iteration,
                intermediate: directory.join(intermediate),
                output: output_dir.join(output),
            })
        })
        .collect()
}

fn process(job: &SnapshotJob, options: &BatchOptions) -> Result<()> {
    debug!(
        "{} (iteration {}): restart -> atom dump",
        job.restart.display(),
        job.iteration
    );
    let result = options
        .converter
        .convert(&job.restart, &job.intermediate)
        .and_then(|()| {
            debug!("{}: atom dump -> obj", job.intermediate.display());
            translate(&job.intermediate, &job.output, options.config)?;
            Ok(())
        });

    if !options.keep_intermediate {
        remove_intermediate(&job.intermediate);
    }
    result
}

fn remove_intermediate(path: &Path) {
    match fs::remove_file(path) {
        Ok(()) => {}
        Err(e) if e.kind() == io::ErrorKind::NotFound => {}
        Err(e) => warn!("Could not remove {:?}: {}", path, e),
    }
}

/// Processes every job on the current rayon pool.
///
/// Without `fail_fast`, failures are collected and the remaining jobs still run.
pub fn run_batch(
    jobs: &[SnapshotJob],
    options: &BatchOptions,
    progress: &BatchProgress,
) -> Result<BatchReport> {
    let process_one = |job: &SnapshotJob| -> Result<()> {
        let label = job.label();
        progress.start(&label);
        match process(job, options) {
            Ok(()) => {
                progress.finish_one();
                Ok(())
            }
            Err(e) => {
                progress.report_failure(&label, &e.to_string());
                Err(e)
            }
        }
    };

    if options.fail_fast {
        jobs.par_iter().try_for_each(process_one)?;
        return Ok(BatchReport {
            succeeded: jobs.len(),
            failed: Vec::new(),
        });
    }

    let failed: Vec<(PathBuf, String)> = jobs
        .par_iter()
        .filter_map(|job| {
            process_one(job)
                .err()
                .map(|e| (job.restart.clone(), e.to_string()))
        })
        .collect();
    Ok(BatchReport {
        succeeded: jobs.len() - failed.len(),
        failed,
    })
}
