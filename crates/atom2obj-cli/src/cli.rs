use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    author = "Kirill Lykov",
    version,
    about = "atom2obj - Convert LAMMPS atom dumps with angle topology into OBJ triangle meshes.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Set the number of threads used by `batch`.
    /// Defaults to the number of available logical cores.
    #[arg(short = 'j', long, global = true, value_name = "NUM")]
    pub threads: Option<usize>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Convert a single atom-dump file into an OBJ mesh.
    Convert(ConvertArgs),
    /// Convert every `*.restart.<iteration>` snapshot in a directory.
    Batch(BatchArgs),
}

/// Settings shared by `convert` and `batch`.
#[derive(Args, Debug, Clone, Default)]
pub struct TranslationArgs {
    /// Path to a configuration file in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Multiply every output coordinate by this factor.
    #[arg(short = 's', long, value_name = "FLOAT")]
    pub scale_factor: Option<f64>,

    /// Drop triangles with a squared edge length above this value.
    #[arg(long = "max-edge-squared", value_name = "FLOAT")]
    pub max_edge_length_squared: Option<f64>,

    /// Drop triangles whose squared cross-product magnitude is above this value.
    #[arg(long = "max-area-squared", value_name = "FLOAT")]
    pub max_area_squared: Option<f64>,

    /// Comma-separated material names, selected by atom type.
    #[arg(long, value_name = "NAME,...", value_delimiter = ',')]
    pub palette: Option<Vec<String>>,

    /// Disable materials even if the config file defines a palette.
    #[arg(long, conflicts_with = "palette")]
    pub no_palette: bool,

    /// Set a specific configuration value, overriding the config file.
    /// Can be used multiple times. Example: -S filter.max-area-squared=4.0
    #[arg(short = 'S', long = "set", value_name = "KEY=VALUE")]
    pub set_values: Vec<String>,
}

/// Arguments for the `convert` subcommand.
#[derive(Args, Debug)]
pub struct ConvertArgs {
    /// Path to the input atom-dump file.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub input: PathBuf,

    /// Path for the output OBJ file. Defaults to the input path with an `.obj` extension.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    #[command(flatten)]
    pub translation: TranslationArgs,
}

/// Arguments for the `batch` subcommand.
#[derive(Args, Debug)]
pub struct BatchArgs {
    /// Directory holding the restart snapshots.
    #[arg(short = 'd', long, default_value = ".", value_name = "DIR")]
    pub directory: PathBuf,

    /// Directory for the OBJ files. Defaults to the snapshot directory.
    #[arg(long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Command turning a restart file into an atom dump, called as `<CMD> <restart> <atom>`.
    #[arg(long, value_name = "CMD")]
    pub converter: Option<String>,

    /// Keep the intermediate atom-dump files.
    #[arg(long)]
    pub keep_intermediate: bool,

    /// Stop at the first snapshot that fails.
    #[arg(long)]
    pub fail_fast: bool,

    #[command(flatten)]
    pub translation: TranslationArgs,
}
