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
    version,
    about = "Generate LAMMPS pair coefficients for the MARTINI coarse-grained force field from a GROMACS-format parameter database.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate pair_style and pair_coeff directives for every bead type pair.
    Generate(GenerateArgs),
    /// Look up the parameters of a single label pair in the database.
    Lookup(LookupArgs),
}

/// Arguments for the `generate` subcommand.
#[derive(Args, Debug, Default)]
pub struct GenerateArgs {
    // --- Files ---
    /// Bead type mapping file, one '<type> <label>' pair per line [default: martini.inp].
    #[arg(short, long, value_name = "PATH")]
    pub mapping: Option<PathBuf>,

    /// MARTINI parameter database in GROMACS format [default: martini_v3.0.0.itp].
    #[arg(short, long, value_name = "PATH")]
    pub database: Option<PathBuf>,

    /// Output file for the LAMMPS directives, overwritten if present [default: paircoeffs.txt].
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Configuration file in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    // --- Pair style ---
    /// LAMMPS pair style: 'lj/gromacs' or 'lj/cut' [default: lj/gromacs].
    #[arg(short = 's', long, value_name = "STYLE")]
    pub pair_style: Option<String>,

    /// Cutoff distance in nm [default: 1.2].
    #[arg(long, value_name = "NM")]
    pub cutoff: Option<f64>,

    /// Inner (switching) cutoff distance in nm, used by lj/gromacs [default: 0.9].
    #[arg(long, value_name = "NM")]
    pub inner_cutoff: Option<f64>,

    /// Set a specific configuration value, overriding the config file.
    /// Can be used multiple times. Example: -S pair.cutoff=1.1
    #[arg(short = 'S', long = "set", value_name = "KEY=VALUE", num_args(0..))]
    pub set_values: Vec<String>,

    /// Do not draw a progress bar.
    #[arg(long)]
    pub no_progress: bool,
}

/// Arguments for the `lookup` subcommand.
#[derive(Args, Debug)]
pub struct LookupArgs {
    /// MARTINI parameter database in GROMACS format [default: martini_v3.0.0.itp].
    #[arg(short, long, value_name = "PATH")]
    pub database: Option<PathBuf>,

    /// First MARTINI label (e.g. TC5).
    #[arg(required = true)]
    pub first: String,

    /// Second MARTINI label (e.g. TP1). Use the same label twice for a self interaction.
    #[arg(required = true)]
    pub second: String,
}
