use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    author = "protscope contributors",
    version,
    about = "protscope CLI - Look up protein records and interaction networks, compute sequence statistics and compare sequences.",
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

    /// Path to a configuration file in TOML format.
    /// Defaults to config.toml in the user configuration directory, if present.
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override a configuration value (e.g., 'alignment.max-alignments=50').
    /// Can be used multiple times.
    #[arg(short = 'S', long = "set", global = true, value_name = "KEY=VALUE")]
    pub set_values: Vec<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Retrieve protein records and their interaction networks.
    Lookup(LookupArgs),
    /// Compute physico-chemical statistics for a protein sequence.
    Analyze(AnalyzeArgs),
    /// Globally align two protein sequences.
    Compare(CompareArgs),
    /// Start an interactive session that keeps retrieved data between commands.
    Shell,
}

/// Arguments for the `lookup` subcommand.
#[derive(Args, Debug)]
pub struct LookupArgs {
    /// One or more registry identifiers (e.g., 'P04637').
    #[arg(required = true, value_name = "ID")]
    pub identifiers: Vec<String>,

    /// Do not retrieve or draw the interaction network.
    #[arg(long, conflicts_with = "network_file")]
    pub no_network: bool,

    /// Read the interaction network from a local TSV file instead of the network service.
    #[arg(long, value_name = "PATH")]
    pub network_file: Option<PathBuf>,

    /// Path for the rendered network graph (SVG).
    /// Defaults to '<ID>_network.svg' in the current directory.
    #[arg(short = 'g', long, value_name = "PATH")]
    pub graph_output: Option<PathBuf>,

    /// Save the retrieved interaction table as TSV.
    #[arg(long, value_name = "PATH")]
    pub save_network: Option<PathBuf>,

    /// Also compute sequence statistics for the record's sequence.
    #[arg(long)]
    pub analyze: bool,
}

/// Arguments for the `analyze` subcommand.
#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// The protein sequence. Read from standard input when omitted.
    #[arg(value_name = "SEQUENCE", conflicts_with = "file")]
    pub sequence: Option<String>,

    /// Read the sequence from a file (plain or FASTA).
    #[arg(short, long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Use monoisotopic instead of average residue masses.
    #[arg(long)]
    pub monoisotopic: bool,
}

/// Arguments for the `compare` subcommand.
#[derive(Args, Debug)]
pub struct CompareArgs {
    #[arg(value_name = "SEQ1")]
    pub first: String,

    #[arg(value_name = "SEQ2")]
    pub second: String,

    #[command(flatten)]
    pub alignment: AlignmentOverrides,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// Alignment settings that take precedence over the configuration file.
#[derive(Args, Debug, Default, Clone)]
pub struct AlignmentOverrides {
    /// Maximum number of optimal alignments to enumerate.
    #[arg(long, value_name = "NUM")]
    pub max_alignments: Option<usize>,

    /// Score for a pair of identical residues.
    #[arg(long, value_name = "INT", allow_negative_numbers = true)]
    pub match_score: Option<i32>,

    /// Score for a pair of different residues.
    #[arg(long, value_name = "INT", allow_negative_numbers = true)]
    pub mismatch_score: Option<i32>,
}

#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}
