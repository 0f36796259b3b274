use clap::Parser;
use clap_complete::Shell;
use std::path::PathBuf;

/// Scan a drive or directory for large files and move them to the Recycle
/// Bin safely.
#[derive(Parser, Debug)]
#[command(name = "drive-sift")]
#[command(author, version, long_about = None)]
pub struct Cli {
    /// Path to scan (e.g. 'D:\', 'C:\Users'; MSYS-style '/d/data' works too)
    #[arg(value_name = "PATH", default_value = "C:\\")]
    pub path: String,

    /// Minimum file size, e.g. '100MB' or '1.5GB' [default: 50MB]
    #[arg(short = 's', long, value_name = "SIZE")]
    pub min_size: Option<String>,

    /// Number of largest files to display [default: 20]
    #[arg(short, long, value_name = "N")]
    pub top: Option<usize>,

    /// Additional directory to exclude from the scan (repeatable)
    #[arg(short, long, value_name = "PATH")]
    pub exclude: Vec<String>,

    /// Print results as JSON and skip the interactive cleanup
    #[arg(long)]
    pub json: bool,

    /// Path to configuration file
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long)]
    pub quiet: bool,

    /// Generate shell completions and exit
    #[arg(long, value_enum, value_name = "SHELL")]
    pub completions: Option<Shell>,
}
