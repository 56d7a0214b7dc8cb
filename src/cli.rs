use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, ValueEnum, Default)]
pub enum OutputFormat {
    #[default]
    Terminal,
    Json,
}

#[derive(Parser, Debug)]
#[command(
    name = "mlgate",
    version,
    about = "Compliance gate that scans changed files for ML artifacts",
    long_about = "mlgate inspects the files changed in a pending submission and flags ML library \
                  imports, model weight loading, pretrained model usage, external downloads, and \
                  serialized model files, then writes a JSON report and rejects the submission if \
                  anything was found."
)]
pub struct Cli {
    /// Repository root to scan (the git diff runs here)
    #[arg(default_value = ".")]
    pub repo: PathBuf,

    /// Read the change set from a newline-separated file instead of git
    #[arg(long, value_name = "PATH")]
    pub files_from: Option<PathBuf>,

    /// Reference to diff against when querying git
    #[arg(long, default_value = "HEAD", value_name = "REF")]
    pub diff_ref: String,

    /// Path of the JSON report artifact
    #[arg(short, long, default_value = "mlgate_report.json", value_name = "PATH")]
    pub output: PathBuf,

    /// YAML config file overriding the built-in pattern sets
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Console output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Terminal)]
    pub format: OutputFormat,

    /// Print every finding, not just per-detector counts
    #[arg(short, long)]
    pub verbose: bool,
}
