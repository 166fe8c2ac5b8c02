use std::path::PathBuf;

use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};

use crate::model::ExportCategory;

#[derive(Parser, Debug)]
#[command(name = "zone-report")]
#[command(author, version, about = "Render zone analytics into self-contained HTML reports")]
#[command(long_about = "Render zone analytics into a self-contained HTML report with \
    inline SVG charts.\n\n\
    Exit codes:\n  \
    0 - Report written\n  \
    1 - Export failed\n  \
    2 - Configuration or argument error")]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress the progress bar
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Export an analytics report
    Export(ExportArgs),

    /// Generate a default configuration file
    Init(InitArgs),

    /// List export categories in report order
    Categories,
}

#[derive(Parser, Debug)]
pub struct ExportArgs {
    /// Zone identifier
    #[arg(long)]
    pub zone_id: String,

    /// Zone display name, used in the report header and file name
    #[arg(long)]
    pub zone_name: String,

    /// Account identifier forwarded to the data source
    #[arg(long)]
    pub account_tag: Option<String>,

    /// Category to export (full, traffic, security, status-codes, geo,
    /// protocol, tls, content-type, bot, firewall)
    #[arg(long, default_value = "full")]
    pub category: ExportCategory,

    /// Start of the reporting period (RFC 3339)
    #[arg(long)]
    pub start: DateTime<Utc>,

    /// End of the reporting period (RFC 3339)
    #[arg(long)]
    pub end: DateTime<Utc>,

    /// JSON file holding the analytics data
    #[arg(long)]
    pub data: PathBuf,

    /// Directory the report is written to
    #[arg(short, long, default_value = ".")]
    pub output_dir: PathBuf,

    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Output path for configuration file
    #[arg(short, long, default_value = ".zone-report.toml")]
    pub output: PathBuf,

    /// Overwrite existing configuration
    #[arg(long)]
    pub force: bool,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
