use std::path::PathBuf;

use clap::Parser;

/// Printable one-page wall calendar generator.
#[derive(Debug, Parser)]
#[command(
    name = "yearcal",
    version,
    about = "Generate a one-page wall calendar for a year as a Word document"
)]
pub struct Cli {
    /// Calendar year; overrides the configuration file, defaults to the current year.
    #[arg(short, long)]
    pub year: Option<i32>,

    /// Path to TOML configuration file (default: ./yearcal.toml if present).
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Directory the document is written to (default: working directory).
    #[arg(short, long = "output-dir")]
    pub output_dir: Option<PathBuf>,

    /// Print the holidays of the year instead of writing a document.
    #[arg(long = "list-holidays")]
    pub list_holidays: bool,

    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
