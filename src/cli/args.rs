use clap::Parser;
use std::path::PathBuf;

use staff_report::{DEFAULT_INPUT, VERSION};

#[derive(Parser, Debug)]
#[command(
    name = "staff-report",
    version = VERSION,
    about = "Per-department salary report from a staff file"
)]
pub struct CliArgs {
    /// Staff file to read
    #[arg(short, long, default_value = DEFAULT_INPUT)]
    pub input: PathBuf,

    /// Employee sort key (name or salary)
    #[arg(short, long, default_value = "name")]
    pub sort: String,

    /// Sort order (asc or desc)
    #[arg(long, default_value = "asc")]
    pub order: String,

    /// Report destination (console or file)
    #[arg(long, default_value = "console")]
    pub output: String,

    /// Output file, required with --output=file
    #[arg(long)]
    pub path: Option<PathBuf>,

    /// Report format (text or json)
    #[arg(long, default_value = "text")]
    pub format: String,

    /// Enable debug logging
    #[arg(long, default_value_t = false)]
    pub log: bool,
}
