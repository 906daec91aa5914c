use std::path::PathBuf;

use clap::Parser;
use pdfsplit_core::{ProbeStrategy, DEFAULT_MAX_SIZE_MB};

#[derive(Parser, Debug)]
#[command(name = "pdfsplit")]
#[command(
    version,
    about = "Split a PDF into parts that each stay under a size limit",
    long_about = "Split a PDF into consecutive parts named <name>_partN.pdf, each no larger \
                  than the given size. Pages are never split across parts."
)]
pub struct Args {
    /// PDF file to split
    pub filename: PathBuf,

    /// Maximum size of each part in MB (1 MB = 1024 * 1024 bytes)
    #[arg(
        default_value_t = DEFAULT_MAX_SIZE_MB,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub max_size_mb: u64,

    /// How the end of each part is searched for: linear or bisect
    #[arg(long, default_value = "linear")]
    pub strategy: ProbeStrategy,

    /// Print the planned parts without writing them
    #[arg(long)]
    pub dry_run: bool,

    /// Output a machine-readable JSON report to stdout
    #[arg(long)]
    pub json: bool,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}
