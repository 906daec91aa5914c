use std::io::{self, Write};

use anyhow::{Context, Result};
use pdfsplit_core::{split_file, PartReport, SplitConfig, SplitOutcome};

use crate::cli::Args;

const WITHIN_LIMIT_MESSAGE: &str = "The file size is already within the specified limit.";

/// Run one split and write the user-facing messages to `out`
pub fn run<W: Write>(args: &Args, out: &mut W) -> Result<SplitOutcome> {
    let config = SplitConfig::from_mebibytes(args.max_size_mb)?
        .with_strategy(args.strategy)
        .with_dry_run(args.dry_run);

    tracing::info!(
        "Splitting {} into parts of at most {} bytes ({} probing)",
        args.filename.display(),
        config.max_size_bytes,
        config.strategy
    );

    // Parts are announced as they are saved; the first failed write is kept
    let mut announce_error: Option<io::Error> = None;
    let outcome = split_file(&args.filename, &config, |part| {
        if args.json || announce_error.is_some() {
            return;
        }
        if let Err(e) = writeln!(out, "{}", announcement(part)) {
            announce_error = Some(e);
        }
    })
    .with_context(|| format!("Failed to split {}", args.filename.display()))?;

    if let Some(e) = announce_error {
        return Err(e).context("Failed to write progress");
    }

    if args.json {
        writeln!(out, "{}", serde_json::to_string_pretty(&outcome)?)?;
    } else if let SplitOutcome::AlreadyWithinLimit { .. } = outcome {
        writeln!(out, "{}", WITHIN_LIMIT_MESSAGE)?;
    }

    Ok(outcome)
}

fn announcement(part: &PartReport) -> String {
    match part.size_bytes {
        Some(_) => format!("Saved: {}", part.path.display()),
        None => format!("Would save: {} ({})", part.path.display(), part.range),
    }
}
