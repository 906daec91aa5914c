//! PDF Splitter Binary
//!
//! Usage: pdfsplit <filename> [maxSizeInMB]

use std::io::Write;
use std::process::ExitCode;

use clap::Parser;
use pdfsplit::Args;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> ExitCode {
    let args = Args::parse();

    // stdout carries the user-facing messages, so logs go to stderr
    let level = if args.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env().add_directive(level.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match pdfsplit::run(&args, &mut out) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            if args.json {
                let payload = serde_json::json!({
                    "status": "error",
                    "error": e.to_string(),
                    "causes": e.chain().skip(1).map(|c| c.to_string()).collect::<Vec<_>>(),
                });
                let _ = writeln!(out, "{}", payload);
            } else {
                let _ = writeln!(out, "An error occurred: {:#}", e);
            }
            ExitCode::FAILURE
        }
    }
}
