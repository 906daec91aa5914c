//! PDF splitter command-line front end
//!
//! Argument parsing and user-facing output; the splitting itself lives in
//! `pdfsplit-core`.

pub mod app;
pub mod cli;

pub use app::run;
pub use cli::Args;
