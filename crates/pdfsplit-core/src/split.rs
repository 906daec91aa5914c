//! Splitting a PDF file into size-limited parts
//!
//! A split session runs in three phases:
//! 1. Compare the input's on-disk size with the limit; stop if it already fits
//! 2. Partition every page into ranges before touching the output directory,
//!    so an unsplittable page never leaves partial output behind
//! 3. Build and save each range as `<stem>_part<N><.ext>`, one at a time
//!
//! Saving is not transactional: if writing part N fails, parts 1..N-1 stay
//! on disk.

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::time::Instant;

use crate::candidate::CandidateDocument;
use crate::config::SplitConfig;
use crate::error::SplitError;
use crate::oracle::{CountingOracle, DocumentOracle};
use crate::partition::Partitioner;
use crate::range::{validate_partition, PageRange};
use crate::report::{PartReport, SplitMetrics, SplitOutcome, SplitReport};
use crate::source::SourceDocument;

/// Byte size of the file at `path`
pub fn file_size(path: &Path) -> Result<u64, SplitError> {
    std::fs::metadata(path)
        .map(|meta| meta.len())
        .map_err(|e| SplitError::SourceRead {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
}

/// Output path of part `index` (1-based), next to the input file
pub fn part_path(input: &Path, index: usize) -> Result<PathBuf, SplitError> {
    let stem = input.file_stem().ok_or_else(|| {
        SplitError::Usage(format!(
            "Input path {} has no file name",
            input.display()
        ))
    })?;

    let mut name: OsString = stem.to_os_string();
    name.push(format!("_part{}", index));
    if let Some(ext) = input.extension() {
        name.push(".");
        name.push(ext);
    }

    Ok(input.with_file_name(name))
}

/// Partition the source without writing anything
pub fn plan(source: &SourceDocument, config: &SplitConfig) -> Result<Vec<PageRange>, SplitError> {
    let oracle = DocumentOracle::new(source);
    Partitioner::new(oracle, config.max_size_bytes)
        .with_strategy(config.strategy)
        .partition(source.page_count())
}

/// Split the file at `input` according to `config`.
///
/// `on_part` is called after each part is saved (or planned, for a dry run).
pub fn split_file<F>(
    input: &Path,
    config: &SplitConfig,
    on_part: F,
) -> Result<SplitOutcome, SplitError>
where
    F: FnMut(&PartReport),
{
    let input_size = file_size(input)?;
    if input_size <= config.max_size_bytes {
        tracing::info!(
            "{} is {} bytes, within the {} byte limit",
            input.display(),
            input_size,
            config.max_size_bytes
        );
        return Ok(SplitOutcome::AlreadyWithinLimit {
            file_size: input_size,
            max_size_bytes: config.max_size_bytes,
        });
    }

    let source = SourceDocument::open(input)?;
    let report = split_source(&source, input, input_size, config, on_part)?;
    Ok(SplitOutcome::Split(report))
}

/// Partition an already opened source and save its parts next to `input`
pub fn split_source<F>(
    source: &SourceDocument,
    input: &Path,
    input_size: u64,
    config: &SplitConfig,
    mut on_part: F,
) -> Result<SplitReport, SplitError>
where
    F: FnMut(&PartReport),
{
    let started = Instant::now();
    let page_count = source.page_count();

    let oracle = CountingOracle::new(DocumentOracle::new(source));
    let ranges = Partitioner::new(&oracle, config.max_size_bytes)
        .with_strategy(config.strategy)
        .partition(page_count)?;
    validate_partition(&ranges, page_count)?;

    tracing::info!(
        "Planned {} parts for {} pages using {} probes",
        ranges.len(),
        page_count,
        oracle.calls()
    );

    let mut parts = Vec::with_capacity(ranges.len());
    for (i, range) in ranges.into_iter().enumerate() {
        let path = part_path(input, i + 1)?;

        let size_bytes = if config.dry_run {
            None
        } else {
            let written = CandidateDocument::build(source, range)?.save(&path)?;
            tracing::info!("Saved {} ({} bytes) to {}", range, written, path.display());
            Some(written)
        };

        let part = PartReport {
            index: i + 1,
            range,
            path,
            size_bytes,
        };
        on_part(&part);
        parts.push(part);
    }

    Ok(SplitReport {
        input: input.to_path_buf(),
        input_size_bytes: input_size,
        page_count,
        max_size_bytes: config.max_size_bytes,
        dry_run: config.dry_run,
        parts,
        metrics: SplitMetrics {
            strategy: config.strategy,
            oracle_calls: oracle.calls(),
            processing_time_ms: started.elapsed().as_millis() as u64,
        },
    })
}
