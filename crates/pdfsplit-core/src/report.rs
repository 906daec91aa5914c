use std::path::PathBuf;

use serde::Serialize;

use crate::partition::ProbeStrategy;
use crate::range::PageRange;

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SplitOutcome {
    /// The input is already small enough; nothing was opened or written
    AlreadyWithinLimit { file_size: u64, max_size_bytes: u64 },
    Split(SplitReport),
}

#[derive(Debug, Clone, Serialize)]
pub struct SplitReport {
    pub input: PathBuf,
    pub input_size_bytes: u64,
    pub page_count: usize,
    pub max_size_bytes: u64,
    /// True when the parts were planned but not written
    pub dry_run: bool,
    pub parts: Vec<PartReport>,
    pub metrics: SplitMetrics,
}

#[derive(Debug, Clone, Serialize)]
pub struct PartReport {
    /// 1-based part number, as used in the file name
    pub index: usize,
    pub range: PageRange,
    pub path: PathBuf,
    /// Bytes written; `None` for a dry run
    pub size_bytes: Option<u64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SplitMetrics {
    pub strategy: ProbeStrategy,
    pub oracle_calls: usize,
    pub processing_time_ms: u64,
}
