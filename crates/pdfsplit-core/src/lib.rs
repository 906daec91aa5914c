//! Size-limited PDF splitting
//!
//! Splits one PDF into consecutive parts that each stay under a byte limit,
//! without ever breaking a page across parts. The size of a run of pages is
//! only known by building and serializing it, so the splitter drives a
//! [`SizeOracle`] with a greedy, growing-window search.
//!
//! Two probe strategies are available:
//! - `ProbeStrategy::Linear`: grow one page at a time (default)
//! - `ProbeStrategy::Bisect`: binary search for the end of each part

pub mod candidate;
pub mod config;
pub mod error;
pub mod oracle;
pub mod partition;
pub mod range;
pub mod report;
pub mod source;
pub mod split;

#[cfg(test)]
mod fixtures;

pub use candidate::CandidateDocument;
pub use config::{mebibytes_to_bytes, SplitConfig, DEFAULT_MAX_SIZE_MB};
pub use error::SplitError;
pub use oracle::{CountingOracle, DocumentOracle, SizeOracle};
pub use partition::{Partitioner, ProbeStrategy};
pub use range::{validate_partition, PageRange};
pub use report::{PartReport, SplitMetrics, SplitOutcome, SplitReport};
pub use source::SourceDocument;
pub use split::{file_size, part_path, plan, split_file, split_source};
