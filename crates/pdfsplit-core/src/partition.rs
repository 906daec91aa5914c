//! Greedy page partitioning
//!
//! Starting at a cursor, grows a candidate range one page at a time until the
//! next page would push it over the limit, commits the last range that fit,
//! and continues from there. A single page that is too big on its own makes
//! the whole split impossible.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SplitError;
use crate::oracle::SizeOracle;
use crate::range::PageRange;

/// How the end of each range is searched for
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProbeStrategy {
    /// Measure `[start, start+1)`, `[start, start+2)`, ... until one is too big.
    /// Quadratic in oracle calls, but assumes nothing about the sizes.
    #[default]
    Linear,
    /// Binary search for the largest fitting end. Same boundaries as `Linear`
    /// as long as sizes never shrink when a page is added.
    Bisect,
}

impl fmt::Display for ProbeStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProbeStrategy::Linear => f.write_str("linear"),
            ProbeStrategy::Bisect => f.write_str("bisect"),
        }
    }
}

impl FromStr for ProbeStrategy {
    type Err = SplitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "linear" => Ok(ProbeStrategy::Linear),
            "bisect" | "binary" => Ok(ProbeStrategy::Bisect),
            other => Err(SplitError::Usage(format!(
                "Unknown probe strategy: {} (expected 'linear' or 'bisect')",
                other
            ))),
        }
    }
}

pub struct Partitioner<O> {
    oracle: O,
    max_size: u64,
    strategy: ProbeStrategy,
}

impl<O: SizeOracle> Partitioner<O> {
    pub fn new(oracle: O, max_size: u64) -> Self {
        Self {
            oracle,
            max_size,
            strategy: ProbeStrategy::default(),
        }
    }

    pub fn with_strategy(mut self, strategy: ProbeStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Partition `[0, page_count)` into ascending, gapless ranges that each
    /// measure at most `max_size` bytes.
    ///
    /// Fails with [`SplitError::UnsplittableRange`] as soon as a single page
    /// measures above the limit; no ranges are returned in that case.
    pub fn partition(&self, page_count: usize) -> Result<Vec<PageRange>, SplitError> {
        let mut committed = Vec::new();
        let mut cursor = 0;

        while cursor < page_count {
            let end = match self.strategy {
                ProbeStrategy::Linear => self.grow_linear(cursor, page_count)?,
                ProbeStrategy::Bisect => self.grow_bisect(cursor, page_count)?,
            };
            let range = PageRange::new(cursor, end)?;
            tracing::info!("Committed {} ({} pages)", range, range.len());
            committed.push(range);
            cursor = end;
        }

        Ok(committed)
    }

    /// Largest `end` such that `[start, end)` fits, probing one page at a time
    fn grow_linear(&self, start: usize, page_count: usize) -> Result<usize, SplitError> {
        let mut end = start + 1;
        loop {
            let size = self.measure(start, end)?;

            if size > self.max_size {
                if end == start + 1 {
                    return Err(self.unsplittable(start, size));
                }
                return Ok(end - 1);
            }

            if end == page_count {
                return Ok(end);
            }

            end += 1;
        }
    }

    /// Same contract as `grow_linear`, in O(log n) probes
    fn grow_bisect(&self, start: usize, page_count: usize) -> Result<usize, SplitError> {
        let size = self.measure(start, start + 1)?;
        if size > self.max_size {
            return Err(self.unsplittable(start, size));
        }

        // Invariant: [start, lo) fits, nothing past hi is known to fit
        let mut lo = start + 1;
        let mut hi = page_count;
        while lo < hi {
            let mid = lo + (hi - lo + 1) / 2;
            if self.measure(start, mid)? <= self.max_size {
                lo = mid;
            } else {
                hi = mid - 1;
            }
        }

        Ok(lo)
    }

    fn measure(&self, start: usize, end: usize) -> Result<u64, SplitError> {
        let range = PageRange::new(start, end)?;
        let size = self.oracle.measure(range)?;
        tracing::debug!(
            "Probe {}: {} bytes (limit {})",
            range,
            size,
            self.max_size
        );
        Ok(size)
    }

    fn unsplittable(&self, page: usize, size: u64) -> SplitError {
        SplitError::UnsplittableRange {
            page_number: page + 1,
            size,
            max_size: self.max_size,
        }
    }
}
