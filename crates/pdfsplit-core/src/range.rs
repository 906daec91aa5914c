//! Contiguous page ranges
//!
//! Pages are addressed by zero-based index; a `PageRange` is the half-open
//! interval `[start, end)` of pages that go into one output document.

use std::fmt;

use serde::Serialize;

use crate::error::SplitError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct PageRange {
    start: usize,
    end: usize,
}

impl PageRange {
    /// Create a range, rejecting empty or inverted intervals
    pub fn new(start: usize, end: usize) -> Result<Self, SplitError> {
        if start >= end {
            return Err(SplitError::InvalidRange(format!(
                "Start {} must be below end {}",
                start, end
            )));
        }
        Ok(Self { start, end })
    }

    /// A range holding exactly one page; `page` must be a real page index
    pub fn single(page: usize) -> Self {
        debug_assert!(page < usize::MAX, "page index {} has no successor", page);
        Self {
            start: page,
            end: page + 1,
        }
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn end(&self) -> usize {
        self.end
    }

    /// Number of pages in the range (always at least 1)
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_single_page(&self) -> bool {
        self.len() == 1
    }

    pub fn pages(&self) -> std::ops::Range<usize> {
        self.start..self.end
    }

    /// Check that the range lies inside a document of `page_count` pages
    pub fn check_bounds(&self, page_count: usize) -> Result<(), SplitError> {
        if self.end > page_count {
            return Err(SplitError::InvalidRange(format!(
                "Range {} ends past the last page (document has {} pages)",
                self, page_count
            )));
        }
        Ok(())
    }
}

impl fmt::Display for PageRange {
    /// Formats as 1-based inclusive page numbers, e.g. `pages 1-4`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_single_page() {
            write!(f, "page {}", self.start + 1)
        } else {
            write!(f, "pages {}-{}", self.start + 1, self.end)
        }
    }
}

/// Verify that `ranges` are non-empty, ascending, gapless and cover exactly
/// `[0, page_count)`.
pub fn validate_partition(ranges: &[PageRange], page_count: usize) -> Result<(), SplitError> {
    let mut expected_start = 0;

    for (i, range) in ranges.iter().enumerate() {
        if range.start != expected_start {
            return Err(SplitError::InvalidRange(format!(
                "Range {} starts at page index {} but {} was expected",
                i, range.start, expected_start
            )));
        }
        expected_start = range.end;
    }

    if expected_start != page_count {
        return Err(SplitError::InvalidRange(format!(
            "Ranges cover {} of {} pages",
            expected_start, page_count
        )));
    }

    Ok(())
}
