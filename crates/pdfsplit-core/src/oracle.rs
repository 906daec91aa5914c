//! Size oracles
//!
//! The only way to know how big a run of pages will be as its own file is to
//! build that file and serialize it. Everything the partitioner knows about
//! sizes comes through the [`SizeOracle`] trait.

use std::cell::Cell;

use crate::candidate::CandidateDocument;
use crate::error::SplitError;
use crate::range::PageRange;
use crate::source::SourceDocument;

/// Measures the serialized byte size of a page range as a standalone document.
///
/// Implementations must be deterministic: measuring the same range twice
/// yields the same size.
pub trait SizeOracle {
    fn measure(&self, range: PageRange) -> Result<u64, SplitError>;
}

impl<O: SizeOracle + ?Sized> SizeOracle for &O {
    fn measure(&self, range: PageRange) -> Result<u64, SplitError> {
        (**self).measure(range)
    }
}

/// Measures ranges of a parsed source by constructing and serializing them
pub struct DocumentOracle<'a> {
    source: &'a SourceDocument,
}

impl<'a> DocumentOracle<'a> {
    pub fn new(source: &'a SourceDocument) -> Self {
        Self { source }
    }
}

impl SizeOracle for DocumentOracle<'_> {
    fn measure(&self, range: PageRange) -> Result<u64, SplitError> {
        // Candidate and buffer are dropped on return
        let mut candidate = CandidateDocument::build(self.source, range)?;
        let size = candidate.to_bytes()?.len() as u64;
        tracing::debug!("Measured {}: {} bytes", range, size);
        Ok(size)
    }
}

/// Wraps another oracle and counts how often it is consulted
pub struct CountingOracle<O> {
    inner: O,
    calls: Cell<usize>,
}

impl<O: SizeOracle> CountingOracle<O> {
    pub fn new(inner: O) -> Self {
        Self {
            inner,
            calls: Cell::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.get()
    }
}

impl<O: SizeOracle> SizeOracle for CountingOracle<O> {
    fn measure(&self, range: PageRange) -> Result<u64, SplitError> {
        self.calls.set(self.calls.get() + 1);
        self.inner.measure(range)
    }
}
