//! The source PDF being split
//!
//! Parsed once and never mutated; every candidate document copies what it
//! needs out of it.

use std::collections::HashSet;
use std::path::Path;

use lopdf::{Document, ObjectId};

use crate::error::SplitError;

pub struct SourceDocument {
    document: Document,
    /// Page object ids in document order
    page_ids: Vec<ObjectId>,
    page_set: HashSet<ObjectId>,
}

impl SourceDocument {
    /// Parse the PDF at `path`
    pub fn open(path: &Path) -> Result<Self, SplitError> {
        let document = Document::load(path).map_err(|e| SplitError::SourceRead {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        let source = Self::from_document(document);
        tracing::debug!(
            "Opened {} ({} pages)",
            path.display(),
            source.page_count()
        );
        Ok(source)
    }

    /// Parse a PDF held in memory
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SplitError> {
        let document =
            Document::load_mem(bytes).map_err(|e| SplitError::ParseError(e.to_string()))?;
        Ok(Self::from_document(document))
    }

    pub fn from_document(document: Document) -> Self {
        // get_pages is keyed by 1-based page number, so values come out in order
        let page_ids: Vec<ObjectId> = document.get_pages().into_values().collect();
        let page_set = page_ids.iter().copied().collect();
        Self {
            document,
            page_ids,
            page_set,
        }
    }

    pub fn page_count(&self) -> usize {
        self.page_ids.len()
    }

    /// Object id of the page at zero-based `index`
    pub fn page_id(&self, index: usize) -> Result<ObjectId, SplitError> {
        self.page_ids.get(index).copied().ok_or_else(|| {
            SplitError::InvalidRange(format!(
                "Page index {} does not exist (document has {} pages)",
                index,
                self.page_ids.len()
            ))
        })
    }

    pub fn is_page(&self, id: ObjectId) -> bool {
        self.page_set.contains(&id)
    }

    pub fn document(&self) -> &Document {
        &self.document
    }
}
