//! Standalone documents built from a page range
//!
//! Uses "Construction by Whitelist":
//! 1. Copy the target page dictionaries, materializing inherited attributes
//! 2. Traverse the dependency graph from those pages to find every required
//!    object, without crossing into the source page tree or other pages
//! 3. Build a fresh page tree and catalog around the copies
//! 4. Null out references to objects left behind (links to other parts)
//! 5. Renumber and compress

use std::collections::HashSet;
use std::path::Path;

use lopdf::{Dictionary, Document, Object, ObjectId};

use crate::error::SplitError;
use crate::range::PageRange;
use crate::source::SourceDocument;

/// Page attributes a page may inherit from its ancestors in the page tree
const INHERITABLE_ATTRIBUTES: [&[u8]; 4] = [b"Resources", b"MediaBox", b"CropBox", b"Rotate"];

/// Guards against cyclic `Parent` chains in malformed files
const MAX_PAGE_TREE_DEPTH: usize = 64;

/// A freshly constructed document holding copies of the pages in one range
#[derive(Debug)]
pub struct CandidateDocument {
    range: PageRange,
    document: Document,
}

impl CandidateDocument {
    pub fn build(source: &SourceDocument, range: PageRange) -> Result<Self, SplitError> {
        range.check_bounds(source.page_count())?;

        let src = source.document();
        let mut doc = Document::with_version(src.version.clone());

        // Fresh ids above everything in the source; renumbering compacts them later
        let pages_id: ObjectId = (src.max_id + 1, 0);
        let catalog_id: ObjectId = (src.max_id + 2, 0);

        let mut pending = Vec::new();
        let mut kids = Vec::with_capacity(range.len());

        for index in range.pages() {
            let page_id = source.page_id(index)?;
            let mut page = src
                .get_dictionary(page_id)
                .map_err(|e| {
                    SplitError::ParseError(format!("Page {} is unreadable: {}", index + 1, e))
                })?
                .clone();

            inherit_attributes(src, &mut page);
            page.remove(b"Parent");
            collect_references(&Object::Dictionary(page.clone()), &mut pending);
            page.set("Parent", Object::Reference(pages_id));

            doc.objects.insert(page_id, Object::Dictionary(page));
            kids.push(Object::Reference(page_id));
        }

        while let Some(id) = pending.pop() {
            if doc.objects.contains_key(&id) || source.is_page(id) {
                continue;
            }
            let Some(object) = src.objects.get(&id) else {
                continue;
            };
            if is_page_tree_node(object) {
                continue;
            }
            collect_references(object, &mut pending);
            doc.objects.insert(id, object.clone());
        }

        let pages = Dictionary::from_iter(vec![
            ("Type", Object::Name(b"Pages".to_vec())),
            ("Count", Object::Integer(range.len() as i64)),
            ("Kids", Object::Array(kids)),
        ]);
        doc.objects.insert(pages_id, Object::Dictionary(pages));

        let catalog = Dictionary::from_iter(vec![
            ("Type", Object::Name(b"Catalog".to_vec())),
            ("Pages", Object::Reference(pages_id)),
        ]);
        doc.objects.insert(catalog_id, Object::Dictionary(catalog));
        doc.trailer.set("Root", Object::Reference(catalog_id));

        // Renumbering only rewrites ids it knows about
        let dropped = null_dangling_references(&mut doc);
        if dropped > 0 {
            tracing::debug!("Dropped {} references to objects outside {}", dropped, range);
        }

        doc.max_id = catalog_id.0;
        doc.renumber_objects();
        doc.compress();

        Ok(Self {
            range,
            document: doc,
        })
    }

    pub fn page_count(&self) -> usize {
        self.document.get_pages().len()
    }

    /// Serialize to an in-memory buffer.
    ///
    /// Repeated calls produce identical bytes.
    pub fn to_bytes(&mut self) -> Result<Vec<u8>, SplitError> {
        // Writing an xref stream bumps `max_id` and rewrites the trailer
        let max_id = self.document.max_id;
        let trailer = self.document.trailer.clone();

        let mut buffer = Vec::new();
        let result = self.document.save_to(&mut buffer);

        self.document.max_id = max_id;
        self.document.trailer = trailer;

        result.map_err(|e| {
            SplitError::SerializationError(format!("Save of {} failed: {}", self.range, e))
        })?;
        Ok(buffer)
    }

    /// Serialize and write to `path`, returning the number of bytes written
    pub fn save(&mut self, path: &Path) -> Result<u64, SplitError> {
        let bytes = self.to_bytes()?;
        std::fs::write(path, &bytes).map_err(|e| SplitError::PersistError {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        Ok(bytes.len() as u64)
    }
}

/// Copy attributes the page inherits from its ancestors onto the page itself
fn inherit_attributes(src: &Document, page: &mut Dictionary) {
    let mut parent = page.get(b"Parent").and_then(Object::as_reference).ok();
    let mut depth = 0;

    while let Some(parent_id) = parent {
        depth += 1;
        if depth > MAX_PAGE_TREE_DEPTH {
            tracing::warn!("Page tree deeper than {} levels, stopping", MAX_PAGE_TREE_DEPTH);
            break;
        }

        let Ok(node) = src.get_dictionary(parent_id) else {
            tracing::warn!("Page tree node {:?} is not a dictionary", parent_id);
            break;
        };

        for key in INHERITABLE_ATTRIBUTES {
            if !page.has(key) {
                if let Ok(value) = node.get(key) {
                    page.set(key.to_vec(), value.clone());
                }
            }
        }

        parent = node.get(b"Parent").and_then(Object::as_reference).ok();
    }
}

/// Push every object id referenced from `object` onto `out`
fn collect_references(object: &Object, out: &mut Vec<ObjectId>) {
    match object {
        Object::Reference(id) => out.push(*id),
        Object::Array(items) => {
            for item in items {
                collect_references(item, out);
            }
        }
        Object::Dictionary(dict) => {
            for (_, value) in dict.iter() {
                collect_references(value, out);
            }
        }
        Object::Stream(stream) => {
            for (_, value) in stream.dict.iter() {
                collect_references(value, out);
            }
        }
        _ => {}
    }
}

/// Replace every reference to an object missing from `doc` with `null`,
/// returning how many were replaced
fn null_dangling_references(doc: &mut Document) -> usize {
    let known: HashSet<ObjectId> = doc.objects.keys().copied().collect();
    let mut dropped = 0;
    for object in doc.objects.values_mut() {
        dropped += null_unknown(object, &known);
    }
    dropped
}

fn null_unknown(object: &mut Object, known: &HashSet<ObjectId>) -> usize {
    if let Object::Reference(id) = *object {
        if known.contains(&id) {
            return 0;
        }
        *object = Object::Null;
        return 1;
    }

    match object {
        Object::Array(items) => items.iter_mut().map(|item| null_unknown(item, known)).sum(),
        Object::Dictionary(dict) => dict
            .iter_mut()
            .map(|(_, value)| null_unknown(value, known))
            .sum(),
        Object::Stream(stream) => stream
            .dict
            .iter_mut()
            .map(|(_, value)| null_unknown(value, known))
            .sum(),
        _ => 0,
    }
}

fn is_page_tree_node(object: &Object) -> bool {
    object
        .as_dict()
        .and_then(|dict| dict.get(b"Type"))
        .and_then(Object::as_name)
        .map(|name| name == b"Pages")
        .unwrap_or(false)
}
