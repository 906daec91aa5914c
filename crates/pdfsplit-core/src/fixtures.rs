//! Synthetic PDFs for unit tests

use lopdf::{content::Content, content::Operation, Dictionary, Document, Object, Stream};

/// Create a simple PDF with N pages of text
pub fn create_test_pdf(num_pages: u32) -> Vec<u8> {
    create_sized_pdf(&vec![0; num_pages as usize])
}

/// Create a PDF whose page `i` carries an incompressible image of
/// `payloads[i]` bytes, so that per-page sizes can be steered from tests
pub fn create_sized_pdf(payloads: &[usize]) -> Vec<u8> {
    let mut doc = Document::with_version("1.7");
    let pages_id = doc.new_object_id();

    let font_id = doc.add_object(Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Font".to_vec())),
        ("Subtype", Object::Name(b"Type1".to_vec())),
        ("BaseFont", Object::Name(b"Helvetica".to_vec())),
    ]));

    let mut page_ids = Vec::new();
    let mut seed = 0x2545_f491_u32;

    for (i, &payload) in payloads.iter().enumerate() {
        let mut operations = vec![
            Operation::new("BT", vec![]),
            Operation::new(
                "Tf",
                vec![Object::Name(b"F1".to_vec()), Object::Integer(12)],
            ),
            Operation::new("Td", vec![Object::Integer(100), Object::Integer(700)]),
            Operation::new(
                "Tj",
                vec![Object::String(
                    format!("Page {}", i + 1).into_bytes(),
                    lopdf::StringFormat::Literal,
                )],
            ),
            Operation::new("ET", vec![]),
        ];

        let mut xobjects = Dictionary::new();
        if payload > 0 {
            let data: Vec<u8> = (0..payload)
                .map(|_| {
                    seed ^= seed << 13;
                    seed ^= seed >> 17;
                    seed ^= seed << 5;
                    (seed >> 24) as u8
                })
                .collect();
            let image = Dictionary::from_iter(vec![
                ("Type", Object::Name(b"XObject".to_vec())),
                ("Subtype", Object::Name(b"Image".to_vec())),
                ("Width", Object::Integer(payload as i64)),
                ("Height", Object::Integer(1)),
                ("ColorSpace", Object::Name(b"DeviceGray".to_vec())),
                ("BitsPerComponent", Object::Integer(8)),
            ]);
            let image_id = doc.add_object(Stream::new(image, data));
            xobjects.set("Im0", Object::Reference(image_id));
            operations.push(Operation::new("q", vec![]));
            operations.push(Operation::new("Do", vec![Object::Name(b"Im0".to_vec())]));
            operations.push(Operation::new("Q", vec![]));
        }

        let content = Content { operations };
        let content_id = doc.add_object(Stream::new(Dictionary::new(), content.encode().unwrap()));

        let resources = Dictionary::from_iter(vec![
            (
                "Font",
                Object::Dictionary(Dictionary::from_iter(vec![(
                    "F1",
                    Object::Reference(font_id),
                )])),
            ),
            ("XObject", Object::Dictionary(xobjects)),
        ]);

        let page = Dictionary::from_iter(vec![
            ("Type", Object::Name(b"Page".to_vec())),
            ("Parent", Object::Reference(pages_id)),
            (
                "MediaBox",
                Object::Array(vec![
                    Object::Integer(0),
                    Object::Integer(0),
                    Object::Integer(612),
                    Object::Integer(792),
                ]),
            ),
            ("Resources", Object::Dictionary(resources)),
            ("Contents", Object::Reference(content_id)),
        ]);
        page_ids.push(doc.add_object(page));
    }

    finish_document(doc, pages_id, page_ids, Dictionary::new())
}

/// Create a PDF whose pages inherit `Resources`, `MediaBox` and `Rotate`
/// from the page tree root instead of declaring them themselves
pub fn create_inherited_pdf(num_pages: u32) -> Vec<u8> {
    let mut doc = Document::with_version("1.7");
    let pages_id = doc.new_object_id();

    let font_id = doc.add_object(Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Font".to_vec())),
        ("Subtype", Object::Name(b"Type1".to_vec())),
        ("BaseFont", Object::Name(b"Courier".to_vec())),
    ]));

    let mut page_ids = Vec::new();
    for i in 0..num_pages {
        let content = format!("BT /F1 10 Tf 72 720 Td (Inherited {}) Tj ET", i + 1);
        let content_id = doc.add_object(Stream::new(Dictionary::new(), content.into_bytes()));
        let page = Dictionary::from_iter(vec![
            ("Type", Object::Name(b"Page".to_vec())),
            ("Parent", Object::Reference(pages_id)),
            ("Contents", Object::Reference(content_id)),
        ]);
        page_ids.push(doc.add_object(page));
    }

    let inherited = Dictionary::from_iter(vec![
        (
            "Resources",
            Object::Dictionary(Dictionary::from_iter(vec![(
                "Font",
                Object::Dictionary(Dictionary::from_iter(vec![(
                    "F1",
                    Object::Reference(font_id),
                )])),
            )])),
        ),
        (
            "MediaBox",
            Object::Array(vec![
                Object::Integer(0),
                Object::Integer(0),
                Object::Integer(595),
                Object::Integer(842),
            ]),
        ),
        ("Rotate", Object::Integer(90)),
    ]);

    finish_document(doc, pages_id, page_ids, inherited)
}

/// Create a three-page PDF whose first page carries two link annotations,
/// one to page 2 and one to page 3
pub fn create_linked_pdf() -> Vec<u8> {
    let mut doc = Document::load_mem(&create_test_pdf(3)).unwrap();
    let pages = doc.get_pages();

    let link = |target: lopdf::ObjectId| {
        Dictionary::from_iter(vec![
            ("Type", Object::Name(b"Annot".to_vec())),
            ("Subtype", Object::Name(b"Link".to_vec())),
            (
                "Rect",
                Object::Array(vec![
                    Object::Integer(72),
                    Object::Integer(72),
                    Object::Integer(144),
                    Object::Integer(96),
                ]),
            ),
            (
                "Dest",
                Object::Array(vec![
                    Object::Reference(target),
                    Object::Name(b"Fit".to_vec()),
                ]),
            ),
        ])
    };
    let to_second = doc.add_object(link(pages[&2]));
    let to_third = doc.add_object(link(pages[&3]));

    doc.get_dictionary_mut(pages[&1]).unwrap().set(
        "Annots",
        Object::Array(vec![
            Object::Reference(to_second),
            Object::Reference(to_third),
        ]),
    );

    let mut buffer = Vec::new();
    doc.save_to(&mut buffer).unwrap();
    buffer
}

fn finish_document(
    mut doc: Document,
    pages_id: lopdf::ObjectId,
    page_ids: Vec<lopdf::ObjectId>,
    extra: Dictionary,
) -> Vec<u8> {
    let mut pages = Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Pages".to_vec())),
        ("Count", Object::Integer(page_ids.len() as i64)),
        (
            "Kids",
            Object::Array(page_ids.iter().map(|id| Object::Reference(*id)).collect()),
        ),
    ]);
    for (key, value) in extra.iter() {
        pages.set(key.clone(), value.clone());
    }
    doc.objects.insert(pages_id, Object::Dictionary(pages));

    let catalog = Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Catalog".to_vec())),
        ("Pages", Object::Reference(pages_id)),
    ]);
    let catalog_id = doc.add_object(catalog);
    doc.trailer.set("Root", Object::Reference(catalog_id));

    let mut buffer = Vec::new();
    doc.save_to(&mut buffer).unwrap();
    buffer
}
