// tests/document.rs — document-level end-to-end checks: header/trailer
// walking, object resolution through classical tables, xref streams and
// object streams, indirect stream lengths, page-tree traversal, metadata.

mod common;

use common::PdfBuilder;
use pretty_assertions::assert_eq;
use readpdf::{Error, Object, PdfDocument};

#[test]
fn trivial_one_page_document() {
    let bytes = common::one_page_pdf(
        "<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica /Encoding /WinAnsiEncoding >>",
        b"BT /F1 12 Tf (Hello) Tj ET",
    );
    let mut doc = PdfDocument::from_bytes(bytes, "").unwrap();
    assert_eq!(doc.header().version, "1.4");

    let pages = doc.pages().unwrap();
    assert_eq!(pages.len(), 1);
    assert_eq!(pages[0].number, 1);
    assert_eq!(pages[0].dict.type_name(), Some("Page"));

    let content = doc.page_content(&pages[0]).unwrap();
    assert_eq!(content, b"BT /F1 12 Tf (Hello) Tj ET");
}

#[test]
fn indirect_stream_length() {
    // object 99 defines the stream's length and comes after the stream
    let mut b = PdfBuilder::new("1.4");
    b.object(1, "<< /Type /Catalog /Pages 2 0 R >>");
    b.object(2, "<< /Type /Pages /Kids [] /Count 0 >>");
    b.stream_object(3, "", b"12345", Some("99 0 R"));
    b.object(99, "5");
    let bytes = b.finish(1, "");

    let mut doc = PdfDocument::from_bytes(bytes, "").unwrap();
    let stream = doc.object((3, 0));
    let stream = stream.as_stream().unwrap();
    assert_eq!(stream.data, b"12345");
    assert_eq!(stream.dict.get_i64("Length"), Some(5));
    assert_eq!(doc.object((99, 0)), Object::Integer(5));
}

#[test]
fn xref_stream_with_compressed_objects() {
    // object 4: ObjStm holding objects 5 and 6; object 7: the xref stream
    let mut out: Vec<u8> = Vec::new();
    out.extend_from_slice(b"%PDF-1.5\n");

    let off1 = out.len();
    out.extend_from_slice(b"1 0 obj\n<< /Type /Catalog >>\nendobj\n");

    let off4 = out.len();
    let objstm_body = b"5 0 6 8 (inside) << /Kind /Packed >>";
    out.extend_from_slice(
        format!(
            "4 0 obj\n<< /Type /ObjStm /N 2 /First 8 /Length {} >>\nstream\n",
            objstm_body.len()
        )
        .as_bytes(),
    );
    out.extend_from_slice(objstm_body);
    out.extend_from_slice(b"\nendstream\nendobj\n");

    let off7 = out.len();
    // W = [1 2 1]; ranges [0 2] and [4 4]
    let mut rows: Vec<u8> = Vec::new();
    rows.extend_from_slice(&[0, 0, 0, 255]); // 0: free
    rows.extend_from_slice(&[1, (off1 >> 8) as u8, off1 as u8, 0]); // 1: catalog
    rows.extend_from_slice(&[1, (off4 >> 8) as u8, off4 as u8, 0]); // 4: ObjStm
    rows.extend_from_slice(&[2, 0, 4, 0]); // 5: in ObjStm 4, index 0
    rows.extend_from_slice(&[2, 0, 4, 1]); // 6: in ObjStm 4, index 1
    rows.extend_from_slice(&[1, (off7 >> 8) as u8, off7 as u8, 0]); // 7: xref stream
    out.extend_from_slice(
        format!(
            "7 0 obj\n<< /Type /XRef /Size 8 /W [1 2 1] /Index [0 2 4 4] /Root 1 0 R /Length {} >>\nstream\n",
            rows.len()
        )
        .as_bytes(),
    );
    out.extend_from_slice(&rows);
    out.extend_from_slice(b"\nendstream\nendobj\n");

    out.extend_from_slice(format!("startxref\n{}\n%%EOF", off7).as_bytes());

    let mut doc = PdfDocument::from_bytes(out, "").unwrap();
    assert_eq!(doc.catalog().type_name(), Some("Catalog"));
    assert_eq!(doc.object((5, 0)), Object::String(b"inside".to_vec()));
    assert_eq!(doc.object((6, 0)).as_dict().unwrap().get_name("Kind"), Some("Packed"));
    assert!(matches!(doc.object((4, 0)), Object::Stream(_)));
    // unlisted numbers resolve to Null without looping
    assert_eq!(doc.object((42, 0)), Object::Null);
    assert_eq!(doc.object((42, 0)), Object::Null);
}

#[test]
fn nested_page_tree_pre_order() {
    let mut b = PdfBuilder::new("1.4");
    b.object(1, "<< /Type /Catalog /Pages 2 0 R >>");
    b.object(2, "<< /Type /Pages /Kids [3 0 R 4 0 R] /Count 3 >>");
    b.object(3, "<< /Type /Page /Parent 2 0 R /Tag (first) >>");
    b.object(4, "<< /Type /Pages /Parent 2 0 R /Kids [5 0 R 6 0 R] /Count 2 >>");
    b.object(5, "<< /Type /Page /Parent 4 0 R /Tag (second) >>");
    b.object(6, "<< /Type /Page /Parent 4 0 R /Tag (third) >>");
    let bytes = b.finish(1, "");

    let mut doc = PdfDocument::from_bytes(bytes, "").unwrap();
    let pages_node = doc.object((2, 0));
    let declared = pages_node.as_dict().unwrap().get_i64("Count").unwrap();
    let pages = doc.pages().unwrap();
    assert_eq!(pages.len() as i64, declared);

    let tags: Vec<String> = pages
        .iter()
        .map(|p| {
            String::from_utf8(p.dict.get("Tag").unwrap().as_string_bytes().unwrap().to_vec())
                .unwrap()
        })
        .collect();
    assert_eq!(tags, vec!["first", "second", "third"]);

    // every page's Parent lists the page among its Kids
    for page in &pages {
        let parent = page.dict.get("Parent").cloned().unwrap();
        let parent = doc.resolve(&parent);
        let kids = parent.as_dict().unwrap().get_array("Kids").unwrap().to_vec();
        let found = kids.iter().any(|kid| {
            doc.resolve(kid)
                .as_dict()
                .map(|d| d == &page.dict)
                .unwrap_or(false)
        });
        assert!(found, "page {} missing from its Parent's Kids", page.number);
    }
}

#[test]
fn incremental_update_chain_newest_wins() {
    // original document
    let mut b = PdfBuilder::new("1.4");
    b.object(1, "<< /Type /Catalog /Pages 2 0 R >>");
    b.object(2, "<< /Type /Pages /Kids [] /Count 0 >>");
    b.object(3, "(old value)");
    let mut bytes = b.finish(1, "");
    let first_xref = bytes
        .windows(9)
        .rposition(|w| w == b"startxref")
        .map(|at| {
            let tail = &bytes[at + 9..];
            let text: String = tail
                .iter()
                .take_while(|b| b.is_ascii_digit() || b.is_ascii_whitespace())
                .map(|&b| b as char)
                .collect();
            text.trim().parse::<usize>().unwrap()
        })
        .unwrap();

    // incremental update: replace object 3, chain to the old xref via /Prev
    bytes.push(b'\n');
    let off3 = bytes.len();
    bytes.extend_from_slice(b"3 0 obj\n(new value)\nendobj\n");
    let startxref = bytes.len();
    bytes.extend_from_slice(b"xref\n3 1\n");
    bytes.extend_from_slice(format!("{:010} 00000 n\r\n", off3).as_bytes());
    bytes.extend_from_slice(
        format!(
            "trailer\n<< /Size 4 /Root 1 0 R /Prev {} >>\nstartxref\n{}\n%%EOF",
            first_xref, startxref
        )
        .as_bytes(),
    );

    let mut doc = PdfDocument::from_bytes(bytes, "").unwrap();
    assert_eq!(doc.trailer().xrefs.len(), 2);
    assert_eq!(doc.object((3, 0)), Object::String(b"new value".to_vec()));
    assert_eq!(doc.catalog().type_name(), Some("Catalog"));
}

#[test]
fn metadata_with_dates() {
    let mut b = PdfBuilder::new("1.4");
    b.object(1, "<< /Type /Catalog /Pages 2 0 R >>");
    b.object(2, "<< /Type /Pages /Kids [] /Count 0 >>");
    b.object(
        9,
        "<< /Title (A quiet document) /Author (nobody) \
         /CreationDate (D:20170505150224+02'00') /ModDate (D:20210212014204Z00'00') >>",
    );
    let bytes = b.finish(1, "/Info 9 0 R");

    let mut doc = PdfDocument::from_bytes(bytes, "").unwrap();
    let info = doc.metadata().unwrap();
    assert_eq!(info.title().as_deref(), Some("A quiet document"));
    assert_eq!(info.author().as_deref(), Some("nobody"));
    let created = info.creation_date.unwrap();
    assert_eq!((created.year(), created.day()), (2017, 5));
    assert_eq!(created.offset().whole_seconds(), 7200);
    assert_eq!(info.modification_date.unwrap().year(), 2021);
}

#[test]
fn missing_root_is_an_error() {
    let mut out = b"%PDF-1.4\nxref\n0 1\n0000000000 65535 f\r\ntrailer\n<< /Size 1 >>\n".to_vec();
    out.extend_from_slice(b"startxref\n9\n%%EOF");
    assert!(matches!(
        PdfDocument::from_bytes(out, ""),
        Err(Error::Parse(_))
    ));
}
