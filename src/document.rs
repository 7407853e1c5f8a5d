//! document.rs
//!
//! The `PdfDocument` facade: opens a byte source, walks header and trailer,
//! authenticates against the standard security handler when the document is
//! encrypted, resolves the Catalog, and hands out pages and metadata.

use std::collections::HashSet;

use time::OffsetDateTime;

use crate::buffer::{Buffer, PdfSource};
use crate::date::parse_pdf_date;
use crate::document_parser::{DocumentParser, Header, Trailer};
use crate::error::{EncryptionError, Error, Result};
use crate::object::{Dictionary, Object, ObjectId};
use crate::security::SecurityHandler;

/// Lenient-versus-strict knobs; the defaults match how real-world PDFs are
/// best read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    /// Broken encoded streams become fatal instead of decoding to empty
    pub strict_streams: bool,
    /// Unmatched BT/ET aborts rendering instead of recovering
    pub strict_bt_et: bool,
    /// Bound on reference-chain hops in [`PdfDocument::deep_object`]
    pub max_reference_depth: usize,
}

impl Default for ParseOptions {
    fn default() -> Self {
        ParseOptions {
            strict_streams: false,
            strict_bt_et: false,
            max_reference_depth: 100,
        }
    }
}

/// One page of the document: its resolved dictionary plus its 1-based
/// position in the page tree.
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    pub number: usize,
    pub dict: Dictionary,
}

/// Decoded Info dictionary. Date entries parse into `OffsetDateTime` where
/// the string allows it; the raw dictionary stays available.
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentInfo {
    pub dict: Dictionary,
    pub creation_date: Option<OffsetDateTime>,
    pub modification_date: Option<OffsetDateTime>,
}

impl DocumentInfo {
    fn text_entry(&self, key: &str) -> Option<String> {
        self.dict.get(key).and_then(Object::as_string_bytes).map(decode_text_string)
    }

    pub fn title(&self) -> Option<String> {
        self.text_entry("Title")
    }

    pub fn author(&self) -> Option<String> {
        self.text_entry("Author")
    }

    pub fn creator(&self) -> Option<String> {
        self.text_entry("Creator")
    }

    pub fn producer(&self) -> Option<String> {
        self.text_entry("Producer")
    }

    pub fn subject(&self) -> Option<String> {
        self.text_entry("Subject")
    }
}

/// A PDF text string: UTF-16BE when the byte-order mark leads, byte-per-char
/// otherwise.
pub fn decode_text_string(bytes: &[u8]) -> String {
    if bytes.starts_with(&[0xfe, 0xff]) {
        let units: Vec<u16> = bytes[2..]
            .chunks_exact(2)
            .map(|p| u16::from_be_bytes([p[0], p[1]]))
            .collect();
        String::from_utf16_lossy(&units)
    } else {
        crate::object::latin1_to_string(bytes)
    }
}

pub struct PdfDocument {
    pub(crate) parser: DocumentParser,
    pub options: ParseOptions,
    root: Dictionary,
}

impl PdfDocument {
    /// Opens a document over any seekable source, authenticating with
    /// `password` when an Encrypt dictionary is present. Fails with
    /// `UnsupportedEncryption` for non-Standard handlers and with
    /// `WrongPassword` when neither the user nor the owner password
    /// matches.
    pub fn open(source: impl PdfSource + 'static, password: &str) -> Result<Self> {
        Self::open_with_options(source, password, ParseOptions::default())
    }

    pub fn open_with_options(
        source: impl PdfSource + 'static,
        password: &str,
        options: ParseOptions,
    ) -> Result<Self> {
        let buffer = Buffer::new(source, 0)?;
        let mut parser = DocumentParser::new(buffer)?;

        if let Some(encrypt_obj) = parser.trailer.encrypt().cloned() {
            let encrypt = match encrypt_obj {
                Object::Reference((num, gen)) => parser.locate_object(num, gen),
                other => other,
            };
            let encrypt = match encrypt.as_dict() {
                Some(d) => d.clone(),
                None => {
                    return Err(Error::Encryption(EncryptionError::Unsupported(
                        "Encrypt is not a dictionary".to_string(),
                    )))
                }
            };
            match encrypt.get_name("Filter") {
                Some("Standard") => {}
                other => {
                    return Err(Error::Encryption(EncryptionError::Unsupported(format!(
                        "security handler {:?}",
                        other
                    ))))
                }
            }
            let doc_id = parser
                .trailer
                .id()
                .and_then(|id| id.first())
                .and_then(Object::as_string_bytes)
                .map(<[u8]>::to_vec)
                .unwrap_or_default();
            let handler = SecurityHandler::new(&doc_id, &encrypt, password)
                .map_err(Error::Encryption)?;
            parser.set_security_handler(handler);
        }

        let root = match parser.trailer.root().cloned() {
            Some(Object::Reference((num, gen))) => parser.locate_object(num, gen),
            Some(other) => other,
            None => {
                return Err(Error::Parse(crate::error::ParseError::new(
                    crate::error::ParseErrorKind::BadDict,
                    0,
                    "trailer has no /Root",
                )))
            }
        };
        let root = match root.as_dict() {
            Some(d) => d.clone(),
            None => {
                return Err(Error::Parse(crate::error::ParseError::new(
                    crate::error::ParseErrorKind::BadDict,
                    0,
                    "document Catalog is not a dictionary",
                )))
            }
        };

        Ok(PdfDocument { parser, options, root })
    }

    pub fn from_bytes(bytes: Vec<u8>, password: &str) -> Result<Self> {
        Self::open(std::io::Cursor::new(bytes), password)
    }

    pub fn header(&self) -> &Header {
        &self.parser.header
    }

    pub fn trailer(&self) -> &Trailer {
        &self.parser.trailer
    }

    /// The resolved document Catalog.
    pub fn catalog(&self) -> &Dictionary {
        &self.root
    }

    pub fn security_handler(&self) -> Option<&SecurityHandler> {
        self.parser.security_handler()
    }

    /// Resolves one reference hop.
    pub fn object(&mut self, id: ObjectId) -> Object {
        self.parser.locate_object(id.0, id.1)
    }

    /// One-hop resolution of a value that may or may not be a reference.
    pub fn resolve(&mut self, obj: &Object) -> Object {
        match obj {
            Object::Reference((num, gen)) => self.parser.locate_object(*num, *gen),
            other => other.clone(),
        }
    }

    /// Follows a chain of references until a direct value comes up. More
    /// hops than `max_reference_depth` is a hard error.
    pub fn deep_object(&mut self, obj: &Object) -> Result<Object> {
        let mut current = obj.clone();
        let mut remaining = self.options.max_reference_depth;
        while let Object::Reference((num, gen)) = current {
            if remaining == 0 {
                return Err(Error::ReferenceLoop { num, gen });
            }
            current = self.parser.locate_object(num, gen);
            remaining -= 1;
        }
        Ok(current)
    }

    /// All pages, in pre-order traversal of the Catalog's page tree.
    pub fn pages(&mut self) -> Result<Vec<Page>> {
        let pages_obj = match self.root.get("Pages").cloned() {
            Some(obj) => self.resolve(&obj),
            None => return Ok(Vec::new()),
        };
        let root_node = match pages_obj.as_dict() {
            Some(d) => d.clone(),
            None => return Ok(Vec::new()),
        };
        let mut pages = Vec::new();
        let mut visited = HashSet::new();
        self.collect_pages(&root_node, &mut pages, &mut visited);
        Ok(pages
            .into_iter()
            .enumerate()
            .map(|(i, dict)| Page { number: i + 1, dict })
            .collect())
    }

    fn collect_pages(
        &mut self,
        node: &Dictionary,
        out: &mut Vec<Dictionary>,
        visited: &mut HashSet<ObjectId>,
    ) {
        let kids = match node.get("Kids").cloned() {
            Some(kids) => self.resolve(&kids),
            None => return,
        };
        let kids = match kids.as_array() {
            Some(a) => a.to_vec(),
            None => return,
        };
        for kid in kids {
            if let Some(id) = kid.as_reference() {
                // page trees are cyclic by construction (Parent edges); a
                // malformed Kids edge must not loop us
                if !visited.insert(id) {
                    continue;
                }
            }
            let kid = self.resolve(&kid);
            let dict = match kid.as_dict() {
                Some(d) => d.clone(),
                None => continue,
            };
            match dict.type_name() {
                Some("Page") => out.push(dict),
                Some("Pages") => self.collect_pages(&dict, out, visited),
                other => log::warn!("unknown page tree node type {:?}", other),
            }
        }
    }

    /// 1-based page access; `PageDoesNotExist` past either end.
    pub fn page(&mut self, n: usize) -> Result<Page> {
        if n == 0 {
            return Err(Error::PageDoesNotExist(n));
        }
        self.pages()?
            .into_iter()
            .nth(n - 1)
            .ok_or(Error::PageDoesNotExist(n))
    }

    /// The page's content: every stream in `/Contents`, decoded and
    /// concatenated in order.
    pub fn page_content(&mut self, page: &Page) -> Result<Vec<u8>> {
        let contents = match page.dict.get("Contents").cloned() {
            Some(c) => self.resolve(&c),
            None => return Ok(Vec::new()),
        };
        let mut data = Vec::new();
        match contents {
            Object::Stream(stream) => {
                data.extend(self.filtered_or_empty(&stream));
            }
            Object::Array(items) => {
                for item in items {
                    if let Object::Stream(stream) = self.resolve(&item) {
                        data.extend(self.filtered_or_empty(&stream));
                    }
                }
            }
            other => log::warn!("page Contents is a {}", other.type_name()),
        }
        Ok(data)
    }

    fn filtered_or_empty(&self, stream: &crate::object::Stream) -> Vec<u8> {
        match crate::filters::decode(&stream.dict, &stream.data, self.options.strict_streams) {
            Ok(data) => data,
            Err(e) => {
                log::error!("cannot decode content stream: {}", e);
                Vec::new()
            }
        }
    }

    /// Document metadata from the trailer's Info dictionary, with the date
    /// entries parsed where possible.
    pub fn metadata(&mut self) -> Option<DocumentInfo> {
        let info = self.parser.trailer.info().cloned()?;
        let dict = self.resolve(&info).as_dict().cloned()?;
        let date_entry = |key: &str| {
            dict.get(key)
                .and_then(Object::as_string_bytes)
                .and_then(|b| parse_pdf_date(&decode_text_string(b)).ok())
        };
        Some(DocumentInfo {
            creation_date: date_entry("CreationDate"),
            modification_date: date_entry("ModDate"),
            dict,
        })
    }
}
