//! document_parser.rs
//!
//! File-level structure: header discovery, trailer and xref chains across
//! incremental updates, and on-demand location of indirect objects. Lookup
//! order for a `(num, gen)` is: registry cache, in-use xref entry, entry
//! compressed into an object stream, and finally a brute-force scan of the
//! body. A key that is found nowhere resolves to Null and is cached as
//! such so it is never hunted twice.

use crate::buffer::Buffer;
use crate::error::{Error, ParseError, ParseErrorKind, Result};
use crate::object::{Dictionary, IndirectObject, Object, ObjectId};
use crate::parser::{BasicParser, PendingStreamLength};
use crate::registry::Registry;
use crate::security::SecurityHandler;
use crate::xref::{XRef, XRefEntry};

/// `%PDF-M.m` (or `%IPS-Adobe-N.n PDF-M.m`) within the first KiB.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    pub version: String,
    pub major: u8,
    pub minor: u8,
    /// Header offset within the file; not necessarily 0
    pub offset: u64,
}

/// Top-level parameters plus every xref section, newest first. Following
/// `/Prev` builds the incremental-update chain; the first trailer wins for
/// Root / Encrypt / Info / ID.
#[derive(Debug, Clone, Default)]
pub struct Trailer {
    pub xrefs: Vec<XRef>,
    pub params: Dictionary,
}

impl Trailer {
    pub fn root(&self) -> Option<&Object> {
        self.params.get("Root")
    }

    pub fn encrypt(&self) -> Option<&Object> {
        self.params.get("Encrypt")
    }

    pub fn info(&self) -> Option<&Object> {
        self.params.get("Info")
    }

    pub fn id(&self) -> Option<&[Object]> {
        self.params.get_array("ID")
    }

    pub fn size(&self) -> Option<i64> {
        self.params.get_i64("Size")
    }
}

pub struct DocumentParser {
    parser: BasicParser,
    pub registry: Registry,
    pub header: Header,
    pub trailer: Trailer,
    security: Option<SecurityHandler>,
    /// Where the next brute-force scan resumes
    brute_force_offset: u64,
    brute_force_exhausted: bool,
    /// Keys being resolved right now; re-entering one aborts that path
    in_progress: Vec<ObjectId>,
}

impl DocumentParser {
    pub fn new(buffer: Buffer) -> Result<Self> {
        let mut parser = BasicParser::new(buffer);
        let header = parse_header(&mut parser)?;
        let body_start = header.offset;
        let mut dp = DocumentParser {
            parser,
            registry: Registry::new(),
            header,
            trailer: Trailer::default(),
            security: None,
            brute_force_offset: body_start,
            brute_force_exhausted: false,
            in_progress: Vec::new(),
        };
        dp.trailer = dp.parse_trailer()?;
        Ok(dp)
    }

    pub fn set_security_handler(&mut self, handler: SecurityHandler) {
        self.security = Some(handler);
    }

    pub fn security_handler(&self) -> Option<&SecurityHandler> {
        self.security.as_ref()
    }

    // --- trailer & xref chain ---

    fn parse_trailer(&mut self) -> Result<Trailer> {
        let xref_offset = self.xref_offset()?;
        self.parser.buffer.reset(xref_offset as i64)?;
        if self.parser.current() == Some(b'x') {
            // classical cross-reference table(s)
            let mut xrefs = vec![self.direct_xref()?];
            self.parser.maybe_spaces_or_comments();
            let params = self.trailer_dict()?;
            let mut prev = params.get_i64("Prev");
            while let Some(offset) = prev {
                self.parser.buffer.reset(offset)?;
                xrefs.push(self.direct_xref()?);
                self.parser.maybe_spaces_or_comments();
                let older = self.trailer_dict()?;
                prev = older.get_i64("Prev");
            }
            Ok(Trailer { xrefs, params })
        } else {
            // xref stream chain
            let mut xrefs = Vec::new();
            let mut params = Dictionary::new();
            let mut next = Some(xref_offset as i64);
            while let Some(offset) = next {
                self.parser.buffer.reset(offset)?;
                let obj = self.parse_indirect_object(false).map_err(Error::Parse)?;
                let stream = match &obj.value {
                    Object::Stream(s) if s.type_name() == Some("XRef") => s,
                    _ => {
                        return Err(Error::Parse(ParseError::new(
                            ParseErrorKind::UnexpectedToken,
                            offset as u64,
                            "xref stream expected",
                        )))
                    }
                };
                if params.is_empty() {
                    for key in ["Size", "Prev", "Root", "Encrypt", "Info", "ID"] {
                        if let Some(v) = stream.dict.get(key) {
                            params.set(key, v.clone());
                        }
                    }
                }
                next = stream.dict.get_i64("Prev");
                xrefs.push(XRef::from_stream(stream)?);
            }
            Ok(Trailer { xrefs, params })
        }
    }

    fn trailer_dict(&mut self) -> Result<Dictionary> {
        let token = self.read_token(7)?;
        if token != b"trailer" {
            return Err(self.syntax_error("trailer expected"));
        }
        self.parser.maybe_spaces_or_comments();
        self.parser.dictionary().map_err(Error::Parse)
    }

    fn direct_xref(&mut self) -> Result<XRef> {
        let token = self.read_token(4)?;
        if token != b"xref" {
            return Err(self.syntax_error("xref expected"));
        }
        self.parser.maybe_spaces_or_comments();
        let mut xref = XRef::new();
        while self.parser.is_digit() {
            let (first, count) = self.xref_range()?;
            self.parser.eol().map_err(Error::Parse)?;
            for i in 0..count {
                let (offset, gen, flag) = self.xref_entry()?;
                let number = (first + i) as u32;
                let entry = if flag == b'n' {
                    XRefEntry::InUse { number, generation: gen, offset }
                } else {
                    XRefEntry::Free { number, generation: gen }
                };
                xref.add_entry(entry);
            }
        }
        Ok(xref)
    }

    /// `first count` introducing one xref subsection.
    fn xref_range(&mut self) -> Result<(i64, i64)> {
        let first = self.parser.non_negative_int().map_err(Error::Parse)?;
        self.parser.maybe_spaces();
        let count = self.parser.non_negative_int().map_err(Error::Parse)?;
        Ok((first, count))
    }

    /// One fixed-width 20-byte entry: `nnnnnnnnnn ggggg n\r\n`.
    fn xref_entry(&mut self) -> Result<(u64, u16, u8)> {
        let data = self.read_token(20)?;
        let text = crate::object::latin1_to_string(&data);
        let mut fields = text.split_ascii_whitespace();
        let parsed = (|| {
            let offset: u64 = fields.next()?.parse().ok()?;
            let gen: u16 = fields.next()?.parse().ok()?;
            let flag = fields.next()?.bytes().next()?;
            matches!(flag, b'n' | b'f').then_some((offset, gen, flag))
        })();
        parsed.ok_or_else(|| self.syntax_error(format!("wrong xref entry: {:?}", text)))
    }

    // --- header / startxref discovery ---

    /// Positions the cursor right before the last `%%EOF` within the final
    /// KiB, then scans further backward for `startxref` and reads the xref
    /// byte offset that follows it.
    fn xref_offset(&mut self) -> Result<u64> {
        self.seek_eof()?;
        let token = b"startxref";
        if !self.scan_backward(token, None)? {
            return Err(self.syntax_error("startxref not found"));
        }
        // cursor sits one byte before the keyword
        self.parser.buffer.read(token.len() + 1);
        self.parser.maybe_spaces_or_comments();
        let offset = self.parser.non_negative_int().map_err(Error::Parse)?;
        Ok(offset as u64)
    }

    fn seek_eof(&mut self) -> Result<()> {
        self.parser.buffer.reset(-1024)?;
        if !self.scan_backward(b"%%EOF", Some(1024))? {
            return Err(self.syntax_error("%%EOF not found"));
        }
        Ok(())
    }

    /// Walks backward until the bytes under the cursor spell `token`.
    fn scan_backward(&mut self, token: &[u8], limit: Option<usize>) -> Result<bool> {
        let mut window = std::collections::VecDeque::with_capacity(token.len());
        for _ in 0..token.len() {
            match self.parser.buffer.prev() {
                Some(b) => window.push_front(b),
                None => return Ok(false),
            }
        }
        let mut n_read = window.len();
        loop {
            if window.iter().copied().eq(token.iter().copied()) {
                return Ok(true);
            }
            if limit.is_some_and(|l| n_read >= l) {
                return Ok(false);
            }
            match self.parser.buffer.prev() {
                Some(b) => {
                    window.pop_back();
                    window.push_front(b);
                    n_read += 1;
                }
                None => return Ok(false),
            }
        }
    }

    // --- object location ---

    /// Resolves `(num, gen)` to its value, materializing it on first use.
    /// A key absent everywhere resolves to Null, cached.
    pub fn locate_object(&mut self, num: u32, gen: u16) -> Object {
        if let Some(obj) = self.registry.get(num, gen) {
            return obj.clone();
        }
        if let Some(obj) = self.locate_object_by_xref(num, gen) {
            return obj;
        }
        if gen == 0 {
            if let Some(obj) = self.locate_compressed_object(num) {
                return obj;
            }
        }
        if let Some(obj) = self.brute_force_locate(num, gen) {
            return obj;
        }
        log::warn!("object ({}, {}) not found, resolving to null", num, gen);
        self.registry.register(num, gen, Object::Null, false);
        Object::Null
    }

    fn locate_object_by_xref(&mut self, num: u32, gen: u16) -> Option<Object> {
        let offsets: Vec<u64> = self
            .trailer
            .xrefs
            .iter()
            .filter_map(|xref| match xref.in_use.get(&num) {
                Some(XRefEntry::InUse { generation, offset, .. }) if *generation == gen => {
                    Some(*offset)
                }
                _ => None,
            })
            .collect();
        for offset in offsets {
            match self.parse_indirect_object_at(offset) {
                Ok(obj) if obj.num == num && obj.gen == gen => return Some(obj.value),
                Ok(obj) => log::warn!(
                    "xref offset {} holds ({}, {}), expected ({}, {})",
                    offset, obj.num, obj.gen, num, gen
                ),
                Err(e) => log::warn!("cannot parse object ({}, {}) at {}: {}", num, gen, offset, e),
            }
        }
        None
    }

    /// A compressed entry names the `ObjStm` holding the object; locating
    /// the container registers all of its contents as a side effect.
    fn locate_compressed_object(&mut self, num: u32) -> Option<Object> {
        let containers: Vec<u32> = self
            .trailer
            .xrefs
            .iter()
            .filter_map(|xref| match xref.compressed.get(&num) {
                Some(XRefEntry::Compressed { container, .. }) => Some(*container),
                _ => None,
            })
            .collect();
        for container in containers {
            if self.in_progress.contains(&(container, 0)) {
                continue;
            }
            let stream = self.locate_object(container, 0);
            if !matches!(stream, Object::Stream(_)) {
                log::warn!("ObjStm container {} is a {}", container, stream.type_name());
                continue;
            }
            if let Some(obj) = self.registry.get(num, 0) {
                return Some(obj.clone());
            }
        }
        None
    }

    /// Sequential scan of the body, registering every indirect object (and
    /// stepping over `startxref` / `trailer` / `xref` pseudo-elements) until
    /// the wanted key shows up or the body ends. Syntax errors advance the
    /// scan cursor by one byte.
    fn brute_force_locate(&mut self, num: u32, gen: u16) -> Option<Object> {
        if self.in_progress.contains(&(num, gen)) {
            return None;
        }
        self.in_progress.push((num, gen));
        let result = self.brute_force_scan(num, gen);
        self.in_progress.pop();
        result
    }

    fn brute_force_scan(&mut self, num: u32, gen: u16) -> Option<Object> {
        let state = self.parser.get_state();
        let result = loop {
            if let Some(obj) = self.registry.get(num, gen) {
                break Some(obj.clone());
            }
            if self.brute_force_exhausted {
                break None;
            }
            let offset = self.brute_force_offset;
            if self.parser.buffer.reset(offset as i64).is_err() {
                self.brute_force_exhausted = true;
                break None;
            }
            self.parser.maybe_spaces_or_comments();
            match self.parser.current() {
                None => {
                    self.brute_force_exhausted = true;
                    break None;
                }
                Some(b'0'..=b'9') => match self.parse_indirect_object(false) {
                    Ok(_) => self.brute_force_offset = self.parser.buffer.position(),
                    Err(_) => self.brute_force_offset = offset + 1,
                },
                Some(b's') => {
                    // startxref N
                    let ok = self.read_token(9).map(|t| t == b"startxref").unwrap_or(false)
                        && {
                            self.parser.maybe_spaces_or_comments();
                            self.parser.non_negative_int().is_ok()
                        };
                    self.brute_force_offset =
                        if ok { self.parser.buffer.position() } else { offset + 1 };
                }
                Some(b't') => {
                    let ok = self.read_token(7).map(|t| t == b"trailer").unwrap_or(false) && {
                        self.parser.maybe_spaces_or_comments();
                        self.parser.dictionary().is_ok()
                    };
                    self.brute_force_offset =
                        if ok { self.parser.buffer.position() } else { offset + 1 };
                }
                Some(b'x') => match self.direct_xref() {
                    Ok(_) => self.brute_force_offset = self.parser.buffer.position(),
                    Err(_) => self.brute_force_offset = offset + 1,
                },
                Some(_) => self.brute_force_offset = offset + 1,
            }
        };
        self.parser.set_state(state);
        result
    }

    fn parse_indirect_object_at(&mut self, offset: u64) -> std::result::Result<IndirectObject, ParseError> {
        let state = self.parser.get_state();
        if self.parser.buffer.reset(offset as i64).is_err() {
            return Err(ParseError::new(ParseErrorKind::EndOfInput, offset, "seek failed"));
        }
        let result = self.parse_indirect_object(true);
        self.parser.set_state(state);
        result
    }

    /// Parses `N G obj ... endobj` at the cursor, settles an indirect
    /// `/Length` if the stream declared one, decrypts, and registers the
    /// result. `force` lets the xref-driven path overwrite a stale cache
    /// entry.
    fn parse_indirect_object(&mut self, force: bool) -> std::result::Result<IndirectObject, ParseError> {
        self.parser.pending_stream_length = None;
        let (mut obj, _begin, _end) = self.parser.indirect_object()?;
        if let Some(pending) = self.parser.pending_stream_length.take() {
            self.settle_stream_length(&mut obj, pending);
        }
        if let Some(handler) = &self.security {
            handler.decrypt_object(obj.num, obj.gen, &mut obj.value);
        }
        self.registry.register(obj.num, obj.gen, obj.value.clone(), force);
        Ok(obj)
    }

    /// A stream's `/Length` pointed at another object (which may well sit
    /// after the stream). The payload was read by `endstream` scan; resolve
    /// the reference with saved state and cut or re-read the payload to the
    /// real length.
    fn settle_stream_length(&mut self, obj: &mut IndirectObject, pending: PendingStreamLength) {
        let (lnum, lgen) = pending.length_ref;
        let state = self.parser.get_state();
        let length = if self.in_progress.contains(&pending.length_ref) {
            None
        } else {
            // guard against a /Length that leads back into this object
            self.in_progress.push(pending.length_ref);
            let value = self.locate_object(lnum, lgen).as_i64();
            self.in_progress.pop();
            value
        };
        self.parser.set_state(state);

        let stream = match &mut obj.value {
            Object::Stream(s) => s,
            _ => return,
        };
        match length {
            Some(n) if n >= 0 => {
                let n = n as usize;
                if n <= stream.data.len() {
                    let mut data = stream.data.clone();
                    data.truncate(n);
                    stream.set_data(data);
                } else {
                    // the scan stopped at an `endstream` inside the payload
                    let state = self.parser.get_state();
                    if self.parser.buffer.reset(pending.payload_start as i64).is_ok() {
                        if let Some(data) = self.parser.buffer.read(n) {
                            stream.set_data(data);
                        }
                    }
                    self.parser.set_state(state);
                }
            }
            _ => log::warn!(
                "stream /Length {} {} R did not resolve to an integer, keeping scanned payload",
                lnum, lgen
            ),
        }
    }

    // --- small helpers ---

    fn read_token(&mut self, n: usize) -> Result<Vec<u8>> {
        self.parser.buffer.read(n).ok_or_else(|| {
            Error::Parse(ParseError::new(
                ParseErrorKind::EndOfInput,
                self.parser.buffer.position(),
                format!("expected {} more bytes", n),
            ))
        })
    }

    fn syntax_error(&mut self, message: impl Into<String>) -> Error {
        Error::Parse(ParseError::new(
            ParseErrorKind::UnexpectedToken,
            self.parser.buffer.position(),
            message,
        ))
    }
}

/// Scans the first KiB for `%PDF-M.m` or `%IPS-Adobe-N.n PDF-M.m`.
fn parse_header(parser: &mut BasicParser) -> Result<Header> {
    parser.buffer.reset(0)?;
    let mut window = Vec::with_capacity(1024);
    for _ in 0..1024 {
        match parser.buffer.next() {
            Some(b) => window.push(b),
            None => break,
        }
    }

    let not_found = || {
        Error::Parse(ParseError::new(
            ParseErrorKind::UnexpectedToken,
            0,
            "no PDF header found",
        ))
    };

    let (offset, version) = find_header(&window).ok_or_else(not_found)?;
    let major = version[0] - b'0';
    let minor = version[2] - b'0';
    Ok(Header {
        version: crate::object::latin1_to_string(&version),
        major,
        minor,
        offset: offset as u64,
    })
}

fn find_header(window: &[u8]) -> Option<(usize, [u8; 3])> {
    let version_at = |at: usize| -> Option<[u8; 3]> {
        let v = window.get(at..at + 3)?;
        (v[0].is_ascii_digit() && v[1] == b'.' && v[2].is_ascii_digit())
            .then(|| [v[0], v[1], v[2]])
    };

    for i in 0..window.len() {
        if window[i..].starts_with(b"%PDF-") {
            if let Some(v) = version_at(i + 5) {
                return Some((i, v));
            }
        }
        if window[i..].starts_with(b"%IPS-Adobe-") {
            // %IPS-Adobe-N.n PDF-M.m
            if version_at(i + 11).is_some()
                && window.get(i + 14..).is_some_and(|w| w.starts_with(b" PDF-"))
            {
                if let Some(v) = version_at(i + 19) {
                    return Some((i, v));
                }
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parser_over(bytes: &[u8]) -> BasicParser {
        BasicParser::from_bytes(bytes.to_vec())
    }

    #[test]
    fn header_variants() {
        let h = parse_header(&mut parser_over(b"%PDF-1.6\nblablabla")).unwrap();
        assert_eq!((h.major, h.minor, h.offset), (1, 6, 0));
        assert_eq!(h.version, "1.6");

        let h = parse_header(&mut parser_over(b"%IPS-Adobe-1.3 PDF-1.6\nblablabla")).unwrap();
        assert_eq!((h.major, h.minor, h.offset), (1, 6, 0));

        let h = parse_header(&mut parser_over(b"%some custom heading\n%PDF-1.5\nbla")).unwrap();
        assert_eq!((h.major, h.minor, h.offset), (1, 5, 21));

        let h =
            parse_header(&mut parser_over(b"%some custom heading\n%IPS-Adobe-1.3 PDF-1.6\nbla"))
                .unwrap();
        assert_eq!((h.major, h.minor, h.offset), (1, 6, 21));
    }

    #[test]
    fn header_must_sit_in_first_kib() {
        let mut padded = vec![b' '; 1020];
        padded.extend_from_slice(b"\n%PDF-1.5\nblablabla");
        assert!(parse_header(&mut parser_over(&padded)).is_err());
        assert!(parse_header(&mut parser_over(&b"\nblablabla".repeat(100))).is_err());
    }

    fn doc_parser(bytes: &[u8]) -> DocumentParser {
        DocumentParser::new(Buffer::from_bytes(bytes.to_vec(), 0)).unwrap()
    }

    #[test]
    fn classical_document_with_trailer() {
        let doc = build_classical_doc();
        let mut dp = doc_parser(&doc);
        assert_eq!(dp.header.version, "1.4");
        assert_eq!(dp.trailer.xrefs.len(), 1);
        assert_eq!(dp.trailer.size(), Some(3));
        let root_ref = dp.trailer.root().and_then(Object::as_reference).unwrap();
        let root = dp.locate_object(root_ref.0, root_ref.1);
        assert_eq!(root.as_dict().unwrap().type_name(), Some("Catalog"));
        // second lookup is served by the registry
        let again = dp.locate_object(root_ref.0, root_ref.1);
        assert_eq!(root, again);
    }

    #[test]
    fn missing_object_resolves_to_null_once() {
        let doc = build_classical_doc();
        let mut dp = doc_parser(&doc);
        assert_eq!(dp.locate_object(900, 0), Object::Null);
        assert!(dp.registry.is_registered(900, 0));
        assert_eq!(dp.locate_object(900, 0), Object::Null);
    }

    #[test]
    fn object_missing_from_xref_is_brute_forced() {
        // object 7 exists in the body but no xref entry covers it
        let doc = build_classical_doc();
        let mut dp = doc_parser(&doc);
        assert_eq!(dp.locate_object(7, 0), Object::String(b"hidden".to_vec()));
    }

    /// Minimal but complete classical PDF: header, two referenced objects,
    /// one unreferenced object (7), xref, trailer. Offsets are computed.
    pub(crate) fn build_classical_doc() -> Vec<u8> {
        let mut out = Vec::new();
        out.extend_from_slice(b"%PDF-1.4\n");
        let off1 = out.len();
        out.extend_from_slice(b"1 0 obj\n<< /Type /Catalog /Pages 2 0 R >>\nendobj\n");
        let off2 = out.len();
        out.extend_from_slice(b"2 0 obj\n<< /Type /Pages /Kids [] /Count 0 >>\nendobj\n");
        out.extend_from_slice(b"7 0 obj\n(hidden)\nendobj\n");
        let startxref = out.len();
        out.extend_from_slice(b"xref\n0 3\n");
        out.extend_from_slice(b"0000000000 65535 f\r\n");
        out.extend_from_slice(format!("{:010} 00000 n\r\n", off1).as_bytes());
        out.extend_from_slice(format!("{:010} 00000 n\r\n", off2).as_bytes());
        out.extend_from_slice(b"trailer\n<< /Size 3 /Root 1 0 R >>\n");
        out.extend_from_slice(format!("startxref\n{}\n%%EOF", startxref).as_bytes());
        out
    }
}
