//! cmap.rs
//!
//! CMap resources: the PostScript subset used by `ToUnicode` streams and
//! predefined CMaps. The parser is a token-level skip-scan — every section
//! is located by hunting for its opening keyword, so declarations may come
//! in any order and unrecognized PostScript is simply stepped over. No
//! general PostScript execution happens here.

use crate::buffer::BufferState;
use crate::codecs::glyph_name_to_unicode;
use crate::error::{ParseError, ParseErrorKind};
use crate::object::{to_hex, Object};
use crate::parser::{BasicParser, ParseResult};

/// `begincodespacerange` entry: which byte patterns of this length are
/// valid codes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodespaceRange {
    pub begin: u32,
    pub end: u32,
    pub nbytes: usize,
}

impl CodespaceRange {
    pub fn contains(&self, code: u32, nbytes: usize) -> bool {
        self.nbytes == nbytes && self.begin <= code && code <= self.end
    }
}

/// `begincidrange` / `beginnotdefrange` entry: codes map onto a run of
/// integers starting at `map_to`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapRange {
    pub begin: u32,
    pub end: u32,
    pub nbytes: usize,
    pub map_to: u32,
}

impl MapRange {
    pub fn get(&self, code: u32) -> Option<u32> {
        (self.begin <= code && code <= self.end).then(|| self.map_to + (code - self.begin))
    }
}

/// Destination of a bf mapping: Unicode text (UTF-16 code units in the
/// source) or a glyph name to resolve through the glyph lists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BfTarget {
    Text(String),
    GlyphName(String),
}

/// One `beginbfrange`/`beginbfchar` entry.
#[derive(Debug, Clone, PartialEq)]
pub enum BfEntry {
    /// `<lo> <hi> <dst>` — the last UTF-16 unit of `dst` increments across
    /// the range
    Range { begin: u32, end: u32, nbytes: usize, dst: Vec<u16> },
    /// `<src> dst` — a single code
    Char { code: u32, nbytes: usize, target: BfTarget },
}

/// Parsed CMap: codespace, CID, notdef and bf range collections.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CMap {
    pub name: Option<String>,
    pub codespace_ranges: Vec<CodespaceRange>,
    pub cid_ranges: Vec<MapRange>,
    pub notdef_ranges: Vec<MapRange>,
    pub bf_ranges: Vec<BfEntry>,
}

impl CMap {
    /// Identity mapping over two-byte codes, the shape of `Identity-H`
    /// and `Identity-V`.
    pub fn identity(name: &str) -> Self {
        CMap {
            name: Some(name.to_string()),
            codespace_ranges: vec![CodespaceRange { begin: 0, end: 0xffff, nbytes: 2 }],
            cid_ranges: vec![MapRange { begin: 0, end: 0xffff, nbytes: 2, map_to: 0 }],
            notdef_ranges: Vec::new(),
            bf_ranges: Vec::new(),
        }
    }

    pub fn in_codespace(&self, code: u32, nbytes: usize) -> bool {
        self.codespace_ranges.iter().any(|r| r.contains(code, nbytes))
    }

    pub fn cid(&self, code: u32) -> Option<u32> {
        self.cid_ranges.iter().find_map(|r| r.get(code))
    }

    pub fn notdef(&self, code: u32) -> Option<u32> {
        self.notdef_ranges.iter().find_map(|r| r.get(code))
    }

    /// Looks a code up in the bf mappings. The key is the canonical
    /// uppercase hex text of the code, so `<01>` and `<0001>` stay
    /// distinct. `None` means the caller falls back to the byte-level
    /// encoding decoder.
    pub fn bf_lookup(&self, code_hex: &str) -> Option<String> {
        if code_hex.is_empty() || code_hex.len() % 2 != 0 {
            return None;
        }
        let nbytes = code_hex.len() / 2;
        let code = u32::from_str_radix(code_hex, 16).ok()?;
        for entry in &self.bf_ranges {
            match entry {
                BfEntry::Char { code: c, nbytes: n, target } if *c == code && *n == nbytes => {
                    return Some(match target {
                        BfTarget::Text(text) => text.clone(),
                        BfTarget::GlyphName(name) => glyph_name_to_unicode(name, false),
                    });
                }
                BfEntry::Range { begin, end, nbytes: n, dst }
                    if *n == nbytes && *begin <= code && code <= *end =>
                {
                    let mut units = dst.clone();
                    if let Some(last) = units.last_mut() {
                        *last = last.wrapping_add((code - *begin) as u16);
                    }
                    return Some(String::from_utf16_lossy(&units));
                }
                _ => {}
            }
        }
        None
    }
}

/// UTF-16 code units of a bf destination hex string. A stray odd byte is
/// promoted to its own unit.
fn utf16_units(bytes: &[u8]) -> Vec<u16> {
    let mut units: Vec<u16> = bytes
        .chunks(2)
        .map(|c| if c.len() == 2 { u16::from_be_bytes([c[0], c[1]]) } else { c[0] as u16 })
        .collect();
    if units.is_empty() {
        units.push(0);
    }
    units
}

fn hex_value(bytes: &[u8]) -> u32 {
    bytes.iter().fold(0u32, |acc, &b| acc << 8 | b as u32)
}

pub struct CMapParser {
    parser: BasicParser,
}

impl CMapParser {
    pub fn new(data: Vec<u8>) -> Self {
        let mut parser = BasicParser::from_bytes(data);
        parser.indirect_references_allowed = false;
        CMapParser { parser }
    }

    fn err<T>(&mut self, message: impl Into<String>) -> ParseResult<T> {
        Err(ParseError::new(
            ParseErrorKind::UnexpectedToken,
            self.parser.buffer.position(),
            message,
        ))
    }

    /// Native object where one parses, bare token otherwise.
    fn object_or_token(&mut self) -> ParseResult<ObjectOrToken> {
        let state = self.parser.get_state();
        match self.parser.object() {
            Ok(obj) => Ok(ObjectOrToken::Object(obj)),
            Err(_) => {
                self.parser.set_state(state);
                Ok(ObjectOrToken::Token(self.parser.token()?))
            }
        }
    }

    /// Scans forward until `name` comes up as a token, leaving the cursor
    /// at its first byte.
    fn skip_until_token(&mut self, name: &str) -> bool {
        loop {
            self.parser.maybe_spaces_or_comments();
            if self.parser.current().is_none() {
                return false;
            }
            let state = self.parser.get_state();
            match self.object_or_token() {
                Ok(ObjectOrToken::Token(t)) if t == name => {
                    self.parser.set_state(state);
                    return true;
                }
                Ok(_) => {}
                Err(_) => {
                    // something neither object nor token: step over a byte
                    self.parser.buffer.next();
                }
            }
        }
    }

    fn skip_until_name(&mut self, name: &str) -> bool {
        loop {
            self.parser.maybe_spaces_or_comments();
            if self.parser.current().is_none() {
                return false;
            }
            let state = self.parser.get_state();
            match self.object_or_token() {
                Ok(ObjectOrToken::Object(Object::Name(n))) if n == name => {
                    self.parser.set_state(state);
                    return true;
                }
                Ok(_) => {}
                Err(_) => {
                    self.parser.buffer.next();
                }
            }
        }
    }

    fn expected_token(&mut self, name: &str) -> ParseResult<()> {
        self.parser.maybe_spaces_or_comments();
        let token = self.parser.token()?;
        if token != name {
            return self.err(format!("{} expected, got {}", name, token));
        }
        Ok(())
    }

    /// Parses the whole resource. `/CMapName` is extracted when present;
    /// its absence is tolerated.
    pub fn cmap(&mut self) -> ParseResult<CMap> {
        if !self.skip_until_token("begincmap") {
            return self.err("begincmap not found");
        }
        self.expected_token("begincmap")?;
        let start: BufferState = self.parser.get_state();

        let name = if self.skip_until_name("CMapName") {
            // /CMapName /Some-Name def
            let _ = self.parser.name();
            self.parser.maybe_spaces_or_comments();
            self.parser.name().ok()
        } else {
            log::debug!("missing /CMapName");
            None
        };

        self.parser.set_state(start.clone());
        let mut codespace_ranges = Vec::new();
        while self.skip_until_token("begincodespacerange") {
            self.codespace_section(&mut codespace_ranges)?;
        }

        let mut cid_ranges = Vec::new();
        self.parser.set_state(start.clone());
        while self.skip_until_token("begincidrange") {
            self.mapped_range_section("cid", &mut cid_ranges)?;
        }
        self.parser.set_state(start.clone());
        while self.skip_until_token("begincidchar") {
            self.mapped_char_section("cid", &mut cid_ranges)?;
        }

        let mut notdef_ranges = Vec::new();
        self.parser.set_state(start.clone());
        while self.skip_until_token("beginnotdefrange") {
            self.mapped_range_section("notdef", &mut notdef_ranges)?;
        }
        self.parser.set_state(start.clone());
        while self.skip_until_token("beginnotdefchar") {
            self.mapped_char_section("notdef", &mut notdef_ranges)?;
        }

        let mut bf_ranges = Vec::new();
        self.parser.set_state(start.clone());
        while self.skip_until_token("beginbfrange") {
            self.bf_range_section(&mut bf_ranges)?;
        }
        self.parser.set_state(start);
        while self.skip_until_token("beginbfchar") {
            self.bf_char_section(&mut bf_ranges)?;
        }

        Ok(CMap { name, codespace_ranges, cid_ranges, notdef_ranges, bf_ranges })
    }

    fn hexstring_bytes(&mut self) -> ParseResult<Vec<u8>> {
        match self.parser.hexstring()? {
            Object::HexString(bytes) => Ok(bytes),
            _ => unreachable!(),
        }
    }

    fn codespace_section(&mut self, out: &mut Vec<CodespaceRange>) -> ParseResult<()> {
        self.expected_token("begincodespacerange")?;
        self.parser.maybe_spaces_or_comments();
        while self.parser.current() == Some(b'<') {
            let lo = self.hexstring_bytes()?;
            self.parser.maybe_spaces_or_comments();
            let hi = self.hexstring_bytes()?;
            self.parser.maybe_spaces_or_comments();
            out.push(CodespaceRange {
                begin: hex_value(&lo),
                end: hex_value(&hi),
                nbytes: lo.len(),
            });
        }
        self.expected_token("endcodespacerange")
    }

    /// `<lo> <hi> dst` triples; dst may be an integer, a hex string, or an
    /// array giving one destination per code.
    fn mapped_range_section(&mut self, kind: &str, out: &mut Vec<MapRange>) -> ParseResult<()> {
        self.expected_token(&format!("begin{}range", kind))?;
        self.parser.maybe_spaces_or_comments();
        while self.parser.current() == Some(b'<') {
            let lo = self.hexstring_bytes()?;
            self.parser.maybe_spaces_or_comments();
            let hi = self.hexstring_bytes()?;
            self.parser.maybe_spaces_or_comments();
            let begin = hex_value(&lo);
            let end = hex_value(&hi);
            let nbytes = lo.len();
            match self.parser.object()? {
                Object::Integer(dst) => {
                    out.push(MapRange { begin, end, nbytes, map_to: dst as u32 })
                }
                Object::HexString(dst) => {
                    out.push(MapRange { begin, end, nbytes, map_to: hex_value(&dst) })
                }
                Object::Array(items) => {
                    for (i, item) in items.iter().enumerate() {
                        let dst = match item {
                            Object::Integer(v) => *v as u32,
                            Object::HexString(bytes) => hex_value(bytes),
                            _ => continue,
                        };
                        let code = begin + i as u32;
                        if code > end {
                            break;
                        }
                        out.push(MapRange { begin: code, end: code, nbytes, map_to: dst });
                    }
                }
                other => {
                    return self.err(format!(
                        "int, hexstring or array expected, got {}",
                        other.type_name()
                    ))
                }
            }
            self.parser.maybe_spaces_or_comments();
        }
        self.expected_token(&format!("end{}range", kind))
    }

    fn mapped_char_section(&mut self, kind: &str, out: &mut Vec<MapRange>) -> ParseResult<()> {
        self.expected_token(&format!("begin{}char", kind))?;
        self.parser.maybe_spaces_or_comments();
        while self.parser.current() == Some(b'<') {
            let src = self.hexstring_bytes()?;
            self.parser.maybe_spaces_or_comments();
            let dst = match self.parser.object()? {
                Object::Integer(v) => v as u32,
                Object::HexString(bytes) => hex_value(&bytes),
                other => {
                    return self.err(format!("int or hexstring expected, got {}", other.type_name()))
                }
            };
            self.parser.maybe_spaces_or_comments();
            let code = hex_value(&src);
            out.push(MapRange { begin: code, end: code, nbytes: src.len(), map_to: dst });
        }
        self.expected_token(&format!("end{}char", kind))
    }

    /// `<lo> <hi> <dst-hex>` or `<lo> <hi> [<dst1> <dst2> ...]`; array
    /// elements may also be glyph names.
    fn bf_range_section(&mut self, out: &mut Vec<BfEntry>) -> ParseResult<()> {
        self.expected_token("beginbfrange")?;
        self.parser.maybe_spaces_or_comments();
        while self.parser.current() == Some(b'<') {
            let lo = self.hexstring_bytes()?;
            self.parser.maybe_spaces_or_comments();
            let hi = self.hexstring_bytes()?;
            self.parser.maybe_spaces_or_comments();
            let begin = hex_value(&lo);
            let end = hex_value(&hi);
            let nbytes = lo.len();
            match self.parser.object()? {
                Object::HexString(dst) => out.push(BfEntry::Range {
                    begin,
                    end,
                    nbytes,
                    dst: utf16_units(&dst),
                }),
                Object::Array(items) => {
                    for (i, item) in items.iter().enumerate() {
                        let code = begin + i as u32;
                        if code > end {
                            break;
                        }
                        let target = match item {
                            Object::HexString(bytes) => {
                                BfTarget::Text(String::from_utf16_lossy(&utf16_units(bytes)))
                            }
                            Object::Name(name) => BfTarget::GlyphName(name.clone()),
                            _ => continue,
                        };
                        out.push(BfEntry::Char { code, nbytes, target });
                    }
                }
                other => {
                    return self.err(format!(
                        "hexstring or array expected, got {}",
                        other.type_name()
                    ))
                }
            }
            self.parser.maybe_spaces_or_comments();
        }
        self.expected_token("endbfrange")
    }

    /// `<src> <dst>` pairs; dst is UTF-16 hex or a slash-prefixed glyph
    /// name.
    fn bf_char_section(&mut self, out: &mut Vec<BfEntry>) -> ParseResult<()> {
        self.expected_token("beginbfchar")?;
        self.parser.maybe_spaces_or_comments();
        while self.parser.current() == Some(b'<') {
            let src = self.hexstring_bytes()?;
            self.parser.maybe_spaces_or_comments();
            let target = match self.parser.object()? {
                Object::HexString(bytes) => {
                    BfTarget::Text(String::from_utf16_lossy(&utf16_units(&bytes)))
                }
                Object::Name(name) => BfTarget::GlyphName(name.clone()),
                other => {
                    return self.err(format!(
                        "hexstring or name expected, got {}",
                        other.type_name()
                    ))
                }
            };
            self.parser.maybe_spaces_or_comments();
            out.push(BfEntry::Char {
                code: hex_value(&src),
                nbytes: src.len(),
                target,
            });
        }
        self.expected_token("endbfchar")
    }
}

enum ObjectOrToken {
    Object(Object),
    Token(String),
}

/// Canonical uppercase hex key for a code, the form [`CMap::bf_lookup`]
/// takes.
pub fn code_key(bytes: &[u8]) -> String {
    to_hex(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
/CIDInit /ProcSet findresource begin
12 dict begin
begincmap
/CIDSystemInfo << /Registry (Adobe) /Ordering (UCS) /Supplement 0 >> def
/CMapName /Adobe-Identity-UCS def
/CMapType 2 def
1 begincodespacerange
<0000> <FFFF>
endcodespacerange
2 beginbfrange
<0000> <005E> <0020>
<005F> <0061> [<00660066> <00660069> <00660066006C>]
endbfrange
1 beginbfchar
<3A51> <D840DC3E>
endbfchar
endcmap
CMapName currentdict /CMap defineresource pop
end
end
"#;

    #[test]
    fn parses_tounicode_sample() {
        let cmap = CMapParser::new(SAMPLE.as_bytes().to_vec()).cmap().unwrap();
        assert_eq!(cmap.name.as_deref(), Some("Adobe-Identity-UCS"));
        assert_eq!(cmap.codespace_ranges.len(), 1);
        assert!(cmap.in_codespace(0x1234, 2));
        assert!(!cmap.in_codespace(0x12, 1));

        // range with incrementing destination
        assert_eq!(cmap.bf_lookup("0000").as_deref(), Some(" "));
        assert_eq!(cmap.bf_lookup("001B").as_deref(), Some(";"));
        // array destinations, including a multi-unit ligature
        assert_eq!(cmap.bf_lookup("005F").as_deref(), Some("ff"));
        assert_eq!(cmap.bf_lookup("0061").as_deref(), Some("ffl"));
        // bfchar with a surrogate pair
        assert_eq!(cmap.bf_lookup("3A51").as_deref(), Some("\u{2003e}"));
        // unknown codes fall through
        assert_eq!(cmap.bf_lookup("4242"), None);
    }

    #[test]
    fn missing_cmap_name_is_tolerated() {
        let src = r#"
begincmap
1 begincodespacerange
<00> <80>
endcodespacerange
1 beginbfchar
<01> <0048>
endbfchar
endcmap
"#;
        let cmap = CMapParser::new(src.as_bytes().to_vec()).cmap().unwrap();
        assert_eq!(cmap.name, None);
        assert_eq!(cmap.bf_lookup("01").as_deref(), Some("H"));
        // key length matters: <0001> is a different code than <01>
        assert_eq!(cmap.bf_lookup("0001"), None);
    }

    #[test]
    fn cid_ranges_and_chars() {
        let src = r#"
begincmap
3 begincodespacerange
<00> <80>
<8140> <9ffc>
<a0> <df>
endcodespacerange
2 begincidrange
<20> <7e> 1
<8140> <817e> 633
endcidrange
1 begincidchar
<a5> 902
endcidchar
1 beginnotdefrange
<00> <1f> 1
endnotdefrange
endcmap
"#;
        let cmap = CMapParser::new(src.as_bytes().to_vec()).cmap().unwrap();
        assert_eq!(cmap.codespace_ranges.len(), 3);
        assert!(cmap.in_codespace(0x8141, 2));
        assert_eq!(cmap.cid(0x20), Some(1));
        assert_eq!(cmap.cid(0x21), Some(2));
        assert_eq!(cmap.cid(0x8141), Some(634));
        assert_eq!(cmap.cid(0xa5), Some(902));
        assert_eq!(cmap.cid(0x1f), None);
        assert_eq!(cmap.notdef(0x1f), Some(32));
    }

    #[test]
    fn bfchar_with_glyph_name() {
        let src = r#"
begincmap
1 beginbfchar
<01> /copyright
endbfchar
endcmap
"#;
        let cmap = CMapParser::new(src.as_bytes().to_vec()).cmap().unwrap();
        assert_eq!(cmap.bf_lookup("01").as_deref(), Some("©"));
    }

    #[test]
    fn out_of_order_sections_are_found() {
        // bf section before the codespace section
        let src = r#"
begincmap
1 beginbfchar
<02> <0055>
endbfchar
1 begincodespacerange
<00> <FF>
endcodespacerange
endcmap
"#;
        let cmap = CMapParser::new(src.as_bytes().to_vec()).cmap().unwrap();
        assert_eq!(cmap.codespace_ranges.len(), 1);
        assert_eq!(cmap.bf_lookup("02").as_deref(), Some("U"));
    }

    #[test]
    fn identity_cmap_shape() {
        let cmap = CMap::identity("Identity-H");
        assert!(cmap.in_codespace(0x0041, 2));
        assert_eq!(cmap.cid(0x1234), Some(0x1234));
        assert_eq!(cmap.bf_lookup("0041"), None);
    }
}
