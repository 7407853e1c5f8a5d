//! decoder.rs
//!
//! Per-font byte-to-Unicode strategy. A font with a `ToUnicode` CMap (or a
//! predefined CMap name as its `Encoding`) decodes through [`CMapDecoder`];
//! otherwise its `Encoding` entry picks a base table, optionally overlaid
//! with `Differences`, in [`EncodingDecoder`]. Fonts that say nothing get a
//! best guess and ultimately a latin-1 default.

use std::collections::{HashMap, VecDeque};

use crate::cmap::{CMap, CMapParser};
use crate::codecs::{glyph_name_to_unicode, Codec, EncodingRegistry, IMPLICIT_BASE_ENCODING};
use crate::document::PdfDocument;
use crate::object::{to_hex, Dictionary, Object};
use crate::predefined;

/// The 13 standard PostScript font names that imply an encoding guess when
/// the font dictionary carries none. `Symbol` is deliberately absent: its
/// proper table (cp1038) is not packaged and pretending otherwise decodes
/// garbage.
// TODO: ship a Symbol (cp1038) table and give Symbol a real decoder
const STANDARD_FONT_NAMES: &[&str] = &[
    "Times-Roman",
    "Helvetica",
    "Courier",
    "Times-Bold",
    "Helvetica-Bold",
    "Courier-Bold",
    "Times-Italic",
    "Helvetica-Oblique",
    "Courier-Oblique",
    "Times-BoldItalic",
    "Helvetica-BoldOblique",
    "Courier-BoldOblique",
    "ZapfDingbats",
];

/// Byte-level decoder over a base encoding table plus a `Differences`
/// overlay.
#[derive(Debug, Clone)]
pub struct EncodingDecoder {
    codec: Option<Codec>,
    differences: HashMap<u8, String>,
    zapf: bool,
}

impl EncodingDecoder {
    /// Bytes map straight to U+0000..U+00FF.
    pub fn latin1() -> Self {
        EncodingDecoder { codec: None, differences: HashMap::new(), zapf: false }
    }

    pub fn from_name(name: &str, registry: &EncodingRegistry) -> Self {
        let codec = registry.get(name).copied();
        if codec.is_none() {
            log::debug!("unsupported encoding {}, using latin-1", name);
        }
        EncodingDecoder { codec, differences: HashMap::new(), zapf: false }
    }

    /// `{BaseEncoding, Differences}` — a missing BaseEncoding falls back
    /// to StandardEncoding. A Differences array lists a starting code
    /// followed by glyph names that replace consecutive slots.
    pub fn from_encoding_dict(
        dict: &Dictionary,
        differences: Option<&[Object]>,
        registry: &EncodingRegistry,
        zapf: bool,
    ) -> Self {
        let base = dict.get_name("BaseEncoding").unwrap_or(IMPLICIT_BASE_ENCODING);
        let codec = registry.get(base).copied().or_else(|| {
            log::debug!("unknown BaseEncoding {}, trying {}", base, IMPLICIT_BASE_ENCODING);
            registry.get(IMPLICIT_BASE_ENCODING).copied()
        });
        let mut diffs = HashMap::new();
        if let Some(items) = differences {
            let mut code: i64 = 0;
            for item in items {
                match item {
                    Object::Integer(n) => code = *n,
                    Object::Name(name) => {
                        if (0..=255).contains(&code) {
                            diffs.insert(code as u8, name.clone());
                        }
                        code += 1;
                    }
                    other => log::debug!(
                        "skipping {} in Differences array",
                        other.type_name()
                    ),
                }
            }
        }
        EncodingDecoder { codec, differences: diffs, zapf }
    }

    pub fn decode_bytes(&self, bytes: &[u8]) -> String {
        let mut out = String::new();
        for &b in bytes {
            if let Some(name) = self.differences.get(&b) {
                // an unresolvable name contributes the empty string
                out.push_str(&glyph_name_to_unicode(name, self.zapf));
            } else if let Some(name) = self.codec.and_then(|c| c.table[b as usize]) {
                out.push_str(&glyph_name_to_unicode(name, self.zapf));
            } else {
                out.push(b as char);
            }
        }
        out
    }
}

/// Decoder over a CMap's bf mappings. Input consumes two hex digits at a
/// time, accumulating up to four before giving up on a prefix; a miss at
/// four digits routes the leading byte through the fallback encoding
/// decoder and re-queues the rest.
#[derive(Debug, Clone)]
pub struct CMapDecoder {
    pub cmap: CMap,
    fallback: EncodingDecoder,
}

impl CMapDecoder {
    pub fn new(cmap: CMap, fallback: EncodingDecoder) -> Self {
        CMapDecoder { cmap, fallback }
    }

    pub fn decode_hex(&self, hex: &str) -> String {
        let hex = hex.to_ascii_uppercase();
        let mut codes: VecDeque<String> = hex
            .as_bytes()
            .chunks(2)
            .map(|c| String::from_utf8_lossy(c).to_string())
            .collect();

        let mut out = String::new();
        let mut code = String::new();
        while let Some(chunk) = codes.pop_front() {
            code.push_str(&chunk);
            match self.cmap.bf_lookup(&code) {
                Some(text) => {
                    out.push_str(&text);
                    code.clear();
                }
                None => {
                    if code.len() < 4 {
                        continue;
                    }
                    if &code[..2] != "00" {
                        out.push_str(&self.decode_fallback(&code[..2]));
                    }
                    codes.push_front(code[2..].to_string());
                    code.clear();
                }
            }
        }
        if !code.is_empty() {
            out.push_str(&self.decode_fallback(&code));
        }
        out
    }

    fn decode_fallback(&self, hex: &str) -> String {
        let bytes: Vec<u8> = hex
            .as_bytes()
            .chunks(2)
            .filter_map(|c| u8::from_str_radix(&String::from_utf8_lossy(c), 16).ok())
            .collect();
        self.fallback.decode_bytes(&bytes)
    }
}

/// The decoder a font resolves to.
#[derive(Debug, Clone)]
pub enum Decoder {
    CMap(CMapDecoder),
    Encoding(EncodingDecoder),
}

impl Decoder {
    pub fn default_decoder() -> Self {
        Decoder::Encoding(EncodingDecoder::latin1())
    }

    /// Decodes a literal string's bytes with this font's strategy.
    pub fn decode_string(&self, bytes: &[u8]) -> String {
        match self {
            Decoder::CMap(d) => d.decode_hex(&to_hex(bytes)),
            Decoder::Encoding(d) => d.decode_bytes(bytes),
        }
    }

    /// Decodes a hex string's bytes; for CMap fonts the hex digits feed
    /// the prefix-matching loop directly.
    pub fn decode_hexstring(&self, bytes: &[u8]) -> String {
        match self {
            Decoder::CMap(d) => d.decode_hex(&to_hex(bytes)),
            Decoder::Encoding(d) => d.decode_bytes(bytes),
        }
    }

    /// Builds the decoder for a font dictionary, resolving indirect
    /// pieces through the document.
    pub fn for_font(
        font: &Dictionary,
        doc: &mut PdfDocument,
        registry: &EncodingRegistry,
    ) -> Decoder {
        let to_unicode_data = font
            .get("ToUnicode")
            .cloned()
            .map(|o| doc.resolve(&o))
            .and_then(|o| o.as_stream().and_then(|s| s.filtered().ok()));
        let encoding = font.get("Encoding").cloned().map(|o| doc.resolve(&o));
        // Differences may itself be indirect
        let encoding = encoding.map(|enc| match enc {
            Object::Dictionary(mut d) => {
                if let Some(diffs) = d.get("Differences").cloned() {
                    let resolved = doc.resolve(&diffs);
                    d.set("Differences", resolved);
                }
                Object::Dictionary(d)
            }
            other => other,
        });
        let base_font = font.get_name("BaseFont").map(str::to_string);
        build_decoder(to_unicode_data, encoding, base_font.as_deref(), registry)
    }
}

/// The decoder decision table, on already-resolved font pieces.
fn build_decoder(
    to_unicode_data: Option<Vec<u8>>,
    encoding: Option<Object>,
    base_font: Option<&str>,
    registry: &EncodingRegistry,
) -> Decoder {
    let zapf = base_font == Some("ZapfDingbats");
    let predefined_name = encoding
        .as_ref()
        .and_then(Object::as_name)
        .filter(|n| predefined::is_predefined(n));

    let cmap = match &to_unicode_data {
        Some(data) => match CMapParser::new(data.clone()).cmap() {
            Ok(cmap) => Some(cmap),
            Err(e) => {
                log::warn!("broken ToUnicode CMap: {}", e);
                None
            }
        },
        None => predefined_name.and_then(predefined::load),
    };

    // a predefined name is consumed by the CMap itself, anything else
    // stays available as the fallback byte encoding
    let encoding = match predefined_name {
        Some(_) => None,
        None => encoding,
    };

    if let Some(cmap) = cmap {
        let fallback = match &encoding {
            Some(Object::Name(name)) => EncodingDecoder::from_name(name, registry),
            Some(Object::Dictionary(d)) => {
                EncodingDecoder::from_encoding_dict(d, d.get_array("Differences"), registry, zapf)
            }
            _ => EncodingDecoder::latin1(),
        };
        return Decoder::CMap(CMapDecoder::new(cmap, fallback));
    }

    match encoding {
        Some(Object::Name(name)) => {
            Decoder::Encoding(EncodingDecoder::from_name(&name, registry))
        }
        Some(Object::Dictionary(d)) => Decoder::Encoding(EncodingDecoder::from_encoding_dict(
            &d,
            d.get_array("Differences"),
            registry,
            zapf,
        )),
        Some(other) => {
            log::warn!("unexpected Encoding of type {}, using default", other.type_name());
            Decoder::default_decoder()
        }
        None => match base_font {
            Some("Symbol") => {
                log::debug!("Symbol (cp1038) codec not implemented, using default");
                Decoder::default_decoder()
            }
            Some(name) if STANDARD_FONT_NAMES.contains(&name) => {
                // the identity guess for the built-in fonts lands on the
                // latin-1 default, there is no byte table to consult
                Decoder::Encoding(EncodingDecoder::from_name("Identity-H", registry))
            }
            _ => {
                log::debug!("font defines no usable encoding, using default");
                Decoder::default_decoder()
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cmap::{BfEntry, BfTarget};

    fn registry() -> EncodingRegistry {
        EncodingRegistry::default()
    }

    fn name_obj(n: &str) -> Object {
        Object::Name(n.to_string())
    }

    #[test]
    fn tounicode_wins_over_encoding() {
        let tounicode = b"begincmap\n1 beginbfchar\n<41> <0057>\nendbfchar\nendcmap".to_vec();
        let d = build_decoder(
            Some(tounicode),
            Some(name_obj("WinAnsiEncoding")),
            None,
            &registry(),
        );
        assert!(matches!(d, Decoder::CMap(_)));
        assert_eq!(d.decode_string(b"A"), "W");
    }

    #[test]
    fn predefined_cmap_identity_decoding() {
        let d = build_decoder(None, Some(name_obj("Identity-V")), None, &registry());
        assert!(matches!(d, Decoder::CMap(_)));
        // no bf mappings: leading 00 bytes drop, low bytes fall back
        assert_eq!(
            d.decode_hexstring(&[0x00, 0x41, 0x00, 0x42, 0x00, 0x43, 0x00, 0x31, 0x00, 0x32, 0x00, 0x33]),
            "ABC123"
        );
    }

    #[test]
    fn standard_encoding_name() {
        let d = build_decoder(None, Some(name_obj("WinAnsiEncoding")), None, &registry());
        assert!(matches!(d, Decoder::Encoding(_)));
        assert_eq!(d.decode_string(b"Hello \xa9"), "Hello ©");
    }

    #[test]
    fn differences_overlay() {
        let mut enc = Dictionary::new();
        enc.set("Type", name_obj("Encoding"));
        enc.set("BaseEncoding", name_obj("WinAnsiEncoding"));
        enc.set(
            "Differences",
            Object::Array(vec![
                Object::Integer(65),
                name_obj("W"),
                name_obj("Y"),
                name_obj("Z"),
            ]),
        );
        let d = build_decoder(None, Some(Object::Dictionary(enc)), None, &registry());
        assert_eq!(d.decode_string(b"ABC123DEF"), "WYZ123DEF");
    }

    #[test]
    fn differences_with_symbolic_names() {
        let mut enc = Dictionary::new();
        enc.set("BaseEncoding", name_obj("WinAnsiEncoding"));
        enc.set(
            "Differences",
            Object::Array(vec![
                Object::Integer(65),
                name_obj("copyright"),
                name_obj("Aring"),
            ]),
        );
        let d = build_decoder(None, Some(Object::Dictionary(enc)), None, &registry());
        assert_eq!(d.decode_string(b"AB C"), "©Å C");
    }

    #[test]
    fn missing_base_encoding_uses_standard() {
        let mut enc = Dictionary::new();
        enc.set("Differences", Object::Array(vec![Object::Integer(39), name_obj("exclam")]));
        let d = build_decoder(None, Some(Object::Dictionary(enc)), None, &registry());
        // 0x27 is quoteright in StandardEncoding, overridden here
        assert_eq!(d.decode_string(b"'"), "!");
        assert_eq!(d.decode_string(b"`"), "\u{2018}");
    }

    #[test]
    fn builtin_font_guess_and_default() {
        let d = build_decoder(None, None, Some("Helvetica"), &registry());
        assert_eq!(d.decode_string(b"plain"), "plain");
        // Symbol intentionally gets no identity guess
        let d = build_decoder(None, None, Some("Symbol"), &registry());
        assert_eq!(d.decode_string(b"abc"), "abc");
        let d = build_decoder(None, None, None, &registry());
        assert_eq!(d.decode_string(&[0xe9]), "é");
    }

    #[test]
    fn zapf_dingbats_differences() {
        let mut enc = Dictionary::new();
        enc.set(
            "Differences",
            Object::Array(vec![Object::Integer(97), name_obj("a10")]),
        );
        let d = build_decoder(
            None,
            Some(Object::Dictionary(enc)),
            Some("ZapfDingbats"),
            &registry(),
        );
        assert_eq!(d.decode_string(b"a"), "\u{2721}");
    }

    #[test]
    fn cmap_miss_requeues_tail() {
        // cmap maps only single-byte <20>; "20556E" must decode the 55 and
        // 6E through the fallback after failed two-byte prefixes
        let cmap = CMap {
            codespace_ranges: vec![],
            cid_ranges: vec![],
            notdef_ranges: vec![],
            bf_ranges: vec![
                BfEntry::Char { code: 0x20, nbytes: 1, target: BfTarget::Text(" ".into()) },
                BfEntry::Char { code: 0x55, nbytes: 1, target: BfTarget::Text("U".into()) },
                BfEntry::Char { code: 0x6e, nbytes: 1, target: BfTarget::Text("n".into()) },
                BfEntry::Char { code: 0x74, nbytes: 1, target: BfTarget::Text("t".into()) },
                BfEntry::Char { code: 0x65, nbytes: 1, target: BfTarget::Text("e".into()) },
                BfEntry::Char { code: 0x64, nbytes: 1, target: BfTarget::Text("d".into()) },
            ],
            name: None,
        };
        let d = Decoder::CMap(CMapDecoder::new(cmap, EncodingDecoder::latin1()));
        assert_eq!(d.decode_hexstring(&[0x20, 0x55, 0x6e, 0x69, 0x74, 0x65, 0x64]), " United");
    }
}
