//! Character-set layer: the four standard simple-font encodings as
//! byte-to-glyph-name tables, the Adobe Glyph List, the ZapfDingbats glyph
//! list, and the glyph-name to Unicode resolution rules.

pub mod glyphnames;
pub mod macroman;
pub mod pdfdoc;
pub mod standard;
pub mod winansi;
pub mod zapfdingbats;

use glyphnames::ADOBE_GLYPH_LIST;
use zapfdingbats::ZAPF_DINGBATS_GLYPH_LIST;

/// One of the standard single-byte encodings: a name plus its 256-slot
/// byte-to-glyph-name table.
#[derive(Debug, Clone, Copy)]
pub struct Codec {
    pub name: &'static str,
    pub table: &'static [Option<&'static str>; 256],
}

pub static STANDARD: Codec =
    Codec { name: "StandardEncoding", table: &standard::STANDARD_ENCODING };
pub static WIN_ANSI: Codec =
    Codec { name: "WinAnsiEncoding", table: &winansi::WIN_ANSI_ENCODING };
pub static MAC_ROMAN: Codec =
    Codec { name: "MacRomanEncoding", table: &macroman::MAC_ROMAN_ENCODING };
pub static PDF_DOC: Codec = Codec { name: "PDFDocEncoding", table: &pdfdoc::PDF_DOC_ENCODING };

/// When an Encoding dictionary has no BaseEncoding, StandardEncoding is the
/// assumed base (font programs, which could say otherwise, are not parsed).
pub static IMPLICIT_BASE_ENCODING: &str = "StandardEncoding";

/// The lookup handle from encoding names to codecs. Deliberately a value
/// passed into decoder construction rather than process-global state, so
/// independent documents never share anything mutable.
#[derive(Debug, Clone)]
pub struct EncodingRegistry {
    codecs: Vec<Codec>,
}

impl Default for EncodingRegistry {
    fn default() -> Self {
        EncodingRegistry { codecs: vec![STANDARD, WIN_ANSI, MAC_ROMAN, PDF_DOC] }
    }
}

impl EncodingRegistry {
    pub fn get(&self, name: &str) -> Option<&Codec> {
        self.codecs.iter().find(|c| c.name == name)
    }
}

/// Adobe Glyph List lookup.
pub fn agl_lookup(name: &str) -> Option<&'static str> {
    ADOBE_GLYPH_LIST
        .binary_search_by(|(n, _)| n.cmp(&name))
        .ok()
        .map(|i| ADOBE_GLYPH_LIST[i].1)
}

fn zapf_lookup(name: &str) -> Option<char> {
    ZAPF_DINGBATS_GLYPH_LIST
        .binary_search_by(|(n, _)| n.cmp(&name))
        .ok()
        .map(|i| ZAPF_DINGBATS_GLYPH_LIST[i].1)
}

/// Resolves a glyph name to its Unicode text. Names may be composite
/// (`a_b.variant`): everything from the first period on is dropped, the
/// rest splits on underscores and each component resolves on its own —
/// ZapfDingbats GL first for that font, then AGL, then `uniXXXX...`
/// (one or more UTF-16 code units), then `uXXXXX` (one scalar, 5-7 hex
/// digits). A component nothing recognizes contributes the empty string.
pub fn glyph_name_to_unicode(name: &str, zapf: bool) -> String {
    let base = name.split('.').next().unwrap_or("");
    let mut out = String::new();
    for component in base.split('_') {
        if component.is_empty() {
            continue;
        }
        if zapf {
            if let Some(ch) = zapf_lookup(component) {
                out.push(ch);
                continue;
            }
        }
        if let Some(text) = agl_lookup(component) {
            out.push_str(text);
            continue;
        }
        if let Some(rest) = component.strip_prefix("uni") {
            if rest.len() >= 4 && rest.len() % 4 == 0 {
                let units: Option<Vec<u16>> = rest
                    .as_bytes()
                    .chunks(4)
                    .map(|c| u16::from_str_radix(std::str::from_utf8(c).ok()?, 16).ok())
                    .collect();
                if let Some(units) = units {
                    out.push_str(&String::from_utf16_lossy(&units));
                    continue;
                }
            }
        }
        if let Some(rest) = component.strip_prefix('u') {
            if (5..=7).contains(&rest.len()) {
                if let Some(ch) =
                    u32::from_str_radix(rest, 16).ok().and_then(char::from_u32)
                {
                    out.push(ch);
                    continue;
                }
            }
        }
        // unresolved component: empty string
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_lookups() {
        assert_eq!(WIN_ANSI.table[b'A' as usize], Some("A"));
        assert_eq!(WIN_ANSI.table[0xa9], Some("copyright"));
        assert_eq!(STANDARD.table[0x27], Some("quoteright"));
        assert_eq!(MAC_ROMAN.table[0xa0], Some("dagger"));
        assert_eq!(PDF_DOC.table[0x92], Some("trademark"));
    }

    #[test]
    fn agl_is_sorted_for_binary_search() {
        for pair in glyphnames::ADOBE_GLYPH_LIST.windows(2) {
            assert!(pair[0].0 < pair[1].0, "{} >= {}", pair[0].0, pair[1].0);
        }
        for pair in zapfdingbats::ZAPF_DINGBATS_GLYPH_LIST.windows(2) {
            assert!(pair[0].0 < pair[1].0);
        }
    }

    #[test]
    fn simple_glyph_names() {
        assert_eq!(glyph_name_to_unicode("copyright", false), "©");
        assert_eq!(glyph_name_to_unicode("Aring", false), "Å");
        assert_eq!(glyph_name_to_unicode("fi", false), "\u{fb01}");
        assert_eq!(glyph_name_to_unicode("nosuchglyph", false), "");
    }

    #[test]
    fn composite_glyph_names() {
        assert_eq!(glyph_name_to_unicode("f_i", false), "fi");
        assert_eq!(glyph_name_to_unicode("A.small", false), "A");
        assert_eq!(glyph_name_to_unicode("a_b.variant", false), "ab");
    }

    #[test]
    fn uni_and_u_names() {
        assert_eq!(glyph_name_to_unicode("uni0041", false), "A");
        assert_eq!(glyph_name_to_unicode("uni00480069", false), "Hi");
        assert_eq!(glyph_name_to_unicode("u1F600", false), "\u{1f600}");
        // too short for the uXXXXX form, not an AGL name either
        assert_eq!(glyph_name_to_unicode("u0041", false), "");
    }

    #[test]
    fn zapf_dingbats_names() {
        assert_eq!(glyph_name_to_unicode("a10", true), "\u{2721}");
        // without the ZapfDingbats context, aN names resolve to nothing
        assert_eq!(glyph_name_to_unicode("a10", false), "");
    }
}
