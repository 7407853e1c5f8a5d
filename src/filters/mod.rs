//! Stream filter pipeline. Filters compose in the order the stream
//! dictionary declares them; each stage gets its aligned slice of
//! `DecodeParms`. The opaque image codecs (CCITT, DCT, JPX, JBIG2) pass
//! their input through byte-identical — rasterization is not this crate's
//! job. `Crypt` is also a passthrough here: decryption happens per-object
//! in the security handler before filters ever run.

pub mod ascii85;
pub mod asciihex;
pub mod flate;
pub mod lzw;
pub mod predictors;
pub mod runlength;

use crate::error::FilterError;
use crate::object::{Dictionary, Object, Stream};

pub type FilterResult = std::result::Result<Vec<u8>, FilterError>;

/// Applies one named filter. Both the long and the short filter names are
/// recognized.
pub fn apply_filter(name: &str, data: &[u8], params: Option<&Dictionary>) -> FilterResult {
    match name {
        "ASCIIHexDecode" | "AHx" => asciihex::decode(data),
        "ASCII85Decode" | "A85" => ascii85::decode(data),
        "FlateDecode" | "Fl" => flate::decode(data, params),
        "LZWDecode" | "LZW" => lzw::decode(data, params),
        "RunLengthDecode" | "RL" => runlength::decode(data),
        // opaque image codecs: byte-identity, a consumer hands the payload
        // to an actual image decoder
        "CCITTFaxDecode" | "CCF" | "DCTDecode" | "DCT" | "JPXDecode" | "JPX" | "JBIG2Decode"
        | "JBIG2" => Ok(data.to_vec()),
        // handled by the security layer before parsing yields the stream
        "Crypt" => Ok(data.to_vec()),
        other => Err(FilterError::Unknown(other.to_string())),
    }
}

/// The declared filter chain of a stream dictionary: `/Filter` may be a
/// single Name or an array of Names; `/DecodeParms` aligns with it. Inline
/// images spell these `/F` and `/DP`; their wrapper normalizes the keys
/// before calling in here.
fn filter_chain(dict: &Dictionary) -> Result<Vec<(String, Option<Dictionary>)>, FilterError> {
    let filters = match dict.get("Filter") {
        None => return Ok(Vec::new()),
        Some(Object::Name(n)) => vec![n.clone()],
        Some(Object::Array(arr)) => {
            let mut names = Vec::with_capacity(arr.len());
            for obj in arr {
                match obj.as_name() {
                    Some(n) => names.push(n.to_string()),
                    None => {
                        return Err(FilterError::Broken(format!(
                            "filter array holds a {}",
                            obj.type_name()
                        )))
                    }
                }
            }
            names
        }
        Some(other) => {
            return Err(FilterError::Broken(format!(
                "incorrect filter type: {}",
                other.type_name()
            )))
        }
    };

    let parms = dict.get("DecodeParms");
    let chain = filters
        .into_iter()
        .enumerate()
        .map(|(i, name)| {
            let p = match parms {
                Some(Object::Dictionary(d)) if i == 0 => Some(d.clone()),
                Some(Object::Array(arr)) => arr.get(i).and_then(Object::as_dict).cloned(),
                _ => None,
            };
            (name, p)
        })
        .collect();
    Ok(chain)
}

/// Decodes `data` through the filter chain `dict` declares. An unknown
/// filter always surfaces; a broken encoded stream surfaces only in strict
/// mode, the lenient default logs it and substitutes empty bytes.
pub fn decode(dict: &Dictionary, data: &[u8], strict: bool) -> FilterResult {
    let mut data = data.to_vec();
    for (name, params) in filter_chain(dict)? {
        data = match apply_filter(&name, &data, params.as_ref()) {
            Ok(decoded) => decoded,
            Err(e @ FilterError::Unknown(_)) => return Err(e),
            Err(e) if strict => return Err(e),
            Err(e) => {
                log::error!("skipping broken stream (/{}) : {}", name, e);
                Vec::new()
            }
        };
    }
    Ok(data)
}

impl Stream {
    /// The payload decoded through the declared filter chain, lenient mode.
    /// The result is memoized on the stream.
    pub fn filtered(&self) -> FilterResult {
        if let Some(cached) = self.decoded.get() {
            return Ok(cached.clone());
        }
        let decoded = decode(&self.dict, &self.data, false)?;
        let _ = self.decoded.set(decoded.clone());
        Ok(decoded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::object::{Dictionary, Object};

    #[test]
    fn unknown_filter_is_an_error() {
        assert_eq!(
            apply_filter("NoSuchDecode", b"x", None),
            Err(FilterError::Unknown("NoSuchDecode".to_string()))
        );
    }

    #[test]
    fn opaque_codecs_preserve_byte_identity() {
        for name in ["CCITTFaxDecode", "DCTDecode", "JPXDecode", "JBIG2Decode", "CCF", "DCT"] {
            assert_eq!(apply_filter(name, b"\xff\xd8raw", None).unwrap(), b"\xff\xd8raw");
        }
    }

    #[test]
    fn chain_runs_in_declared_order() {
        // RunLength(AsciiHex(data)): the dictionary declares hex first
        let mut dict = Dictionary::new();
        dict.set(
            "Filter",
            Object::Array(vec![
                Object::Name("ASCIIHexDecode".into()),
                Object::Name("RunLengthDecode".into()),
            ]),
        );
        // hex "02414243 80" -> RL [2, A, B, C, EOD] -> "ABC"
        let out = decode(&dict, b"0241424380>", false).unwrap();
        assert_eq!(out, b"ABC");
    }

    #[test]
    fn lenient_mode_swallows_broken_streams() {
        let mut dict = Dictionary::new();
        dict.set("Filter", Object::Name("ASCIIHexDecode".into()));
        assert_eq!(decode(&dict, b"BROKEN_STREAM>", false).unwrap(), b"");
        assert!(decode(&dict, b"BROKEN_STREAM>", true).is_err());
    }

    #[test]
    fn stream_filtered_is_memoized() {
        let mut dict = Dictionary::new();
        dict.set("Filter", Object::Name("ASCIIHexDecode".into()));
        let stream = crate::object::Stream::new(dict, b"646174612073616d706c65>".to_vec());
        assert_eq!(stream.filtered().unwrap(), b"data sample");
        assert_eq!(stream.filtered().unwrap(), b"data sample");
    }
}
