//! FlateDecode (`Fl`)

use std::io::Read;

use flate2::read::ZlibDecoder;

use crate::error::FilterError;
use crate::object::Dictionary;

use super::{predictors, FilterResult};

pub fn decode(data: &[u8], params: Option<&Dictionary>) -> FilterResult {
    let mut out = Vec::new();
    ZlibDecoder::new(data)
        .read_to_end(&mut out)
        .map_err(|e| FilterError::Broken(format!("zlib: {}", e)))?;
    predictors::remove_predictors(out, params)
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::{write::ZlibEncoder, Compression};
    use std::io::Write;

    pub(crate) fn deflate(data: &[u8]) -> Vec<u8> {
        let mut enc = ZlibEncoder::new(Vec::new(), Compression::default());
        enc.write_all(data).unwrap();
        enc.finish().unwrap()
    }

    #[test]
    fn inflate_round_trip() {
        assert_eq!(decode(&deflate(b"sample data"), None).unwrap(), b"sample data");
    }

    #[test]
    fn broken_stream() {
        assert!(decode(b"BROKEN_STREAM", None).is_err());
    }
}
