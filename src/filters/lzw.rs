//! LZWDecode — the early-change variant PDF writers emit, via weezl.

use weezl::{decode::Decoder, BitOrder};

use crate::error::FilterError;
use crate::object::Dictionary;

use super::{predictors, FilterResult};

pub fn decode(data: &[u8], params: Option<&Dictionary>) -> FilterResult {
    let early_change = params
        .and_then(|p| p.get_i64("EarlyChange"))
        .unwrap_or(1);
    let mut decoder = if early_change == 0 {
        Decoder::new(BitOrder::Msb, 8)
    } else {
        Decoder::with_tiff_size_switch(BitOrder::Msb, 8)
    };
    let out = decoder
        .decode(data)
        .map_err(|e| FilterError::Broken(format!("lzw: {}", e)))?;
    predictors::remove_predictors(out, params)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_reference_stream() {
        // Example from the PDF specification, expands to "-----A---B"
        let data = [0x80, 0x0b, 0x60, 0x50, 0x22, 0x0c, 0x0c, 0x85, 0x01];
        assert_eq!(decode(&data, None).unwrap(), b"-----A---B");
    }

    #[test]
    fn broken_stream() {
        // a code far beyond the dictionary is invalid right away
        assert!(decode(&[0xff, 0xff, 0xff, 0xff], None).is_err());
    }
}
