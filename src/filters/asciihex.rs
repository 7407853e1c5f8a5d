//! ASCIIHexDecode (`AHx`)

use crate::error::FilterError;

use super::FilterResult;

/// Whitespace is skipped, `>` ends the data, an odd trailing nibble is
/// zero-padded.
pub fn decode(data: &[u8]) -> FilterResult {
    let mut out = Vec::with_capacity(data.len() / 2);
    let mut pending: Option<u8> = None;
    for &b in data {
        if crate::parser::is_whitespace(b) {
            continue;
        }
        if b == b'>' {
            break;
        }
        let nibble = match (b as char).to_digit(16) {
            Some(n) => n as u8,
            None => {
                return Err(FilterError::Broken(format!(
                    "invalid character 0x{:02x} in hex stream",
                    b
                )))
            }
        };
        match pending.take() {
            Some(high) => out.push(high << 4 | nibble),
            None => pending = Some(nibble),
        }
    }
    if let Some(high) = pending {
        out.push(high << 4);
    }
    Ok(out)
}

/// Inverse of [`decode`], including the `>` terminator.
pub fn encode(data: &[u8]) -> Vec<u8> {
    let mut out = crate::object::to_hex(data).into_bytes();
    out.push(b'>');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_plain_hex() {
        assert_eq!(decode(b"646174612073616d706c65>").unwrap(), b"data sample");
    }

    #[test]
    fn decode_inverts_encode() {
        for input in [b"".as_slice(), b"data sample", &[0x00, 0xff, 0x10]] {
            assert_eq!(decode(&encode(input)).unwrap(), input);
        }
    }

    #[test]
    fn skips_whitespace() {
        assert_eq!(decode(b"64617461207 3616d\n706c65>").unwrap(), b"data sample");
    }

    #[test]
    fn pads_odd_nibble() {
        assert_eq!(decode(b"64617461207 3616d\n706c652>").unwrap(), b"data sample ");
    }

    #[test]
    fn broken_stream() {
        assert!(decode(b"BROKEN_STREAM>").is_err());
    }
}
