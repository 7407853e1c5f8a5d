//! ASCII85Decode (`A85`)

use crate::error::FilterError;

use super::FilterResult;

/// Base-85 groups of five characters `!`..`u` decode to four bytes; `z` is
/// shorthand for four zero bytes; `~>` terminates the data. Whitespace may
/// appear anywhere.
pub fn decode(data: &[u8]) -> FilterResult {
    let body: Vec<u8> = data
        .iter()
        .copied()
        .filter(|&b| !crate::parser::is_whitespace(b))
        .collect();
    let body = match body.strip_suffix(b"~>") {
        Some(b) => b,
        None => return Err(FilterError::Broken("EOD ~> expected".to_string())),
    };
    // `<~` prefix is tolerated even though PDF never writes it
    let body = body.strip_prefix(b"<~").unwrap_or(body);

    let mut out = Vec::with_capacity(body.len() * 4 / 5);
    let mut group = [0u8; 5];
    let mut filled = 0usize;
    for &b in body {
        match b {
            b'z' if filled == 0 => out.extend_from_slice(&[0, 0, 0, 0]),
            b'z' => return Err(FilterError::Broken("z inside an ascii85 group".to_string())),
            b'!'..=b'u' => {
                group[filled] = b - b'!';
                filled += 1;
                if filled == 5 {
                    push_group(&mut out, &group, 4)?;
                    filled = 0;
                }
            }
            other => {
                return Err(FilterError::Broken(format!(
                    "invalid character 0x{:02x} in ascii85 stream",
                    other
                )))
            }
        }
    }
    match filled {
        0 => {}
        1 => return Err(FilterError::Broken("truncated ascii85 group".to_string())),
        n => {
            // pad with 'u' and keep n-1 bytes
            for slot in group.iter_mut().take(5).skip(n) {
                *slot = 84;
            }
            push_group(&mut out, &group, n - 1)?;
        }
    }
    Ok(out)
}

/// Inverse of [`decode`], without the `~>` terminator. Full zero groups
/// compress to `z`.
pub fn encode(data: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(data.len() * 5 / 4 + 2);
    for chunk in data.chunks(4) {
        let mut word = [0u8; 4];
        word[..chunk.len()].copy_from_slice(chunk);
        let mut acc = u32::from_be_bytes(word);
        if acc == 0 && chunk.len() == 4 {
            out.push(b'z');
            continue;
        }
        let mut digits = [0u8; 5];
        for slot in digits.iter_mut().rev() {
            *slot = (acc % 85) as u8 + b'!';
            acc /= 85;
        }
        out.extend_from_slice(&digits[..chunk.len() + 1]);
    }
    out
}

fn push_group(out: &mut Vec<u8>, group: &[u8; 5], keep: usize) -> Result<(), FilterError> {
    let mut acc: u32 = 0;
    for &digit in group {
        acc = acc
            .checked_mul(85)
            .and_then(|v| v.checked_add(digit as u32))
            .ok_or_else(|| FilterError::Broken("ascii85 group overflow".to_string()))?;
    }
    out.extend_from_slice(&acc.to_be_bytes()[..keep]);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_reference_vector() {
        // "Man " encodes to 9jqo^
        assert_eq!(decode(b"9jqo^~>").unwrap(), b"Man ");
    }

    #[test]
    fn decodes_partial_group() {
        assert_eq!(decode(b"F(&p)Ch4`\"@<>o~>").unwrap(), b"sample data");
    }

    #[test]
    fn z_is_four_zero_bytes() {
        assert_eq!(decode(b"z~>").unwrap(), vec![0, 0, 0, 0]);
    }

    #[test]
    fn whitespace_is_ignored() {
        assert_eq!(decode(b"9jq\no^\r\n~>").unwrap(), b"Man ");
    }

    #[test]
    fn missing_terminator_is_broken() {
        assert!(decode(b"9jqo^").is_err());
    }

    #[test]
    fn decode_inverts_encode() {
        for input in [
            b"".as_slice(),
            b"M",
            b"Man ",
            b"sample data",
            &[0, 0, 0, 0, 1, 2, 3],
            &[0xff; 13],
        ] {
            let mut encoded = encode(input);
            encoded.extend_from_slice(b"~>");
            assert_eq!(decode(&encoded).unwrap(), input);
        }
    }
}
