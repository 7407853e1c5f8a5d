//! RunLengthDecode (`RL`)

use crate::error::FilterError;

use super::FilterResult;

/// Length byte 0..=127: copy the next `length + 1` bytes literally;
/// 129..=255: repeat the next byte `257 - length` times; 128 is EOD.
pub fn decode(data: &[u8]) -> FilterResult {
    let mut out = Vec::new();
    let mut iter = data.iter().copied();
    loop {
        let length = match iter.next() {
            Some(128) => return Ok(out),
            Some(b) => b,
            None => break,
        };
        if length <= 127 {
            for _ in 0..=length {
                match iter.next() {
                    Some(b) => out.push(b),
                    None => break,
                }
            }
        } else {
            match iter.next() {
                Some(b) => out.extend(std::iter::repeat(b).take(257 - length as usize)),
                None => break,
            }
        }
    }
    Err(FilterError::Broken("run-length stream without EOD".to_string()))
}
