//! Predictor post-processing for Flate and LZW streams.
//!
//! 1 = no prediction, 2 = TIFF (unimplemented), 10..=15 = PNG family. PNG
//! rows carry a per-row filter type byte ahead of `Columns` pixels and the
//! filter math must actually be undone (xref streams routinely use `Up`).

use crate::error::FilterError;
use crate::object::Dictionary;

use super::FilterResult;

pub fn remove_predictors(data: Vec<u8>, params: Option<&Dictionary>) -> FilterResult {
    let predictor = params.and_then(|p| p.get_i64("Predictor")).unwrap_or(1);
    match predictor {
        1 => Ok(data),
        2 => Err(FilterError::Unsupported("TIFF prediction not implemented".to_string())),
        10..=15 => {
            let columns = params.and_then(|p| p.get_i64("Columns")).unwrap_or(1).max(1) as usize;
            let colors = params.and_then(|p| p.get_i64("Colors")).unwrap_or(1).max(1) as usize;
            let bpc = params.and_then(|p| p.get_i64("BitsPerComponent")).unwrap_or(8).max(1) as usize;
            png_unfilter(&data, columns, colors, bpc)
        }
        other => Err(FilterError::Unsupported(format!("unknown predictor type {}", other))),
    }
}

fn png_unfilter(data: &[u8], columns: usize, colors: usize, bpc: usize) -> FilterResult {
    let bpp = (colors * bpc).div_ceil(8).max(1);
    let row_len = (columns * colors * bpc).div_ceil(8);
    let stride = row_len + 1;

    let mut out = Vec::with_capacity(data.len());
    let mut prev_row = vec![0u8; row_len];
    for chunk in data.chunks(stride) {
        let filter_type = chunk[0];
        let mut row = chunk[1..].to_vec();
        if row.len() < row_len {
            row.resize(row_len, 0);
        }
        match filter_type {
            0 => {}
            1 => {
                // Sub
                for i in bpp..row_len {
                    row[i] = row[i].wrapping_add(row[i - bpp]);
                }
            }
            2 => {
                // Up
                for i in 0..row_len {
                    row[i] = row[i].wrapping_add(prev_row[i]);
                }
            }
            3 => {
                // Average
                for i in 0..row_len {
                    let left = if i >= bpp { row[i - bpp] as u16 } else { 0 };
                    let up = prev_row[i] as u16;
                    row[i] = row[i].wrapping_add(((left + up) / 2) as u8);
                }
            }
            4 => {
                // Paeth
                for i in 0..row_len {
                    let left = if i >= bpp { row[i - bpp] } else { 0 };
                    let up = prev_row[i];
                    let up_left = if i >= bpp { prev_row[i - bpp] } else { 0 };
                    row[i] = row[i].wrapping_add(paeth(left, up, up_left));
                }
            }
            other => {
                return Err(FilterError::Broken(format!("unexpected PNG row filter {}", other)))
            }
        }
        out.extend_from_slice(&row);
        prev_row = row;
    }
    Ok(out)
}

fn paeth(a: u8, b: u8, c: u8) -> u8 {
    let p = a as i16 + b as i16 - c as i16;
    let pa = (p - a as i16).abs();
    let pb = (p - b as i16).abs();
    let pc = (p - c as i16).abs();
    if pa <= pb && pa <= pc {
        a
    } else if pb <= pc {
        b
    } else {
        c
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::object::Object;

    fn params(predictor: i64, columns: i64) -> Dictionary {
        let mut d = Dictionary::new();
        d.set("Predictor", Object::Integer(predictor));
        d.set("Columns", Object::Integer(columns));
        d
    }

    #[test]
    fn passthrough_without_params() {
        assert_eq!(remove_predictors(vec![1, 2, 3], None).unwrap(), vec![1, 2, 3]);
    }

    #[test]
    fn tiff_predictor_is_unsupported() {
        let p = params(2, 4);
        assert!(matches!(
            remove_predictors(vec![0; 8], Some(&p)),
            Err(FilterError::Unsupported(_))
        ));
    }

    #[test]
    fn png_none_strips_tag_bytes() {
        let p = params(10, 3);
        let data = vec![0, 1, 2, 3, 0, 4, 5, 6];
        assert_eq!(remove_predictors(data, Some(&p)).unwrap(), vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn png_sub_accumulates_left() {
        let p = params(12, 4);
        // filter 1 (Sub): 1, +1, +1, +1 -> 1 2 3 4
        let data = vec![1, 1, 1, 1, 1];
        assert_eq!(remove_predictors(data, Some(&p)).unwrap(), vec![1, 2, 3, 4]);
    }

    #[test]
    fn png_up_accumulates_previous_row() {
        let p = params(12, 3);
        // row 1: filter 0, literal; row 2: filter 2 (Up), adds row 1
        let data = vec![0, 10, 20, 30, 2, 1, 1, 1];
        assert_eq!(remove_predictors(data, Some(&p)).unwrap(), vec![10, 20, 30, 11, 21, 31]);
    }

    #[test]
    fn png_paeth_row() {
        let p = params(15, 2);
        // first row Paeth with zero neighbors degrades to Sub
        let data = vec![4, 5, 5];
        assert_eq!(remove_predictors(data, Some(&p)).unwrap(), vec![5, 10]);
    }
}
