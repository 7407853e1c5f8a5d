//! xref.rs
//!
//! Cross-reference sections. A classical `xref` table and a `/Type /XRef`
//! stream both decode into the same [`XRef`] structure; the document keeps
//! one `XRef` per incremental update and resolves newest to oldest.

use crate::error::{Error, ParseError, ParseErrorKind};
use crate::object::Stream;

use std::collections::BTreeMap;

pub const MAX_GEN: u16 = 65535;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum XRefEntry {
    /// Slot not in use
    Free { number: u32, generation: u16 },
    /// Object parseable at `offset`
    InUse { number: u32, generation: u16, offset: u64 },
    /// Object lives inside the `ObjStm` numbered `container`, at
    /// `index` within it. Generation is always 0 for compressed objects.
    Compressed { number: u32, container: u32, index: u32 },
}

impl XRefEntry {
    pub fn number(&self) -> u32 {
        match self {
            XRefEntry::Free { number, .. }
            | XRefEntry::InUse { number, .. }
            | XRefEntry::Compressed { number, .. } => *number,
        }
    }

    pub fn generation(&self) -> u16 {
        match self {
            XRefEntry::Free { generation, .. } | XRefEntry::InUse { generation, .. } => *generation,
            XRefEntry::Compressed { .. } => 0,
        }
    }
}

/// One cross-reference section: at most one entry per object number,
/// bucketed by entry kind.
#[derive(Debug, Clone, Default)]
pub struct XRef {
    pub free: BTreeMap<u32, XRefEntry>,
    pub in_use: BTreeMap<u32, XRefEntry>,
    pub compressed: BTreeMap<u32, XRefEntry>,
}

impl XRef {
    pub fn new() -> Self {
        XRef::default()
    }

    pub fn len(&self) -> usize {
        self.free.len() + self.in_use.len() + self.compressed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn add_entry(&mut self, entry: XRefEntry) {
        if entry.generation() > MAX_GEN {
            log::warn!(
                "incorrect generation {} for entry {}",
                entry.generation(),
                entry.number()
            );
        }
        match entry {
            XRefEntry::Free { number, .. } => self.free.insert(number, entry),
            XRefEntry::InUse { number, .. } => self.in_use.insert(number, entry),
            XRefEntry::Compressed { number, .. } => self.compressed.insert(number, entry),
        };
    }

    /// Lossless union; existing entries win, so merging oldest into newest
    /// keeps the newest definition of every slot.
    pub fn merge(&mut self, other: &XRef) {
        for entry in other
            .free
            .values()
            .chain(other.in_use.values())
            .chain(other.compressed.values())
        {
            let map = match entry {
                XRefEntry::Free { .. } => &mut self.free,
                XRefEntry::InUse { .. } => &mut self.in_use,
                XRefEntry::Compressed { .. } => &mut self.compressed,
            };
            map.entry(entry.number()).or_insert(*entry);
        }
    }

    /// Decodes a `/Type /XRef` stream. Rows are `W[0]+W[1]+W[2]` big-endian
    /// bytes; a zero width defaults that column to zero; the optional
    /// `/Index` array partitions rows into `[first count ...]` ranges.
    pub fn from_stream(stream: &Stream) -> Result<XRef, Error> {
        let fail = |msg: &str| {
            Error::Parse(ParseError::new(ParseErrorKind::BadStream, 0, format!("xref stream: {}", msg)))
        };

        let widths: Vec<usize> = stream
            .dict
            .get_array("W")
            .ok_or_else(|| fail("missing /W"))?
            .iter()
            .map(|o| o.as_i64().unwrap_or(0).max(0) as usize)
            .collect();
        if widths.len() != 3 {
            return Err(fail("three /W column widths expected"));
        }
        let row_size: usize = widths.iter().sum();
        if row_size == 0 {
            return Err(fail("zero /W row size"));
        }

        let size = stream.dict.get_i64("Size").ok_or_else(|| fail("missing /Size"))?;
        let ranges: Vec<(i64, i64)> = match stream.dict.get_array("Index") {
            Some(index) => {
                let nums: Vec<i64> = index.iter().filter_map(|o| o.as_i64()).collect();
                if nums.len() % 2 != 0 {
                    return Err(fail("odd /Index length"));
                }
                nums.chunks(2).map(|p| (p[0], p[1])).collect()
            }
            None => vec![(0, size)],
        };

        let data = stream.filtered().map_err(Error::Filter)?;
        let mut rows = data.chunks_exact(row_size);

        let mut xref = XRef::new();
        for (first, count) in ranges {
            let mut objnum = first;
            for _ in 0..count {
                let row = match rows.next() {
                    Some(r) => r,
                    None => {
                        log::warn!("xref stream ran out of rows");
                        return Ok(xref);
                    }
                };
                let mut cols = [0u64; 3];
                let mut at = 0;
                for (j, width) in widths.iter().enumerate() {
                    // a zero-width column is simply absent and defaults to 0
                    for &b in &row[at..at + width] {
                        cols[j] = cols[j] << 8 | b as u64;
                    }
                    at += width;
                }
                match cols[0] {
                    0 => xref.add_entry(XRefEntry::Free {
                        number: objnum as u32,
                        generation: cols[2] as u16,
                    }),
                    1 => xref.add_entry(XRefEntry::InUse {
                        number: objnum as u32,
                        generation: cols[2] as u16,
                        offset: cols[1],
                    }),
                    2 => xref.add_entry(XRefEntry::Compressed {
                        number: objnum as u32,
                        container: cols[1] as u32,
                        index: cols[2] as u32,
                    }),
                    // PDF 1.5-1.7 treats any other type as a null object
                    other => log::debug!("undefined xref row type {}", other),
                }
                objnum += 1;
            }
        }
        Ok(xref)
    }
}
