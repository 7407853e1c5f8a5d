//! buffer.rs
//!
//! Bidirectional byte cursor over a seekable input. The buffer keeps one
//! sliding window of bytes and extends it forward or backward (block by
//! block) whenever the cursor walks past either edge. Trailer discovery
//! needs the backward direction, everything else reads forward.

use std::io::{Cursor, Read, Seek, SeekFrom};

pub const DEFAULT_BLOCK_SIZE: usize = 1024;

/// Any random-access byte source the engine can read from.
pub trait PdfSource: Read + Seek {}

impl<T: Read + Seek> PdfSource for T {}

/// Captured cursor state for cheap backtracking, see [`Buffer::get_state`].
#[derive(Debug, Clone)]
pub struct BufferState {
    window_start: u64,
    index: i64,
    data: Vec<u8>,
}

pub struct Buffer {
    source: Box<dyn PdfSource>,
    block_size: usize,
    /// Absolute offset of `data[0]` within the source
    window_start: u64,
    /// Cursor position relative to `window_start`. May temporarily leave
    /// `0..data.len()`; the next access extends the window.
    index: i64,
    data: Vec<u8>,
}

impl Buffer {
    /// Opens a buffer over `source` positioned at `offset`. Negative offsets
    /// are measured from the end of the input.
    pub fn new(source: impl PdfSource + 'static, offset: i64) -> std::io::Result<Self> {
        Self::with_block_size(source, offset, DEFAULT_BLOCK_SIZE)
    }

    pub fn with_block_size(
        source: impl PdfSource + 'static,
        offset: i64,
        block_size: usize,
    ) -> std::io::Result<Self> {
        let mut buf = Buffer {
            source: Box::new(source),
            block_size,
            window_start: 0,
            index: 0,
            data: Vec::new(),
        };
        buf.reset(offset)?;
        Ok(buf)
    }

    pub fn from_bytes(bytes: Vec<u8>, offset: i64) -> Self {
        // Cursor I/O cannot fail
        Self::new(Cursor::new(bytes), offset).expect("in-memory source")
    }

    /// Absolute offset of the cursor within the source.
    pub fn position(&self) -> u64 {
        (self.window_start as i64 + self.index).max(0) as u64
    }

    /// Seeks the cursor. Negative offsets are measured from the end; the
    /// window is reloaded from the target position.
    pub fn reset(&mut self, offset: i64) -> std::io::Result<()> {
        if offset >= 0 {
            self.read_head(offset as u64)
        } else {
            self.read_tail(offset.unsigned_abs())
        }
    }

    fn read_head(&mut self, offset: u64) -> std::io::Result<()> {
        self.source.seek(SeekFrom::Start(offset))?;
        let mut data = vec![0u8; self.block_size];
        let n = read_up_to(&mut self.source, &mut data)?;
        data.truncate(n);
        self.window_start = offset;
        self.data = data;
        self.index = 0;
        Ok(())
    }

    fn read_tail(&mut self, from_end: u64) -> std::io::Result<()> {
        let len = self.source.seek(SeekFrom::End(0))?;
        let start = len.saturating_sub(from_end);
        self.source.seek(SeekFrom::Start(start))?;
        let mut data = Vec::new();
        self.source.read_to_end(&mut data)?;
        self.window_start = start;
        self.index = data.len() as i64 - 1;
        self.data = data;
        Ok(())
    }

    fn extend_forward(&mut self) -> bool {
        let offset = self.window_start + self.data.len() as u64;
        if self.source.seek(SeekFrom::Start(offset)).is_err() {
            return false;
        }
        let mut block = vec![0u8; self.block_size];
        match read_up_to(&mut self.source, &mut block) {
            Ok(0) | Err(_) => false,
            Ok(n) => {
                block.truncate(n);
                self.data.extend_from_slice(&block);
                true
            }
        }
    }

    fn extend_backward(&mut self) -> bool {
        if self.window_start == 0 {
            return false;
        }
        let size = self.window_start.min(self.block_size as u64);
        let offset = self.window_start - size;
        if self.source.seek(SeekFrom::Start(offset)).is_err() {
            return false;
        }
        let mut block = vec![0u8; size as usize];
        if self.source.read_exact(&mut block).is_err() {
            return false;
        }
        block.extend_from_slice(&self.data);
        self.data = block;
        self.window_start = offset;
        self.index += size as i64;
        true
    }

    /// Peeks the byte at the cursor, extending the window if needed.
    /// `None` means the cursor walked past either end of the input.
    pub fn current(&mut self) -> Option<u8> {
        while self.index >= self.data.len() as i64 {
            if !self.extend_forward() {
                return None;
            }
        }
        while self.index < 0 {
            if !self.extend_backward() {
                return None;
            }
        }
        Some(self.data[self.index as usize])
    }

    /// Returns the current byte and advances the cursor.
    pub fn next(&mut self) -> Option<u8> {
        let res = self.current();
        self.index += 1;
        res
    }

    /// Returns the current byte and retreats the cursor.
    pub fn prev(&mut self) -> Option<u8> {
        let res = self.current();
        self.index -= 1;
        res
    }

    /// `n` single forward steps, concatenated. `None` if the input ran out.
    pub fn read(&mut self, n: usize) -> Option<Vec<u8>> {
        let mut res = Vec::with_capacity(n);
        for _ in 0..n {
            res.push(self.next()?);
        }
        Some(res)
    }

    /// `n` single backward steps, concatenated in source order.
    pub fn read_backward(&mut self, n: usize) -> Option<Vec<u8>> {
        let mut res = std::collections::VecDeque::with_capacity(n);
        for _ in 0..n {
            res.push_front(self.prev()?);
        }
        Some(res.into_iter().collect())
    }

    pub fn is_eof(&mut self) -> bool {
        self.current().is_none()
    }

    /// Captures the cursor + window for later [`Buffer::set_state`]. Used
    /// for speculative parses ("try reference, fall back to numeric").
    pub fn get_state(&self) -> BufferState {
        BufferState {
            window_start: self.window_start,
            index: self.index,
            data: self.data.clone(),
        }
    }

    pub fn set_state(&mut self, state: BufferState) {
        self.window_start = state.window_start;
        self.index = state.index;
        self.data = state.data;
    }
}

fn read_up_to(source: &mut dyn PdfSource, buf: &mut [u8]) -> std::io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match source.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(filled)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small(offset: i64) -> Buffer {
        Buffer::with_block_size(Cursor::new(b"123".to_vec()), offset, 2).unwrap()
    }

    #[test]
    fn forward_reading() {
        let mut b = small(0);
        assert_eq!(b.next(), Some(b'1'));
        assert_eq!(b.next(), Some(b'2'));
        assert_eq!(b.next(), Some(b'3'));
        assert_eq!(b.next(), None);

        let mut b = small(1);
        assert_eq!(b.next(), Some(b'2'));
        assert_eq!(b.current(), Some(b'3'));
        assert_eq!(b.next(), Some(b'3'));
        assert_eq!(b.next(), None);
    }

    #[test]
    fn backward_reading() {
        let mut b = small(-2);
        assert_eq!(b.prev(), Some(b'3'));
        assert_eq!(b.current(), Some(b'2'));
        assert_eq!(b.prev(), Some(b'2'));
        assert_eq!(b.prev(), Some(b'1'));
        assert_eq!(b.prev(), None);
    }

    #[test]
    fn forward_backward_symmetry() {
        let mut b = small(1);
        assert_eq!(b.current(), Some(b'2'));
        assert_eq!(b.prev(), Some(b'2'));
        assert_eq!(b.current(), Some(b'1'));
        assert_eq!(b.next(), Some(b'1'));
        assert_eq!(b.current(), Some(b'2'));
    }

    #[test]
    fn cursor_round_trip() {
        // k steps forward then k steps backward restores the cursor and
        // yields the reverse byte sequence
        let mut b = Buffer::with_block_size(Cursor::new(b"abcdef".to_vec()), 0, 2).unwrap();
        let fwd = b.read(5).unwrap();
        let bwd = b.read_backward(5).unwrap();
        assert_eq!(fwd, bwd);
        assert_eq!(b.current(), Some(b'a'));
    }

    #[test]
    fn read_over_the_edge() {
        let mut b = small(0);
        assert_eq!(b.read(3).unwrap(), b"123");
        assert_eq!(b.current(), None);

        let mut b = small(0);
        assert_eq!(b.read(2).unwrap(), b"12");
        assert_eq!(b.current(), Some(b'3'));

        let mut b = small(0);
        assert_eq!(b.read(4), None);
    }

    #[test]
    fn state_restore() {
        let mut b = small(0);
        b.next();
        let state = b.get_state();
        b.read(2);
        assert_eq!(b.current(), None);
        b.set_state(state);
        assert_eq!(b.current(), Some(b'2'));
        assert_eq!(b.position(), 1);
    }

    #[test]
    fn tail_reset_on_short_input() {
        let mut b = Buffer::from_bytes(b"tiny".to_vec(), -1024);
        assert_eq!(b.current(), Some(b'y'));
        assert_eq!(b.position(), 3);
    }
}
