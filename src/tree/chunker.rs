//! Fixed-size chunk reader.

use std::io::{ErrorKind, Read};

/// Lazy sequence of fixed-size chunks read from a byte stream.
///
/// Every chunk except the last is exactly `chunk_size` bytes. An empty input
/// yields exactly one empty chunk, so the tree always has a root. A read error
/// is yielded once and ends the sequence.
pub struct ChunkReader<R> {
    reader: R,
    chunk_size: usize,
    emitted: usize,
    done: bool,
}

impl<R: Read> ChunkReader<R> {
    /// Create a reader over `reader`. Returns `None` when `chunk_size` is zero.
    pub fn new(reader: R, chunk_size: usize) -> Option<Self> {
        if chunk_size == 0 {
            return None;
        }
        Some(Self {
            reader,
            chunk_size,
            emitted: 0,
            done: false,
        })
    }

    /// Number of chunks produced so far.
    pub fn chunks_emitted(&self) -> usize {
        self.emitted
    }

    /// Fill `buf` until it is full or the input ends. Returns the byte count.
    fn fill(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        let mut filled = 0;
        while filled < buf.len() {
            match self.reader.read(&mut buf[filled..]) {
                Ok(0) => break,
                Ok(n) => filled += n,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        }
        Ok(filled)
    }
}

impl<R: Read> Iterator for ChunkReader<R> {
    type Item = std::io::Result<Vec<u8>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let mut buf = vec![0u8; self.chunk_size];
        let filled = match self.fill(&mut buf) {
            Ok(n) => n,
            Err(e) => {
                self.done = true;
                return Some(Err(e));
            }
        };

        if filled < self.chunk_size {
            self.done = true;
            // A short chunk ends the input; an empty one only counts when nothing came before.
            if filled == 0 && self.emitted > 0 {
                return None;
            }
        }

        buf.truncate(filled);
        self.emitted += 1;
        Some(Ok(buf))
    }
}
