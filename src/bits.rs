//! Bit sources for decoding.
//!
//! The decoder consumes any `IntoIterator<Item = bool>`; `false` is a 0 bit.
//! [`BitReader`] adapts packed bytes.

/// MSB-first reader over packed bytes.
///
/// The bit length is explicit so that padding in the final byte is never
/// decoded.
#[derive(Debug, Clone)]
pub struct BitReader<'a> {
    data: &'a [u8],
    pos: usize,
    len: usize,
}

impl<'a> BitReader<'a> {
    /// Read every bit of `data`.
    pub fn new(data: &'a [u8]) -> Self {
        Self::with_len(data, data.len() * 8)
    }

    /// Read the first `len` bits of `data`; `len` is clamped to the data size.
    pub fn with_len(data: &'a [u8], len: usize) -> Self {
        Self {
            data,
            pos: 0,
            len: len.min(data.len() * 8),
        }
    }

    /// Whether another bit is available.
    pub fn has_next_bit(&self) -> bool {
        self.pos < self.len
    }
}

impl Iterator for BitReader<'_> {
    type Item = bool;

    fn next(&mut self) -> Option<bool> {
        if !self.has_next_bit() {
            return None;
        }
        let byte = self.data[self.pos / 8];
        let bit = (byte >> (7 - self.pos % 8)) & 1 != 0;
        self.pos += 1;
        Some(bit)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.len - self.pos;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for BitReader<'_> {}

/// Parse a string of `'0'`/`'1'` characters, ignoring whitespace.
///
/// Returns `None` on any other character.
pub fn bits_from_str(text: &str) -> Option<Vec<bool>> {
    text.chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| match c {
            '0' => Some(false),
            '1' => Some(true),
            _ => None,
        })
        .collect()
}
