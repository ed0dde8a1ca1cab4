//! Bitstream decoding.
//!
//! Decoding walks the tree from the root, one bit per step: 0 goes left,
//! 1 goes right. Reaching a leaf emits its symbol and returns to the root.
//! A stream must end on a symbol boundary.

use std::io::Write;

use tracing::debug;

use crate::error::{Error, Result};
use crate::node::{Node, Symbol};
use crate::tree::HuffmanTree;

/// A decode session over a borrowed tree.
///
/// Each session owns its cursor, so several sessions may share one tree.
#[derive(Debug, Clone)]
pub struct Decoder<'t> {
    root: Option<&'t Node>,
    /// `None` while at the root.
    cursor: Option<&'t Node>,
    bits: u64,
    symbols: u64,
}

impl<'t> Decoder<'t> {
    /// Start a session at the root of `tree`.
    pub fn new(tree: &'t HuffmanTree) -> Self {
        Self {
            root: tree.root(),
            cursor: None,
            bits: 0,
            symbols: 0,
        }
    }

    /// Consume one bit, returning the symbol if a leaf was reached.
    ///
    /// With a single-symbol tree every bit emits that symbol.
    ///
    /// # Errors
    /// Returns `Error::EmptyTree` if the tree has no symbols.
    pub fn push_bit(&mut self, bit: bool) -> Result<Option<Symbol>> {
        let root = self.root.ok_or(Error::EmptyTree)?;
        self.bits += 1;

        let current = self.cursor.unwrap_or(root);
        // Only a root leaf has no children here.
        let next = current.child(bit).unwrap_or(root);

        match next.symbol() {
            Some(symbol) => {
                self.cursor = None;
                self.symbols += 1;
                Ok(Some(symbol))
            }
            None => {
                self.cursor = Some(next);
                Ok(None)
            }
        }
    }

    /// Whether the cursor is at the root, i.e. between symbols.
    pub fn at_boundary(&self) -> bool {
        self.cursor.is_none()
    }

    /// Bits consumed so far.
    pub fn bits(&self) -> u64 {
        self.bits
    }

    /// Symbols emitted so far.
    pub fn symbols(&self) -> u64 {
        self.symbols
    }

    /// End the session once the bit source is exhausted.
    ///
    /// # Errors
    /// Returns `Error::TruncatedStream` if the last code was incomplete.
    pub fn finish(self) -> Result<()> {
        debug!(
            bits = self.bits,
            symbols = self.symbols,
            "decode session finished"
        );
        if self.at_boundary() {
            Ok(())
        } else {
            Err(Error::TruncatedStream { bits: self.bits })
        }
    }
}

impl HuffmanTree {
    /// Start a decode session.
    pub fn decoder(&self) -> Decoder<'_> {
        Decoder::new(self)
    }

    /// Decode a bit sequence into symbols.
    ///
    /// # Errors
    /// - `Error::TruncatedStream` if the bits end in the middle of a code.
    /// - `Error::EmptyTree` if bits are given to an empty tree.
    pub fn decode<I>(&self, bits: I) -> Result<Vec<Symbol>>
    where
        I: IntoIterator<Item = bool>,
    {
        let mut decoder = self.decoder();
        let mut out = Vec::new();
        for bit in bits {
            if let Some(symbol) = decoder.push_bit(bit)? {
                out.push(symbol);
            }
        }
        decoder.finish()?;
        Ok(out)
    }

    /// Decode a bit sequence, writing one byte per symbol to `output`.
    ///
    /// Returns the number of bytes written.
    ///
    /// # Errors
    /// As [`HuffmanTree::decode`], plus `Error::SymbolOutOfRange` for symbols
    /// above 255 and `Error::Io` from the writer.
    pub fn decode_to<I, W>(&self, bits: I, mut output: W) -> Result<u64>
    where
        I: IntoIterator<Item = bool>,
        W: Write,
    {
        let mut decoder = self.decoder();
        for bit in bits {
            if let Some(symbol) = decoder.push_bit(bit)? {
                let byte =
                    u8::try_from(symbol).map_err(|_| Error::SymbolOutOfRange { symbol })?;
                output.write_all(&[byte])?;
            }
        }
        output.flush()?;
        let written = decoder.symbols();
        decoder.finish()?;
        Ok(written)
    }
}
