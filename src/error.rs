//! Error types for prefix-code construction, table restore and decoding.

use crate::node::Symbol;
use thiserror::Error;

/// Error variants for Huffman operations.
#[derive(Debug, Error)]
pub enum Error {
    /// A symbol line of a code table is not a non-negative decimal integer.
    #[error("line {line}: invalid symbol {text:?}")]
    InvalidSymbol {
        /// 1-based line number in the table text.
        line: usize,
        /// The offending line.
        text: String,
    },

    /// A symbol line was the last line of the table.
    #[error("line {line}: symbol has no code line")]
    MissingCode {
        /// 1-based line number of the dangling symbol.
        line: usize,
    },

    /// A code contains a character other than `'0'` or `'1'`.
    #[error("code for symbol {symbol} contains {found:?}")]
    InvalidBit {
        /// Symbol the code was assigned to.
        symbol: Symbol,
        /// The offending character.
        found: char,
    },

    /// A code is longer than [`crate::MAX_CODE_LEN`].
    #[error("code for symbol {symbol} is {len} bits long")]
    CodeTooLong {
        /// Symbol the code was assigned to.
        symbol: Symbol,
        /// Length of the rejected code.
        len: usize,
    },

    /// A code equals, extends, or is a prefix of an already assigned code.
    #[error("code for symbol {symbol} collides with another code")]
    PrefixConflict {
        /// Symbol whose code could not be placed.
        symbol: Symbol,
    },

    /// The same symbol appears twice in a table.
    #[error("symbol {symbol} is listed more than once")]
    DuplicateSymbol {
        /// The repeated symbol.
        symbol: Symbol,
    },

    /// The restored tree has an internal node with a single child.
    #[error("code table is incomplete")]
    IncompleteTable,

    /// The bit source ran out in the middle of a code.
    #[error("bitstream truncated after {bits} bits")]
    TruncatedStream {
        /// Number of bits consumed before exhaustion.
        bits: u64,
    },

    /// Bits were presented to a tree without symbols.
    #[error("cannot decode with an empty code")]
    EmptyTree,

    /// A decoded symbol does not fit in a byte.
    #[error("symbol {symbol} does not fit in a byte")]
    SymbolOutOfRange {
        /// The decoded symbol.
        symbol: Symbol,
    },

    /// An I/O error occurred while reading or writing a table or output.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// A specialized Result type for Huffman operations.
pub type Result<T> = std::result::Result<T, Error>;
