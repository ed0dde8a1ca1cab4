//! # Huffman Prefix Codes
//!
//! *Minimum-redundancy codes from symbol frequencies, saved as plain-text tables.*
//!
//! ## Intuition First
//!
//! Morse code gives the letter `E` a single dot because `E` is common. Huffman
//! coding makes that idea exact: frequent symbols get short codes, rare symbols
//! long ones, and no code is the prefix of another so a bitstream can be read
//! left to right without separators.
//!
//! The code is a binary tree. Each leaf is a symbol; the path from the root
//! (`0` = left, `1` = right) is its code.
//!
//! ## The Problem
//!
//! Given counts `f_s` for an alphabet `S`, find a prefix code with code
//! lengths `l_s` minimizing the total encoded length:
//!
//! ```text
//! L = sum_{s in S} f_s * l_s
//! ```
//!
//! ## Historical Context
//!
//! ```text
//! 1948  Shannon     Entropy as the lower bound on average code length
//! 1949  Fano        Shannon-Fano coding: top-down, not always optimal
//! 1952  Huffman     Bottom-up greedy merge: provably optimal prefix code
//! 1964  Schwartz    Canonical codes: transmit lengths instead of trees
//! 1985  Vitter      Adaptive Huffman coding
//! ```
//!
//! ## Algorithm
//!
//! Put every symbol with a positive count into a min-priority queue. Remove
//! the two lightest subtrees, join them under a new branch weighing their sum,
//! and push the branch back. The last subtree left is the code tree. Equal
//! weights are dequeued in arrival order, which makes the tree shape
//! reproducible.
//!
//! ## Complexity Analysis
//!
//! - **Build**: $O(n \log n)$ for `n` symbols with positive counts.
//! - **Restore**: $O(\sum l_s)$, linear in the table size.
//! - **Decode**: $O(1)$ per bit.
//!
//! ## Failure Modes
//!
//! 1. **Malformed tables**: non-numeric symbols, codes with characters other
//!    than `0`/`1`, colliding or incomplete codes.
//! 2. **Truncated streams**: the input ends in the middle of a code.
//!
//! Both are reported as [`Error`] values; nothing is partially recovered.
//!
//! ## Usage
//!
//! ```
//! use huffman::{bits_from_str, HuffmanTree};
//!
//! let tree = HuffmanTree::from_frequencies(&[5, 2, 1, 1]);
//!
//! let mut saved = Vec::new();
//! tree.write_to(&mut saved)?;
//! let restored = HuffmanTree::read_from(saved.as_slice())?;
//!
//! // Symbol 0 has the one-bit code "1"; symbol 1 has "00".
//! let bits = bits_from_str("1 00 1").unwrap();
//! assert_eq!(restored.decode(bits)?, vec![0, 1, 0]);
//! # Ok::<(), huffman::Error>(())
//! ```
//!
//! ## References
//!
//! - Huffman, D. A. (1952). "A Method for the Construction of Minimum-Redundancy Codes."
//! - Cover, T. M., & Thomas, J. A. (2006). *Elements of Information Theory*, ch. 5.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod bits;
pub mod build;
pub mod decode;
pub mod error;
pub mod node;
pub mod table;
pub mod tree;

pub use bits::{bits_from_str, BitReader};
pub use build::MAX_CODE_LEN;
pub use decode::Decoder;
pub use error::{Error, Result};
pub use node::{Node, Symbol};
pub use table::{read_table, write_table};
pub use tree::HuffmanTree;

/// Size of a frequency table indexed by byte value.
pub const BYTE_ALPHABET: usize = 256;
