//! Code tables.
//!
//! A code table lists one `(symbol, code)` pair per leaf. Its text form is
//! line oriented, two lines per record and no header or terminator:
//!
//! ```text
//! 97
//! 0
//! 98
//! 10
//! ```
//!
//! A single-symbol table has an empty code line.

use std::io::{BufRead, Write};

use crate::error::{Error, Result};
use crate::node::{Node, Symbol};
use crate::tree::HuffmanTree;

impl HuffmanTree {
    /// Every leaf with its code, depth first, left before right.
    ///
    /// `'0'` marks a left descent and `'1'` a right descent. The empty tree
    /// yields no pairs.
    pub fn to_table(&self) -> Vec<(Symbol, String)> {
        let mut table = Vec::new();
        let mut stack: Vec<(&Node, String)> = Vec::new();
        if let Some(root) = &self.root {
            stack.push((root, String::new()));
        }
        while let Some((node, code)) = stack.pop() {
            match node {
                Node::Leaf { symbol, .. } => table.push((*symbol, code)),
                Node::Internal { left, right, .. } => {
                    let mut right_code = code.clone();
                    right_code.push('1');
                    stack.push((right, right_code));

                    let mut left_code = code;
                    left_code.push('0');
                    stack.push((left, left_code));
                }
            }
        }
        table
    }

    /// Save the code table in text form.
    pub fn write_to<W: Write>(&self, output: W) -> Result<()> {
        write_table(&self.to_table(), output)
    }

    /// Restore a tree from a code table in text form.
    pub fn read_from<R: BufRead>(input: R) -> Result<Self> {
        HuffmanTree::from_table(read_table(input)?)
    }
}

/// Write `(symbol, code)` pairs in text form.
pub fn write_table<W, S>(table: &[(Symbol, S)], mut output: W) -> Result<()>
where
    W: Write,
    S: AsRef<str>,
{
    for (symbol, code) in table {
        writeln!(output, "{}", symbol)?;
        writeln!(output, "{}", code.as_ref())?;
    }
    output.flush()?;
    Ok(())
}

/// Parse a text-form code table into `(symbol, code)` pairs.
///
/// Only the record structure and symbol lines are checked here; codes are
/// validated when the pairs are passed to [`HuffmanTree::from_table`].
///
/// # Errors
/// - [`Error::InvalidSymbol`] if a symbol line is not a non-negative integer.
///   Blank lines are symbol lines too, so a trailing blank line after the last
///   record is rejected.
/// - [`Error::MissingCode`] if the input ends right after a symbol line.
pub fn read_table<R: BufRead>(input: R) -> Result<Vec<(Symbol, String)>> {
    let mut lines = input.lines().enumerate();
    let mut table = Vec::new();
    while let Some((idx, line)) = lines.next() {
        let line = line?;
        let symbol = line
            .trim()
            .parse::<Symbol>()
            .map_err(|_| Error::InvalidSymbol {
                line: idx + 1,
                text: line.clone(),
            })?;
        let code = match lines.next() {
            Some((_, code)) => code?,
            None => return Err(Error::MissingCode { line: idx + 1 }),
        };
        table.push((symbol, code));
    }
    Ok(table)
}
