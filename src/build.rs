//! Tree construction.
//!
//! Two independent paths produce a [`HuffmanTree`]:
//!
//! - **From frequencies**: Huffman's greedy merge. Every symbol with a positive
//!   count becomes a leaf; the two lightest subtrees are merged until one remains.
//!   Ties are broken by arrival order, so the shape is reproducible across runs.
//! - **From a code table**: codes are inserted one by one, creating branches as
//!   they are walked. Intermediate states may contain one-child branches; the
//!   tree is validated only after the last code is inserted.

use std::cmp::Ordering;
use std::collections::{BTreeSet, BinaryHeap};

use tracing::debug;

use crate::error::{Error, Result};
use crate::node::{Node, Symbol};
use crate::tree::HuffmanTree;

/// Longest code accepted when restoring a table.
pub const MAX_CODE_LEN: usize = 256;

/// Heap entry ordered by `(weight, seq)`, lightest and earliest first.
struct Pending {
    weight: u64,
    seq: u64,
    node: Node,
}

impl Ord for Pending {
    fn cmp(&self, other: &Self) -> Ordering {
        // BinaryHeap is a max-heap; reverse for min-priority.
        (other.weight, other.seq).cmp(&(self.weight, self.seq))
    }
}

impl PartialOrd for Pending {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Pending {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Pending {}

impl HuffmanTree {
    /// Build an optimal prefix code from symbol frequencies.
    ///
    /// `counts[s]` is the number of occurrences of symbol `s`. Symbols with a
    /// count of zero or less get no code. An empty or all-zero table yields the
    /// empty tree; a single positive count yields a one-leaf tree whose code is
    /// the empty bit-string.
    ///
    /// The first node removed from the heap becomes the left child of each
    /// merge, the second the right.
    pub fn from_frequencies(counts: &[i64]) -> Self {
        let mut heap = BinaryHeap::new();
        let mut seq = 0u64;
        for (s, &count) in counts.iter().enumerate() {
            if count > 0 {
                let weight = count as u64;
                heap.push(Pending {
                    weight,
                    seq,
                    node: Node::leaf(s as Symbol, weight),
                });
                seq += 1;
            }
        }
        let alphabet = heap.len();

        let root = loop {
            match (heap.pop(), heap.pop()) {
                (Some(first), Some(second)) => {
                    let node = Node::merge(first.node, second.node);
                    heap.push(Pending {
                        weight: node.weight(),
                        seq,
                        node,
                    });
                    seq += 1;
                }
                (last, _) => break last.map(|p| p.node),
            }
        };

        let tree = HuffmanTree { root };
        debug!(
            alphabet,
            max_code_len = tree.max_code_len(),
            "built prefix code from frequencies"
        );
        tree
    }

    /// Restore a tree from `(symbol, code)` pairs, in any order.
    ///
    /// Each code is a string of `'0'` (left) and `'1'` (right). A zero-length
    /// code assigns the symbol to the root and is only valid on its own.
    ///
    /// # Errors
    /// - [`Error::InvalidBit`] for characters other than `'0'`/`'1'`.
    /// - [`Error::CodeTooLong`] for codes over [`MAX_CODE_LEN`] bits.
    /// - [`Error::DuplicateSymbol`] if a symbol is listed twice.
    /// - [`Error::PrefixConflict`] if two codes are equal or one prefixes the other.
    /// - [`Error::IncompleteTable`] if some branch ends up with a single child.
    pub fn from_table<I, S>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (Symbol, S)>,
        S: AsRef<str>,
    {
        let mut builder = TableBuilder::default();
        for (symbol, code) in pairs {
            builder.insert(symbol, code.as_ref())?;
        }
        builder.finish()
    }
}

/// A tree under construction; branches may transiently lack a child.
#[derive(Default)]
struct Partial {
    symbol: Option<Symbol>,
    left: Option<Box<Partial>>,
    right: Option<Box<Partial>>,
}

impl Partial {
    fn is_vacant(&self) -> bool {
        self.symbol.is_none() && self.left.is_none() && self.right.is_none()
    }

    fn into_node(self) -> Result<Node> {
        match (self.symbol, self.left, self.right) {
            (Some(symbol), None, None) => Ok(Node::leaf(symbol, 0)),
            (None, Some(left), Some(right)) => Ok(Node::Internal {
                left: Box::new(left.into_node()?),
                right: Box::new(right.into_node()?),
                weight: 0,
            }),
            _ => Err(Error::IncompleteTable),
        }
    }
}

#[derive(Default)]
struct TableBuilder {
    root: Partial,
    seen: BTreeSet<Symbol>,
}

impl TableBuilder {
    fn insert(&mut self, symbol: Symbol, code: &str) -> Result<()> {
        if let Some(found) = code.chars().find(|&c| c != '0' && c != '1') {
            return Err(Error::InvalidBit { symbol, found });
        }
        if code.len() > MAX_CODE_LEN {
            return Err(Error::CodeTooLong {
                symbol,
                len: code.len(),
            });
        }
        if !self.seen.insert(symbol) {
            return Err(Error::DuplicateSymbol { symbol });
        }

        let mut node = &mut self.root;
        for bit in code.bytes() {
            if node.symbol.is_some() {
                return Err(Error::PrefixConflict { symbol });
            }
            let slot = if bit == b'0' {
                &mut node.left
            } else {
                &mut node.right
            };
            node = &mut **slot.get_or_insert_with(Box::default);
        }
        if !node.is_vacant() {
            return Err(Error::PrefixConflict { symbol });
        }
        node.symbol = Some(symbol);
        Ok(())
    }

    fn finish(self) -> Result<HuffmanTree> {
        let entries = self.seen.len();
        let root = if entries == 0 {
            None
        } else {
            Some(self.root.into_node()?)
        };
        debug!(entries, "restored prefix code from table");
        Ok(HuffmanTree { root })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn code_of(tree: &HuffmanTree, symbol: Symbol) -> Option<String> {
        tree.to_table()
            .into_iter()
            .find(|(s, _)| *s == symbol)
            .map(|(_, code)| code)
    }

    #[test]
    fn test_no_positive_counts_is_empty() {
        assert!(HuffmanTree::from_frequencies(&[]).is_empty());
        assert!(HuffmanTree::from_frequencies(&[0, 0, 0]).is_empty());
        assert!(HuffmanTree::from_frequencies(&[-3, 0, -1]).is_empty());
    }

    #[test]
    fn test_single_symbol_is_root_leaf() {
        let tree = HuffmanTree::from_frequencies(&[0, -2, 9, 0]);
        assert_eq!(tree.root(), Some(&Node::leaf(2, 9)));
        assert_eq!(tree.to_table(), vec![(2, String::new())]);
    }

    #[test]
    fn test_lightest_symbols_merge_first() {
        // A:5 B:2 C:1 D:1
        let tree = HuffmanTree::from_frequencies(&[5, 2, 1, 1]);
        let root = tree.root().unwrap();
        assert_eq!(root.weight(), 9);

        // C and D share the deepest branch.
        let c = code_of(&tree, 2).unwrap();
        let d = code_of(&tree, 3).unwrap();
        assert_eq!(c.len(), 3);
        assert_eq!(d.len(), 3);
        assert_eq!(c[..2], d[..2]);
        assert_eq!(code_of(&tree, 1).unwrap().len(), 2);
        assert_eq!(code_of(&tree, 0).unwrap().len(), 1);

        // C arrived before D, so C is the left child.
        assert!(c.ends_with('0'));
        assert!(d.ends_with('1'));
    }

    #[test]
    fn test_ties_are_broken_by_arrival() {
        let tree = HuffmanTree::from_frequencies(&[1, 1, 1, 1]);
        let table = tree.to_table();
        assert_eq!(
            table,
            vec![
                (0, "00".to_string()),
                (1, "01".to_string()),
                (2, "10".to_string()),
                (3, "11".to_string()),
            ]
        );
        // Reproducible.
        assert_eq!(HuffmanTree::from_frequencies(&[1, 1, 1, 1]), tree);
    }

    #[test]
    fn test_merged_node_queues_behind_equal_leaves() {
        // After merging 0 and 1 (weight 2), the merged node ties with symbol 2
        // but arrived later, so symbol 2 is removed first and goes left.
        let tree = HuffmanTree::from_frequencies(&[1, 1, 2, 4]);
        assert_eq!(code_of(&tree, 2).unwrap(), "10");
        assert_eq!(code_of(&tree, 0).unwrap(), "110");
        assert_eq!(code_of(&tree, 1).unwrap(), "111");
        assert_eq!(code_of(&tree, 3).unwrap(), "0");
    }

    #[test]
    fn test_from_table_builds_expected_shape() {
        let tree = HuffmanTree::from_table(vec![(1, "10"), (0, "0"), (2, "11")]).unwrap();
        let expected = Node::Internal {
            left: Box::new(Node::leaf(0, 0)),
            right: Box::new(Node::Internal {
                left: Box::new(Node::leaf(1, 0)),
                right: Box::new(Node::leaf(2, 0)),
                weight: 0,
            }),
            weight: 0,
        };
        assert_eq!(tree.root(), Some(&expected));
    }

    #[test]
    fn test_from_table_empty_and_single() {
        let empty: Vec<(Symbol, &str)> = Vec::new();
        assert!(HuffmanTree::from_table(empty).unwrap().is_empty());

        let single = HuffmanTree::from_table(vec![(65, "")]).unwrap();
        assert_eq!(single.root(), Some(&Node::leaf(65, 0)));
    }

    #[test]
    fn test_from_table_rejects_bad_characters() {
        let err = HuffmanTree::from_table(vec![(0, "0"), (1, "1x")]).unwrap_err();
        assert!(matches!(err, Error::InvalidBit { symbol: 1, found: 'x' }));
    }

    #[test]
    fn test_from_table_rejects_prefix_conflicts() {
        // Extends an existing leaf.
        let err = HuffmanTree::from_table(vec![(0, "0"), (1, "01")]).unwrap_err();
        assert!(matches!(err, Error::PrefixConflict { symbol: 1 }));

        // Prefix of an existing leaf.
        let err = HuffmanTree::from_table(vec![(0, "01"), (1, "0")]).unwrap_err();
        assert!(matches!(err, Error::PrefixConflict { symbol: 1 }));

        // Same code twice.
        let err = HuffmanTree::from_table(vec![(0, "1"), (1, "1")]).unwrap_err();
        assert!(matches!(err, Error::PrefixConflict { symbol: 1 }));

        // Root code alongside other codes.
        let err = HuffmanTree::from_table(vec![(0, ""), (1, "1")]).unwrap_err();
        assert!(matches!(err, Error::PrefixConflict { symbol: 1 }));
    }

    #[test]
    fn test_from_table_rejects_duplicates() {
        let err = HuffmanTree::from_table(vec![(4, "0"), (4, "1")]).unwrap_err();
        assert!(matches!(err, Error::DuplicateSymbol { symbol: 4 }));
    }

    #[test]
    fn test_from_table_rejects_incomplete() {
        let err = HuffmanTree::from_table(vec![(0, "0"), (1, "10")]).unwrap_err();
        assert!(matches!(err, Error::IncompleteTable));

        let err = HuffmanTree::from_table(vec![(0, "1")]).unwrap_err();
        assert!(matches!(err, Error::IncompleteTable));
    }

    #[test]
    fn test_from_table_rejects_overlong_codes() {
        let long = "0".repeat(MAX_CODE_LEN + 1);
        let err = HuffmanTree::from_table(vec![(0, long.as_str())]).unwrap_err();
        assert!(matches!(err, Error::CodeTooLong { symbol: 0, .. }));
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn prop_frequency_build_is_reproducible(
            counts in prop::collection::vec(-10i64..100, 0..64),
        ) {
            let first = HuffmanTree::from_frequencies(&counts);
            let second = HuffmanTree::from_frequencies(&counts);
            prop_assert_eq!(&first, &second);

            let positive = counts.iter().filter(|&&c| c > 0).count();
            prop_assert_eq!(first.len(), positive);
        }

        #[test]
        fn prop_restore_reproduces_table(
            counts in prop::collection::vec(0i64..100, 0..64),
        ) {
            let table = HuffmanTree::from_frequencies(&counts).to_table();
            let restored = HuffmanTree::from_table(table.clone()).unwrap();
            prop_assert_eq!(restored.to_table(), table);
        }
    }
}
