//! The owning prefix-code tree value.

use crate::node::Node;

/// A prefix-code tree.
///
/// Produced either from symbol frequencies ([`HuffmanTree::from_frequencies`])
/// or from a saved code table ([`HuffmanTree::from_table`]). Immutable once
/// built; any number of [`crate::Decoder`] sessions may borrow it at once.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HuffmanTree {
    pub(crate) root: Option<Node>,
}

impl HuffmanTree {
    /// The tree with no symbols.
    pub fn empty() -> Self {
        Self { root: None }
    }

    /// Root node, `None` for an empty alphabet.
    pub fn root(&self) -> Option<&Node> {
        self.root.as_ref()
    }

    /// Consume the tree, returning its root.
    pub fn into_root(self) -> Option<Node> {
        self.root
    }

    /// Whether the alphabet is empty.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Number of symbols (leaves).
    pub fn len(&self) -> usize {
        self.walk().filter(|(node, _)| node.is_leaf()).count()
    }

    /// Length of the longest code. A single-symbol tree has a zero-length code.
    pub fn max_code_len(&self) -> usize {
        self.walk().map(|(_, depth)| depth).max().unwrap_or(0)
    }

    /// Every node with its depth, pre-order, left before right.
    fn walk(&self) -> impl Iterator<Item = (&Node, usize)> {
        let mut stack: Vec<(&Node, usize)> = self.root.iter().map(|n| (n, 0)).collect();
        std::iter::from_fn(move || {
            let (node, depth) = stack.pop()?;
            if let Some((left, right)) = node.children() {
                stack.push((right, depth + 1));
                stack.push((left, depth + 1));
            }
            Some((node, depth))
        })
    }
}

impl From<Node> for HuffmanTree {
    fn from(root: Node) -> Self {
        Self { root: Some(root) }
    }
}
