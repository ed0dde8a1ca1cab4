//! Prefix-code tree nodes.

/// Alphabet member, identified by a small non-negative index.
pub type Symbol = u32;

/// A node of a prefix-code tree.
///
/// `weight` is the occurrence count (or summed count of a merged subtree)
/// used while building from frequencies. Trees restored from a code table
/// carry zero weights.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Terminal node holding a symbol.
    Leaf {
        /// Decoded symbol.
        symbol: Symbol,
        /// Construction weight.
        weight: u64,
    },
    /// Branch with exactly two children: `left` on bit 0, `right` on bit 1.
    Internal {
        /// Child reached on bit 0.
        left: Box<Node>,
        /// Child reached on bit 1.
        right: Box<Node>,
        /// Construction weight.
        weight: u64,
    },
}

impl Node {
    /// Create a leaf.
    pub fn leaf(symbol: Symbol, weight: u64) -> Self {
        Node::Leaf { symbol, weight }
    }

    /// Merge two subtrees; the weight saturates instead of overflowing.
    pub fn merge(left: Node, right: Node) -> Self {
        let weight = left.weight().saturating_add(right.weight());
        Node::Internal {
            left: Box::new(left),
            right: Box::new(right),
            weight,
        }
    }

    /// Construction weight.
    pub fn weight(&self) -> u64 {
        match self {
            Node::Leaf { weight, .. } => *weight,
            Node::Internal { weight, .. } => *weight,
        }
    }

    /// Whether this node has no children.
    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf { .. })
    }

    /// The symbol of a leaf, `None` for internal nodes.
    pub fn symbol(&self) -> Option<Symbol> {
        match self {
            Node::Leaf { symbol, .. } => Some(*symbol),
            Node::Internal { .. } => None,
        }
    }

    /// `(left, right)` of an internal node, `None` for leaves.
    pub fn children(&self) -> Option<(&Node, &Node)> {
        match self {
            Node::Leaf { .. } => None,
            Node::Internal { left, right, .. } => Some((left, right)),
        }
    }

    /// Child selected by `bit` (`false` = left), `None` for leaves.
    pub fn child(&self, bit: bool) -> Option<&Node> {
        self.children()
            .map(|(left, right)| if bit { right } else { left })
    }
}
