//! Huffman tree construction.
//!
//! Leaves are queued in ascending byte order and the two lightest nodes are
//! merged until one remains. The first node popped becomes the left child.
//! Equal weights are ordered by insertion sequence, so the same input always
//! yields the same tree.

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::fmt;

use crate::frequency::FrequencyTable;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Leaf {
        byte: u8,
        weight: u64,
    },
    Internal {
        left: Box<Node>,
        right: Box<Node>,
        weight: u64,
    },
}

impl Node {
    pub fn leaf(byte: u8, weight: u64) -> Self {
        Node::Leaf { byte, weight }
    }

    /// Join two subtrees; weight is the sum of theirs.
    pub fn merge(left: Node, right: Node) -> Self {
        let weight = left.weight() + right.weight();
        Node::Internal {
            left: Box::new(left),
            right: Box::new(right),
            weight,
        }
    }

    pub fn weight(&self) -> u64 {
        match self {
            Node::Leaf { weight, .. } | Node::Internal { weight, .. } => *weight,
        }
    }

    pub fn leaf_count(&self) -> usize {
        match self {
            Node::Leaf { .. } => 1,
            Node::Internal { left, right, .. } => left.leaf_count() + right.leaf_count(),
        }
    }

    /// Longest root-to-leaf path.
    pub fn depth(&self) -> usize {
        match self {
            Node::Leaf { .. } => 0,
            Node::Internal { left, right, .. } => 1 + left.depth().max(right.depth()),
        }
    }
}

/// Priority queue entry: lowest weight first, then lowest sequence number.
struct Queued {
    weight: u64,
    seq: usize,
    node: Node,
}

impl PartialEq for Queued {
    fn eq(&self, other: &Self) -> bool {
        self.weight == other.weight && self.seq == other.seq
    }
}

impl Eq for Queued {}

impl PartialOrd for Queued {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Queued {
    // reversed: BinaryHeap is a max-heap
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .weight
            .cmp(&self.weight)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HuffmanTree {
    pub root: Node,
}

impl HuffmanTree {
    pub fn new(root: Node) -> Self {
        Self { root }
    }

    /// Build the tree for a frequency table. `None` when the table is empty.
    pub fn from_frequencies(freq: &FrequencyTable) -> Option<Self> {
        let mut heap = BinaryHeap::with_capacity(freq.distinct());
        let mut seq = 0usize;
        for (byte, weight) in freq.iter() {
            heap.push(Queued {
                weight,
                seq,
                node: Node::leaf(byte, weight),
            });
            seq += 1;
        }

        while heap.len() > 1 {
            let left = heap.pop()?.node;
            let right = heap.pop()?.node;
            let node = Node::merge(left, right);
            heap.push(Queued {
                weight: node.weight(),
                seq,
                node,
            });
            seq += 1;
        }

        let tree = Self {
            root: heap.pop()?.node,
        };
        log::trace!("Huffman tree:\n{tree}");
        Some(tree)
    }

    /// Count `data` and build its tree.
    pub fn from_bytes(data: &[u8]) -> Option<Self> {
        Self::from_frequencies(&FrequencyTable::count(data))
    }

    pub fn leaf_count(&self) -> usize {
        self.root.leaf_count()
    }

    pub fn depth(&self) -> usize {
        self.root.depth()
    }
}

fn render(
    f: &mut fmt::Formatter<'_>,
    node: &Node,
    prefix: &str,
    children_prefix: &str,
) -> fmt::Result {
    match node {
        Node::Leaf { byte, weight } => {
            if byte.is_ascii_graphic() {
                writeln!(f, "{prefix}'{}' ({weight})", *byte as char)
            } else {
                writeln!(f, "{prefix}0x{byte:02x} ({weight})")
            }
        }
        Node::Internal {
            left,
            right,
            weight,
        } => {
            writeln!(f, "{prefix}{weight}")?;
            render(
                f,
                left,
                &format!("{children_prefix}+---"),
                &format!("{children_prefix}|   "),
            )?;
            render(
                f,
                right,
                &format!("{children_prefix}\\---"),
                &format!("{children_prefix}    "),
            )
        }
    }
}

impl fmt::Display for HuffmanTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(f, &self.root, "", "")
    }
}
