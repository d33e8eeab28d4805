//! Self-terminating bit encoding of a Huffman tree.
//!
//! Post-order, MSB-first:
//!
//! ```text
//! leaf     := 1 b7 b6 b5 b4 b3 b2 b1 b0
//! internal := <left> <right> 0
//! tree     := <root> 0
//! empty    := 0
//! ```
//!
//! Weights are not stored; decoded nodes carry weight 0.

use crate::bits::{BitCursor, BitWriter};
use crate::error::{HuffmanError, Result};
use crate::tree::{HuffmanTree, Node};

/// A tree over bytes never needs more leaves than this; the cap also bounds
/// the depth of any decoded tree.
pub const MAX_LEAVES: usize = 256;

/// Append the encoding of `tree` to `out`. `None` writes the empty marker.
pub fn serialize_tree(tree: Option<&HuffmanTree>, out: &mut BitWriter) {
    if let Some(tree) = tree {
        write_node(&tree.root, out);
    }
    out.push_bit(false);
}

fn write_node(node: &Node, out: &mut BitWriter) {
    match node {
        Node::Leaf { byte, .. } => {
            out.push_bit(true);
            out.push_byte(*byte);
        }
        Node::Internal { left, right, .. } => {
            write_node(left, out);
            write_node(right, out);
            out.push_bit(false);
        }
    }
}

/// Rebuild a tree from the cursor, leaving it just past the terminator.
///
/// Returns `Ok(None)` for the empty marker.
pub fn deserialize_tree(cursor: &mut BitCursor<'_>) -> Result<Option<HuffmanTree>> {
    let mut stack: Vec<Node> = Vec::new();
    let mut leaves = 0usize;
    loop {
        let bit = cursor.read_bit().ok_or(HuffmanError::TruncatedTree)?;
        if bit {
            leaves += 1;
            if leaves > MAX_LEAVES {
                return Err(HuffmanError::TreeTooLarge);
            }
            let byte = cursor.read_byte().ok_or(HuffmanError::TruncatedTree)?;
            stack.push(Node::leaf(byte, 0));
            continue;
        }
        match stack.len() {
            0 => return Ok(None),
            1 => return Ok(stack.pop().map(HuffmanTree::new)),
            _ => {
                // len >= 2 checked above
                let (Some(right), Some(left)) = (stack.pop(), stack.pop()) else {
                    return Err(HuffmanError::TruncatedTree);
                };
                stack.push(Node::Internal {
                    left: Box::new(left),
                    right: Box::new(right),
                    weight: 0,
                });
            }
        }
    }
}
