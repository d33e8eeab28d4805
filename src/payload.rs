//! Payload encoding: the input as a concatenation of codewords.

use crate::bits::{BitCursor, BitWriter};
use crate::codebook::Codebook;
use crate::error::{HuffmanError, Result};
use crate::tree::{HuffmanTree, Node};

/// Append the code of every byte of `data` to `out`, in input order.
///
/// # Panics
///
/// If a byte of `data` has no code. The codebook must come from a tree built
/// over the same data.
pub fn encode_payload(data: &[u8], codebook: &Codebook, out: &mut BitWriter) {
    for &byte in data {
        match codebook.get(byte) {
            Some(code) => out.push_bits(code.bits()),
            None => panic!("byte {byte:#04x} missing from codebook"),
        }
    }
}

/// Decode exactly `count` symbols starting at the cursor.
///
/// A single-leaf tree spends one bit per symbol, matching the one-bit code
/// the codebook assigns it.
pub fn decode_payload(
    cursor: &mut BitCursor<'_>,
    tree: &HuffmanTree,
    count: usize,
) -> Result<Vec<u8>> {
    let mut out = Vec::with_capacity(count.min(cursor.remaining()));
    let truncated = |decoded: usize| HuffmanError::TruncatedPayload {
        decoded,
        declared: count,
    };

    if let Node::Leaf { byte, .. } = &tree.root {
        for i in 0..count {
            if !cursor.advance() {
                return Err(truncated(i));
            }
            out.push(*byte);
        }
        return Ok(out);
    }

    for i in 0..count {
        let mut node = &tree.root;
        loop {
            match node {
                Node::Leaf { byte, .. } => {
                    out.push(*byte);
                    break;
                }
                Node::Internal { left, right, .. } => {
                    let bit = cursor.read_bit().ok_or_else(|| truncated(i))?;
                    node = if bit { right } else { left };
                }
            }
        }
    }
    Ok(out)
}
