//! Code derivation from a Huffman tree.

use std::collections::BTreeMap;
use std::fmt;

use crate::tree::{HuffmanTree, Node};

/// A single codeword, first bit first. `false` is a left branch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Code(pub Vec<bool>);

impl Code {
    pub fn bits(&self) -> &[bool] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn is_prefix_of(&self, other: &Code) -> bool {
        other.0.starts_with(&self.0)
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &b in &self.0 {
            f.write_str(if b { "1" } else { "0" })?;
        }
        Ok(())
    }
}

/// Byte to codeword mapping derived from leaf paths.
#[derive(Debug, Clone, Default)]
pub struct Codebook {
    codes: BTreeMap<u8, Code>,
}

impl Codebook {
    /// Walk the tree depth first. A tree that is a single leaf has no path to
    /// speak of, so its byte gets the one-bit code `0`, as if it hung off the
    /// left branch of a virtual root.
    pub fn from_tree(tree: &HuffmanTree) -> Self {
        let mut codes = BTreeMap::new();
        match &tree.root {
            Node::Leaf { byte, .. } => {
                codes.insert(*byte, Code(vec![false]));
            }
            root => {
                let mut prefix = Vec::new();
                collect(root, &mut prefix, &mut codes);
            }
        }
        Self { codes }
    }

    pub fn get(&self, byte: u8) -> Option<&Code> {
        self.codes.get(&byte)
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Entries ascending by byte value.
    pub fn iter(&self) -> impl Iterator<Item = (u8, &Code)> + '_ {
        self.codes.iter().map(|(&b, c)| (b, c))
    }
}

fn collect(node: &Node, prefix: &mut Vec<bool>, codes: &mut BTreeMap<u8, Code>) {
    match node {
        Node::Leaf { byte, .. } => {
            codes.insert(*byte, Code(prefix.clone()));
        }
        Node::Internal { left, right, .. } => {
            prefix.push(false);
            collect(left, prefix, codes);
            prefix.pop();
            prefix.push(true);
            collect(right, prefix, codes);
            prefix.pop();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_symbol_gets_one_bit() {
        let tree = HuffmanTree::from_bytes(b"AAAA").unwrap();
        let book = Codebook::from_tree(&tree);
        assert_eq!(book.len(), 1);
        assert_eq!(book.get(b'A'), Some(&Code(vec![false])));
    }

    #[test]
    fn mississippi_codes() {
        let tree = HuffmanTree::from_bytes(b"MISSISSIPPI").unwrap();
        let book = Codebook::from_tree(&tree);
        // M(1) and P(2) merge first, then I(4) with MP(3), then S(4) with that.
        assert_eq!(book.get(b'S').unwrap().to_string(), "0");
        assert_eq!(book.get(b'I').unwrap().to_string(), "11");
        assert_eq!(book.get(b'M').unwrap().to_string(), "100");
        assert_eq!(book.get(b'P').unwrap().to_string(), "101");
        assert!(book.get(b'Z').is_none());
    }

    #[test]
    fn codes_are_prefix_free() {
        let data: Vec<u8> = (0u32..2000).map(|i| ((i * i) % 97) as u8).collect();
        let tree = HuffmanTree::from_bytes(&data).unwrap();
        let book = Codebook::from_tree(&tree);
        let codes: Vec<&Code> = book.iter().map(|(_, c)| c).collect();
        for (i, a) in codes.iter().enumerate() {
            assert!(!a.is_empty());
            for (j, b) in codes.iter().enumerate() {
                if i != j {
                    assert!(!a.is_prefix_of(b), "{a} is a prefix of {b}");
                }
            }
        }
    }
}
