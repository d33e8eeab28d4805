use proptest::prelude::*;
use huffpack::{deserialize_tree, serialize_tree, BitCursor, BitWriter, Codebook, HuffmanTree};

proptest! {
    #[test]
    fn codes_are_prefix_free(data in proptest::collection::vec(any::<u8>(), 1..512)) {
        let tree = HuffmanTree::from_bytes(&data).unwrap();
        let book = Codebook::from_tree(&tree);
        let codes: Vec<_> = book.iter().collect();
        for (i, (_, a)) in codes.iter().enumerate() {
            prop_assert!(!a.is_empty());
            for (j, (_, b)) in codes.iter().enumerate() {
                if i != j {
                    prop_assert!(!a.is_prefix_of(b));
                }
            }
        }
    }

    #[test]
    fn every_present_byte_has_a_code(data in proptest::collection::vec(any::<u8>(), 1..512)) {
        let tree = HuffmanTree::from_bytes(&data).unwrap();
        let book = Codebook::from_tree(&tree);
        for b in &data {
            prop_assert!(book.get(*b).is_some());
        }
        prop_assert_eq!(book.len(), tree.leaf_count());
    }

    #[test]
    fn tree_roundtrip_preserves_codes(data in proptest::collection::vec(any::<u8>(), 1..512)) {
        let tree = HuffmanTree::from_bytes(&data).unwrap();
        let mut w = BitWriter::new();
        serialize_tree(Some(&tree), &mut w);
        let bit_len = w.bit_len();
        let bytes = w.into_bytes();

        let mut cursor = BitCursor::new(&bytes);
        let back = deserialize_tree(&mut cursor).unwrap().unwrap();
        prop_assert_eq!(cursor.position(), bit_len);

        let before: Vec<_> = Codebook::from_tree(&tree).iter().map(|(b, c)| (b, c.clone())).collect();
        let after: Vec<_> = Codebook::from_tree(&back).iter().map(|(b, c)| (b, c.clone())).collect();
        prop_assert_eq!(before, after);
    }

    #[test]
    fn tree_bits_match_leaf_count(data in proptest::collection::vec(any::<u8>(), 1..512)) {
        // 9 bits per leaf, 1 per internal node, 1 terminator
        let tree = HuffmanTree::from_bytes(&data).unwrap();
        let leaves = tree.leaf_count();
        let mut w = BitWriter::new();
        serialize_tree(Some(&tree), &mut w);
        prop_assert_eq!(w.bit_len(), 9 * leaves + (leaves - 1) + 1);
    }
}
