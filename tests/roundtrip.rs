use huffpack::{decode, decode_size, encode, Codebook, HuffmanTree};

#[test]
fn empty_input() {
    let enc = encode(b"").unwrap();
    assert_eq!(&enc[..4], &[0, 0, 0, 0]);
    assert_eq!(enc, vec![0, 0, 0, 0, 0]);
    assert!(decode(&enc).unwrap().is_empty());
}

#[test]
fn single_repeated_byte() {
    let tree = HuffmanTree::from_bytes(b"AAAA").unwrap();
    let book = Codebook::from_tree(&tree);
    assert_eq!(book.len(), 1);
    assert_eq!(book.get(b'A').unwrap().len(), 1);

    let enc = encode(b"AAAA").unwrap();
    assert_eq!(decode(&enc).unwrap(), b"AAAA");
}

#[test]
fn single_byte_input() {
    for b in [0u8, 1, 0x7F, 0xFF] {
        let enc = encode(&[b]).unwrap();
        assert_eq!(decode(&enc).unwrap(), vec![b]);
    }
}

#[test]
fn mississippi() {
    let enc = encode(b"MISSISSIPPI").unwrap();
    assert_eq!(decode(&enc).unwrap(), b"MISSISSIPPI");
    assert!(enc.len() < 11 + 4, "artifact was {} bytes", enc.len());
}

#[test]
fn header_matches_decoded_length() {
    let data: Vec<u8> = (0u32..5000).map(|i| (i % 251) as u8 ^ (i / 7) as u8).collect();
    let enc = encode(&data).unwrap();
    let declared = decode_size(&enc).unwrap();
    let dec = decode(&enc).unwrap();
    assert_eq!(declared, data.len());
    assert_eq!(dec.len(), declared);
    assert_eq!(dec, data);
}

#[test]
fn full_alphabet() {
    let data: Vec<u8> = (0..=255u8).cycle().take(256 * 3 + 17).collect();
    let enc = encode(&data).unwrap();
    assert_eq!(decode(&enc).unwrap(), data);
}

#[test]
fn skewed_distribution_compresses() {
    let mut data = vec![b'a'; 10_000];
    data.extend_from_slice(b"bcdefg");
    let enc = encode(&data).unwrap();
    assert!(enc.len() < data.len() / 4);
    assert_eq!(decode(&enc).unwrap(), data);
}

#[test]
fn deterministic_output() {
    let data = b"the quick brown fox jumps over the lazy dog, again and again";
    assert_eq!(encode(data).unwrap(), encode(data).unwrap());
}
