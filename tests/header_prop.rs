use quickcheck::quickcheck;
use huffpack::{decode_size, encode, encode_size};

quickcheck! {
    fn size_header_roundtrip(len: u32) -> bool {
        let enc = encode_size(len as usize).unwrap();
        enc == len.to_le_bytes() && decode_size(&enc).ok() == Some(len as usize)
    }

    fn artifact_starts_with_length(data: Vec<u8>) -> bool {
        let enc = encode(&data).unwrap();
        decode_size(&enc).ok() == Some(data.len())
    }
}
