use std::path::Path;
use std::time::Instant;

use crate::bits::BitCursor;
use crate::config::Config;
use crate::error::{HuffmanError, Result};
use crate::payload::decode_payload;
use crate::size_header::{decode_size, SIZE_HEADER_LEN};
use crate::stats::CompressionStats;
use crate::tree_codec::deserialize_tree;

/// Reverse [`encode`](crate::encode::encode).
///
/// Every failure on malformed input is reported as a [`HuffmanError`]; the
/// decoder never reads past the end of `data`.
pub fn decode(data: &[u8]) -> Result<Vec<u8>> {
    decode_with_limit(data, &Config::default())
}

/// [`decode`] that refuses artifacts declaring more than
/// `config.max_output_len` bytes.
pub fn decode_with_limit(data: &[u8], config: &Config) -> Result<Vec<u8>> {
    decode_with_stats(data, config).map(|(out, _)| out)
}

pub fn decode_with_stats(data: &[u8], config: &Config) -> Result<(Vec<u8>, CompressionStats)> {
    let start = Instant::now();
    let declared = decode_size(data)?;
    if declared > config.max_output_len {
        return Err(HuffmanError::OutputLimitExceeded {
            declared,
            limit: config.max_output_len,
        });
    }

    let packed = &data[SIZE_HEADER_LEN..];
    let mut cursor = BitCursor::new(packed);
    let tree = deserialize_tree(&mut cursor)?;
    let tree_bits = cursor.position();

    let (out, distinct_symbols) = match &tree {
        Some(tree) => (decode_payload(&mut cursor, tree, declared)?, tree.leaf_count()),
        None if declared > 0 => return Err(HuffmanError::EmptyAlphabetMismatch(declared)),
        None => (Vec::new(), 0),
    };
    let payload_bits = cursor.position() - tree_bits;

    let trailing = packed.len() - cursor.bytes_consumed();
    if trailing > 0 {
        return Err(HuffmanError::TrailingBytes(trailing));
    }

    log::debug!(
        "decoded {} bytes from {}: tree {} bits, payload {} bits",
        out.len(),
        data.len(),
        tree_bits,
        payload_bits
    );

    let stats = CompressionStats {
        input_bytes: out.len(),
        output_bytes: data.len(),
        distinct_symbols,
        tree_bits,
        payload_bits,
        elapsed_ms: 0,
    }
    .finish(start);
    Ok((out, stats))
}

/// Read the artifact at `input` whole, decode it and write the result to
/// `output`. Nothing is written if decoding fails.
pub fn decode_file<P: AsRef<Path>, Q: AsRef<Path>>(
    input: P,
    output: Q,
    config: &Config,
) -> Result<CompressionStats> {
    let data = std::fs::read(input)?;
    let (decoded, stats) = decode_with_stats(&data, config)?;
    std::fs::write(output, &decoded)?;
    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encode::encode;

    #[test]
    fn empty_roundtrip() {
        assert_eq!(decode(&[0, 0, 0, 0, 0]).unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn header_only_is_truncated_tree() {
        assert!(matches!(decode(&[0, 0, 0, 0]), Err(HuffmanError::TruncatedTree)));
    }

    #[test]
    fn short_header() {
        assert!(matches!(decode(b"abc"), Err(HuffmanError::MalformedHeader(3))));
    }

    #[test]
    fn empty_tree_with_nonzero_size() {
        assert!(matches!(
            decode(&[5, 0, 0, 0, 0]),
            Err(HuffmanError::EmptyAlphabetMismatch(5))
        ));
    }

    #[test]
    fn limit_checked_before_decoding() {
        let enc = encode(b"hello, world").unwrap();
        let config = Config { max_output_len: 4 };
        assert!(matches!(
            decode_with_limit(&enc, &config),
            Err(HuffmanError::OutputLimitExceeded { declared: 12, limit: 4 })
        ));
        let config = Config { max_output_len: 12 };
        assert_eq!(decode_with_limit(&enc, &config).unwrap(), b"hello, world");
    }

    #[test]
    fn trailing_bytes_rejected() {
        let mut enc = encode(b"MISSISSIPPI").unwrap();
        enc.extend_from_slice(&[0xAA, 0xBB]);
        assert!(matches!(decode(&enc), Err(HuffmanError::TrailingBytes(2))));
    }

    #[test]
    fn stats_mirror_encoder() {
        let enc = encode(b"MISSISSIPPI").unwrap();
        let (out, stats) = decode_with_stats(&enc, &Config::default()).unwrap();
        assert_eq!(out, b"MISSISSIPPI");
        assert_eq!(stats.tree_bits, 40);
        assert_eq!(stats.payload_bits, 21);
        assert_eq!(stats.distinct_symbols, 4);
        assert_eq!(stats.output_bytes, enc.len());
    }
}
