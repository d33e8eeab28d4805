use std::path::Path;
use std::time::Instant;

use crate::bits::BitWriter;
use crate::codebook::Codebook;
use crate::error::Result;
use crate::frequency::FrequencyTable;
use crate::payload::encode_payload;
use crate::size_header::{encode_size, SIZE_HEADER_LEN};
use crate::stats::CompressionStats;
use crate::tree::HuffmanTree;
use crate::tree_codec::serialize_tree;

/// Compress `data` into a self-describing artifact:
///
/// ```text
/// [u32 LE original length][tree bits][payload bits][zero padding]
/// ```
///
/// Empty input yields `00 00 00 00 00`: a zero length and the one-bit empty
/// tree marker. Fails only if `data` is longer than `u32::MAX`.
pub fn encode(data: &[u8]) -> Result<Vec<u8>> {
    encode_with_stats(data).map(|(out, _)| out)
}

/// [`encode`], also reporting how the output bits were spent.
pub fn encode_with_stats(data: &[u8]) -> Result<(Vec<u8>, CompressionStats)> {
    let start = Instant::now();
    let header = encode_size(data.len())?;

    let freq = FrequencyTable::count(data);
    log::trace!("byte frequencies: {:?}", freq.iter().collect::<Vec<_>>());
    let tree = HuffmanTree::from_frequencies(&freq);

    let mut bits = BitWriter::new();
    serialize_tree(tree.as_ref(), &mut bits);
    let tree_bits = bits.bit_len();

    if let Some(tree) = &tree {
        let codebook = Codebook::from_tree(tree);
        encode_payload(data, &codebook, &mut bits);
    }
    let payload_bits = bits.bit_len() - tree_bits;

    let packed = bits.into_bytes();
    let mut out = Vec::with_capacity(SIZE_HEADER_LEN + packed.len());
    out.extend_from_slice(&header);
    out.extend_from_slice(&packed);

    log::debug!(
        "encoded {} bytes ({} symbols) into {} bytes: tree {} bits, payload {} bits",
        data.len(),
        freq.distinct(),
        out.len(),
        tree_bits,
        payload_bits
    );

    let stats = CompressionStats {
        input_bytes: data.len(),
        output_bytes: out.len(),
        distinct_symbols: freq.distinct(),
        tree_bits,
        payload_bits,
        elapsed_ms: 0,
    }
    .finish(start);
    Ok((out, stats))
}

/// Read `input` whole, encode it and write the artifact to `output`.
pub fn encode_file<P: AsRef<Path>, Q: AsRef<Path>>(input: P, output: Q) -> Result<CompressionStats> {
    let data = std::fs::read(input)?;
    let (encoded, stats) = encode_with_stats(&data)?;
    std::fs::write(output, &encoded)?;
    Ok(stats)
}
