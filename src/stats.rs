//! `CompressionStats` summarizes one encode or decode call for reporting.

use serde::Serialize;
use std::time::Instant;

#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct CompressionStats {
    /// Length of the original, uncompressed data.
    pub input_bytes: usize,
    /// Length of the encoded artifact, header included.
    pub output_bytes: usize,
    /// Number of leaves in the tree.
    pub distinct_symbols: usize,
    /// Bits spent on the serialized tree, terminator included.
    pub tree_bits: usize,
    /// Bits spent on codewords.
    pub payload_bits: usize,
    pub elapsed_ms: u128,
}

impl CompressionStats {
    /// Encoded size as a fraction of the original. 0.0 for empty input.
    pub fn ratio(&self) -> f64 {
        if self.input_bytes == 0 {
            return 0.0;
        }
        self.output_bytes as f64 / self.input_bytes as f64
    }

    /// Average codeword length in bits per input byte.
    pub fn bits_per_symbol(&self) -> f64 {
        if self.input_bytes == 0 {
            return 0.0;
        }
        self.payload_bits as f64 / self.input_bytes as f64
    }

    pub(crate) fn finish(mut self, start: Instant) -> Self {
        self.elapsed_ms = start.elapsed().as_millis();
        self
    }

    pub fn report(&self) {
        eprintln!(
            "{} -> {} bytes ({:.2}%), {} symbols, tree {} bits, payload {} bits ({:.3} bits/byte) in {} ms",
            self.input_bytes,
            self.output_bytes,
            self.ratio() * 100.0,
            self.distinct_symbols,
            self.tree_bits,
            self.payload_bits,
            self.bits_per_symbol(),
            self.elapsed_ms,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ratio_of_empty_is_zero() {
        let s = CompressionStats::default();
        assert_eq!(s.ratio(), 0.0);
        assert_eq!(s.bits_per_symbol(), 0.0);
    }

    #[test]
    fn ratio_and_bits_per_symbol() {
        let s = CompressionStats {
            input_bytes: 11,
            output_bytes: 12,
            payload_bits: 21,
            ..Default::default()
        };
        assert!((s.ratio() - 12.0 / 11.0).abs() < 1e-12);
        assert!((s.bits_per_symbol() - 21.0 / 11.0).abs() < 1e-12);
    }
}
