//! Lossless byte compression with a static Huffman code.
//!
//! An artifact carries everything needed to decode it:
//!
//! ```text
//! [u32 LE original length][tree bits][payload bits][zero padding]
//! ```
//!
//! The tree is stored post-order (`1` + 8-bit value per leaf, `0` per
//! internal node, one final `0`), followed by the codeword of every input
//! byte. All bits are packed most-significant first.
//!
//! ```
//! let packed = huffpack::encode(b"MISSISSIPPI")?;
//! assert_eq!(huffpack::decode(&packed)?, b"MISSISSIPPI");
//! # Ok::<(), huffpack::HuffmanError>(())
//! ```

pub mod bits;
pub mod codebook;
pub mod config;
pub mod decode;
pub mod encode;
pub mod error;
pub mod frequency;
pub mod io_utils;
pub mod payload;
pub mod size_header;
pub mod stats;
pub mod tree;
pub mod tree_codec;

pub use bits::{pack_bits, unpack_bits, BitCursor, BitWriter};
pub use codebook::{Code, Codebook};
pub use config::Config;
pub use decode::{decode, decode_file, decode_with_limit, decode_with_stats};
pub use encode::{encode, encode_file, encode_with_stats};
pub use error::{HuffmanError, Result};
pub use frequency::FrequencyTable;
pub use payload::{decode_payload, encode_payload};
pub use size_header::{decode_size, encode_size, SIZE_HEADER_LEN};
pub use stats::CompressionStats;
pub use tree::{HuffmanTree, Node};
pub use tree_codec::{deserialize_tree, serialize_tree};
