//! Bit packing and the read cursor shared by the tree and payload decoders.
//!
//! Every bit sequence in the format is packed most-significant-bit first,
//! eight to a byte, with zero padding in the low bits of the final byte:
//!
//! ```text
//! bits:  1 0 1 1 0 0 1 0 | 1 1 0
//! bytes: 0b1011_0010       0b1100_0000
//! ```

/// Append-only bit buffer that packs as it goes.
#[derive(Debug, Clone, Default)]
pub struct BitWriter {
    bytes: Vec<u8>,
    len: usize,
}

impl BitWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reserve room for roughly `bits` more bits.
    pub fn with_capacity(bits: usize) -> Self {
        Self {
            bytes: Vec::with_capacity(bits.div_ceil(8)),
            len: 0,
        }
    }

    pub fn push_bit(&mut self, bit: bool) {
        let byte_index = self.len / 8;
        let bit_offset = self.len % 8;
        if byte_index >= self.bytes.len() {
            self.bytes.push(0);
        }
        if bit {
            self.bytes[byte_index] |= 1 << (7 - bit_offset);
        }
        self.len += 1;
    }

    pub fn push_bits(&mut self, bits: &[bool]) {
        for &b in bits {
            self.push_bit(b);
        }
    }

    /// Push all 8 bits of `byte`, most significant first.
    pub fn push_byte(&mut self, byte: u8) {
        for i in (0..8).rev() {
            self.push_bit((byte >> i) & 1 != 0);
        }
    }

    /// Number of meaningful bits written so far (padding excluded).
    pub fn bit_len(&self) -> usize {
        self.len
    }

    /// Packed bytes; the tail of the last byte is zero padding.
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}

/// Pack a bit sequence into bytes, zero padding the final byte.
pub fn pack_bits(bits: &[bool]) -> Vec<u8> {
    let mut writer = BitWriter::with_capacity(bits.len());
    writer.push_bits(bits);
    writer.into_bytes()
}

/// Expand every byte into its 8 bits. Padding bits come back as data; the
/// caller needs outside framing to know where the meaningful bits end.
pub fn unpack_bits(bytes: &[u8]) -> Vec<bool> {
    let mut cursor = BitCursor::new(bytes);
    let mut out = Vec::with_capacity(bytes.len() * 8);
    while let Some(bit) = cursor.read_bit() {
        out.push(bit);
    }
    out
}

/// Bounds-checked read cursor over packed bytes.
///
/// All reads return `None` once the underlying bytes are exhausted; callers
/// turn that into the error kind that fits their context.
#[derive(Debug, Clone)]
pub struct BitCursor<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> BitCursor<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Next bit without advancing.
    pub fn peek(&self) -> Option<bool> {
        let byte = self.data.get(self.pos / 8)?;
        Some((byte >> (7 - (self.pos % 8))) & 1 != 0)
    }

    /// Skip one bit. Returns `false` if nothing was left.
    pub fn advance(&mut self) -> bool {
        if self.remaining() == 0 {
            return false;
        }
        self.pos += 1;
        true
    }

    pub fn read_bit(&mut self) -> Option<bool> {
        let bit = self.peek()?;
        self.pos += 1;
        Some(bit)
    }

    /// Read 8 bits as one byte, most significant first. On `None` the cursor
    /// is left where it was.
    pub fn read_byte(&mut self) -> Option<u8> {
        if self.remaining() < 8 {
            return None;
        }
        let mut byte = 0u8;
        for _ in 0..8 {
            byte = (byte << 1) | self.read_bit()? as u8;
        }
        Some(byte)
    }

    /// Bits consumed so far.
    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn remaining(&self) -> usize {
        self.data.len() * 8 - self.pos
    }

    /// Bytes touched so far, counting a partially read byte as whole.
    pub fn bytes_consumed(&self) -> usize {
        self.pos.div_ceil(8)
    }
}
