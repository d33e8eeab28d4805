use crate::error::{HuffmanError, Result};

/// Width of the size header in bytes.
pub const SIZE_HEADER_LEN: usize = 4;

/// Encode the original length as a little-endian `u32`.
pub fn encode_size(len: usize) -> Result<[u8; SIZE_HEADER_LEN]> {
    let len32 = u32::try_from(len).map_err(|_| HuffmanError::InputTooLarge(len))?;
    Ok(len32.to_le_bytes())
}

/// Read the original length from the first four bytes of `data`.
pub fn decode_size(data: &[u8]) -> Result<usize> {
    let header: [u8; SIZE_HEADER_LEN] = data
        .get(..SIZE_HEADER_LEN)
        .and_then(|h| h.try_into().ok())
        .ok_or(HuffmanError::MalformedHeader(data.len()))?;
    Ok(u32::from_le_bytes(header) as usize)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn little_endian_layout() {
        assert_eq!(encode_size(0).unwrap(), [0, 0, 0, 0]);
        assert_eq!(encode_size(11).unwrap(), [11, 0, 0, 0]);
        assert_eq!(encode_size(0x0102_0304).unwrap(), [4, 3, 2, 1]);
    }

    #[test]
    fn decode_ignores_following_bytes() {
        assert_eq!(decode_size(&[0x10, 0x27, 0, 0, 0xAA]).unwrap(), 10_000);
        assert_eq!(decode_size(&[0xFF; 4]).unwrap(), u32::MAX as usize);
    }

    #[test]
    fn short_header() {
        for n in 0..SIZE_HEADER_LEN {
            let data = vec![0u8; n];
            assert!(matches!(decode_size(&data), Err(HuffmanError::MalformedHeader(m)) if m == n));
        }
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    fn too_large() {
        let len = u32::MAX as usize + 1;
        assert!(matches!(encode_size(len), Err(HuffmanError::InputTooLarge(l)) if l == len));
    }
}
