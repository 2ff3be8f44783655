//! Little-endian field writes into a pre-sized header buffer.
//!
//! Every write advances the cursor by exactly the declared width, so the
//! assembler can thread one offset through the whole header. The caller
//! sizes the buffer up front; these functions never grow it.

use crate::error::HeaderError;

/// Writes an unsigned integer at `buf[offset..offset + width]`.
///
/// Widths follow the header's integer fields: 1, 2 or 4 bytes, always
/// little-endian. Returns the offset just past the written field.
pub fn write_uint(
    buf: &mut [u8],
    offset: usize,
    value: u32,
    width: usize,
) -> Result<usize, HeaderError> {
    match width {
        1 => buf[offset] = value as u8,
        2 => buf[offset..offset + 2].copy_from_slice(&(value as u16).to_le_bytes()),
        4 => buf[offset..offset + 4].copy_from_slice(&value.to_le_bytes()),
        _ => return Err(HeaderError::InvalidWidth(width)),
    }
    Ok(offset + width)
}

/// Writes an IEEE-754 float as 4 little-endian bytes.
pub fn write_f32(buf: &mut [u8], offset: usize, value: f32) -> usize {
    buf[offset..offset + 4].copy_from_slice(&value.to_le_bytes());
    offset + 4
}

/// Copies `bytes` verbatim, returns the offset just past them.
pub fn write_bytes(buf: &mut [u8], offset: usize, bytes: &[u8]) -> usize {
    buf[offset..offset + bytes.len()].copy_from_slice(bytes);
    offset + bytes.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_little_endian_at_each_width() {
        let mut buf = [0xAA; 8];

        let next = write_uint(&mut buf, 0, 0x4D4F444C, 4).unwrap();
        assert_eq!(next, 4);
        assert_eq!(&buf[..4], &[0x4C, 0x44, 0x4F, 0x4D]);

        let next = write_uint(&mut buf, next, 0x1234, 2).unwrap();
        assert_eq!(next, 6);
        assert_eq!(&buf[4..6], &[0x34, 0x12]);

        let next = write_uint(&mut buf, next, 0xFF, 1).unwrap();
        assert_eq!(next, 7);
        assert_eq!(buf[6], 0xFF);
    }

    #[test]
    fn rejects_unsupported_widths() {
        let mut buf = [0; 8];
        for width in [0, 3, 5, 8] {
            assert_eq!(
                write_uint(&mut buf, 0, 1, width),
                Err(HeaderError::InvalidWidth(width))
            );
        }
        // Nothing was written on the failed attempts.
        assert_eq!(buf, [0; 8]);
    }

    #[test]
    fn float_write_matches_ieee754_bits() {
        let mut buf = [0; 4];
        let next = write_f32(&mut buf, 0, 0.8);
        assert_eq!(next, 4);
        // 0.8f32 is 0x3F4CCCCD.
        assert_eq!(buf, [0xCD, 0xCC, 0x4C, 0x3F]);
    }

    #[test]
    fn raw_bytes_advance_by_their_length() {
        let mut buf = [0; 8];
        let next = write_bytes(&mut buf, 2, b"Shake");
        assert_eq!(next, 7);
        assert_eq!(&buf[2..7], b"Shake");
    }
}
