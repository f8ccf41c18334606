//! Variable-length integer encoding.
//!
//! Unsigned values are written in 7-bit groups, least-significant group
//! first. Every byte except the last has its high bit set. Signed values are
//! zig-zag mapped first so that small magnitudes of either sign stay short:
//!
//! ```text
//!  0 -> 0x00     -1 -> 0x01     1 -> 0x02     -2 -> 0x03     2 -> 0x04
//! ```
//!
//! There are no length prefixes or separators; a value ends at the first byte
//! whose high bit is clear. A 64-bit value needs at most ten bytes.
//!
//! ```
//! use record_codec_core::varint::{decode_zigzag, encode_zigzag};
//!
//! let bytes = encode_zigzag(-3);
//! assert_eq!(bytes, vec![0x05]);
//! assert_eq!(decode_zigzag(&bytes, 0).unwrap(), (-3, 1));
//! ```

use thiserror::Error;

/// Maximum encoded length of a 64-bit varint.
pub const MAX_VARINT_LEN: usize = 10;

/// Low-level varint decode failure, positioned by absolute byte offset.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum VarintError {
    /// Input ended before a terminating byte
    #[error("truncated varint starting at offset {offset}")]
    Truncated { offset: usize },

    /// More than ten bytes, or bits beyond 64
    #[error("varint starting at offset {offset} overflows 64 bits")]
    Overflow { offset: usize },
}

/// Maps a signed value onto the unsigned range.
#[inline]
pub fn zigzag_encode(value: i64) -> u64 {
    ((value << 1) ^ (value >> 63)) as u64
}

/// Inverse of [`zigzag_encode`].
#[inline]
pub fn zigzag_decode(value: u64) -> i64 {
    ((value >> 1) as i64) ^ -((value & 1) as i64)
}

/// Number of bytes `value` occupies once encoded.
pub fn varint_len(value: u64) -> usize {
    let bits = 64 - value.leading_zeros() as usize;
    bits.div_ceil(7).max(1)
}

/// Appends `value` as an unsigned varint, returning the bytes written.
pub fn write_varint(mut value: u64, dst: &mut Vec<u8>) -> usize {
    let start = dst.len();
    while value >= 0x80 {
        dst.push((value as u8 & 0x7F) | 0x80);
        value >>= 7;
    }
    dst.push(value as u8);
    dst.len() - start
}

/// Appends `value` as a zig-zag varint, returning the bytes written.
pub fn write_zigzag(value: i64, dst: &mut Vec<u8>) -> usize {
    write_varint(zigzag_encode(value), dst)
}

/// Encodes `value` as a standalone zig-zag varint.
pub fn encode_zigzag(value: i64) -> Vec<u8> {
    let mut dst = Vec::with_capacity(MAX_VARINT_LEN);
    write_zigzag(value, &mut dst);
    dst
}

/// Reads an unsigned varint from `src` starting at `offset`.
///
/// Returns the value and the number of bytes consumed.
pub fn decode_varint(src: &[u8], offset: usize) -> Result<(u64, usize), VarintError> {
    let mut value: u64 = 0;
    let mut shift = 0u32;

    for (i, &byte) in src.get(offset..).unwrap_or(&[]).iter().enumerate() {
        if i == MAX_VARINT_LEN {
            return Err(VarintError::Overflow { offset });
        }

        let group = u64::from(byte & 0x7F);
        // The tenth byte may only carry the top bit of the value.
        if i == MAX_VARINT_LEN - 1 && group > 1 {
            return Err(VarintError::Overflow { offset });
        }

        value |= group << shift;
        if byte & 0x80 == 0 {
            return Ok((value, i + 1));
        }
        shift += 7;
    }

    Err(VarintError::Truncated { offset })
}

/// Reads a zig-zag varint from `src` starting at `offset`.
///
/// Returns the signed value and the number of bytes consumed.
pub fn decode_zigzag(src: &[u8], offset: usize) -> Result<(i64, usize), VarintError> {
    let (raw, read) = decode_varint(src, offset)?;
    Ok((zigzag_decode(raw), read))
}
