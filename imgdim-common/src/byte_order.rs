//! Unsigned integers from byte sequences
//!
//! Fields are passed as arrays so the width is known at compile time. Inputs
//! wider than four bytes do not fit the returned [`u32`] and are rejected when
//! the calling code is compiled.

/// Interprets `bytes` as an unsigned integer, first byte least significant
///
/// ```
/// # use imgdim_common::byte_order::little_endian_to_int;
/// assert_eq!(little_endian_to_int([2, 1]), 258);
/// assert_eq!(little_endian_to_int([4, 3, 2, 1]), 16909060);
/// assert_eq!(little_endian_to_int([]), 0);
/// ```
pub fn little_endian_to_int<const N: usize>(bytes: [u8; N]) -> u32 {
    const { assert!(N <= 4, "integer fields are at most four bytes wide") };

    let mut buf = [0; 4];
    for (dst, src) in buf.iter_mut().zip(bytes) {
        *dst = src;
    }

    u32::from_le_bytes(buf)
}

/// Interprets `bytes` as an unsigned integer, first byte most significant
///
/// ```
/// # use imgdim_common::byte_order::big_endian_to_int;
/// assert_eq!(big_endian_to_int([1, 2]), 258);
/// assert_eq!(big_endian_to_int([1, 2, 3, 4]), 16909060);
/// assert_eq!(big_endian_to_int([]), 0);
/// ```
pub fn big_endian_to_int<const N: usize>(bytes: [u8; N]) -> u32 {
    const { assert!(N <= 4, "integer fields are at most four bytes wide") };

    let mut buf = [0; 4];
    for (dst, src) in buf.iter_mut().rev().zip(bytes.into_iter().rev()) {
        *dst = src;
    }

    u32::from_be_bytes(buf)
}

/// Returns the `N` bytes starting at `offset`
///
/// ```
/// # use imgdim_common::byte_order::array_at;
/// assert_eq!(array_at::<2>(b"abcd", 1), Some(*b"bc"));
/// assert_eq!(array_at::<2>(b"abcd", 3), None);
/// ```
pub fn array_at<const N: usize>(data: &[u8], offset: usize) -> Option<[u8; N]> {
    let end = offset.checked_add(N)?;
    data.get(offset..end)?.try_into().ok()
}

/// Byte order of multi-byte fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ByteOrder {
    /// Intel, `II` in TIFF headers
    LittleEndian,
    /// Motorola, `MM` in TIFF headers
    BigEndian,
}

impl ByteOrder {
    pub fn to_int<const N: usize>(self, bytes: [u8; N]) -> u32 {
        match self {
            Self::LittleEndian => little_endian_to_int(bytes),
            Self::BigEndian => big_endian_to_int(bytes),
        }
    }

    pub fn to_u16(self, bytes: [u8; 2]) -> u16 {
        match self {
            Self::LittleEndian => u16::from_le_bytes(bytes),
            Self::BigEndian => u16::from_be_bytes(bytes),
        }
    }

    /// Decodes the `N` bytes at `offset`, `None` if they are out of bounds
    pub fn int_at<const N: usize>(self, data: &[u8], offset: usize) -> Option<u32> {
        array_at::<N>(data, offset).map(|bytes| self.to_int(bytes))
    }
}
