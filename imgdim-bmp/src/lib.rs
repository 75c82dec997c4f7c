use std::io::Read;

use imgdim_common::prelude::*;

pub const MAGIC_BYTES: &[u8] = b"BM";
/// Bytes read from the start of the file
///
/// Covers the file header and the start of the info header.
pub const HEADER_LEN: usize = 31;

const WIDTH_OFFSET: usize = 18;
const HEIGHT_OFFSET: usize = 22;

/// Windows bitmap
pub struct Bmp;

impl Bmp {
    /// Checks if passed data have BMP magic bytes
    pub fn is_filetype(data: &[u8]) -> bool {
        data.starts_with(MAGIC_BYTES)
    }

    /// Reads width and height from the info header
    pub fn parse(source: &mut impl Read) -> ParseResult {
        Tags::fill(ImageForm::Bmp, |tags| {
            let header: [u8; HEADER_LEN] = source.read_array()?;

            if !Self::is_filetype(&header) {
                return Err(Error::BadSignature(
                    header.get(..MAGIC_BYTES.len()).unwrap_or_default().to_vec(),
                ));
            }

            let order = ByteOrder::LittleEndian;
            tags.image_width = order
                .int_at::<4>(&header, WIDTH_OFFSET)
                .ok_or(Error::InsufficientBytes)?;
            tags.image_height = order
                .int_at::<4>(&header, HEIGHT_OFFSET)
                .ok_or(Error::InsufficientBytes)?;

            tracing::debug!("BMP info header: {}x{}", tags.image_width, tags.image_height);

            Ok(())
        })
    }
}
