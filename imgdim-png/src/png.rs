use std::io::{Read, Seek};

use imgdim_common::prelude::*;

use crate::ChunkType;

pub const MAGIC_BYTES: &[u8] = &[137, 80, 78, 71, 13, 10, 26, 10];
/// Length of the `IHDR` chunk data
pub const IHDR_LEN: u32 = 13;
/// Length of the CRC after each chunk's data
pub const CRC_LEN: u32 = 4;

/// Portable Network Graphics
pub struct Png;

impl Png {
    /// Checks if passed data have PNG magic bytes
    pub fn is_filetype(data: &[u8]) -> bool {
        data.starts_with(MAGIC_BYTES)
    }

    /// Reads width and height from the `IHDR` chunk
    ///
    /// Walks the chunks until the end of the stream or `IEND`. A file without
    /// `IHDR` gives zero dimensions and no error.
    pub fn parse<R: Read + Seek>(source: &mut R) -> ParseResult {
        Tags::fill(ImageForm::Png, |tags| {
            let magic_bytes: [u8; 8] = source.read_array()?;

            if magic_bytes != MAGIC_BYTES {
                return Err(Error::BadSignature(magic_bytes.to_vec()));
            }

            loop {
                // First 4 bytes are length
                let Some(length_data) = source.read_array_or_eof::<4>()? else {
                    break;
                };
                let length = big_endian_to_int(length_data);

                // Next 4 bytes are chunk type
                let Some(chunk_type_data) = source.read_array_or_eof::<4>()? else {
                    break;
                };
                let chunk_type = ChunkType::from(big_endian_to_int(chunk_type_data));

                tracing::debug!("Chunk {chunk_type:?} with {length} bytes");

                // Bytes between the current position and the next chunk
                let mut skip = length;

                if ChunkType::IHDR.matches(chunk_type_data) {
                    // Width, height, bit depth, color type, compression, filter, interlace
                    let ihdr: [u8; 13] = source.read_array()?;
                    let [w0, w1, w2, w3, h0, h1, h2, h3, ..] = ihdr;
                    tags.image_width = big_endian_to_int([w0, w1, w2, w3]);
                    tags.image_height = big_endian_to_int([h0, h1, h2, h3]);

                    tracing::debug!("PNG header: {}x{}", tags.image_width, tags.image_height);

                    skip = length.saturating_sub(IHDR_LEN);
                } else if ChunkType::IEND.matches(chunk_type_data) {
                    break;
                }

                source
                    .seek_relative(i64::from(skip).saturating_add(CRC_LEN.into()))
                    .map_err(Error::Io)?;
            }

            Ok(())
        })
    }
}
