use std::io::Read;

use imgdim_common::prelude::*;

pub const MAGIC_BYTES: &[u8] = b"GIF89a";
/// Bytes read from the start of the file
pub const HEADER_LEN: usize = 21;

/// Graphics Interchange Format, version 89a
pub struct Gif;

impl Gif {
    /// Checks if passed data have GIF magic bytes
    pub fn is_filetype(data: &[u8]) -> bool {
        data.starts_with(MAGIC_BYTES)
    }

    /// Reads the canvas size from the logical screen descriptor
    pub fn parse(source: &mut impl Read) -> ParseResult {
        Tags::fill(ImageForm::Gif, |tags| {
            let header: [u8; HEADER_LEN] = source.read_array()?;

            if !Self::is_filetype(&header) {
                return Err(Error::BadSignature(
                    header.get(..MAGIC_BYTES.len()).unwrap_or_default().to_vec(),
                ));
            }

            // Logical screen descriptor directly follows the signature
            let [_, _, _, _, _, _, w0, w1, h0, h1, ..] = header;
            tags.image_width = little_endian_to_int([w0, w1]);
            tags.image_height = little_endian_to_int([h0, h1]);

            tracing::debug!("GIF logical screen: {}x{}", tags.image_width, tags.image_height);

            Ok(())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn logical_screen() {
        let mut data = b"GIF89a".to_vec();
        data.extend_from_slice(&298_u16.to_le_bytes());
        data.extend_from_slice(&221_u16.to_le_bytes());
        data.extend_from_slice(&[0; 11]);

        let tags = Gif::parse(&mut data.as_slice()).unwrap();
        assert_eq!(tags.dimensions(), (298, 221));
    }

    #[test]
    fn gif87a_is_rejected() {
        let mut data = b"GIF87a".to_vec();
        data.extend_from_slice(&[1; 15]);

        let err = Gif::parse(&mut data.as_slice()).unwrap_err();
        assert!(matches!(err.err(), Error::BadSignature(magic) if magic == b"GIF87a"));
        assert_eq!(err.data().image_form, ImageForm::Gif);
    }

    #[test]
    fn too_short() {
        let data = b"GIF89a\x01\x00\x01\x00";
        let err = Gif::parse(&mut data.as_slice()).unwrap_err();
        assert!(matches!(err.err(), Error::InsufficientBytes));
        assert_eq!(err.data().dimensions(), (0, 0));
    }
}
