use std::io::{Read, Seek, SeekFrom};

use imgdim_common::prelude::*;

const LE_MAGIC_BYTES: &[u8] = b"II*\0";
const BE_MAGIC_BYTES: &[u8] = b"MM\0*";

pub const VERSION: u16 = 42;

/// Tagged Image File Format
pub struct Tiff;

impl Tiff {
    pub fn is_filetype(data: &[u8]) -> bool {
        data.starts_with(LE_MAGIC_BYTES) || data.starts_with(BE_MAGIC_BYTES)
    }

    /// Reads width and height from the first image file directory
    ///
    /// Entries are read until the directory or the stream ends. Dimensions that
    /// are not found stay zero without an error.
    pub fn parse<R: Read + Seek>(source: &mut R) -> ParseResult {
        Tags::fill(ImageForm::Tiff, |tags| {
            let header: [u8; 8] = source.read_array()?;
            let [b0, b1, v0, v1, o0, o1, o2, o3] = header;

            let byte_order = match &[b0, b1] {
                b"II" => ByteOrder::LittleEndian,
                b"MM" => ByteOrder::BigEndian,
                bo => return Err(Error::BadSignature(bo.to_vec())),
            };

            let version = byte_order.to_u16([v0, v1]);
            if version != VERSION {
                tracing::info!("Unexpected TIFF version {version}");
            }

            let offset = byte_order.to_int([o0, o1, o2, o3]);
            tracing::debug!("First IFD at byte {offset}");
            source
                .seek(SeekFrom::Start(offset.into()))
                .map_err(Error::Seek)?;

            let Some(n_entries) = source.read_array_or_eof::<2>()? else {
                tracing::info!("IFD offset {offset} is beyond the end of the file");
                return Ok(());
            };
            let n_entries = byte_order.to_u16(n_entries);
            tracing::debug!("Reading IFD with {n_entries} entries");

            for _ in 0..n_entries {
                let Some(entry) = source.read_array_or_eof::<12>()? else {
                    tracing::debug!("IFD ends early");
                    break;
                };
                let entry = Entry::decode(entry, byte_order);

                match entry.tag {
                    Tag::ImageWidth => tags.image_width = entry.value,
                    Tag::ImageLength => tags.image_height = entry.value,
                    _ => {}
                }
            }

            tracing::debug!("TIFF dimensions: {}x{}", tags.image_width, tags.image_height);

            Ok(())
        })
    }
}

/// Entry of an image file directory
#[derive(Debug, Clone, Copy)]
struct Entry {
    tag: Tag,
    /// Value if it fits into the entry
    value: u32,
}

impl Entry {
    fn decode(entry: [u8; 12], byte_order: ByteOrder) -> Self {
        let [t0, t1, y0, y1, _, _, _, _, v0, v1, v2, v3] = entry;
        let tag = Tag::from(byte_order.to_u16([t0, t1]));
        let data_type = Type::from(byte_order.to_u16([y0, y1]));

        // Values shorter than four bytes are stored left-aligned
        let value = match data_type {
            Type::Byte => u32::from(v0),
            Type::Long => byte_order.to_int([v0, v1, v2, v3]),
            Type::Short => byte_order.to_int([v0, v1]),
            other => {
                tracing::debug!("Entry {tag:?} has type {other:?}, reading as short");
                byte_order.to_int([v0, v1])
            }
        };

        Self { tag, value }
    }
}

imgdim_common::utils::convertible_enum!(
    #[repr(u16)]
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum Tag {
        ImageWidth = 0x100,
        /// Image height
        ImageLength = 0x101,
        Make = 0x10F,
        Model = 0x110,
        Orientation = 0x112,
        DateTime = 0x132,
    }
);

imgdim_common::utils::convertible_enum!(
    #[repr(u16)]
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum Type {
        Byte = 1,
        Ascii = 2,
        Short = 3,
        Long = 4,
        Rational = 5,
    }
);
