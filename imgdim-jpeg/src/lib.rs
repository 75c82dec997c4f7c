mod segments;

use std::io::{Read, Seek};

use imgdim_common::prelude::*;
pub use segments::Sof;

pub const JFIF_IDENTIFIER_STRING: &[u8] = b"JFIF";

pub const MARKER_START: u8 = 0xFF;
pub const MAGIC_BYTES: &[u8] = &[MARKER_START, 0xD8];

/// Joint Photographic Experts Group image
pub struct Jpeg;

impl Jpeg {
    /// Checks if passed data start with a SOI marker
    pub fn is_filetype(data: &[u8]) -> bool {
        data.starts_with(MAGIC_BYTES)
    }

    /// Reads width and height from the first baseline or progressive frame header
    ///
    /// The scan stops at the end of the stream, at `EOI`, at the first `SOS`,
    /// or as soon as both a JFIF `APP0` segment and a frame header were seen.
    /// A missing `APP0` is tolerated, a missing frame header is an error.
    pub fn parse<R: Read + Seek>(source: &mut R) -> ParseResult {
        Tags::fill(ImageForm::Jpeg, |tags| {
            let soi: [u8; 2] = source.read_array()?;
            if !Self::is_filetype(&soi) {
                return Err(Error::BadSignature(soi.to_vec()));
            }

            let mut scan = Scan::default();
            while !scan.complete() {
                let Some([first, second]) = source.read_array_or_eof::<2>()? else {
                    tracing::debug!("End of stream while scanning for segments");
                    break;
                };

                // Fill bytes and anything that is not a marker are skipped one
                // byte at a time
                if first != MARKER_START || second == MARKER_START || second == 0 {
                    source.seek_relative(-1).map_err(Error::Io)?;
                    continue;
                }

                let marker = Marker::from(second);
                match marker {
                    Marker::EOI | Marker::SOS => {
                        tracing::debug!("Segment scan ends at {marker:?}");
                        break;
                    }
                    marker if marker.is_standalone() => continue,
                    _ => {}
                }

                // Length includes the two length bytes
                let len = big_endian_to_int(source.read_array::<2>()?);
                let data_len = len
                    .checked_sub(2)
                    .ok_or(Error::InvalidSegmentLength(len))?;
                let data = source.read_vec(data_len.into())?;

                tracing::debug!("Segment {marker:?} with {data_len} bytes");

                match marker {
                    Marker::APP0 if !scan.app0 => {
                        scan.app0 = data.starts_with(JFIF_IDENTIFIER_STRING);
                    }
                    Marker::SOF0 | Marker::SOF2 if !scan.sof => {
                        let sof = Sof::from_data(&data)?;
                        tags.image_height = sof.y;
                        tags.image_width = sof.x;
                        scan.sof = true;

                        tracing::debug!("JPEG frame: {}x{}", sof.x, sof.y);
                    }
                    _ => {}
                }
            }

            if !scan.app0 {
                tracing::debug!("No JFIF APP0 segment found");
            }

            if !scan.sof {
                return Err(Error::MissingRequiredSegment("SOF"));
            }

            Ok(())
        })
    }
}

/// Required segments already seen
#[derive(Debug, Default)]
struct Scan {
    app0: bool,
    sof: bool,
}

impl Scan {
    fn complete(&self) -> bool {
        self.app0 && self.sof
    }
}

imgdim_common::utils::convertible_enum!(
    #[repr(u8)]
    #[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
    pub enum Marker {
        /// Temporary private use, no length
        TEM = 0x01,
        /// Baseline frame
        SOF0 = 0xC0,
        SOF1 = 0xC1,
        /// Progressive frame
        SOF2 = 0xC2,
        /// Define Huffman table
        DHT = 0xC4,
        RST0 = 0xD0,
        RST1 = 0xD1,
        RST2 = 0xD2,
        RST3 = 0xD3,
        RST4 = 0xD4,
        RST5 = 0xD5,
        RST6 = 0xD6,
        RST7 = 0xD7,
        /// Start of image
        SOI = 0xD8,
        /// End of image
        EOI = 0xD9,
        /// Start of scan
        SOS = 0xDA,
        DQT = 0xDB,
        /// Define restart interval
        DRI = 0xDD,
        /// JFIF
        APP0 = 0xE0,
        /// Exif, XMP
        APP1 = 0xE1,
        /// ICC color profile
        APP2 = 0xE2,
        /// Adobe
        APP14 = 0xEE,
        /// Comment
        COM = 0xFE,
    }
);

impl Marker {
    /// Markers that are not followed by a segment length
    pub fn is_standalone(self) -> bool {
        matches!(
            self,
            Self::TEM
                | Self::RST0
                | Self::RST1
                | Self::RST2
                | Self::RST3
                | Self::RST4
                | Self::RST5
                | Self::RST6
                | Self::RST7
                | Self::SOI
                | Self::EOI
        )
    }
}
