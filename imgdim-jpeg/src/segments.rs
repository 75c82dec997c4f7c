use imgdim_common::prelude::*;

/// Frame Header / Start of Frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sof {
    /// Sample precision
    pub p: u8,
    /// Number of lines
    pub y: u32,
    /// Number of samples per line
    pub x: u32,
}

impl Sof {
    /// Reads the fixed part of the frame header
    ///
    /// Component specifications after the first five bytes are ignored.
    pub fn from_data(data: &[u8]) -> Result<Self, Error> {
        let [p, y0, y1, x0, x1] = array_at::<5>(data, 0).ok_or(Error::InsufficientBytes)?;

        Ok(Self {
            p,
            y: big_endian_to_int([y0, y1]),
            x: big_endian_to_int([x0, x1]),
        })
    }
}
