use std::io::{Read, Seek};

use imgdim_common::prelude::*;

/// Header parser for one image format
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Parser {
    #[cfg(feature = "bmp")]
    Bmp,
    #[cfg(feature = "gif")]
    Gif,
    #[cfg(feature = "jpeg")]
    Jpeg,
    #[cfg(feature = "png")]
    Png,
    #[cfg(feature = "tiff")]
    Tiff,
}

impl Parser {
    /// Form reported in the [`Tags`] of this parser
    pub fn form(self) -> ImageForm {
        match self {
            #[cfg(feature = "bmp")]
            Self::Bmp => ImageForm::Bmp,
            #[cfg(feature = "gif")]
            Self::Gif => ImageForm::Gif,
            #[cfg(feature = "jpeg")]
            Self::Jpeg => ImageForm::Jpeg,
            #[cfg(feature = "png")]
            Self::Png => ImageForm::Png,
            #[cfg(feature = "tiff")]
            Self::Tiff => ImageForm::Tiff,
        }
    }

    /// Reads the header from the current position of `source`
    pub fn parse<R: Read + Seek>(self, source: &mut R) -> ParseResult {
        match self {
            #[cfg(feature = "bmp")]
            Self::Bmp => imgdim_bmp::Bmp::parse(source),
            #[cfg(feature = "gif")]
            Self::Gif => imgdim_gif::Gif::parse(source),
            #[cfg(feature = "jpeg")]
            Self::Jpeg => imgdim_jpeg::Jpeg::parse(source),
            #[cfg(feature = "png")]
            Self::Png => imgdim_png::Png::parse(source),
            #[cfg(feature = "tiff")]
            Self::Tiff => imgdim_tiff::Tiff::parse(source),
        }
    }

    /// Guesses the parser from the magic bytes at the start of `data`
    ///
    /// Only used for diagnostics, the dispatcher selects parsers by file
    /// extension.
    pub fn sniff(data: &[u8]) -> Option<Self> {
        #[cfg(feature = "png")]
        if imgdim_png::Png::is_filetype(data) {
            return Some(Self::Png);
        }

        #[cfg(feature = "jpeg")]
        if imgdim_jpeg::Jpeg::is_filetype(data) {
            return Some(Self::Jpeg);
        }

        #[cfg(feature = "gif")]
        if imgdim_gif::Gif::is_filetype(data) {
            return Some(Self::Gif);
        }

        #[cfg(feature = "tiff")]
        if imgdim_tiff::Tiff::is_filetype(data) {
            return Some(Self::Tiff);
        }

        #[cfg(feature = "bmp")]
        if imgdim_bmp::Bmp::is_filetype(data) {
            return Some(Self::Bmp);
        }

        None
    }
}
