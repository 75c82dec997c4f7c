use std::path::Path;

use imgdim_common::ImageForm;

use crate::Parser;

/// Image format chosen by file extension
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub enum ImageType {
    #[default]
    Unknown,
    Bmp,
    Gif,
    Jpeg,
    Png,
    Tiff,
}

impl ImageType {
    /// Format for a file extension without the leading dot, ignoring case
    ///
    /// ```
    /// # use imgdim::ImageType;
    /// assert_eq!(ImageType::from_extension("JPE"), ImageType::Jpeg);
    /// assert_eq!(ImageType::from_extension("txt"), ImageType::Unknown);
    /// ```
    pub fn from_extension(extension: &str) -> Self {
        match extension.to_ascii_lowercase().as_str() {
            "bmp" => Self::Bmp,
            "gif" => Self::Gif,
            "jpeg" | "jpg" | "jpe" | "jfif" | "jif" => Self::Jpeg,
            "png" => Self::Png,
            "tif" | "tiff" => Self::Tiff,
            _ => Self::Unknown,
        }
    }

    /// Format for the extension of `path`
    ///
    /// Paths without an extension or with a non-UTF-8 extension are
    /// [`Unknown`](Self::Unknown).
    pub fn from_path(path: impl AsRef<Path>) -> Self {
        path.as_ref()
            .extension()
            .and_then(|x| x.to_str())
            .map_or(Self::Unknown, Self::from_extension)
    }

    /// Parser for this format if it is supported by the enabled features
    pub fn parser(self) -> Option<Parser> {
        match self {
            #[cfg(feature = "bmp")]
            Self::Bmp => Some(Parser::Bmp),
            #[cfg(feature = "gif")]
            Self::Gif => Some(Parser::Gif),
            #[cfg(feature = "jpeg")]
            Self::Jpeg => Some(Parser::Jpeg),
            #[cfg(feature = "png")]
            Self::Png => Some(Parser::Png),
            #[cfg(feature = "tiff")]
            Self::Tiff => Some(Parser::Tiff),
            #[allow(unreachable_patterns)]
            _ => None,
        }
    }
}

impl From<ImageForm> for ImageType {
    fn from(form: ImageForm) -> Self {
        match form {
            ImageForm::Bmp => Self::Bmp,
            ImageForm::Gif => Self::Gif,
            ImageForm::Jpeg => Self::Jpeg,
            ImageForm::Png => Self::Png,
            ImageForm::Tiff => Self::Tiff,
        }
    }
}

impl std::fmt::Display for ImageType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Unknown => "Unknown",
            Self::Bmp => "BMP",
            Self::Gif => "GIF",
            Self::Jpeg => "JPEG",
            Self::Png => "PNG",
            Self::Tiff => "TIFF",
        })
    }
}

/// Format and dimensions of an image file
///
/// Width and height are zero if the format is unknown or the header could not
/// be read.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct ImageConfig {
    pub image_type: ImageType,
    pub width: u32,
    pub height: u32,
}

impl ImageConfig {
    pub fn new(image_type: ImageType) -> Self {
        Self {
            image_type,
            ..Default::default()
        }
    }
}

impl std::fmt::Display for ImageConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}
