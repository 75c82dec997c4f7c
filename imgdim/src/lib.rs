//! Image format and dimensions from file headers
//!
//! Only the container structures are read, pixel data are never decoded.
//!
//! ```no_run
//! let config = imgdim::image_size("photo.jpg").unwrap();
//! println!("{}: {config}", config.image_type);
//! ```

mod config;
mod image;

use std::fs::File;
use std::io::{BufReader, Read, Seek};
use std::path::Path;

pub use config::{ImageConfig, ImageType};
pub use image::Parser;
pub use imgdim_common::byte_order::{big_endian_to_int, little_endian_to_int};
pub use imgdim_common::{Error, ErrorWithData, ImageForm, ParseResult, Tags};

#[cfg(feature = "bmp")]
pub use imgdim_bmp as bmp;
#[cfg(feature = "gif")]
pub use imgdim_gif as gif;
#[cfg(feature = "jpeg")]
pub use imgdim_jpeg as jpeg;
#[cfg(feature = "png")]
pub use imgdim_png as png;
#[cfg(feature = "tiff")]
pub use imgdim_tiff as tiff;

/// Reads format and dimensions of the image at `path`
///
/// The format is selected by the file extension only. Files with an unknown
/// extension give an [`ImageConfig`] with [`ImageType::Unknown`] and zero
/// dimensions. Errors carry the [`ImageConfig`] with the attempted image type.
pub fn image_size(
    path: impl AsRef<Path>,
) -> Result<ImageConfig, ErrorWithData<Error, ImageConfig>> {
    let path = path.as_ref();
    let image_type = ImageType::from_path(path);

    let file = File::open(path)
        .map_err(|err| ErrorWithData::new(Error::Open(err), ImageConfig::new(image_type)))?;

    tracing::debug!("Reading {image_type} header of '{}'", path.display());

    image_size_from_reader(image_type, &mut BufReader::new(file))
}

/// Same as [`image_size`] for an already opened source
pub fn image_size_from_reader<R: Read + Seek>(
    image_type: ImageType,
    source: &mut R,
) -> Result<ImageConfig, ErrorWithData<Error, ImageConfig>> {
    let mut config = ImageConfig::new(image_type);

    let Some(parser) = image_type.parser() else {
        return Ok(config);
    };

    match parser.parse(source) {
        Ok(tags) => {
            config.width = tags.image_width;
            config.height = tags.image_height;
            Ok(config)
        }
        Err(err) => {
            tracing::debug!("Failed to read {} header: {err}", err.data().image_form);
            Err(err.map_data(|_| config))
        }
    }
}
