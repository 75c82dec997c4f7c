//! Shared building blocks of the imgdim header parsers
//!
//! Every format crate decodes multi-byte fields with [`byte_order`], reports
//! failures as [`Error`] and fills a [`Tags`] value.

pub mod byte_order;
pub mod error;
pub mod read;
pub mod tags;
pub mod utils;

pub use error::{Error, ErrorWithData, ParseResult};
pub use tags::{ImageForm, Tags};

pub mod prelude {
    pub use crate::byte_order::{array_at, big_endian_to_int, little_endian_to_int, ByteOrder};
    pub use crate::error::{Error, ErrorWithData, ParseResult};
    pub use crate::read::ReadExt;
    pub use crate::tags::{ImageForm, Tags};
}
