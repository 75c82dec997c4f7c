use std::io::ErrorKind;

use crate::tags::Tags;

/// Result of a header parser
///
/// Failures still carry the [`Tags`] collected until the error occurred.
pub type ParseResult = Result<Tags, ErrorWithData<Error, Tags>>;

#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    #[error("Failed to open file: {0}")]
    Open(std::io::Error),
    #[error("Insufficient bytes")]
    InsufficientBytes,
    #[error("Invalid magic bytes: {0:x?}")]
    BadSignature(Vec<u8>),
    #[error("Missing required segment: {0}")]
    MissingRequiredSegment(&'static str),
    #[error("Failed to seek: {0}")]
    Seek(std::io::Error),
    #[error("Invalid segment length: {0}")]
    InvalidSegmentLength(u32),
    #[error("IO: {0}")]
    Io(std::io::Error),
}

impl Error {
    /// Maps a failed read, end of stream becomes [`Error::InsufficientBytes`]
    pub fn read(err: std::io::Error) -> Self {
        if err.kind() == ErrorKind::UnexpectedEof {
            Self::InsufficientBytes
        } else {
            Self::Io(err)
        }
    }
}

/// Type that allows to return data with the error
///
/// Parsers return the partially filled [`Tags`] this way and the dispatcher
/// returns the `ImageConfig` with the attempted image type.
pub struct ErrorWithData<E: std::error::Error, D> {
    err: E,
    data: D,
}

impl<E: std::error::Error, D> ErrorWithData<E, D> {
    pub fn new(err: E, data: D) -> Self {
        Self { err, data }
    }

    pub fn err(&self) -> &E {
        &self.err
    }

    pub fn data(&self) -> &D {
        &self.data
    }

    pub fn into_err(self) -> E {
        self.err
    }

    pub fn into_inner(self) -> D {
        self.data
    }

    pub fn map_err<F: std::error::Error>(self, op: impl FnOnce(E) -> F) -> ErrorWithData<F, D> {
        let err = op(self.err);
        ErrorWithData {
            err,
            data: self.data,
        }
    }

    pub fn map_data<T>(self, op: impl FnOnce(D) -> T) -> ErrorWithData<E, T> {
        let data = op(self.data);
        ErrorWithData {
            err: self.err,
            data,
        }
    }
}

impl<E: std::error::Error, D: std::fmt::Debug> std::fmt::Debug for ErrorWithData<E, D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ErrorWithData")
            .field("err", &self.err)
            .field("data", &self.data)
            .finish()
    }
}

impl<E: std::error::Error, D> std::fmt::Display for ErrorWithData<E, D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.err)
    }
}

impl<E: std::error::Error, D: std::fmt::Debug> std::error::Error for ErrorWithData<E, D> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tags::ImageForm;

    #[test]
    fn read_error_kinds() {
        let eof = std::io::Error::from(ErrorKind::UnexpectedEof);
        assert!(matches!(Error::read(eof), Error::InsufficientBytes));

        let other = std::io::Error::from(ErrorKind::PermissionDenied);
        assert!(matches!(Error::read(other), Error::Io(_)));
    }

    #[test]
    fn keeps_data() {
        let err = ErrorWithData::new(Error::InsufficientBytes, Tags::new(ImageForm::Gif));
        assert_eq!(err.to_string(), "Insufficient bytes");
        assert_eq!(err.data().image_form, ImageForm::Gif);

        let err = err.map_data(|tags| tags.image_form);
        assert_eq!(err.into_inner(), ImageForm::Gif);
    }
}
