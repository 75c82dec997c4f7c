use std::io::Read;

use crate::error::Error;

pub trait ReadExt: Read {
    /// Reads exactly `T` bytes
    ///
    /// ```
    /// # use imgdim_common::read::ReadExt;
    /// # use imgdim_common::Error;
    /// let mut s = b"abc".as_slice();
    /// assert_eq!(s.read_array::<2>().unwrap(), *b"ab");
    /// assert!(matches!(s.read_array::<2>(), Err(Error::InsufficientBytes)));
    /// ```
    fn read_array<const T: usize>(&mut self) -> Result<[u8; T], Error> {
        let buf = &mut [0; T];
        self.read_exact(buf).map_err(Error::read)?;
        Ok(*buf)
    }

    /// Same as [`read_array`](Self::read_array) but `None` at end of stream
    ///
    /// A partial read at the end of the stream also counts as end of stream.
    fn read_array_or_eof<const T: usize>(&mut self) -> Result<Option<[u8; T]>, Error> {
        match self.read_array() {
            Ok(buf) => Ok(Some(buf)),
            Err(Error::InsufficientBytes) => Ok(None),
            Err(err) => Err(err),
        }
    }

    /// Reads exactly `len` bytes
    ///
    /// The buffer grows with the data actually read, a bogus length from a
    /// truncated file does not cause a large allocation.
    ///
    /// ```
    /// # use imgdim_common::read::ReadExt;
    /// # use imgdim_common::Error;
    /// let mut s = b"abc".as_slice();
    /// assert_eq!(s.read_vec(2).unwrap(), b"ab");
    /// assert!(matches!(s.read_vec(2), Err(Error::InsufficientBytes)));
    /// ```
    fn read_vec(&mut self, len: u64) -> Result<Vec<u8>, Error> {
        let mut buf = Vec::new();
        Read::take(&mut *self, len)
            .read_to_end(&mut buf)
            .map_err(Error::Io)?;

        if u64::try_from(buf.len()).ok() != Some(len) {
            return Err(Error::InsufficientBytes);
        }

        Ok(buf)
    }
}

impl<R: Read + ?Sized> ReadExt for R {}
