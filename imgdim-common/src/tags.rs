use crate::error::{Error, ErrorWithData, ParseResult};

/// Parser that produced a [`Tags`] value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub enum ImageForm {
    Bmp,
    Gif,
    Jpeg,
    Png,
    Tiff,
}

impl ImageForm {
    /// Short name used in diagnostics
    pub const fn code(self) -> &'static str {
        match self {
            Self::Bmp => "BMP",
            Self::Gif => "GIF",
            Self::Jpeg => "JPG",
            Self::Png => "PNG",
            Self::Tiff => "TIF",
        }
    }
}

impl std::fmt::Display for ImageForm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// Values read from an image header
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[non_exhaustive]
pub struct Tags {
    pub image_form: ImageForm,
    /// Width in pixels, zero until found
    pub image_width: u32,
    /// Height in pixels, zero until found
    pub image_height: u32,
    /// Reserved, currently not populated
    pub image_model: Option<String>,
    /// Reserved, currently not populated
    #[cfg(feature = "chrono")]
    #[cfg_attr(feature = "serde", serde(skip))]
    pub image_date_time: Option<chrono::NaiveDateTime>,
}

impl Tags {
    pub fn new(image_form: ImageForm) -> Self {
        Self {
            image_form,
            image_width: 0,
            image_height: 0,
            image_model: None,
            #[cfg(feature = "chrono")]
            image_date_time: None,
        }
    }

    /// Runs `f` on fresh tags for `image_form`
    ///
    /// The tags are returned with the error if `f` fails, so values found
    /// before the failure stay available.
    ///
    /// ```
    /// # use imgdim_common::{Error, ImageForm, Tags};
    /// let err = Tags::fill(ImageForm::Jpeg, |tags| {
    ///     tags.image_width = 3;
    ///     Err(Error::InsufficientBytes)
    /// })
    /// .unwrap_err();
    /// assert_eq!(err.data().image_width, 3);
    /// ```
    pub fn fill(
        image_form: ImageForm,
        f: impl FnOnce(&mut Self) -> Result<(), Error>,
    ) -> ParseResult {
        let mut tags = Self::new(image_form);
        match f(&mut tags) {
            Ok(()) => Ok(tags),
            Err(err) => Err(ErrorWithData::new(err, tags)),
        }
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.image_width, self.image_height)
    }
}

impl std::fmt::Display for Tags {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Form:{}, Width:{}, Height:{}",
            self.image_form, self.image_width, self.image_height
        )
    }
}
