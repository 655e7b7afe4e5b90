//! Loads the bundled background image the frost layer is built from.

use crate::core::data::pixel_image::{PixelImage, PixelImageError};
use crate::core::slide::limits::SlideLimits;
use std::error::Error;
use std::fmt;

static BACKGROUND_PNG: &[u8] = include_bytes!("../../assets/background.png");

#[derive(Debug)]
pub enum BackgroundError {
    Decode(image::ImageError),
    Dimensions {
        expected: (u32, u32),
        actual: (u32, u32),
    },
    Buffer(PixelImageError),
}

impl fmt::Display for BackgroundError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Decode(source) => {
                write!(f, "background image failed to decode: {}", source)
            }
            Self::Dimensions { expected, actual } => {
                write!(
                    f,
                    "background image is {}x{} but the panel is {}x{}",
                    actual.0, actual.1, expected.0, expected.1
                )
            }
            Self::Buffer(source) => {
                write!(f, "background image buffer is invalid: {}", source)
            }
        }
    }
}

impl Error for BackgroundError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Decode(source) => Some(source),
            Self::Buffer(source) => Some(source),
            Self::Dimensions { .. } => None,
        }
    }
}

impl From<image::ImageError> for BackgroundError {
    fn from(source: image::ImageError) -> Self {
        Self::Decode(source)
    }
}

/// Decodes the bundled PNG and checks it against the panel geometry.
///
/// Both failure modes are fatal at startup; nothing retries this.
pub fn load_background(limits: &SlideLimits) -> Result<PixelImage, BackgroundError> {
    let decoded =
        image::load_from_memory_with_format(BACKGROUND_PNG, image::ImageFormat::Png)?.to_rgb8();

    let expected = (limits.panel_width, limits.panel_height);
    let actual = (decoded.width(), decoded.height());
    if actual != expected {
        return Err(BackgroundError::Dimensions { expected, actual });
    }

    PixelImage::from_raw(actual.0, actual.1, decoded.into_raw()).map_err(BackgroundError::Buffer)
}
