use crate::core::data::clip_rect::ClipRect;
use crate::core::data::pixel_image::PixelImage;
use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum ComposeError {
    DimensionMismatch {
        background: (u32, u32),
        frost: (u32, u32),
        out: (u32, u32),
    },
    ClipOutsideFrame {
        clip: ClipRect,
        width: u32,
        height: u32,
    },
}

impl fmt::Display for ComposeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DimensionMismatch {
                background,
                frost,
                out,
            } => {
                write!(
                    f,
                    "background {}x{}, frost {}x{} and output {}x{} must share dimensions",
                    background.0, background.1, frost.0, frost.1, out.0, out.1
                )
            }
            Self::ClipOutsideFrame {
                clip,
                width,
                height,
            } => {
                write!(
                    f,
                    "clip at y:{} with {}x{} does not fit a {}x{} frame",
                    clip.y, clip.width, clip.height, width, height
                )
            }
        }
    }
}

impl Error for ComposeError {}

/// Composes one frame into `out`: the background everywhere, overwritten by
/// the frost layer inside the clip region.
///
/// The clip is a full-width band from the animated offset to the panel
/// bottom, so rows above it stay background and rows at or below it show
/// frost.
pub fn compose_into(
    background: &PixelImage,
    frost: &PixelImage,
    clip: ClipRect,
    out: &mut PixelImage,
) -> Result<(), ComposeError> {
    let width = background.width();
    let height = background.height();

    if frost.width() != width
        || frost.height() != height
        || out.width() != width
        || out.height() != height
    {
        return Err(ComposeError::DimensionMismatch {
            background: (width, height),
            frost: (frost.width(), frost.height()),
            out: (out.width(), out.height()),
        });
    }

    if clip.x != 0 || clip.width != width || clip.y + clip.height > height {
        return Err(ComposeError::ClipOutsideFrame {
            clip,
            width,
            height,
        });
    }

    out.buffer_mut().copy_from_slice(background.buffer());

    if clip.is_empty() {
        return Ok(());
    }

    let row_bytes = background.row_bytes();
    let start = (clip.y as usize) * row_bytes;
    let end = start + (clip.height as usize) * row_bytes;
    out.buffer_mut()[start..end].copy_from_slice(&frost.buffer()[start..end]);

    Ok(())
}

/// Allocating variant of [`compose_into`].
pub fn compose_frame(
    background: &PixelImage,
    frost: &PixelImage,
    clip: ClipRect,
) -> Result<PixelImage, ComposeError> {
    let mut out = background.clone();
    compose_into(background, frost, clip, &mut out)?;
    Ok(out)
}
