use crate::core::data::colour::Rgb;
use std::error::Error;
use std::fmt;

const BYTES_PER_PIXEL: usize = 3;

fn buffer_size(width: u32, height: u32) -> usize {
    (width as usize) * (height as usize) * BYTES_PER_PIXEL
}

#[derive(Debug, Clone, PartialEq)]
pub enum PixelImageError {
    BufferSizeMismatch {
        expected: usize,
        actual: usize,
    },
    DimensionMismatch {
        width: u32,
        height: u32,
        other_width: u32,
        other_height: u32,
    },
    PixelOutsideBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },
}

impl fmt::Display for PixelImageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BufferSizeMismatch { expected, actual } => {
                write!(
                    f,
                    "buffer of {} bytes does not match expected size {}",
                    actual, expected
                )
            }
            Self::DimensionMismatch {
                width,
                height,
                other_width,
                other_height,
            } => {
                write!(
                    f,
                    "image of {}x{} does not match {}x{}",
                    other_width, other_height, width, height
                )
            }
            Self::PixelOutsideBounds {
                x,
                y,
                width,
                height,
            } => {
                write!(
                    f,
                    "pixel at x:{}, y:{} outside of {}x{} image bounds",
                    x, y, width, height
                )
            }
        }
    }
}

impl Error for PixelImageError {}

/// A row-major RGB byte buffer with fixed dimensions.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelImage {
    width: u32,
    height: u32,
    buffer: Vec<u8>,
}

impl PixelImage {
    #[must_use]
    pub fn filled(width: u32, height: u32, colour: Rgb) -> Self {
        let pixels = (width as usize) * (height as usize);
        let mut buffer = Vec::with_capacity(pixels * BYTES_PER_PIXEL);
        for _ in 0..pixels {
            buffer.extend_from_slice(&[colour.r, colour.g, colour.b]);
        }

        Self {
            width,
            height,
            buffer,
        }
    }

    pub fn from_raw(width: u32, height: u32, buffer: Vec<u8>) -> Result<Self, PixelImageError> {
        let expected = buffer_size(width, height);

        if buffer.len() != expected {
            return Err(PixelImageError::BufferSizeMismatch {
                expected,
                actual: buffer.len(),
            });
        }

        Ok(Self {
            width,
            height,
            buffer,
        })
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Bytes per row, so callers can walk the buffer row by row.
    #[must_use]
    pub fn row_bytes(&self) -> usize {
        (self.width as usize) * BYTES_PER_PIXEL
    }

    #[must_use]
    pub fn buffer(&self) -> &[u8] {
        &self.buffer
    }

    #[must_use]
    pub fn buffer_mut(&mut self) -> &mut [u8] {
        &mut self.buffer
    }

    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgb> {
        if x >= self.width || y >= self.height {
            return None;
        }

        let index = self.pixel_index(x, y);
        Some(Rgb {
            r: self.buffer[index],
            g: self.buffer[index + 1],
            b: self.buffer[index + 2],
        })
    }

    pub fn set_pixel(&mut self, x: u32, y: u32, colour: Rgb) -> Result<(), PixelImageError> {
        if x >= self.width || y >= self.height {
            return Err(PixelImageError::PixelOutsideBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }

        let index = self.pixel_index(x, y);
        self.buffer[index] = colour.r;
        self.buffer[index + 1] = colour.g;
        self.buffer[index + 2] = colour.b;

        Ok(())
    }

    /// Overwrites this image with another of the same dimensions.
    pub fn copy_from(&mut self, other: &PixelImage) -> Result<(), PixelImageError> {
        if self.width != other.width || self.height != other.height {
            return Err(PixelImageError::DimensionMismatch {
                width: self.width,
                height: self.height,
                other_width: other.width,
                other_height: other.height,
            });
        }

        self.buffer.copy_from_slice(&other.buffer);
        Ok(())
    }

    fn pixel_index(&self, x: u32, y: u32) -> usize {
        ((y as usize) * (self.width as usize) + (x as usize)) * BYTES_PER_PIXEL
    }
}
