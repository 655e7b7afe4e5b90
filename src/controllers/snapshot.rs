//! Offline snapshot path: composes the frosted scene at the shown position
//! and writes it out as a PPM, without opening a window.

use crate::core::data::clip_rect::ClipRect;
use crate::core::data::colour::Rgb;
use crate::core::data::pixel_image::PixelImage;
use crate::core::frost::frost_layer::build_frost_layer;
use crate::core::scene::compositor::compose_frame;
use crate::core::slide::limits::SlideLimits;
use crate::storage::background::load_background;
use crate::storage::write_ppm::write_ppm;
use std::error::Error;
use std::fmt;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapshotError {
    NothingGenerated,
}

impl fmt::Display for SnapshotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NothingGenerated => {
                write!(f, "generate must run before the snapshot can be written")
            }
        }
    }
}

impl Error for SnapshotError {}

pub struct SnapshotController {
    limits: SlideLimits,
    frame: Option<PixelImage>,
}

impl SnapshotController {
    #[must_use]
    pub fn new() -> Self {
        Self {
            limits: SlideLimits::default(),
            frame: None,
        }
    }

    /// Loads the background, builds the frost layer and composes the scene
    /// with the panel fully slid in.
    pub fn generate(&mut self) -> Result<(), Box<dyn Error>> {
        let background = load_background(&self.limits)?;
        let frost = build_frost_layer(&background, Rgb::AZURE, &self.limits)?;
        let clip = ClipRect::vertical_band(
            self.limits.upper_position,
            self.limits.panel_width,
            self.limits.panel_height,
        );

        self.frame = Some(compose_frame(&background, &frost, clip)?);
        Ok(())
    }

    pub fn write(&self, filepath: impl AsRef<Path>) -> Result<(), Box<dyn Error>> {
        let frame = self.frame.as_ref().ok_or(SnapshotError::NothingGenerated)?;
        write_ppm(frame, filepath)?;
        Ok(())
    }
}

impl Default for SnapshotController {
    fn default() -> Self {
        Self::new()
    }
}
