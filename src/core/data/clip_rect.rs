/// The rectangular viewport that determines which rows of the frost layer
/// are currently visible. Recomputed from the animated offset each frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClipRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl ClipRect {
    /// Builds the clip for a vertical offset over a panel of the given size.
    ///
    /// The offset is rounded to whole pixels and clamped into the panel, so
    /// an offset at or past the bottom yields an empty clip and an offset at
    /// or above zero yields the full panel.
    #[must_use]
    pub fn vertical_band(offset: f64, width: u32, full_height: u32) -> Self {
        let y = offset.round().clamp(0.0, f64::from(full_height)) as u32;

        Self {
            x: 0,
            y,
            width,
            height: full_height - y,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

#[cfg(test)]
mod tests {
    use super::ClipRect;

    #[test]
    fn offset_inside_panel_clips_from_that_row() {
        let clip = ClipRect::vertical_band(100.0, 330, 590);

        assert_eq!(
            clip,
            ClipRect {
                x: 0,
                y: 100,
                width: 330,
                height: 490,
            }
        );
        assert!(!clip.is_empty());
    }

    #[test]
    fn offset_at_panel_bottom_is_an_empty_clip() {
        let clip = ClipRect::vertical_band(590.0, 330, 590);

        assert_eq!(clip.height, 0);
        assert!(clip.is_empty());
    }

    #[test]
    fn offset_below_panel_bottom_is_clamped() {
        let clip = ClipRect::vertical_band(1000.0, 330, 590);

        assert_eq!(clip.y, 590);
        assert!(clip.is_empty());
    }

    #[test]
    fn negative_offset_is_clamped_to_full_panel() {
        let clip = ClipRect::vertical_band(-25.0, 330, 590);

        assert_eq!(clip.y, 0);
        assert_eq!(clip.height, 590);
    }

    #[test]
    fn fractional_offset_rounds_to_whole_pixels() {
        assert_eq!(ClipRect::vertical_band(99.4, 330, 590).y, 99);
        assert_eq!(ClipRect::vertical_band(99.6, 330, 590).y, 100);
    }
}
