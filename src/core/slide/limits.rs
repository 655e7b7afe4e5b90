#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlideLimits {
    pub panel_width: u32,
    pub panel_height: u32,
    pub upper_position: f64,
    pub slide_duration_secs: f64,
    pub blur_kernel: u32,
    pub blur_iterations: u32,
}

impl SlideLimits {
    /// Offset at which the frost panel is fully off screen.
    #[must_use]
    pub fn hidden_offset(&self) -> f64 {
        f64::from(self.panel_height)
    }
}

impl Default for SlideLimits {
    fn default() -> Self {
        Self {
            panel_width: 330,
            panel_height: 590,
            upper_position: 100.0,
            slide_duration_secs: 0.4,
            blur_kernel: 10,
            blur_iterations: 3,
        }
    }
}
