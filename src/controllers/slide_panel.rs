//! Drives the slide state machine from classified gesture input.
//!
//! Input adapters translate raw scroll and swipe events into
//! [`GestureDirection`] values; the controller maps those onto the panel's
//! slide operations and exposes a per-frame [`FrameState`] for composition.

use crate::core::data::clip_rect::ClipRect;
use crate::core::slide::limits::SlideLimits;
use crate::core::slide::panel::{SlidePanel, SlidePhase, SlideTickReport};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureDirection {
    Upward,
    Downward,
}

/// Classifies a vertical scroll delta. Negative deltas slide the panel in,
/// positive deltas slide it out; zero or non-finite deltas are ignored.
#[must_use]
pub fn classify_scroll(delta_y: f64) -> Option<GestureDirection> {
    if !delta_y.is_finite() || delta_y == 0.0 {
        return None;
    }

    if delta_y < 0.0 {
        Some(GestureDirection::Upward)
    } else {
        Some(GestureDirection::Downward)
    }
}

/// Everything the presentation layer needs to draw one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameState {
    pub offset: f64,
    pub clip: ClipRect,
    pub content_visible: bool,
    pub animating: bool,
}

pub struct SlidePanelController {
    limits: SlideLimits,
    panel: SlidePanel,
}

impl SlidePanelController {
    #[must_use]
    pub fn new(limits: SlideLimits) -> Self {
        Self {
            limits,
            panel: SlidePanel::new(limits),
        }
    }

    pub fn handle_upward(&mut self) {
        self.panel.start_slide_in();
    }

    pub fn handle_downward(&mut self) {
        self.panel.start_slide_out();
    }

    /// Absent gestures are ignored; there are no error conditions here.
    pub fn handle_gesture(&mut self, gesture: Option<GestureDirection>) {
        match gesture {
            Some(GestureDirection::Upward) => self.handle_upward(),
            Some(GestureDirection::Downward) => self.handle_downward(),
            None => {}
        }
    }

    pub fn tick(&mut self, dt_secs: f64) -> SlideTickReport {
        self.panel.tick(dt_secs)
    }

    #[must_use]
    pub fn frame_state(&self) -> FrameState {
        FrameState {
            offset: self.panel.offset(),
            clip: ClipRect::vertical_band(
                self.panel.offset(),
                self.limits.panel_width,
                self.limits.panel_height,
            ),
            content_visible: self.panel.content_visible(),
            animating: self.panel.is_animating(),
        }
    }

    #[must_use]
    pub fn phase(&self) -> SlidePhase {
        self.panel.phase()
    }

    #[must_use]
    pub fn limits(&self) -> &SlideLimits {
        &self.limits
    }
}

#[cfg(test)]
mod tests {
    use super::{GestureDirection, SlidePanelController, classify_scroll};
    use crate::core::slide::limits::SlideLimits;
    use crate::core::slide::panel::SlidePhase;

    fn controller() -> SlidePanelController {
        SlidePanelController::new(SlideLimits::default())
    }

    #[test]
    fn negative_scroll_delta_is_upward() {
        assert_eq!(classify_scroll(-1.0), Some(GestureDirection::Upward));
        assert_eq!(classify_scroll(-0.001), Some(GestureDirection::Upward));
    }

    #[test]
    fn positive_scroll_delta_is_downward() {
        assert_eq!(classify_scroll(1.0), Some(GestureDirection::Downward));
        assert_eq!(classify_scroll(120.0), Some(GestureDirection::Downward));
    }

    #[test]
    fn zero_and_non_finite_deltas_are_ignored() {
        assert_eq!(classify_scroll(0.0), None);
        assert_eq!(classify_scroll(f64::NAN), None);
        assert_eq!(classify_scroll(f64::INFINITY), None);
    }

    #[test]
    fn fresh_start_scenario_runs_the_full_slide_cycle() {
        let mut controller = controller();

        // Fresh start: hidden at the bottom.
        let state = controller.frame_state();
        assert_eq!(state.offset, 590.0);
        assert!(!state.content_visible);
        assert_eq!(controller.phase(), SlidePhase::Hidden);

        // Upward gesture, then at least the slide duration elapses.
        controller.handle_upward();
        let _ = controller.tick(0.4);
        let state = controller.frame_state();
        assert_eq!(state.offset, 100.0);
        assert!(state.content_visible);
        assert_eq!(controller.phase(), SlidePhase::Shown);

        // Downward gesture hides content immediately.
        controller.handle_downward();
        let state = controller.frame_state();
        assert!(!state.content_visible);

        let _ = controller.tick(0.4);
        let state = controller.frame_state();
        assert_eq!(state.offset, 590.0);
        assert!(!state.content_visible);
        assert_eq!(controller.phase(), SlidePhase::Hidden);
    }

    #[test]
    fn frame_state_clip_tracks_the_offset() {
        let mut controller = controller();

        let clip = controller.frame_state().clip;
        assert_eq!(clip.y, 590);
        assert!(clip.is_empty());

        controller.handle_upward();
        let _ = controller.tick(0.4);

        let clip = controller.frame_state().clip;
        assert_eq!(clip.y, 100);
        assert_eq!(clip.height, 490);
        assert_eq!(clip.width, 330);
    }

    #[test]
    fn two_upward_gestures_match_the_terminal_state_of_one() {
        let mut once = controller();
        once.handle_upward();
        let _ = once.tick(0.4);

        let mut twice = controller();
        twice.handle_upward();
        let _ = twice.tick(0.15);
        twice.handle_upward();
        let _ = twice.tick(0.4);

        assert_eq!(once.frame_state(), twice.frame_state());
        assert_eq!(once.phase(), twice.phase());
    }

    #[test]
    fn absent_gesture_is_ignored() {
        let mut controller = controller();

        controller.handle_gesture(None);
        let report = controller.tick(0.4);

        assert!(!report.animating);
        assert_eq!(controller.phase(), SlidePhase::Hidden);
    }

    #[test]
    fn offset_stays_in_range_under_gesture_storms() {
        let mut controller = controller();
        let limits = SlideLimits::default();

        for step in 0..300 {
            let gesture = match step % 3 {
                0 => Some(GestureDirection::Upward),
                1 => Some(GestureDirection::Downward),
                _ => None,
            };
            controller.handle_gesture(gesture);
            let _ = controller.tick(0.013);

            let offset = controller.frame_state().offset;
            assert!(
                offset >= limits.upper_position && offset <= limits.hidden_offset(),
                "offset={}",
                offset
            );
        }
    }

    #[test]
    fn content_visible_only_after_a_completed_slide_in() {
        let mut controller = controller();

        controller.handle_upward();
        for _ in 0..3 {
            let _ = controller.tick(0.1);
            assert!(!controller.frame_state().content_visible);
        }

        let report = controller.tick(0.2);
        assert!(report.slide_in_finished);
        assert!(controller.frame_state().content_visible);
    }
}
