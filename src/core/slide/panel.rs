use crate::core::slide::limits::SlideLimits;
use crate::core::slide::timeline::SlideTimeline;

/// Where the panel currently sits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlidePhase {
    /// Offset at the bottom of the panel; no frost visible.
    Hidden,
    /// A slide timeline is moving the offset.
    Sliding,
    /// Offset at the upper position; frost fully revealed.
    Shown,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SlideTickReport {
    pub offset_changed: bool,
    pub slide_in_finished: bool,
    pub slide_out_finished: bool,
    pub animating: bool,
}

/// The slide state machine: one animated offset, two timelines, and the
/// overlay visibility flag.
///
/// Starting either direction explicitly stops the other timeline first, so
/// only one of them ever writes the offset. Overlay content becomes visible
/// only when a slide-in completes; it is hidden the moment a slide-out
/// starts.
#[derive(Debug, Clone, PartialEq)]
pub struct SlidePanel {
    limits: SlideLimits,
    offset: f64,
    phase: SlidePhase,
    content_visible: bool,
    slide_in: SlideTimeline,
    slide_out: SlideTimeline,
}

impl SlidePanel {
    #[must_use]
    pub fn new(limits: SlideLimits) -> Self {
        Self {
            limits,
            offset: limits.hidden_offset(),
            phase: SlidePhase::Hidden,
            content_visible: false,
            slide_in: SlideTimeline::new(limits.upper_position, limits.slide_duration_secs),
            slide_out: SlideTimeline::new(limits.hidden_offset(), limits.slide_duration_secs),
        }
    }

    /// Slides the frost panel toward the upper position. The overlay stays
    /// in its current visibility state until the slide-in completes.
    pub fn start_slide_in(&mut self) {
        self.slide_out.stop();
        self.slide_in.play(self.offset);
        self.phase = SlidePhase::Sliding;
    }

    /// Slides the frost panel off the bottom. The overlay is hidden
    /// immediately, not when the slide completes.
    pub fn start_slide_out(&mut self) {
        self.slide_in.stop();
        self.slide_out.play(self.offset);
        self.content_visible = false;
        self.phase = SlidePhase::Sliding;
    }

    /// Advances whichever timeline is running by `dt_secs`.
    pub fn tick(&mut self, dt_secs: f64) -> SlideTickReport {
        let mut report = SlideTickReport::default();

        if let Some(update) = self.slide_in.tick(dt_secs) {
            report.offset_changed = update.offset != self.offset;
            self.offset = self.clamp_offset(update.offset);

            if update.finished {
                self.content_visible = true;
                self.phase = SlidePhase::Shown;
                report.slide_in_finished = true;
            }
        } else if let Some(update) = self.slide_out.tick(dt_secs) {
            report.offset_changed = update.offset != self.offset;
            self.offset = self.clamp_offset(update.offset);

            if update.finished {
                self.phase = SlidePhase::Hidden;
                report.slide_out_finished = true;
            }
        }

        report.animating = self.is_animating();
        report
    }

    #[must_use]
    pub fn offset(&self) -> f64 {
        self.offset
    }

    #[must_use]
    pub fn phase(&self) -> SlidePhase {
        self.phase
    }

    #[must_use]
    pub fn content_visible(&self) -> bool {
        self.content_visible
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.slide_in.is_running() || self.slide_out.is_running()
    }

    fn clamp_offset(&self, offset: f64) -> f64 {
        offset.clamp(self.limits.upper_position, self.limits.hidden_offset())
    }
}
