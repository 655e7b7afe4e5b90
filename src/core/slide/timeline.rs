/// A fixed-duration linear interpolation of the animated offset toward a
/// target position.
///
/// `play` captures the offset it is handed and restarts elapsed time, so a
/// timeline restarted mid-flight continues from wherever the opposing one
/// left the offset rather than snapping back to a start position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlideTimeline {
    target: f64,
    duration_secs: f64,
    from: f64,
    elapsed_secs: f64,
    running: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimelineUpdate {
    pub offset: f64,
    pub finished: bool,
}

impl SlideTimeline {
    #[must_use]
    pub fn new(target: f64, duration_secs: f64) -> Self {
        Self {
            target,
            duration_secs,
            from: target,
            elapsed_secs: 0.0,
            running: false,
        }
    }

    pub fn play(&mut self, from: f64) {
        self.from = from;
        self.elapsed_secs = 0.0;
        self.running = true;
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running
    }

    #[must_use]
    pub fn target(&self) -> f64 {
        self.target
    }

    /// Advances the timeline by `dt_secs` and reports the new offset.
    ///
    /// Returns `None` while stopped. Non-finite or negative steps are
    /// treated as zero. A finished timeline lands exactly on its target and
    /// stops itself.
    pub fn tick(&mut self, dt_secs: f64) -> Option<TimelineUpdate> {
        if !self.running {
            return None;
        }

        let safe_dt = if dt_secs.is_finite() && dt_secs > 0.0 {
            dt_secs
        } else {
            0.0
        };
        self.elapsed_secs += safe_dt;

        if self.duration_secs <= 0.0 || self.elapsed_secs >= self.duration_secs {
            self.running = false;
            return Some(TimelineUpdate {
                offset: self.target,
                finished: true,
            });
        }

        let progress = self.elapsed_secs / self.duration_secs;
        Some(TimelineUpdate {
            offset: self.from + (self.target - self.from) * progress,
            finished: false,
        })
    }
}
