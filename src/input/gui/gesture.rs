use crate::controllers::slide_panel::{GestureDirection, classify_scroll};
use winit::event::{MouseScrollDelta, TouchPhase};

/// Minimum vertical travel, in physical pixels, before a touch counts as a
/// swipe rather than a tap.
const SWIPE_THRESHOLD: f64 = 30.0;

/// Tracks scroll and touch events between redraws and collapses them into a
/// single pending gesture, consumed once per frame.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct GestureInputState {
    touch_origin: Option<(u64, f64)>,
    pending: Option<GestureDirection>,
}

impl GestureInputState {
    pub fn handle_scroll(&mut self, delta: MouseScrollDelta) {
        let delta_y = match delta {
            MouseScrollDelta::LineDelta(_, y) => f64::from(y),
            MouseScrollDelta::PixelDelta(position) => position.y,
        };

        if let Some(direction) = classify_scroll(delta_y) {
            self.pending = Some(direction);
        }
    }

    /// Feeds one touch event, identified by finger id and vertical position.
    /// A finger that travels past the swipe threshold between start and end
    /// produces a gesture; anything else is ignored.
    pub fn handle_touch(&mut self, phase: TouchPhase, id: u64, y: f64) {
        match phase {
            TouchPhase::Started => {
                self.touch_origin = Some((id, y));
            }
            TouchPhase::Moved => {}
            TouchPhase::Ended => {
                if let Some((origin_id, origin_y)) = self.touch_origin {
                    if origin_id == id {
                        self.touch_origin = None;
                        let travel = y - origin_y;
                        if travel <= -SWIPE_THRESHOLD {
                            self.pending = Some(GestureDirection::Upward);
                        } else if travel >= SWIPE_THRESHOLD {
                            self.pending = Some(GestureDirection::Downward);
                        }
                    }
                }
            }
            TouchPhase::Cancelled => {
                self.touch_origin = None;
            }
        }
    }

    /// Consumes the pending gesture, if any.
    pub fn take_pending(&mut self) -> Option<GestureDirection> {
        self.pending.take()
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::GestureInputState;
    use crate::controllers::slide_panel::GestureDirection;
    use winit::dpi::PhysicalPosition;
    use winit::event::{MouseScrollDelta, TouchPhase};

    #[test]
    fn line_scroll_up_produces_an_upward_gesture() {
        let mut input = GestureInputState::default();

        input.handle_scroll(MouseScrollDelta::LineDelta(0.0, -1.0));

        assert_eq!(input.take_pending(), Some(GestureDirection::Upward));
        assert_eq!(input.take_pending(), None);
    }

    #[test]
    fn pixel_scroll_down_produces_a_downward_gesture() {
        let mut input = GestureInputState::default();

        input.handle_scroll(MouseScrollDelta::PixelDelta(PhysicalPosition::new(
            0.0, 42.0,
        )));

        assert_eq!(input.take_pending(), Some(GestureDirection::Downward));
    }

    #[test]
    fn zero_delta_scroll_is_ignored() {
        let mut input = GestureInputState::default();

        input.handle_scroll(MouseScrollDelta::LineDelta(0.0, 0.0));

        assert_eq!(input.take_pending(), None);
    }

    #[test]
    fn swipe_up_past_the_threshold_is_upward() {
        let mut input = GestureInputState::default();

        input.handle_touch(TouchPhase::Started, 7, 400.0);
        input.handle_touch(TouchPhase::Moved, 7, 350.0);
        input.handle_touch(TouchPhase::Ended, 7, 300.0);

        assert_eq!(input.take_pending(), Some(GestureDirection::Upward));
    }

    #[test]
    fn swipe_down_past_the_threshold_is_downward() {
        let mut input = GestureInputState::default();

        input.handle_touch(TouchPhase::Started, 7, 200.0);
        input.handle_touch(TouchPhase::Ended, 7, 280.0);

        assert_eq!(input.take_pending(), Some(GestureDirection::Downward));
    }

    #[test]
    fn short_travel_is_a_tap_not_a_swipe() {
        let mut input = GestureInputState::default();

        input.handle_touch(TouchPhase::Started, 7, 200.0);
        input.handle_touch(TouchPhase::Ended, 7, 210.0);

        assert_eq!(input.take_pending(), None);
    }

    #[test]
    fn cancelled_touch_produces_no_gesture() {
        let mut input = GestureInputState::default();

        input.handle_touch(TouchPhase::Started, 7, 200.0);
        input.handle_touch(TouchPhase::Cancelled, 7, 200.0);
        input.handle_touch(TouchPhase::Ended, 7, 500.0);

        assert_eq!(input.take_pending(), None);
    }

    #[test]
    fn end_of_an_unknown_finger_is_ignored() {
        let mut input = GestureInputState::default();

        input.handle_touch(TouchPhase::Started, 7, 400.0);
        input.handle_touch(TouchPhase::Ended, 8, 100.0);

        assert_eq!(input.take_pending(), None);
    }

    #[test]
    fn newest_gesture_wins_between_redraws() {
        let mut input = GestureInputState::default();

        input.handle_scroll(MouseScrollDelta::LineDelta(0.0, -1.0));
        input.handle_scroll(MouseScrollDelta::LineDelta(0.0, 1.0));

        assert_eq!(input.take_pending(), Some(GestureDirection::Downward));
    }

    #[test]
    fn reset_clears_pending_gesture_and_touch_origin() {
        let mut input = GestureInputState::default();
        input.handle_touch(TouchPhase::Started, 7, 400.0);
        input.handle_scroll(MouseScrollDelta::LineDelta(0.0, -1.0));

        input.reset();

        assert_eq!(input.take_pending(), None);
        input.handle_touch(TouchPhase::Ended, 7, 100.0);
        assert_eq!(input.take_pending(), None);
    }
}
