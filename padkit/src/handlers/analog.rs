// Copyright 2025 the PadKit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::time::Duration;

use kurbo::{Point, Vec2};
use padkit_state::ids::{ContinuousDirectionId, KeyId};
use padkit_state::state::InputState;

use super::{HandlerFrame, HandlerResult, PointerHandler, TrackedIds};
use crate::config::PadConfig;
use crate::geometry::{clamp_unit, map_square_to_circle};

/// Per-stick scratch state carried between frames.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct AnalogData {
    /// Time of the last touch down on the stick.
    pub last_down: Option<Duration>,
    /// Whether the current touch started as a double tap.
    pub pressed: bool,
    /// Local position where the current touch started.
    pub start_position: Option<Point>,
}

/// A floating analog stick.
///
/// The stick centers wherever the finger lands and reports the offset from
/// that point. A touch that starts within the double-tap interval of the
/// previous one also holds the optional press key until it lifts.
#[derive(Clone, Debug)]
pub struct AnalogHandler {
    id: ContinuousDirectionId,
    press_id: Option<KeyId>,
    double_tap_interval: Duration,
    data: AnalogData,
}

impl AnalogHandler {
    /// Create a handler writing the direction `id`.
    pub fn new(id: ContinuousDirectionId, press_id: Option<KeyId>) -> Self {
        Self {
            id,
            press_id,
            double_tap_interval: PadConfig::DEFAULT_DOUBLE_TAP_INTERVAL,
            data: AnalogData::default(),
        }
    }

    /// Override the double-tap window.
    #[must_use]
    pub fn with_double_tap_interval(mut self, interval: Duration) -> Self {
        self.double_tap_interval = interval;
        self
    }

    /// Current scratch state.
    pub fn data(&self) -> &AnalogData {
        &self.data
    }

    fn write(&self, state: &mut InputState, direction: Option<Vec2>) {
        state.set_continuous_direction(self.id, direction);
        if let Some(press_id) = self.press_id {
            state.press_digital_key_if(press_id, self.data.pressed);
        }
    }
}

impl PointerHandler for AnalogHandler {
    fn handle(&mut self, frame: HandlerFrame<'_>, mut state: InputState) -> HandlerResult {
        let Some(first) = frame.pointers.first() else {
            self.data.pressed = false;
            self.data.start_position = None;
            self.write(&mut state, None);
            return HandlerResult {
                state,
                tracked: TrackedIds::new(),
            };
        };

        if let (Some(start), Some(pointer)) = (self.data.start_position, frame.tracked_pointer()) {
            let delta = Vec2::new(pointer.position.x - start.x, start.y - pointer.position.y);
            let direction = map_square_to_circle(clamp_unit(delta));
            self.write(&mut state, Some(direction));
            return HandlerResult {
                state,
                tracked: TrackedIds::from([pointer.id]),
            };
        }

        self.data.pressed = self
            .data
            .last_down
            .and_then(|last| frame.now.checked_sub(last))
            .is_some_and(|elapsed| elapsed < self.double_tap_interval);
        self.data.last_down = Some(frame.now);
        self.data.start_position = Some(first.position);
        self.write(&mut state, Some(Vec2::ZERO));
        HandlerResult {
            state,
            tracked: TrackedIds::from([first.id]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::Pointer;
    use crate::handlers::test_util::{ids, run};

    const STICK: ContinuousDirectionId = ContinuousDirectionId(0);
    const L3: KeyId = KeyId(10);

    fn close(a: Option<Vec2>, b: Vec2) -> bool {
        a.is_some_and(|a| (a - b).hypot() < 1e-9)
    }

    #[test]
    fn touch_down_centers_then_follows() {
        let mut h = AnalogHandler::new(STICK, None);
        let r = run(&mut h, &[Pointer::new(1, 0.2, 0.2)], &ids(&[]), 0);
        assert_eq!(r.state.continuous_direction(STICK), Some(Vec2::ZERO));
        assert_eq!(r.tracked, ids(&[1]));

        // Moving up the screen (towards -y) reads as +y.
        let r = run(&mut h, &[Pointer::new(1, 0.2, -0.3)], &r.tracked, 16);
        assert!(close(r.state.continuous_direction(STICK), Vec2::new(0.0, 0.5)));

        let r = run(&mut h, &[], &r.tracked, 32);
        assert_eq!(r.state.continuous_direction(STICK), None);
        assert!(r.tracked.is_empty());
        assert_eq!(h.data().start_position, None);
    }

    #[test]
    fn offset_is_clamped_and_mapped_onto_the_disc() {
        let mut h = AnalogHandler::new(STICK, None);
        let r = run(&mut h, &[Pointer::new(1, 0.0, 0.0)], &ids(&[]), 0);
        // A tracked pointer keeps driving the stick even far outside the control.
        let r = run(&mut h, &[Pointer::new(1, 3.0, -3.0)], &r.tracked, 16);
        let d = r.state.continuous_direction(STICK).unwrap();
        assert!((d.hypot() - 1.0).abs() < 1e-9, "{d:?}");
        assert!(d.x > 0.0 && d.y > 0.0);
    }

    #[test]
    fn double_tap_within_interval_presses() {
        let mut h = AnalogHandler::new(STICK, Some(L3));
        let r = run(&mut h, &[Pointer::new(1, 0.0, 0.0)], &ids(&[]), 1_000);
        assert!(!r.state.digital_key(L3));
        let r = run(&mut h, &[], &r.tracked, 1_050);
        assert!(!r.state.digital_key(L3));

        let r = run(&mut h, &[Pointer::new(2, 0.1, 0.1)], &r.tracked, 1_200);
        assert!(r.state.digital_key(L3));
        // Held for the rest of the touch.
        let r = run(&mut h, &[Pointer::new(2, 0.5, 0.1)], &r.tracked, 2_000);
        assert!(r.state.digital_key(L3));
        let r = run(&mut h, &[], &r.tracked, 2_100);
        assert!(!r.state.digital_key(L3));
    }

    #[test]
    fn slow_second_tap_does_not_press() {
        let mut h = AnalogHandler::new(STICK, Some(L3));
        let r = run(&mut h, &[Pointer::new(1, 0.0, 0.0)], &ids(&[]), 0);
        let r = run(&mut h, &[], &r.tracked, 100);
        let r = run(&mut h, &[Pointer::new(2, 0.0, 0.0)], &r.tracked, 400);
        assert!(!r.state.digital_key(L3));
        assert_eq!(h.data().last_down, Some(Duration::from_millis(400)));
    }

    #[test]
    fn untracked_pointer_restarts_the_stick() {
        let mut h = AnalogHandler::new(STICK, None);
        let r = run(&mut h, &[Pointer::new(1, 0.0, 0.0)], &ids(&[]), 0);
        // Pointer 1 went away without an empty frame; pointer 5 takes over.
        let r = run(&mut h, &[Pointer::new(5, 0.4, 0.4)], &r.tracked, 16);
        assert_eq!(r.state.continuous_direction(STICK), Some(Vec2::ZERO));
        assert_eq!(r.tracked, ids(&[5]));
        assert_eq!(h.data().start_position, Some(Point::new(0.4, 0.4)));
    }
}
