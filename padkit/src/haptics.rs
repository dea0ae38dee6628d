// Copyright 2025 the PadKit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Haptic feedback derived from state transitions.
//!
//! The engine never talks to a vibration motor itself. Hosts implement
//! [`HapticGenerator`] and [`InputHapticGenerator`] decides when to call it:
//!
//! - `Press` when a key becomes pressed or a d-pad moves to a new
//!   non-neutral direction,
//! - `Release` when a key is released or a d-pad returns to neutral, only if
//!   the feedback type includes [`HapticFeedbackType::RELEASE`].
//!
//! Analog sticks never generate feedback. Each kind fires at most once per
//! state change, however many controls moved.

use kurbo::Vec2;
use padkit_state::state::InputState;

bitflags::bitflags! {
    /// Which transitions produce feedback.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct HapticFeedbackType: u8 {
        /// Feedback when a control is pressed.
        const PRESS   = 0b0000_0001;
        /// Feedback when a control is released.
        const RELEASE = 0b0000_0010;
        /// Feedback on both edges.
        const PRESS_RELEASE = Self::PRESS.bits() | Self::RELEASE.bits();
    }
}

impl HapticFeedbackType {
    /// No feedback at all.
    pub const NONE: Self = Self::empty();
}

impl Default for HapticFeedbackType {
    fn default() -> Self {
        Self::PRESS
    }
}

/// A single feedback pulse.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum HapticKind {
    /// A control was pressed.
    Press,
    /// A control was released.
    Release,
}

/// Host-side feedback sink.
pub trait HapticGenerator {
    /// Play one pulse. Advisory; failures are the host's business.
    fn generate(&mut self, kind: HapticKind);
}

/// A generator that does nothing, for hosts without a motor.
#[derive(Copy, Clone, Debug, Default)]
pub struct NoHaptics;

impl HapticGenerator for NoHaptics {
    fn generate(&mut self, _kind: HapticKind) {}
}

impl<F: FnMut(HapticKind)> HapticGenerator for F {
    fn generate(&mut self, kind: HapticKind) {
        self(kind);
    }
}

/// Turns successive states into calls on a [`HapticGenerator`].
#[derive(Clone, Debug)]
pub struct InputHapticGenerator<G> {
    generator: G,
    feedback: HapticFeedbackType,
    previous: InputState,
}

impl<G: HapticGenerator> InputHapticGenerator<G> {
    /// Create a bridge starting from `initial`.
    pub fn new(generator: G, feedback: HapticFeedbackType, initial: InputState) -> Self {
        Self {
            generator,
            feedback,
            previous: initial,
        }
    }

    /// Configured feedback type.
    pub fn feedback(&self) -> HapticFeedbackType {
        self.feedback
    }

    /// Change the feedback type; takes effect on the next state.
    pub fn set_feedback(&mut self, feedback: HapticFeedbackType) {
        self.feedback = feedback;
    }

    /// The wrapped generator.
    pub fn generator(&self) -> &G {
        &self.generator
    }

    /// Compare `state` against the previous one and emit pulses.
    pub fn on_input_state_changed(&mut self, state: &InputState) {
        let (pressed, released) = transitions(&self.previous, state);
        if pressed && self.feedback.contains(HapticFeedbackType::PRESS) {
            self.generator.generate(HapticKind::Press);
        }
        if released && self.feedback.contains(HapticFeedbackType::RELEASE) {
            self.generator.generate(HapticKind::Release);
        }
        self.previous.clone_from(state);
    }
}

fn is_active(direction: Option<Vec2>) -> bool {
    direction.is_some_and(|d| d != Vec2::ZERO)
}

/// Whether any control was pressed, and whether any was released.
fn transitions(previous: &InputState, next: &InputState) -> (bool, bool) {
    let mut pressed = next.pressed_keys().any(|k| !previous.digital_key(k));
    let mut released = previous.pressed_keys().any(|k| !next.digital_key(k));

    for (id, direction) in next.discrete_directions() {
        let before = previous.discrete_direction(id);
        if is_active(Some(direction)) && before != Some(direction) {
            pressed = true;
        }
        if !is_active(Some(direction)) && is_active(before) {
            released = true;
        }
    }
    released |= previous
        .discrete_directions()
        .any(|(id, d)| is_active(Some(d)) && next.discrete_direction(id).is_none());

    (pressed, released)
}
