// Copyright 2025 the PadKit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Snapshot of every control value on a virtual gamepad.
//!
//! ## Absence vs. neutral
//!
//! A direction that is not being touched is *absent* from the state, which is
//! different from a direction that is touched and centered (`Vec2::ZERO`).
//! Setters take an `Option<Vec2>`; passing `None` removes the entry, so the
//! state never stores an "unspecified" value.

use alloc::collections::{BTreeMap, BTreeSet};

use kurbo::Vec2;

use crate::ids::{ContinuousDirectionId, DiscreteDirectionId, Id, KeyId};

/// The state of all controls at a given time.
///
/// Directions are y-up: `(0, 1)` is "up" for both sticks and d-pads.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InputState {
    pub(crate) digital_keys: BTreeSet<KeyId>,
    pub(crate) continuous_directions: BTreeMap<ContinuousDirectionId, Vec2>,
    pub(crate) discrete_directions: BTreeMap<DiscreteDirectionId, Vec2>,
}

impl InputState {
    /// Create an empty state: nothing pressed, no direction touched.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if no key is pressed and no direction is touched.
    pub fn is_empty(&self) -> bool {
        self.digital_keys.is_empty()
            && self.continuous_directions.is_empty()
            && self.discrete_directions.is_empty()
    }

    /// Whether the key is pressed.
    pub fn digital_key(&self, id: KeyId) -> bool {
        self.digital_keys.contains(&id)
    }

    /// Iterate over the pressed keys in ascending id order.
    pub fn pressed_keys(&self) -> impl Iterator<Item = KeyId> + '_ {
        self.digital_keys.iter().copied()
    }

    /// Set or clear a key.
    pub fn set_digital_key(&mut self, id: KeyId, pressed: bool) {
        if pressed {
            self.digital_keys.insert(id);
        } else {
            self.digital_keys.remove(&id);
        }
    }

    /// Press the key if `pressed`, otherwise leave the state untouched.
    ///
    /// Handlers only ever add keys on top of a fresh per-event state, so two
    /// controls sharing one key cannot release each other.
    pub fn press_digital_key_if(&mut self, id: KeyId, pressed: bool) {
        if pressed {
            self.digital_keys.insert(id);
        }
    }

    /// Consuming variant of [`InputState::set_digital_key`].
    #[must_use]
    pub fn with_digital_key(mut self, id: KeyId, pressed: bool) -> Self {
        self.set_digital_key(id, pressed);
        self
    }

    /// Offset of a continuous direction, or `None` when it is not touched.
    pub fn continuous_direction(&self, id: ContinuousDirectionId) -> Option<Vec2> {
        self.continuous_directions.get(&id).copied()
    }

    /// Offset of a continuous direction, or `default` when it is not touched.
    pub fn continuous_direction_or(&self, id: ContinuousDirectionId, default: Vec2) -> Vec2 {
        self.continuous_direction(id).unwrap_or(default)
    }

    /// Set a continuous direction; `None` marks it as released.
    pub fn set_continuous_direction(&mut self, id: ContinuousDirectionId, offset: Option<Vec2>) {
        match offset {
            Some(offset) => {
                self.continuous_directions.insert(id, offset);
            }
            None => {
                self.continuous_directions.remove(&id);
            }
        }
    }

    /// Consuming variant of [`InputState::set_continuous_direction`].
    #[must_use]
    pub fn with_continuous_direction(
        mut self,
        id: ContinuousDirectionId,
        offset: Option<Vec2>,
    ) -> Self {
        self.set_continuous_direction(id, offset);
        self
    }

    /// Offset of a discrete direction, or `None` when it is not touched.
    pub fn discrete_direction(&self, id: DiscreteDirectionId) -> Option<Vec2> {
        self.discrete_directions.get(&id).copied()
    }

    /// Offset of a discrete direction, or `default` when it is not touched.
    pub fn discrete_direction_or(&self, id: DiscreteDirectionId, default: Vec2) -> Vec2 {
        self.discrete_direction(id).unwrap_or(default)
    }

    /// Set a discrete direction; `None` marks it as released.
    pub fn set_discrete_direction(&mut self, id: DiscreteDirectionId, offset: Option<Vec2>) {
        match offset {
            Some(offset) => {
                self.discrete_directions.insert(id, offset);
            }
            None => {
                self.discrete_directions.remove(&id);
            }
        }
    }

    /// Consuming variant of [`InputState::set_discrete_direction`].
    #[must_use]
    pub fn with_discrete_direction(
        mut self,
        id: DiscreteDirectionId,
        offset: Option<Vec2>,
    ) -> Self {
        self.set_discrete_direction(id, offset);
        self
    }

    /// Iterate over the touched continuous directions in ascending id order.
    pub fn continuous_directions(
        &self,
    ) -> impl Iterator<Item = (ContinuousDirectionId, Vec2)> + '_ {
        self.continuous_directions.iter().map(|(id, v)| (*id, *v))
    }

    /// Iterate over the touched discrete directions in ascending id order.
    pub fn discrete_directions(&self) -> impl Iterator<Item = (DiscreteDirectionId, Vec2)> + '_ {
        self.discrete_directions.iter().map(|(id, v)| (*id, *v))
    }

    /// Copy the value of `id` from `other`, including its absence.
    pub fn copy_from(&mut self, other: &Self, id: Id) {
        match id {
            Id::Key(key) => self.set_digital_key(key, other.digital_key(key)),
            Id::ContinuousDirection(dir) => {
                self.set_continuous_direction(dir, other.continuous_direction(dir));
            }
            Id::DiscreteDirection(dir) => {
                self.set_discrete_direction(dir, other.discrete_direction(dir));
            }
        }
    }
}

/// Override the controls listed in `ids` with their values from `simulated`.
///
/// Hosts use this to drive a subset of controls from another source (for
/// example device tilt) while the remaining controls keep following touches.
pub fn merge_simulated<'a>(
    ids: impl IntoIterator<Item = &'a Id>,
    live: InputState,
    simulated: &InputState,
) -> InputState {
    ids.into_iter().fold(live, |mut state, id| {
        state.copy_from(simulated, *id);
        state
    })
}
