// Copyright 2025 the PadKit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The pad: one object per on-screen gamepad.
//!
//! [`PadKit`] wires a [`DispatchScope`] to the outputs a host cares about.
//! Feed it every raw pointer frame; when the resulting state differs from
//! the last one it returns a [`PadUpdate`] with the new state and the edge
//! events, and it plays haptics as a side effect.
//!
//! ## Simulated controls
//!
//! Hosts can drive some controls from another source (tilt, a replay, a
//! demo script). The ids listed with [`PadKit::set_simulated`] take their
//! values from the simulated state after every dispatch, overriding touch.

use std::collections::BTreeSet;
use std::time::Duration;

use kurbo::{Point, Vec2};
use padkit_state::events::{InputEvent, InputEventsGenerator};
use padkit_state::ids::Id;
use padkit_state::state::{InputState, merge_simulated};

use crate::config::PadConfig;
use crate::handlers::{Pointer, PointerId};
use crate::haptics::{HapticFeedbackType, HapticGenerator, InputHapticGenerator};
use crate::scope::DispatchScope;

/// A pointer as reported by the host, relative to the pad's root.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RawPointer {
    /// Contact id.
    pub id: u64,
    /// Position relative to the pad's root.
    pub position: Point,
    /// Whether the contact is down. Lifted contacts are ignored.
    pub pressed: bool,
}

/// What changed after a frame.
#[derive(Clone, Debug, PartialEq)]
pub struct PadUpdate {
    /// Complete state of the pad.
    pub state: InputState,
    /// Edge events relative to the previous state.
    pub events: Vec<InputEvent>,
}

/// A virtual gamepad.
pub struct PadKit<G> {
    scope: DispatchScope,
    events: InputEventsGenerator,
    haptics: InputHapticGenerator<G>,
    root_position: Vec2,
    simulated_ids: BTreeSet<Id>,
    simulated_state: InputState,
    state: InputState,
}

impl<G> core::fmt::Debug for PadKit<G> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("PadKit")
            .field("scope", &self.scope)
            .field("root_position", &self.root_position)
            .field("simulated_ids", &self.simulated_ids)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

impl<G: HapticGenerator> PadKit<G> {
    /// Create an empty pad.
    pub fn new(config: PadConfig, haptics: G, feedback: HapticFeedbackType) -> Self {
        Self {
            scope: DispatchScope::new(config),
            events: InputEventsGenerator::new(),
            haptics: InputHapticGenerator::new(haptics, feedback, InputState::new()),
            root_position: Vec2::ZERO,
            simulated_ids: BTreeSet::new(),
            simulated_state: InputState::new(),
            state: InputState::new(),
        }
    }

    /// The scope, for reading registrations.
    pub fn scope(&self) -> &DispatchScope {
        &self.scope
    }

    /// The scope, for registering and laying out controls.
    ///
    /// Handler rects are in root-relative coordinates offset by
    /// [`PadKit::set_root_position`], the same space the scope sees.
    pub fn scope_mut(&mut self) -> &mut DispatchScope {
        &mut self.scope
    }

    /// Current state.
    pub fn state(&self) -> &InputState {
        &self.state
    }

    /// Haptic bridge, for changing the feedback type.
    pub fn haptics_mut(&mut self) -> &mut InputHapticGenerator<G> {
        &mut self.haptics
    }

    /// Position of the pad's root on screen; added to every raw pointer.
    pub fn set_root_position(&mut self, position: Point) {
        self.root_position = position.to_vec2();
    }

    /// Dispatch one frame of raw pointers.
    pub fn on_pointer_frame(
        &mut self,
        pointers: &[RawPointer],
        now: Duration,
    ) -> Option<PadUpdate> {
        let pointers: Vec<Pointer> = pointers
            .iter()
            .filter(|p| p.pressed)
            .map(|p| Pointer {
                id: PointerId(p.id),
                position: p.position + self.root_position,
            })
            .collect();
        let live = self.scope.handle(&pointers, now).clone();
        let state = merge_simulated(&self.simulated_ids, live, &self.simulated_state);
        self.publish(state)
    }

    /// Replace the simulated ids and their state, then re-merge.
    pub fn set_simulated(
        &mut self,
        ids: impl IntoIterator<Item = Id>,
        state: InputState,
    ) -> Option<PadUpdate> {
        self.simulated_ids = ids.into_iter().collect();
        self.simulated_state = state;
        let live = self.scope.input_state().clone();
        let state = merge_simulated(&self.simulated_ids, live, &self.simulated_state);
        self.publish(state)
    }

    fn publish(&mut self, state: InputState) -> Option<PadUpdate> {
        if state == self.state {
            return None;
        }
        let events = self.events.on_input_state_changed(&state);
        self.haptics.on_input_state_changed(&state);
        self.state.clone_from(&state);
        Some(PadUpdate { state, events })
    }
}
