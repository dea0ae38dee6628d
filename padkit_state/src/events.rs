// Copyright 2025 the PadKit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Edge-triggered input events derived from consecutive state snapshots.
//!
//! ## Usage
//!
//! 1) Produce an [`InputState`] per pointer frame (for example with the `padkit` dispatch scope).
//! 2) Feed it to [`InputEventsGenerator::on_input_state_changed`] to get the changes since the
//!    previous snapshot, or wrap a whole sequence of snapshots with [`events_from_states`].
//!
//! ## Minimal example
//!
//! ```
//! use padkit_state::events::{InputEvent, InputEventsGenerator};
//! use padkit_state::ids::KeyId;
//! use padkit_state::state::InputState;
//!
//! let mut events = InputEventsGenerator::new();
//! let pressed = InputState::new().with_digital_key(KeyId(96), true);
//! assert_eq!(
//!     events.on_input_state_changed(&pressed),
//!     vec![InputEvent::Button { id: KeyId(96), pressed: true }]
//! );
//! assert!(events.on_input_state_changed(&pressed).is_empty());
//! ```
//!
//! ## Ordering
//!
//! Within one transition, button events come first, then continuous
//! directions, then discrete directions; each group is in ascending id order.

use alloc::collections::{BTreeSet, VecDeque};
use alloc::vec::Vec;

use kurbo::Vec2;

use crate::ids::{ContinuousDirectionId, DiscreteDirectionId, KeyId};
use crate::state::InputState;

/// A single change of one control.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InputEvent {
    /// A key was pressed or released.
    Button {
        /// The key.
        id: KeyId,
        /// New pressed status.
        pressed: bool,
    },
    /// A continuous direction changed; `None` means it was released.
    ContinuousDirection {
        /// The control.
        id: ContinuousDirectionId,
        /// New offset, y-up.
        direction: Option<Vec2>,
    },
    /// A discrete direction changed; `None` means it was released.
    DiscreteDirection {
        /// The control.
        id: DiscreteDirectionId,
        /// New offset, y-up.
        direction: Option<Vec2>,
    },
}

/// Compute the events that turn `previous` into `next`.
///
/// Unchanged controls produce no event.
pub fn diff(previous: &InputState, next: &InputState) -> Vec<InputEvent> {
    let mut out = Vec::new();

    // Ascending order across both sides.
    for &id in previous.digital_keys.symmetric_difference(&next.digital_keys) {
        out.push(InputEvent::Button {
            id,
            pressed: next.digital_keys.contains(&id),
        });
    }

    let continuous = previous
        .continuous_directions
        .keys()
        .chain(next.continuous_directions.keys())
        .copied()
        .collect::<BTreeSet<_>>();
    for id in continuous {
        let old = previous.continuous_direction(id);
        let new = next.continuous_direction(id);
        if old != new {
            out.push(InputEvent::ContinuousDirection { id, direction: new });
        }
    }

    let discrete = previous
        .discrete_directions
        .keys()
        .chain(next.discrete_directions.keys())
        .copied()
        .collect::<BTreeSet<_>>();
    for id in discrete {
        let old = previous.discrete_direction(id);
        let new = next.discrete_direction(id);
        if old != new {
            out.push(InputEvent::DiscreteDirection { id, direction: new });
        }
    }

    out
}

/// Turns a level-triggered stream of states into edge-triggered events.
///
/// Remembers exactly one snapshot: the last one it was given.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct InputEventsGenerator {
    previous: InputState,
}

impl InputEventsGenerator {
    /// Create a generator whose previous snapshot is the empty state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a generator that diffs against `initial` first.
    pub fn with_initial(initial: InputState) -> Self {
        Self { previous: initial }
    }

    /// The last snapshot seen.
    pub fn previous(&self) -> &InputState {
        &self.previous
    }

    /// Return the events between the previous snapshot and `state`, then
    /// remember `state`.
    pub fn on_input_state_changed(&mut self, state: &InputState) -> Vec<InputEvent> {
        let out = diff(&self.previous, state);
        if !out.is_empty() {
            self.previous = state.clone();
        }
        out
    }
}

/// Lazy event sequence over a sequence of snapshots.
///
/// Returned by [`events_from_states`]. The source is consumed as events are
/// pulled, so the stream cannot be restarted; it ends when the source ends.
#[derive(Debug)]
pub struct EventStream<I> {
    states: I,
    generator: InputEventsGenerator,
    pending: VecDeque<InputEvent>,
}

impl<I: Iterator<Item = InputState>> Iterator for EventStream<I> {
    type Item = InputEvent;

    fn next(&mut self) -> Option<InputEvent> {
        loop {
            if let Some(event) = self.pending.pop_front() {
                return Some(event);
            }
            let state = self.states.next()?;
            self.pending
                .extend(self.generator.on_input_state_changed(&state));
        }
    }
}

/// Derive events from consecutive snapshots, starting from the empty state.
pub fn events_from_states<I>(states: I) -> EventStream<I::IntoIter>
where
    I: IntoIterator<Item = InputState>,
{
    EventStream {
        states: states.into_iter(),
        generator: InputEventsGenerator::new(),
        pending: VecDeque::new(),
    }
}
