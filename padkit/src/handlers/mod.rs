// Copyright 2025 the PadKit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer handlers: per-control resolution of local pointers into state.
//!
//! ## Contract
//!
//! The [`DispatchScope`](crate::scope::DispatchScope) calls
//! [`PointerHandler::handle`] once per pointer frame for every registered
//! handler, in registration order. A handler receives:
//!
//! - the pointers routed to it, already mapped to its local `[-1, 1]²` space
//!   and filtered (see the scope docs),
//! - the ids it tracked after the previous frame,
//! - the state accumulated so far this frame.
//!
//! It returns the state with its own controls written, and the ids it wants
//! to keep tracking. Handlers only ever write the controls they own.
//!
//! Any state a handler needs across frames lives in the handler value
//! itself, which the scope owns for as long as it is registered.

use std::collections::BTreeSet;
use core::time::Duration;

use kurbo::Point;
use padkit_state::state::InputState;

mod analog;
mod button;
mod cross;
mod face_buttons;

pub use analog::{AnalogData, AnalogHandler};
pub use button::ButtonHandler;
pub use cross::CrossHandler;
pub use face_buttons::FaceButtonsHandler;

/// Identifier of a touch contact, stable from touch down to touch up.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct PointerId(pub u64);

/// A pointer that is currently down.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Pointer {
    /// Contact id.
    pub id: PointerId,
    /// Position; screen space at dispatch time, local space inside handlers.
    pub position: Point,
}

impl Pointer {
    /// Create a pointer.
    pub fn new(id: u64, x: f64, y: f64) -> Self {
        Self {
            id: PointerId(id),
            position: Point::new(x, y),
        }
    }
}

/// Pointer ids claimed by a handler.
pub type TrackedIds = BTreeSet<PointerId>;

/// Input of a single [`PointerHandler::handle`] call.
#[derive(Copy, Clone, Debug)]
pub struct HandlerFrame<'a> {
    /// Local pointers routed to this handler.
    pub pointers: &'a [Pointer],
    /// Ids tracked by this handler after the previous frame.
    pub tracked: &'a TrackedIds,
    /// Timestamp of the frame, on the host's monotonic clock.
    pub now: Duration,
}

impl HandlerFrame<'_> {
    /// The first pointer this handler already tracks, if any.
    pub fn tracked_pointer(&self) -> Option<&Pointer> {
        self.pointers.iter().find(|p| self.tracked.contains(&p.id))
    }
}

/// Output of a single [`PointerHandler::handle`] call.
#[derive(Clone, Debug, PartialEq)]
pub struct HandlerResult {
    /// Accumulated state with this handler's controls written.
    pub state: InputState,
    /// Ids to route to this handler on the next frame regardless of position.
    pub tracked: TrackedIds,
}

/// Resolves the pointers of one control.
pub trait PointerHandler {
    /// Fold this handler's view of `frame` into `state`.
    fn handle(&mut self, frame: HandlerFrame<'_>, state: InputState) -> HandlerResult;
}

#[cfg(test)]
pub(crate) mod test_util {
    use super::*;

    /// Run a handler with explicit tracked ids, returning the new state and ids.
    pub(crate) fn run(
        handler: &mut impl PointerHandler,
        pointers: &[Pointer],
        tracked: &TrackedIds,
        now_ms: u64,
    ) -> HandlerResult {
        handler.handle(
            HandlerFrame {
                pointers,
                tracked,
                now: Duration::from_millis(now_ms),
            },
            InputState::new(),
        )
    }

    pub(crate) fn ids(ids: &[u64]) -> TrackedIds {
        ids.iter().copied().map(PointerId).collect()
    }
}
