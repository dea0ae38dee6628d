// Copyright 2025 the PadKit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dispatch scope: routes screen pointers to registered handlers.
//!
//! ## Overview
//!
//! The scope owns every live [`PointerHandler`] together with its screen
//! rectangle and the pointer ids it tracks. Each call to
//! [`DispatchScope::handle`] takes the full set of pointers currently down
//! and produces a fresh [`InputState`].
//!
//! ## Routing
//!
//! - A pointer tracked by a handler goes to that handler, wherever it is.
//! - Otherwise it goes to the first handler, in registration order, whose
//!   rectangle contains it.
//! - Pointers that match nothing are dropped.
//!
//! Handlers then see their pointers in local space (see
//! [`relative_to_center`]). Untracked pointers farther than
//! [`PadConfig::local_radius_squared`] from the local center are filtered
//! out, so a round control ignores touches in the corners of its rectangle
//! while a stick drag that started inside keeps going past the edge.
//!
//! ## Folding
//!
//! Every handler runs on every frame, including with no pointers, so that
//! controls release. Results are folded in registration order starting from
//! an empty state.
//!
//! ## See Also
//!
//! [`crate::controls`] for builders that register the stock handlers.

use core::time::Duration;

use kurbo::Rect;
use padkit_state::state::InputState;
use tracing::{debug, trace};

use crate::config::PadConfig;
use crate::geometry::relative_to_center;
use crate::handlers::{HandlerFrame, Pointer, PointerHandler, TrackedIds};

/// Identifier of a handler registration.
///
/// Ids count up from zero and are not reused within a scope until the
/// 64-bit counter wraps.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct HandlerId(u64);

impl HandlerId {
    /// Raw value of the id.
    pub const fn raw(self) -> u64 {
        self.0
    }
}

struct Registration {
    id: HandlerId,
    handler: Box<dyn PointerHandler>,
    rect: Rect,
    tracked: TrackedIds,
}

impl Registration {
    fn accepts(&self, pointer: &Pointer) -> bool {
        self.rect.area() > 0.0 && self.rect.contains(pointer.position)
    }
}

/// Registry of handlers and router of pointer frames.
pub struct DispatchScope {
    registrations: Vec<Registration>,
    next_id: u64,
    config: PadConfig,
    input_state: InputState,
}

impl core::fmt::Debug for DispatchScope {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("DispatchScope")
            .field("handlers", &self.registrations.len())
            .field("config", &self.config)
            .field("input_state", &self.input_state)
            .finish_non_exhaustive()
    }
}

impl Default for DispatchScope {
    fn default() -> Self {
        Self::new(PadConfig::default())
    }
}

impl DispatchScope {
    /// Create an empty scope.
    pub fn new(config: PadConfig) -> Self {
        Self {
            registrations: Vec::new(),
            next_id: 0,
            config,
            input_state: InputState::new(),
        }
    }

    /// Configuration the scope was created with.
    pub fn config(&self) -> &PadConfig {
        &self.config
    }

    /// Register a handler covering `rect` (screen space).
    ///
    /// Later registrations lose to earlier ones where rectangles overlap.
    pub fn register(&mut self, handler: impl PointerHandler + 'static, rect: Rect) -> HandlerId {
        let id = HandlerId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        let rect = rect.abs();
        debug!(handler = id.0, ?rect, "register handler");
        self.registrations.push(Registration {
            id,
            handler: Box::new(handler),
            rect,
            tracked: TrackedIds::new(),
        });
        id
    }

    /// Remove a handler, releasing its tracked pointers.
    ///
    /// Returns `false` if `id` is not registered. The handler's controls
    /// disappear from the state on the next [`DispatchScope::handle`].
    pub fn unregister(&mut self, id: HandlerId) -> bool {
        let Some(index) = self.index_of(id) else {
            return false;
        };
        self.registrations.remove(index);
        debug!(handler = id.0, "unregister handler");
        true
    }

    /// Move or resize a handler. Returns `false` if `id` is not registered.
    pub fn set_rect(&mut self, id: HandlerId, rect: Rect) -> bool {
        let Some(index) = self.index_of(id) else {
            return false;
        };
        let rect = rect.abs();
        debug!(handler = id.0, ?rect, "update handler rect");
        self.registrations[index].rect = rect;
        true
    }

    /// Screen rectangle of a handler.
    pub fn rect(&self, id: HandlerId) -> Option<Rect> {
        self.index_of(id).map(|i| self.registrations[i].rect)
    }

    /// Pointer ids currently tracked by a handler.
    pub fn tracked_ids(&self, id: HandlerId) -> Option<&TrackedIds> {
        self.index_of(id).map(|i| &self.registrations[i].tracked)
    }

    /// Number of registered handlers.
    pub fn len(&self) -> usize {
        self.registrations.len()
    }

    /// Returns true if no handler is registered.
    pub fn is_empty(&self) -> bool {
        self.registrations.is_empty()
    }

    /// State produced by the last [`DispatchScope::handle`].
    pub fn input_state(&self) -> &InputState {
        &self.input_state
    }

    /// Route a frame of screen-space pointers and fold the handlers' results.
    ///
    /// `pointers` must hold every pointer currently down; a pointer missing
    /// from the frame is considered lifted.
    pub fn handle(&mut self, pointers: &[Pointer], now: Duration) -> &InputState {
        let mut buckets: Vec<Vec<Pointer>> =
            self.registrations.iter().map(|_| Vec::new()).collect();
        for pointer in pointers {
            let owner = self
                .registrations
                .iter()
                .position(|r| r.tracked.contains(&pointer.id))
                .or_else(|| self.registrations.iter().position(|r| r.accepts(pointer)));
            match owner {
                Some(index) => buckets[index].push(*pointer),
                None => trace!(pointer = pointer.id.0, "no handler for pointer"),
            }
        }

        let radius_squared = self.config.local_radius_squared;
        let mut state = InputState::new();
        for (registration, bucket) in self.registrations.iter_mut().zip(buckets) {
            let local: Vec<Pointer> = bucket
                .into_iter()
                .map(|p| Pointer {
                    id: p.id,
                    position: relative_to_center(p.position, registration.rect),
                })
                .filter(|p| {
                    p.position.to_vec2().hypot2() <= radius_squared
                        || registration.tracked.contains(&p.id)
                })
                .collect();
            trace!(
                handler = registration.id.0,
                pointers = local.len(),
                "dispatch"
            );
            let result = registration.handler.handle(
                HandlerFrame {
                    pointers: &local,
                    tracked: &registration.tracked,
                    now,
                },
                state,
            );
            state = result.state;
            registration.tracked = result.tracked;
        }
        self.input_state = state;
        &self.input_state
    }

    fn index_of(&self, id: HandlerId) -> Option<usize> {
        self.registrations.iter().position(|r| r.id == id)
    }
}
