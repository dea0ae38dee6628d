// Copyright 2025 the PadKit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Vec2;
use padkit_state::ids::DiscreteDirectionId;
use padkit_state::state::InputState;

use super::{HandlerFrame, HandlerResult, Pointer, PointerHandler, TrackedIds};
use crate::anchors::{Anchor, CrossDirection, nearest};
use crate::config::PadConfig;

/// A d-pad driven by a single pointer.
///
/// The driving pointer is the tracked one if it is still down, otherwise the
/// first pointer of the frame. Output is:
/// - `None` when no pointer is down,
/// - `(0, 0)` inside the dead zone,
/// - otherwise the position of the nearest anchor, converted to y-up.
#[derive(Clone, Debug)]
pub struct CrossHandler {
    id: DiscreteDirectionId,
    anchors: Vec<Anchor<CrossDirection>>,
    dead_zone_squared: f64,
}

impl CrossHandler {
    /// Create a handler writing `id`, resolving against `anchors`.
    ///
    /// `anchors` must not be empty.
    pub fn new(id: DiscreteDirectionId, anchors: Vec<Anchor<CrossDirection>>) -> Self {
        Self {
            id,
            anchors,
            dead_zone_squared: PadConfig::DEFAULT_DEAD_ZONE_SQUARED,
        }
    }

    /// Override the dead zone.
    #[must_use]
    pub fn with_dead_zone_squared(mut self, dead_zone_squared: f64) -> Self {
        self.dead_zone_squared = dead_zone_squared;
        self
    }

    fn direction_of(&self, pointer: &Pointer) -> Vec2 {
        let local = pointer.position.to_vec2();
        if local.hypot2() < self.dead_zone_squared {
            return Vec2::ZERO;
        }
        nearest(&self.anchors, local)
            .map(|a| Vec2::new(a.position.x, -a.position.y))
            .unwrap_or(Vec2::ZERO)
    }
}

impl PointerHandler for CrossHandler {
    fn handle(&mut self, frame: HandlerFrame<'_>, mut state: InputState) -> HandlerResult {
        let driving = frame.tracked_pointer().or_else(|| frame.pointers.first());
        let Some(pointer) = driving else {
            state.set_discrete_direction(self.id, None);
            return HandlerResult {
                state,
                tracked: TrackedIds::new(),
            };
        };
        state.set_discrete_direction(self.id, Some(self.direction_of(pointer)));
        HandlerResult {
            state,
            tracked: TrackedIds::from([pointer.id]),
        }
    }
}
