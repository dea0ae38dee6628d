// Copyright 2025 the PadKit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::collections::BTreeSet;

use padkit_state::ids::KeyId;
use padkit_state::state::InputState;

use super::{HandlerFrame, HandlerResult, PointerHandler, TrackedIds};
use crate::anchors::{Anchor, nearest};
use crate::geometry::clamp_unit;

/// A cluster of buttons laid out around a circle.
///
/// Each pointer presses the items of its nearest anchor, so several fingers
/// can chord different buttons and a composite anchor lets one finger press
/// two neighbours.
#[derive(Clone, Debug)]
pub struct FaceButtonsHandler {
    anchors: Vec<Anchor<KeyId>>,
    track_pointers: bool,
}

impl FaceButtonsHandler {
    /// Create a handler resolving against `anchors`.
    ///
    /// With `track_pointers`, a finger that slides off the cluster keeps
    /// pressing whatever it resolves to.
    pub fn new(anchors: Vec<Anchor<KeyId>>, track_pointers: bool) -> Self {
        Self {
            anchors,
            track_pointers,
        }
    }

    /// Anchors in resolution order.
    pub fn anchors(&self) -> &[Anchor<KeyId>] {
        &self.anchors
    }
}

impl PointerHandler for FaceButtonsHandler {
    fn handle(&mut self, frame: HandlerFrame<'_>, mut state: InputState) -> HandlerResult {
        let pressed: BTreeSet<KeyId> = frame
            .pointers
            .iter()
            .filter_map(|p| nearest(&self.anchors, clamp_unit(p.position.to_vec2())))
            .flat_map(|a| a.items.iter().copied())
            .collect();
        for id in pressed {
            state.press_digital_key_if(id, true);
        }
        let tracked = if self.track_pointers {
            frame.pointers.iter().map(|p| p.id).collect()
        } else {
            TrackedIds::new()
        };
        HandlerResult { state, tracked }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::anchors::{composite_anchors, primary_anchors};
    use crate::handlers::Pointer;
    use crate::handlers::test_util::{ids, run};

    const A: KeyId = KeyId(0);
    const B: KeyId = KeyId(1);
    const X: KeyId = KeyId(2);
    const Y: KeyId = KeyId(3);

    fn diamond(composites: bool) -> FaceButtonsHandler {
        // A right, X up, Y left, B down.
        let items = [A, X, Y, B];
        let mut anchors = if composites {
            composite_anchors(&items, 0.0)
        } else {
            Vec::new()
        };
        anchors.extend(primary_anchors(&items, 0.0));
        FaceButtonsHandler::new(anchors, true)
    }

    fn pressed(state: &InputState) -> Vec<KeyId> {
        state.pressed_keys().collect()
    }

    #[test]
    fn two_fingers_on_two_buttons_chord() {
        let mut h = diamond(false);
        let r = run(&mut h, &[Pointer::new(1, 0.6, 0.0), Pointer::new(2, -0.6, 0.0)], &ids(&[]), 0);
        assert_eq!(pressed(&r.state), vec![A, Y]);
        assert_eq!(r.tracked, ids(&[1, 2]));
    }

    #[test]
    fn two_fingers_on_one_button_press_it_once() {
        let mut h = diamond(false);
        let r = run(&mut h, &[Pointer::new(1, 0.6, 0.0), Pointer::new(2, 0.7, 0.1)], &ids(&[]), 0);
        assert_eq!(pressed(&r.state), vec![A]);
    }

    #[test]
    fn chords_with_composites_present_press_only_the_touched_buttons() {
        let mut h = diamond(true);
        let r = run(&mut h, &[Pointer::new(1, 0.6, 0.0), Pointer::new(2, -0.6, 0.0)], &ids(&[]), 0);
        assert_eq!(pressed(&r.state), vec![A, Y]);

        let r = run(&mut h, &[Pointer::new(1, 0.6, 0.0), Pointer::new(2, 0.7, 0.1)], &ids(&[]), 0);
        assert_eq!(pressed(&r.state), vec![A]);
    }

    #[test]
    fn composite_between_neighbours_presses_both() {
        let mut h = diamond(true);
        let primaries = primary_anchors(&[A, X, Y, B], 0.0);
        let between = (primaries[0].position + primaries[1].position) / 2.0;
        let r = run(&mut h, &[Pointer::new(1, between.x, between.y)], &ids(&[]), 0);
        assert_eq!(pressed(&r.state), vec![A, X]);

        let mut plain = diamond(false);
        let r = run(&mut plain, &[Pointer::new(1, between.x, between.y)], &ids(&[]), 0);
        assert_eq!(r.state.pressed_keys().count(), 1);
    }

    #[test]
    fn far_pointer_is_clamped_before_resolving() {
        let mut h = diamond(false);
        let r = run(&mut h, &[Pointer::new(1, 0.0, 5.0)], &ids(&[]), 0);
        assert_eq!(pressed(&r.state), vec![B]);
    }

    #[test]
    fn untracked_cluster_claims_nothing() {
        let mut h = FaceButtonsHandler::new(primary_anchors(&[A, B], 0.0), false);
        let r = run(&mut h, &[Pointer::new(1, 0.5, 0.0)], &ids(&[]), 0);
        assert_eq!(pressed(&r.state), vec![A]);
        assert!(r.tracked.is_empty());
    }
}
