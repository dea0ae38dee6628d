// Copyright 2025 the PadKit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use padkit_state::ids::KeyId;
use padkit_state::state::InputState;

use super::{HandlerFrame, HandlerResult, PointerHandler};

/// A single digital button: pressed while at least one pointer is on it.
///
/// Every pointer on the button is tracked, so lifting one of two fingers
/// keeps it pressed.
#[derive(Clone, Debug)]
pub struct ButtonHandler {
    id: KeyId,
}

impl ButtonHandler {
    /// Create a handler for the key `id`.
    pub fn new(id: KeyId) -> Self {
        Self { id }
    }
}

impl PointerHandler for ButtonHandler {
    fn handle(&mut self, frame: HandlerFrame<'_>, mut state: InputState) -> HandlerResult {
        state.press_digital_key_if(self.id, !frame.pointers.is_empty());
        HandlerResult {
            state,
            tracked: frame.pointers.iter().map(|p| p.id).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::Pointer;
    use crate::handlers::test_util::{ids, run};

    #[test]
    fn pressed_iff_any_pointer() {
        let mut h = ButtonHandler::new(KeyId(4));
        let r = run(&mut h, &[Pointer::new(1, 0.0, 0.0), Pointer::new(2, 0.5, 0.5)], &ids(&[]), 0);
        assert!(r.state.digital_key(KeyId(4)));
        assert_eq!(r.tracked, ids(&[1, 2]));

        let r = run(&mut h, &[], &r.tracked, 16);
        assert!(!r.state.digital_key(KeyId(4)));
        assert!(r.tracked.is_empty());
    }
}
