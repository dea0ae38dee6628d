// Copyright 2025 the PadKit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Builders for the stock controls.
//!
//! Each builder collects the parameters of one control and registers the
//! matching handler on an explicit [`DispatchScope`]. The scope's
//! [`PadConfig`](crate::config::PadConfig) supplies the tuning values.
//!
//! A control registered without a rect has zero area and receives no
//! pointers until [`DispatchScope::set_rect`] lays it out.
//!
//! ```
//! use kurbo::Rect;
//! use padkit::controls::{ControlButton, ControlCross};
//! use padkit::scope::DispatchScope;
//! use padkit_state::ids::{DiscreteDirectionId, KeyId};
//!
//! let mut scope = DispatchScope::default();
//! let dpad = ControlCross::new(DiscreteDirectionId(0))
//!     .allow_diagonals(false)
//!     .register(&mut scope);
//! let start = ControlButton::new(KeyId(9))
//!     .rect(Rect::new(300.0, 0.0, 340.0, 40.0))
//!     .register(&mut scope);
//! scope.set_rect(dpad, Rect::new(0.0, 0.0, 200.0, 200.0));
//! assert_ne!(dpad, start);
//! assert_eq!(scope.len(), 2);
//! ```

use kurbo::Rect;
use padkit_state::ids::{ContinuousDirectionId, DiscreteDirectionId, KeyId};

use crate::anchors::{Anchor, composite_anchors, cross_anchors, primary_anchors};
use crate::handlers::{AnalogHandler, ButtonHandler, CrossHandler, FaceButtonsHandler};
use crate::scope::{DispatchScope, HandlerId};

/// A single digital button.
#[derive(Clone, Debug)]
pub struct ControlButton {
    id: KeyId,
    rect: Rect,
}

impl ControlButton {
    /// Button writing `id`.
    pub fn new(id: KeyId) -> Self {
        Self {
            id,
            rect: Rect::ZERO,
        }
    }

    /// Screen bounds.
    #[must_use]
    pub fn rect(mut self, rect: Rect) -> Self {
        self.rect = rect;
        self
    }

    /// Register on `scope`.
    pub fn register(self, scope: &mut DispatchScope) -> HandlerId {
        scope.register(ButtonHandler::new(self.id), self.rect)
    }
}

/// A d-pad.
#[derive(Clone, Debug)]
pub struct ControlCross {
    id: DiscreteDirectionId,
    allow_diagonals: bool,
    rect: Rect,
}

impl ControlCross {
    /// D-pad writing `id`, with diagonals enabled.
    pub fn new(id: DiscreteDirectionId) -> Self {
        Self {
            id,
            allow_diagonals: true,
            rect: Rect::ZERO,
        }
    }

    /// Enable or disable the four diagonal directions.
    #[must_use]
    pub fn allow_diagonals(mut self, allow: bool) -> Self {
        self.allow_diagonals = allow;
        self
    }

    /// Screen bounds.
    #[must_use]
    pub fn rect(mut self, rect: Rect) -> Self {
        self.rect = rect;
        self
    }

    /// Register on `scope`.
    pub fn register(self, scope: &mut DispatchScope) -> HandlerId {
        let handler = CrossHandler::new(self.id, cross_anchors(self.allow_diagonals))
            .with_dead_zone_squared(scope.config().dead_zone_squared);
        scope.register(handler, self.rect)
    }
}

/// An analog stick, optionally clickable by double tap.
#[derive(Clone, Debug)]
pub struct ControlAnalog {
    id: ContinuousDirectionId,
    press_id: Option<KeyId>,
    rect: Rect,
}

impl ControlAnalog {
    /// Stick writing `id`.
    pub fn new(id: ContinuousDirectionId) -> Self {
        Self {
            id,
            press_id: None,
            rect: Rect::ZERO,
        }
    }

    /// Key held while a double-tapped touch is down.
    #[must_use]
    pub fn press_id(mut self, id: KeyId) -> Self {
        self.press_id = Some(id);
        self
    }

    /// Screen bounds.
    #[must_use]
    pub fn rect(mut self, rect: Rect) -> Self {
        self.rect = rect;
        self
    }

    /// Register on `scope`.
    pub fn register(self, scope: &mut DispatchScope) -> HandlerId {
        let handler = AnalogHandler::new(self.id, self.press_id)
            .with_double_tap_interval(scope.config().double_tap_interval);
        scope.register(handler, self.rect)
    }
}

/// A ring of face buttons.
#[derive(Clone, Debug)]
pub struct ControlFaceButtons {
    primary: Vec<Anchor<KeyId>>,
    composite: Vec<Anchor<KeyId>>,
    track_pointers: bool,
    rect: Rect,
}

impl ControlFaceButtons {
    /// Place `ids` evenly on a ring starting at `rotation_deg`, with a
    /// composite anchor between each pair of neighbours.
    pub fn new(ids: &[KeyId], rotation_deg: f64) -> Self {
        Self::with_anchors(
            primary_anchors(ids, rotation_deg),
            composite_anchors(ids, rotation_deg),
        )
    }

    /// Use custom anchors, for layouts that are not a plain ring.
    pub fn with_anchors(primary: Vec<Anchor<KeyId>>, composite: Vec<Anchor<KeyId>>) -> Self {
        Self {
            primary,
            composite,
            track_pointers: true,
            rect: Rect::ZERO,
        }
    }

    /// Keep or drop the composite anchors.
    #[must_use]
    pub fn include_composite(mut self, include: bool) -> Self {
        if !include {
            self.composite.clear();
        }
        self
    }

    /// Whether fingers stay bound to the cluster after sliding off it.
    #[must_use]
    pub fn track_pointers(mut self, track: bool) -> Self {
        self.track_pointers = track;
        self
    }

    /// Screen bounds.
    #[must_use]
    pub fn rect(mut self, rect: Rect) -> Self {
        self.rect = rect;
        self
    }

    /// Register on `scope`.
    pub fn register(self, scope: &mut DispatchScope) -> HandlerId {
        // Composites first: where one overlaps its primaries it wins.
        let mut anchors = self.composite;
        anchors.extend(self.primary);
        scope.register(FaceButtonsHandler::new(anchors, self.track_pointers), self.rect)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PadConfig;
    use crate::handlers::Pointer;
    use core::time::Duration;
    use kurbo::Vec2;

    const RECT: Rect = Rect::new(0.0, 0.0, 100.0, 100.0);

    #[test]
    fn cross_uses_scope_dead_zone() {
        let dpad = DiscreteDirectionId(1);
        let mut scope = DispatchScope::new(PadConfig::default().with_dead_zone_squared(0.5));
        ControlCross::new(dpad).rect(RECT).register(&mut scope);
        // Local (0.6, 0): outside the default dead zone but inside this one.
        let s = scope.handle(&[Pointer::new(1, 80.0, 50.0)], Duration::ZERO);
        assert_eq!(s.discrete_direction(dpad), Some(Vec2::ZERO));
    }

    #[test]
    fn analog_uses_scope_double_tap_interval() {
        let stick = ContinuousDirectionId(0);
        let click = KeyId(3);
        let config = PadConfig::default().with_double_tap_interval(Duration::from_millis(50));
        let mut scope = DispatchScope::new(config);
        ControlAnalog::new(stick).press_id(click).rect(RECT).register(&mut scope);
        scope.handle(&[Pointer::new(1, 50.0, 50.0)], Duration::from_millis(0));
        scope.handle(&[], Duration::from_millis(20));
        let s = scope.handle(&[Pointer::new(2, 50.0, 50.0)], Duration::from_millis(100));
        assert!(!s.digital_key(click));
    }

    #[test]
    fn face_buttons_without_composites() {
        let ids = [KeyId(0), KeyId(1), KeyId(2), KeyId(3)];
        let mut scope = DispatchScope::default();
        ControlFaceButtons::new(&ids, 0.0)
            .include_composite(false)
            .rect(RECT)
            .register(&mut scope);
        // Between the right and top buttons.
        let s = scope.handle(&[Pointer::new(1, 70.0, 30.0)], Duration::ZERO);
        assert_eq!(s.pressed_keys().count(), 1);

        let mut scope = DispatchScope::default();
        ControlFaceButtons::new(&ids, 0.0).rect(RECT).register(&mut scope);
        let s = scope.handle(&[Pointer::new(1, 70.0, 30.0)], Duration::ZERO);
        assert_eq!(s.pressed_keys().collect::<Vec<_>>(), vec![KeyId(0), KeyId(1)]);
    }
}
