// Copyright 2025 the PadKit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Face-button layouts that are not a plain ring.
//!
//! Both layouts size their buttons as if twelve of them sat around the
//! control, and rotate with the settings' rotation slider.

use kurbo::Vec2;
use padkit::anchors::{Anchor, size_of_items_around_circumference};
use padkit::geometry::rotate;
use padkit_state::ids::KeyId;

use crate::settings::TouchControllerSettings;

fn button_size() -> f64 {
    size_of_items_around_circumference(12)
}

fn anchor(position: Vec2, id: KeyId, rotation: f64) -> Anchor<KeyId> {
    let degrees = rotation * TouchControllerSettings::MAX_ROTATION_DEG;
    Anchor::new(rotate(position, degrees), vec![id], button_size())
}

/// Four buttons in two slanted columns, for consoles with a central button
/// block (for example the PC-FX).
///
/// `rotation` is the settings' rotation slider, in `[0, 1]`. Ids are the
/// inner column top to bottom, then the outer column top to bottom.
pub fn central_four_buttons_anchors(rotation: f64, ids: [KeyId; 4]) -> Vec<Anchor<KeyId>> {
    let size = button_size();
    let distance = 3.0 * size;
    let (sin30, cos30) = 30_f64.to_radians().sin_cos();
    let delta = Vec2::new(-15_f64.to_radians().tan(), 1.0) * distance * 1.25;
    let inner = Vec2::new(0.0, -1.0 - distance);
    let outer = Vec2::new(sin30, -cos30) * (1.0 + distance);
    let [a, b, c, d] = ids;
    vec![
        anchor(inner + delta, a, rotation),
        anchor(inner + delta * 2.0, b, rotation),
        anchor(outer + delta, c, rotation),
        anchor(outer + delta * 2.0, d, rotation),
    ]
}

/// Six buttons in a 3×2 grid, as on Sega pads.
///
/// Ids are the top row left to right, then the bottom row left to right.
pub fn sega_six_buttons_anchors(rotation: f64, ids: [KeyId; 6]) -> Vec<Anchor<KeyId>> {
    let spacing = button_size() * 2.8;
    let row = 0.6 * spacing;
    let [top_left, top_center, top_right, bottom_left, bottom_center, bottom_right] = ids;
    vec![
        anchor(Vec2::new(-spacing, -row), top_left, rotation),
        anchor(Vec2::new(0.0, -row), top_center, rotation),
        anchor(Vec2::new(spacing, -row), top_right, rotation),
        anchor(Vec2::new(-spacing, row), bottom_left, rotation),
        anchor(Vec2::new(0.0, row), bottom_center, rotation),
        anchor(Vec2::new(spacing, row), bottom_right, rotation),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use padkit::anchors::nearest;

    fn keys<const N: usize>() -> [KeyId; N] {
        core::array::from_fn(|i| KeyId(i32::try_from(i).unwrap()))
    }

    #[test]
    fn sega_grid_is_symmetric() {
        let anchors = sega_six_buttons_anchors(0.0, keys());
        assert_eq!(anchors.len(), 6);
        assert_eq!(anchors[0].position.x, -anchors[2].position.x);
        assert_eq!(anchors[0].position.y, -anchors[3].position.y);
        assert_eq!(anchors[1].position.x, 0.0);
        // Pointers resolve to the button under them.
        for a in &anchors {
            assert_eq!(nearest(&anchors, a.position).map(|n| n.items[0]), Some(a.items[0]));
        }
    }

    #[test]
    fn rotation_preserves_distances() {
        let straight = central_four_buttons_anchors(0.0, keys());
        let rotated = central_four_buttons_anchors(1.0, keys());
        for (s, r) in straight.iter().zip(&rotated) {
            assert!((s.position.hypot() - r.position.hypot()).abs() < 1e-9);
            assert_eq!(s.items, r.items);
        }
        assert!((straight[0].position - rotated[0].position).hypot() > 0.1);
    }

    #[test]
    fn central_columns_step_down() {
        let anchors = central_four_buttons_anchors(0.0, keys());
        assert!(anchors[1].position.y > anchors[0].position.y);
        assert!(anchors[3].position.y > anchors[2].position.y);
        assert!(anchors[2].position.x > anchors[0].position.x);
        assert_eq!(anchors[0].size, size_of_items_around_circumference(12));
    }
}
