// Copyright 2025 the PadKit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Multi-touch pan and pinch measurement between two pointer frames.
//!
//! Both measurements only consider pointers that were down in the previous
//! frame and are still down, so a finger landing or lifting does not read
//! as a jump.

use kurbo::{Point, Vec2};

/// One pointer's change between two consecutive frames.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PointerChange {
    /// Contact id.
    pub id: u64,
    /// Position in the previous frame.
    pub previous_position: Point,
    /// Position in this frame.
    pub position: Point,
    /// Whether the contact was down in the previous frame.
    pub previous_pressed: bool,
    /// Whether the contact is down in this frame.
    pub pressed: bool,
}

impl PointerChange {
    /// A pointer that stayed down while moving from `from` to `to`.
    pub fn moved(id: u64, from: Point, to: Point) -> Self {
        Self {
            id,
            previous_position: from,
            position: to,
            previous_pressed: true,
            pressed: true,
        }
    }

    /// A pointer that lifted at `at`.
    pub fn released(id: u64, at: Point) -> Self {
        Self {
            id,
            previous_position: at,
            position: at,
            previous_pressed: true,
            pressed: false,
        }
    }

    fn is_held(&self) -> bool {
        self.pressed && self.previous_pressed
    }
}

fn centroid(changes: &[PointerChange], current: bool) -> Option<Point> {
    let (sum, count) = changes
        .iter()
        .filter(|c| c.is_held())
        .map(|c| if current { c.position } else { c.previous_position })
        .fold((Vec2::ZERO, 0_u32), |(sum, n), p| (sum + p.to_vec2(), n + 1));
    (count > 0).then(|| (sum / f64::from(count)).to_point())
}

fn mean_distance(changes: &[PointerChange], current: bool) -> f64 {
    let Some(center) = centroid(changes, current) else {
        return 0.0;
    };
    let (sum, count) = changes
        .iter()
        .filter(|c| c.is_held())
        .map(|c| if current { c.position } else { c.previous_position })
        .fold((0.0, 0_u32), |(sum, n), p| (sum + p.distance(center), n + 1));
    sum / f64::from(count)
}

/// Movement of the centroid of the held pointers.
pub fn calculate_pan(changes: &[PointerChange]) -> Vec2 {
    match (centroid(changes, true), centroid(changes, false)) {
        (Some(current), Some(previous)) => current - previous,
        _ => Vec2::ZERO,
    }
}

/// Ratio of the held pointers' spread around their centroid, this frame over
/// the previous one.
///
/// Returns `1.0` when the spread cannot be measured, e.g. with fewer than two
/// pointers.
pub fn calculate_zoom(changes: &[PointerChange]) -> f64 {
    let previous = mean_distance(changes, false);
    let current = mean_distance(changes, true);
    if previous == 0.0 || current == 0.0 {
        1.0
    } else {
        current / previous
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pt(x: f64, y: f64) -> Point {
        Point::new(x, y)
    }

    #[test]
    fn single_pointer_pans() {
        let c = [PointerChange::moved(1, pt(10.0, 10.0), pt(14.0, 7.0))];
        assert_eq!(calculate_pan(&c), Vec2::new(4.0, -3.0));
        assert_eq!(calculate_zoom(&c), 1.0);
    }

    #[test]
    fn spreading_fingers_zoom_in() {
        let c = [
            PointerChange::moved(1, pt(-10.0, 0.0), pt(-20.0, 0.0)),
            PointerChange::moved(2, pt(10.0, 0.0), pt(20.0, 0.0)),
        ];
        assert_eq!(calculate_zoom(&c), 2.0);
        assert_eq!(calculate_pan(&c), Vec2::ZERO);
    }

    #[test]
    fn released_pointers_do_not_count() {
        let c = [
            PointerChange::moved(1, pt(0.0, 0.0), pt(5.0, 0.0)),
            PointerChange::released(2, pt(100.0, 100.0)),
        ];
        assert_eq!(calculate_pan(&c), Vec2::new(5.0, 0.0));
        assert_eq!(calculate_zoom(&c), 1.0);
        assert_eq!(calculate_pan(&[]), Vec2::ZERO);
    }
}
