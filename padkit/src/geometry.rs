// Copyright 2025 the PadKit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Small geometry helpers over Kurbo types.
//!
//! Control-local space is the square `[-1, 1] × [-1, 1]` centered on the
//! control, y-down like the screen.

use kurbo::{Point, Rect, Vec2};

/// Map a screen-space point into the local space of `rect`.
///
/// The rect's center maps to the origin and its edges to `±1`. The result
/// is not finite when `rect` has zero width or height.
pub fn relative_to_center(point: Point, rect: Rect) -> Point {
    let center = rect.center();
    Point::new(
        (point.x - center.x) / (rect.width() / 2.0),
        (point.y - center.y) / (rect.height() / 2.0),
    )
}

/// Clamp each axis into `[-1, 1]`.
pub fn clamp_unit(v: Vec2) -> Vec2 {
    Vec2::new(v.x.clamp(-1.0, 1.0), v.y.clamp(-1.0, 1.0))
}

/// Map the unit square onto the unit disc.
///
/// Axis-aligned inputs are preserved and corners land on the circle, so the
/// output magnitude never exceeds 1 for inputs within `[-1, 1]²`.
pub fn map_square_to_circle(v: Vec2) -> Vec2 {
    Vec2::new(
        v.x * (1.0 - v.y * v.y / 2.0).sqrt(),
        v.y * (1.0 - v.x * v.x / 2.0).sqrt(),
    )
}

/// Rotate `v` by `degrees` around the origin.
///
/// Positive angles turn +x towards +y.
pub fn rotate(v: Vec2, degrees: f64) -> Vec2 {
    let (sin, cos) = degrees.to_radians().sin_cos();
    Vec2::new(v.x * cos - v.y * sin, v.x * sin + v.y * cos)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Vec2, b: Vec2) -> bool {
        (a - b).hypot() < 1e-9
    }

    #[test]
    fn rect_center_and_edges() {
        let r = Rect::new(100.0, 200.0, 300.0, 300.0);
        assert_eq!(relative_to_center(Point::new(200.0, 250.0), r), Point::ORIGIN);
        assert_eq!(relative_to_center(Point::new(300.0, 300.0), r), Point::new(1.0, 1.0));
        assert_eq!(relative_to_center(Point::new(100.0, 225.0), r), Point::new(-1.0, -0.5));
    }

    #[test]
    fn square_corner_lands_on_circle() {
        let m = map_square_to_circle(Vec2::new(1.0, 1.0));
        assert!((m.hypot() - 1.0).abs() < 1e-9);
        assert!(close(map_square_to_circle(Vec2::new(1.0, 0.0)), Vec2::new(1.0, 0.0)));
        assert!(close(map_square_to_circle(Vec2::new(0.0, -0.5)), Vec2::new(0.0, -0.5)));
    }

    #[test]
    fn mapped_magnitude_never_exceeds_one() {
        for i in -10..=10 {
            for j in -10..=10 {
                let v = Vec2::new(f64::from(i) / 10.0, f64::from(j) / 10.0);
                assert!(map_square_to_circle(v).hypot() <= 1.0 + 1e-9, "{v:?}");
            }
        }
    }

    #[test]
    fn clamp_and_rotate() {
        assert_eq!(clamp_unit(Vec2::new(3.0, -0.2)), Vec2::new(1.0, -0.2));
        assert!(close(rotate(Vec2::new(1.0, 0.0), 90.0), Vec2::new(0.0, 1.0)));
        assert!(close(rotate(Vec2::new(0.0, 2.0), -90.0), Vec2::new(2.0, 0.0)));
    }
}
