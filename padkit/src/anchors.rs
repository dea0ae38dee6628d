// Copyright 2025 the PadKit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Anchors: positioned, radius-bearing targets in control-local space.
//!
//! ## Resolution
//!
//! A local point resolves to the anchor with the smallest
//! [`Anchor::distance`], which is the distance to the anchor's edge (zero
//! anywhere inside it). Ties go to the anchor listed first, so when anchors
//! overlap the list order decides.
//!
//! ## Layouts
//!
//! - [`primary_anchors`] spreads `n` items evenly on a ring.
//! - [`composite_anchors`] adds a two-item anchor where each pair of
//!   neighbours touches; list these before the primaries so that the
//!   overlap resolves to the composite.
//! - [`cross_anchors`] builds the four (or eight) d-pad directions.

use core::f64::consts::{FRAC_1_SQRT_2, PI};

use kurbo::Vec2;

/// Share of a primary anchor's size used as the radius of the composite
/// anchor between two neighbours.
pub const COMPOSITE_SIZE_RATIO: f64 = 0.35;

/// A target in control-local space mapping to one or more items.
#[derive(Clone, Debug, PartialEq)]
pub struct Anchor<T> {
    /// Center, in the local `[-1, 1]²` square, y-down.
    pub position: Vec2,
    /// Items activated when a point resolves to this anchor.
    pub items: Vec<T>,
    /// Radius of the anchor.
    pub size: f64,
}

impl<T> Anchor<T> {
    /// Create an anchor.
    pub fn new(position: Vec2, items: Vec<T>, size: f64) -> Self {
        Self {
            position,
            items,
            size,
        }
    }

    /// Distance from `point` to the anchor's edge, zero inside the anchor.
    pub fn distance(&self, point: Vec2) -> f64 {
        ((point - self.position).hypot() - self.size).max(0.0)
    }
}

/// The anchor nearest to `point`, preferring earlier anchors on ties.
///
/// Returns `None` only for an empty slice.
pub fn nearest<T>(anchors: &[Anchor<T>], point: Vec2) -> Option<&Anchor<T>> {
    anchors.iter().min_by(|a, b| {
        a.distance(point)
            .partial_cmp(&b.distance(point))
            .unwrap_or(core::cmp::Ordering::Equal)
    })
}

/// Radius of `count` equal circles that fit around the inside of the unit
/// circle, each touching its neighbours.
///
/// A single item fills the whole circle.
pub fn size_of_items_around_circumference(count: usize) -> f64 {
    if count <= 1 {
        return 1.0;
    }
    let sin = (PI / count as f64).sin();
    sin / (1.0 + sin)
}

/// Unit vector at `degrees`, counter-clockwise from +x as seen on screen.
fn ring_direction(degrees: f64) -> Vec2 {
    let (sin, cos) = degrees.to_radians().sin_cos();
    // Local space is y-down.
    Vec2::new(cos, -sin)
}

/// Place `items` evenly on a ring, starting at `rotation_deg` (0 is to the
/// right, 90 is up) and going counter-clockwise.
pub fn primary_anchors<T: Clone>(items: &[T], rotation_deg: f64) -> Vec<Anchor<T>> {
    let size = size_of_items_around_circumference(items.len());
    let distance = 1.0 - size;
    let step = 360.0 / items.len().max(1) as f64;
    items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let angle = rotation_deg + step * i as f64;
            Anchor::new(ring_direction(angle) * distance, vec![item.clone()], size)
        })
        .collect()
}

/// One anchor between each pair of neighbours of [`primary_anchors`].
///
/// Each composite sits where the two primaries touch and maps to both items.
/// Fewer than two items yield no composites; two items yield one.
pub fn composite_anchors<T: Clone>(items: &[T], rotation_deg: f64) -> Vec<Anchor<T>> {
    let count = items.len();
    if count < 2 {
        return Vec::new();
    }
    let primaries = primary_anchors(items, rotation_deg);
    let size = size_of_items_around_circumference(count) * COMPOSITE_SIZE_RATIO;
    let pairs = if count == 2 { 1 } else { count };
    (0..pairs)
        .map(|i| {
            let a = &primaries[i];
            let b = &primaries[(i + 1) % count];
            let mut items = a.items.clone();
            items.extend(b.items.iter().cloned());
            Anchor::new((a.position + b.position) / 2.0, items, size)
        })
        .collect()
}

/// A d-pad direction.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum CrossDirection {
    /// Towards the top of the screen.
    Up,
    /// Towards the bottom of the screen.
    Down,
    /// Towards the left of the screen.
    Left,
    /// Towards the right of the screen.
    Right,
}

/// Anchors for a d-pad, on the unit circle with zero size.
///
/// With diagonals each of the eight anchors owns a 45° sector; without them
/// each of the four owns 90°.
pub fn cross_anchors(allow_diagonals: bool) -> Vec<Anchor<CrossDirection>> {
    use CrossDirection::*;
    let mut anchors = vec![
        Anchor::new(Vec2::new(1.0, 0.0), vec![Right], 0.0),
        Anchor::new(Vec2::new(0.0, 1.0), vec![Down], 0.0),
        Anchor::new(Vec2::new(-1.0, 0.0), vec![Left], 0.0),
        Anchor::new(Vec2::new(0.0, -1.0), vec![Up], 0.0),
    ];
    if allow_diagonals {
        let d = FRAC_1_SQRT_2;
        anchors.extend([
            Anchor::new(Vec2::new(d, d), vec![Down, Right], 0.0),
            Anchor::new(Vec2::new(-d, d), vec![Down, Left], 0.0),
            Anchor::new(Vec2::new(-d, -d), vec![Up, Left], 0.0),
            Anchor::new(Vec2::new(d, -d), vec![Up, Right], 0.0),
        ]);
    }
    anchors
}
