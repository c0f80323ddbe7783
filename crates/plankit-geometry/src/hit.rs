//! Pointer hit-testing against shapes.
//!
//! One exhaustive match per shape kind, so a new kind cannot be added
//! without deciding how it reacts to the pointer. The predicate is pure:
//! visibility and lock state are the caller's concern, except in
//! [`topmost_hit`], which answers the scene-level "what did I click"
//! question and skips hidden shapes.

use plankit_core::shape::{Shape, ShapeKind};
use plankit_core::types::Point;

use crate::primitives::{point_in_polygon, point_to_segment_distance};

/// Whether `p` hits `shape` within `tolerance` pixels.
///
/// Ring kinds hit on their interior or within tolerance of an edge;
/// circles hit on the disk grown by tolerance; segment kinds hit within
/// tolerance of the segment; anchor kinds within tolerance of the
/// anchor.
pub fn hit_test(shape: &Shape, p: Point, tolerance: f64) -> bool {
    match shape.kind {
        ShapeKind::Polygon | ShapeKind::Rectangle | ShapeKind::Square | ShapeKind::Triangle => {
            match shape.ring() {
                Some(ring) => {
                    if point_in_polygon(p, ring) {
                        return true;
                    }
                    for i in 0..ring.len() {
                        let a = ring[i];
                        let b = ring[(i + 1) % ring.len()];
                        if point_to_segment_distance(p, a, b) <= tolerance {
                            return true;
                        }
                    }
                    false
                }
                None => false,
            }
        }
        ShapeKind::Circle => match shape.circle_geometry() {
            Some((center, radius)) => p.distance_to(&center) <= radius + tolerance,
            None => false,
        },
        ShapeKind::Line | ShapeKind::Arrow | ShapeKind::Callout | ShapeKind::Axis => {
            match shape.endpoints() {
                Some((start, end)) => point_to_segment_distance(p, start, end) <= tolerance,
                None => false,
            }
        }
        ShapeKind::Icon | ShapeKind::Text | ShapeKind::Bullet | ShapeKind::Image => {
            match shape.anchor() {
                Some(anchor) => p.distance_to(&anchor) <= tolerance,
                None => false,
            }
        }
    }
}

/// The topmost visible shape under the pointer.
///
/// Later shapes draw over earlier ones, so the scan runs back to front.
pub fn topmost_hit<'a>(shapes: &'a [Shape], p: Point, tolerance: f64) -> Option<&'a Shape> {
    shapes
        .iter()
        .rev()
        .find(|shape| shape.visible && hit_test(shape, p, tolerance))
}
