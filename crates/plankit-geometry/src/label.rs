//! Label placement inside polygon rings.
//!
//! Estimates where centered text fits inside an arbitrary simple
//! polygon: an anchor, the largest safe font size, and a rotation that
//! follows the room's dominant direction. The result only has to look
//! right on screen, not be the true pole of inaccessibility.

use serde::Serialize;

use plankit_core::constants::{LABEL_ANGLE_SNAP_DEG, LABEL_EDGE_PADDING, LABEL_MIN_FONT_SIZE};
use plankit_core::types::Point;

use crate::primitives::{bounding_box, centroid, point_to_segment_distance};

/// Where and how to draw a polygon's label.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LabelPlacement {
    pub anchor: Point,
    pub max_font_size: f64,
    /// Degrees, in `[-90, 90]`; negative values rotate counterclockwise
    /// in screen coordinates.
    pub rotation_deg: f64,
}

/// Computes label placement for a polygon ring.
///
/// The anchor is the vertex centroid. The safe radius is the smallest
/// centroid-to-edge distance minus `LABEL_EDGE_PADDING`; the font size
/// is `safe_radius * 1.5` floored at `LABEL_MIN_FONT_SIZE`, so labels
/// in thin slivers stay readable instead of vanishing. Rings with
/// fewer than 3 vertices have no interior and yield `None`.
pub fn place_label(ring: &[Point]) -> Option<LabelPlacement> {
    if ring.len() < 3 {
        return None;
    }

    let anchor = centroid(ring);

    let mut min_edge_distance = f64::INFINITY;
    for i in 0..ring.len() {
        let a = ring[i];
        let b = ring[(i + 1) % ring.len()];
        min_edge_distance = min_edge_distance.min(point_to_segment_distance(anchor, a, b));
    }
    let safe_radius = min_edge_distance - LABEL_EDGE_PADDING;
    let max_font_size = (safe_radius * 1.5).max(LABEL_MIN_FONT_SIZE);

    Some(LabelPlacement {
        anchor,
        max_font_size,
        rotation_deg: rotation_for(ring),
    })
}

/// Rotation heuristic: clearly-taller-than-wide rings read bottom-up;
/// otherwise text follows the longest edge, snapped to horizontal or
/// vertical when already close.
fn rotation_for(ring: &[Point]) -> f64 {
    let bounds = bounding_box(ring);
    if bounds.height() > 1.2 * bounds.width() {
        return -90.0;
    }

    let mut longest_sq = 0.0;
    let mut angle = 0.0;
    for i in 0..ring.len() {
        let a = ring[i];
        let b = ring[(i + 1) % ring.len()];
        let dx = b.x - a.x;
        let dy = b.y - a.y;
        let len_sq = dx * dx + dy * dy;
        if len_sq > longest_sq {
            longest_sq = len_sq;
            angle = dy.atan2(dx).to_degrees();
        }
    }

    // Text orientation is 180-degree symmetric.
    if angle > 90.0 {
        angle -= 180.0;
    }
    if angle <= -90.0 {
        angle += 180.0;
    }

    if angle.abs() < LABEL_ANGLE_SNAP_DEG {
        0.0
    } else if angle.abs() > 90.0 - LABEL_ANGLE_SNAP_DEG {
        -90.0
    } else {
        angle
    }
}
