//! Segment crossing predicates and polygon overlap tests.
//!
//! All predicates here are advisory: callers decide whether to reject a
//! user action based on them. Tolerances are tuned for hand-drawn
//! annotation geometry, where vertices routinely land exactly on top of
//! each other and shared edges between adjacent rooms are legitimate.

use plankit_core::constants::{OVERLAP_SHRINK_FACTOR, VERTEX_MATCH_EPSILON};
use plankit_core::types::Point;

use crate::primitives::{orientation, point_in_polygon, scale_toward_centroid, Orientation};

/// True when `q` lies within the axis-aligned box spanned by `p` and `r`.
/// Only meaningful when the three points are collinear.
fn on_segment(p: Point, q: Point, r: Point) -> bool {
    q.x <= p.x.max(r.x) && q.x >= p.x.min(r.x) && q.y <= p.y.max(r.y) && q.y >= p.y.min(r.y)
}

/// Classic segment intersection test for segments `p1q1` and `p2q2`.
///
/// Covers the general case (orientation pairs disagree) plus the four
/// collinear cases where an endpoint of one segment lies on the other.
pub fn segments_intersect(p1: Point, q1: Point, p2: Point, q2: Point) -> bool {
    let o1 = orientation(p1, q1, p2);
    let o2 = orientation(p1, q1, q2);
    let o3 = orientation(p2, q2, p1);
    let o4 = orientation(p2, q2, q1);

    if o1 != o2 && o3 != o4 {
        return true;
    }

    if o1 == Orientation::Collinear && on_segment(p1, p2, q1) {
        return true;
    }
    if o2 == Orientation::Collinear && on_segment(p1, q2, q1) {
        return true;
    }
    if o3 == Orientation::Collinear && on_segment(p2, p1, q2) {
        return true;
    }
    if o4 == Orientation::Collinear && on_segment(p2, q1, q2) {
        return true;
    }

    false
}

/// Like [`segments_intersect`], but segments that only touch at a shared
/// endpoint do not count.
///
/// Endpoint coincidence is matched within `VERTEX_MATCH_EPSILON`, so
/// consecutive polygon edges and legitimately shared vertices are never
/// reported as crossings.
pub fn segments_cross(p1: Point, q1: Point, p2: Point, q2: Point) -> bool {
    if p1.distance_to(&p2) < VERTEX_MATCH_EPSILON
        || p1.distance_to(&q2) < VERTEX_MATCH_EPSILON
        || q1.distance_to(&p2) < VERTEX_MATCH_EPSILON
        || q1.distance_to(&q2) < VERTEX_MATCH_EPSILON
    {
        return false;
    }
    segments_intersect(p1, q1, p2, q2)
}

/// Checks whether appending `candidate` to an in-progress polygon ring
/// would make the ring self-cross.
///
/// When `candidate` lands within `VERTEX_MATCH_EPSILON` of the first
/// vertex the new edge is the closing edge, and the two existing edges
/// that share one of its endpoints (the first and the last) are excluded
/// from the test. Otherwise the new edge is tested against every edge
/// except the one it extends.
pub fn would_self_intersect(existing: &[Point], candidate: Point) -> bool {
    if existing.len() < 3 {
        return false;
    }
    let first = existing[0];
    let last = existing[existing.len() - 1];

    if candidate.distance_to(&first) < VERTEX_MATCH_EPSILON {
        for i in 1..existing.len() - 2 {
            if segments_cross(last, first, existing[i], existing[i + 1]) {
                return true;
            }
        }
        return false;
    }

    for i in 0..existing.len() - 2 {
        if segments_cross(last, candidate, existing[i], existing[i + 1]) {
            return true;
        }
    }
    false
}

/// Whether two polygon rings overlap in area.
///
/// Both rings are shrunk very slightly toward their own centroid before
/// edge testing, so rings that share an edge or touch at a vertex are
/// not reported as overlapping while genuine area overlap still is. A
/// containment check on each shrunk ring's first vertex catches the
/// full-containment case no edge pair can see.
pub fn polygons_intersect(a: &[Point], b: &[Point]) -> bool {
    if a.len() < 3 || b.len() < 3 {
        return false;
    }

    let a = scale_toward_centroid(a, OVERLAP_SHRINK_FACTOR);
    let b = scale_toward_centroid(b, OVERLAP_SHRINK_FACTOR);

    for i in 0..a.len() {
        let a1 = a[i];
        let a2 = a[(i + 1) % a.len()];
        for j in 0..b.len() {
            let b1 = b[j];
            let b2 = b[(j + 1) % b.len()];
            if segments_intersect(a1, a2, b1, b2) {
                return true;
            }
        }
    }

    point_in_polygon(a[0], &b) || point_in_polygon(b[0], &a)
}
