//! Primitive geometry over points and vertex rings.
//!
//! Every function here is pure and total. Interactive dragging constantly
//! passes through transient degenerate states (empty rings, zero-length
//! segments), so degenerate input maps to a defined degenerate result
//! instead of an error. Functions are space-agnostic: they work the same
//! on pixel and world coordinates.

use plankit_core::types::{Bounds, Point};

/// Turn direction of the ordered point triple `(p, q, r)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Collinear,
    Clockwise,
    CounterClockwise,
}

/// Classifies the turn from `p` through `q` to `r` by cross product sign.
///
/// This is the shared primitive for every intersection test: two segments
/// cross in the general case exactly when the endpoint orientations
/// disagree pairwise.
pub fn orientation(p: Point, q: Point, r: Point) -> Orientation {
    let cross = (q.y - p.y) * (r.x - q.x) - (q.x - p.x) * (r.y - q.y);
    if cross.abs() < f64::EPSILON {
        Orientation::Collinear
    } else if cross > 0.0 {
        Orientation::Clockwise
    } else {
        Orientation::CounterClockwise
    }
}

/// Euclidean distance between two points.
pub fn distance(a: Point, b: Point) -> f64 {
    a.distance_to(&b)
}

/// Midpoint of the segment `ab`.
pub fn midpoint(a: Point, b: Point) -> Point {
    Point::new((a.x + b.x) / 2.0, (a.y + b.y) / 2.0)
}

/// Vertex average of a point set.
///
/// A single point is its own centroid and two points yield their
/// midpoint. An empty set is a caller error; release builds return the
/// origin rather than dividing by zero.
pub fn centroid(points: &[Point]) -> Point {
    debug_assert!(!points.is_empty(), "centroid of an empty point set");
    if points.is_empty() {
        return Point::new(0.0, 0.0);
    }
    if points.len() == 1 {
        return points[0];
    }
    if points.len() == 2 {
        return midpoint(points[0], points[1]);
    }
    let n = points.len() as f64;
    let sum_x: f64 = points.iter().map(|p| p.x).sum();
    let sum_y: f64 = points.iter().map(|p| p.y).sum();
    Point::new(sum_x / n, sum_y / n)
}

/// Axis-aligned bounding box of a point set.
///
/// An empty set yields the inverted empty bounds accumulator
/// (`Bounds::is_valid()` is false).
pub fn bounding_box(points: &[Point]) -> Bounds {
    let mut bounds = Bounds::empty();
    for p in points {
        bounds.update(*p);
    }
    bounds
}

/// Closest point to `p` on the segment `ab`.
///
/// Projects `p` onto the segment's supporting line and clamps the
/// projection parameter to `[0, 1]`. A zero-length segment projects
/// everything onto `a`.
pub fn closest_point_on_segment(p: Point, a: Point, b: Point) -> Point {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    let len_sq = dx * dx + dy * dy;
    if len_sq == 0.0 {
        return a;
    }
    let t = (((p.x - a.x) * dx + (p.y - a.y) * dy) / len_sq).clamp(0.0, 1.0);
    Point::new(a.x + t * dx, a.y + t * dy)
}

/// Distance from `p` to the segment `ab`.
pub fn point_to_segment_distance(p: Point, a: Point, b: Point) -> f64 {
    p.distance_to(&closest_point_on_segment(p, a, b))
}

/// Even-odd point-in-polygon test with a bounding-box early out.
///
/// Points exactly on the boundary are implementation-defined (inherent
/// to the even-odd rule) but deterministic for identical input. Rings
/// with fewer than 3 vertices contain nothing.
pub fn point_in_polygon(p: Point, polygon: &[Point]) -> bool {
    if polygon.len() < 3 {
        return false;
    }
    let bounds = bounding_box(polygon);
    if !bounds.contains(p) {
        return false;
    }
    let mut inside = false;
    let mut j = polygon.len() - 1;
    for i in 0..polygon.len() {
        let pi = polygon[i];
        let pj = polygon[j];
        if (pi.y > p.y) != (pj.y > p.y)
            && p.x < (pj.x - pi.x) * (p.y - pi.y) / (pj.y - pi.y) + pi.x
        {
            inside = !inside;
        }
        j = i;
    }
    inside
}

/// Absolute polygon area by the shoelace formula.
///
/// Invariant under vertex rotation and winding reversal. Rings with
/// fewer than 3 vertices have zero area.
pub fn polygon_area(ring: &[Point]) -> f64 {
    if ring.len() < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    let mut j = ring.len() - 1;
    for i in 0..ring.len() {
        sum += (ring[j].x + ring[i].x) * (ring[j].y - ring[i].y);
        j = i;
    }
    (sum / 2.0).abs()
}

/// Rotates `point` around `center` by `angle_degrees`.
pub fn rotate_point(point: Point, center: Point, angle_degrees: f64) -> Point {
    let angle_rad = angle_degrees.to_radians();
    let cos = angle_rad.cos();
    let sin = angle_rad.sin();
    let dx = point.x - center.x;
    let dy = point.y - center.y;
    Point::new(
        center.x + dx * cos - dy * sin,
        center.y + dx * sin + dy * cos,
    )
}

/// Scales every ring vertex toward the ring's own centroid.
///
/// Factors slightly below 1.0 pull shared edges apart so that
/// exactly-touching rings stop registering as crossing.
pub fn scale_toward_centroid(ring: &[Point], factor: f64) -> Vec<Point> {
    if ring.is_empty() {
        return Vec::new();
    }
    let center = centroid(ring);
    ring.iter()
        .map(|p| {
            Point::new(
                center.x + (p.x - center.x) * factor,
                center.y + (p.y - center.y) * factor,
            )
        })
        .collect()
}
