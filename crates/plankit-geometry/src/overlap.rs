//! Overlap resolution between polygon rings.
//!
//! Implements the separating axis theorem over the edge normals of both
//! rings. The minimum translation vector (MTV) is the smallest single
//! translation that separates a moving ring from a static one; repeated
//! application against several static rings approximates simultaneous
//! multi-body separation well enough for the sparse, roughly convex
//! shapes an annotation editor produces.

use smallvec::SmallVec;
use tracing::debug;

use plankit_core::constants::{MTV_MAX_ITERATIONS, VERTEX_WELD_THRESHOLD};
use plankit_core::types::Point;

use crate::intersect::polygons_intersect;
use crate::primitives::{centroid, closest_point_on_segment};

/// A minimum translation vector separating two overlapping rings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mtv {
    /// Unit direction that moves the moving ring off the static one.
    pub axis: Point,
    /// Penetration depth along `axis`.
    pub overlap: f64,
}

impl Mtv {
    /// The translation to apply to the moving ring.
    pub fn delta(&self) -> Point {
        Point::new(self.axis.x * self.overlap, self.axis.y * self.overlap)
    }
}

/// Projects a ring onto an axis, returning the `(min, max)` interval.
fn project(ring: &[Point], axis: Point) -> (f64, f64) {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for p in ring {
        let d = p.x * axis.x + p.y * axis.y;
        min = min.min(d);
        max = max.max(d);
    }
    (min, max)
}

/// Unit normals of every non-degenerate edge of a ring.
fn edge_normals(ring: &[Point], axes: &mut SmallVec<[Point; 16]>) {
    for i in 0..ring.len() {
        let a = ring[i];
        let b = ring[(i + 1) % ring.len()];
        let edge_x = b.x - a.x;
        let edge_y = b.y - a.y;
        let len = (edge_x * edge_x + edge_y * edge_y).sqrt();
        if len == 0.0 {
            continue;
        }
        axes.push(Point::new(-edge_y / len, edge_x / len));
    }
}

/// Minimum translation vector that separates `moving` from `fixed`.
///
/// Returns `None` when the rings do not overlap (some axis separates
/// their projections) or when either ring is degenerate, so this also
/// serves as a generic overlap test. Projections that merely touch do
/// not count as overlap, and no buffer is added to the result: applying
/// the MTV leaves the rings in exact tangency.
pub fn calculate_mtv(moving: &[Point], fixed: &[Point]) -> Option<Mtv> {
    if moving.len() < 3 || fixed.len() < 3 {
        return None;
    }

    let mut axes: SmallVec<[Point; 16]> = SmallVec::new();
    edge_normals(moving, &mut axes);
    edge_normals(fixed, &mut axes);

    let mut best_axis = Point::new(0.0, 0.0);
    let mut best_overlap = f64::INFINITY;

    for axis in axes {
        let (min_a, max_a) = project(moving, axis);
        let (min_b, max_b) = project(fixed, axis);
        if max_a <= min_b || max_b <= min_a {
            return None;
        }
        let overlap = (max_a - min_b).min(max_b - min_a);
        if overlap < best_overlap {
            best_overlap = overlap;
            best_axis = axis;
        }
    }

    // Push the moving ring away from the static one, never into it.
    let center_delta = {
        let cm = centroid(moving);
        let cf = centroid(fixed);
        Point::new(cm.x - cf.x, cm.y - cf.y)
    };
    if center_delta.x * best_axis.x + center_delta.y * best_axis.y < 0.0 {
        best_axis = Point::new(-best_axis.x, -best_axis.y);
    }

    Some(Mtv {
        axis: best_axis,
        overlap: best_overlap,
    })
}

/// Separates a moving ring from every static ring it overlaps.
///
/// MTVs are applied one static ring at a time for up to
/// `MTV_MAX_ITERATIONS` passes. The solve is order-dependent rather
/// than a true simultaneous separation, but converges in practice for
/// sparse annotation layouts. A final weld pass then pulls each moving
/// vertex within `VERTEX_WELD_THRESHOLD` onto the nearest static vertex
/// (preferred) or edge point, giving pixel-exact alignment between
/// adjacent areas. Returns the adjusted ring.
pub fn resolve_overlaps(moving: &[Point], fixed_rings: &[Vec<Point>]) -> Vec<Point> {
    let mut ring = moving.to_vec();
    if ring.len() < 3 {
        return ring;
    }

    let mut converged = false;
    for _ in 0..MTV_MAX_ITERATIONS {
        let mut moved = false;
        for fixed in fixed_rings {
            if !polygons_intersect(&ring, fixed) {
                continue;
            }
            if let Some(mtv) = calculate_mtv(&ring, fixed) {
                let delta = mtv.delta();
                for p in &mut ring {
                    p.x += delta.x;
                    p.y += delta.y;
                }
                moved = true;
            }
        }
        if !moved {
            converged = true;
            break;
        }
    }
    if !converged {
        debug!(
            max_passes = MTV_MAX_ITERATIONS,
            "overlap resolution stopped at iteration cap"
        );
    }

    weld_to_static(&mut ring, fixed_rings);
    ring
}

/// Pulls near-coincident moving vertices onto static geometry.
///
/// Static vertices win over edge points: a vertex within threshold of
/// both snaps to the vertex even when an edge point is closer.
fn weld_to_static(ring: &mut [Point], fixed_rings: &[Vec<Point>]) {
    for p in ring.iter_mut() {
        let mut best: Option<(f64, Point)> = None;

        for fixed in fixed_rings {
            for v in fixed {
                let d = p.distance_to(v);
                if d <= VERTEX_WELD_THRESHOLD && best.map_or(true, |(bd, _)| d < bd) {
                    best = Some((d, *v));
                }
            }
        }

        if best.is_none() {
            for fixed in fixed_rings {
                for i in 0..fixed.len() {
                    let a = fixed[i];
                    let b = fixed[(i + 1) % fixed.len()];
                    let on_edge = closest_point_on_segment(*p, a, b);
                    let d = p.distance_to(&on_edge);
                    if d <= VERTEX_WELD_THRESHOLD && best.map_or(true, |(bd, _)| d < bd) {
                        best = Some((d, on_edge));
                    }
                }
            }
        }

        if let Some((_, target)) = best {
            *p = target;
        }
    }
}
