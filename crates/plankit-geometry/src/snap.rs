//! Snap queries for interactive drawing and dragging.
//!
//! Two entry points: [`find_snap_point`] answers "where should this
//! cursor position land" while a vertex is being placed or dragged, and
//! [`snap_correction`] answers "how should this whole-shape drag be
//! nudged" so a moved shape lands exactly on neighboring geometry.
//! Candidates compete on distance alone across every category; the
//! closest one under the threshold wins.

use tracing::debug;

use plankit_core::config::GridConfig;
use plankit_core::constants::GRID_SNAP_MIN_STEP_PX;
use plankit_core::shape::{Shape, ShapeKind};
use plankit_core::types::Point;
use plankit_core::units::{mm_to_pixels, pixels_per_mm};

use crate::axis::generate_axis_lines;
use crate::primitives::{closest_point_on_segment, midpoint};

/// What a snap candidate is anchored to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapKind {
    GridIntersection,
    Vertex,
    EdgeMidpoint,
    Edge,
    AxisLine,
}

/// A snap candidate that won the distance competition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SnapHit {
    pub point: Point,
    pub kind: SnapKind,
    pub distance: f64,
}

/// Correction for a whole-shape drag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SnapCorrection {
    /// Added to the raw drag displacement before the move commits.
    pub delta: Point,
    /// The static point the moving geometry lands on.
    pub target: Point,
}

/// Optional context that enables grid and axis-line candidates.
#[derive(Debug, Clone, Copy, Default)]
pub struct SnapContext<'a> {
    pub grid: Option<&'a GridConfig>,
    /// Calibrated drawing scale; without it grid and axis-family
    /// candidates are skipped.
    pub pixels_per_meter: Option<f64>,
}

/// Running minimum over snap candidates. The acceptance limit shrinks
/// to each accepted candidate's distance, so on exact ties the earlier
/// category keeps the hit.
struct Nearest {
    limit: f64,
    best: Option<SnapHit>,
}

impl Nearest {
    fn new(threshold: f64) -> Self {
        Self {
            limit: threshold,
            best: None,
        }
    }

    fn consider(&mut self, target: Point, point: Point, kind: SnapKind) {
        let distance = target.distance_to(&point);
        if distance < self.limit {
            self.limit = distance;
            self.best = Some(SnapHit {
                point,
                kind,
                distance,
            });
        }
    }
}

/// Nearest grid-line intersection to `p`, or `None` when the grid is
/// hidden, has a non-positive step, or its pixel step falls below
/// `GRID_SNAP_MIN_STEP_PX` (tiny grids would otherwise snap everything).
pub fn closest_grid_point(p: Point, grid: &GridConfig, pixels_per_meter: f64) -> Option<Point> {
    if !grid.visible || grid.size_mm <= 0.0 || pixels_per_meter <= 0.0 {
        return None;
    }
    let step = mm_to_pixels(grid.size_mm, pixels_per_meter);
    if step < GRID_SNAP_MIN_STEP_PX {
        return None;
    }
    Some(Point::new(
        ((p.x - grid.offset_x) / step).round() * step + grid.offset_x,
        ((p.y - grid.offset_y) / step).round() * step + grid.offset_y,
    ))
}

/// Finds the single closest snap candidate to `target` within
/// `threshold`, or `None`.
///
/// Candidate categories: grid intersections, ring vertices, ring edge
/// midpoints, closest points on ring edges, and axis-system lines.
/// All compete on distance in one running minimum; there is no category
/// precedence beyond tie-breaking in the order listed.
pub fn find_snap_point(
    target: Point,
    shapes: &[Shape],
    threshold: f64,
    ctx: SnapContext,
) -> Option<SnapHit> {
    let mut nearest = Nearest::new(threshold);

    if let (Some(grid), Some(ppm)) = (ctx.grid, ctx.pixels_per_meter) {
        if let Some(gp) = closest_grid_point(target, grid, ppm) {
            nearest.consider(target, gp, SnapKind::GridIntersection);
        }
    }

    for shape in shapes {
        match shape.kind {
            ShapeKind::Polygon
            | ShapeKind::Rectangle
            | ShapeKind::Square
            | ShapeKind::Triangle => {
                if let Some(ring) = shape.ring() {
                    for v in ring {
                        nearest.consider(target, *v, SnapKind::Vertex);
                    }
                    for i in 0..ring.len() {
                        let a = ring[i];
                        let b = ring[(i + 1) % ring.len()];
                        nearest.consider(target, midpoint(a, b), SnapKind::EdgeMidpoint);
                        nearest.consider(
                            target,
                            closest_point_on_segment(target, a, b),
                            SnapKind::Edge,
                        );
                    }
                }
            }
            ShapeKind::Axis => {
                if let (Some((origin, direction)), Some(config)) =
                    (shape.endpoints(), shape.axis.as_ref())
                {
                    if let Some(ppm) = ctx.pixels_per_meter {
                        let axes =
                            generate_axis_lines(origin, direction, config, pixels_per_mm(ppm));
                        for line in &axes.lines {
                            nearest.consider(target, line.start, SnapKind::AxisLine);
                            nearest.consider(target, line.end, SnapKind::AxisLine);
                            nearest.consider(
                                target,
                                closest_point_on_segment(target, line.start, line.end),
                                SnapKind::AxisLine,
                            );
                        }
                    } else {
                        nearest.consider(target, origin, SnapKind::AxisLine);
                        nearest.consider(target, direction, SnapKind::AxisLine);
                    }
                }
            }
            ShapeKind::Circle
            | ShapeKind::Icon
            | ShapeKind::Text
            | ShapeKind::Bullet
            | ShapeKind::Image
            | ShapeKind::Line
            | ShapeKind::Arrow
            | ShapeKind::Callout => {}
        }
    }

    nearest.best
}

/// Ring vertices that act as snap targets during whole-shape drags.
fn snap_ring(shape: &Shape) -> Option<&[Point]> {
    match shape.kind {
        ShapeKind::Polygon | ShapeKind::Rectangle | ShapeKind::Square | ShapeKind::Triangle => {
            shape.ring()
        }
        ShapeKind::Circle
        | ShapeKind::Icon
        | ShapeKind::Text
        | ShapeKind::Bullet
        | ShapeKind::Image
        | ShapeKind::Line
        | ShapeKind::Arrow
        | ShapeKind::Callout
        | ShapeKind::Axis => None,
    }
}

/// Correction vector aligning a dragged shape with static neighbors.
///
/// Phase one pairs every moving point with every static vertex and
/// takes the global minimum under `threshold`; a vertex match wins
/// outright, even when some edge point is closer. Only when no vertex
/// pair matches does phase two project the moving points onto static
/// edges and take the closest projection.
pub fn snap_correction(
    moving: &[Point],
    static_shapes: &[Shape],
    threshold: f64,
) -> Option<SnapCorrection> {
    let mut best: Option<(f64, Point, Point)> = None;

    for m in moving {
        for shape in static_shapes {
            if let Some(ring) = snap_ring(shape) {
                for v in ring {
                    let d = m.distance_to(v);
                    if d < threshold && best.map_or(true, |(bd, _, _)| d < bd) {
                        best = Some((d, *m, *v));
                    }
                }
            }
        }
    }

    if best.is_none() {
        for m in moving {
            for shape in static_shapes {
                if let Some(ring) = snap_ring(shape) {
                    for i in 0..ring.len() {
                        let a = ring[i];
                        let b = ring[(i + 1) % ring.len()];
                        let on_edge = closest_point_on_segment(*m, a, b);
                        let d = m.distance_to(&on_edge);
                        if d < threshold && best.map_or(true, |(bd, _, _)| d < bd) {
                            best = Some((d, *m, on_edge));
                        }
                    }
                }
            }
        }
    }

    best.map(|(distance, from, to)| {
        debug!(distance, "drag snap correction applied");
        SnapCorrection {
            delta: Point::new(to.x - from.x, to.y - from.y),
            target: to,
        }
    })
}
