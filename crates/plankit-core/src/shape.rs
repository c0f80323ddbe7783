//! The annotation shape model.
//!
//! Every drawable annotation is a [`Shape`]: a closed set of kinds over a
//! shared record. The `points` sequence carries the geometry and its
//! meaning depends on the kind: a ring of vertices for area shapes, a
//! center/edge pair for circles, endpoints for lines, a single anchor for
//! markers. Operations over shapes (hit-testing, snap candidates, export
//! mapping) match exhaustively on [`ShapeKind`], so adding a kind is a
//! compile-checked, localized change.

use serde::{Deserialize, Serialize};

use crate::types::{Bounds, Point};

/// The closed set of annotation kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    /// Closed ring of vertices.
    Polygon,
    /// Axis-aligned or rotated quad stored as a 4-vertex ring.
    Rectangle,
    /// Constrained rectangle, same ring storage.
    Square,
    /// 3-vertex ring.
    Triangle,
    /// `[center, edge-point]`; the radius is their distance.
    Circle,
    /// Single-anchor symbol.
    Icon,
    /// Single-anchor text block.
    Text,
    /// Single-anchor numbered marker.
    Bullet,
    /// Single-anchor embedded image.
    Image,
    /// `[start, end]`.
    Line,
    /// `[start, end]`, rendered with an arrowhead.
    Arrow,
    /// `[box-anchor, target]` leader annotation.
    Callout,
    /// `[origin, direction-point]` plus an [`AxisConfig`].
    Axis,
}

impl ShapeKind {
    /// Human-readable name, used for default labels and export layers.
    pub fn display_name(&self) -> &'static str {
        match self {
            ShapeKind::Polygon => "Polygon",
            ShapeKind::Rectangle => "Rectangle",
            ShapeKind::Square => "Square",
            ShapeKind::Triangle => "Triangle",
            ShapeKind::Circle => "Circle",
            ShapeKind::Icon => "Icon",
            ShapeKind::Text => "Text",
            ShapeKind::Bullet => "Bullet",
            ShapeKind::Image => "Image",
            ShapeKind::Line => "Line",
            ShapeKind::Arrow => "Arrow",
            ShapeKind::Callout => "Callout",
            ShapeKind::Axis => "Axis",
        }
    }

    /// True for kinds whose points form a closed vertex ring.
    pub fn is_ring(&self) -> bool {
        matches!(
            self,
            ShapeKind::Polygon | ShapeKind::Rectangle | ShapeKind::Square | ShapeKind::Triangle
        )
    }

    /// True for kinds whose points are a start/end segment.
    pub fn is_segment(&self) -> bool {
        matches!(
            self,
            ShapeKind::Line | ShapeKind::Arrow | ShapeKind::Callout | ShapeKind::Axis
        )
    }

    /// True for kinds anchored at a single point.
    pub fn is_anchor(&self) -> bool {
        matches!(
            self,
            ShapeKind::Icon | ShapeKind::Text | ShapeKind::Bullet | ShapeKind::Image
        )
    }
}

/// Parameters for the axis-grid generator attached to an axis shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisConfig {
    /// Spacing between neighboring axis lines, in millimeters.
    pub spacing_mm: f64,
    /// Number of parallel lines to generate.
    pub count: u32,
    /// First label; numeric strings advance numerically, anything else by
    /// character code.
    pub start_label: String,
    /// Length of each line, in millimeters.
    pub length_mm: f64,
    /// Emit a label bubble at both ends of each line.
    pub both_ends: bool,
    /// Advance labels in the opposite direction.
    pub reverse: bool,
}

impl Default for AxisConfig {
    fn default() -> Self {
        Self {
            spacing_mm: 1000.0,
            count: 5,
            start_label: "A".to_string(),
            length_mm: 10_000.0,
            both_ends: false,
            reverse: false,
        }
    }
}

/// Kind-specific presentation attributes.
///
/// Opaque payload for the geometry engine: carried, serialized, never
/// interpreted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapeStyle {
    #[serde(default = "default_stroke_width")]
    pub stroke_width: f64,
    #[serde(default = "default_opacity")]
    pub opacity: f64,
    #[serde(default = "default_font_size")]
    pub font_size: f64,
    #[serde(default)]
    pub filled: bool,
}

fn default_stroke_width() -> f64 {
    2.0
}

fn default_opacity() -> f64 {
    1.0
}

fn default_font_size() -> f64 {
    14.0
}

impl Default for ShapeStyle {
    fn default() -> Self {
        Self {
            stroke_width: default_stroke_width(),
            opacity: default_opacity(),
            font_size: default_font_size(),
            filled: false,
        }
    }
}

/// One annotation on a sheet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shape {
    /// Sheet-issued identifier.
    pub id: u64,
    pub kind: ShapeKind,
    /// Geometry; semantics depend on `kind` (see [`ShapeKind`]).
    pub points: Vec<Point>,
    /// Display color, e.g. `#e04040`. Opaque to geometry.
    pub color: String,
    /// Human label shown in legends and exports.
    pub label: String,
    pub visible: bool,
    pub locked: bool,
    #[serde(default)]
    pub style: ShapeStyle,
    /// Present only on `Axis` shapes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub axis: Option<AxisConfig>,
}

impl Shape {
    /// Creates a shape with default presentation attributes.
    pub fn new(id: u64, kind: ShapeKind, points: Vec<Point>) -> Self {
        Self {
            id,
            kind,
            points,
            color: "#e04040".to_string(),
            label: kind.display_name().to_string(),
            visible: true,
            locked: false,
            style: ShapeStyle::default(),
            axis: if kind == ShapeKind::Axis {
                Some(AxisConfig::default())
            } else {
                None
            },
        }
    }

    /// Creates a polygon from a vertex ring.
    pub fn polygon(id: u64, ring: Vec<Point>) -> Self {
        Self::new(id, ShapeKind::Polygon, ring)
    }

    /// Creates a rectangle from two opposite corners.
    pub fn rectangle(id: u64, a: Point, b: Point) -> Self {
        let ring = vec![
            Point::new(a.x, a.y),
            Point::new(b.x, a.y),
            Point::new(b.x, b.y),
            Point::new(a.x, b.y),
        ];
        Self::new(id, ShapeKind::Rectangle, ring)
    }

    /// Creates a line between two points.
    pub fn line(id: u64, start: Point, end: Point) -> Self {
        Self::new(id, ShapeKind::Line, vec![start, end])
    }

    /// Creates a circle from its center and a point on its edge.
    pub fn circle(id: u64, center: Point, edge: Point) -> Self {
        Self::new(id, ShapeKind::Circle, vec![center, edge])
    }

    /// Creates an axis shape from origin, direction point and config.
    pub fn axis(id: u64, origin: Point, direction: Point, config: AxisConfig) -> Self {
        let mut shape = Self::new(id, ShapeKind::Axis, vec![origin, direction]);
        shape.axis = Some(config);
        shape
    }

    /// The vertex ring for ring kinds with at least 3 vertices.
    pub fn ring(&self) -> Option<&[Point]> {
        if self.kind.is_ring() && self.points.len() >= 3 {
            Some(&self.points)
        } else {
            None
        }
    }

    /// Start and end points for segment kinds.
    pub fn endpoints(&self) -> Option<(Point, Point)> {
        if self.kind.is_segment() && self.points.len() >= 2 {
            Some((self.points[0], self.points[1]))
        } else {
            None
        }
    }

    /// Center and radius for circles.
    pub fn circle_geometry(&self) -> Option<(Point, f64)> {
        if self.kind == ShapeKind::Circle && self.points.len() >= 2 {
            let center = self.points[0];
            Some((center, center.distance_to(&self.points[1])))
        } else {
            None
        }
    }

    /// Anchor point for single-anchor kinds.
    pub fn anchor(&self) -> Option<Point> {
        if self.kind.is_anchor() {
            self.points.first().copied()
        } else {
            None
        }
    }

    /// Moves the whole shape by `(dx, dy)`.
    pub fn translate(&mut self, dx: f64, dy: f64) {
        for p in &mut self.points {
            p.x += dx;
            p.y += dy;
        }
    }

    /// Axis-aligned bounds of the shape geometry.
    ///
    /// `None` for shapes with no points (transient states while drawing).
    pub fn bounds(&self) -> Option<Bounds> {
        if self.points.is_empty() {
            return None;
        }
        match self.kind {
            ShapeKind::Circle => {
                let (center, radius) = self.circle_geometry()?;
                Some(Bounds::new(
                    center.x - radius,
                    center.y - radius,
                    center.x + radius,
                    center.y + radius,
                ))
            }
            ShapeKind::Polygon
            | ShapeKind::Rectangle
            | ShapeKind::Square
            | ShapeKind::Triangle
            | ShapeKind::Icon
            | ShapeKind::Text
            | ShapeKind::Bullet
            | ShapeKind::Image
            | ShapeKind::Line
            | ShapeKind::Arrow
            | ShapeKind::Callout
            | ShapeKind::Axis => {
                let mut b = Bounds::empty();
                for p in &self.points {
                    b.update(*p);
                }
                Some(b)
            }
        }
    }
}
