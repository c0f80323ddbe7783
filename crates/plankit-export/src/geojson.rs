//! GeoJSON feature mapping in world coordinates.
//!
//! GeoJSON is the one format with no sensible uncalibrated fallback:
//! its coordinates are meaningless unless the sheet carries a world
//! transform, so mapping fails with
//! [`ExportError::CalibrationRequired`] instead of guessing. Output
//! structs serialize directly to GeoJSON-shaped JSON via serde.

use serde::Serialize;

use plankit_core::shape::{Shape, ShapeKind};
use plankit_core::sheet::Sheet;
use plankit_core::types::Point;
use plankit_geometry::calibrate::{world_transform, WorldTransform};

use crate::error::ExportError;

/// `[x, y]` or `[x, y, z]`, in world meters.
pub type Position = Vec<f64>;

/// GeoJSON geometry for the shape kinds this editor produces.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "coordinates")]
pub enum GeoGeometry {
    Point(Position),
    LineString(Vec<Position>),
    Polygon(Vec<Vec<Position>>),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeoProperties {
    pub label: String,
    pub kind: &'static str,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeoFeature {
    #[serde(rename = "type")]
    pub feature_type: &'static str,
    pub geometry: GeoGeometry,
    pub properties: GeoProperties,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeoFeatureCollection {
    #[serde(rename = "type")]
    pub collection_type: &'static str,
    pub features: Vec<GeoFeature>,
}

/// Segments used to approximate a circle as a polygon ring.
const CIRCLE_SEGMENTS: usize = 32;

/// Pixel-to-world mapper for GeoJSON features.
#[derive(Debug, Clone, Copy)]
pub struct GeoJsonMapper {
    transform: WorldTransform,
}

impl GeoJsonMapper {
    pub fn new(transform: WorldTransform) -> Self {
        Self { transform }
    }

    /// Builds a mapper from the sheet's coordinate references.
    pub fn for_sheet(sheet: &Sheet) -> Result<Self, ExportError> {
        world_transform(&sheet.calibration)
            .map(Self::new)
            .ok_or(ExportError::CalibrationRequired { format: "GeoJSON" })
    }

    fn position(&self, p: Point) -> Position {
        let w = self.transform.to_world(p);
        match w.z {
            Some(z) => vec![w.x, w.y, z],
            None => vec![w.x, w.y],
        }
    }

    /// Closed ring: the first position is repeated at the end.
    fn ring_positions(&self, ring: &[Point]) -> Vec<Position> {
        let mut positions: Vec<Position> = ring.iter().map(|p| self.position(*p)).collect();
        if let Some(first) = positions.first().cloned() {
            positions.push(first);
        }
        positions
    }

    /// Maps one shape to a feature, or `None` for shapes with too few
    /// points to carry geometry.
    pub fn map_shape(&self, shape: &Shape) -> Option<GeoFeature> {
        let geometry = match shape.kind {
            ShapeKind::Polygon | ShapeKind::Rectangle | ShapeKind::Square | ShapeKind::Triangle => {
                GeoGeometry::Polygon(vec![self.ring_positions(shape.ring()?)])
            }
            ShapeKind::Circle => {
                let (center, radius) = shape.circle_geometry()?;
                let ring: Vec<Point> = (0..CIRCLE_SEGMENTS)
                    .map(|i| {
                        let angle = i as f64 / CIRCLE_SEGMENTS as f64 * std::f64::consts::TAU;
                        Point::new(
                            center.x + radius * angle.cos(),
                            center.y + radius * angle.sin(),
                        )
                    })
                    .collect();
                GeoGeometry::Polygon(vec![self.ring_positions(&ring)])
            }
            ShapeKind::Line | ShapeKind::Arrow | ShapeKind::Callout | ShapeKind::Axis => {
                let (start, end) = shape.endpoints()?;
                GeoGeometry::LineString(vec![self.position(start), self.position(end)])
            }
            ShapeKind::Icon | ShapeKind::Text | ShapeKind::Bullet | ShapeKind::Image => {
                GeoGeometry::Point(self.position(shape.anchor()?))
            }
        };

        Some(GeoFeature {
            feature_type: "Feature",
            geometry,
            properties: GeoProperties {
                label: shape.label.clone(),
                kind: shape.kind.display_name(),
                color: shape.color.clone(),
            },
        })
    }

    /// Maps every visible shape of a sheet into a feature collection.
    pub fn map_sheet(&self, sheet: &Sheet) -> GeoFeatureCollection {
        GeoFeatureCollection {
            collection_type: "FeatureCollection",
            features: sheet
                .visible_shapes()
                .filter_map(|shape| self.map_shape(shape))
                .collect(),
        }
    }
}
