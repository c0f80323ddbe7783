//! IFC space placement mapping in world meters.
//!
//! Ring shapes become space placements: a local origin at the first
//! world vertex, the profile expressed relative to that origin, and
//! the storey elevation taken from the transform's interpolated z.
//! STEP entity encoding is the consumer's job.

use plankit_core::shape::Shape;
use plankit_core::sheet::Sheet;
use plankit_core::types::{Point, WorldPoint};
use plankit_geometry::calibrate::{world_transform, WorldTransform};
use plankit_geometry::primitives::polygon_area;

use crate::error::ExportError;

/// One space ready for IFC encoding.
#[derive(Debug, Clone, PartialEq)]
pub struct IfcSpacePlacement {
    pub label: String,
    /// Local placement origin, in world meters.
    pub origin: WorldPoint,
    /// Profile vertices relative to `origin`, in meters.
    pub profile: Vec<Point>,
    /// Floor area of the profile, in square meters.
    pub area_m2: f64,
}

/// Pixel-to-world mapper producing IFC space placements.
#[derive(Debug, Clone, Copy)]
pub struct IfcModelMapper {
    transform: WorldTransform,
}

impl IfcModelMapper {
    pub fn new(transform: WorldTransform) -> Self {
        Self { transform }
    }

    /// Builds a mapper from the sheet's coordinate references.
    pub fn for_sheet(sheet: &Sheet) -> Result<Self, ExportError> {
        world_transform(&sheet.calibration)
            .map(Self::new)
            .ok_or(ExportError::CalibrationRequired { format: "IFC" })
    }

    /// Maps one ring shape to a space placement.
    ///
    /// Non-ring kinds have no IFC space representation and yield
    /// `None`.
    pub fn map_shape(&self, shape: &Shape) -> Option<IfcSpacePlacement> {
        let ring = shape.ring()?;
        let origin = self.transform.to_world(ring[0]);

        let profile: Vec<Point> = ring
            .iter()
            .map(|p| {
                let w = self.transform.to_world(*p);
                Point::new(w.x - origin.x, w.y - origin.y)
            })
            .collect();
        let area_m2 = polygon_area(&profile);

        Some(IfcSpacePlacement {
            label: shape.label.clone(),
            origin,
            profile,
            area_m2,
        })
    }

    /// Maps every visible ring shape of a sheet.
    pub fn map_sheet(&self, sheet: &Sheet) -> Vec<IfcSpacePlacement> {
        sheet
            .visible_shapes()
            .filter_map(|shape| self.map_shape(shape))
            .collect()
    }
}
