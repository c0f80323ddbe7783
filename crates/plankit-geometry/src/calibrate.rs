//! Pixel-to-world coordinate calibration.
//!
//! Two surveyed reference ties define a similarity transform (uniform
//! scale, rotation, translation) from sheet pixels into real-world
//! meters. When only ruler measurements exist, a scalar pixels-per-meter
//! scale is derived instead; the two-point transform always wins when
//! both are available because it carries full x/y/z placement.

use plankit_core::config::{Calibration, CoordinateReference};
use plankit_core::constants::CALIBRATION_MIN_PIXEL_DISTANCE;
use plankit_core::types::{Point, WorldPoint};

/// A similarity transform from sheet pixel space into world meters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorldTransform {
    pixel_origin: Point,
    world_origin: WorldPoint,
    /// Meters of world length per pixel.
    pub scale: f64,
    /// World bearing minus pixel bearing, in radians.
    pub rotation: f64,
    pixel_span: Point,
    pixel_span_len_sq: f64,
    z_start: Option<f64>,
    z_end: Option<f64>,
}

impl WorldTransform {
    /// Derives the transform from two reference ties.
    ///
    /// Returns `None` when the pixel anchors coincide (within
    /// `CALIBRATION_MIN_PIXEL_DISTANCE`), since coincident anchors pin
    /// down neither scale nor rotation.
    pub fn from_references(r1: &CoordinateReference, r2: &CoordinateReference) -> Option<Self> {
        let dx = r2.pixel.x - r1.pixel.x;
        let dy = r2.pixel.y - r1.pixel.y;
        let pixel_dist = (dx * dx + dy * dy).sqrt();
        if pixel_dist < CALIBRATION_MIN_PIXEL_DISTANCE {
            return None;
        }

        let wx = r2.world.x - r1.world.x;
        let wy = r2.world.y - r1.world.y;
        let world_dist = (wx * wx + wy * wy).sqrt();

        Some(Self {
            pixel_origin: r1.pixel,
            world_origin: r1.world,
            scale: world_dist / pixel_dist,
            rotation: wy.atan2(wx) - dy.atan2(dx),
            pixel_span: Point::new(dx, dy),
            pixel_span_len_sq: pixel_dist * pixel_dist,
            z_start: r1.world.z,
            z_end: r2.world.z,
        })
    }

    /// Maps a pixel point into world coordinates.
    ///
    /// Translate relative to the first reference, rotate, scale, then
    /// translate by the first reference's world location. No axis flip
    /// happens here; format-specific axis conventions belong to the
    /// exporters.
    pub fn to_world(&self, p: Point) -> WorldPoint {
        let dx = p.x - self.pixel_origin.x;
        let dy = p.y - self.pixel_origin.y;
        let cos = self.rotation.cos();
        let sin = self.rotation.sin();
        let rx = dx * cos - dy * sin;
        let ry = dx * sin + dy * cos;
        WorldPoint {
            x: self.world_origin.x + rx * self.scale,
            y: self.world_origin.y + ry * self.scale,
            z: self.elevation_at(p),
        }
    }

    /// Elevation for a pixel point.
    ///
    /// When both references carry elevation, z varies linearly with the
    /// projection of the point onto the reference pixel span (points
    /// beyond the span extrapolate). A single elevation applies
    /// everywhere; none means no elevation.
    fn elevation_at(&self, p: Point) -> Option<f64> {
        match (self.z_start, self.z_end) {
            (Some(z1), Some(z2)) => {
                let t = ((p.x - self.pixel_origin.x) * self.pixel_span.x
                    + (p.y - self.pixel_origin.y) * self.pixel_span.y)
                    / self.pixel_span_len_sq;
                Some(z1 + (z2 - z1) * t)
            }
            (Some(z), None) | (None, Some(z)) => Some(z),
            (None, None) => None,
        }
    }

    /// Drawing scale implied by the transform.
    pub fn pixels_per_meter(&self) -> Option<f64> {
        if self.scale > 0.0 {
            Some(1.0 / self.scale)
        } else {
            None
        }
    }
}

/// Builds the world transform from a sheet's calibration, when its
/// first two references have distinct pixel anchors.
pub fn world_transform(calibration: &Calibration) -> Option<WorldTransform> {
    if calibration.references.len() < 2 {
        return None;
    }
    WorldTransform::from_references(&calibration.references[0], &calibration.references[1])
}

/// Effective drawing scale for a sheet.
///
/// The two-point transform's scale takes precedence; ruler samples are
/// the fallback for plain length and area display.
pub fn effective_pixels_per_meter(calibration: &Calibration) -> Option<f64> {
    if let Some(transform) = world_transform(calibration) {
        if let Some(ppm) = transform.pixels_per_meter() {
            return Some(ppm);
        }
    }
    calibration.pixels_per_meter()
}
