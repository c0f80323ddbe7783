//! Per-sheet configuration: the drawing grid and the calibration inputs
//! that anchor pixel space to the real world.

use serde::{Deserialize, Serialize};

use crate::types::{Point, WorldPoint};

/// The visual snap grid drawn over the sheet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridConfig {
    pub visible: bool,
    /// Grid cell size in millimeters of real-world length.
    pub size_mm: f64,
    /// Horizontal grid origin offset, in pixels.
    pub offset_x: f64,
    /// Vertical grid origin offset, in pixels.
    pub offset_y: f64,
    pub color: String,
    pub opacity: f64,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            visible: false,
            size_mm: 1000.0,
            offset_x: 0.0,
            offset_y: 0.0,
            color: "#808080".to_string(),
            opacity: 0.35,
        }
    }
}

/// One surveyed tie between a pixel location on the sheet and its
/// real-world coordinate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoordinateReference {
    pub id: u64,
    pub pixel: Point,
    pub world: WorldPoint,
}

impl CoordinateReference {
    pub fn new(id: u64, pixel: Point, world: WorldPoint) -> Self {
        Self { id, pixel, world }
    }
}

/// One ruler measurement: a drawn pixel run and the real length it spans.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalibrationSample {
    /// Measured length on screen, in pixels.
    pub pixels: f64,
    /// Known real length, in meters.
    pub meters: f64,
}

impl CalibrationSample {
    pub fn new(pixels: f64, meters: f64) -> Self {
        Self { pixels, meters }
    }
}

/// Everything a sheet knows about its mapping to the real world.
///
/// `references` feed the similarity transform (two or more ties pin down
/// scale, rotation and translation); `samples` feed the plain ruler scale
/// used when no world coordinates are available.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Calibration {
    #[serde(default)]
    pub references: Vec<CoordinateReference>,
    #[serde(default)]
    pub samples: Vec<CalibrationSample>,
}

impl Calibration {
    /// True once enough reference ties exist to derive a world transform.
    pub fn has_world_references(&self) -> bool {
        self.references.len() >= 2
    }

    /// Combined ruler scale in pixels per meter, or `None` without samples.
    ///
    /// Uses the ratio of summed pixel runs to summed real lengths so that
    /// longer measurements weigh more than short ones.
    pub fn pixels_per_meter(&self) -> Option<f64> {
        if self.samples.is_empty() {
            return None;
        }
        let total_pixels: f64 = self.samples.iter().map(|s| s.pixels).sum();
        let total_meters: f64 = self.samples.iter().map(|s| s.meters).sum();
        if total_meters <= 0.0 {
            return None;
        }
        Some(total_pixels / total_meters)
    }
}
