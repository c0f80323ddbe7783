//! A sheet is one annotated plan page: a raster background with shapes,
//! a grid and calibration data layered on top.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::{Calibration, GridConfig};
use crate::shape::{Shape, ShapeKind};
use crate::types::Point;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sheet {
    pub id: Uuid,
    pub name: String,
    /// Sheet pixel width, from the background raster.
    pub width_px: f64,
    /// Sheet pixel height, from the background raster.
    pub height_px: f64,
    /// Reference to the background image, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default)]
    pub shapes: Vec<Shape>,
    #[serde(default)]
    pub grid: GridConfig,
    #[serde(default)]
    pub calibration: Calibration,
    /// Next identifier handed out by [`Sheet::generate_shape_id`].
    #[serde(default = "default_next_shape_id")]
    next_shape_id: u64,
}

fn default_next_shape_id() -> u64 {
    1
}

impl Sheet {
    pub fn new(name: impl Into<String>, width_px: f64, height_px: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            width_px,
            height_px,
            image: None,
            shapes: Vec::new(),
            grid: GridConfig::default(),
            calibration: Calibration::default(),
            next_shape_id: 1,
        }
    }

    /// Issues a sheet-unique shape identifier.
    pub fn generate_shape_id(&mut self) -> u64 {
        let id = self.next_shape_id;
        self.next_shape_id += 1;
        id
    }

    /// Creates a shape of the given kind, issues it an id and stores it.
    /// Returns the new id.
    pub fn create_shape(&mut self, kind: ShapeKind, points: Vec<Point>) -> u64 {
        let id = self.generate_shape_id();
        self.shapes.push(Shape::new(id, kind, points));
        id
    }

    /// Stores an externally built shape, reserving its id range.
    pub fn add_shape(&mut self, shape: Shape) {
        if shape.id >= self.next_shape_id {
            self.next_shape_id = shape.id + 1;
        }
        self.shapes.push(shape);
    }

    pub fn shape(&self, id: u64) -> Option<&Shape> {
        self.shapes.iter().find(|s| s.id == id)
    }

    pub fn shape_mut(&mut self, id: u64) -> Option<&mut Shape> {
        self.shapes.iter_mut().find(|s| s.id == id)
    }

    /// Removes a shape by id. Returns true when one was removed.
    pub fn remove_shape(&mut self, id: u64) -> bool {
        let before = self.shapes.len();
        self.shapes.retain(|s| s.id != id);
        self.shapes.len() != before
    }

    /// Shapes that participate in display and geometry queries.
    pub fn visible_shapes(&self) -> impl Iterator<Item = &Shape> {
        self.shapes.iter().filter(|s| s.visible)
    }
}
