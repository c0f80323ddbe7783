//! DXF model-space coordinate mapping.
//!
//! Maps sheet pixels to DXF model space in millimeters, with the y
//! axis flipped over the sheet height so the drawing reads y-up as CAD
//! expects. Entity handles come from a [`HandleAllocator`] owned by
//! the session, so concurrent exports never share counter state and
//! every run starts from the same first handle.

use tracing::debug;

use plankit_core::shape::{Shape, ShapeKind};
use plankit_core::sheet::Sheet;
use plankit_core::types::Point;
use plankit_core::units::pixels_per_mm;
use plankit_geometry::calibrate::effective_pixels_per_meter;

/// Issues unique uppercase-hex entity handles for one export run.
///
/// Handles below `0x100` are conventionally taken by header and table
/// objects, so allocation starts there.
#[derive(Debug, Clone, PartialEq)]
pub struct HandleAllocator {
    next: u64,
}

impl HandleAllocator {
    pub fn new() -> Self {
        Self { next: 0x100 }
    }

    pub fn allocate(&mut self) -> String {
        let handle = format!("{:X}", self.next);
        self.next += 1;
        handle
    }
}

impl Default for HandleAllocator {
    fn default() -> Self {
        Self::new()
    }
}

/// Model-space geometry of one entity, in millimeters.
#[derive(Debug, Clone, PartialEq)]
pub enum DxfGeometry {
    Polyline { vertices: Vec<Point>, closed: bool },
    Circle { center: Point, radius_mm: f64 },
    Text { anchor: Point, value: String },
}

/// One mapped entity ready for DXF encoding.
#[derive(Debug, Clone, PartialEq)]
pub struct DxfEntity {
    pub handle: String,
    /// Layer name, taken from the shape kind.
    pub layer: String,
    pub color: String,
    pub geometry: DxfGeometry,
}

/// One export run: the pixel-to-millimeter transform plus the handle
/// counter and the entities mapped so far.
#[derive(Debug)]
pub struct DxfExportSession {
    px_per_mm: f64,
    sheet_height_px: f64,
    handles: HandleAllocator,
    entities: Vec<DxfEntity>,
}

impl DxfExportSession {
    /// Starts a session with an explicit scale.
    ///
    /// `pixels_per_mm` must be positive; [`DxfExportSession::for_sheet`]
    /// derives it from the sheet calibration.
    pub fn new(sheet_height_px: f64, pixels_per_mm: f64) -> Self {
        Self {
            px_per_mm: pixels_per_mm,
            sheet_height_px,
            handles: HandleAllocator::new(),
            entities: Vec::new(),
        }
    }

    /// Starts a session scaled from the sheet's calibration.
    ///
    /// Uncalibrated sheets export at 1 pixel = 1 mm, which keeps the
    /// geometry usable for tracing even without real-world scale.
    pub fn for_sheet(sheet: &Sheet) -> Self {
        let px_per_mm = effective_pixels_per_meter(&sheet.calibration)
            .map(pixels_per_mm)
            .filter(|scale| *scale > 0.0)
            .unwrap_or_else(|| {
                debug!(sheet = %sheet.name, "uncalibrated sheet, exporting at 1 px = 1 mm");
                1.0
            });
        Self::new(sheet.height_px, px_per_mm)
    }

    /// Maps a sheet pixel to model space, in millimeters, y-up.
    pub fn map_point(&self, p: Point) -> Point {
        Point::new(
            p.x / self.px_per_mm,
            (self.sheet_height_px - p.y) / self.px_per_mm,
        )
    }

    /// Maps one shape and appends the resulting entity.
    ///
    /// Shapes with too few points for their kind are skipped.
    pub fn add_shape(&mut self, shape: &Shape) {
        let geometry = match shape.kind {
            ShapeKind::Polygon | ShapeKind::Rectangle | ShapeKind::Square | ShapeKind::Triangle => {
                match shape.ring() {
                    Some(ring) => DxfGeometry::Polyline {
                        vertices: ring.iter().map(|p| self.map_point(*p)).collect(),
                        closed: true,
                    },
                    None => return,
                }
            }
            ShapeKind::Circle => match shape.circle_geometry() {
                Some((center, radius)) => DxfGeometry::Circle {
                    center: self.map_point(center),
                    radius_mm: radius / self.px_per_mm,
                },
                None => return,
            },
            ShapeKind::Line | ShapeKind::Arrow | ShapeKind::Callout | ShapeKind::Axis => {
                match shape.endpoints() {
                    Some((start, end)) => DxfGeometry::Polyline {
                        vertices: vec![self.map_point(start), self.map_point(end)],
                        closed: false,
                    },
                    None => return,
                }
            }
            ShapeKind::Icon | ShapeKind::Text | ShapeKind::Bullet | ShapeKind::Image => {
                match shape.anchor() {
                    Some(anchor) => DxfGeometry::Text {
                        anchor: self.map_point(anchor),
                        value: shape.label.clone(),
                    },
                    None => return,
                }
            }
        };

        self.entities.push(DxfEntity {
            handle: self.handles.allocate(),
            layer: shape.kind.display_name().to_string(),
            color: shape.color.clone(),
            geometry,
        });
    }

    /// Maps every visible shape of a sheet.
    pub fn add_visible_shapes(&mut self, sheet: &Sheet) {
        for shape in sheet.visible_shapes() {
            self.add_shape(shape);
        }
    }

    pub fn entities(&self) -> &[DxfEntity] {
        &self.entities
    }

    /// Finishes the session, yielding the mapped entities.
    pub fn into_entities(self) -> Vec<DxfEntity> {
        self.entities
    }
}
