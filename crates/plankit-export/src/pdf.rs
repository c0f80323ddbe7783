//! PDF page fitting and coordinate mapping.
//!
//! Maps sheet pixel space onto a PDF page in points (72 per inch):
//! uniform scale chosen to fit the sheet inside the page margins, the
//! drawing centered, and the y axis flipped to PDF's bottom-left
//! origin. The actual PDF drawing calls are the consumer's job; this
//! module only answers "where on the page does this pixel land".

use plankit_core::shape::{Shape, ShapeKind};
use plankit_core::sheet::Sheet;
use plankit_core::types::Point;

use crate::error::ExportError;

/// Target page geometry, in PDF points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageSetup {
    pub width_pt: f64,
    pub height_pt: f64,
    /// Uniform margin kept free on all four edges.
    pub margin_pt: f64,
}

impl PageSetup {
    /// A4 portrait with a half-inch margin.
    pub fn a4() -> Self {
        Self {
            width_pt: 595.276,
            height_pt: 841.89,
            margin_pt: 36.0,
        }
    }

    /// A4 landscape with a half-inch margin.
    pub fn a4_landscape() -> Self {
        Self {
            width_pt: 841.89,
            height_pt: 595.276,
            margin_pt: 36.0,
        }
    }
}

impl Default for PageSetup {
    fn default() -> Self {
        Self::a4()
    }
}

/// Page-space outline of one shape.
#[derive(Debug, Clone, PartialEq)]
pub enum PdfOutline {
    /// Closed path through the listed points.
    Ring(Vec<Point>),
    /// Open polyline.
    Path(Vec<Point>),
    Circle { center: Point, radius_pt: f64 },
    /// Single-point symbol or text anchor.
    Marker(Point),
}

/// One shape mapped to page coordinates, with its presentation carried
/// along for the drawing layer.
#[derive(Debug, Clone, PartialEq)]
pub struct PdfShape {
    pub label: String,
    pub color: String,
    pub outline: PdfOutline,
}

/// Pixel-to-page transform for one sheet on one page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PdfPageMapper {
    scale: f64,
    origin_x_pt: f64,
    origin_y_pt: f64,
    sheet_height_px: f64,
}

impl PdfPageMapper {
    /// Fits a sheet of the given pixel size onto `page`.
    pub fn fit(
        sheet_width_px: f64,
        sheet_height_px: f64,
        page: &PageSetup,
    ) -> Result<Self, ExportError> {
        if sheet_width_px <= 0.0 || sheet_height_px <= 0.0 {
            return Err(ExportError::EmptySheet {
                width: sheet_width_px,
                height: sheet_height_px,
            });
        }
        let avail_w = page.width_pt - 2.0 * page.margin_pt;
        let avail_h = page.height_pt - 2.0 * page.margin_pt;
        if avail_w <= 0.0 || avail_h <= 0.0 {
            return Err(ExportError::MarginTooLarge);
        }

        let scale = (avail_w / sheet_width_px).min(avail_h / sheet_height_px);
        let drawn_w = sheet_width_px * scale;
        let drawn_h = sheet_height_px * scale;
        Ok(Self {
            scale,
            origin_x_pt: (page.width_pt - drawn_w) / 2.0,
            origin_y_pt: (page.height_pt - drawn_h) / 2.0,
            sheet_height_px,
        })
    }

    /// Points per pixel of the fitted drawing.
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Maps a sheet pixel to page coordinates.
    ///
    /// The sheet's top edge lands at the top of the drawing area; PDF
    /// y grows upward, so pixel y is flipped over the sheet height.
    pub fn map_point(&self, p: Point) -> Point {
        Point::new(
            self.origin_x_pt + p.x * self.scale,
            self.origin_y_pt + (self.sheet_height_px - p.y) * self.scale,
        )
    }

    /// Maps one shape to a page-space outline, or `None` for shapes
    /// with too few points to draw.
    pub fn map_shape(&self, shape: &Shape) -> Option<PdfShape> {
        let outline = match shape.kind {
            ShapeKind::Polygon | ShapeKind::Rectangle | ShapeKind::Square | ShapeKind::Triangle => {
                let ring = shape.ring()?;
                PdfOutline::Ring(ring.iter().map(|p| self.map_point(*p)).collect())
            }
            ShapeKind::Circle => {
                let (center, radius) = shape.circle_geometry()?;
                PdfOutline::Circle {
                    center: self.map_point(center),
                    radius_pt: radius * self.scale,
                }
            }
            ShapeKind::Line | ShapeKind::Arrow | ShapeKind::Callout | ShapeKind::Axis => {
                let (start, end) = shape.endpoints()?;
                PdfOutline::Path(vec![self.map_point(start), self.map_point(end)])
            }
            ShapeKind::Icon | ShapeKind::Text | ShapeKind::Bullet | ShapeKind::Image => {
                PdfOutline::Marker(self.map_point(shape.anchor()?))
            }
        };
        Some(PdfShape {
            label: shape.label.clone(),
            color: shape.color.clone(),
            outline,
        })
    }

    /// Maps every visible shape of a sheet.
    pub fn map_sheet(&self, sheet: &Sheet) -> Vec<PdfShape> {
        sheet
            .visible_shapes()
            .filter_map(|shape| self.map_shape(shape))
            .collect()
    }
}
