//! # Plankit Export
//!
//! Coordinate mappers that carry sheet geometry into export formats.
//! Each mapper converts pixel-space shapes into the target format's
//! native coordinate frame and units; the byte-level encoding (PDF
//! drawing operators, DXF group codes, IFC STEP entities) stays with
//! the consumer.
//!
//! - **PDF**: fit-to-page in points, y flipped to the bottom-left
//!   page origin
//! - **DXF**: model-space millimeters, y-up, session-scoped entity
//!   handles
//! - **GeoJSON**: world-meter features, requires calibration
//! - **IFC**: space placements with relative profiles, requires
//!   calibration

pub mod dxf;
pub mod error;
pub mod geojson;
pub mod ifc;
pub mod pdf;

pub use dxf::{DxfEntity, DxfExportSession, DxfGeometry, HandleAllocator};

pub use error::ExportError;

pub use geojson::{GeoFeature, GeoFeatureCollection, GeoGeometry, GeoJsonMapper, GeoProperties};

pub use ifc::{IfcModelMapper, IfcSpacePlacement};

pub use pdf::{PageSetup, PdfOutline, PdfPageMapper, PdfShape};
