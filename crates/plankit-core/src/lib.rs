//! # Plankit Core
//!
//! Data model and shared utilities for the plan annotation engine.
//! Provides the shape and sheet records, calibration inputs, unit
//! conversions and project file persistence that the geometry and
//! export crates build on.

pub mod config;
pub mod constants;
pub mod error;
pub mod project;
pub mod shape;
pub mod sheet;
pub mod types;
pub mod units;

pub use config::{Calibration, CalibrationSample, CoordinateReference, GridConfig};

pub use error::ProjectError;

pub use project::{load_project, save_project, Project, ProjectMetadata, FILE_FORMAT_VERSION};

pub use shape::{AxisConfig, Shape, ShapeKind, ShapeStyle};

pub use sheet::Sheet;

pub use types::{Bounds, Point, WorldPoint};

pub use units::{
    format_area, format_length, meters_to_pixels, mm_to_pixels, pixels_per_mm, pixels_to_meters,
    LengthUnit,
};
