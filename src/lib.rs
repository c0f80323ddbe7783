//! # Plankit
//!
//! A geometric computation and coordinate-transform engine for 2D
//! floor-plan annotation: hit-testing, snapping, overlap resolution,
//! pixel-to-world calibration, axis grids, label placement and export
//! coordinate mapping over calibrated plan sheets.
//!
//! ## Architecture
//!
//! Plankit is organized as a workspace with multiple crates:
//!
//! 1. **plankit-core** - Shape and sheet model, units, constants, project I/O
//! 2. **plankit-geometry** - Pure geometric queries and transforms
//! 3. **plankit-export** - PDF/DXF/GeoJSON/IFC coordinate mappers
//! 4. **plankit** - Facade that re-exports the public surface
//!
//! ## Features
//!
//! - **Interactive geometry**: snap queries, drag corrections, hit-testing
//! - **Validity checks**: self-intersection and polygon overlap predicates
//! - **Overlap resolution**: SAT-based minimum translation vectors
//! - **Calibration**: similarity transform from surveyed reference points,
//!   ruler-sample scale with elevation interpolation
//! - **Plan furniture**: axis grids with advancing labels, in-room label
//!   placement
//! - **Exports**: page-fitted PDF, model-space DXF, world-space GeoJSON
//!   and IFC mappings

pub use plankit_core as core;
pub use plankit_export as export;
pub use plankit_geometry as geometry;

pub use plankit_core::{
    AxisConfig, Bounds, Calibration, CalibrationSample, CoordinateReference, GridConfig,
    LengthUnit, Point, Project, ProjectError, Shape, ShapeKind, ShapeStyle, Sheet, WorldPoint,
};

pub use plankit_geometry::{
    calculate_mtv, effective_pixels_per_meter, find_snap_point, generate_axis_lines, hit_test,
    place_label, polygons_intersect, resolve_overlaps, snap_correction, topmost_hit,
    world_transform, would_self_intersect, GeneratedAxes, LabelPlacement, Mtv, SnapContext,
    SnapCorrection, SnapHit, WorldTransform,
};

pub use plankit_export::{
    DxfExportSession, ExportError, GeoJsonMapper, IfcModelMapper, PageSetup, PdfPageMapper,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Console output with pretty formatting
/// - RUST_LOG environment variable support
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stdout)
        .with_target(true)
        .with_level(true)
        .with_line_number(true)
        .pretty();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();

    Ok(())
}
