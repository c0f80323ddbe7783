//! # Plankit Geometry
//!
//! The geometric computation engine behind the plan annotation editor.
//! Everything here is a pure, synchronous function over plain point and
//! shape records: the interactive layer feeds it pointer positions and
//! shape snapshots, and commits mutations only after these functions
//! have had their say.
//!
//! ## Core Components
//!
//! ### Queries
//! - **Primitives**: distances, centroids, bounding boxes, areas,
//!   point-in-polygon and orientation tests
//! - **Hit-testing**: per-kind pointer predicates and topmost-shape
//!   lookup
//! - **Snapping**: nearest-candidate queries over grids, vertices,
//!   edges and axis families, plus drag correction vectors
//!
//! ### Validity
//! - **Intersection**: segment crossing with shared-vertex tolerance,
//!   in-progress ring self-intersection, polygon overlap tests
//! - **Overlap resolution**: SAT-based minimum translation vectors and
//!   iterative multi-body separation with a vertex weld pass
//!
//! ### Derivation
//! - **Calibration**: similarity transform from reference ties, ruler
//!   scale from measurement samples, elevation interpolation
//! - **Axis grids**: parallel architectural reference lines with
//!   advancing labels
//! - **Label placement**: anchor, safe font size and rotation for text
//!   inside arbitrary rings
//!
//! ## Usage
//!
//! ```rust,ignore
//! use plankit_core::types::Point;
//! use plankit_geometry::snap::{find_snap_point, SnapContext};
//!
//! let hit = find_snap_point(cursor, &sheet.shapes, 12.0, SnapContext {
//!     grid: Some(&sheet.grid),
//!     pixels_per_meter: scale,
//! });
//! ```

pub mod axis;
pub mod calibrate;
pub mod hit;
pub mod intersect;
pub mod label;
pub mod overlap;
pub mod primitives;
pub mod snap;

pub use axis::{generate_axis_lines, AxisLabel, AxisLine, GeneratedAxes};

pub use calibrate::{effective_pixels_per_meter, world_transform, WorldTransform};

pub use hit::{hit_test, topmost_hit};

pub use intersect::{polygons_intersect, segments_cross, segments_intersect, would_self_intersect};

pub use label::{place_label, LabelPlacement};

pub use overlap::{calculate_mtv, resolve_overlaps, Mtv};

pub use primitives::{
    bounding_box, centroid, closest_point_on_segment, distance, midpoint, orientation,
    point_in_polygon, point_to_segment_distance, polygon_area, rotate_point,
    scale_toward_centroid, Orientation,
};

pub use snap::{
    closest_grid_point, find_snap_point, snap_correction, SnapContext, SnapCorrection, SnapHit,
    SnapKind,
};
