//! Tuning constants for the interactive geometry engine.
//!
//! These values were tuned against interactive dragging behavior; changing
//! them changes how snapping, overlap resolution, and self-intersection
//! checks feel under the cursor. Keep them in one place and reference them
//! by name.

/// Distance (in drawing units) under which two vertices count as the same
/// point. Drives the polygon-closing detection in self-intersection checks
/// and the shared-endpoint exclusion in the segment crossing predicate.
pub const VERTEX_MATCH_EPSILON: f64 = 0.1;

/// Scale factor applied toward a polygon's own centroid before overlap
/// testing. Shrinking by this hair keeps exactly-touching or shared edges
/// from reporting as overlap while genuine area overlap still does.
pub const OVERLAP_SHRINK_FACTOR: f64 = 0.999;

/// Maximum passes of the iterative multi-body overlap resolver. Bounds
/// worst-case compute per drag event; convergence beyond this is not
/// attempted.
pub const MTV_MAX_ITERATIONS: usize = 10;

/// Distance (in drawing units) under which a moving vertex is welded onto
/// nearby static geometry after overlap resolution, so adjacent area
/// borders coincide exactly.
pub const VERTEX_WELD_THRESHOLD: f64 = 5.0;

/// Minimum on-screen grid step (pixels) at which grid snapping is still
/// offered. Below this the grid is too dense and snapping would fight the
/// cursor on every move.
pub const GRID_SNAP_MIN_STEP_PX: f64 = 2.0;

/// Hard cap on the number of generated axis lines.
pub const AXIS_MAX_LINES: u32 = 100;

/// Axis configurations whose pixel spacing falls below this produce no
/// geometry (mid-keystroke values in the spacing field).
pub const AXIS_MIN_SPACING_PX: f64 = 0.1;

/// Axis configurations whose pixel length exceeds this produce no
/// geometry (mid-keystroke values in the length field).
pub const AXIS_MAX_LENGTH_PX: f64 = 50_000.0;

/// Padding (in drawing units) subtracted from the centroid-to-edge
/// clearance when sizing a label inside a polygon.
pub const LABEL_EDGE_PADDING: f64 = 6.0;

/// Smallest label font size offered by label placement.
pub const LABEL_MIN_FONT_SIZE: f64 = 8.0;

/// Label rotation angles within this many degrees of 0 or -90 snap onto
/// the cardinal angle.
pub const LABEL_ANGLE_SNAP_DEG: f64 = 10.0;

/// Two calibration reference points closer than this (pixels) are treated
/// as coincident and do not define a transform.
pub const CALIBRATION_MIN_PIXEL_DISTANCE: f64 = 1e-6;
