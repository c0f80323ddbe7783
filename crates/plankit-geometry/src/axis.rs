//! Architectural axis-grid generation.
//!
//! An axis shape stores an origin, a direction point and an
//! [`AxisConfig`]; this module expands that into the family of parallel
//! reference lines and label bubbles drawn on the sheet. Generation is
//! re-run whenever the config changes, so malformed mid-keystroke input
//! must degrade to an empty result instead of producing runaway
//! geometry.

use serde::Serialize;
use tracing::{debug, warn};

use plankit_core::constants::{AXIS_MAX_LENGTH_PX, AXIS_MAX_LINES, AXIS_MIN_SPACING_PX};
use plankit_core::shape::AxisConfig;
use plankit_core::types::Point;

/// One generated axis line.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AxisLine {
    pub start: Point,
    pub end: Point,
    pub label: String,
}

/// One label bubble position.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AxisLabel {
    pub text: String,
    pub position: Point,
}

/// The expanded axis family.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GeneratedAxes {
    pub lines: Vec<AxisLine>,
    pub labels: Vec<AxisLabel>,
}

/// Expands an axis shape into its parallel lines and labels.
///
/// Lines run from each start point along the origin-to-direction
/// bearing for `length_mm`; start points step along the perpendicular
/// by `spacing_mm`. Labels advance numerically when `start_label`
/// parses as an integer, else by character code; `reverse` flips the
/// step and `both_ends` adds a label at the far endpoint of each line.
///
/// Non-positive spacing, count or length (typical while a config field
/// is being edited) yields an empty family, as do configurations whose
/// pixel spacing collapses below `AXIS_MIN_SPACING_PX` or whose pixel
/// length exceeds `AXIS_MAX_LENGTH_PX`. The line count is capped at
/// `AXIS_MAX_LINES`.
pub fn generate_axis_lines(
    origin: Point,
    direction: Point,
    config: &AxisConfig,
    pixels_per_mm: f64,
) -> GeneratedAxes {
    if config.spacing_mm <= 0.0
        || config.count == 0
        || config.length_mm <= 0.0
        || pixels_per_mm <= 0.0
    {
        debug!(
            spacing_mm = config.spacing_mm,
            count = config.count,
            length_mm = config.length_mm,
            "axis config incomplete, skipping generation"
        );
        return GeneratedAxes::default();
    }

    let spacing_px = config.spacing_mm * pixels_per_mm;
    let length_px = config.length_mm * pixels_per_mm;
    if spacing_px < AXIS_MIN_SPACING_PX || length_px > AXIS_MAX_LENGTH_PX {
        warn!(
            spacing_px,
            length_px, "axis config out of drawable range, skipping generation"
        );
        return GeneratedAxes::default();
    }

    let count = if config.count > AXIS_MAX_LINES {
        warn!(count = config.count, max = AXIS_MAX_LINES, "axis line count clamped");
        AXIS_MAX_LINES
    } else {
        config.count
    };

    let bearing = (direction.y - origin.y).atan2(direction.x - origin.x);
    let perpendicular = bearing + std::f64::consts::FRAC_PI_2;
    let (dir_cos, dir_sin) = (bearing.cos(), bearing.sin());
    let (perp_cos, perp_sin) = (perpendicular.cos(), perpendicular.sin());

    let mut axes = GeneratedAxes {
        lines: Vec::with_capacity(count as usize),
        labels: Vec::new(),
    };

    for i in 0..count {
        let offset = i as f64 * spacing_px;
        let start = Point::new(origin.x + perp_cos * offset, origin.y + perp_sin * offset);
        let end = Point::new(start.x + dir_cos * length_px, start.y + dir_sin * length_px);
        let text = label_for_index(&config.start_label, i, config.reverse);

        axes.labels.push(AxisLabel {
            text: text.clone(),
            position: start,
        });
        if config.both_ends {
            axes.labels.push(AxisLabel {
                text: text.clone(),
                position: end,
            });
        }
        axes.lines.push(AxisLine {
            start,
            end,
            label: text,
        });
    }

    axes
}

/// Label for the `index`-th line counted from `start_label`.
///
/// Integer labels advance numerically. Anything else advances the first
/// character by character code, which runs "A", "B", "C" through the
/// alphabet and keeps going into whatever the character table holds
/// next; out-of-range codes become empty labels.
fn label_for_index(start_label: &str, index: u32, reverse: bool) -> String {
    let step = if reverse {
        -(index as i64)
    } else {
        index as i64
    };
    if let Ok(number) = start_label.trim().parse::<i64>() {
        return (number + step).to_string();
    }
    match start_label.chars().next() {
        Some(first) => {
            let code = first as i64 + step;
            u32::try_from(code)
                .ok()
                .and_then(char::from_u32)
                .map(|c| c.to_string())
                .unwrap_or_default()
        }
        None => String::new(),
    }
}
