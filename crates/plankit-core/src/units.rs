//! Unit conversion utilities.
//!
//! The drawing operates in image pixels; calibration yields a scalar
//! pixels-per-meter scale that converts between the two. Display
//! formatting for lengths and areas lives here so every surface shows
//! measurements the same way.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Display unit for lengths derived from calibrated drawings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LengthUnit {
    /// Meters
    Meters,
    /// Centimeters
    Centimeters,
    /// Millimeters
    Millimeters,
}

impl Default for LengthUnit {
    fn default() -> Self {
        Self::Meters
    }
}

impl LengthUnit {
    /// Factor converting meters into this unit.
    pub fn per_meter(&self) -> f64 {
        match self {
            Self::Meters => 1.0,
            Self::Centimeters => 100.0,
            Self::Millimeters => 1000.0,
        }
    }
}

impl fmt::Display for LengthUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Meters => write!(f, "m"),
            Self::Centimeters => write!(f, "cm"),
            Self::Millimeters => write!(f, "mm"),
        }
    }
}

impl FromStr for LengthUnit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "m" | "meter" | "meters" => Ok(Self::Meters),
            "cm" | "centimeter" | "centimeters" => Ok(Self::Centimeters),
            "mm" | "millimeter" | "millimeters" => Ok(Self::Millimeters),
            _ => Err(format!("Unknown length unit: {}", s)),
        }
    }
}

/// Converts a pixel length to meters using the calibration scale.
///
/// * `pixels` - Length in image pixels
/// * `pixels_per_meter` - Calibration scale; non-positive scales yield 0.0
pub fn pixels_to_meters(pixels: f64, pixels_per_meter: f64) -> f64 {
    if pixels_per_meter <= 0.0 {
        return 0.0;
    }
    pixels / pixels_per_meter
}

/// Converts a length in meters to image pixels using the calibration scale.
pub fn meters_to_pixels(meters: f64, pixels_per_meter: f64) -> f64 {
    meters * pixels_per_meter
}

/// Converts a length in millimeters to image pixels.
///
/// Grid steps and axis spacings are entered in millimeters; this is the
/// shared conversion used before any on-screen comparison.
pub fn mm_to_pixels(mm: f64, pixels_per_meter: f64) -> f64 {
    meters_to_pixels(mm / 1000.0, pixels_per_meter)
}

/// Pixels per millimeter for a given pixels-per-meter scale.
pub fn pixels_per_mm(pixels_per_meter: f64) -> f64 {
    pixels_per_meter / 1000.0
}

/// Formats a length in meters for display.
pub fn format_length(meters: f64, unit: LengthUnit) -> String {
    format!("{:.2} {}", meters * unit.per_meter(), unit)
}

/// Formats an area in square meters for display.
///
/// Areas are always shown in m²; sub-square-meter annotation areas are
/// rare on floor plans and the uniform unit keeps legends comparable.
pub fn format_area(square_meters: f64) -> String {
    format!("{:.2} m\u{00b2}", square_meters)
}
