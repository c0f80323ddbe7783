//! Errors shared by the export mappers.

use thiserror::Error;

/// Why a sheet could not be mapped into an export format.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ExportError {
    /// The sheet has no drawable area to fit onto a page.
    #[error("sheet has no drawable area ({width} x {height} px)")]
    EmptySheet { width: f64, height: f64 },

    /// The page margins consume the whole page.
    #[error("page margins leave no drawable area")]
    MarginTooLarge,

    /// The target format needs world coordinates, which require two
    /// placed coordinate references.
    #[error("{format} export requires two world coordinate references")]
    CalibrationRequired { format: &'static str },
}
