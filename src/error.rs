//! Typed error variants for the boxgen crate.
//!
//! Provides structured error types for design selection and layout so callers
//! at the crate boundary can match on specific failure modes instead of
//! opaque strings.

use thiserror::Error;

use crate::compass::SideId;

/// Top-level error type for box layout and design selection.
///
/// Every failure is terminal for the current render; there is no retry
/// semantic anywhere in this crate.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BoxError {
    // -----------------------------------------------------------------------
    // Design selection
    // -----------------------------------------------------------------------
    /// The requested design name was not found in the catalog
    /// (lookup is case-insensitive).
    #[error("unknown box design -- {0}")]
    UnknownDesign(String),

    /// The catalog contains no designs at all.
    #[error("no box designs available")]
    EmptyCatalog,

    // -----------------------------------------------------------------------
    // Layout
    // -----------------------------------------------------------------------
    /// A side of the design violates the layout contract: its interior must
    /// hold between 1 and 3 present shapes, at least one of them elastic.
    ///
    /// This indicates a malformed design; the run aborts rather than
    /// producing a malformed box.
    #[error("malformed design '{design}': {side} side: {details}")]
    InvariantViolation {
        /// Name of the offending design.
        design: String,
        /// Which of the four sides failed validation.
        side: SideId,
        /// Human-readable description of the violated contract.
        details: String,
    },

    // -----------------------------------------------------------------------
    // Shape construction
    // -----------------------------------------------------------------------
    /// A shape was constructed from rows of unequal display width.
    #[error("shape row {row} is {actual} chars wide, expected {expected}")]
    RaggedShape {
        /// Index of the first offending row.
        row: usize,
        /// Width of row 0, which all rows must match.
        expected: usize,
        /// Actual width of the offending row.
        actual: usize,
    },
}
