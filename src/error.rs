//! Error types.
//!
//! Errors only ever arise at the configuration boundary. Inside the
//! layout pass, data-quality conditions (missing dates, unknown ids,
//! inverted intervals) degrade to element omission instead of failing.

use chrono::NaiveDateTime;
use thiserror::Error;

/// Failures in caller-supplied configuration.
#[derive(Debug, Error)]
pub enum LayoutError {
    /// Zoom must map a positive number of hours onto the viewport.
    #[error("zoom must be a positive number of hours, got {0}")]
    InvalidZoomHours(f64),

    /// Row height must be positive.
    #[error("row height must be positive, got {0}")]
    InvalidRowHeight(f64),

    /// Row padding must leave room for the bands themselves.
    #[error("row padding must be in [0, 1), got {0}")]
    InvalidRowPadding(f64),

    /// An explicit window override must be a forward interval.
    #[error("window start {start} is not before window end {end}")]
    InvalidWindow {
        start: NaiveDateTime,
        end: NaiveDateTime,
    },

    /// A window or custom-line string did not parse as a date-time.
    #[error("unparseable date-time string: {0}")]
    DateParse(#[from] chrono::ParseError),
}
