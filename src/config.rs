//! Layout configuration.
//!
//! Caller-tunable knobs for one layout pass. Defaults match the shipped
//! widget: 8 hours of domain per standard viewport, 50 px rows, 0.2 band
//! padding, 12 px port markers.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::error::LayoutError;

/// Reference viewport width in pixels. The chart body is never laid out
/// narrower than this, so short schedules stay readable.
pub const STANDARD_VIEWPORT_WIDTH: f64 = 800.0;

/// Configuration for a layout pass.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LayoutConfig {
    /// Hours of domain mapped onto the standard viewport width. Larger
    /// values zoom out (fewer pixels per hour).
    pub zoom_hours: f64,
    /// Vertical pixels allotted to each chart row.
    pub row_height: f64,
    /// Band padding fraction in [0, 1), split equally around each band.
    pub row_padding: f64,
    /// Fixed height for port (point) markers.
    pub port_height: f64,
    /// Explicit domain start. Overrides the data-derived minimum.
    pub window_start: Option<NaiveDateTime>,
    /// Explicit domain end. Overrides the data-derived maximum.
    pub window_end: Option<NaiveDateTime>,
    /// When set, each track gets a paired band holding actual bars.
    pub plan_vs_actual: bool,
    /// Caller-supplied vertical marker instants (layout-inert).
    pub custom_lines: Vec<NaiveDateTime>,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            zoom_hours: 8.0,
            row_height: 50.0,
            row_padding: 0.2,
            port_height: 12.0,
            window_start: None,
            window_end: None,
            plan_vs_actual: false,
            custom_lines: Vec::new(),
        }
    }
}

impl LayoutConfig {
    /// Creates a configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the zoom factor (hours per standard viewport).
    pub fn with_zoom_hours(mut self, zoom_hours: f64) -> Self {
        self.zoom_hours = zoom_hours;
        self
    }

    /// Sets the row height.
    pub fn with_row_height(mut self, row_height: f64) -> Self {
        self.row_height = row_height;
        self
    }

    /// Sets the explicit domain window. Either side may also be set
    /// independently through the fields.
    pub fn with_window(mut self, start: NaiveDateTime, end: NaiveDateTime) -> Self {
        self.window_start = Some(start);
        self.window_end = Some(end);
        self
    }

    /// Sets the explicit domain window from date-time strings, as they
    /// arrive from the widget's `datetime-local` inputs (seconds
    /// optional).
    pub fn with_window_strs(mut self, start: &str, end: &str) -> Result<Self, LayoutError> {
        self.window_start = Some(parse_datetime(start)?);
        self.window_end = Some(parse_datetime(end)?);
        Ok(self)
    }

    /// Enables plan-vs-actual dual-band mode.
    pub fn with_plan_vs_actual(mut self, enabled: bool) -> Self {
        self.plan_vs_actual = enabled;
        self
    }

    /// Adds a custom vertical marker line.
    pub fn with_custom_line(mut self, time: NaiveDateTime) -> Self {
        self.custom_lines.push(time);
        self
    }

    /// Checks the configuration invariants.
    ///
    /// Rejects non-positive zoom or row height, out-of-range padding,
    /// and an inverted explicit window (the domain must satisfy
    /// `min < max`).
    pub fn validate(&self) -> Result<(), LayoutError> {
        if !(self.zoom_hours > 0.0) {
            return Err(LayoutError::InvalidZoomHours(self.zoom_hours));
        }
        if !(self.row_height > 0.0) {
            return Err(LayoutError::InvalidRowHeight(self.row_height));
        }
        if !(0.0..1.0).contains(&self.row_padding) {
            return Err(LayoutError::InvalidRowPadding(self.row_padding));
        }
        if let (Some(start), Some(end)) = (self.window_start, self.window_end) {
            if start >= end {
                return Err(LayoutError::InvalidWindow { start, end });
            }
        }
        Ok(())
    }
}

/// Parses an ISO-8601 date-time, accepting the seconds-less form emitted
/// by `datetime-local` inputs.
pub fn parse_datetime(s: &str) -> Result<NaiveDateTime, LayoutError> {
    s.parse::<NaiveDateTime>()
        .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M"))
        .map_err(LayoutError::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn dt(hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 6, 1)
            .unwrap()
            .and_hms_opt(hour, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_defaults() {
        let config = LayoutConfig::default();
        assert_eq!(config.zoom_hours, 8.0);
        assert_eq!(config.row_height, 50.0);
        assert_eq!(config.row_padding, 0.2);
        assert_eq!(config.port_height, 12.0);
        assert!(!config.plan_vs_actual);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_zoom() {
        let config = LayoutConfig::default().with_zoom_hours(0.0);
        assert!(matches!(
            config.validate(),
            Err(LayoutError::InvalidZoomHours(_))
        ));

        let config = LayoutConfig::default().with_zoom_hours(-4.0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_bad_row_height() {
        let config = LayoutConfig::default().with_row_height(0.0);
        assert!(matches!(
            config.validate(),
            Err(LayoutError::InvalidRowHeight(_))
        ));
    }

    #[test]
    fn test_validate_rejects_inverted_window() {
        let config = LayoutConfig::default().with_window(dt(17), dt(9));
        assert!(matches!(
            config.validate(),
            Err(LayoutError::InvalidWindow { .. })
        ));

        let config = LayoutConfig::default().with_window(dt(9), dt(17));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_one_sided_window_is_valid() {
        let mut config = LayoutConfig::default();
        config.window_start = Some(dt(9));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_datetime_forms() {
        assert_eq!(parse_datetime("2024-06-01T09:30:00").unwrap(), {
            NaiveDate::from_ymd_opt(2024, 6, 1)
                .unwrap()
                .and_hms_opt(9, 30, 0)
                .unwrap()
        });
        // datetime-local inputs omit seconds
        assert_eq!(parse_datetime("2024-06-01T09:30").unwrap(), {
            NaiveDate::from_ymd_opt(2024, 6, 1)
                .unwrap()
                .and_hms_opt(9, 30, 0)
                .unwrap()
        });
        assert!(parse_datetime("not-a-date").is_err());
    }

    #[test]
    fn test_window_strs() {
        let config = LayoutConfig::default()
            .with_window_strs("2024-06-01T09:00", "2024-06-01T17:00")
            .unwrap();
        assert_eq!(config.window_start, Some(dt(9)));
        assert_eq!(config.window_end, Some(dt(17)));
    }

    #[test]
    fn test_deserialize_camel_case() {
        let json = r#"{"zoomHours": 4, "rowHeight": 40, "planVsActual": true}"#;
        let config: LayoutConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.zoom_hours, 4.0);
        assert_eq!(config.row_height, 40.0);
        assert!(config.plan_vs_actual);
        // Unspecified fields keep their defaults
        assert_eq!(config.row_padding, 0.2);
    }
}
