//! Pixel scales.
//!
//! Two small value types cover the coordinate mapping the chart needs:
//! a linear time→x scale over the resolved domain, and a band scale that
//! splits the chart height into evenly padded horizontal rows.

use chrono::NaiveDateTime;

use crate::models::{Band, TimeDomain};

/// Linear map from the time domain onto `[0, width]`.
#[derive(Debug, Clone, Copy)]
pub struct TimeScale {
    domain: TimeDomain,
    width: f64,
}

impl TimeScale {
    /// Creates a scale over the given domain and pixel width.
    pub fn new(domain: TimeDomain, width: f64) -> Self {
        Self { domain, width }
    }

    /// Horizontal position of an instant.
    ///
    /// Instants outside the domain extrapolate linearly (bars partially
    /// out of view keep their true proportions; the renderer clips).
    /// A degenerate (zero-span) domain maps everything to 0.
    pub fn position(&self, time: NaiveDateTime) -> f64 {
        let span = self.domain.duration_ms() as f64;
        if span <= 0.0 {
            return 0.0;
        }
        let offset = (time - self.domain.min).num_milliseconds() as f64;
        offset / span * self.width
    }
}

/// Equal-width horizontal bands with symmetric padding, one per chart
/// row. Mirrors the band arithmetic of the original chart's row scale:
/// `step = height / (count + padding)`, band width `step × (1 − padding)`,
/// first band offset by `step × padding`.
#[derive(Debug, Clone, Copy)]
pub struct BandScale {
    count: usize,
    height: f64,
    padding: f64,
}

impl BandScale {
    /// Creates a scale dividing `height` into `count` rows.
    pub fn new(count: usize, height: f64, padding: f64) -> Self {
        Self {
            count,
            height,
            padding,
        }
    }

    fn step(&self) -> f64 {
        if self.count == 0 {
            return 0.0;
        }
        self.height / (self.count as f64 + self.padding)
    }

    /// Height of each band.
    pub fn band_height(&self) -> f64 {
        self.step() * (1.0 - self.padding)
    }

    /// The band for a row index.
    pub fn band(&self, index: usize) -> Band {
        let step = self.step();
        Band {
            y_top: step * self.padding + index as f64 * step,
            height: self.band_height(),
        }
    }
}
