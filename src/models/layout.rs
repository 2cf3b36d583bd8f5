//! Layout (solution) model.
//!
//! A layout is the complete result of one synchronous pass: every datable
//! task placed into a lane with pixel geometry, track bands with their
//! lane counts, resolved link endpoints, vertical markers, and the
//! resolved time domain and chart dimensions. Layouts carry no state
//! between passes; each render recomputes from scratch.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::Task;

/// An axis-aligned rectangle in chart pixel space.
///
/// `width` is never negative: inverted or out-of-domain intervals clamp
/// to zero instead of producing a negative extent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    /// Creates a rectangle, clamping `width` to be non-negative.
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width: width.max(0.0),
            height,
        }
    }

    /// Right edge.
    #[inline]
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Vertical center.
    #[inline]
    pub fn center_y(&self) -> f64 {
        self.y + self.height / 2.0
    }
}

/// The time interval mapped onto the chart's pixel width.
///
/// Invariant: `min < max` for any domain produced by the resolver; an
/// inverted explicit window is rejected at configuration validation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeDomain {
    /// Leftmost visible instant.
    pub min: NaiveDateTime,
    /// Rightmost visible instant.
    pub max: NaiveDateTime,
}

impl TimeDomain {
    /// Creates a domain.
    pub fn new(min: NaiveDateTime, max: NaiveDateTime) -> Self {
        Self { min, max }
    }

    /// Domain span in milliseconds.
    #[inline]
    pub fn duration_ms(&self) -> i64 {
        (self.max - self.min).num_milliseconds()
    }

    /// Domain span in hours.
    #[inline]
    pub fn duration_hours(&self) -> f64 {
        self.duration_ms() as f64 / 3_600_000.0
    }

    /// Whether an instant falls within the domain (both ends inclusive —
    /// markers sitting exactly on the edge are still drawn).
    #[inline]
    pub fn contains(&self, time: NaiveDateTime) -> bool {
        time >= self.min && time <= self.max
    }
}

/// A horizontal pixel band reserved for one row of the chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Band {
    /// Top edge of the band.
    pub y_top: f64,
    /// Band height (subdivided equally among lanes).
    pub height: f64,
}

/// An equipment track's vertical allocation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackBand {
    /// Track identifier.
    pub equipment: String,
    /// Band holding planned bars.
    pub band: Band,
    /// Paired band holding actual bars (plan-vs-actual mode only).
    pub actual_band: Option<Band>,
    /// Lane count for planned bars. At least 1, so an empty track still
    /// reserves a visible band.
    pub lane_count: usize,
    /// Lane count for actual bars.
    pub actual_lane_count: usize,
}

/// A task placed into the layout, with its lane assignments and geometry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlacedTask {
    /// The source task (options and metadata pass through untouched).
    pub task: Task,
    /// Planned lane index within the task's track.
    pub lane: usize,
    /// Actual lane index, when the task has an actual interval.
    pub actual_lane: Option<usize>,
    /// Planned bar rectangle.
    pub rect: Rect,
    /// Actual bar rectangle (plan-vs-actual mode only).
    pub actual_rect: Option<Rect>,
}

/// A resolved dependency line between two placed tasks.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinkLine {
    pub source: String,
    pub target: String,
    /// Source task's right edge.
    pub x1: f64,
    /// Source lane center.
    pub y1: f64,
    /// Target task's left edge.
    pub x2: f64,
    /// Target lane center.
    pub y2: f64,
    /// Style class passthrough from the input link.
    pub options: Vec<String>,
}

/// Kind of vertical marker line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MarkerKind {
    /// The injected current instant.
    Now,
    /// A caller-supplied custom line.
    Custom,
}

/// A vertical marker line, present only when its instant falls inside
/// the resolved domain.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Marker {
    pub kind: MarkerKind,
    pub time: NaiveDateTime,
    /// Horizontal pixel position.
    pub x: f64,
}

/// A complete layout (solution to one layout pass).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Layout {
    /// Placed tasks, in input order.
    pub tasks: Vec<PlacedTask>,
    /// Track bands, in display order.
    pub tracks: Vec<TrackBand>,
    /// Resolved dependency lines (unresolvable links are dropped).
    pub links: Vec<LinkLine>,
    /// Vertical markers inside the domain.
    pub markers: Vec<Marker>,
    /// Resolved time domain.
    pub domain: TimeDomain,
    /// Chart body width in pixels. Never below the standard viewport.
    pub chart_width: f64,
    /// Chart body height in pixels (row height × row count).
    pub chart_height: f64,
}

impl Layout {
    /// Finds the placement for a given task id.
    pub fn placement(&self, task_id: &str) -> Option<&PlacedTask> {
        self.tasks.iter().find(|p| p.task.id == task_id)
    }

    /// Finds the band for a given track.
    pub fn track(&self, equipment: &str) -> Option<&TrackBand> {
        self.tracks.iter().find(|t| t.equipment == equipment)
    }

    /// Planned lane count for a track (1 for unknown tracks).
    pub fn lane_count(&self, equipment: &str) -> usize {
        self.track(equipment).map_or(1, |t| t.lane_count)
    }

    /// Number of placed tasks.
    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }
}
