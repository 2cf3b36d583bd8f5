//! Time-domain resolution and chart width.
//!
//! The visible window is resolved per side: an explicit override wins
//! verbatim (even when every task falls outside it), otherwise the side
//! derives from the data — minimum planned start, maximum planned end —
//! scanning the full item list, so a task with only a start still pushes
//! the left edge. If a side remains undefined (no datable tasks), the
//! domain falls back to one day starting at the injected `now`.

use chrono::{Duration, NaiveDateTime};

use crate::config::STANDARD_VIEWPORT_WIDTH;
use crate::models::{Task, TimeDomain};

/// Resolves the visible time domain.
pub fn resolve_domain(
    tasks: &[Task],
    window_start: Option<NaiveDateTime>,
    window_end: Option<NaiveDateTime>,
    now: NaiveDateTime,
) -> TimeDomain {
    let min = window_start.or_else(|| tasks.iter().filter_map(|t| t.start_time).min());
    let max = window_end.or_else(|| tasks.iter().filter_map(|t| t.end_time).max());

    match (min, max) {
        (Some(min), Some(max)) => TimeDomain::new(min, max),
        _ => TimeDomain::new(now, now + Duration::hours(24)),
    }
}

/// Chart body width for a resolved domain.
///
/// `pixels_per_hour = STANDARD_VIEWPORT_WIDTH / zoom_hours`; the width is
/// floored at the standard viewport so short schedules are not squeezed
/// into an unusably narrow strip. Monotonic in the zoom factor: zooming
/// out never widens the chart.
pub fn chart_width(domain: &TimeDomain, zoom_hours: f64) -> f64 {
    let pixels_per_hour = STANDARD_VIEWPORT_WIDTH / zoom_hours;
    (domain.duration_hours() * pixels_per_hour).max(STANDARD_VIEWPORT_WIDTH)
}
