//! Coordinate mapping.
//!
//! Converts (band, lane, time) triples into draw rectangles. A track's
//! band is subdivided equally among its lanes; port markers sit centered
//! in their lane slot at a fixed height instead of filling it.

use crate::models::{Band, Rect};

/// Rectangle for a full-height bar in a lane slot.
///
/// `x_end < x_start` clamps to zero width rather than producing a
/// negative rectangle.
pub fn bar_rect(x_start: f64, x_end: f64, band: &Band, lane: usize, lane_count: usize) -> Rect {
    let lane_height = lane_height(band, lane_count);
    Rect::new(
        x_start,
        band.y_top + lane as f64 * lane_height,
        x_end - x_start,
        lane_height,
    )
}

/// Rectangle for a port (point) marker: fixed height, vertically
/// centered within its lane slot.
pub fn port_rect(
    x_start: f64,
    x_end: f64,
    band: &Band,
    lane: usize,
    lane_count: usize,
    port_height: f64,
) -> Rect {
    let lane_height = lane_height(band, lane_count);
    let y = band.y_top + lane as f64 * lane_height + (lane_height - port_height) / 2.0;
    Rect::new(x_start, y, x_end - x_start, port_height)
}

/// Vertical center of a lane slot — link endpoints attach here for all
/// task kinds, ports included.
pub fn lane_center_y(band: &Band, lane: usize, lane_count: usize) -> f64 {
    let lane_height = lane_height(band, lane_count);
    band.y_top + lane as f64 * lane_height + lane_height / 2.0
}

fn lane_height(band: &Band, lane_count: usize) -> f64 {
    band.height / lane_count.max(1) as f64
}
