//! Timeline layout engine.
//!
//! One synchronous pass turns a schedule document into draw geometry:
//!
//! 1. Filter to datable tasks on known tracks.
//! 2. Pack planned and actual intervals into lanes (independently).
//! 3. Resolve the time domain and chart width.
//! 4. Subdivide the chart height into track bands.
//! 5. Map every task to a rectangle, resolve link endpoints, place
//!    markers.
//!
//! The pass is total: data-quality conditions (missing dates, unknown
//! equipment, dangling link endpoints, inverted intervals) degrade to
//! element omission. Only configuration problems produce an error, up
//! front, before any work happens.

pub mod domain;
pub mod geometry;
pub mod lanes;
pub mod scale;

use std::collections::HashMap;

use chrono::NaiveDateTime;
use tracing::debug;

use crate::config::LayoutConfig;
use crate::error::LayoutError;
use crate::models::{
    ChartData, Layout, LinkLine, Marker, MarkerKind, PlacedTask, Task, TrackBand,
};
use lanes::{assign_actual_lanes, assign_planned_lanes};
use scale::{BandScale, TimeScale};

/// Computes a layout with the given configuration.
///
/// Convenience wrapper around [`LayoutEngine`].
pub fn compute_layout(
    data: &ChartData,
    config: &LayoutConfig,
    now: NaiveDateTime,
) -> Result<Layout, LayoutError> {
    LayoutEngine::new(config.clone()).compute(data, now)
}

/// Deterministic, synchronous layout engine.
///
/// Holds only configuration; every call to [`compute`](Self::compute)
/// recomputes lanes, domain, and geometry from the full task list, so
/// there is no incremental state to invalidate between renders.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use gantt_layout::config::LayoutConfig;
/// use gantt_layout::layout::LayoutEngine;
/// use gantt_layout::models::{ChartData, Task};
///
/// let day = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
/// let data = ChartData::new(vec!["E1".into()]).with_item(
///     Task::new("T1", "E1").with_planned(
///         day.and_hms_opt(9, 0, 0).unwrap(),
///         day.and_hms_opt(10, 0, 0).unwrap(),
///     ),
/// );
///
/// let engine = LayoutEngine::new(LayoutConfig::default());
/// let layout = engine
///     .compute(&data, day.and_hms_opt(12, 0, 0).unwrap())
///     .unwrap();
/// assert_eq!(layout.task_count(), 1);
/// assert_eq!(layout.lane_count("E1"), 1);
/// ```
#[derive(Debug, Clone)]
pub struct LayoutEngine {
    config: LayoutConfig,
}

impl LayoutEngine {
    /// Creates an engine.
    pub fn new(config: LayoutConfig) -> Self {
        Self { config }
    }

    /// The engine's configuration.
    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Runs one layout pass.
    ///
    /// `now` is the injected current instant: it closes open-ended
    /// actual intervals, anchors the empty-schedule fallback domain,
    /// and positions the now-marker.
    pub fn compute(&self, data: &ChartData, now: NaiveDateTime) -> Result<Layout, LayoutError> {
        self.config.validate()?;
        let config = &self.config;

        let track_index: HashMap<&str, usize> = data
            .equipment
            .iter()
            .enumerate()
            .map(|(index, equipment)| (equipment.as_str(), index))
            .collect();

        // Layout set: tasks with both planned endpoints on a known track
        let mut placeable: Vec<&Task> = Vec::new();
        let mut skipped_undated = 0usize;
        let mut skipped_unknown_track = 0usize;
        for task in &data.items {
            if task.planned_interval().is_none() {
                skipped_undated += 1;
                continue;
            }
            if !track_index.contains_key(task.equipment.as_str()) {
                skipped_unknown_track += 1;
                continue;
            }
            placeable.push(task);
        }
        if skipped_undated > 0 || skipped_unknown_track > 0 {
            debug!(skipped_undated, skipped_unknown_track, "tasks omitted from layout");
        }

        let planned = assign_planned_lanes(&placeable);
        let actual = assign_actual_lanes(&placeable, now);

        // Domain derives from the full item list: a task excluded from
        // lane packing can still push the visible window
        let time_domain =
            domain::resolve_domain(&data.items, config.window_start, config.window_end, now);
        let chart_width = domain::chart_width(&time_domain, config.zoom_hours);

        let rows_per_track = if config.plan_vs_actual { 2 } else { 1 };
        let row_count = data.equipment.len() * rows_per_track;
        let chart_height = config.row_height * row_count as f64;
        let bands = BandScale::new(row_count, chart_height, config.row_padding);
        let x = TimeScale::new(time_domain, chart_width);

        let tracks: Vec<TrackBand> = data
            .equipment
            .iter()
            .enumerate()
            .map(|(index, equipment)| TrackBand {
                equipment: equipment.clone(),
                band: bands.band(index * rows_per_track),
                actual_band: if config.plan_vs_actual {
                    Some(bands.band(index * rows_per_track + 1))
                } else {
                    None
                },
                lane_count: planned.lane_count(equipment),
                actual_lane_count: actual.lane_count(equipment),
            })
            .collect();

        let mut placed: Vec<PlacedTask> = Vec::with_capacity(placeable.len());
        for task in &placeable {
            let track = match track_index.get(task.equipment.as_str()) {
                Some(&index) => &tracks[index],
                None => continue,
            };
            let (start, end) = match task.planned_interval() {
                Some(interval) => interval,
                None => continue,
            };
            let lane = planned.lane(&task.id).unwrap_or(0);

            let x_start = x.position(start);
            let x_end = x.position(end);
            let rect = if task.is_port() {
                geometry::port_rect(
                    x_start,
                    x_end,
                    &track.band,
                    lane,
                    track.lane_count,
                    config.port_height,
                )
            } else {
                geometry::bar_rect(x_start, x_end, &track.band, lane, track.lane_count)
            };

            let actual_lane = actual.lane(&task.id);
            let actual_rect = match (&track.actual_band, task.actual_interval(now), actual_lane) {
                (Some(band), Some((actual_start, actual_end)), Some(actual_lane)) => {
                    Some(geometry::bar_rect(
                        x.position(actual_start),
                        x.position(actual_end),
                        band,
                        actual_lane,
                        track.actual_lane_count,
                    ))
                }
                _ => None,
            };

            placed.push(PlacedTask {
                task: (*task).clone(),
                lane,
                actual_lane,
                rect,
                actual_rect,
            });
        }

        // Links resolve against placed tasks only; dangling ends drop
        let placed_index: HashMap<&str, usize> = placed
            .iter()
            .enumerate()
            .map(|(index, placement)| (placement.task.id.as_str(), index))
            .collect();
        let mut links: Vec<LinkLine> = Vec::new();
        for link in &data.links {
            let endpoints = (
                placed_index.get(link.source.as_str()),
                placed_index.get(link.target.as_str()),
            );
            let (source, target) = match endpoints {
                (Some(&source), Some(&target)) => (&placed[source], &placed[target]),
                _ => {
                    debug!(source = %link.source, target = %link.target, "dangling link dropped");
                    continue;
                }
            };
            let (source_anchor, target_anchor) = match (
                link_anchor(source, &tracks, &track_index, &x),
                link_anchor(target, &tracks, &track_index, &x),
            ) {
                (Some(source_anchor), Some(target_anchor)) => (source_anchor, target_anchor),
                _ => continue,
            };
            links.push(LinkLine {
                source: link.source.clone(),
                target: link.target.clone(),
                x1: source_anchor.right,
                y1: source_anchor.center_y,
                x2: target_anchor.left,
                y2: target_anchor.center_y,
                options: link.options.clone(),
            });
        }

        let mut markers: Vec<Marker> = Vec::new();
        if time_domain.contains(now) {
            markers.push(Marker {
                kind: MarkerKind::Now,
                time: now,
                x: x.position(now),
            });
        }
        for &line in &config.custom_lines {
            if time_domain.contains(line) {
                markers.push(Marker {
                    kind: MarkerKind::Custom,
                    time: line,
                    x: x.position(line),
                });
            }
        }

        debug!(
            tasks = placed.len(),
            links = links.len(),
            chart_width,
            chart_height,
            "layout pass complete"
        );

        Ok(Layout {
            tasks: placed,
            tracks,
            links,
            markers,
            domain: time_domain,
            chart_width,
            chart_height,
        })
    }
}

/// Link attachment geometry for a placed task: left/right edges at the
/// planned interval, vertical center of the full lane slot (ports
/// included — the line aims at the lane, not the marker).
struct LinkAnchor {
    left: f64,
    right: f64,
    center_y: f64,
}

fn link_anchor(
    placement: &PlacedTask,
    tracks: &[TrackBand],
    track_index: &HashMap<&str, usize>,
    x: &TimeScale,
) -> Option<LinkAnchor> {
    let track = track_index
        .get(placement.task.equipment.as_str())
        .map(|&index| &tracks[index])?;
    let (start, end) = placement.task.planned_interval()?;
    Some(LinkAnchor {
        left: x.position(start),
        right: x.position(end),
        center_y: geometry::lane_center_y(&track.band, placement.lane, track.lane_count),
    })
}
