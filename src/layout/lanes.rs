//! Greedy interval lane packing.
//!
//! # Algorithm
//!
//! 1. Group tasks by equipment track.
//! 2. Within each track, stable-sort by interval start (ties keep input
//!    order, so the result is deterministic).
//! 3. Sweep left to right, keeping one free-at time per open lane.
//! 4. Each task takes the lowest-indexed lane whose free-at time is at or
//!    before its start; otherwise a new lane opens.
//!
//! The boundary is inclusive at start: a task beginning exactly when the
//! lane frees up shares that lane (touching intervals do not conflict).
//! This is the classic greedy interval-partitioning sweep — the lane
//! count per track equals the maximum number of simultaneously
//! overlapping tasks on it.
//!
//! The packing runs twice per layout pass: once over planned intervals
//! and once over actual intervals. The two runs are fully independent; a
//! task without actual times simply does not participate in the actual
//! run, and the actual lane count is derived from the actual assignment
//! alone.

use std::collections::HashMap;

use chrono::NaiveDateTime;
use tracing::trace;

use crate::models::Task;

/// Lane assignment for one interval set (planned or actual).
#[derive(Debug, Clone, Default)]
pub struct LaneAssignment {
    lanes: HashMap<String, usize>,
    lane_counts: HashMap<String, usize>,
}

impl LaneAssignment {
    /// Lane index assigned to a task, if it participated in this set.
    pub fn lane(&self, task_id: &str) -> Option<usize> {
        self.lanes.get(task_id).copied()
    }

    /// Lane count for a track: `1 + max lane index used`, or 1 for a
    /// track with no participating tasks (an empty track still reserves
    /// one visible lane).
    pub fn lane_count(&self, equipment: &str) -> usize {
        self.lane_counts.get(equipment).copied().unwrap_or(1)
    }

    /// Number of tasks assigned a lane.
    pub fn assigned_count(&self) -> usize {
        self.lanes.len()
    }
}

/// Packs planned intervals into lanes.
pub fn assign_planned_lanes(tasks: &[&Task]) -> LaneAssignment {
    pack(tasks, |task| task.planned_interval())
}

/// Packs actual intervals into lanes. Open-ended actuals clip to `now`,
/// so an ongoing task occupies its lane up to the injected instant.
pub fn assign_actual_lanes(tasks: &[&Task], now: NaiveDateTime) -> LaneAssignment {
    pack(tasks, move |task| task.actual_interval(now))
}

fn pack<F>(tasks: &[&Task], interval: F) -> LaneAssignment
where
    F: Fn(&Task) -> Option<(NaiveDateTime, NaiveDateTime)>,
{
    let mut by_equipment: HashMap<&str, Vec<(&Task, NaiveDateTime, NaiveDateTime)>> =
        HashMap::new();
    for &task in tasks {
        if let Some((start, end)) = interval(task) {
            by_equipment
                .entry(task.equipment.as_str())
                .or_default()
                .push((task, start, end));
        }
    }

    let mut assignment = LaneAssignment::default();
    for (equipment, mut group) in by_equipment {
        // Stable sort: equal starts keep input order
        group.sort_by_key(|&(_, start, _)| start);

        // One free-at time per open lane
        let mut free_at: Vec<NaiveDateTime> = Vec::new();
        for (task, start, end) in group {
            let lane = match free_at.iter().position(|&free| free <= start) {
                Some(index) => {
                    free_at[index] = end;
                    index
                }
                None => {
                    free_at.push(end);
                    free_at.len() - 1
                }
            };
            trace!(task = %task.id, equipment, lane, "lane assigned");
            assignment.lanes.insert(task.id.clone(), lane);
        }
        assignment
            .lane_counts
            .insert(equipment.to_string(), free_at.len());
    }
    assignment
}
