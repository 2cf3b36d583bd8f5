//! Chart item (task) model.
//!
//! A task is one bar on the timeline: it belongs to an equipment track,
//! carries a planned interval, and optionally an actual (as-executed)
//! interval. Tasks missing either planned endpoint are excluded from
//! layout entirely.
//!
//! # Time Representation
//! Timestamps are naive local date-times (`chrono::NaiveDateTime`), the
//! wire format of the upstream schedule documents. The crate never reads
//! the wall clock; the current instant is always an injected parameter.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Task types with this prefix are instantaneous point markers rendered
/// at a fixed small height instead of a full lane-height bar.
pub const PORT_TYPE_PREFIX: &str = "port";

/// A task (chart item) to be laid out.
///
/// Field names follow the camelCase JSON documents consumed from the
/// data-loading collaborator. `options`, `alert_id`, and `description`
/// are opaque passthrough for the rendering layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Unique task identifier.
    pub id: String,
    /// Parent job identifier, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_id: Option<String>,
    /// Bar category (`pre`, `main`, `post`, or a `port*` point marker).
    #[serde(rename = "type", default)]
    pub task_type: String,
    /// Equipment track this task is laid out on.
    pub equipment: String,
    /// Planned start. `None` excludes the task from layout.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<NaiveDateTime>,
    /// Planned end. `None` excludes the task from layout.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<NaiveDateTime>,
    /// Actual start, if execution has begun.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actual_start_time: Option<NaiveDateTime>,
    /// Actual end. `None` while the task is still under way.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actual_end_time: Option<NaiveDateTime>,
    /// Alert reference for the rendering layer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alert_id: Option<String>,
    /// Free-form description for the rendering layer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Style class passthrough (patterns, managed colors, border widths).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<String>,
}

impl Task {
    /// Creates a task on the given equipment track.
    pub fn new(id: impl Into<String>, equipment: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            job_id: None,
            task_type: String::new(),
            equipment: equipment.into(),
            start_time: None,
            end_time: None,
            actual_start_time: None,
            actual_end_time: None,
            alert_id: None,
            description: None,
            options: Vec::new(),
        }
    }

    /// Sets the parent job identifier.
    pub fn with_job_id(mut self, job_id: impl Into<String>) -> Self {
        self.job_id = Some(job_id.into());
        self
    }

    /// Sets the bar category.
    pub fn with_type(mut self, task_type: impl Into<String>) -> Self {
        self.task_type = task_type.into();
        self
    }

    /// Sets the planned interval.
    pub fn with_planned(mut self, start: NaiveDateTime, end: NaiveDateTime) -> Self {
        self.start_time = Some(start);
        self.end_time = Some(end);
        self
    }

    /// Sets the actual start time.
    pub fn with_actual_start(mut self, start: NaiveDateTime) -> Self {
        self.actual_start_time = Some(start);
        self
    }

    /// Sets the actual end time.
    pub fn with_actual_end(mut self, end: NaiveDateTime) -> Self {
        self.actual_end_time = Some(end);
        self
    }

    /// Sets the alert reference.
    pub fn with_alert(mut self, alert_id: impl Into<String>) -> Self {
        self.alert_id = Some(alert_id.into());
        self
    }

    /// Sets the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Adds a style class passthrough option.
    pub fn with_option(mut self, option: impl Into<String>) -> Self {
        self.options.push(option.into());
        self
    }

    /// Whether this task is a point/port marker.
    #[inline]
    pub fn is_port(&self) -> bool {
        self.task_type.starts_with(PORT_TYPE_PREFIX)
    }

    /// Planned interval, when both endpoints are present.
    pub fn planned_interval(&self) -> Option<(NaiveDateTime, NaiveDateTime)> {
        match (self.start_time, self.end_time) {
            (Some(start), Some(end)) => Some((start, end)),
            _ => None,
        }
    }

    /// Actual interval, when execution has begun.
    ///
    /// A missing actual end means the task is still under way; its
    /// effective end for overlap purposes is `now`.
    pub fn actual_interval(&self, now: NaiveDateTime) -> Option<(NaiveDateTime, NaiveDateTime)> {
        self.actual_start_time
            .map(|start| (start, self.actual_end_time.unwrap_or(now)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn dt(hour: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 6, 1)
            .unwrap()
            .and_hms_opt(hour, min, 0)
            .unwrap()
    }

    #[test]
    fn test_task_builder() {
        let task = Task::new("T1", "E1")
            .with_job_id("J1")
            .with_type("main")
            .with_planned(dt(9, 0), dt(10, 0))
            .with_option("managed-color-blue");

        assert_eq!(task.id, "T1");
        assert_eq!(task.equipment, "E1");
        assert_eq!(task.job_id.as_deref(), Some("J1"));
        assert_eq!(task.task_type, "main");
        assert_eq!(task.planned_interval(), Some((dt(9, 0), dt(10, 0))));
        assert_eq!(task.options, vec!["managed-color-blue".to_string()]);
    }

    #[test]
    fn test_port_detection() {
        assert!(Task::new("T1", "E1").with_type("port").is_port());
        assert!(Task::new("T2", "E1").with_type("port-in").is_port());
        assert!(!Task::new("T3", "E1").with_type("main").is_port());
        assert!(!Task::new("T4", "E1").is_port());
    }

    #[test]
    fn test_planned_interval_requires_both_endpoints() {
        let mut task = Task::new("T1", "E1");
        assert_eq!(task.planned_interval(), None);

        task.start_time = Some(dt(9, 0));
        assert_eq!(task.planned_interval(), None);

        task.end_time = Some(dt(10, 0));
        assert_eq!(task.planned_interval(), Some((dt(9, 0), dt(10, 0))));
    }

    #[test]
    fn test_actual_interval_open_end_clips_to_now() {
        let task = Task::new("T1", "E1").with_actual_start(dt(9, 0));
        assert_eq!(task.actual_interval(dt(11, 30)), Some((dt(9, 0), dt(11, 30))));

        let closed = task.with_actual_end(dt(10, 0));
        assert_eq!(closed.actual_interval(dt(11, 30)), Some((dt(9, 0), dt(10, 0))));
    }

    #[test]
    fn test_actual_interval_absent_without_start() {
        let task = Task::new("T1", "E1").with_actual_end(dt(10, 0));
        assert_eq!(task.actual_interval(dt(11, 0)), None);
    }

    #[test]
    fn test_deserialize_camel_case() {
        let json = r#"{
            "id": "T1",
            "jobId": "J1",
            "type": "port-in",
            "equipment": "E1",
            "startTime": "2024-06-01T09:00:00",
            "endTime": "2024-06-01T10:00:00",
            "actualStartTime": "2024-06-01T09:05:00",
            "options": ["managed-border-thick"]
        }"#;

        let task: Task = serde_json::from_str(json).unwrap();
        assert_eq!(task.id, "T1");
        assert_eq!(task.job_id.as_deref(), Some("J1"));
        assert!(task.is_port());
        assert_eq!(task.start_time, Some(dt(9, 0)));
        assert_eq!(task.end_time, Some(dt(10, 0)));
        assert_eq!(task.actual_start_time, Some(dt(9, 5)));
        assert_eq!(task.actual_end_time, None);
        assert_eq!(task.options.len(), 1);
    }

    #[test]
    fn test_deserialize_minimal() {
        let json = r#"{"id": "T1", "equipment": "E1"}"#;
        let task: Task = serde_json::from_str(json).unwrap();
        assert_eq!(task.planned_interval(), None);
        assert!(task.options.is_empty());
        assert_eq!(task.task_type, "");
    }
}
