//! Input validation for schedule documents.
//!
//! The layout pass itself never fails on bad data — it omits the
//! offending element. This module is the loud alternative: callers that
//! want to surface data-quality problems to an operator can validate a
//! document up front. Detects:
//! - Duplicate task ids and duplicate equipment keys
//! - Tasks referencing equipment absent from the track list
//! - Links referencing unknown task ids
//! - Inverted planned or actual intervals

use std::collections::HashSet;

use crate::models::ChartData;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two tasks share the same id.
    DuplicateTaskId,
    /// Two tracks share the same equipment key.
    DuplicateEquipment,
    /// A task references an equipment key not in the track list.
    UnknownEquipment,
    /// A link endpoint references a task that doesn't exist.
    UnknownLinkEndpoint,
    /// An interval ends before it starts.
    InvertedInterval,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a schedule document.
///
/// Collects every detected issue rather than stopping at the first.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_chart(data: &ChartData) -> ValidationResult {
    let mut errors = Vec::new();

    let mut equipment_keys = HashSet::new();
    for equipment in &data.equipment {
        if !equipment_keys.insert(equipment.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateEquipment,
                format!("Duplicate equipment key: {equipment}"),
            ));
        }
    }

    let mut task_ids = HashSet::new();
    for task in &data.items {
        if !task_ids.insert(task.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateTaskId,
                format!("Duplicate task id: {}", task.id),
            ));
        }

        if !equipment_keys.contains(task.equipment.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::UnknownEquipment,
                format!(
                    "Task '{}' references unknown equipment '{}'",
                    task.id, task.equipment
                ),
            ));
        }

        if let Some((start, end)) = task.planned_interval() {
            if start > end {
                errors.push(ValidationError::new(
                    ValidationErrorKind::InvertedInterval,
                    format!("Task '{}' planned interval ends before it starts", task.id),
                ));
            }
        }

        if let (Some(start), Some(end)) = (task.actual_start_time, task.actual_end_time) {
            if start > end {
                errors.push(ValidationError::new(
                    ValidationErrorKind::InvertedInterval,
                    format!("Task '{}' actual interval ends before it starts", task.id),
                ));
            }
        }
    }

    for link in &data.links {
        for endpoint in [&link.source, &link.target] {
            if !task_ids.contains(endpoint.as_str()) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::UnknownLinkEndpoint,
                    format!("Link references unknown task '{endpoint}'"),
                ));
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
