//! Input document model.

use serde::{Deserialize, Serialize};

use super::{Link, Task};

/// A complete schedule document: track list, tasks, and dependency links.
///
/// This is the JSON shape supplied by the data-loading collaborator.
/// `equipment` order is display order; every task is expected to name one
/// of these tracks (tasks on unknown tracks are omitted from layout, see
/// [`crate::validation`] for loud reporting instead).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartData {
    /// Track identifiers, in display order.
    pub equipment: Vec<String>,
    /// Tasks to lay out.
    #[serde(default)]
    pub items: Vec<Task>,
    /// Dependency links between tasks.
    #[serde(default)]
    pub links: Vec<Link>,
}

impl ChartData {
    /// Creates a document with the given track list.
    pub fn new(equipment: Vec<String>) -> Self {
        Self {
            equipment,
            items: Vec::new(),
            links: Vec::new(),
        }
    }

    /// Adds a task.
    pub fn with_item(mut self, task: Task) -> Self {
        self.items.push(task);
        self
    }

    /// Adds a link.
    pub fn with_link(mut self, link: Link) -> Self {
        self.links.push(link);
        self
    }

    /// Number of tasks.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_document() {
        let json = r#"{
            "equipment": ["E1", "E2"],
            "items": [
                {
                    "id": "T1",
                    "jobId": "J1",
                    "type": "main",
                    "equipment": "E1",
                    "startTime": "2024-06-01T09:00:00",
                    "endTime": "2024-06-01T10:00:00"
                },
                {
                    "id": "T2",
                    "jobId": "J1",
                    "type": "post",
                    "equipment": "E2",
                    "startTime": "2024-06-01T10:00:00",
                    "endTime": "2024-06-01T11:30:00"
                }
            ],
            "links": [
                {"source": "T1", "target": "T2"}
            ]
        }"#;

        let data: ChartData = serde_json::from_str(json).unwrap();
        assert_eq!(data.equipment, vec!["E1", "E2"]);
        assert_eq!(data.item_count(), 2);
        assert_eq!(data.links.len(), 1);
        assert_eq!(data.items[0].id, "T1");
        assert!(data.items[1].planned_interval().is_some());
    }

    #[test]
    fn test_parse_without_links() {
        let data: ChartData = serde_json::from_str(r#"{"equipment": ["E1"]}"#).unwrap();
        assert_eq!(data.equipment.len(), 1);
        assert!(data.items.is_empty());
        assert!(data.links.is_empty());
    }

    #[test]
    fn test_builder() {
        let data = ChartData::new(vec!["E1".into()])
            .with_item(Task::new("T1", "E1"))
            .with_link(Link::new("T1", "T1"));
        assert_eq!(data.item_count(), 1);
        assert_eq!(data.links.len(), 1);
    }
}
