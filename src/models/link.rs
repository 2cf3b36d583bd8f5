//! Dependency link model.

use serde::{Deserialize, Serialize};

/// A dependency edge between two tasks, drawn from the source task's
/// right edge to the target task's left edge.
///
/// A link referencing a task id absent from the laid-out task set is
/// silently dropped during layout — it is a data-quality condition, not
/// an error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Link {
    /// Source task id.
    pub source: String,
    /// Target task id.
    pub target: String,
    /// Style class passthrough (link color, weight, dash style).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<String>,
}

impl Link {
    /// Creates a link between two task ids.
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            options: Vec::new(),
        }
    }

    /// Adds a style class passthrough option.
    pub fn with_option(mut self, option: impl Into<String>) -> Self {
        self.options.push(option.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_link_builder() {
        let link = Link::new("T1", "T2").with_option("managed-link-style-dashed");
        assert_eq!(link.source, "T1");
        assert_eq!(link.target, "T2");
        assert_eq!(link.options.len(), 1);
    }

    #[test]
    fn test_deserialize() {
        let link: Link = serde_json::from_str(r#"{"source": "T1", "target": "T2"}"#).unwrap();
        assert_eq!(link.source, "T1");
        assert_eq!(link.target, "T2");
        assert!(link.options.is_empty());
    }
}
