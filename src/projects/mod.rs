//! Project organization: flat persisted records folded into display trees.
//!
//! Projects are persisted as a flat list of [`ProjectRecord`]s whose labels
//! may contain path separators to express nesting. The tree builder folds
//! that list into a nested hierarchy, and the grouper partitions it into
//! favorites, per-category, and uncategorized views.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub mod grouping;
pub mod store;
pub mod tree;

pub use grouping::{group_projects, CategoryGroup, Grouping};
pub use store::ProjectStore;
pub use tree::{build_tree, ProjectTreeNode};

/// One bookmarked project as persisted (flat, external schema).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRecord {
    /// Display label; `/` or `\` inside it nests the project in the tree
    pub label: String,
    /// Absolute filesystem path of the project
    pub path: String,
    /// Inactive records are hidden unless the host opts in
    pub active: bool,
    /// Optional category id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Optional favorite flag
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub favorite: Option<bool>,
}

impl ProjectRecord {
    /// Create an active, uncategorized record
    pub fn new(label: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            path: path.into(),
            active: true,
            category: None,
            favorite: None,
        }
    }

    /// Whether the record is marked favorite
    pub fn is_favorite(&self) -> bool {
        self.favorite.unwrap_or(false)
    }
}

/// A user-defined project category.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    /// Stable id referenced by records
    pub id: String,
    /// Display name
    pub name: String,
    /// Optional icon hint for the host UI
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

impl Category {
    /// Create a category with a fresh id
    pub fn new(name: impl Into<String>, icon: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            icon,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_round_trips_through_camel_case_json() {
        let mut record = ProjectRecord::new("Work/api", "/home/me/api");
        record.favorite = Some(true);
        record.category = Some("cat-1".to_string());

        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"label\""));
        assert!(json.contains("\"favorite\":true"));

        let parsed: ProjectRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.label, record.label);
        assert_eq!(parsed.category.as_deref(), Some("cat-1"));
        assert!(parsed.is_favorite());
    }

    #[test]
    fn optional_fields_are_omitted_when_unset() {
        let record = ProjectRecord::new("solo", "/p");
        let json = serde_json::to_string(&record).unwrap();
        assert!(!json.contains("category"));
        assert!(!json.contains("favorite"));

        let parsed: ProjectRecord = serde_json::from_str(&json).unwrap();
        assert!(!parsed.is_favorite());
        assert!(parsed.category.is_none());
    }
}
