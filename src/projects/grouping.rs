//! Partitioning project records into favorites, per-category, and
//! uncategorized buckets, each rendered as its own tree.

use super::tree::{build_tree, ProjectTreeNode};
use super::{Category, ProjectRecord};

/// One category bucket with its tree.
#[derive(Debug, Clone)]
pub struct CategoryGroup {
    pub category: Category,
    /// Tree over the records assigned to this category
    pub nodes: Vec<ProjectTreeNode>,
}

/// The derived partition of the project list.
#[derive(Debug, Clone, Default)]
pub struct Grouping {
    /// Tree over every favorite record; empty when there are none
    pub favorites: Vec<ProjectTreeNode>,
    /// One group per category that has records, in category-list order
    pub per_category: Vec<CategoryGroup>,
    /// Tree over records with no category; favorites appear here again
    pub uncategorized: Vec<ProjectTreeNode>,
}

impl Grouping {
    /// Whether any favorite records exist
    pub fn has_favorites(&self) -> bool {
        !self.favorites.is_empty()
    }

    /// Whether every bucket is empty
    pub fn is_empty(&self) -> bool {
        self.favorites.is_empty() && self.per_category.is_empty() && self.uncategorized.is_empty()
    }
}

/// Partition records and tree-build each non-empty bucket.
///
/// A favorite lands in `favorites` regardless of category. A record without
/// a category lands in `uncategorized` even when it is also a favorite, so
/// such a record appears twice. A record naming a category id absent from
/// `categories` gets no per-category bucket but still follows the other two
/// rules. Category order follows `categories`, not the records.
pub fn group_projects(records: &[ProjectRecord], categories: &[Category]) -> Grouping {
    let favorites: Vec<ProjectRecord> = records
        .iter()
        .filter(|record| record.is_favorite())
        .cloned()
        .collect();

    let uncategorized: Vec<ProjectRecord> = records
        .iter()
        .filter(|record| record.category.is_none())
        .cloned()
        .collect();

    let mut per_category = Vec::new();
    for category in categories {
        let members: Vec<ProjectRecord> = records
            .iter()
            .filter(|record| record.category.as_deref() == Some(category.id.as_str()))
            .cloned()
            .collect();
        if members.is_empty() {
            continue;
        }
        per_category.push(CategoryGroup {
            category: category.clone(),
            nodes: build_tree(&members),
        });
    }

    Grouping {
        favorites: build_tree(&favorites),
        per_category,
        uncategorized: build_tree(&uncategorized),
    }
}
