//! Folding flat project records into a nested display tree.

use super::ProjectRecord;

/// One node of the derived project tree.
///
/// `full_path` and `children` are orthogonal: a label that names a project
/// and is also a prefix of longer labels yields a node that is
/// simultaneously an openable leaf and an expandable folder. Both roles are
/// kept.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectTreeNode {
    /// One segment of a record's label
    pub name: String,
    /// Set only at the final segment of a record's label
    pub full_path: Option<String>,
    /// Children in first-insertion order
    pub children: Vec<ProjectTreeNode>,
    /// Last writer wins across records touching this segment
    pub active: bool,
    /// Last writer wins
    pub category: Option<String>,
    /// Last writer wins
    pub favorite: bool,
}

impl ProjectTreeNode {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            full_path: None,
            children: Vec::new(),
            active: true,
            category: None,
            favorite: false,
        }
    }

    /// Whether selecting this node opens a project
    pub fn is_openable(&self) -> bool {
        self.full_path.is_some()
    }

    /// Whether this node renders as an expandable folder
    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// Find a direct child by segment name
    pub fn child(&self, name: &str) -> Option<&ProjectTreeNode> {
        self.children.iter().find(|c| c.name == name)
    }
}

/// Split a label into path segments. Both separator styles count; empty
/// segments from doubled or edge separators are dropped.
fn label_segments(label: &str) -> Vec<&str> {
    label
        .split(['/', '\\'])
        .filter(|segment| !segment.is_empty())
        .collect()
}

/// Fold records into root nodes.
///
/// Every segment a record passes through takes that record's metadata (last
/// write wins); only the final segment receives the record's path. Sibling
/// order is first-appearance order, never sorted. Input order is the
/// caller's invariant and is preserved, so duplicate labels resolve
/// deterministically.
pub fn build_tree(records: &[ProjectRecord]) -> Vec<ProjectTreeNode> {
    let mut roots: Vec<ProjectTreeNode> = Vec::new();

    for record in records {
        let segments = label_segments(&record.label);
        let mut level = &mut roots;

        for (idx, segment) in segments.iter().enumerate() {
            let pos = match level.iter().position(|node| node.name == *segment) {
                Some(pos) => pos,
                None => {
                    level.push(ProjectTreeNode::new(segment));
                    level.len() - 1
                }
            };

            let node = &mut level[pos];
            node.active = record.active;
            node.category = record.category.clone();
            node.favorite = record.is_favorite();
            if idx + 1 == segments.len() {
                node.full_path = Some(record.path.clone());
            }

            level = &mut node.children;
        }
    }

    roots
}
