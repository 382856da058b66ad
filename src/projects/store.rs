//! Persistence for project records and categories.

use anyhow::{anyhow, Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use super::{Category, ProjectRecord};

const PROJECTS_FILE: &str = "projects.json";
const CATEGORIES_FILE: &str = "categories.json";

/// Store for the flat project list and the category list.
///
/// Both live as pretty-printed JSON files in one storage directory. A
/// missing file reads as an empty list. Record order is preserved across
/// every mutation; downstream tree building depends on it.
pub struct ProjectStore {
    records: Vec<ProjectRecord>,
    categories: Vec<Category>,
    dir: PathBuf,
}

impl ProjectStore {
    /// Load from an explicit storage directory.
    pub fn load_from(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        let records = read_json_list(&dir.join(PROJECTS_FILE))?;
        let categories = read_json_list(&dir.join(CATEGORIES_FILE))?;
        Ok(Self {
            records,
            categories,
            dir,
        })
    }

    /// Load from the platform config directory.
    pub fn load() -> Result<Self> {
        let dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("devpad");
        Self::load_from(dir)
    }

    /// An empty in-memory store that skips saving (for testing).
    pub fn empty() -> Self {
        Self {
            records: Vec::new(),
            categories: Vec::new(),
            dir: PathBuf::new(),
        }
    }

    /// Persist both lists.
    pub fn save(&self) -> Result<()> {
        if self.dir.as_os_str().is_empty() {
            return Ok(()); // Skip saving if no path set (empty store)
        }

        fs::create_dir_all(&self.dir).with_context(|| {
            format!("Failed to create storage directory: {}", self.dir.display())
        })?;
        write_json_list(&self.dir.join(PROJECTS_FILE), &self.records)?;
        write_json_list(&self.dir.join(CATEGORIES_FILE), &self.categories)
    }

    /// All records in persisted order.
    pub fn records(&self) -> &[ProjectRecord] {
        &self.records
    }

    /// All categories in display order.
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Records filtered the way the tree builder expects its input: inactive
    /// records dropped unless `show_inactive`, then a case-insensitive
    /// substring match on label or path. Order preserved.
    pub fn filtered(&self, show_inactive: bool, query: &str) -> Vec<ProjectRecord> {
        let query = query.trim().to_lowercase();
        self.records
            .iter()
            .filter(|record| show_inactive || record.active)
            .filter(|record| {
                query.is_empty()
                    || record.label.to_lowercase().contains(&query)
                    || record.path.to_lowercase().contains(&query)
            })
            .cloned()
            .collect()
    }

    /// Append a record and save.
    pub fn add_record(&mut self, record: ProjectRecord) -> Result<()> {
        self.records.push(record);
        self.save()
    }

    /// Remove every record with the given path; returns whether any existed.
    pub fn remove_record(&mut self, path: &str) -> Result<bool> {
        let before = self.records.len();
        self.records.retain(|record| record.path != path);
        let removed = self.records.len() != before;
        if removed {
            self.save()?;
        }
        Ok(removed)
    }

    /// Mark a project active or inactive.
    pub fn set_active(&mut self, path: &str, active: bool) -> Result<()> {
        self.update_record(path, |record| record.active = active)
    }

    /// Mark or unmark a project as favorite. Clearing drops the field from
    /// the persisted form rather than writing `false`.
    pub fn set_favorite(&mut self, path: &str, favorite: bool) -> Result<()> {
        self.update_record(path, |record| {
            record.favorite = favorite.then_some(true);
        })
    }

    /// Assign a project to a category, or clear it with `None`.
    pub fn set_category(&mut self, path: &str, category: Option<String>) -> Result<()> {
        self.update_record(path, |record| record.category = category.clone())
    }

    fn update_record(&mut self, path: &str, mut apply: impl FnMut(&mut ProjectRecord)) -> Result<()> {
        let mut found = false;
        for record in self.records.iter_mut().filter(|r| r.path == path) {
            apply(record);
            found = true;
        }
        if !found {
            return Err(anyhow!("No project with path '{path}'"));
        }
        self.save()
    }

    /// Create a category and save; returns its id.
    pub fn add_category(&mut self, name: &str, icon: Option<String>) -> Result<String> {
        let category = Category::new(name, icon);
        let id = category.id.clone();
        self.categories.push(category);
        self.save()?;
        Ok(id)
    }

    /// Remove a category and clear it from any record referencing it.
    pub fn remove_category(&mut self, id: &str) -> Result<bool> {
        let before = self.categories.len();
        self.categories.retain(|category| category.id != id);
        let removed = self.categories.len() != before;
        if removed {
            for record in &mut self.records {
                if record.category.as_deref() == Some(id) {
                    record.category = None;
                }
            }
            self.save()?;
        }
        Ok(removed)
    }

    /// Rename a category.
    pub fn rename_category(&mut self, id: &str, name: &str) -> Result<()> {
        let Some(category) = self.categories.iter_mut().find(|c| c.id == id) else {
            return Err(anyhow!("No category with id '{id}'"));
        };
        category.name = name.to_string();
        self.save()
    }
}

fn read_json_list<T: serde::de::DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    if !path.exists() {
        return Ok(Vec::new());
    }
    let content =
        fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&content).with_context(|| format!("Failed to parse {}", path.display()))
}

fn write_json_list<T: serde::Serialize>(path: &Path, list: &[T]) -> Result<()> {
    let content = serde_json::to_string_pretty(list)
        .with_context(|| format!("Failed to serialize {}", path.display()))?;
    fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_files_load_as_empty_lists() {
        let dir = tempfile::tempdir().unwrap();
        let store = ProjectStore::load_from(dir.path()).unwrap();
        assert!(store.records().is_empty());
        assert!(store.categories().is_empty());
    }

    #[test]
    fn records_and_categories_round_trip_through_disk() {
        let dir = tempfile::tempdir().unwrap();

        let mut store = ProjectStore::load_from(dir.path()).unwrap();
        store.add_record(ProjectRecord::new("Work/api", "/api")).unwrap();
        let cat_id = store.add_category("Work", Some("briefcase".to_string())).unwrap();
        store.set_category("/api", Some(cat_id.clone())).unwrap();

        let reloaded = ProjectStore::load_from(dir.path()).unwrap();
        assert_eq!(reloaded.records().len(), 1);
        assert_eq!(reloaded.records()[0].category.as_deref(), Some(cat_id.as_str()));
        assert_eq!(reloaded.categories().len(), 1);
        assert_eq!(reloaded.categories()[0].name, "Work");
    }

    #[test]
    fn empty_store_mutates_without_saving() {
        let mut store = ProjectStore::empty();
        store.add_record(ProjectRecord::new("a", "/a")).unwrap();
        store.set_favorite("/a", true).unwrap();
        assert!(store.records()[0].is_favorite());

        store.set_favorite("/a", false).unwrap();
        assert!(store.records()[0].favorite.is_none());
    }

    #[test]
    fn updating_an_unknown_path_is_an_error() {
        let mut store = ProjectStore::empty();
        assert!(store.set_active("/nope", false).is_err());
    }

    #[test]
    fn remove_record_reports_whether_anything_went() {
        let mut store = ProjectStore::empty();
        store.add_record(ProjectRecord::new("a", "/a")).unwrap();

        assert!(store.remove_record("/a").unwrap());
        assert!(!store.remove_record("/a").unwrap());
    }

    #[test]
    fn filtered_honors_the_inactive_toggle() {
        let mut store = ProjectStore::empty();
        store.add_record(ProjectRecord::new("live", "/live")).unwrap();
        store.add_record(ProjectRecord::new("dormant", "/dormant")).unwrap();
        store.set_active("/dormant", false).unwrap();

        let visible = store.filtered(false, "");
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].label, "live");

        assert_eq!(store.filtered(true, "").len(), 2);
    }

    #[test]
    fn filtered_matches_label_or_path_case_insensitively() {
        let mut store = ProjectStore::empty();
        store.add_record(ProjectRecord::new("Work/API", "/home/me/api")).unwrap();
        store.add_record(ProjectRecord::new("blog", "/srv/blog")).unwrap();

        assert_eq!(store.filtered(true, "api").len(), 1);
        assert_eq!(store.filtered(true, "/SRV").len(), 1);
        assert_eq!(store.filtered(true, "nothing").len(), 0);
        // Order of survivors matches record order.
        let all = store.filtered(true, "");
        assert_eq!(all[0].label, "Work/API");
        assert_eq!(all[1].label, "blog");
    }

    #[test]
    fn removing_a_category_clears_it_from_records() {
        let mut store = ProjectStore::empty();
        store.add_record(ProjectRecord::new("a", "/a")).unwrap();
        let cat_id = store.add_category("Work", None).unwrap();
        store.set_category("/a", Some(cat_id.clone())).unwrap();

        assert!(store.remove_category(&cat_id).unwrap());
        assert!(store.records()[0].category.is_none());
        assert!(!store.remove_category(&cat_id).unwrap());
    }

    #[test]
    fn rename_category_changes_only_the_name() {
        let mut store = ProjectStore::empty();
        let cat_id = store.add_category("Wrok", None).unwrap();
        store.rename_category(&cat_id, "Work").unwrap();

        assert_eq!(store.categories()[0].name, "Work");
        assert_eq!(store.categories()[0].id, cat_id);
        assert!(store.rename_category("ghost", "X").is_err());
    }
}
