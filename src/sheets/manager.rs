//! Sheet collection management: load, create, rename, delete, search.

use anyhow::{anyhow, Context, Result};
use uuid::Uuid;

use super::parser;
use super::search::{filter_sheets, SheetQuery};
use super::store::SheetStore;
use super::template;
use super::{Sheet, RESERVED_SHEET_ID};

/// Owns the loaded sheet collection and its backing store.
///
/// The collection is a cache: every mutation goes through the store and is
/// followed by a full reload, so the in-memory list is always a faithful
/// re-derivation of persisted state. Note ids are regenerated on every
/// reload and must not be held across a refresh.
pub struct SheetManager<S: SheetStore> {
    store: S,
    sheets: Vec<Sheet>,
}

impl<S: SheetStore> SheetManager<S> {
    /// Create a manager over a store and load the collection.
    pub fn load(store: S) -> Result<Self> {
        let mut manager = Self {
            store,
            sheets: Vec::new(),
        };
        manager.refresh()?;
        Ok(manager)
    }

    /// The loaded sheets: reserved sheet first, the rest by name.
    pub fn sheets(&self) -> &[Sheet] {
        &self.sheets
    }

    /// Find a loaded sheet by id.
    pub fn get(&self, id: &str) -> Option<&Sheet> {
        self.sheets.iter().find(|sheet| sheet.id == id)
    }

    /// Re-derive the collection from the store.
    ///
    /// The reserved sheet's template is written back unconditionally first,
    /// so it always exists with pristine content; if that write fails the
    /// load proceeds with whatever the store can still enumerate.
    pub fn refresh(&mut self) -> Result<()> {
        let _ = self
            .store
            .write(RESERVED_SHEET_ID, template::USEFUL_TIPS_TEMPLATE);

        let sources = self.store.list().context("Failed to enumerate sheets")?;
        let mut sheets: Vec<Sheet> = sources
            .into_iter()
            .map(|source| build_sheet(source.id, source.text))
            .collect();

        sheets.sort_by(|a, b| {
            b.is_reserved()
                .cmp(&a.is_reserved())
                .then_with(|| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
        });

        self.sheets = sheets;
        Ok(())
    }

    /// Create a new sheet from the starter template and reload.
    pub fn add_sheet(&mut self, name: &str) -> Result<Sheet> {
        let id = Uuid::new_v4().to_string();
        let text = template::starter_sheet(name);
        self.store
            .write(&id, &text)
            .with_context(|| format!("Failed to create sheet '{name}'"))?;
        self.refresh()?;
        self.get(&id)
            .cloned()
            .ok_or_else(|| anyhow!("Sheet '{name}' missing after reload"))
    }

    /// Rename a sheet by rewriting the first line of its persisted text.
    pub fn rename_sheet(&mut self, id: &str, new_name: &str) -> Result<()> {
        let text = self
            .store
            .read(id)?
            .ok_or_else(|| anyhow!("No sheet with id '{id}'"))?;

        let body = text.split_once('\n').map_or("", |(_, rest)| rest);
        let renamed = format!("{new_name}\n{body}");
        self.store
            .write(id, &renamed)
            .with_context(|| format!("Failed to rename sheet '{id}'"))?;
        self.refresh()
    }

    /// Delete a sheet's persisted source and reload.
    ///
    /// Deleting the reserved sheet is allowed but has no lasting effect: the
    /// next load regenerates it from the template.
    pub fn delete_sheet(&mut self, id: &str) -> Result<()> {
        self.store
            .delete(id)
            .with_context(|| format!("Failed to delete sheet '{id}'"))?;
        self.refresh()
    }

    /// Sheets matching a free-text term; a blank term returns everything.
    pub fn search(&self, term: &str) -> Vec<Sheet> {
        filter_sheets(&self.sheets, &SheetQuery::new(term))
    }
}

/// Parse one source into a sheet: name from the first line, headers from the
/// body, owner names backfilled onto every note.
fn build_sheet(id: String, text: String) -> Sheet {
    let name = text
        .lines()
        .next()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map_or_else(|| id.clone(), ToString::to_string);

    let mut headers = parser::parse(&text);
    for header in &mut headers {
        let header_name = header.name.clone();
        for note in &mut header.notes {
            note.sheet_name = name.clone();
            note.header_name = header_name.clone();
        }
    }

    Sheet {
        id,
        name,
        raw_text: text,
        headers,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sheets::store::MemorySheetStore;
    use crate::sheets::NoteKind;

    fn manager_with(sheets: &[(&str, &str)]) -> SheetManager<MemorySheetStore> {
        let mut store = MemorySheetStore::new();
        for (id, text) in sheets {
            store.write(id, text).unwrap();
        }
        SheetManager::load(store).unwrap()
    }

    #[test]
    fn reserved_sheet_is_regenerated_and_listed_first() {
        let manager = manager_with(&[("zz", "Aardvark\n    H\n        note\n")]);

        let sheets = manager.sheets();
        assert_eq!(sheets[0].id, RESERVED_SHEET_ID);
        assert_eq!(sheets[0].name, "Useful Tips");

        let fresh = parser::parse(template::USEFUL_TIPS_TEMPLATE);
        assert_eq!(sheets[0].headers.len(), fresh.len());
        for (a, b) in sheets[0].headers.iter().zip(&fresh) {
            assert_eq!(a.name, b.name);
            assert_eq!(a.notes.len(), b.notes.len());
            for (x, y) in a.notes.iter().zip(&b.notes) {
                assert_eq!(x.content, y.content);
                assert_eq!(x.kind, y.kind);
            }
        }
    }

    #[test]
    fn reserved_sheet_overwrites_a_tampered_copy() {
        let manager = manager_with(&[(RESERVED_SHEET_ID, "Hacked\n    Evil\n        > rm -rf\n")]);
        let reserved = manager.get(RESERVED_SHEET_ID).unwrap();
        assert_eq!(reserved.name, "Useful Tips");
        assert_eq!(reserved.raw_text, template::USEFUL_TIPS_TEMPLATE);
    }

    #[test]
    fn sheets_are_ordered_by_name_after_the_reserved_one() {
        let manager = manager_with(&[
            ("1", "banana\n"),
            ("2", "Apple\n"),
            ("3", "cherry\n"),
        ]);
        let names: Vec<&str> = manager.sheets().iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Useful Tips", "Apple", "banana", "cherry"]);
    }

    #[test]
    fn sheet_name_falls_back_to_id_for_empty_text() {
        let manager = manager_with(&[("empty-one", "")]);
        assert_eq!(manager.get("empty-one").unwrap().name, "empty-one");
    }

    #[test]
    fn notes_are_backfilled_with_owner_names() {
        let manager = manager_with(&[("s", "My Sheet\n    Git\n        > git pull\n")]);
        let sheet = manager.get("s").unwrap();
        let note = &sheet.headers[0].notes[0];
        assert_eq!(note.sheet_name, "My Sheet");
        assert_eq!(note.header_name, "Git");
        assert_eq!(note.kind, NoteKind::Command);
    }

    #[test]
    fn add_sheet_persists_and_returns_the_parsed_sheet() {
        let mut manager = manager_with(&[]);
        let sheet = manager.add_sheet("Deploy").unwrap();

        assert_eq!(sheet.name, "Deploy");
        assert!(!sheet.headers.is_empty());
        assert!(manager.get(&sheet.id).is_some());
        assert_eq!(manager.sheets().len(), 2);
    }

    #[test]
    fn rename_rewrites_only_the_first_line() {
        let mut manager = manager_with(&[("s", "Old Name\n    Git\n        > git pull\n")]);
        manager.rename_sheet("s", "New Name").unwrap();

        let sheet = manager.get("s").unwrap();
        assert_eq!(sheet.name, "New Name");
        assert_eq!(sheet.headers.len(), 1);
        assert_eq!(sheet.headers[0].notes[0].content, "git pull");
    }

    #[test]
    fn rename_of_unknown_sheet_is_an_error() {
        let mut manager = manager_with(&[]);
        assert!(manager.rename_sheet("ghost", "Anything").is_err());
    }

    #[test]
    fn delete_drops_a_user_sheet() {
        let mut manager = manager_with(&[("s", "Doomed\n")]);
        manager.delete_sheet("s").unwrap();
        assert!(manager.get("s").is_none());
    }

    #[test]
    fn deleting_the_reserved_sheet_does_not_stick() {
        let mut manager = manager_with(&[]);
        manager.delete_sheet(RESERVED_SHEET_ID).unwrap();
        assert!(manager.get(RESERVED_SHEET_ID).is_some());
    }

    #[test]
    fn search_reaches_note_content() {
        let manager = manager_with(&[
            ("a", "Infra\n    Docker\n        > docker ps\n"),
            ("b", "Recipes\n    Pasta\n        boil water\n"),
        ]);

        let hits = manager.search("docker ps");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "a");

        // Blank term returns the whole collection, reserved sheet included.
        assert_eq!(manager.search("").len(), 3);
    }
}
