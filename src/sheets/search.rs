//! Search over the sheet collection.
//!
//! Matching is a case-insensitive substring test cascading through the
//! model: a sheet matches on its name or any header, a header on its name
//! or any note, a note on title, content, or tags. Filtering never mutates
//! the collection it searches.

use super::{Header, Note, Sheet};

/// A free-text query over sheets.
#[derive(Debug, Clone)]
pub struct SheetQuery {
    term: String,
}

impl SheetQuery {
    /// Create a query; the term is trimmed and lowercased once up front.
    pub fn new(term: &str) -> Self {
        Self {
            term: term.trim().to_lowercase(),
        }
    }

    /// Whether the query matches everything
    pub fn is_empty(&self) -> bool {
        self.term.is_empty()
    }

    /// Sheet matches on its name or on any header.
    pub fn matches_sheet(&self, sheet: &Sheet) -> bool {
        sheet.name.to_lowercase().contains(&self.term)
            || sheet.headers.iter().any(|h| self.matches_header(h))
    }

    /// Header matches on its name or on any child note.
    pub fn matches_header(&self, header: &Header) -> bool {
        header.name.to_lowercase().contains(&self.term)
            || header.notes.iter().any(|n| self.matches_note(n))
    }

    /// Note matches on title, content, or any tag.
    pub fn matches_note(&self, note: &Note) -> bool {
        note.title.to_lowercase().contains(&self.term)
            || note.content.to_lowercase().contains(&self.term)
            || note.tags.iter().any(|t| t.to_lowercase().contains(&self.term))
    }
}

/// Filter a collection down to the matching sheets. A blank term keeps
/// everything; input order is preserved.
pub fn filter_sheets(sheets: &[Sheet], query: &SheetQuery) -> Vec<Sheet> {
    if query.is_empty() {
        return sheets.to_vec();
    }
    sheets
        .iter()
        .filter(|sheet| query.matches_sheet(sheet))
        .cloned()
        .collect()
}
