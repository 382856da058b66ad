//! Notes & commands sheets.
//!
//! A sheet is a named, user-editable text document in a small
//! indentation-based format: headers at one level of indentation, command
//! and note entries underneath at two. Sheets are parsed into the model
//! types here and managed as a collection by [`SheetManager`].

use chrono::Utc;
use uuid::Uuid;

pub mod manager;
pub mod parser;
pub mod search;
pub mod store;
pub mod template;

pub use manager::SheetManager;
pub use store::{FileSheetStore, MemorySheetStore, SheetSource, SheetStore};

/// Id of the built-in sheet regenerated from its template on every load.
pub const RESERVED_SHEET_ID: &str = "useful-tips";

/// Kind of a sheet entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NoteKind {
    /// Executable shell text (the source line started with the command marker)
    Command,
    /// Free-form text
    #[default]
    PlainNote,
}

/// A named document holding zero or more headers.
#[derive(Debug, Clone)]
pub struct Sheet {
    /// Stable identifier (the file stem in the file-backed store)
    pub id: String,
    /// Display name, taken from the first line of the text
    pub name: String,
    /// Full original text the headers were parsed from
    pub raw_text: String,
    /// Parsed headers in source order
    pub headers: Vec<Header>,
}

impl Sheet {
    /// Whether this is the built-in sheet that is regenerated on every load
    pub fn is_reserved(&self) -> bool {
        self.id == RESERVED_SHEET_ID
    }
}

/// A named grouping of notes within one sheet, ordered by source position.
#[derive(Debug, Clone)]
pub struct Header {
    /// Unique id, regenerated on every parse
    pub id: String,
    /// Trimmed text of the declaring line
    pub name: String,
    /// Notes in source order
    pub notes: Vec<Note>,
}

impl Header {
    /// Create an empty header with a fresh id
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            notes: Vec::new(),
        }
    }
}

/// A single sheet entry: a command or a plain note.
#[derive(Debug, Clone)]
pub struct Note {
    /// Unique id, regenerated on every parse
    pub id: String,
    /// Short display form of the content (first words, ellipsized)
    pub title: String,
    /// Command or note text, marker and description stripped
    pub content: String,
    pub kind: NoteKind,
    /// Unix millis assigned at parse time
    pub created_at: i64,
    /// User-assigned tags; empty until the host sets them
    pub tags: Vec<String>,
    /// Owning sheet name, backfilled once the owning sheet is known
    pub sheet_name: String,
    /// Owning header name, backfilled once the owning sheet is known
    pub header_name: String,
    /// Trailing ` #...` annotation, empty when the line had none
    pub description: String,
}

impl Note {
    /// Create a note with a fresh id, stamped at the current time.
    pub fn new(
        title: impl Into<String>,
        content: impl Into<String>,
        kind: NoteKind,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title: title.into(),
            content: content.into(),
            kind,
            created_at: Utc::now().timestamp_millis(),
            tags: Vec::new(),
            sheet_name: String::new(),
            header_name: String::new(),
            description: description.into(),
        }
    }

    /// Whether this entry is an executable command
    pub fn is_command(&self) -> bool {
        self.kind == NoteKind::Command
    }
}
