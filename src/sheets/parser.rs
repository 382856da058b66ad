//! Indentation-based sheet text parser.
//!
//! The format is line-oriented: the first line of a sheet is its name, a
//! line indented one level (four columns) declares a header, a line indented
//! two levels is an entry under the most recent header. Entries starting
//! with `>` are commands; a trailing ` #...` is a description annotation.
//!
//! The parser never fails. Blank lines and lines at any other indentation
//! carry no structure and are skipped, so malformed input degrades to fewer
//! headers and notes, never to an error.

use super::{Header, Note, NoteKind};

/// Marker that makes an entry a command
const COMMAND_MARKER: char = '>';
/// Separator introducing a trailing description annotation
const DESCRIPTION_SEPARATOR: &str = " #";
/// Columns per indentation level; a tab counts as one level
const COLUMNS_PER_LEVEL: usize = 4;
/// Titles longer than this many words are truncated with an ellipsis
const TITLE_WORD_LIMIT: usize = 3;

/// Parse sheet text into headers with their notes, in source order.
///
/// An entry line appearing before any header has nowhere to attach and is
/// dropped.
pub fn parse(text: &str) -> Vec<Header> {
    let mut headers: Vec<Header> = Vec::new();

    for line in text.lines() {
        if line.trim().is_empty() {
            continue;
        }

        match indent_level(line) {
            Some(1) => headers.push(Header::new(line.trim())),
            Some(2) => {
                let Some(current) = headers.last_mut() else {
                    continue;
                };
                current.notes.push(parse_entry(line.trim()));
            }
            _ => {}
        }
    }

    headers
}

/// Indentation level of a line, counting a tab as four columns.
///
/// Only exact multiples of four have a level; ragged indentation (e.g. 9
/// leading spaces) has none and the line is skipped.
fn indent_level(line: &str) -> Option<usize> {
    let mut width = 0;
    for c in line.chars() {
        match c {
            ' ' => width += 1,
            '\t' => width += COLUMNS_PER_LEVEL,
            _ => break,
        }
    }

    if width % COLUMNS_PER_LEVEL != 0 {
        return None;
    }
    Some(width / COLUMNS_PER_LEVEL)
}

/// Parse one trimmed entry line into a note.
fn parse_entry(line: &str) -> Note {
    let (kind, rest) = match line.strip_prefix(COMMAND_MARKER) {
        Some(rest) => (NoteKind::Command, rest.trim_start()),
        None => (NoteKind::PlainNote, line),
    };

    let (content, description) = split_description(rest);
    let title = derive_title(&content);
    Note::new(title, content, kind, description)
}

/// Split a trailing ` #description` off an entry's text.
fn split_description(text: &str) -> (String, String) {
    match text.find(DESCRIPTION_SEPARATOR) {
        Some(idx) => {
            let content = text[..idx].trim().to_string();
            let description = text[idx + DESCRIPTION_SEPARATOR.len()..].trim().to_string();
            (content, description)
        }
        None => (text.trim().to_string(), String::new()),
    }
}

/// First words of the content, ellipsized when it runs long.
fn derive_title(content: &str) -> String {
    let words: Vec<&str> = content.split_whitespace().collect();
    if words.len() <= TITLE_WORD_LIMIT {
        content.to_string()
    } else {
        format!("{}...", words[..TITLE_WORD_LIMIT].join(" "))
    }
}
