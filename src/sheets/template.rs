//! Built-in sheet templates.
//!
//! The reserved tips sheet is written back from [`USEFUL_TIPS_TEMPLATE`] on
//! every load, so edits to it never survive a refresh.

/// Body of the reserved tips sheet.
pub const USEFUL_TIPS_TEMPLATE: &str = "\
Useful Tips
    Git
        > git status # Show working tree status
        > git stash # Shelve local changes
        > git log --oneline -20 # Recent history, one line per commit
    Shell
        > du -sh * # Size of each entry in the current directory
        Ctrl-R searches shell history
    Sheet format
        Indent headers by four spaces
        Indent notes by eight spaces
        Commands start with > and may end with a hash description
";

/// Starter text for a newly created sheet: the name declaration plus one
/// example header demonstrating the format.
pub fn starter_sheet(name: &str) -> String {
    format!(
        "{name}\n    Examples\n        > echo hello # A command with a description\n        Plain notes hold free text\n"
    )
}
