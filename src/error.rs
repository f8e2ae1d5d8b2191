//! Error types for notedesk

use crate::domain::NoteId;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for notedesk
#[derive(Debug, Error)]
pub enum NoteError {
    #[error("Not a notedesk directory: {0}")]
    NotNotedeskDirectory(PathBuf),

    #[error("Invalid note id: {0}")]
    InvalidNoteId(String),

    #[error("Note not found: {0}")]
    NotFound(NoteId),

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Persistence failure: {0}")]
    Persistence(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl NoteError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            NoteError::NotNotedeskDirectory(_) => 2,
            NoteError::InvalidNoteId(_) => 3,
            NoteError::NotFound(_) => 4,
            NoteError::Validation(_) => 5,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            NoteError::NotNotedeskDirectory(path) => {
                format!(
                    "Not a notedesk directory: {}\n\n\
                    Suggestions:\n\
                    • Run 'notedesk init' in this directory to create a new workspace\n\
                    • Navigate to an existing notedesk directory\n\
                    • Set NOTEDESK_ROOT environment variable to your workspace path",
                    path.display()
                )
            }
            NoteError::InvalidNoteId(raw) => {
                format!(
                    "Invalid note id: '{}'\n\n\
                    Note ids are UUIDs as printed by 'notedesk list'.\n\
                    Example: notedesk show 67e55044-10b1-426f-9247-bb680e5fe0c8",
                    raw
                )
            }
            NoteError::NotFound(id) => {
                format!(
                    "Note not found: {}\n\n\
                    Suggestions:\n\
                    • Use 'notedesk list' to see existing notes\n\
                    • The note may have been deleted",
                    id
                )
            }
            NoteError::Validation(msg) => {
                format!("{}\n\nA note needs a title or some content.", msg)
            }
            NoteError::Persistence(msg) => {
                format!(
                    "Note storage failed: {}\n\n\
                    Any change in progress was not applied. Check free disk space and \
                    permissions on the .notedesk directory, then retry.",
                    msg
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using NoteError
pub type Result<T> = std::result::Result<T, NoteError>;
