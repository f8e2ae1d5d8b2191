//! Note record and identifier

use crate::error::NoteError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Category assigned when the caller does not provide one
pub const DEFAULT_CATEGORY: &str = "General";

/// Opaque, never-reused note identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NoteId(Uuid);

impl NoteId {
    /// Generate a fresh random id
    pub fn new() -> Self {
        NoteId(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for NoteId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for NoteId {
    type Err = NoteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s.trim())
            .map(NoteId)
            .map_err(|_| NoteError::InvalidNoteId(s.to_string()))
    }
}

/// A single persisted note.
///
/// Values handed out by the repository are snapshots; changing one does not
/// touch storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: NoteId,
    pub title: String,
    pub content: String,
    pub category: String,
    pub color_hex: String,
    #[serde(default)]
    pub is_favorite: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Note {
    /// Build a brand new note. Title and content are trimmed.
    pub(crate) fn new(
        title: &str,
        content: &str,
        category: &str,
        color_hex: String,
        now: DateTime<Utc>,
    ) -> Self {
        Note {
            id: NoteId::new(),
            title: title.trim().to_string(),
            content: content.trim().to_string(),
            category: category.to_string(),
            color_hex,
            is_favorite: false,
            created_at: now,
            updated_at: now,
        }
    }

    /// Title for list display, falling back to the first content line
    pub fn display_title(&self) -> &str {
        if !self.title.is_empty() {
            return &self.title;
        }
        self.content.lines().next().unwrap_or("")
    }
}

/// Reject a title/content pair that would produce an empty note.
pub fn validate_text(title: &str, content: &str) -> crate::error::Result<()> {
    if title.trim().is_empty() && content.trim().is_empty() {
        return Err(NoteError::Validation(
            "title and content are both empty".to_string(),
        ));
    }
    Ok(())
}
