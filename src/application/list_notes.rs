//! List notes use case

use crate::domain::Note;
use crate::error::Result;
use crate::infrastructure::{NoteRepository, NoteStore};

/// Which notes to list
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NoteFilter {
    All,
    Category(String),
    Favorites,
    Search(String),
}

/// List notes matching `filter`, newest first, optionally truncated.
pub fn list_notes<S: NoteStore>(
    repository: &NoteRepository<S>,
    filter: &NoteFilter,
    limit: Option<usize>,
) -> Result<Vec<Note>> {
    let mut notes = match filter {
        NoteFilter::All => repository.get_all()?,
        NoteFilter::Category(category) => repository.get_by_category(category)?,
        NoteFilter::Favorites => repository.get_favorites()?,
        NoteFilter::Search(query) => repository.search(query)?,
    };

    if let Some(n) = limit {
        notes.truncate(n);
    }

    Ok(notes)
}
