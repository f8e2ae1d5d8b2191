//! Note repository

use crate::domain::palette::random_color;
use crate::domain::{validate_text, Note, NoteId, NoteStatistics, SearchQuery, DEFAULT_CATEGORY};
use crate::error::{NoteError, Result};
use crate::infrastructure::store::{FileNoteStore, NoteStore};
use chrono::{DateTime, Duration, Utc};
use std::collections::BTreeSet;
use std::sync::{RwLock, RwLockReadGuard};

struct State {
    notes: Vec<Note>,
    last_stamp: Option<DateTime<Utc>>,
}

/// Sole owner of the note collection.
///
/// Every mutating call is committed to the store before it returns. Mutations
/// are serialized behind a write lock and applied to a copy first, so a failed
/// commit leaves both memory and storage as they were.
pub struct NoteRepository<S: NoteStore = FileNoteStore> {
    store: S,
    state: RwLock<State>,
}

impl<S: NoteStore> NoteRepository<S> {
    /// Open the repository, loading everything the store holds
    pub fn open(store: S) -> Result<Self> {
        let notes = store.load()?;
        let last_stamp = notes.iter().map(|n| n.updated_at).max();
        tracing::debug!(count = notes.len(), "opened note repository");

        Ok(NoteRepository {
            store,
            state: RwLock::new(State { notes, last_stamp }),
        })
    }

    /// The backing store
    pub fn store(&self) -> &S {
        &self.store
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, State>> {
        self.state
            .read()
            .map_err(|_| NoteError::Persistence("note state lock poisoned".to_string()))
    }

    /// Run a mutation against a copy of the collection and commit it.
    ///
    /// `apply` returns `None` when nothing changed; nothing is written then.
    fn commit<T>(
        &self,
        apply: impl FnOnce(&mut Vec<Note>, DateTime<Utc>) -> Result<Option<T>>,
    ) -> Result<Option<T>> {
        let mut state = self
            .state
            .write()
            .map_err(|_| NoteError::Persistence("note state lock poisoned".to_string()))?;

        let stamp = next_stamp(state.last_stamp);
        let mut draft = state.notes.clone();

        let Some(out) = apply(&mut draft, stamp)? else {
            return Ok(None);
        };

        if let Err(e) = self.store.save(&draft) {
            tracing::warn!(error = %e, "note commit failed, change discarded");
            return Err(e);
        }

        state.notes = draft;
        state.last_stamp = Some(stamp);
        Ok(Some(out))
    }

    /// Create a note. Category defaults to "General".
    pub fn create(&self, title: &str, content: &str, category: Option<&str>) -> Result<Note> {
        validate_text(title, content)?;
        let category = category.unwrap_or(DEFAULT_CATEGORY);

        let created = self.commit(|notes, now| {
            let note = Note::new(
                title,
                content,
                category,
                random_color(&mut rand::thread_rng()),
                now,
            );
            notes.push(note.clone());
            Ok(Some(note))
        })?;

        let note =
            created.ok_or_else(|| NoteError::Persistence("create was not applied".into()))?;
        tracing::info!(id = %note.id, category = %note.category, "created note");
        Ok(note)
    }

    /// Look up a single note
    pub fn get(&self, id: NoteId) -> Result<Option<Note>> {
        Ok(self.read()?.notes.iter().find(|n| n.id == id).cloned())
    }

    /// Every note, most recently updated first
    pub fn get_all(&self) -> Result<Vec<Note>> {
        self.query(|_| true)
    }

    /// Notes whose category equals `category` exactly
    pub fn get_by_category(&self, category: &str) -> Result<Vec<Note>> {
        self.query(|n| n.category == category)
    }

    /// Notes whose title or content contains `query`, ignoring case and accents
    pub fn search(&self, query: &str) -> Result<Vec<Note>> {
        let query = SearchQuery::new(query);
        self.query(|n| query.matches(n))
    }

    pub fn get_favorites(&self) -> Result<Vec<Note>> {
        self.query(|n| n.is_favorite)
    }

    fn query(&self, keep: impl Fn(&Note) -> bool) -> Result<Vec<Note>> {
        let state = self.read()?;
        let mut notes: Vec<Note> = state.notes.iter().filter(|n| keep(*n)).cloned().collect();
        // stable: equal timestamps keep insertion order
        notes.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        Ok(notes)
    }

    /// Overwrite title and content, and category when given.
    /// Returns `false` if no note has this id.
    pub fn update(
        &self,
        id: NoteId,
        title: &str,
        content: &str,
        category: Option<&str>,
    ) -> Result<bool> {
        validate_text(title, content)?;

        let updated = self.commit(|notes, now| {
            let Some(note) = notes.iter_mut().find(|n| n.id == id) else {
                return Ok(None);
            };
            note.title = title.trim().to_string();
            note.content = content.trim().to_string();
            if let Some(category) = category {
                note.category = category.to_string();
            }
            note.updated_at = now;
            Ok(Some(()))
        })?;

        if updated.is_some() {
            tracing::info!(%id, "updated note");
        } else {
            tracing::debug!(%id, "update skipped, note not found");
        }
        Ok(updated.is_some())
    }

    /// Flip the favorite flag, returning the new value
    pub fn toggle_favorite(&self, id: NoteId) -> Result<bool> {
        let toggled = self.commit(|notes, now| {
            let Some(note) = notes.iter_mut().find(|n| n.id == id) else {
                return Ok(None);
            };
            note.is_favorite = !note.is_favorite;
            note.updated_at = now;
            Ok(Some(note.is_favorite))
        })?;

        let favorite = toggled.ok_or(NoteError::NotFound(id))?;
        tracing::info!(%id, favorite, "toggled favorite");
        Ok(favorite)
    }

    /// Remove a note permanently. Returns whether one was removed.
    pub fn delete(&self, id: NoteId) -> Result<bool> {
        let removed = self.commit(|notes, _| {
            let Some(pos) = notes.iter().position(|n| n.id == id) else {
                return Ok(None);
            };
            notes.remove(pos);
            Ok(Some(()))
        })?;

        if removed.is_some() {
            tracing::info!(%id, "deleted note");
        }
        Ok(removed.is_some())
    }

    pub fn statistics(&self) -> Result<NoteStatistics> {
        Ok(NoteStatistics::compute(&self.get_all()?))
    }

    /// Distinct categories in alphabetical order
    pub fn categories(&self) -> Result<Vec<String>> {
        let state = self.read()?;
        let set: BTreeSet<&str> = state.notes.iter().map(|n| n.category.as_str()).collect();
        Ok(set.into_iter().map(str::to_string).collect())
    }

    pub fn len(&self) -> Result<usize> {
        Ok(self.read()?.notes.len())
    }

    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }

    /// Write the current collection to the store
    pub fn flush(&self) -> Result<()> {
        let state = self
            .state
            .write()
            .map_err(|_| NoteError::Persistence("note state lock poisoned".to_string()))?;
        self.store.save(&state.notes)?;
        tracing::debug!(count = state.notes.len(), "flushed notes");
        Ok(())
    }
}

/// Timestamps handed out are strictly increasing, even on a coarse clock.
fn next_stamp(last: Option<DateTime<Utc>>) -> DateTime<Utc> {
    let now = Utc::now();
    match last {
        Some(last) if now <= last => last + Duration::microseconds(1),
        _ => now,
    }
}
