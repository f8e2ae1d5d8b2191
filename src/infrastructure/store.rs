//! Durable note storage backends

use crate::domain::Note;
use crate::error::{NoteError, Result};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

/// Storage seam behind the note repository.
///
/// `save` receives the complete collection and must not return until it is
/// durable.
pub trait NoteStore: Send + Sync {
    /// Load every stored note in insertion order
    fn load(&self) -> Result<Vec<Note>>;

    /// Replace the stored collection
    fn save(&self, notes: &[Note]) -> Result<()>;
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct NoteFile {
    #[serde(default)]
    notes: Vec<Note>,
}

/// TOML file store (`.notedesk/notes.toml`)
#[derive(Debug, Clone)]
pub struct FileNoteStore {
    path: PathBuf,
}

impl FileNoteStore {
    pub fn new(path: PathBuf) -> Self {
        FileNoteStore { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write to a temp file in the same directory, then rename into place.
    ///
    /// On Windows, `rename` does not overwrite existing files, so we remove the destination first.
    fn write_atomic(&self, contents: &str) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let tmp_name = format!(
            "{}.tmp-{}",
            self.path
                .file_name()
                .and_then(|s| s.to_str())
                .unwrap_or("notes.toml"),
            std::process::id()
        );
        let tmp_path = self.path.with_file_name(tmp_name);

        let mut file = File::create(&tmp_path)?;
        file.write_all(contents.as_bytes())?;
        file.sync_all()?;

        if cfg!(windows) && self.path.exists() {
            fs::remove_file(&self.path)?;
        }

        fs::rename(&tmp_path, &self.path)
    }
}

impl NoteStore for FileNoteStore {
    fn load(&self) -> Result<Vec<Note>> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "no note file yet");
                return Ok(Vec::new());
            }
            Err(e) => {
                return Err(NoteError::Persistence(format!(
                    "failed to read {}: {}",
                    self.path.display(),
                    e
                )))
            }
        };

        let file: NoteFile = toml::from_str(&contents).map_err(|e| {
            NoteError::Persistence(format!("failed to parse {}: {}", self.path.display(), e))
        })?;

        tracing::debug!(path = %self.path.display(), count = file.notes.len(), "loaded notes");
        Ok(file.notes)
    }

    fn save(&self, notes: &[Note]) -> Result<()> {
        let file = NoteFile {
            notes: notes.to_vec(),
        };
        let contents = toml::to_string_pretty(&file)
            .map_err(|e| NoteError::Persistence(format!("failed to serialize notes: {}", e)))?;

        self.write_atomic(&contents).map_err(|e| {
            NoteError::Persistence(format!("failed to write {}: {}", self.path.display(), e))
        })?;

        tracing::debug!(path = %self.path.display(), count = notes.len(), "saved notes");
        Ok(())
    }
}

/// In-memory store for tests and throwaway sessions
#[derive(Debug, Default)]
pub struct MemoryNoteStore {
    notes: Mutex<Vec<Note>>,
    fail_writes: AtomicBool,
    saves: AtomicUsize,
}

impl MemoryNoteStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store with existing notes
    pub fn with_notes(notes: Vec<Note>) -> Self {
        MemoryNoteStore {
            notes: Mutex::new(notes),
            ..Default::default()
        }
    }

    /// Make every following `save` fail until reset
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Number of successful saves
    pub fn save_count(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }

    /// Snapshot of what was last committed
    pub fn stored(&self) -> Vec<Note> {
        self.notes.lock().map(|n| n.clone()).unwrap_or_default()
    }
}

impl NoteStore for MemoryNoteStore {
    fn load(&self) -> Result<Vec<Note>> {
        self.notes
            .lock()
            .map(|n| n.clone())
            .map_err(|_| NoteError::Persistence("memory store lock poisoned".to_string()))
    }

    fn save(&self, notes: &[Note]) -> Result<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(NoteError::Persistence(
                "simulated write failure".to_string(),
            ));
        }

        let mut guard = self
            .notes
            .lock()
            .map_err(|_| NoteError::Persistence("memory store lock poisoned".to_string()))?;
        *guard = notes.to_vec();
        self.saves.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
