//! Workspace discovery and layout

use crate::error::{NoteError, Result};
use crate::infrastructure::config::WORKSPACE_DIR;
use crate::infrastructure::{Config, FileNoteStore, NoteRepository};
use std::fs;
use std::path::{Path, PathBuf};

/// A directory holding a `.notedesk` folder
#[derive(Debug, Clone)]
pub struct Workspace {
    pub root: PathBuf,
}

impl Workspace {
    pub fn new(root: PathBuf) -> Self {
        Workspace { root }
    }

    /// Discover workspace root by walking up from current directory
    /// First checks NOTEDESK_ROOT environment variable, then falls back to discovery
    pub fn discover() -> Result<Self> {
        if let Ok(root_path) = std::env::var("NOTEDESK_ROOT") {
            let path = PathBuf::from(root_path);
            if Self::has_workspace_dir(&path) {
                return Ok(Workspace::new(path));
            } else {
                return Err(NoteError::Config(format!(
                    "NOTEDESK_ROOT is set to '{}' but no .notedesk directory found. \
                    Run 'notedesk init' in that directory or unset NOTEDESK_ROOT.",
                    path.display()
                )));
            }
        }

        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Discover workspace root by walking up from a specific starting directory
    pub fn discover_from(start: &Path) -> Result<Self> {
        let mut current = start.to_path_buf();

        loop {
            if Self::has_workspace_dir(&current) {
                return Ok(Workspace::new(current));
            }

            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => return Err(NoteError::NotNotedeskDirectory(start.to_path_buf())),
            }
        }
    }

    fn has_workspace_dir(path: &Path) -> bool {
        path.join(WORKSPACE_DIR).is_dir()
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn is_initialized(&self) -> bool {
        Self::has_workspace_dir(&self.root)
    }

    /// Create the .notedesk directory; fails if it already exists
    pub fn initialize(&self) -> Result<()> {
        let workspace_dir = self.root.join(WORKSPACE_DIR);

        if workspace_dir.exists() {
            return Err(NoteError::Config(format!(
                "Directory already initialized: {}",
                self.root.display()
            )));
        }

        fs::create_dir(&workspace_dir)?;
        Ok(())
    }

    pub fn load_config(&self) -> Result<Config> {
        Config::load_from_dir(&self.root)
    }

    pub fn save_config(&self, config: &Config) -> Result<()> {
        config.save_to_dir(&self.root)
    }

    /// Path of the note collection file
    pub fn notes_path(&self) -> PathBuf {
        self.root.join(WORKSPACE_DIR).join("notes.toml")
    }

    /// File store backing this workspace
    pub fn note_store(&self) -> FileNoteStore {
        FileNoteStore::new(self.notes_path())
    }

    /// Open the note repository stored in this workspace
    pub fn open_repository(&self) -> Result<NoteRepository> {
        if !self.is_initialized() {
            return Err(NoteError::NotNotedeskDirectory(self.root.clone()));
        }
        NoteRepository::open(self.note_store())
    }
}
