//! Initialize workspace use case

use crate::error::Result;
use crate::infrastructure::{Config, NoteStore, Workspace};
use std::fs;
use std::path::Path;

pub struct InitService;

impl InitService {
    /// Initialize a new workspace at the specified path.
    pub fn execute(path: &Path) -> Result<Workspace> {
        if !path.exists() {
            fs::create_dir_all(path)?;
        }

        let workspace = Workspace::new(path.to_path_buf());
        workspace.initialize()?;
        workspace.save_config(&Config::new())?;

        // start with an empty, valid note file
        workspace.note_store().save(&[])?;

        tracing::info!(root = %path.display(), "initialized workspace");
        Ok(workspace)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_init_creates_layout() {
        let temp = TempDir::new().unwrap();
        let target = temp.path().join("desk");

        let ws = InitService::execute(&target).unwrap();

        assert!(ws.is_initialized());
        assert!(target.join(".notedesk/config.toml").exists());
        assert!(target.join(".notedesk/notes.toml").exists());
        assert!(ws.open_repository().unwrap().is_empty().unwrap());
    }

    #[test]
    fn test_init_twice_fails() {
        let temp = TempDir::new().unwrap();
        InitService::execute(temp.path()).unwrap();
        assert!(InitService::execute(temp.path()).is_err());
    }
}
