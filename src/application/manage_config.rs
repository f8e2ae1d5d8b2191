//! Config management use case

use crate::error::{NoteError, Result};
use crate::infrastructure::{Config, Workspace};

/// Service for managing workspace configuration
pub struct ConfigService {
    workspace: Workspace,
}

impl ConfigService {
    pub fn new(workspace: Workspace) -> Self {
        ConfigService { workspace }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        let config = self.workspace.load_config()?;

        match key {
            "default_category" => Ok(config.default_category),
            "created" => Ok(config.created.to_rfc3339()),
            _ => Err(NoteError::Config(format!(
                "Unknown config key: '{}'. Valid keys are: default_category, created",
                key
            ))),
        }
    }

    /// Set a config value
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = self.workspace.load_config()?;

        match key {
            "default_category" => {
                config.default_category = value.to_string();
            }
            "created" => {
                return Err(NoteError::Config(
                    "Cannot modify 'created' field (read-only)".to_string(),
                ));
            }
            _ => {
                return Err(NoteError::Config(format!(
                    "Unknown config key: '{}'. Valid keys are: default_category",
                    key
                )));
            }
        }

        self.workspace.save_config(&config)
    }

    pub fn list(&self) -> Result<Config> {
        self.workspace.load_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::InitService;
    use tempfile::TempDir;

    #[test]
    fn test_get_and_set_default_category() {
        let temp = TempDir::new().unwrap();
        let service = ConfigService::new(InitService::execute(temp.path()).unwrap());

        assert_eq!(service.get("default_category").unwrap(), "General");
        service.set("default_category", "Ideas").unwrap();
        assert_eq!(service.get("default_category").unwrap(), "Ideas");
    }

    #[test]
    fn test_created_is_read_only() {
        let temp = TempDir::new().unwrap();
        let service = ConfigService::new(InitService::execute(temp.path()).unwrap());

        assert!(service.get("created").is_ok());
        assert!(matches!(
            service.set("created", "now"),
            Err(NoteError::Config(_))
        ));
    }

    #[test]
    fn test_unknown_key() {
        let temp = TempDir::new().unwrap();
        let service = ConfigService::new(InitService::execute(temp.path()).unwrap());

        match service.get("editor").unwrap_err() {
            NoteError::Config(msg) => assert!(msg.contains("Unknown config key: 'editor'")),
            other => panic!("Expected Config error, got {:?}", other),
        }
    }
}
