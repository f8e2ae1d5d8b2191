//! Application layer - Use cases and orchestration

pub mod init;
pub mod list_notes;
pub mod manage_config;

pub use init::InitService;
pub use list_notes::{list_notes, NoteFilter};
pub use manage_config::ConfigService;
