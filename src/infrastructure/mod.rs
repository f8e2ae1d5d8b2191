//! Infrastructure layer - Persistence and workspace I/O

pub mod config;
pub mod repository;
pub mod store;
pub mod workspace;

pub use config::Config;
pub use repository::NoteRepository;
pub use store::{FileNoteStore, MemoryNoteStore, NoteStore};
pub use workspace::Workspace;
