//! notedesk - Terminal note keeper
//!
//! A note repository with categories, favorites, free-text search and
//! statistics, persisted to a TOML file after every change.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use domain::{Note, NoteId, NoteStatistics};
pub use error::NoteError;
pub use infrastructure::{FileNoteStore, MemoryNoteStore, NoteRepository, NoteStore};
