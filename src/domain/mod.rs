//! Domain layer - Note model and pure note logic

pub mod note;
pub mod palette;
pub mod search;
pub mod stats;

pub use note::{validate_text, Note, NoteId, DEFAULT_CATEGORY};
pub use search::SearchQuery;
pub use stats::NoteStatistics;
