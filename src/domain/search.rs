//! Case- and diacritic-insensitive text matching

use crate::domain::Note;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Fold text for comparison: decompose, drop combining marks, lowercase.
pub fn fold(text: &str) -> String {
    text.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

/// A prepared search query
#[derive(Debug, Clone)]
pub struct SearchQuery {
    folded: String,
}

impl SearchQuery {
    pub fn new(query: &str) -> Self {
        SearchQuery {
            folded: fold(query),
        }
    }

    /// True when the title or the content contains the query.
    /// An empty query matches every note.
    pub fn matches(&self, note: &Note) -> bool {
        if self.folded.is_empty() {
            return true;
        }
        fold(&note.title).contains(&self.folded) || fold(&note.content).contains(&self.folded)
    }
}
