//! Aggregate statistics over notes

use crate::domain::Note;
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NoteStatistics {
    pub total: usize,
    pub favorite_count: usize,
    pub category_counts: BTreeMap<String, usize>,
}

impl NoteStatistics {
    pub fn compute(notes: &[Note]) -> Self {
        let mut stats = NoteStatistics {
            total: notes.len(),
            ..Default::default()
        };

        for note in notes {
            if note.is_favorite {
                stats.favorite_count += 1;
            }
            *stats
                .category_counts
                .entry(note.category.clone())
                .or_insert(0) += 1;
        }

        stats
    }
}
