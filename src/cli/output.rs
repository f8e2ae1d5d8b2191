//! Output formatting utilities

use crate::domain::{Note, NoteStatistics};

/// Format a list of notes for display
pub fn format_note_list(notes: &[Note]) -> String {
    if notes.is_empty() {
        return "No notes found".to_string();
    }

    let mut output = String::new();
    for note in notes {
        output.push_str(&format!(
            "{}  {} [{}] {}\n",
            note.id,
            if note.is_favorite { '*' } else { ' ' },
            note.category,
            note.display_title()
        ));
    }
    output
}

/// Format one note with all of its fields
pub fn format_note_detail(note: &Note) -> String {
    let mut output = format!(
        "id:       {}\n\
        title:    {}\n\
        category: {}\n\
        color:    {}\n\
        favorite: {}\n\
        created:  {}\n\
        updated:  {}\n",
        note.id,
        note.title,
        note.category,
        note.color_hex,
        if note.is_favorite { "yes" } else { "no" },
        note.created_at.format("%d-%m-%Y %H:%M:%S"),
        note.updated_at.format("%d-%m-%Y %H:%M:%S"),
    );

    if !note.content.is_empty() {
        output.push('\n');
        output.push_str(&note.content);
        output.push('\n');
    }

    output
}

pub fn format_statistics(stats: &NoteStatistics) -> String {
    let mut output = format!(
        "Total notes: {}\nFavorites:   {}\n",
        stats.total, stats.favorite_count
    );

    if !stats.category_counts.is_empty() {
        output.push_str("\nBy category:\n");
        for (category, count) in &stats.category_counts {
            output.push_str(&format!("  {}: {}\n", category, count));
        }
    }

    output
}

/// Format a list of categories for display.
pub fn format_category_list(categories: &[String]) -> String {
    if categories.is_empty() {
        return "No categories found".to_string();
    }

    let mut output = String::new();
    for category in categories {
        output.push_str(category);
        output.push('\n');
    }

    output
}
