//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "notedesk")]
#[command(about = "Terminal note keeper with categories, favorites and search", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new notes workspace
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// Create a note
    Add {
        title: String,

        #[arg(default_value = "")]
        content: String,

        /// Category (default: configured default_category)
        #[arg(short, long)]
        category: Option<String>,
    },

    /// List notes, most recently updated first
    List {
        /// Only notes in this category (exact match)
        #[arg(short, long, conflicts_with = "favorites")]
        category: Option<String>,

        /// Only favorite notes
        #[arg(short, long)]
        favorites: bool,

        /// Maximum number of notes to show
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },

    /// Find notes whose title or content contains QUERY
    Search { query: String },

    /// Show a single note
    Show { id: String },

    /// Replace a note's title and content
    Edit {
        id: String,

        title: String,

        #[arg(default_value = "")]
        content: String,

        /// New category (unchanged when omitted)
        #[arg(short, long)]
        category: Option<String>,
    },

    /// Toggle a note's favorite flag
    Fav { id: String },

    /// Delete a note permanently
    Rm { id: String },

    /// Show note counts
    Stats,

    /// List categories in use
    Categories,

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },
}
