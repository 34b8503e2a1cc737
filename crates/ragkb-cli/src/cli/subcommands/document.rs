use std::path::PathBuf;

use clap::Subcommand;

/// Document commands.
#[derive(Clone, Debug, Subcommand)]
pub enum DocumentCommands {
    /// Add a text document to a library.
    Add {
        #[arg(long)]
        library_id: i64,
        #[arg(long)]
        title: String,
        /// Inline document text.
        #[arg(long, conflicts_with = "file", required_unless_present = "file")]
        content: Option<String>,
        /// Read document text from a file.
        #[arg(long)]
        file: Option<PathBuf>,
    },
    /// Update a document.
    Update {
        id: i64,
        #[arg(long)]
        title: Option<String>,
        #[arg(long, conflicts_with = "file")]
        content: Option<String>,
        #[arg(long)]
        file: Option<PathBuf>,
    },
    /// Delete a document.
    Delete { id: i64 },
}
