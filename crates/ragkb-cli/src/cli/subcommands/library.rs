use clap::Subcommand;

/// Knowledge library commands.
#[derive(Clone, Debug, Subcommand)]
pub enum LibraryCommands {
    /// List your libraries.
    List,
    /// Get a library by ID.
    Get { id: i64 },
    /// Create a library.
    Create {
        #[arg(long)]
        title: String,
        #[arg(long, default_value = "")]
        description: String,
    },
    /// Update a library.
    Update {
        id: i64,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        description: Option<String>,
    },
    /// Delete a library.
    Delete { id: i64 },
}
