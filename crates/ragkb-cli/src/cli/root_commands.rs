use std::path::PathBuf;

use clap::{Args, Subcommand};
use ragkb_client::ChunkStrategy;

use crate::cli::subcommands::{DocumentCommands, LibraryCommands};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Knowledge libraries.
    Library {
        #[command(subcommand)]
        action: LibraryCommands,
    },
    /// Documents inside a library.
    Document {
        #[command(subcommand)]
        action: DocumentCommands,
    },
    /// Request a pre-signed object-storage upload URL.
    UploadUrl(UploadUrlArgs),
    /// PUT a file directly to a pre-signed object-storage URL.
    Upload(UploadArgs),
    /// Crawl a website into a library.
    Crawl(CrawlArgs),
    /// Show crawler status for a collection.
    CrawlStatus(CrawlStatusArgs),
    /// Upload a local file for parsing, chunking and indexing.
    Ingest(IngestArgs),
    /// Fetch a collection's knowledge graph.
    Graph(GraphArgs),
    /// Parse and index a document already in object storage.
    ProcessOss(ProcessOssArgs),
    /// Backend liveness probe.
    Health,
}

#[derive(Clone, Debug, Args)]
pub struct UploadUrlArgs {
    /// Object key / document name to upload under.
    pub document_name: String,
}

#[derive(Clone, Debug, Args)]
pub struct UploadArgs {
    /// Pre-signed URL returned by `upload-url`.
    pub url: String,
    /// File to upload.
    pub file: PathBuf,
    /// Override the content type inferred from the file extension.
    #[arg(long)]
    pub content_type: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct CrawlArgs {
    /// Start URL.
    pub url: String,
    #[arg(long)]
    pub library_id: i64,
    /// Stop after this many pages.
    #[arg(long)]
    pub max_pages: Option<u32>,
}

#[derive(Clone, Debug, Args)]
pub struct CrawlStatusArgs {
    pub collection: String,
}

#[derive(Clone, Debug, Args)]
pub struct IngestArgs {
    /// Local file (pdf, doc, docx, md, txt).
    pub file: PathBuf,
    #[arg(long)]
    pub collection_id: String,
    #[arg(long)]
    pub library_id: i64,
    /// markdown, recursive, semantic or character (default: ingest.chunk_strategy).
    #[arg(long)]
    pub chunk_strategy: Option<ChunkStrategy>,
}

#[derive(Clone, Debug, Args)]
pub struct GraphArgs {
    pub collection_id: String,
    /// Start node label (default: ingest.graph_label).
    #[arg(long)]
    pub label: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct ProcessOssArgs {
    /// Object-storage URL of the uploaded document (no query string).
    #[arg(long)]
    pub oss_url: String,
    #[arg(long)]
    pub collection_id: String,
    #[arg(long)]
    pub document_name: String,
    #[arg(long)]
    pub library_id: i64,
}
