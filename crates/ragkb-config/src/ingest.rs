//! Defaults for document ingestion and graph retrieval.

use serde::{Deserialize, Serialize};

fn default_chunk_strategy() -> String {
    String::from("markdown")
}

fn default_graph_label() -> String {
    String::from("*")
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct IngestConfig {
    /// Chunk strategy sent with local file uploads
    /// (`markdown`, `recursive`, `semantic` or `character`).
    #[serde(default = "default_chunk_strategy")]
    pub chunk_strategy: String,

    /// Node label used when fetching a knowledge graph. `*` selects all nodes.
    #[serde(default = "default_graph_label")]
    pub graph_label: String,
}

impl Default for IngestConfig {
    fn default() -> Self {
        Self {
            chunk_strategy: default_chunk_strategy(),
            graph_label: default_graph_label(),
        }
    }
}
