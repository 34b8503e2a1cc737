//! Knowledge-graph retrieval.

use serde_json::Value;

use crate::{DEFAULT_GRAPH_LABEL, Fetcher, KnowledgeClient, KnowledgeError, Transport, fail};

const VISUAL_GRAPH: &str = "/api/visual/graph";

impl<T: Transport, F: Fetcher> KnowledgeClient<T, F> {
    /// Fetch the graph (nodes, edges, truncation flag) of a collection.
    ///
    /// `label` selects the start node label and defaults to `*` (all nodes).
    /// Collections without graph indexing come back with empty node and
    /// edge lists.
    ///
    /// # Errors
    ///
    /// Returns [`KnowledgeError::Transport`] if the request fails.
    pub async fn get_knowledge_graph(
        &self,
        collection_id: &str,
        label: Option<&str>,
    ) -> Result<Value, KnowledgeError> {
        let label = label.unwrap_or(DEFAULT_GRAPH_LABEL);
        self.transport
            .get(&format!("{VISUAL_GRAPH}/{collection_id}"), &[("label", label)])
            .await
            .map_err(|e| fail("get_knowledge_graph", e))
    }
}
