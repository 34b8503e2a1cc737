use anyhow::Context;
use ragkb_client::{ChunkStrategy, KnowledgeClient};
use ragkb_config::KbConfig;

/// Everything a command handler needs: one client plus the loaded config.
pub struct AppContext {
    pub client: KnowledgeClient,
    pub config: KbConfig,
}

impl AppContext {
    pub fn init(config: KbConfig) -> anyhow::Result<Self> {
        let client = KnowledgeClient::from_config(&config.server)
            .context("failed to build knowledge api client")?;
        tracing::debug!(base_url = %config.server.base_url, "knowledge api client ready");
        Ok(Self { client, config })
    }

    /// `explicit` if given, else the configured `[ingest] chunk_strategy`.
    pub fn chunk_strategy(&self, explicit: Option<ChunkStrategy>) -> anyhow::Result<ChunkStrategy> {
        match explicit {
            Some(strategy) => Ok(strategy),
            None => self
                .config
                .ingest
                .chunk_strategy
                .parse::<ChunkStrategy>()
                .map_err(anyhow::Error::msg)
                .context("invalid [ingest] chunk_strategy"),
        }
    }

    /// `explicit` if given, else the configured `[ingest] graph_label`.
    pub fn graph_label<'a>(&'a self, explicit: Option<&'a str>) -> &'a str {
        explicit.unwrap_or(&self.config.ingest.graph_label)
    }
}
