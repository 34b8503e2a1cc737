use std::path::Path;

use anyhow::Context;
use ragkb_client::{AddDocumentRequest, UpdateDocumentRequest};

use crate::cli::GlobalFlags;
use crate::cli::subcommands::DocumentCommands;
use crate::context::AppContext;
use crate::output::output;

/// Handle `ragkb document`.
pub async fn handle(
    action: &DocumentCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let client = &ctx.client;
    let value = match action {
        DocumentCommands::Add {
            library_id,
            title,
            content,
            file,
        } => {
            let content = resolve_content(content.as_deref(), file.as_deref())
                .await?
                .unwrap_or_default();
            client
                .add_document(&AddDocumentRequest {
                    library_id: *library_id,
                    title: title.clone(),
                    content,
                })
                .await?
        }
        DocumentCommands::Update {
            id,
            title,
            content,
            file,
        } => {
            let content = resolve_content(content.as_deref(), file.as_deref()).await?;
            client
                .update_document(
                    *id,
                    &UpdateDocumentRequest {
                        title: title.clone(),
                        content,
                    },
                )
                .await?
        }
        DocumentCommands::Delete { id } => client.delete_document(*id).await?,
    };
    output(&value, flags.format)
}

/// Inline `--content` wins; otherwise read `--file` as UTF-8 text.
async fn resolve_content(
    content: Option<&str>,
    file: Option<&Path>,
) -> anyhow::Result<Option<String>> {
    if let Some(content) = content {
        return Ok(Some(content.to_string()));
    }
    match file {
        Some(path) => tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("failed to read document text from {}", path.display()))
            .map(Some),
        None => Ok(None),
    }
}
