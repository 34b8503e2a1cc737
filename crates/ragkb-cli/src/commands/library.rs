use ragkb_client::{CreateLibraryRequest, UpdateLibraryRequest};

use crate::cli::GlobalFlags;
use crate::cli::subcommands::LibraryCommands;
use crate::context::AppContext;
use crate::output::output;

/// Handle `ragkb library`.
pub async fn handle(
    action: &LibraryCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let client = &ctx.client;
    let value = match action {
        LibraryCommands::List => client.list_libraries().await?,
        LibraryCommands::Get { id } => client.get_library(*id).await?,
        LibraryCommands::Create { title, description } => {
            client
                .create_library(&CreateLibraryRequest {
                    title: title.clone(),
                    description: description.clone(),
                })
                .await?
        }
        LibraryCommands::Update {
            id,
            title,
            description,
        } => {
            client
                .update_library(
                    *id,
                    &UpdateLibraryRequest {
                        title: title.clone(),
                        description: description.clone(),
                    },
                )
                .await?
        }
        LibraryCommands::Delete { id } => client.delete_library(*id).await?,
    };
    output(&value, flags.format)
}
