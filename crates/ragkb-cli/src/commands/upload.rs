use ragkb_client::UploadFile;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::{IngestArgs, UploadArgs, UploadUrlArgs};
use crate::context::AppContext;
use crate::output::output;

/// Handle `ragkb upload-url`.
pub async fn handle_upload_url(
    args: &UploadUrlArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let value = ctx.client.request_upload_url(&args.document_name).await?;
    output(&value, flags.format)
}

/// Handle `ragkb upload`.
pub async fn handle_upload(
    args: &UploadArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let mut file = UploadFile::from_path(&args.file).await?;
    if let Some(content_type) = &args.content_type {
        file = file.with_content_type(content_type.as_str());
    }
    tracing::info!(file = %file.file_name, bytes = file.bytes.len(), "uploading to object storage");
    let outcome = ctx.client.upload_to_object_storage(&args.url, file).await?;
    output(&outcome, flags.format)
}

/// Handle `ragkb ingest`.
pub async fn handle_ingest(
    args: &IngestArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let chunk_strategy = ctx.chunk_strategy(args.chunk_strategy)?;
    let file = UploadFile::from_path(&args.file).await?;
    let value = ctx
        .client
        .upload_local_file(file, &args.collection_id, args.library_id, Some(chunk_strategy))
        .await?;
    output(&value, flags.format)
}
