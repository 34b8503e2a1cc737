use ragkb_client::{CrawlRequest, ProcessOssDocumentRequest};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::{CrawlArgs, CrawlStatusArgs, ProcessOssArgs};
use crate::context::AppContext;
use crate::output::output;

/// Handle `ragkb crawl`.
pub async fn handle_crawl(
    args: &CrawlArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let value = ctx
        .client
        .crawl_site(&CrawlRequest {
            url: args.url.clone(),
            library_id: args.library_id,
            max_pages: args.max_pages,
        })
        .await?;
    output(&value, flags.format)
}

/// Handle `ragkb crawl-status`.
pub async fn handle_status(
    args: &CrawlStatusArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let value = ctx.client.crawl_status(&args.collection).await?;
    output(&value, flags.format)
}

/// Handle `ragkb process-oss`.
pub async fn handle_process_oss(
    args: &ProcessOssArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let value = ctx
        .client
        .process_oss_document(&ProcessOssDocumentRequest {
            oss_url: args.oss_url.clone(),
            collection_id: args.collection_id.clone(),
            document_name: args.document_name.clone(),
            library_id: args.library_id,
        })
        .await?;
    output(&value, flags.format)
}
