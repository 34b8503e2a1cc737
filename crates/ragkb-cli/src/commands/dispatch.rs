use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;
use crate::output::output;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(command: Commands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Library { action } => commands::library::handle(&action, ctx, flags).await,
        Commands::Document { action } => commands::document::handle(&action, ctx, flags).await,
        Commands::UploadUrl(args) => commands::upload::handle_upload_url(&args, ctx, flags).await,
        Commands::Upload(args) => commands::upload::handle_upload(&args, ctx, flags).await,
        Commands::Ingest(args) => commands::upload::handle_ingest(&args, ctx, flags).await,
        Commands::Crawl(args) => commands::crawl::handle_crawl(&args, ctx, flags).await,
        Commands::CrawlStatus(args) => commands::crawl::handle_status(&args, ctx, flags).await,
        Commands::ProcessOss(args) => commands::crawl::handle_process_oss(&args, ctx, flags).await,
        Commands::Graph(args) => commands::graph::handle(&args, ctx, flags).await,
        Commands::Health => output(&ctx.client.health().await?, flags.format),
    }
}
