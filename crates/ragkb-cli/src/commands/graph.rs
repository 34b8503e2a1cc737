use crate::cli::GlobalFlags;
use crate::cli::root_commands::GraphArgs;
use crate::context::AppContext;
use crate::output::output;

/// Handle `ragkb graph`.
pub async fn handle(args: &GraphArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let label = ctx.graph_label(args.label.as_deref());
    let value = ctx
        .client
        .get_knowledge_graph(&args.collection_id, Some(label))
        .await?;
    output(&value, flags.format)
}
