use crate::cli::GlobalFlags;
use crate::cli::subcommands::CategoryCommands;
use crate::context::AppContext;
use crate::output::output;

/// Handle `cms category`.
pub async fn handle(action: &CategoryCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        CategoryCommands::List => {
            let breakdown = ctx.service.category_breakdown().await?;
            output(&breakdown, flags.format)
        }
        CategoryCommands::Get { slug } => {
            let detail = ctx.service.category_detail(slug).await?;
            output(&detail, flags.format)
        }
    }
}
