use crate::cli::GlobalFlags;
use crate::cli::subcommands::ReviewCommands;
use crate::context::AppContext;
use crate::output::output;

/// Handle `cms review`.
pub async fn handle(action: &ReviewCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        ReviewCommands::List => {
            let overview = ctx.service.review_overview().await?;
            output(&overview, flags.format)
        }
        ReviewCommands::Create { course, rating, body } => {
            let review = ctx.service.create_review(*course, *rating, body).await?;
            output(&review, flags.format)
        }
    }
}
