use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::StudentCommands;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct Deleted {
    deleted: &'static str,
    id: i64,
}

/// Handle `cms student`.
pub async fn handle(action: &StudentCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        StudentCommands::List => {
            let overview = ctx.service.students_overview().await?;
            output(&overview, flags.format)
        }
        StudentCommands::Delete { id } => {
            ctx.service.delete_student(*id).await?;
            output(&Deleted { deleted: "student", id: *id }, flags.format)
        }
    }
}
