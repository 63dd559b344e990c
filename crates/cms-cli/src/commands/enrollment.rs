use crate::cli::GlobalFlags;
use crate::cli::subcommands::EnrollmentCommands;
use crate::context::AppContext;
use crate::output::output;

/// Handle `cms enrollment`.
pub async fn handle(action: &EnrollmentCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        EnrollmentCommands::Create { user, course, status } => {
            let enrollment = ctx.service.create_enrollment(*user, *course, status).await?;
            output(&enrollment, flags.format)
        }
    }
}
