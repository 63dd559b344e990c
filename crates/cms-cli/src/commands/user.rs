use cms_core::enums::UserRole;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::UserCommands;
use crate::context::AppContext;
use crate::output::output;

/// Handle `cms user`.
pub async fn handle(action: &UserCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        UserCommands::Create { username, role } => {
            let role = UserRole::parse(role)?;
            let user = ctx.service.create_user(username, role).await?;
            output(&user, flags.format)
        }
    }
}
