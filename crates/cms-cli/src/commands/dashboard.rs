use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

/// Handle `cms dashboard`.
pub async fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    tracing::debug!(
        recent_courses = ctx.config.dashboard.recent_courses,
        top_students = ctx.config.dashboard.top_students,
        "building dashboard"
    );
    let summary = ctx.service.dashboard_summary().await?;
    output(&summary, flags.format)
}
