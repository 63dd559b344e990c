use cms_core::entities::{Course, NewCourse};
use cms_db::updates::course::CourseUpdateBuilder;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::CourseCommands;
use crate::context::AppContext;
use crate::output::output;

/// Course listing row.
#[derive(Debug, Serialize)]
struct CourseRow {
    #[serde(flatten)]
    course: Course,
    enrollment_count: usize,
    formatted_duration: String,
    formatted_created_at: String,
}

/// Rendered in place of a course detail when the id does not exist.
#[derive(Debug, Serialize)]
struct CourseNotFound {
    error: String,
    course_id: i64,
}

#[derive(Debug, Serialize)]
struct Deleted {
    deleted: &'static str,
    id: i64,
}

/// Handle `cms course`.
pub async fn handle(action: &CourseCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        CourseCommands::List => list(ctx, flags).await,
        CourseCommands::Get { id } => get(*id, ctx, flags).await,
        CourseCommands::Create {
            name,
            category,
            skill_level,
            duration,
            status,
            description,
            image,
        } => {
            let input = NewCourse {
                name: name.clone(),
                description: description.clone(),
                category: category.clone(),
                skill_level: skill_level.clone(),
                status: status.clone(),
                duration: *duration,
                image: image.clone(),
            };
            let course = ctx.service.create_course(input).await?;
            output(&course, flags.format)
        }
        CourseCommands::Update {
            id,
            name,
            category,
            skill_level,
            duration,
            description,
            image,
        } => {
            let mut builder = CourseUpdateBuilder::new();
            if let Some(name) = name {
                builder = builder.name(name);
            }
            if let Some(category) = category {
                builder = builder.category(category);
            }
            if let Some(skill_level) = skill_level {
                builder = builder.skill_level(skill_level);
            }
            if let Some(duration) = duration {
                builder = builder.duration(*duration);
            }
            if let Some(description) = description {
                builder = builder.description(Some(description.clone()));
            }
            if let Some(image) = image {
                builder = builder.image(Some(image.clone()));
            }
            let course = ctx.service.update_course(*id, builder.build()).await?;
            output(&course, flags.format)
        }
        CourseCommands::ToggleStatus { id } => {
            let course = ctx.service.toggle_course_status(*id).await?;
            output(&course, flags.format)
        }
        CourseCommands::Delete { id } => {
            ctx.service.delete_course(*id).await?;
            output(&Deleted { deleted: "course", id: *id }, flags.format)
        }
    }
}

async fn list(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let counts = ctx.service.course_enrollment_counts().await?;
    let rows = ctx
        .service
        .list_courses()
        .await?
        .into_iter()
        .map(|course| {
            let enrollment_count = counts.get(&course.id).copied().unwrap_or(0);
            course_row(course, enrollment_count)
        })
        .collect::<Vec<_>>();
    output(&rows, flags.format)
}

fn course_row(course: Course, enrollment_count: usize) -> CourseRow {
    CourseRow {
        formatted_duration: course.formatted_duration(),
        formatted_created_at: course.formatted_created_at(),
        enrollment_count,
        course,
    }
}

async fn get(id: i64, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match ctx.service.course_detail(id).await {
        Ok(detail) => output(&detail, flags.format),
        Err(error) if error.is_not_found() => output(
            &CourseNotFound {
                error: error.to_string(),
                course_id: id,
            },
            flags.format,
        ),
        Err(error) => Err(error.into()),
    }
}
