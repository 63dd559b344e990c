use cms_core::entities::NewLesson;
use cms_db::updates::lesson::LessonUpdateBuilder;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::LessonCommands;
use crate::context::AppContext;
use crate::output::output;

/// A lesson mutation result with its course's rolled-up duration.
#[derive(Debug, Serialize)]
struct LessonChange<'a> {
    action: &'static str,
    lesson: cms_core::entities::Lesson,
    course_id: i64,
    course_duration: u32,
    course_duration_formatted: &'a str,
}

/// Handle `cms lesson`.
pub async fn handle(action: &LessonCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let (verb, lesson) = match action {
        LessonCommands::Create {
            course,
            title,
            duration,
            description,
            video_url,
        } => {
            let input = NewLesson {
                course_id: *course,
                title: title.clone(),
                description: description.clone(),
                video_url: video_url.clone(),
                duration: *duration,
            };
            ("created", ctx.service.create_lesson(input).await?)
        }
        LessonCommands::Update {
            id,
            title,
            duration,
            description,
            video_url,
        } => {
            let mut builder = LessonUpdateBuilder::new();
            if let Some(title) = title {
                builder = builder.title(title);
            }
            if let Some(duration) = duration {
                builder = builder.duration(*duration);
            }
            if let Some(description) = description {
                builder = builder.description(Some(description.clone()));
            }
            if let Some(video_url) = video_url {
                builder = builder.video_url(Some(video_url.clone()));
            }
            ("updated", ctx.service.update_lesson(*id, builder.build()).await?)
        }
        LessonCommands::Delete { id } => ("deleted", ctx.service.delete_lesson(*id).await?),
    };

    let course = ctx.service.get_course(lesson.course_id).await?;
    let formatted = course.formatted_duration();
    output(
        &LessonChange {
            action: verb,
            course_id: course.id,
            course_duration: course.duration,
            course_duration_formatted: &formatted,
            lesson,
        },
        flags.format,
    )
}
