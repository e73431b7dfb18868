use log::warn;
use serenity::builder::CreateApplicationCommand;
use serenity::model::application::command::CommandOptionType;
use serenity::model::application::interaction::application_command::ApplicationCommandInteraction;
use serenity::prelude::*;

use sentiment_board::{feedback, report, Course, FeedbackForm};

use crate::commands::{add_course_choices, option_str, respond};
use crate::AppState;

pub fn create_feedback_command(command: &mut CreateApplicationCommand) -> &mut CreateApplicationCommand {
    command
        .name("feedback")
        .description("Submit student feedback for live sentiment analysis")
        .create_option(|option| {
            option
                .name("student_id")
                .description("Student ID (e.g., S101)")
                .kind(CommandOptionType::String)
                .required(true)
        })
        .create_option(|option| {
            add_course_choices(
                option
                    .name("course")
                    .description("Course name")
                    .kind(CommandOptionType::String)
                    .required(true),
            )
        })
        .create_option(|option| {
            option
                .name("text")
                .description("Detailed feedback / response")
                .kind(CommandOptionType::String)
                .required(true)
        })
}

pub async fn handle_feedback_command(
    state: &AppState,
    ctx: &Context,
    command: &ApplicationCommandInteraction,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let options = &command.data.options;
    let course = match option_str(options, "course").unwrap_or_default().parse::<Course>() {
        Ok(course) => course,
        Err(e) => {
            warn!("Rejected feedback with bad course: {}", e);
            respond(ctx, command, format!("Input Error: {}", e), true).await?;
            return Ok(());
        }
    };

    let form = FeedbackForm::new(
        option_str(options, "student_id").unwrap_or_default(),
        course,
        option_str(options, "text").unwrap_or_default(),
    );

    let scorer = state.scorer.as_ref();
    let outcome = state
        .sessions
        .with_session(&command.channel_id, |session| {
            feedback::submit(session.store_mut(), scorer, form).map(report::submission_report)
        })
        .await;

    match outcome {
        Ok(content) => respond(ctx, command, content, false).await?,
        Err(e) => {
            warn!("Rejected feedback in channel {}: {}", command.channel_id, e);
            respond(ctx, command, e, true).await?;
        }
    }

    Ok(())
}
