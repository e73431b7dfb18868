pub mod dashboard;
pub mod export;
pub mod feedback;
pub mod session;
pub mod youtube;

use serenity::builder::CreateApplicationCommands;
use serenity::model::application::interaction::application_command::{
    ApplicationCommandInteraction, CommandDataOption,
};
use serenity::model::application::interaction::InteractionResponseType;
use serenity::prelude::*;

use sentiment_board::Course;

pub fn register_all(commands: &mut CreateApplicationCommands) -> &mut CreateApplicationCommands {
    commands
        .create_application_command(|command| youtube::create_youtube_command(command))
        .create_application_command(|command| feedback::create_feedback_command(command))
        .create_application_command(|command| dashboard::create_dashboard_command(command))
        .create_application_command(|command| export::create_export_command(command))
        .create_application_command(|command| session::create_session_command(command))
}

pub fn option_str<'a>(options: &'a [CommandDataOption], name: &str) -> Option<&'a str> {
    options
        .iter()
        .find(|option| option.name == name)
        .and_then(|option| option.value.as_ref())
        .and_then(|value| value.as_str())
}

pub fn option_i64(options: &[CommandDataOption], name: &str) -> Option<i64> {
    options
        .iter()
        .find(|option| option.name == name)
        .and_then(|option| option.value.as_ref())
        .and_then(|value| value.as_i64())
}

/// Course choices shared by every command that takes a course.
pub fn add_course_choices(
    option: &mut serenity::builder::CreateApplicationCommandOption,
) -> &mut serenity::builder::CreateApplicationCommandOption {
    for course in Course::ALL {
        option.add_string_choice(course.as_str(), course.slug());
    }
    option
}

pub async fn respond(
    ctx: &Context,
    command: &ApplicationCommandInteraction,
    content: impl ToString,
    ephemeral: bool,
) -> Result<(), serenity::Error> {
    command
        .create_interaction_response(&ctx.http, |response| {
            response
                .kind(InteractionResponseType::ChannelMessageWithSource)
                .interaction_response_data(|message| message.content(content).ephemeral(ephemeral))
        })
        .await
}
