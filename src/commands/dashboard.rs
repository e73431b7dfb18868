use log::{info, warn};
use serenity::builder::CreateApplicationCommand;
use serenity::model::application::command::CommandOptionType;
use serenity::model::application::interaction::application_command::ApplicationCommandInteraction;
use serenity::model::application::interaction::message_component::MessageComponentInteraction;
use serenity::model::application::interaction::InteractionResponseType;
use serenity::prelude::*;

use sentiment_board::report::{self, MESSAGE_LIMIT};
use sentiment_board::Course;

use crate::commands::{add_course_choices, option_str, respond};
use crate::AppState;

pub const COURSE_SELECT_ID: &str = "dashboard_course";

pub fn create_dashboard_command(command: &mut CreateApplicationCommand) -> &mut CreateApplicationCommand {
    command
        .name("dashboard")
        .description("Aggregate view of the feedback submitted in this channel's session")
        .create_option(|option| {
            add_course_choices(
                option
                    .name("course")
                    .description("Show the detailed breakdown for one course")
                    .kind(CommandOptionType::String)
                    .required(false),
            )
        })
}

pub async fn handle_dashboard_command(
    state: &AppState,
    ctx: &Context,
    command: &ApplicationCommandInteraction,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let course = match option_str(&command.data.options, "course").map(str::parse::<Course>) {
        None => None,
        Some(Ok(course)) => Some(course),
        Some(Err(e)) => {
            warn!("Dashboard requested for unknown course: {}", e);
            respond(ctx, command, format!("Input Error: {}", e), true).await?;
            return Ok(());
        }
    };

    let (overview, detail, courses) = state
        .sessions
        .with_session(&command.channel_id, |session| {
            let store = session.store();
            let view = store.aggregate();
            let detail = course.map(|c| report::course_report(c, &store.filter_by_course(c)));
            (report::dashboard_report(&view), detail, view.courses)
        })
        .await;

    info!(
        "Dashboard for channel {} covering {} course(s)",
        command.channel_id,
        courses.len()
    );

    let content = match detail {
        Some(detail) => report::truncate(&format!("{}\n\n{}", overview, detail), MESSAGE_LIMIT),
        None => overview,
    };

    command
        .create_interaction_response(&ctx.http, |response| {
            response
                .kind(InteractionResponseType::ChannelMessageWithSource)
                .interaction_response_data(|message| {
                    message.content(content);
                    if !courses.is_empty() {
                        message.components(|c| {
                            c.create_action_row(|row| {
                                row.create_select_menu(|menu| {
                                    menu.custom_id(COURSE_SELECT_ID)
                                        .placeholder("Select a Course for Detailed Review")
                                        .options(|opts| {
                                            for course in &courses {
                                                opts.create_option(|opt| {
                                                    opt.label(course.as_str()).value(course.slug())
                                                });
                                            }
                                            opts
                                        })
                                })
                            })
                        });
                    }
                    message
                })
        })
        .await?;

    Ok(())
}

/// A pick from the dashboard's course menu.
pub async fn handle_course_select(
    state: &AppState,
    ctx: &Context,
    component: &MessageComponentInteraction,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let selected = component.data.values.first().map(|value| value.parse::<Course>());

    let content = match selected {
        Some(Ok(course)) => {
            state
                .sessions
                .with_session(&component.channel_id, |session| {
                    report::course_report(course, &session.store().filter_by_course(course))
                })
                .await
        }
        Some(Err(e)) => {
            warn!("Course menu sent an unknown value: {}", e);
            format!("Input Error: {}", e)
        }
        None => "No course was selected.".to_string(),
    };

    component
        .create_interaction_response(&ctx.http, |response| {
            response
                .kind(InteractionResponseType::ChannelMessageWithSource)
                .interaction_response_data(|message| message.content(content).ephemeral(true))
        })
        .await?;

    Ok(())
}
