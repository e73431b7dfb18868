use serenity::builder::CreateApplicationCommand;
use serenity::model::application::command::CommandOptionType;
use serenity::model::application::interaction::application_command::ApplicationCommandInteraction;
use serenity::prelude::*;

use crate::commands::respond;
use crate::AppState;

pub fn create_session_command(command: &mut CreateApplicationCommand) -> &mut CreateApplicationCommand {
    command
        .name("session")
        .description("Inspect or restart this channel's feedback session")
        .create_option(|option| {
            option
                .name("info")
                .description("Show the current session")
                .kind(CommandOptionType::SubCommand)
        })
        .create_option(|option| {
            option
                .name("reset")
                .description("Start a new session, discarding collected feedback")
                .kind(CommandOptionType::SubCommand)
        })
}

pub async fn handle_session_command(
    state: &AppState,
    ctx: &Context,
    command: &ApplicationCommandInteraction,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let subcommand_name = match command.data.options.first() {
        Some(option) => option.name.as_str(),
        None => {
            respond(ctx, command, "No subcommand provided", true).await?;
            return Ok(());
        }
    };

    match subcommand_name {
        "info" => {
            let (id, started_at, records) = state
                .sessions
                .with_session(&command.channel_id, |session| {
                    (session.id(), session.started_at(), session.store().len())
                })
                .await;
            let content = format!(
                "**Session** `{}`\nStarted: {}\nFeedback records: {}",
                id,
                started_at.format("%Y-%m-%d %H:%M:%S UTC"),
                records
            );
            respond(ctx, command, content, true).await?;
        }
        "reset" => {
            let id = state.sessions.reset(&command.channel_id).await;
            respond(ctx, command, format!("Started a new session `{}`.", id), false).await?;
        }
        _ => {
            respond(ctx, command, "Unknown subcommand", true).await?;
        }
    }

    Ok(())
}
