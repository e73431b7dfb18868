use log::{error, info, warn};
use serenity::model::application::interaction::application_command::ApplicationCommandInteraction;
use serenity::model::application::interaction::message_component::MessageComponentInteraction;
use serenity::model::application::interaction::{Interaction, InteractionResponseType};
use serenity::prelude::*;

use crate::commands;
use crate::AppState;

// Handle slash commands
pub async fn handle_command(
    state: &AppState,
    ctx: &Context,
    command: &ApplicationCommandInteraction,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    info!("Received command: {} in channel {}", command.data.name, command.channel_id);
    // Each command works on the session of the channel it was used in
    match command.data.name.as_str() {
        "youtube" => commands::youtube::handle_youtube_command(state, ctx, command).await?,
        "feedback" => commands::feedback::handle_feedback_command(state, ctx, command).await?,
        "dashboard" => commands::dashboard::handle_dashboard_command(state, ctx, command).await?,
        "export" => commands::export::handle_export_command(state, ctx, command).await?,
        "session" => commands::session::handle_session_command(state, ctx, command).await?,
        _ => {
            // Respond with an error for unknown commands
            warn!("Unknown command: {}", command.data.name);
            commands::respond(ctx, command, "Unknown command", true).await?;
        }
    }
    Ok(())
}

// Main component handler that routes on the component's custom_id
pub async fn handle_component(
    state: &AppState,
    ctx: &Context,
    component: &MessageComponentInteraction,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let custom_id = component.data.custom_id.as_str();
    info!("Received component interaction: {}", custom_id); // Log component clicks

    // The dashboard's course picker is the only component we send
    if custom_id == commands::dashboard::COURSE_SELECT_ID {
        commands::dashboard::handle_course_select(state, ctx, component).await?;
    } else {
        // Stale or foreign components get a quiet ephemeral notice
        warn!("Unhandled component custom_id: {}", custom_id);
        component
            .create_interaction_response(&ctx.http, |response| {
                response
                    .kind(InteractionResponseType::ChannelMessageWithSource)
                    .interaction_response_data(|message| message.content("Unknown action.").ephemeral(true))
            })
            .await?;
    }

    Ok(())
}

// Entry point for every interaction; errors are logged, never surfaced
pub async fn handle_interaction(state: &AppState, ctx: &Context, interaction: Interaction) {
    let result = match interaction {
        Interaction::ApplicationCommand(command) => handle_command(state, ctx, &command).await,
        Interaction::MessageComponent(component) => handle_component(state, ctx, &component).await,
        _ => {
            // Autocomplete and modals are not used
            warn!("Unhandled interaction type: {:?}", interaction.kind());
            Ok(())
        }
    };

    if let Err(why) = result {
        error!("Interaction handler error: {:?}", why);
    }
}
