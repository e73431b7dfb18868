use log::info;
use serenity::builder::CreateApplicationCommand;
use serenity::model::application::interaction::application_command::ApplicationCommandInteraction;
use serenity::model::application::interaction::InteractionResponseType;
use serenity::model::channel::AttachmentType;
use serenity::prelude::*;
use std::borrow::Cow;

use sentiment_board::store::export::{to_csv, EXPORT_FILE_NAME};

use crate::commands::respond;
use crate::AppState;

pub fn create_export_command(command: &mut CreateApplicationCommand) -> &mut CreateApplicationCommand {
    command
        .name("export")
        .description("Download all feedback from this channel's session as CSV")
}

pub async fn handle_export_command(
    state: &AppState,
    ctx: &Context,
    command: &ApplicationCommandInteraction,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let (csv, records) = state
        .sessions
        .with_session(&command.channel_id, |session| {
            (to_csv(session.store()), session.store().len())
        })
        .await;
    let csv = csv?;

    if records == 0 {
        respond(ctx, command, "There is no feedback to export yet.", true).await?;
        return Ok(());
    }

    info!("Exporting {} records from channel {}", records, command.channel_id);
    command
        .create_interaction_response(&ctx.http, |response| {
            response
                .kind(InteractionResponseType::ChannelMessageWithSource)
                .interaction_response_data(|message| {
                    message
                        .content(format!("Exported {} feedback records.", records))
                        .add_file(AttachmentType::Bytes {
                            data: Cow::Owned(csv),
                            filename: EXPORT_FILE_NAME.to_string(),
                        })
                })
        })
        .await?;

    Ok(())
}
