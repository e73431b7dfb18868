use log::{info, warn};
use serenity::builder::CreateApplicationCommand;
use serenity::model::application::command::CommandOptionType;
use serenity::model::application::interaction::application_command::ApplicationCommandInteraction;
use serenity::model::application::interaction::InteractionResponseType;
use serenity::prelude::*;

use sentiment_board::config::{MAX_COMMENTS, MIN_COMMENTS};
use sentiment_board::report;
use sentiment_board::youtube::{analyze_video, extract_video_id};
use sentiment_board::AppError;

use crate::commands::{option_i64, option_str, respond};
use crate::AppState;

pub fn create_youtube_command(command: &mut CreateApplicationCommand) -> &mut CreateApplicationCommand {
    command
        .name("youtube")
        .description("Analyze the sentiment of a video's latest comments")
        .create_option(|option| {
            option
                .name("url")
                .description("YouTube video link or 11-character video ID")
                .kind(CommandOptionType::String)
                .required(true)
        })
        .create_option(|option| {
            option
                .name("max_comments")
                .description("Max comments to analyze")
                .kind(CommandOptionType::Integer)
                .min_int_value(MIN_COMMENTS)
                .max_int_value(MAX_COMMENTS)
                .required(false)
        })
}

pub async fn handle_youtube_command(
    state: &AppState,
    ctx: &Context,
    command: &ApplicationCommandInteraction,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let url = option_str(&command.data.options, "url").unwrap_or_default();
    let max_comments = option_i64(&command.data.options, "max_comments")
        .map(|n| n.clamp(MIN_COMMENTS as i64, MAX_COMMENTS as i64) as u32)
        .unwrap_or(state.config.default_max_comments);

    // Bad links are rejected before anything is posted to the channel
    if let Err(e) = extract_video_id(url) {
        warn!("Rejected YouTube link '{}': {}", url, e);
        respond(ctx, command, AppError::from(e).user_message(), true).await?;
        return Ok(());
    }

    // Fetching can outlast the interaction deadline, so acknowledge first
    command
        .create_interaction_response(&ctx.http, |response| {
            response.kind(InteractionResponseType::DeferredChannelMessageWithSource)
        })
        .await?;

    match analyze_video(state.comments.as_ref(), &state.analyzer, url, max_comments).await {
        Ok(video) => {
            info!(
                "Analyzed {} comments for video {} in channel {}",
                video.analysis.total(),
                video.video_id,
                command.channel_id
            );
            let content = report::batch_report(&video);
            command
                .edit_original_interaction_response(&ctx.http, |response| response.content(content))
                .await?;
        }
        Err(e) => {
            warn!("YouTube analysis for '{}' failed: {}", url, e);
            // Only the caller sees the error; the public placeholder goes away
            command
                .create_followup_message(&ctx.http, |message| {
                    message.content(e.user_message()).ephemeral(true)
                })
                .await?;
            command.delete_original_interaction_response(&ctx.http).await?;
        }
    }

    Ok(())
}
