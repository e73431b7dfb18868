mod commands;
mod handlers;
mod tasks; // Background session sweeper

use log::{error, info};
use serenity::async_trait;
use serenity::model::application::command::Command;
use serenity::model::application::interaction::Interaction;
use serenity::model::gateway::Ready;
use serenity::model::id::ChannelId;
use serenity::prelude::*;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use sentiment_board::config::Config;
use sentiment_board::session::SessionRegistry;
use sentiment_board::youtube::{CommentSource, YouTubeClient};
use sentiment_board::{BatchSentimentAnalyzer, LexiconScorer, TextPolarityScorer};

/// Shared by every handler; one feedback session per channel.
pub struct AppState {
    pub config: Config,
    pub sessions: SessionRegistry<ChannelId>,
    pub scorer: Arc<dyn TextPolarityScorer>,
    pub analyzer: BatchSentimentAnalyzer<Arc<dyn TextPolarityScorer>>,
    pub comments: Arc<dyn CommentSource>,
}

struct Bot {
    state: Arc<AppState>,
    sweeper_started: AtomicBool,
}

#[async_trait]
impl EventHandler for Bot {
    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        // Clone Arc for the handler
        let state = Arc::clone(&self.state);

        // Spawn a task to handle the interaction concurrently
        tokio::spawn(async move {
            handlers::handle_interaction(&state, &ctx, interaction).await;
        });
    }

    async fn ready(&self, ctx: Context, ready: Ready) {
        info!("{} is connected!", ready.user.name);

        // Register slash commands globally
        let registered = Command::set_global_application_commands(&ctx.http, |commands_builder| {
            commands::register_all(commands_builder)
        })
        .await;

        match registered {
            Ok(registered_commands) => info!(
                "Successfully registered {} global slash commands.",
                registered_commands.len()
            ),
            Err(why) => error!("Failed to register slash commands: {:?}", why),
        }

        // --- Start Background Task for Ending Idle Sessions ---
        // ready fires again after reconnects; only one sweeper should run
        if !self.sweeper_started.swap(true, Ordering::SeqCst) {
            let state = Arc::clone(&self.state);
            tokio::spawn(async move {
                tasks::session_sweeper::sweep_idle_sessions_task(state).await;
            });
        }
        // --- End Background Task ---
    }
}

#[tokio::main]
async fn main() {
    // Initialize logging
    dotenvy::dotenv().ok();
    env_logger::init();

    // Load token, API key and session settings from the environment
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("Invalid configuration: {}", e);
            return;
        }
    };

    // Comment source for /youtube
    let youtube = match YouTubeClient::new(config.youtube_api_key.clone()) {
        Ok(client) => client,
        Err(e) => {
            error!("Failed to create YouTube client: {}", e);
            return;
        }
    };

    // One scorer shared by comment batches and feedback submissions
    let scorer: Arc<dyn TextPolarityScorer> = Arc::new(LexiconScorer::new());
    let token = config.discord_token.clone();
    let state = Arc::new(AppState {
        analyzer: BatchSentimentAnalyzer::new(Arc::clone(&scorer)),
        scorer,
        sessions: SessionRegistry::new(),
        comments: Arc::new(youtube),
        config,
    });

    // Slash commands need no privileged intents
    let intents = GatewayIntents::GUILDS;

    // Build client
    let mut client = match Client::builder(&token, intents)
        .event_handler(Bot {
            state,
            sweeper_started: AtomicBool::new(false),
        })
        .await
    {
        Ok(client) => client,
        Err(why) => {
            error!("Error creating client: {:?}", why);
            return;
        }
    };

    // Start client
    if let Err(why) = client.start().await {
        error!("Client error: {:?}", why);
    }
}
