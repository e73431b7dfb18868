use chrono::{Duration, Utc};
use log::{debug, info};
use std::sync::Arc;
use std::time::Duration as StdDuration;
use tokio::time::interval;

use crate::AppState;

/// Ends channel sessions nobody has touched for the configured idle time.
pub async fn sweep_idle_sessions_task(state: Arc<AppState>) {
    let max_idle = Duration::minutes(state.config.session_idle_minutes);
    info!(
        "Starting background task to end sessions idle for more than {} minutes...",
        state.config.session_idle_minutes
    );
    let mut interval = interval(StdDuration::from_secs(state.config.session_sweep_seconds));

    loop {
        interval.tick().await; // Wait for the next interval tick
        let now = Utc::now();
        let ended = state.sessions.end_idle(now, max_idle).await;

        if ended.is_empty() {
            debug!("No idle sessions at {}", now.to_rfc3339());
            continue;
        }

        for (channel_id, session) in ended {
            info!(
                "Ended idle session {} for channel {} ({} feedback records, last active {})",
                session.id(),
                channel_id,
                session.store().len(),
                session.last_active().to_rfc3339()
            );
        }
    }
}
