use std::time::Duration;

use tokio::time::{interval, MissedTickBehavior};

use crate::use_cases::lightbox::LightboxSessions;

/// Periodically closes lightboxes nobody has touched for `ttl`.
pub async fn start_session_purge_task(sessions: LightboxSessions, every: Duration, ttl: Duration) {
    let mut interval = interval(every);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        interval.tick().await;

        let purged = sessions.purge_idle(ttl);
        if purged > 0 {
            tracing::info!("Purged {} idle lightbox sessions", purged);
        }
    }
}
