use std::sync::Arc;
use std::time::Duration;

use tokio::time::{MissedTickBehavior, interval, sleep};
use tracing::{debug, warn};

use pixels_desk_application::canvas::service::CanvasSyncService;
use pixels_desk_application::ports::incoming::canvas::RefreshCanvasUseCase;
use pixels_desk_application::ports::incoming::placement::FlushQueueUseCase;
use pixels_desk_application::queue::service::WriteQueueService;

use super::state::AppState;

/// Starts the two periodic drivers: canvas refresh and queue flush. Both are
/// fire-and-forget for the lifetime of the runtime; the window closing tears
/// the runtime down with them.
pub fn spawn_background_loops(state: &AppState) {
    spawn_refresh_loop(
        Arc::clone(&state.sync_service),
        state.config.sync.refresh_interval_secs,
    );
    spawn_flush_loop(
        Arc::clone(&state.queue_service),
        state.config.queue.flush_interval_secs,
    );
}

fn spawn_refresh_loop(service: Arc<CanvasSyncService>, interval_secs: u64) {
    tokio::spawn(async move {
        let mut tick = interval(Duration::from_secs(interval_secs));
        tick.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            tick.tick().await;
            match service.refresh_canvas().await {
                Ok(outcome) => debug!("Canvas refresh pass: {outcome:?}"),
                Err(e) => warn!("Canvas refresh failed: {e}"),
            }
        }
    });
}

fn spawn_flush_loop(service: Arc<WriteQueueService>, interval_secs: u64) {
    tokio::spawn(async move {
        let mut tick = interval(Duration::from_secs(interval_secs));
        tick.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            tick.tick().await;
            match service.flush_pending().await {
                Ok(report) => {
                    if report.sent > 0 || report.dropped > 0 {
                        debug!(
                            "Flush pass: {} sent, {} kept, {} dropped",
                            report.sent, report.kept, report.dropped
                        );
                    }
                    if let Some(cooldown) = report.cooldown {
                        sleep(cooldown).await;
                    }
                }
                Err(e) => warn!("Queue flush failed: {e}"),
            }
        }
    });
}
