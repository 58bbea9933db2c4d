use std::collections::VecDeque;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use tracing::{debug, info, instrument, warn};

use domain::{color::RgbColor, coords::PixelCoord, quota::RateQuota, write::PendingWrite};

use crate::{
    error::{AppError, AppResult},
    infrastructure_config::QueueConfig,
    ports::{
        incoming::placement::{
            FlushQueueUseCase, FlushReport, PlacePixelUseCase, QueueStatusUseCase,
        },
        outgoing::canvas_api::DynCanvasApiPort,
    },
};

/// Best-effort FIFO queue of pixel writes.
///
/// Entries are created on user click and removed only on a confirmed server
/// acknowledgement. A flush pass touches each entry at most once; entries
/// that keep failing are dropped after `max_attempts`.
pub struct WriteQueueService {
    api: DynCanvasApiPort,
    config: QueueConfig,
    queue: Mutex<VecDeque<PendingWrite>>,
    last_quota: Mutex<Option<RateQuota>>,
}

impl WriteQueueService {
    #[must_use]
    pub fn new(api: DynCanvasApiPort, config: QueueConfig) -> Arc<Self> {
        Arc::new(Self {
            api,
            config,
            queue: Mutex::new(VecDeque::new()),
            last_quota: Mutex::new(None),
        })
    }

    fn pop_front(&self) -> Option<PendingWrite> {
        self.queue
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .pop_front()
    }

    fn push_front(&self, write: PendingWrite) {
        self.queue
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push_front(write);
    }

    fn push_back(&self, write: PendingWrite) {
        self.queue
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push_back(write);
    }

    fn store_quota(&self, quota: RateQuota) {
        let mut guard = self
            .last_quota
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        *guard = Some(quota);
    }

    fn cooldown_duration(&self, retry_after_secs: u64) -> Duration {
        Duration::from_secs(self.config.cooldown_with_jitter(retry_after_secs))
    }
}

impl PlacePixelUseCase for WriteQueueService {
    fn enqueue_pixel(&self, coord: PixelCoord, color: RgbColor) {
        let write = PendingWrite::new(coord, color);
        debug!("Queued pixel write {write}");
        self.push_back(write);
    }
}

impl QueueStatusUseCase for WriteQueueService {
    fn pending_writes(&self) -> usize {
        self.queue
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    fn last_write_quota(&self) -> Option<RateQuota> {
        *self
            .last_quota
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait::async_trait]
impl FlushQueueUseCase for WriteQueueService {
    #[instrument(skip(self))]
    async fn flush_pending(&self) -> AppResult<FlushReport> {
        let mut report = FlushReport::default();

        // Bound the pass so re-queued failures are not retried twice in the
        // same iteration.
        let pass_budget = self.pending_writes();

        for _ in 0..pass_budget {
            let Some(mut write) = self.pop_front() else {
                break;
            };

            let quota = match self.api.write_quota().await {
                Ok(quota) => quota,
                Err(e) => {
                    self.push_front(write);
                    return Err(e);
                }
            };
            self.store_quota(quota);

            if !quota.has_headroom(self.config.write_reserve) {
                debug!("Stopping flush pass, write quota exhausted: {quota}");
                self.push_front(write);
                break;
            }

            match self.api.set_pixel(write.coord, write.color).await {
                Ok(()) => {
                    info!("Pixel write {write} acknowledged");
                    report.sent += 1;
                }
                Err(AppError::RateLimited { retry_after_secs }) => {
                    let cooldown = self.cooldown_duration(retry_after_secs);
                    info!(
                        "Cooldown of {retry_after_secs}s imposed, pausing flush for {}s",
                        cooldown.as_secs()
                    );
                    self.push_front(write);
                    report.cooldown = Some(cooldown);
                    break;
                }
                Err(e) => {
                    write.record_attempt();
                    if write.exhausted(self.config.max_attempts) {
                        warn!(
                            "Dropping pixel write {write} after {} attempts: {e}",
                            write.attempts()
                        );
                        report.dropped += 1;
                    } else {
                        warn!("Pixel write {write} failed, will retry: {e}");
                        self.push_back(write);
                    }
                }
            }
        }

        report.kept = self.pending_writes();
        Ok(report)
    }
}
