use std::time::Duration;

use domain::{color::RgbColor, coords::PixelCoord, quota::RateQuota};

use crate::error::AppResult;

/// Result of one queue flush pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FlushReport {
    pub sent: usize,
    pub kept: usize,
    pub dropped: usize,
    /// Set when the service answered 429; the caller should sleep this long
    /// before the next pass.
    pub cooldown: Option<Duration>,
}

/// Enqueue side, called from the UI thread on a confirmed color pick.
pub trait PlacePixelUseCase: Send + Sync {
    fn enqueue_pixel(&self, coord: PixelCoord, color: RgbColor);
}

/// Queue introspection for the status strip.
pub trait QueueStatusUseCase: Send + Sync {
    fn pending_writes(&self) -> usize;
    fn last_write_quota(&self) -> Option<RateQuota>;
}

/// Drive side consumed by the periodic flush loop.
#[async_trait::async_trait]
pub trait FlushQueueUseCase: Send + Sync {
    async fn flush_pending(&self) -> AppResult<FlushReport>;
}
