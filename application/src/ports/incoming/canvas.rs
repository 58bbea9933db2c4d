use std::sync::Arc;

use domain::{canvas::Canvas, quota::RateQuota};

use crate::error::AppResult;

/// Immutable view of the last fetched canvas. The generation counter bumps
/// on every wholesale replacement so the UI knows when to re-upload its
/// texture.
#[derive(Clone)]
pub struct CanvasSnapshot {
    pub canvas: Arc<Canvas>,
    pub generation: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshOutcome {
    Refreshed,
    SkippedQuota,
    SkippedUnavailable,
}

/// Read side consumed by the UI thread every frame.
pub trait CanvasQueryUseCase: Send + Sync {
    fn snapshot(&self) -> Option<CanvasSnapshot>;
    fn last_read_quota(&self) -> Option<RateQuota>;
}

/// Drive side consumed by the periodic refresh loop.
#[async_trait::async_trait]
pub trait RefreshCanvasUseCase: Send + Sync {
    async fn refresh_canvas(&self) -> AppResult<RefreshOutcome>;
}
