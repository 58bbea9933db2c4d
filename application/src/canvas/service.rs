use std::sync::{
    Arc, PoisonError, RwLock,
    atomic::{AtomicU64, Ordering},
};

use tracing::{debug, info, instrument};

use domain::{canvas::Canvas, coords::CanvasSize, quota::RateQuota};

use crate::{
    error::{AppError, AppResult},
    infrastructure_config::SyncConfig,
    ports::{
        incoming::canvas::{CanvasQueryUseCase, CanvasSnapshot, RefreshCanvasUseCase, RefreshOutcome},
        outgoing::canvas_api::DynCanvasApiPort,
    },
};

/// Keeps the in-memory canvas in sync with the service.
///
/// Every successful fetch replaces the snapshot wholesale; there is no
/// diffing. Canvas dimensions are fixed at construction for the session.
pub struct CanvasSyncService {
    api: DynCanvasApiPort,
    size: CanvasSize,
    read_reserve: u32,
    snapshot: RwLock<Option<Arc<Canvas>>>,
    generation: AtomicU64,
    last_quota: RwLock<Option<RateQuota>>,
}

impl CanvasSyncService {
    #[must_use]
    pub fn new(api: DynCanvasApiPort, size: CanvasSize, config: &SyncConfig) -> Arc<Self> {
        Arc::new(Self {
            api,
            size,
            read_reserve: config.read_reserve,
            snapshot: RwLock::new(None),
            generation: AtomicU64::new(0),
            last_quota: RwLock::new(None),
        })
    }

    fn publish(&self, canvas: Canvas) {
        let mut guard = self
            .snapshot
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        *guard = Some(Arc::new(canvas));
        self.generation.fetch_add(1, Ordering::Release);
    }

    fn store_quota(&self, quota: RateQuota) {
        let mut guard = self
            .last_quota
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        *guard = Some(quota);
    }

    fn has_snapshot(&self) -> bool {
        self.snapshot
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }
}

impl CanvasQueryUseCase for CanvasSyncService {
    fn snapshot(&self) -> Option<CanvasSnapshot> {
        let guard = self.snapshot.read().unwrap_or_else(PoisonError::into_inner);
        guard.as_ref().map(|canvas| CanvasSnapshot {
            canvas: Arc::clone(canvas),
            generation: self.generation.load(Ordering::Acquire),
        })
    }

    fn last_read_quota(&self) -> Option<RateQuota> {
        *self
            .last_quota
            .read()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait::async_trait]
impl RefreshCanvasUseCase for CanvasSyncService {
    #[instrument(skip(self))]
    async fn refresh_canvas(&self) -> AppResult<RefreshOutcome> {
        let quota = self.api.read_quota().await?;
        self.store_quota(quota);

        if !quota.has_headroom(self.read_reserve) {
            debug!("Skipping canvas refresh, read quota exhausted: {quota}");
            return Ok(RefreshOutcome::SkippedQuota);
        }

        match self.api.fetch_canvas(self.size).await {
            Ok(canvas) => {
                self.publish(canvas);
                debug!("Canvas snapshot replaced ({})", self.size);
                Ok(RefreshOutcome::Refreshed)
            }
            Err(AppError::ServiceUnavailable) => {
                if !self.has_snapshot() {
                    self.publish(Canvas::blank(self.size));
                }
                info!("Get canvas endpoint is currently down");
                Ok(RefreshOutcome::SkippedUnavailable)
            }
            Err(e) => Err(e),
        }
    }
}
