use std::sync::Arc;

use domain::{
    canvas::Canvas,
    color::RgbColor,
    coords::{CanvasSize, PixelCoord},
    quota::RateQuota,
};

use crate::error::AppResult;

/// Outgoing port for the remote Pixels REST API.
///
/// `read_quota` / `write_quota` probe the rate-limit headers without
/// consuming a canvas fetch or a pixel write (HEAD requests on the wire).
#[async_trait::async_trait]
pub trait CanvasApiPort: Send + Sync {
    async fn canvas_size(&self) -> AppResult<CanvasSize>;

    /// Fails with `AppError::ServiceUnavailable` when the service reports
    /// the pixel endpoint as down instead of returning image bytes.
    async fn fetch_canvas(&self, size: CanvasSize) -> AppResult<Canvas>;

    /// Fails with `AppError::RateLimited` when the service answers 429.
    async fn set_pixel(&self, coord: PixelCoord, color: RgbColor) -> AppResult<()>;

    async fn read_quota(&self) -> AppResult<RateQuota>;
    async fn write_quota(&self) -> AppResult<RateQuota>;
}

pub type DynCanvasApiPort = Arc<dyn CanvasApiPort>;
