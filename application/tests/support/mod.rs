use std::collections::VecDeque;
use std::sync::{Mutex, PoisonError};
use std::time::Duration;

use domain::{
    canvas::Canvas,
    color::RgbColor,
    coords::{CanvasSize, PixelCoord},
    quota::RateQuota,
};
use pixels_desk_application::error::AppResult;
use pixels_desk_application::ports::outgoing::canvas_api::CanvasApiPort;

pub const SIZE: CanvasSize = CanvasSize {
    width: 4,
    height: 3,
};

pub fn generous_quota() -> RateQuota {
    RateQuota::new(10, 10, Duration::from_secs(60))
}

/// Scripted stand-in for the REST adapter. Each queue holds the responses
/// for successive calls; an empty queue falls back to a generous default.
#[derive(Default)]
pub struct ScriptedApi {
    pub read_quotas: Mutex<VecDeque<AppResult<RateQuota>>>,
    pub write_quotas: Mutex<VecDeque<AppResult<RateQuota>>>,
    pub fetch_results: Mutex<VecDeque<AppResult<Canvas>>>,
    pub set_pixel_results: Mutex<VecDeque<AppResult<()>>>,
    pub set_pixel_calls: Mutex<Vec<(PixelCoord, RgbColor)>>,
    pub fetch_calls: Mutex<usize>,
}

impl ScriptedApi {
    pub fn script_write_quota(&self, result: AppResult<RateQuota>) {
        self.write_quotas
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push_back(result);
    }

    pub fn script_read_quota(&self, result: AppResult<RateQuota>) {
        self.read_quotas
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push_back(result);
    }

    pub fn script_fetch(&self, result: AppResult<Canvas>) {
        self.fetch_results
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push_back(result);
    }

    pub fn script_set_pixel(&self, result: AppResult<()>) {
        self.set_pixel_results
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push_back(result);
    }

    pub fn set_pixel_calls(&self) -> Vec<(PixelCoord, RgbColor)> {
        self.set_pixel_calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn fetch_calls(&self) -> usize {
        *self.fetch_calls.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait::async_trait]
impl CanvasApiPort for ScriptedApi {
    async fn canvas_size(&self) -> AppResult<CanvasSize> {
        Ok(SIZE)
    }

    async fn fetch_canvas(&self, size: CanvasSize) -> AppResult<Canvas> {
        *self.fetch_calls.lock().unwrap_or_else(PoisonError::into_inner) += 1;
        self.fetch_results
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .pop_front()
            .unwrap_or_else(|| Ok(Canvas::blank(size)))
    }

    async fn set_pixel(&self, coord: PixelCoord, color: RgbColor) -> AppResult<()> {
        self.set_pixel_calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push((coord, color));
        self.set_pixel_results
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .pop_front()
            .unwrap_or(Ok(()))
    }

    async fn read_quota(&self) -> AppResult<RateQuota> {
        self.read_quotas
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .pop_front()
            .unwrap_or_else(|| Ok(generous_quota()))
    }

    async fn write_quota(&self) -> AppResult<RateQuota> {
        self.write_quotas
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .pop_front()
            .unwrap_or_else(|| Ok(generous_quota()))
    }
}
