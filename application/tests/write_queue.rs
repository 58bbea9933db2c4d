mod support;

use std::sync::Arc;
use std::time::Duration;

use domain::{color::RgbColor, coords::PixelCoord, quota::RateQuota};
use pixels_desk_application::error::AppError;
use pixels_desk_application::infrastructure_config::QueueConfig;
use pixels_desk_application::ports::incoming::placement::{
    FlushQueueUseCase, PlacePixelUseCase, QueueStatusUseCase,
};
use pixels_desk_application::ports::outgoing::canvas_api::DynCanvasApiPort;
use pixels_desk_application::queue::service::WriteQueueService;

use support::ScriptedApi;

fn test_config() -> QueueConfig {
    QueueConfig {
        flush_interval_secs: 1,
        write_reserve: 1,
        max_attempts: 3,
        cooldown_jitter_min_percent: 10,
        cooldown_jitter_max_percent: 20,
    }
}

fn service_with(api: &Arc<ScriptedApi>, config: QueueConfig) -> Arc<WriteQueueService> {
    let port: DynCanvasApiPort = Arc::clone(api) as DynCanvasApiPort;
    WriteQueueService::new(port, config)
}

#[tokio::test]
async fn acknowledged_writes_leave_the_queue_in_order() {
    let api = Arc::new(ScriptedApi::default());
    let service = service_with(&api, test_config());

    service.enqueue_pixel(PixelCoord::new(1, 2), RgbColor::new(255, 0, 0));
    service.enqueue_pixel(PixelCoord::new(3, 0), RgbColor::new(0, 255, 0));

    let report = service.flush_pending().await.ok();
    assert_eq!(report.map(|r| (r.sent, r.kept, r.dropped)), Some((2, 0, 0)));
    assert_eq!(service.pending_writes(), 0);

    let calls = api.set_pixel_calls();
    assert_eq!(
        calls,
        vec![
            (PixelCoord::new(1, 2), RgbColor::new(255, 0, 0)),
            (PixelCoord::new(3, 0), RgbColor::new(0, 255, 0)),
        ]
    );
}

#[tokio::test]
async fn failed_writes_stay_queued_for_the_next_pass() {
    let api = Arc::new(ScriptedApi::default());
    api.script_set_pixel(Err(AppError::ApiError {
        message: "500".to_string(),
    }));
    let service = service_with(&api, test_config());

    service.enqueue_pixel(PixelCoord::new(0, 0), RgbColor::BLACK);

    let report = service.flush_pending().await.ok();
    assert_eq!(report.map(|r| (r.sent, r.kept, r.dropped)), Some((0, 1, 0)));
    assert_eq!(service.pending_writes(), 1);
}

#[tokio::test]
async fn a_failed_write_is_not_retried_within_the_same_pass() {
    let api = Arc::new(ScriptedApi::default());
    api.script_set_pixel(Err(AppError::ApiError {
        message: "500".to_string(),
    }));
    let service = service_with(&api, test_config());

    service.enqueue_pixel(PixelCoord::new(0, 0), RgbColor::BLACK);

    let _ = service.flush_pending().await;
    assert_eq!(api.set_pixel_calls().len(), 1);
}

#[tokio::test]
async fn exhausted_quota_stops_the_pass_without_writing() {
    let api = Arc::new(ScriptedApi::default());
    // remaining == reserve, so no headroom
    api.script_write_quota(Ok(RateQuota::new(10, 1, Duration::from_secs(30))));
    let service = service_with(&api, test_config());

    service.enqueue_pixel(PixelCoord::new(0, 0), RgbColor::BLACK);
    service.enqueue_pixel(PixelCoord::new(1, 0), RgbColor::BLACK);

    let report = service.flush_pending().await.ok();
    assert!(api.set_pixel_calls().is_empty());
    assert_eq!(report.map(|r| (r.sent, r.kept)), Some((0, 2)));
    assert_eq!(service.pending_writes(), 2);
}

#[tokio::test]
async fn writes_are_dropped_after_max_attempts() {
    let api = Arc::new(ScriptedApi::default());
    api.script_set_pixel(Err(AppError::ApiError {
        message: "422".to_string(),
    }));
    let mut config = test_config();
    config.max_attempts = 1;
    let service = service_with(&api, config);

    service.enqueue_pixel(PixelCoord::new(0, 0), RgbColor::BLACK);

    let report = service.flush_pending().await.ok();
    assert_eq!(report.map(|r| (r.dropped, r.kept)), Some((1, 0)));
    assert_eq!(service.pending_writes(), 0);
}

#[tokio::test]
async fn a_cooldown_aborts_the_pass_and_reports_a_jittered_wait() {
    let api = Arc::new(ScriptedApi::default());
    api.script_set_pixel(Err(AppError::RateLimited {
        retry_after_secs: 30,
    }));
    let service = service_with(&api, test_config());

    service.enqueue_pixel(PixelCoord::new(0, 0), RgbColor::BLACK);
    service.enqueue_pixel(PixelCoord::new(1, 0), RgbColor::BLACK);

    let report = service.flush_pending().await.ok().and_then(|r| r.cooldown);
    let cooldown_secs = report.map(|d| d.as_secs());
    assert!(
        cooldown_secs.is_some_and(|s| (33..=36).contains(&s)),
        "cooldown {cooldown_secs:?} outside the 10-20% jitter band"
    );
    // the throttled entry goes back to the front, nothing else is attempted
    assert_eq!(api.set_pixel_calls().len(), 1);
    assert_eq!(service.pending_writes(), 2);
}

#[tokio::test]
async fn a_probe_failure_requeues_the_entry_and_surfaces_the_error() {
    let api = Arc::new(ScriptedApi::default());
    api.script_write_quota(Err(AppError::ApiError {
        message: "probe failed".to_string(),
    }));
    let service = service_with(&api, test_config());

    service.enqueue_pixel(PixelCoord::new(0, 0), RgbColor::BLACK);

    assert!(service.flush_pending().await.is_err());
    assert_eq!(service.pending_writes(), 1);
}
