use std::sync::Arc;

use domain::coords::CanvasSize;
use pixels_desk_adapters::outgoing::http_reqwest::canvas_api_reqwest::ReqwestCanvasApiAdapter;
use pixels_desk_adapters::shared::app_state::AppState as AdaptersAppState;
use pixels_desk_application::canvas::service::CanvasSyncService;
use pixels_desk_application::error::AppError;
use pixels_desk_application::infrastructure_config::Config;
use pixels_desk_application::ports::incoming::canvas::CanvasQueryUseCase;
use pixels_desk_application::ports::incoming::placement::{PlacePixelUseCase, QueueStatusUseCase};
use pixels_desk_application::ports::outgoing::canvas_api::DynCanvasApiPort;
use pixels_desk_application::queue::service::WriteQueueService;

pub struct AppState {
    pub config: Arc<Config>,
    pub canvas_size: CanvasSize,
    pub sync_service: Arc<CanvasSyncService>,
    pub queue_service: Arc<WriteQueueService>,
}

impl AppState {
    pub async fn new(config: Config) -> Result<Self, AppError> {
        let config = Arc::new(config);

        let api: DynCanvasApiPort = Arc::new(ReqwestCanvasApiAdapter::new(&config.api)?);

        // dimensions are stable for the session, so fetch them exactly once
        let canvas_size = api.canvas_size().await?;

        let sync_service = CanvasSyncService::new(Arc::clone(&api), canvas_size, &config.sync);
        let queue_service = WriteQueueService::new(api, config.queue.clone());

        Ok(Self {
            config,
            canvas_size,
            sync_service,
            queue_service,
        })
    }

    #[must_use]
    pub fn to_adapters_state(&self) -> AdaptersAppState {
        AdaptersAppState::new(
            Arc::clone(&self.config),
            Arc::clone(&self.sync_service) as Arc<dyn CanvasQueryUseCase>,
            Arc::clone(&self.queue_service) as Arc<dyn PlacePixelUseCase>,
            Arc::clone(&self.queue_service) as Arc<dyn QueueStatusUseCase>,
        )
    }
}
