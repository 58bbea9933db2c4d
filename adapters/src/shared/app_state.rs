use std::sync::Arc;

use pixels_desk_application::infrastructure_config::Config;
use pixels_desk_application::ports::incoming::{
    canvas::CanvasQueryUseCase,
    placement::{PlacePixelUseCase, QueueStatusUseCase},
};

/// Everything the UI needs, bundled so the window code stays free of wiring.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub canvas_query: Arc<dyn CanvasQueryUseCase>,
    pub place_pixel: Arc<dyn PlacePixelUseCase>,
    pub queue_status: Arc<dyn QueueStatusUseCase>,
}

impl AppState {
    #[must_use]
    pub fn new(
        config: Arc<Config>,
        canvas_query: Arc<dyn CanvasQueryUseCase>,
        place_pixel: Arc<dyn PlacePixelUseCase>,
        queue_status: Arc<dyn QueueStatusUseCase>,
    ) -> Self {
        Self {
            config,
            canvas_query,
            place_pixel,
            queue_status,
        }
    }
}
