use tracing::info;

use domain::coords::CanvasSize;
use pixels_desk_application::infrastructure_config::Config;

pub fn print_client_info(config: &Config, canvas_size: CanvasSize) {
    info!("⚙️  Configuration:");
    info!("  🌐 API base: {}", config.api.base_url);
    info!(
        "  🖼  Canvas: {} pixels, displayed at {}x upscale",
        canvas_size, config.display.upscale_factor
    );
    info!(
        "  ⏱  Canvas refresh: every {}s, keeping {} fetch(es) in reserve",
        config.sync.refresh_interval_secs, config.sync.read_reserve
    );
    info!(
        "  🖊  Queue flush: every {}s, keeping {} write(s) in reserve, {} attempts per pixel",
        config.queue.flush_interval_secs, config.queue.write_reserve, config.queue.max_attempts
    );
}
