use std::error::Error;

use tracing::info;

use client::bootstrap::loops::spawn_background_loops;
use client::bootstrap::state::AppState;
use client::config_loader;
use client::observability;
use pixels_desk_adapters::incoming::ui_egui::app::PixelsDeskApp;

const STATUS_STRIP_HEIGHT: f32 = 24.0;

fn main() -> Result<(), Box<dyn Error>> {
    dotenvy::dotenv().ok();

    let config = config_loader::load_config()?;

    observability::tracing::setup_logging(&config)?;

    info!("Starting Pixels Desk");
    info!("Configuration loaded successfully");

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    let state = runtime.block_on(AppState::new(config))?;

    observability::startup_info::print_client_info(&state.config, state.canvas_size);

    {
        let _guard = runtime.enter();
        spawn_background_loops(&state);
    }

    let adapters_state = state.to_adapters_state();
    let window_title = state.config.display.window_title.clone();
    let native_options = window_options(&state);

    // eframe owns the main thread until the window closes; the tokio workers
    // keep the refresh and flush loops running in the background
    eframe::run_native(
        &window_title,
        native_options,
        Box::new(move |_cc| Ok(Box::new(PixelsDeskApp::new(adapters_state)))),
    )?;

    info!("Window closed, shutting down");
    Ok(())
}

fn window_options(state: &AppState) -> eframe::NativeOptions {
    let upscale = state.config.display.upscale_factor;
    #[allow(clippy::cast_precision_loss)]
    let width = (state.canvas_size.width * upscale) as f32;
    #[allow(clippy::cast_precision_loss)]
    let height = (state.canvas_size.height * upscale) as f32 + STATUS_STRIP_HEIGHT;

    eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([width, height])
            .with_resizable(false),
        ..Default::default()
    }
}
