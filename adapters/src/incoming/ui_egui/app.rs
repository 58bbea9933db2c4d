use std::time::Duration;

use egui::color_picker::{Alpha, color_picker_color32};
use egui::{
    CentralPanel, Color32, Context, Sense, TextureHandle, TextureOptions, TopBottomPanel, Window,
};
use tracing::{debug, info, warn};

use domain::{color::RgbColor, coords::PixelCoord};

use super::snapshot::save_canvas_png;
use super::texture::color_image_from_canvas;
use crate::shared::app_state::AppState;

const REPAINT_INTERVAL: Duration = Duration::from_millis(250);

struct PickerState {
    coord: PixelCoord,
    color: Color32,
}

/// The main window: the upscaled canvas, a click-to-place color picker and a
/// status strip with queue/quota information.
pub struct PixelsDeskApp {
    state: AppState,
    texture: Option<TextureHandle>,
    shown_generation: Option<u64>,
    picker: Option<PickerState>,
}

impl PixelsDeskApp {
    #[must_use]
    pub fn new(state: AppState) -> Self {
        Self {
            state,
            texture: None,
            shown_generation: None,
            picker: None,
        }
    }

    /// Re-uploads the texture only when the background sync published a new
    /// snapshot generation.
    fn sync_texture(&mut self, ctx: &Context) {
        let Some(snapshot) = self.state.canvas_query.snapshot() else {
            return;
        };
        if self.shown_generation == Some(snapshot.generation) {
            return;
        }

        let image = color_image_from_canvas(&snapshot.canvas);
        match &mut self.texture {
            Some(texture) => texture.set(image, TextureOptions::NEAREST),
            None => {
                self.texture = Some(ctx.load_texture("canvas", image, TextureOptions::NEAREST));
            }
        }
        self.shown_generation = Some(snapshot.generation);
    }

    fn canvas_panel(&mut self, ctx: &Context) {
        CentralPanel::default().show(ctx, |ui| {
            let Some(texture) = &self.texture else {
                ui.label("Waiting for the first canvas fetch...");
                return;
            };

            let upscale = self.state.config.display.upscale_factor;
            #[allow(clippy::cast_precision_loss)]
            let display_size = texture.size_vec2() * upscale as f32;
            let response = ui.add(
                egui::Image::new(texture)
                    .fit_to_exact_size(display_size)
                    .sense(Sense::click()),
            );

            let click = response
                .interact_pointer_pos()
                .filter(|_| response.clicked());
            if let Some(pos) = click {
                let rel = pos - response.rect.min;
                let coord =
                    PixelCoord::from_scaled(rel.x.max(0.0) as u32, rel.y.max(0.0) as u32, upscale);
                self.open_picker(coord);
            }
        });
    }

    fn open_picker(&mut self, coord: PixelCoord) {
        let current = self
            .state
            .canvas_query
            .snapshot()
            .and_then(|s| s.canvas.pixel_at(coord));
        let Some(current) = current else {
            debug!("Ignoring click outside the canvas at {coord}");
            return;
        };

        debug!("Click at {coord}, current color {current}");
        self.picker = Some(PickerState {
            coord,
            color: Color32::from_rgb(current.r, current.g, current.b),
        });
    }

    fn picker_window(&mut self, ctx: &Context) {
        let mut place: Option<(PixelCoord, Color32)> = None;
        let mut close = false;

        if let Some(picker) = &mut self.picker {
            Window::new(format!("Place pixel at {}", picker.coord))
                .collapsible(false)
                .resizable(false)
                .show(ctx, |ui| {
                    color_picker_color32(ui, &mut picker.color, Alpha::Opaque);
                    ui.horizontal(|ui| {
                        if ui.button("Place").clicked() {
                            place = Some((picker.coord, picker.color));
                        }
                        if ui.button("Cancel").clicked() {
                            close = true;
                        }
                    });
                });
        }

        if let Some((coord, color)) = place {
            let [r, g, b, _] = color.to_array();
            let color = RgbColor::new(r, g, b);
            info!("Requested pixel at {coord}, color {color}");
            self.state.place_pixel.enqueue_pixel(coord, color);
            close = true;
        }
        if close {
            self.picker = None;
        }
    }

    fn status_strip(&mut self, ctx: &Context) {
        TopBottomPanel::bottom("status").show(ctx, |ui| {
            ui.horizontal(|ui| {
                let pending = self.state.queue_status.pending_writes();
                ui.label(format!("{pending} pending write(s)"));
                if pending > 0 {
                    ui.spinner();
                }

                if let Some(quota) = self.state.queue_status.last_write_quota() {
                    ui.separator();
                    ui.label(format!("writes: {quota}"));
                }
                if let Some(quota) = self.state.canvas_query.last_read_quota() {
                    ui.separator();
                    ui.label(format!("fetches: {quota}"));
                }

                ui.separator();
                if ui.button("Save PNG").clicked() {
                    self.save_snapshot();
                }
            });
        });
    }

    fn save_snapshot(&self) {
        let Some(snapshot) = self.state.canvas_query.snapshot() else {
            warn!("No canvas snapshot to save yet");
            return;
        };
        match save_canvas_png(&snapshot.canvas) {
            Ok(path) => info!("Saved canvas snapshot to {}", path.display()),
            Err(e) => warn!("Could not save canvas snapshot: {e}"),
        }
    }
}

impl eframe::App for PixelsDeskApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        // the canvas refreshes from a background task, so poll for new
        // generations even without input events
        ctx.request_repaint_after(REPAINT_INTERVAL);

        self.sync_texture(ctx);
        self.status_strip(ctx);
        self.canvas_panel(ctx);
        self.picker_window(ctx);
    }
}
