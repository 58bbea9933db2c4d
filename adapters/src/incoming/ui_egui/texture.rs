use egui::ColorImage;

use domain::canvas::Canvas;

/// Converts the raw RGB snapshot into an egui texture image. Upscaling is
/// done by the GPU with nearest filtering, not by resampling pixels here.
pub(crate) fn color_image_from_canvas(canvas: &Canvas) -> ColorImage {
    let size = canvas.size();
    ColorImage::from_rgb(
        [size.width as usize, size.height as usize],
        canvas.as_raw(),
    )
}
