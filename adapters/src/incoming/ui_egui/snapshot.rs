use std::path::PathBuf;

use time::OffsetDateTime;

use domain::canvas::Canvas;
use pixels_desk_application::error::{AppError, AppResult};

/// Writes the current snapshot next to the binary as a timestamped PNG.
pub(crate) fn save_canvas_png(canvas: &Canvas) -> AppResult<PathBuf> {
    let size = canvas.size();
    let image = image::RgbImage::from_raw(size.width, size.height, canvas.as_raw().to_vec())
        .ok_or_else(|| AppError::TaskError {
            message: format!("Snapshot buffer does not match canvas size {size}"),
        })?;

    let path = PathBuf::from(format!(
        "canvas-{}.png",
        OffsetDateTime::now_utc().unix_timestamp()
    ));
    image.save(&path).map_err(|e| AppError::TaskError {
        message: format!("Failed to save canvas snapshot: {e}"),
    })?;
    Ok(path)
}
