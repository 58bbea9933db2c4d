use domain::canvas::Canvas;
use domain::color::RgbColor;
use domain::coords::{CanvasSize, PixelCoord};

#[test]
fn builds_from_exact_raw_buffer() {
    let size = CanvasSize::new(2, 2);
    let canvas = Canvas::from_raw_rgb(size, vec![0; size.byte_len()]);
    assert!(canvas.is_ok());
}

#[test]
fn rejects_short_or_long_buffers() {
    let size = CanvasSize::new(2, 2);
    assert!(Canvas::from_raw_rgb(size, vec![0; 11]).is_err());
    assert!(Canvas::from_raw_rgb(size, vec![0; 13]).is_err());
}

#[test]
fn pixel_lookup_reads_rgb_triples() {
    let size = CanvasSize::new(2, 1);
    let raw = vec![1, 2, 3, 250, 251, 252];
    let canvas = Canvas::from_raw_rgb(size, raw).ok();
    let canvas = canvas.as_ref();
    assert_eq!(
        canvas.and_then(|c| c.pixel_at(PixelCoord::new(0, 0))),
        Some(RgbColor::new(1, 2, 3))
    );
    assert_eq!(
        canvas.and_then(|c| c.pixel_at(PixelCoord::new(1, 0))),
        Some(RgbColor::new(250, 251, 252))
    );
    assert_eq!(canvas.and_then(|c| c.pixel_at(PixelCoord::new(2, 0))), None);
}

#[test]
fn blank_canvas_is_black() {
    let size = CanvasSize::new(3, 3);
    let canvas = Canvas::blank(size);
    assert_eq!(canvas.as_raw().len(), size.byte_len());
    assert_eq!(canvas.pixel_at(PixelCoord::new(1, 1)), Some(RgbColor::BLACK));
}
