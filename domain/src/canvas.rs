use crate::color::RgbColor;
use crate::coords::{CanvasSize, PixelCoord};
use crate::error::{DomainError, DomainResult};

/// The shared pixel grid as last fetched from the service.
///
/// Stored as the raw RGB byte buffer the wire delivers, replaced wholesale on
/// every successful fetch. There is no partial update path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    size: CanvasSize,
    pixels: Vec<u8>,
}

impl Canvas {
    pub fn from_raw_rgb(size: CanvasSize, pixels: Vec<u8>) -> DomainResult<Self> {
        size.validate()?;
        if pixels.len() != size.byte_len() {
            return Err(DomainError::CanvasSizeMismatch {
                expected: size.byte_len(),
                actual: pixels.len(),
            });
        }
        Ok(Self { size, pixels })
    }

    /// All-black placeholder shown while the pixel endpoint is unavailable
    /// and no real snapshot has arrived yet.
    #[must_use]
    pub fn blank(size: CanvasSize) -> Self {
        Self {
            size,
            pixels: vec![0; size.byte_len()],
        }
    }

    #[must_use]
    pub fn size(&self) -> CanvasSize {
        self.size
    }

    #[must_use]
    pub fn as_raw(&self) -> &[u8] {
        &self.pixels
    }

    #[must_use]
    pub fn pixel_at(&self, coord: PixelCoord) -> Option<RgbColor> {
        coord.validate_bounds(self.size).ok()?;
        let offset = coord.to_index(self.size) * 3;
        let bytes = self.pixels.get(offset..offset + 3)?;
        match bytes {
            [r, g, b] => Some(RgbColor::new(*r, *g, *b)),
            _ => None,
        }
    }
}
