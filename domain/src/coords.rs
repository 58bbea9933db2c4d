use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{DomainError, DomainResult};

/// Canvas dimensions as reported by `get_size`. Assumed stable for the
/// lifetime of a session, so callers fetch this once and pass it around.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CanvasSize {
    pub width: u32,
    pub height: u32,
}

impl CanvasSize {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Expected length of the raw `get_pixels` body (RGB, 3 bytes per pixel).
    #[must_use]
    pub fn byte_len(&self) -> usize {
        self.pixel_count() * 3
    }

    pub fn validate(&self) -> DomainResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(DomainError::InvalidCoordinates(format!(
                "Canvas dimensions must be non-zero, got {self}"
            )));
        }
        Ok(())
    }
}

impl fmt::Display for CanvasSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PixelCoord {
    pub x: u32,
    pub y: u32,
}

impl PixelCoord {
    #[must_use]
    pub fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }

    /// Maps a window-space position back onto the canvas grid by undoing the
    /// integer upscale applied for display.
    #[must_use]
    pub fn from_scaled(x: u32, y: u32, upscale_factor: u32) -> Self {
        let factor = upscale_factor.max(1);
        Self {
            x: x / factor,
            y: y / factor,
        }
    }

    pub fn validate_bounds(&self, size: CanvasSize) -> DomainResult<()> {
        if self.x >= size.width || self.y >= size.height {
            return Err(DomainError::InvalidCoordinates(format!(
                "Pixel coordinates {self} exceed canvas size {size}"
            )));
        }
        Ok(())
    }

    #[must_use]
    pub fn to_index(&self, size: CanvasSize) -> usize {
        self.y as usize * size.width as usize + self.x as usize
    }
}

impl fmt::Display for PixelCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
