use std::fmt;

use crate::color::RgbColor;
use crate::coords::PixelCoord;

/// A pixel write the user has requested but the service has not yet
/// acknowledged. Created on click, destroyed on confirmed success.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingWrite {
    pub coord: PixelCoord,
    pub color: RgbColor,
    attempts: u32,
}

impl PendingWrite {
    #[must_use]
    pub fn new(coord: PixelCoord, color: RgbColor) -> Self {
        Self {
            coord,
            color,
            attempts: 0,
        }
    }

    #[must_use]
    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    pub fn record_attempt(&mut self) {
        self.attempts = self.attempts.saturating_add(1);
    }

    #[must_use]
    pub fn exhausted(&self, max_attempts: u32) -> bool {
        self.attempts >= max_attempts
    }
}

impl fmt::Display for PendingWrite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} <- {}", self.coord, self.color)
    }
}
