use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{DomainError, DomainResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RgbColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl RgbColor {
    pub const BLACK: Self = Self { r: 0, g: 0, b: 0 };

    #[must_use]
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Wire format for `set_pixel`: six uppercase hex digits, no `#`.
    #[must_use]
    pub fn to_hex(&self) -> String {
        format!("{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Accepts `RRGGBB` with or without a leading `#`.
    pub fn from_hex(hex: &str) -> DomainResult<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(DomainError::InvalidColorFormat(format!(
                "Expected six hex digits, got '{hex}'"
            )));
        }

        let packed = u32::from_str_radix(digits, 16).map_err(|e| {
            DomainError::InvalidColorFormat(format!("Invalid hex color '{hex}': {e}"))
        })?;

        Ok(Self {
            r: u8::try_from((packed >> 16) & 0xFF).unwrap_or(0),
            g: u8::try_from((packed >> 8) & 0xFF).unwrap_or(0),
            b: u8::try_from(packed & 0xFF).unwrap_or(0),
        })
    }
}

impl fmt::Display for RgbColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.to_hex())
    }
}
