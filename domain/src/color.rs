use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use crate::error::{DomainError, DomainResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RgbaColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl RgbaColor {
    pub const OPAQUE: u8 = 255;

    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, Self::OPAQUE)
    }

    /// Same color with the alpha channel forced to fully opaque.
    #[must_use]
    pub fn opaque(self) -> Self {
        Self {
            a: Self::OPAQUE,
            ..self
        }
    }

    #[must_use]
    pub fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// `#rrggbb`, lowercase, alpha dropped.
    #[must_use]
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl From<[u8; 4]> for RgbaColor {
    fn from([r, g, b, a]: [u8; 4]) -> Self {
        Self { r, g, b, a }
    }
}

impl RgbaColor {
    /// Parses any CSS color: hex, `rgb()`/`rgba()` (numbers or percentages),
    /// `hsl()`/`hsla()`, `hwb()`, and the full set of named colors.
    pub fn parse_css(input: &str) -> DomainResult<Self> {
        csscolorparser::parse(input.trim())
            .map(|color| Self::from(color.to_rgba8()))
            .map_err(|e| {
                DomainError::InvalidColorFormat(format!("unrecognised CSS color '{input}': {e}"))
            })
    }
}

/// What to paint underneath the icon.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Background {
    #[default]
    Transparent,
    /// `css` is kept verbatim for SVG attributes; `rgba` drives compositing.
    Solid { css: String, rgba: RgbaColor },
}

impl Background {
    pub const TRANSPARENT: &'static str = "transparent";

    #[must_use]
    pub fn is_transparent(&self) -> bool {
        matches!(self, Self::Transparent)
    }
}

impl FromStr for Background {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case(Self::TRANSPARENT) {
            return Ok(Self::Transparent);
        }

        let rgba = RgbaColor::parse_css(trimmed)?;
        Ok(Self::Solid {
            css: trimmed.to_string(),
            rgba,
        })
    }
}

impl fmt::Display for Background {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Transparent => f.write_str(Self::TRANSPARENT),
            Self::Solid { css, .. } => f.write_str(css),
        }
    }
}
