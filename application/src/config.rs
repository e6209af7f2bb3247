use serde::{Deserialize, Serialize};
use std::fmt;

pub const APP_NAME: &str = "ico-to-svg";
pub const VERSION: &str = "0.1.0";

/// Minimum alpha at which a pixel counts as solid in vector mode.
pub const DEFAULT_ALPHA_THRESHOLD: u8 = 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConversionMode {
    /// Embed the frame as a base64 PNG.
    #[default]
    Raster,
    /// Trace the frame into per-color rectangle runs.
    Vector,
}

impl ConversionMode {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Raster => "raster",
            Self::Vector => "vector",
        }
    }
}

impl fmt::Display for ConversionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
