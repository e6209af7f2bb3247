use serde::{Deserialize, Serialize};

use crate::config::{ConversionMode, DEFAULT_ALPHA_THRESHOLD};
use crate::error::{AppError, AppResult};
use domain::color::Background;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    pub conversion: ConversionConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversionConfig {
    pub mode: ConversionMode,
    pub alpha_threshold: u8,
    pub background: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
    pub include_location: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LogFormat {
    #[serde(rename = "json")]
    Json,
    #[serde(rename = "pretty")]
    Pretty,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            mode: ConversionMode::Raster,
            alpha_threshold: DEFAULT_ALPHA_THRESHOLD,
            background: Background::TRANSPARENT.to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            format: LogFormat::Pretty,
            include_location: false,
        }
    }
}

impl ConversionConfig {
    pub fn background(&self) -> AppResult<Background> {
        self.background
            .parse::<Background>()
            .map_err(|e| AppError::ConfigError {
                message: format!("conversion.background: {e}"),
            })
    }
}

impl Config {
    pub fn validate(&self) -> AppResult<()> {
        self.conversion.background()?;

        if self.logging.level.trim().is_empty() {
            return Err(AppError::ConfigError {
                message: "logging.level cannot be empty".to_string(),
            });
        }

        Ok(())
    }
}
