use crate::config::ConversionMode;
use crate::error::AppResult;
use domain::color::Background;
use domain::size::Size;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct ConvertRequest {
    pub input: PathBuf,
    pub output: PathBuf,
    pub mode: ConversionMode,
    pub alpha_threshold: u8,
    pub background: Background,
    pub size: Option<Size>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionReport {
    pub output: PathBuf,
    pub mode: ConversionMode,
    pub selected: Size,
    /// Distinct fill colors; zero in raster mode.
    pub colors: usize,
    /// Rectangle runs emitted; zero in raster mode.
    pub runs: usize,
    pub document_bytes: usize,
}

pub trait ConvertUseCase: Send + Sync {
    fn convert(&self, request: &ConvertRequest) -> AppResult<ConversionReport>;
}
