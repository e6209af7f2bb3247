use crate::error::AppResult;
use domain::bitmap::Bitmap;
use domain::size::{AvailableSizes, Size};
use std::path::Path;
use std::sync::Arc;

/// Reads frames out of an icon container.
///
/// Implementations report a missing file as `AppError::NotFound` and bytes
/// that are not an icon container as `AppError::InvalidContainer`.
pub trait IconDecoderPort: Send + Sync {
    fn available_sizes(&self, path: &Path) -> AppResult<AvailableSizes>;
    fn decode_frame(&self, path: &Path, size: Size) -> AppResult<Bitmap>;
}

pub type DynIconDecoderPort = Arc<dyn IconDecoderPort>;
