use image::{RgbaImage, imageops, imageops::FilterType};
use tracing::debug;

use domain::bitmap::Bitmap;
use domain::size::Size;
use ico_to_svg_application::error::{AppError, AppResult};

pub(crate) fn to_rgba_image(bitmap: &Bitmap) -> AppResult<RgbaImage> {
    RgbaImage::from_raw(
        bitmap.width(),
        bitmap.height(),
        bitmap.as_rgba_bytes().to_vec(),
    )
    .ok_or_else(|| AppError::CodecError {
        message: "Failed to create image buffer from RGBA data".to_string(),
    })
}

pub(crate) fn from_rgba_image(image: RgbaImage) -> AppResult<Bitmap> {
    let (width, height) = image.dimensions();
    Ok(Bitmap::from_rgba_bytes(width, height, image.into_raw())?)
}

/// Scales `bitmap` to exactly `size`.
pub fn resample(bitmap: &Bitmap, size: Size, filter: FilterType) -> AppResult<Bitmap> {
    debug!(
        "Resampling {}x{} -> {} ({:?})",
        bitmap.width(),
        bitmap.height(),
        size,
        filter
    );
    let source = to_rgba_image(bitmap)?;
    let resized = imageops::resize(&source, size.width(), size.height(), filter);
    from_rgba_image(resized)
}
