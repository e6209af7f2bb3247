use ico::{IconDir, IconDirEntry};
use image::imageops::FilterType;
use std::fs;
use std::io::{Cursor, ErrorKind};
use std::path::Path;
use tracing::{debug, instrument, trace};

use crate::outgoing::image_rs::resample_image::resample;
use domain::bitmap::Bitmap;
use domain::error::DomainError;
use domain::size::{AvailableSizes, Size};
use ico_to_svg_application::{
    error::{AppError, AppResult},
    ports::outgoing::icon_decoder::IconDecoderPort,
};

#[derive(Copy, Clone)]
pub struct IcoDecoderConfig {
    /// Filter used when a frame has to be scaled to the requested size.
    pub resize_filter: FilterType,
}

impl Default for IcoDecoderConfig {
    fn default() -> Self {
        Self {
            resize_filter: FilterType::Lanczos3,
        }
    }
}

/// Reads `.ico` containers from disk.
#[derive(Clone)]
pub struct IcoFileDecoder {
    resize_filter: FilterType,
}

impl Default for IcoFileDecoder {
    fn default() -> Self {
        Self::new(IcoDecoderConfig::default())
    }
}

impl IcoFileDecoder {
    pub fn new(config: IcoDecoderConfig) -> Self {
        Self {
            resize_filter: config.resize_filter,
        }
    }

    fn read_directory(path: &Path) -> AppResult<IconDir> {
        let bytes = fs::read(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => AppError::NotFound {
                path: path.to_path_buf(),
            },
            _ => AppError::IoError(e),
        })?;

        trace!("Read {} bytes from {}", bytes.len(), path.display());

        IconDir::read(Cursor::new(bytes)).map_err(|e| AppError::InvalidContainer {
            message: format!("{}: {}", path.display(), e),
        })
    }

    fn entry_size(entry: &IconDirEntry) -> Option<Size> {
        Size::new(entry.width(), entry.height()).ok()
    }

    /// The entry listed at exactly `size`, preferring the deepest color depth;
    /// otherwise the largest entry.
    fn pick_entry(entries: &[IconDirEntry], size: Size) -> Option<&IconDirEntry> {
        entries
            .iter()
            .filter(|entry| Self::entry_size(entry) == Some(size))
            .max_by_key(|entry| entry.bits_per_pixel())
            .or_else(|| {
                entries
                    .iter()
                    .filter(|entry| Self::entry_size(entry).is_some())
                    .max_by_key(|entry| {
                        (
                            u64::from(entry.width()) * u64::from(entry.height()),
                            entry.width(),
                            entry.height(),
                            entry.bits_per_pixel(),
                        )
                    })
            })
    }
}

impl IconDecoderPort for IcoFileDecoder {
    #[instrument(skip(self))]
    fn available_sizes(&self, path: &Path) -> AppResult<AvailableSizes> {
        let directory = Self::read_directory(path)?;
        let sizes: AvailableSizes = directory
            .entries()
            .iter()
            .filter_map(Self::entry_size)
            .collect();

        debug!(
            "{} entries, {} distinct sizes",
            directory.entries().len(),
            sizes.len()
        );
        Ok(sizes)
    }

    #[instrument(skip(self), fields(size = %size))]
    fn decode_frame(&self, path: &Path, size: Size) -> AppResult<Bitmap> {
        let directory = Self::read_directory(path)?;
        let entry = Self::pick_entry(directory.entries(), size)
            .ok_or(AppError::Domain(DomainError::NoSizesAvailable))?;

        let image = entry.decode().map_err(|e| AppError::InvalidContainer {
            message: format!(
                "{}: cannot decode {}x{} frame: {}",
                path.display(),
                entry.width(),
                entry.height(),
                e
            ),
        })?;

        let bitmap =
            Bitmap::from_rgba_bytes(image.width(), image.height(), image.rgba_data().to_vec())?;

        debug!(
            "Decoded {}x{} frame ({} bpp)",
            bitmap.width(),
            bitmap.height(),
            entry.bits_per_pixel()
        );

        if bitmap.size() == Some(size) {
            Ok(bitmap)
        } else {
            resample(&bitmap, size, self.resize_filter)
        }
    }
}
