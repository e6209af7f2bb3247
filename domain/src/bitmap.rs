use crate::color::RgbaColor;
use crate::error::{DomainError, DomainResult};
use crate::size::Size;

const CHANNELS: usize = 4;

/// A fully decoded RGBA frame, row-major, four bytes per pixel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bitmap {
    width: u32,
    height: u32,
    rgba: Vec<u8>,
}

impl Bitmap {
    pub fn from_rgba_bytes(width: u32, height: u32, rgba: Vec<u8>) -> DomainResult<Self> {
        let expected = (width as usize)
            .checked_mul(height as usize)
            .and_then(|pixels| pixels.checked_mul(CHANNELS))
            .ok_or_else(|| {
                DomainError::InvalidBitmap(format!("{width}x{height} overflows pixel buffer"))
            })?;

        if rgba.len() != expected {
            return Err(DomainError::InvalidBitmap(format!(
                "expected {expected} bytes for {width}x{height} RGBA, got {}",
                rgba.len()
            )));
        }

        Ok(Self {
            width,
            height,
            rgba,
        })
    }

    /// A bitmap with every pixel set to `color`.
    #[must_use]
    pub fn filled(width: u32, height: u32, color: RgbaColor) -> Self {
        let pixels = width as usize * height as usize;
        let rgba = color.to_array().repeat(pixels);
        Self {
            width,
            height,
            rgba,
        }
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// `None` for an empty bitmap.
    #[must_use]
    pub fn size(&self) -> Option<Size> {
        Size::new(self.width, self.height).ok()
    }

    /// Pixel at column `x`, row `y`; `None` when out of bounds.
    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> Option<RgbaColor> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let offset = (y as usize * self.width as usize + x as usize) * CHANNELS;
        let bytes: [u8; 4] = self.rgba.get(offset..offset + CHANNELS)?.try_into().ok()?;
        Some(RgbaColor::from(bytes))
    }

    /// Pixels of row `y`, left to right.
    pub fn row(&self, y: u32) -> impl Iterator<Item = RgbaColor> + '_ {
        let stride = self.width as usize * CHANNELS;
        let start = y as usize * stride;
        self.rgba
            .get(start..start + stride)
            .unwrap_or_default()
            .chunks_exact(CHANNELS)
            .filter_map(|chunk| <[u8; 4]>::try_from(chunk).ok().map(RgbaColor::from))
    }

    #[must_use]
    pub fn as_rgba_bytes(&self) -> &[u8] {
        &self.rgba
    }

    /// Returns a copy with `color` written at (`x`, `y`); out-of-bounds writes are ignored.
    #[must_use]
    pub fn with_pixel(mut self, x: u32, y: u32, color: RgbaColor) -> Self {
        if x < self.width && y < self.height {
            let offset = (y as usize * self.width as usize + x as usize) * CHANNELS;
            if let Some(slot) = self.rgba.get_mut(offset..offset + CHANNELS) {
                slot.copy_from_slice(&color.to_array());
            }
        }
        self
    }
}
