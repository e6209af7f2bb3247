use image::{ImageFormat, Rgba, RgbaImage};
use std::io::Cursor;
use tracing::{debug, instrument};

use super::resample_image::to_rgba_image;
use domain::bitmap::Bitmap;
use domain::color::Background;
use ico_to_svg_application::error::{AppError, AppResult};

#[derive(Clone, Copy, Default)]
pub struct ImagePngEncoder;

impl ImagePngEncoder {
    pub fn new() -> Self {
        Self
    }

    /// Lays `bitmap` over a solid background, if any, and encodes the result as PNG.
    #[instrument(skip(self, bitmap), fields(width = bitmap.width(), height = bitmap.height()))]
    pub fn encode_png(&self, bitmap: &Bitmap, background: &Background) -> AppResult<Vec<u8>> {
        let foreground = to_rgba_image(bitmap)?;

        let composed = match background {
            Background::Transparent => foreground,
            Background::Solid { rgba, .. } => {
                let mut base =
                    RgbaImage::from_pixel(bitmap.width(), bitmap.height(), Rgba(rgba.to_array()));
                for (under, over) in base.pixels_mut().zip(foreground.pixels()) {
                    *under = source_over(*over, *under);
                }
                base
            }
        };

        let mut png_bytes = Vec::new();
        composed
            .write_to(&mut Cursor::new(&mut png_bytes), ImageFormat::Png)
            .map_err(|e| AppError::CodecError {
                message: format!("Failed to encode PNG: {}", e),
            })?;

        debug!("Encoded PNG: {} bytes", png_bytes.len());

        if png_bytes.is_empty() {
            return Err(AppError::CodecError {
                message: "PNG encoding produced empty output".to_string(),
            });
        }

        Ok(png_bytes)
    }
}

/// Porter-Duff "over" on straight alpha, rounded per channel. An opaque
/// destination always stays opaque.
fn source_over(src: Rgba<u8>, dst: Rgba<u8>) -> Rgba<u8> {
    let Rgba([sr, sg, sb, sa]) = src;
    let Rgba([dr, dg, db, da]) = dst;
    let src_alpha = u32::from(sa);
    let dst_weight = (u32::from(da) * (255 - src_alpha) + 127) / 255;
    let out_alpha = src_alpha + dst_weight;

    if out_alpha == 0 {
        return Rgba([0, 0, 0, 0]);
    }

    let channel = |s: u8, d: u8| -> u8 {
        let weighted = u32::from(s) * src_alpha + u32::from(d) * dst_weight;
        ((weighted + out_alpha / 2) / out_alpha) as u8
    };

    Rgba([
        channel(sr, dr),
        channel(sg, dg),
        channel(sb, db),
        out_alpha as u8,
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::color::RgbaColor;

    fn decode(png: &[u8]) -> RgbaImage {
        image::load_from_memory_with_format(png, ImageFormat::Png)
            .unwrap()
            .to_rgba8()
    }

    #[test]
    fn transparent_background_keeps_pixels() {
        let bitmap = Bitmap::filled(3, 2, RgbaColor::new(255, 0, 0, 128));
        let png = ImagePngEncoder::new()
            .encode_png(&bitmap, &Background::Transparent)
            .unwrap();

        assert!(png.starts_with(&[0x89, b'P', b'N', b'G']));
        let decoded = decode(&png);
        assert_eq!(decoded.dimensions(), (3, 2));
        assert_eq!(decoded.get_pixel(0, 0).0, [255, 0, 0, 128]);
    }

    #[test]
    fn solid_background_is_composited_underneath() {
        let bitmap = Bitmap::filled(2, 2, RgbaColor::new(0, 0, 0, 0))
            .with_pixel(1, 1, RgbaColor::rgb(255, 0, 0));
        let background = "#ffffff".parse::<Background>().unwrap();
        let decoded = decode(&ImagePngEncoder::new().encode_png(&bitmap, &background).unwrap());

        assert_eq!(decoded.get_pixel(0, 0).0, [255, 255, 255, 255]);
        assert_eq!(decoded.get_pixel(1, 1).0, [255, 0, 0, 255]);
    }

    #[test]
    fn half_transparent_pixels_blend() {
        let bitmap = Bitmap::filled(1, 1, RgbaColor::new(0, 0, 0, 128));
        let background = "white".parse::<Background>().unwrap();
        let decoded = decode(&ImagePngEncoder::new().encode_png(&bitmap, &background).unwrap());

        let [r, g, b, a] = decoded.get_pixel(0, 0).0;
        assert_eq!(a, 255);
        assert!((120..=135).contains(&r), "r = {r}");
        assert_eq!((r, r), (g, b));
    }

    #[test]
    fn opaque_background_stays_opaque_for_every_alpha() {
        let background = "white".parse::<Background>().unwrap();
        for alpha in 0..=255u8 {
            let bitmap = Bitmap::filled(1, 1, RgbaColor::new(10, 200, 90, alpha));
            let png = ImagePngEncoder::new().encode_png(&bitmap, &background).unwrap();
            assert_eq!(decode(&png).get_pixel(0, 0).0[3], 255, "alpha {alpha}");
        }
    }

    #[test]
    fn over_operator_extremes() {
        let white = Rgba([255, 255, 255, 255]);
        assert_eq!(source_over(Rgba([9, 8, 7, 0]), white), white);
        assert_eq!(source_over(Rgba([9, 8, 7, 255]), white), Rgba([9, 8, 7, 255]));
        assert_eq!(source_over(Rgba([0, 0, 0, 0]), Rgba([0, 0, 0, 0])), Rgba([0, 0, 0, 0]));
    }
}
