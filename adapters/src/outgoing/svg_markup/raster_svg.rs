use base64::{Engine as _, engine::general_purpose};
use tracing::instrument;

use crate::outgoing::image_rs::png_codec_image::ImagePngEncoder;
use domain::bitmap::Bitmap;
use domain::color::Background;
use ico_to_svg_application::{error::AppResult, ports::outgoing::svg_renderer::RasterSvgPort};

/// SVG wrapping a single base64 PNG `<image>`.
#[derive(Clone, Default)]
pub struct RasterSvgWriter {
    encoder: ImagePngEncoder,
}

impl RasterSvgWriter {
    pub fn new(encoder: ImagePngEncoder) -> Self {
        Self { encoder }
    }
}

impl RasterSvgPort for RasterSvgWriter {
    #[instrument(skip_all)]
    fn render_raster(&self, bitmap: &Bitmap, background: &Background) -> AppResult<String> {
        let png = self.encoder.encode_png(bitmap, background)?;
        let encoded = general_purpose::STANDARD.encode(png);
        let (w, h) = (bitmap.width(), bitmap.height());

        Ok(format!(
            "<?xml version='1.0' encoding='UTF-8'?>\n\
             <svg xmlns='http://www.w3.org/2000/svg' width='{w}' height='{h}' viewBox='0 0 {w} {h}'>\n  \
             <image href='data:image/png;base64,{encoded}' x='0' y='0' width='{w}' height='{h}' />\n\
             </svg>\n"
        ))
    }
}
