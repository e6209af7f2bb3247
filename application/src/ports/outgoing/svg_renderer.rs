use crate::error::AppResult;
use domain::bitmap::Bitmap;
use domain::color::Background;
use domain::runs::ColorRunTable;
use std::sync::Arc;

pub trait RasterSvgPort: Send + Sync {
    fn render_raster(&self, bitmap: &Bitmap, background: &Background) -> AppResult<String>;
}

pub trait VectorSvgPort: Send + Sync {
    fn render_vector(
        &self,
        runs: &ColorRunTable,
        width: u32,
        height: u32,
        background: &Background,
    ) -> AppResult<String>;
}

pub type DynRasterSvgPort = Arc<dyn RasterSvgPort>;
pub type DynVectorSvgPort = Arc<dyn VectorSvgPort>;
