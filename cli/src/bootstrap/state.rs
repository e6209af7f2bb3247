use std::sync::Arc;

use ico_to_svg_adapters::outgoing::{
    fs_sink::svg_file_sink::SvgFileSink,
    ico_reader::ico_file_decoder::{IcoDecoderConfig, IcoFileDecoder},
    image_rs::png_codec_image::ImagePngEncoder,
    svg_markup::{raster_svg::RasterSvgWriter, vector_svg::VectorSvgWriter},
};
use ico_to_svg_application::conversion::service::{
    ConversionService, ConversionServiceDeps, DynConvertUseCase,
};
use ico_to_svg_application::info::service::{DynInfoUseCase, InfoService};
use ico_to_svg_application::ports::outgoing::icon_decoder::DynIconDecoderPort;

#[derive(Clone)]
pub struct AppState {
    pub convert_use_case: DynConvertUseCase,
    pub info_use_case: DynInfoUseCase,
}

impl AppState {
    pub fn new() -> Self {
        let decoder: DynIconDecoderPort =
            Arc::new(IcoFileDecoder::new(IcoDecoderConfig::default()));

        let convert_use_case: DynConvertUseCase =
            Arc::new(ConversionService::new(ConversionServiceDeps {
                decoder: Arc::clone(&decoder),
                raster: Arc::new(RasterSvgWriter::new(ImagePngEncoder::new())),
                vector: Arc::new(VectorSvgWriter::new()),
                sink: Arc::new(SvgFileSink::new()),
            }));

        let info_use_case: DynInfoUseCase = Arc::new(InfoService::new(decoder));

        Self {
            convert_use_case,
            info_use_case,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
