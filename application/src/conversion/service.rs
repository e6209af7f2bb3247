use std::sync::Arc;
use tracing::{debug, info, instrument};

use crate::config::ConversionMode;
use crate::error::AppResult;
use crate::ports::incoming::convert::{ConversionReport, ConvertRequest, ConvertUseCase};
use crate::ports::outgoing::{
    icon_decoder::DynIconDecoderPort,
    svg_renderer::{DynRasterSvgPort, DynVectorSvgPort},
    svg_sink::DynSvgSinkPort,
};
use crate::sizing::selector::select_size;
use crate::vectorize::scanner::vectorize;

pub struct ConversionServiceDeps {
    pub decoder: DynIconDecoderPort,
    pub raster: DynRasterSvgPort,
    pub vector: DynVectorSvgPort,
    pub sink: DynSvgSinkPort,
}

/// Decode, select, render, write. Nothing reaches the sink unless every
/// earlier step succeeded.
pub struct ConversionService {
    decoder: DynIconDecoderPort,
    raster: DynRasterSvgPort,
    vector: DynVectorSvgPort,
    sink: DynSvgSinkPort,
}

impl ConversionService {
    pub fn new(deps: ConversionServiceDeps) -> Self {
        Self {
            decoder: deps.decoder,
            raster: deps.raster,
            vector: deps.vector,
            sink: deps.sink,
        }
    }
}

impl ConvertUseCase for ConversionService {
    #[instrument(skip(self, request), fields(input = %request.input.display(), mode = %request.mode))]
    fn convert(&self, request: &ConvertRequest) -> AppResult<ConversionReport> {
        let available = self.decoder.available_sizes(&request.input)?;
        let selected = select_size(&available, request.size)?;
        debug!(
            available = available.len(),
            desired = ?request.size.map(|s| s.to_string()),
            %selected,
            "Selected frame size"
        );

        let bitmap = self.decoder.decode_frame(&request.input, selected)?;

        let (document, colors, runs) = match request.mode {
            ConversionMode::Raster => {
                let document = self.raster.render_raster(&bitmap, &request.background)?;
                (document, 0, 0)
            }
            ConversionMode::Vector => {
                let table = vectorize(&bitmap, request.alpha_threshold);
                debug!(
                    colors = table.len(),
                    runs = table.run_count(),
                    alpha_threshold = request.alpha_threshold,
                    "Vectorized frame"
                );
                let document = self.vector.render_vector(
                    &table,
                    bitmap.width(),
                    bitmap.height(),
                    &request.background,
                )?;
                (document, table.len(), table.run_count())
            }
        };

        self.sink.write_document(&request.output, &document)?;

        info!(
            output = %request.output.display(),
            bytes = document.len(),
            "Wrote SVG"
        );

        Ok(ConversionReport {
            output: request.output.clone(),
            mode: request.mode,
            selected,
            colors,
            runs,
            document_bytes: document.len(),
        })
    }
}

pub type DynConvertUseCase = Arc<dyn ConvertUseCase>;
