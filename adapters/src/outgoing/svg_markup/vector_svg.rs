use tracing::instrument;

use super::escape::escape_attribute;
use domain::color::Background;
use domain::runs::ColorRunTable;
use ico_to_svg_application::{
    error::AppResult, ports::outgoing::svg_renderer::VectorSvgPort, vectorize::path::emit_path,
};

/// SVG with an optional background `<rect>` and one filled `<path>` per color.
#[derive(Clone, Copy, Default)]
pub struct VectorSvgWriter;

impl VectorSvgWriter {
    pub fn new() -> Self {
        Self
    }
}

impl VectorSvgPort for VectorSvgWriter {
    #[instrument(skip(self, runs, background), fields(colors = runs.len()))]
    fn render_vector(
        &self,
        runs: &ColorRunTable,
        width: u32,
        height: u32,
        background: &Background,
    ) -> AppResult<String> {
        let mut lines = vec![
            "<?xml version=\"1.0\" encoding=\"utf-8\" ?>".to_string(),
            format!(
                "<svg xmlns=\"http://www.w3.org/2000/svg\" version=\"1.1\" baseProfile=\"full\" \
                 width=\"{width}px\" height=\"{height}px\" viewBox=\"0 0 {width} {height}\">"
            ),
        ];

        if let Background::Solid { css, .. } = background {
            lines.push(format!(
                "  <rect x=\"0\" y=\"0\" width=\"{width}\" height=\"{height}\" fill=\"{}\" />",
                escape_attribute(css)
            ));
        }

        for (color, color_runs) in runs.iter() {
            lines.push(format!(
                "  <path d=\"{}\" fill=\"{}\" stroke=\"none\" />",
                emit_path(color_runs),
                color.to_hex()
            ));
        }

        lines.push("</svg>".to_string());

        let mut document = lines.join("\n");
        document.push('\n');
        Ok(document)
    }
}
