pub mod icon_decoder;
pub mod svg_renderer;
pub mod svg_sink;
