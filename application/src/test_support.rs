//! In-memory port implementations for service tests.

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::error::{AppError, AppResult};
use crate::ports::outgoing::{
    icon_decoder::IconDecoderPort,
    svg_renderer::{RasterSvgPort, VectorSvgPort},
    svg_sink::SvgSinkPort,
};
use crate::vectorize::path::emit_path;
use domain::bitmap::Bitmap;
use domain::color::Background;
use domain::runs::ColorRunTable;
use domain::size::{AvailableSizes, Size};

pub struct FakeDecoder {
    frames: Option<Vec<Bitmap>>,
}

impl FakeDecoder {
    pub fn with_frames(frames: Vec<Bitmap>) -> Self {
        Self {
            frames: Some(frames),
        }
    }

    pub fn missing() -> Self {
        Self { frames: None }
    }

    fn frames(&self, path: &Path) -> AppResult<&[Bitmap]> {
        self.frames.as_deref().ok_or_else(|| AppError::NotFound {
            path: path.to_path_buf(),
        })
    }
}

impl IconDecoderPort for FakeDecoder {
    fn available_sizes(&self, path: &Path) -> AppResult<AvailableSizes> {
        Ok(self.frames(path)?.iter().filter_map(Bitmap::size).collect())
    }

    fn decode_frame(&self, path: &Path, size: Size) -> AppResult<Bitmap> {
        self.frames(path)?
            .iter()
            .find(|frame| frame.size() == Some(size))
            .cloned()
            .ok_or_else(|| AppError::InvalidContainer {
                message: format!("no {size} frame"),
            })
    }
}

/// Renders a one-line summary instead of real markup.
pub struct StubRenderer;

impl RasterSvgPort for StubRenderer {
    fn render_raster(&self, bitmap: &Bitmap, background: &Background) -> AppResult<String> {
        Ok(format!(
            "raster {}x{} {background}",
            bitmap.width(),
            bitmap.height()
        ))
    }
}

impl VectorSvgPort for StubRenderer {
    fn render_vector(
        &self,
        runs: &ColorRunTable,
        width: u32,
        height: u32,
        _background: &Background,
    ) -> AppResult<String> {
        let fills: Vec<String> = runs
            .iter()
            .map(|(color, runs)| format!("{}:{}", color.to_hex(), emit_path(runs)))
            .collect();
        Ok(format!("vector {width}x{height} {}", fills.join(";")))
    }
}

#[derive(Default)]
pub struct MemorySink {
    written: Mutex<Vec<(PathBuf, String)>>,
}

impl MemorySink {
    pub fn documents(&self) -> Vec<(PathBuf, String)> {
        self.written.lock().unwrap().clone()
    }
}

impl SvgSinkPort for MemorySink {
    fn write_document(&self, path: &Path, document: &str) -> AppResult<()> {
        self.written
            .lock()
            .unwrap()
            .push((path.to_path_buf(), document.to_string()));
        Ok(())
    }
}
