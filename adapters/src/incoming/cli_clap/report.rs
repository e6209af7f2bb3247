use serde::Serialize;

use domain::size::Size;
use ico_to_svg_application::error::AppResult;
use ico_to_svg_application::ports::incoming::convert::ConversionReport;

pub const NO_SIZES_FOUND: &str = "No sizes found";

#[derive(Debug, Clone, Copy, Serialize)]
pub struct SizeEntry {
    pub width: u32,
    pub height: u32,
}

impl From<Size> for SizeEntry {
    fn from(size: Size) -> Self {
        Self {
            width: size.width(),
            height: size.height(),
        }
    }
}

pub fn render_sizes_text(sizes: &[Size]) -> String {
    if sizes.is_empty() {
        return format!("{NO_SIZES_FOUND}\n");
    }

    let mut text = String::from("Available sizes:\n");
    for size in sizes {
        text.push_str(&format!(" - {size}\n"));
    }
    text
}

pub fn render_sizes_json(sizes: &[Size]) -> AppResult<String> {
    let entries: Vec<SizeEntry> = sizes.iter().copied().map(SizeEntry::from).collect();
    Ok(format!("{}\n", serde_json::to_string(&entries)?))
}

pub fn render_conversion(report: &ConversionReport) -> String {
    format!("Wrote {} ({} mode)\n", report.output.display(), report.mode)
}
