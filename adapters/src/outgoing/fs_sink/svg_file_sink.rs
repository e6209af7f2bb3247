use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, instrument};

use ico_to_svg_application::{error::AppResult, ports::outgoing::svg_sink::SvgSinkPort};

/// Writes documents next to their destination and renames them into place.
#[derive(Clone, Copy, Default)]
pub struct SvgFileSink;

impl SvgFileSink {
    pub fn new() -> Self {
        Self
    }

    fn staging_path(path: &Path) -> PathBuf {
        let mut name = path
            .file_name()
            .map(OsString::from)
            .unwrap_or_else(|| OsString::from("output.svg"));
        name.push(".partial");
        path.with_file_name(name)
    }
}

impl SvgSinkPort for SvgFileSink {
    #[instrument(skip(self, document), fields(bytes = document.len()))]
    fn write_document(&self, path: &Path, document: &str) -> AppResult<()> {
        let staging = Self::staging_path(path);
        fs::write(&staging, document)?;

        if let Err(e) = fs::rename(&staging, path) {
            fs::remove_file(&staging).ok();
            return Err(e.into());
        }

        debug!("Wrote {}", path.display());
        Ok(())
    }
}
