use crate::error::AppResult;
use std::path::Path;
use std::sync::Arc;

pub trait SvgSinkPort: Send + Sync {
    fn write_document(&self, path: &Path, document: &str) -> AppResult<()>;
}

pub type DynSvgSinkPort = Arc<dyn SvgSinkPort>;
