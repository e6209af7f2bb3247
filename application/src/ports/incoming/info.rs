use crate::error::AppResult;
use domain::size::Size;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct InfoRequest {
    pub input: PathBuf,
    /// Narrows the listing to the size a conversion would pick.
    pub size: Option<Size>,
}

pub trait InfoUseCase: Send + Sync {
    /// Frame sizes ascending by area, width, height.
    fn list_sizes(&self, request: &InfoRequest) -> AppResult<Vec<Size>>;
}
