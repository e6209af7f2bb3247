use std::sync::Arc;
use tracing::instrument;

use crate::error::AppResult;
use crate::ports::incoming::info::{InfoRequest, InfoUseCase};
use crate::ports::outgoing::icon_decoder::DynIconDecoderPort;
use crate::sizing::selector::select_size;
use domain::size::Size;

pub struct InfoService {
    decoder: DynIconDecoderPort,
}

impl InfoService {
    pub fn new(decoder: DynIconDecoderPort) -> Self {
        Self { decoder }
    }
}

impl InfoUseCase for InfoService {
    #[instrument(skip(self, request), fields(input = %request.input.display()))]
    fn list_sizes(&self, request: &InfoRequest) -> AppResult<Vec<Size>> {
        let available = self.decoder.available_sizes(&request.input)?;

        match request.size {
            Some(desired) => Ok(vec![select_size(&available, Some(desired))?]),
            None => Ok(available.iter().copied().collect()),
        }
    }
}

pub type DynInfoUseCase = Arc<dyn InfoUseCase>;
