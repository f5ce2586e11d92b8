use rrda_application::use_cases::LookupUseCase;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub lookup: Arc<LookupUseCase>,
}

impl AppState {
    pub fn new(lookup: Arc<LookupUseCase>) -> Self {
        Self { lookup }
    }
}
