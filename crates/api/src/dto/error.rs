use rrda_domain::DomainError;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub code: u16,
    pub message: String,
}

impl ErrorBody {
    pub fn from_error(error: &DomainError) -> Self {
        Self {
            code: error.code(),
            message: error.to_string(),
        }
    }
}
