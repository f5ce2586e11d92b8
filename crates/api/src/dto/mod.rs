pub mod error;
pub mod message;

pub use error::ErrorBody;
pub use message::{MessageResponse, QuestionDto, RecordDto};
