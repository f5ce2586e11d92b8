pub mod message_builder;
pub mod record_type_map;
pub mod response_parser;
pub mod wire_lengths;

pub use message_builder::MessageBuilder;
pub use record_type_map::RecordTypeMapper;
pub use response_parser::ResponseParser;
pub use wire_lengths::SectionLengths;
