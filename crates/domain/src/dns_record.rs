pub mod record;
pub mod record_class;
pub mod record_type;

pub use record::{DnsQuestion, DnsRecord};
pub use record_class::RecordClass;
pub use record_type::RecordType;
