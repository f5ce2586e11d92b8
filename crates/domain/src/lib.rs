//! RRDA Domain Layer
pub mod config;
pub mod dns_message;
pub mod dns_query;
pub mod dns_record;
pub mod errors;
pub mod upstream_addr;
pub mod validators;

pub use config::{CliOverrides, Config, ConfigError, DnsConfig};
pub use dns_message::{DnsMessage, ResponseCode};
pub use dns_query::DnsQuery;
pub use dns_record::{DnsQuestion, DnsRecord, RecordClass, RecordType};
pub use errors::DomainError;
pub use upstream_addr::UpstreamAddr;
