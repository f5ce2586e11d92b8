use crate::dns_record::{DnsQuestion, RecordClass, RecordType};
use std::sync::Arc;

/// A validated lookup: upstream server, fully-qualified ASCII name, type.
/// The class is always IN.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnsQuery {
    /// Upstream server exactly as supplied by the caller.
    pub server: Arc<str>,
    pub domain: Arc<str>,
    pub record_type: RecordType,
}

impl DnsQuery {
    pub fn new(
        server: impl Into<Arc<str>>,
        domain: impl Into<Arc<str>>,
        record_type: RecordType,
    ) -> Self {
        Self {
            server: server.into(),
            domain: domain.into(),
            record_type,
        }
    }

    pub fn question(&self) -> DnsQuestion {
        DnsQuestion::new(
            self.domain.as_ref(),
            self.record_type.to_u16(),
            RecordClass::IN.to_u16(),
        )
    }
}
