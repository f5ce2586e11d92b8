use async_trait::async_trait;
use rrda_domain::{DnsMessage, DnsQuery, DomainError};

/// Performs one query/response exchange against `query.server`.
///
/// Implementations return the decoded reply as-is, whatever its response
/// code; only transport-level failures are errors.
#[async_trait]
pub trait DnsResolver: Send + Sync {
    async fn resolve(&self, query: &DnsQuery) -> Result<DnsMessage, DomainError>;
}
