use crate::ports::DnsResolver;
use rrda_domain::validators::{validate_forward, validate_reverse};
use rrda_domain::{DnsMessage, DnsQuery, DomainError, ResponseCode};
use std::sync::Arc;
use tracing::debug;

/// Validate, resolve, and apply the response-code policy for one request.
pub struct LookupUseCase {
    resolver: Arc<dyn DnsResolver>,
}

impl LookupUseCase {
    pub fn new(resolver: Arc<dyn DnsResolver>) -> Self {
        Self { resolver }
    }

    pub async fn lookup(
        &self,
        server: &str,
        domain: &str,
        query_type: &str,
    ) -> Result<DnsMessage, DomainError> {
        let query = validate_forward(server, domain, query_type)?;
        self.execute(&query).await
    }

    pub async fn reverse_lookup(&self, server: &str, ip: &str) -> Result<DnsMessage, DomainError> {
        let query = validate_reverse(server, ip)?;
        self.execute(&query).await
    }

    pub async fn execute(&self, query: &DnsQuery) -> Result<DnsMessage, DomainError> {
        let message = self.resolver.resolve(query).await?;

        debug!(
            server = %query.server,
            domain = %query.domain,
            record_type = %query.record_type,
            rcode = message.response_code.as_str(),
            answers = message.answers.len(),
            "Upstream exchange complete"
        );

        check_response_code(message.response_code)?;
        Ok(message.with_fallback_question(query.question()))
    }
}

/// SERVFAIL, NXDOMAIN and REFUSED are errors; every other code is rendered.
fn check_response_code(code: ResponseCode) -> Result<(), DomainError> {
    match code {
        ResponseCode::ServFail => Err(DomainError::ServerFailure),
        ResponseCode::NXDomain => Err(DomainError::NxDomain),
        ResponseCode::Refused => Err(DomainError::Refused),
        _ => Ok(()),
    }
}
