use super::config::ResolverConfig;
use crate::dns::forwarding::{MessageBuilder, ResponseParser};
use crate::dns::transport::resolver::resolve_upstream;
use crate::dns::transport::Transport;
use async_trait::async_trait;
use rrda_application::ports::DnsResolver;
use rrda_domain::{DnsMessage, DnsQuery, DomainError, UpstreamAddr};
use std::net::SocketAddr;
use tracing::{debug, info};

/// Transport used for one exchange of a lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Attempt {
    Udp,
    Tcp,
}

impl Attempt {
    /// The attempt that must follow this one, if any. Only a truncated UDP
    /// reply is retried, and only once.
    pub fn next(self, truncated: bool) -> Option<Attempt> {
        match (self, truncated) {
            (Attempt::Udp, true) => Some(Attempt::Tcp),
            _ => None,
        }
    }

    fn transport(self, server: SocketAddr) -> Transport {
        match self {
            Attempt::Udp => Transport::udp(server),
            Attempt::Tcp => Transport::tcp(server),
        }
    }
}

/// Sends each query straight to the server named in it.
pub struct UpstreamResolver {
    config: ResolverConfig,
}

impl UpstreamResolver {
    pub fn new(config: ResolverConfig) -> Self {
        info!(
            timeout_ms = config.timeout.as_millis() as u64,
            "Upstream DNS resolver created"
        );
        Self { config }
    }

    async fn exchange(
        &self,
        attempt: Attempt,
        server: SocketAddr,
        message_bytes: &[u8],
    ) -> Result<DnsMessage, DomainError> {
        let transport = attempt.transport(server);
        let response = transport.send(message_bytes, self.config.timeout).await?;

        debug!(
            server = %server,
            protocol = transport.protocol_name(),
            bytes = response.bytes.len(),
            "Exchange complete"
        );

        ResponseParser::parse(&response.bytes)
    }
}

#[async_trait]
impl DnsResolver for UpstreamResolver {
    async fn resolve(&self, query: &DnsQuery) -> Result<DnsMessage, DomainError> {
        let upstream: UpstreamAddr = query.server.parse().map_err(DomainError::unreachable)?;
        let server = resolve_upstream(&upstream, self.config.timeout).await?;
        let (id, message_bytes) = MessageBuilder::build_query(&query.domain, &query.record_type)?;

        debug!(
            id = id,
            server = %server,
            domain = %query.domain,
            record_type = %query.record_type,
            "Querying upstream"
        );

        let first = self.exchange(Attempt::Udp, server, &message_bytes).await?;

        match Attempt::Udp.next(first.truncated) {
            Some(retry) => {
                debug!(
                    domain = %query.domain,
                    server = %server,
                    "Truncated UDP reply, retrying over TCP"
                );
                self.exchange(retry, server, &message_bytes).await
            }
            None => Ok(first),
        }
    }
}
