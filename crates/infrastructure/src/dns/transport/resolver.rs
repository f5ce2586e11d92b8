use rrda_domain::{DomainError, UpstreamAddr};
use std::net::SocketAddr;
use std::time::Duration;
use tracing::debug;

/// Resolves a hostname to all its IP addresses (IPv4 + IPv6).
pub async fn resolve_all(
    hostname: &str,
    port: u16,
    timeout: Duration,
) -> Result<Vec<SocketAddr>, DomainError> {
    let target = format!("{}:{}", hostname, port);

    let addrs_iter = tokio::time::timeout(timeout, tokio::net::lookup_host(&target))
        .await
        .map_err(|_| DomainError::unreachable(format!("Timeout resolving {}", target)))?
        .map_err(|e| {
            DomainError::unreachable(format!("DNS resolution failed for {}: {}", target, e))
        })?;

    let addrs: Vec<SocketAddr> = addrs_iter.collect();

    if addrs.is_empty() {
        return Err(DomainError::unreachable(format!(
            "No addresses found for {}",
            target
        )));
    }

    Ok(addrs)
}

/// Picks the socket address to query: the address itself, or the first
/// result of a system lookup for a hostname.
pub async fn resolve_upstream(
    upstream: &UpstreamAddr,
    timeout: Duration,
) -> Result<SocketAddr, DomainError> {
    match upstream {
        UpstreamAddr::Resolved(addr) => Ok(*addr),
        UpstreamAddr::Unresolved { hostname, port } => {
            let addrs = resolve_all(hostname, *port, timeout).await?;
            let addr = addrs
                .first()
                .copied()
                .ok_or_else(|| DomainError::unreachable(format!("No addresses for {}", upstream)))?;

            debug!(
                upstream = %upstream,
                resolved = %addr,
                candidates = addrs.len(),
                "Upstream hostname resolved"
            );
            Ok(addr)
        }
    }
}
