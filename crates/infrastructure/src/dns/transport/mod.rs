pub mod resolver;
pub mod tcp;
pub mod udp;

use async_trait::async_trait;
use bytes::Bytes;
use rrda_domain::DomainError;
use std::net::SocketAddr;
use std::time::Duration;

#[derive(Debug)]
pub struct TransportResponse {
    pub bytes: Bytes,
}

#[async_trait]
pub trait DnsTransport: Send + Sync {
    async fn send(
        &self,
        message_bytes: &[u8],
        timeout: Duration,
    ) -> Result<TransportResponse, DomainError>;

    fn protocol_name(&self) -> &'static str;
}

pub enum Transport {
    Udp(udp::UdpTransport),
    Tcp(tcp::TcpTransport),
}

impl Transport {
    pub fn udp(server_addr: SocketAddr) -> Self {
        Self::Udp(udp::UdpTransport::new(server_addr))
    }

    pub fn tcp(server_addr: SocketAddr) -> Self {
        Self::Tcp(tcp::TcpTransport::new(server_addr))
    }

    pub async fn send(
        &self,
        message_bytes: &[u8],
        timeout: Duration,
    ) -> Result<TransportResponse, DomainError> {
        match self {
            Self::Udp(t) => DnsTransport::send(t, message_bytes, timeout).await,
            Self::Tcp(t) => DnsTransport::send(t, message_bytes, timeout).await,
        }
    }

    pub fn protocol_name(&self) -> &'static str {
        match self {
            Self::Udp(_) => "UDP",
            Self::Tcp(_) => "TCP",
        }
    }
}

/// Rejects a reply whose transaction ID differs from the query's.
pub fn validate_response_id(query: &[u8], response: &[u8]) -> Result<(), DomainError> {
    let (Some(sent), Some(received)) = (query.get(..2), response.get(..2)) else {
        return Err(DomainError::unreachable("DNS message shorter than its ID"));
    };

    if sent != received {
        return Err(DomainError::unreachable(format!(
            "Response ID {:02x}{:02x} does not match query ID {:02x}{:02x}",
            received[0], received[1], sent[0], sent[1]
        )));
    }
    Ok(())
}
