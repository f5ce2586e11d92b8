//! UDP transport (RFC 1035 §4.2.1)
//!
//! The socket is connected to the upstream before sending, so the kernel
//! discards datagrams from any other source address or port. A truncated
//! reply is returned as-is; the resolver decides whether to retry over TCP.

use super::{validate_response_id, DnsTransport, TransportResponse};
use async_trait::async_trait;
use bytes::Bytes;
use rrda_domain::DomainError;
use std::net::{Ipv4Addr, Ipv6Addr, SocketAddr};
use std::time::Duration;
use tokio::net::UdpSocket;
use tracing::debug;

/// Largest reply read from one datagram.
const MAX_UDP_RESPONSE_SIZE: usize = 4096;

pub struct UdpTransport {
    server_addr: SocketAddr,
}

impl UdpTransport {
    pub fn new(server_addr: SocketAddr) -> Self {
        Self { server_addr }
    }

    fn bind_addr(&self) -> SocketAddr {
        if self.server_addr.is_ipv4() {
            SocketAddr::from((Ipv4Addr::UNSPECIFIED, 0))
        } else {
            SocketAddr::from((Ipv6Addr::UNSPECIFIED, 0))
        }
    }

    fn failure(&self, action: &str, detail: impl std::fmt::Display) -> DomainError {
        DomainError::unreachable(format!(
            "UDP {} {} failed: {}",
            action, self.server_addr, detail
        ))
    }

    /// A fresh ephemeral socket bound to the server, one per exchange.
    async fn connect(&self) -> Result<UdpSocket, DomainError> {
        let socket = UdpSocket::bind(self.bind_addr())
            .await
            .map_err(|e| self.failure("bind for", e))?;

        socket
            .connect(self.server_addr)
            .await
            .map_err(|e| self.failure("connect to", e))?;

        Ok(socket)
    }

    async fn exchange(
        &self,
        socket: &UdpSocket,
        message_bytes: &[u8],
    ) -> Result<Vec<u8>, DomainError> {
        let bytes_sent = socket
            .send(message_bytes)
            .await
            .map_err(|e| self.failure("send to", e))?;

        debug!(server = %self.server_addr, bytes_sent, "UDP query sent");

        let mut recv_buf = vec![0u8; MAX_UDP_RESPONSE_SIZE];
        let bytes_received = socket
            .recv(&mut recv_buf)
            .await
            .map_err(|e| self.failure("receive from", e))?;

        recv_buf.truncate(bytes_received);
        Ok(recv_buf)
    }
}

#[async_trait]
impl DnsTransport for UdpTransport {
    async fn send(
        &self,
        message_bytes: &[u8],
        timeout: Duration,
    ) -> Result<TransportResponse, DomainError> {
        let socket = self.connect().await?;

        let reply = tokio::time::timeout(timeout, self.exchange(&socket, message_bytes))
            .await
            .map_err(|_| {
                self.failure("exchange with", format!("no reply within {:?}", timeout))
            })??;

        validate_response_id(message_bytes, &reply)?;

        debug!(
            server = %self.server_addr,
            bytes_received = reply.len(),
            "UDP response received"
        );

        Ok(TransportResponse {
            bytes: Bytes::from(reply),
        })
    }

    fn protocol_name(&self) -> &'static str {
        "UDP"
    }
}
