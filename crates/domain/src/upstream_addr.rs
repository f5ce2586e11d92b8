use std::fmt;
use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;
use std::sync::Arc;

pub const DEFAULT_DNS_PORT: u16 = 53;

/// An upstream server address that may or may not be resolved to an IP.
///
/// Accepted forms: `IP`, `IP:PORT`, `[IPv6]`, `[IPv6]:PORT`, `HOST`,
/// `HOST:PORT`. The port defaults to 53.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum UpstreamAddr {
    Resolved(SocketAddr),
    Unresolved { hostname: Arc<str>, port: u16 },
}

impl fmt::Display for UpstreamAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UpstreamAddr::Resolved(addr) => write!(f, "{}", addr),
            UpstreamAddr::Unresolved { hostname, port } => write!(f, "{}:{}", hostname, port),
        }
    }
}

fn parse_port(port_str: &str, input: &str) -> Result<u16, String> {
    port_str
        .parse::<u16>()
        .map_err(|e| format!("Invalid port in server address '{}': {}", input, e))
}

fn is_hostname(host: &str) -> bool {
    !host.is_empty()
        && host
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || matches!(b, b'-' | b'.' | b'_'))
}

impl FromStr for UpstreamAddr {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Ok(addr) = s.parse::<SocketAddr>() {
            return Ok(UpstreamAddr::Resolved(addr));
        }
        if let Ok(ip) = s.parse::<IpAddr>() {
            return Ok(UpstreamAddr::Resolved(SocketAddr::new(ip, DEFAULT_DNS_PORT)));
        }
        if let Some(inner) = s.strip_prefix('[').and_then(|rest| rest.strip_suffix(']')) {
            let ip = inner
                .parse::<IpAddr>()
                .map_err(|_| format!("Invalid bracketed address '{}'", s))?;
            return Ok(UpstreamAddr::Resolved(SocketAddr::new(ip, DEFAULT_DNS_PORT)));
        }

        let (host, port) = match s.rsplit_once(':') {
            Some((host, port_str)) => (host, parse_port(port_str, s)?),
            None => (s, DEFAULT_DNS_PORT),
        };

        if !is_hostname(host) {
            return Err(format!("Invalid server address '{}'", s));
        }

        Ok(UpstreamAddr::Unresolved {
            hostname: host.into(),
            port,
        })
    }
}
