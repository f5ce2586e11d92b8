//! Validation of untrusted path parameters into a [`DnsQuery`].
//!
//! Nothing here touches the network: a request that fails validation never
//! reaches the resolver.

use crate::dns_query::DnsQuery;
use crate::dns_record::RecordType;
use crate::errors::DomainError;
use std::fmt::Write as _;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

const MAX_NAME_WIRE_LEN: usize = 255;
const MAX_LABEL_LEN: usize = 63;

/// Appends the root dot if missing and converts IDNs to their ASCII form.
pub fn normalize_domain(domain: &str) -> Result<String, DomainError> {
    let fqdn = if domain.ends_with('.') {
        domain.to_string()
    } else {
        format!("{}.", domain)
    };

    idna::domain_to_ascii(&fqdn).map_err(|_| DomainError::UnparsableInput)
}

/// Checks DNS name syntax on an ASCII name, with or without the root dot.
pub fn is_domain_name(name: &str) -> bool {
    if name == "." {
        return true;
    }

    let relative = name.strip_suffix('.').unwrap_or(name);
    if relative.is_empty() {
        return false;
    }

    // One length octet per label plus the terminating root label.
    let wire_len = relative.len() + 2;
    if wire_len > MAX_NAME_WIRE_LEN {
        return false;
    }

    relative.split('.').all(is_label)
}

fn is_label(label: &str) -> bool {
    if label == "*" {
        return true;
    }
    !label.is_empty()
        && label.len() <= MAX_LABEL_LEN
        && label
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_')
}

pub fn parse_record_type(query_type: &str) -> Result<RecordType, DomainError> {
    query_type
        .parse::<RecordType>()
        .map_err(|_| DomainError::InvalidQueryType)
}

/// Builds the `in-addr.arpa.` / `ip6.arpa.` name for an address.
///
/// IPv4-mapped IPv6 addresses are reversed in the IPv4 namespace.
pub fn reverse_name(ip: IpAddr) -> String {
    match ip {
        IpAddr::V4(v4) => reverse_v4(v4),
        IpAddr::V6(v6) => match v6.to_ipv4_mapped() {
            Some(v4) => reverse_v4(v4),
            None => reverse_v6(v6),
        },
    }
}

fn reverse_v4(ip: Ipv4Addr) -> String {
    let [a, b, c, d] = ip.octets();
    format!("{}.{}.{}.{}.in-addr.arpa.", d, c, b, a)
}

fn reverse_v6(ip: Ipv6Addr) -> String {
    let mut name = String::with_capacity(73);
    for byte in ip.octets().iter().rev() {
        let _ = write!(name, "{:x}.{:x}.", byte & 0x0f, byte >> 4);
    }
    name.push_str("ip6.arpa.");
    name
}

/// Validates a forward lookup. The domain is checked before the type.
pub fn validate_forward(
    server: &str,
    domain: &str,
    query_type: &str,
) -> Result<DnsQuery, DomainError> {
    let ascii = normalize_domain(domain)?;
    if !is_domain_name(&ascii) {
        return Err(DomainError::MalformedDomainName);
    }
    let record_type = parse_record_type(query_type)?;

    Ok(DnsQuery::new(server, ascii, record_type))
}

/// Validates a reverse lookup; the query type is always PTR.
pub fn validate_reverse(server: &str, ip: &str) -> Result<DnsQuery, DomainError> {
    let addr = ip
        .parse::<IpAddr>()
        .map_err(|_| DomainError::InvalidIpAddress)?;

    Ok(DnsQuery::new(server, reverse_name(addr), RecordType::PTR))
}
