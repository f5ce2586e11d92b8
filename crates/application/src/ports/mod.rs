mod dns_resolver;

pub use dns_resolver::DnsResolver;

pub use rrda_domain::DnsQuery;
