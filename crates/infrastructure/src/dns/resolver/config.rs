use rrda_domain::DnsConfig;
use std::time::Duration;

/// Immutable per-process resolver settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolverConfig {
    /// Applied to address lookup and to each send/receive of an exchange.
    pub timeout: Duration,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self::from(&DnsConfig::default())
    }
}

impl From<&DnsConfig> for ResolverConfig {
    fn from(config: &DnsConfig) -> Self {
        Self {
            timeout: config.timeout(),
        }
    }
}

impl ResolverConfig {
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}
