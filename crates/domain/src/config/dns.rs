use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DnsConfig {
    /// Upstream query timeout in milliseconds, applied to each exchange.
    #[serde(default = "default_query_timeout")]
    pub query_timeout: u64,
}

impl DnsConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.query_timeout)
    }
}

impl Default for DnsConfig {
    fn default() -> Self {
        Self {
            query_timeout: default_query_timeout(),
        }
    }
}

fn default_query_timeout() -> u64 {
    2000
}
