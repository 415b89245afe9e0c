use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ResolverConfig {
    /// Per-receive timeout in milliseconds
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    /// Ceiling on queries sent across one whole lookup chain
    #[serde(default = "default_max_queries")]
    pub max_queries: u32,

    /// Retransmissions of an unanswered query
    #[serde(default = "default_retries")]
    pub retries: u32,

    #[serde(default = "default_dns_port")]
    pub dns_port: u16,

    /// Upper bound on compression pointers followed while decoding one name
    #[serde(default = "default_max_pointer_hops")]
    pub max_pointer_hops: usize,

    #[serde(default = "default_recv_buffer_size")]
    pub recv_buffer_size: usize,
}

impl ResolverConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            timeout_ms: default_timeout_ms(),
            max_queries: default_max_queries(),
            retries: default_retries(),
            dns_port: default_dns_port(),
            max_pointer_hops: default_max_pointer_hops(),
            recv_buffer_size: default_recv_buffer_size(),
        }
    }
}

fn default_timeout_ms() -> u64 {
    5000
}

fn default_max_queries() -> u32 {
    30
}

fn default_retries() -> u32 {
    1
}

fn default_dns_port() -> u16 {
    53
}

fn default_max_pointer_hops() -> usize {
    64
}

fn default_recv_buffer_size() -> usize {
    4096
}
