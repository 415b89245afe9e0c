use std::net::SocketAddr;
use std::sync::Arc;

/// One top-level lookup: where to start and what to resolve.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupRequest {
    pub root_server: SocketAddr,
    pub fqdn: Arc<str>,
    pub want_ipv6: bool,
}

impl LookupRequest {
    pub fn new(root_server: SocketAddr, fqdn: impl Into<Arc<str>>, want_ipv6: bool) -> Self {
        Self {
            root_server,
            fqdn: fqdn.into(),
            want_ipv6,
        }
    }
}
