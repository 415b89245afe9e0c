use async_trait::async_trait;
use ferrous_lookup_domain::{LookupRequest, Resolution, ResolveError};

#[async_trait]
pub trait DnsResolver: Send + Sync {
    /// Resolve `request.fqdn` starting at `request.root_server`.
    ///
    /// Any failure is terminal for the whole chain; records gathered in
    /// earlier rounds are never returned alongside an error.
    async fn resolve(&self, request: &LookupRequest) -> Result<Resolution, ResolveError>;
}
