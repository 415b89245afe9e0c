#![allow(dead_code)]

use async_trait::async_trait;
use ferrous_lookup_application::ports::DnsResolver;
use ferrous_lookup_domain::{LookupRequest, Resolution, ResolveError};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Resolver returning canned outcomes per FQDN. Unknown names fail with
/// `NameError`.
#[derive(Clone, Default)]
pub struct MockDnsResolver {
    outcomes: Arc<RwLock<HashMap<String, Result<Resolution, ResolveError>>>>,
    requests: Arc<RwLock<Vec<LookupRequest>>>,
}

impl MockDnsResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn set_response(&self, fqdn: &str, resolution: Resolution) {
        self.outcomes
            .write()
            .await
            .insert(fqdn.to_string(), Ok(resolution));
    }

    pub async fn set_response_error(&self, fqdn: &str, error: ResolveError) {
        self.outcomes
            .write()
            .await
            .insert(fqdn.to_string(), Err(error));
    }

    pub async fn requests(&self) -> Vec<LookupRequest> {
        self.requests.read().await.clone()
    }
}

#[async_trait]
impl DnsResolver for MockDnsResolver {
    async fn resolve(&self, request: &LookupRequest) -> Result<Resolution, ResolveError> {
        self.requests.write().await.push(request.clone());

        self.outcomes
            .read()
            .await
            .get(request.fqdn.as_ref())
            .cloned()
            .unwrap_or(Err(ResolveError::NameError))
    }
}
