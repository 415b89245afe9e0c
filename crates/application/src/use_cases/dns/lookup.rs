use crate::ports::DnsResolver;
use ferrous_lookup_domain::{LookupRequest, ResourceRecord};
use std::sync::Arc;
use std::time::Instant;
use tracing::{info, warn};

/// Runs one lookup and flattens the outcome into printable records: the
/// final answers, the relabelled authority records of an authoritative
/// empty answer, or a single sentinel record standing for the error.
pub struct LookupUseCase {
    resolver: Arc<dyn DnsResolver>,
}

impl LookupUseCase {
    pub fn new(resolver: Arc<dyn DnsResolver>) -> Self {
        Self { resolver }
    }

    pub async fn execute(&self, request: &LookupRequest) -> Vec<ResourceRecord> {
        let start = Instant::now();

        match self.resolver.resolve(request).await {
            Ok(resolution) => {
                info!(
                    domain = %request.fqdn,
                    records = resolution.records().len(),
                    nodata = resolution.is_nodata(),
                    elapsed_ms = start.elapsed().as_millis() as u64,
                    "Lookup completed"
                );
                resolution.into_records()
            }
            Err(e) => {
                warn!(
                    domain = %request.fqdn,
                    error = %e,
                    elapsed_ms = start.elapsed().as_millis() as u64,
                    "Lookup failed"
                );
                e.sentinel_record(&request.fqdn).into_iter().collect()
            }
        }
    }
}
