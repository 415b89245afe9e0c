use super::RecordType;
use std::sync::Arc;

/// The question of a single query round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnsQuery {
    pub domain: Arc<str>,
    pub record_type: RecordType,
}

impl DnsQuery {
    pub fn new(domain: impl Into<Arc<str>>, record_type: RecordType) -> Self {
        Self {
            domain: domain.into(),
            record_type,
        }
    }

    pub fn for_address(domain: impl Into<Arc<str>>, want_ipv6: bool) -> Self {
        Self::new(domain, RecordType::address(want_ipv6))
    }
}
