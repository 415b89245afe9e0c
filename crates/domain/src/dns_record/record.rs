use super::RecordType;

/// Placeholder address carried by synthetic (sentinel) records.
pub const SENTINEL_VALUE: &str = "0.0.0.0";

/// Marker value for SOA records, whose RDATA is not decoded.
pub const SOA_MARKER: &str = "----";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceRecord {
    pub name: String,

    pub ttl: i32,

    pub record_type: RecordType,

    /// Dotted IPv4, colon-separated IPv6, a domain name or a placeholder.
    pub value: String,
}

impl ResourceRecord {
    pub fn new(
        name: impl Into<String>,
        ttl: i32,
        record_type: RecordType,
        value: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            ttl,
            record_type,
            value: value.into(),
        }
    }

    /// A synthetic `A 0.0.0.0` record whose TTL carries a status code.
    pub fn sentinel(name: impl Into<String>, ttl: i32) -> Self {
        Self::new(name, ttl, RecordType::A, SENTINEL_VALUE)
    }

    pub fn is_type(&self, record_type: RecordType) -> bool {
        self.record_type == record_type
    }
}
