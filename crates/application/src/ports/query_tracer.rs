use ferrous_lookup_domain::{RecordType, ResourceRecord};
use std::net::SocketAddr;

/// A query about to be put on the wire. Emitted again for a retransmission.
#[derive(Debug, Clone, Copy)]
pub struct QueryTrace<'a> {
    pub id: u16,
    pub domain: &'a str,
    pub record_type: RecordType,
    pub server: SocketAddr,
    pub attempt: u32,
}

/// A response that passed header validation, with its decoded sections.
#[derive(Debug, Clone, Copy)]
pub struct ResponseTrace<'a> {
    pub id: u16,
    pub authoritative: bool,
    pub answers: &'a [ResourceRecord],
    pub nameservers: &'a [ResourceRecord],
    pub additional: &'a [ResourceRecord],
}

/// Observer for the wire-level steps of a lookup (the `-t` trace output).
pub trait QueryTracer: Send + Sync {
    fn query_sent(&self, query: &QueryTrace<'_>);

    fn response_received(&self, response: &ResponseTrace<'_>);
}
