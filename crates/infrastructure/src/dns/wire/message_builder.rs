//! DNS Message Builder
//!
//! Constructs DNS query messages in wire format: a 12-byte header, a single
//! question and the QTYPE/QCLASS trailer. Queries are always iterative, the
//! RD (Recursion Desired) bit is never set.

use super::name_codec::NameCodec;
use ferrous_lookup_domain::{DnsQuery, DomainError, RecordType};

pub const HEADER_LEN: usize = 12;
pub const CLASS_IN: u16 = 1;

/// Builds DNS query messages in wire format
pub struct MessageBuilder;

impl MessageBuilder {
    /// Build a query and return its transaction ID alongside the bytes
    ///
    /// The ID is needed to match the response, and must be reused verbatim
    /// when the same query is retransmitted.
    pub fn build_query_with_id(query: &DnsQuery) -> Result<(u16, Vec<u8>), DomainError> {
        let qname = NameCodec::encode(&query.domain)?;
        let id = fastrand::u16(..);
        Ok((id, Self::build(id, &qname, query.record_type)))
    }

    /// Assemble a query from an already encoded QNAME
    pub fn build(id: u16, qname: &[u8], record_type: RecordType) -> Vec<u8> {
        let mut buf = Vec::with_capacity(HEADER_LEN + qname.len() + 4);

        buf.extend_from_slice(&id.to_be_bytes());
        // QR=0, OPCODE=0, AA=0, TC=0, RD=0 | RA=0, Z=0, RCODE=0
        buf.push(0x00);
        buf.push(0x00);
        // QDCOUNT, ANCOUNT, NSCOUNT, ARCOUNT
        buf.extend_from_slice(&1u16.to_be_bytes());
        buf.extend_from_slice(&0u16.to_be_bytes());
        buf.extend_from_slice(&0u16.to_be_bytes());
        buf.extend_from_slice(&0u16.to_be_bytes());

        buf.extend_from_slice(qname);
        buf.extend_from_slice(&record_type.to_u16().to_be_bytes());
        buf.extend_from_slice(&CLASS_IN.to_be_bytes());

        buf
    }
}
