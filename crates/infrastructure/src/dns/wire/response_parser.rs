use super::message_builder::HEADER_LEN;
use super::name_codec::NameCodec;
use ferrous_lookup_domain::dns_record::SOA_MARKER;
use ferrous_lookup_domain::{DomainError, RecordType, ResolveError, ResourceRecord};
use std::net::Ipv4Addr;
use tracing::debug;

const QR_BIT: u8 = 0x80;
const AA_BIT: u8 = 0x04;
const RCODE_MASK: u8 = 0x0F;

/// TYPE + CLASS + TTL + RDLENGTH
const RECORD_FIXED_LEN: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResponseHeader {
    pub id: u16,

    pub is_response: bool,

    pub authoritative: bool,

    pub rcode: u8,

    pub qdcount: u16,

    pub ancount: u16,

    pub nscount: u16,

    pub arcount: u16,
}

impl ResponseHeader {
    pub fn parse(message: &[u8]) -> Result<Self, DomainError> {
        if message.len() < HEADER_LEN {
            return Err(DomainError::MalformedMessage(format!(
                "message of {} bytes is shorter than a DNS header",
                message.len()
            )));
        }

        let word = |i: usize| u16::from_be_bytes([message[i], message[i + 1]]);
        let flags = message[2];

        Ok(Self {
            id: word(0),
            is_response: flags & QR_BIT != 0,
            authoritative: flags & AA_BIT != 0,
            rcode: message[3] & RCODE_MASK,
            qdcount: word(4),
            ancount: word(6),
            nscount: word(8),
            arcount: word(10),
        })
    }

    /// Checks, in order: transaction ID, QR flag, RCODE.
    ///
    /// A mismatched ID is reported as `ResolveError::TransactionMismatch` so
    /// the caller can wait for one more datagram; the others are terminal.
    pub fn validate(&self, expected_id: u16) -> Result<(), ResolveError> {
        if self.id != expected_id {
            return Err(ResolveError::TransactionMismatch {
                expected: expected_id,
                received: self.id,
            });
        }

        if !self.is_response {
            return Err(ResolveError::NotAResponse);
        }

        if self.rcode != 0 {
            return Err(ResolveError::from_rcode(self.rcode));
        }

        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct DnsResponse {
    pub header: ResponseHeader,

    pub answers: Vec<ResourceRecord>,

    pub nameservers: Vec<ResourceRecord>,

    pub additional: Vec<ResourceRecord>,
}

impl DnsResponse {
    pub fn is_authoritative(&self) -> bool {
        self.header.authoritative
    }

    /// First authority record that actually names a nameserver.
    pub fn first_nameserver(&self) -> Option<&ResourceRecord> {
        self.nameservers.iter().find(|r| r.is_type(RecordType::NS))
    }

    /// IPv4 glue for `ns_name` from the additional section.
    pub fn glue_for(&self, ns_name: &str) -> Option<&ResourceRecord> {
        self.additional
            .iter()
            .find(|r| r.is_type(RecordType::A) && r.name.eq_ignore_ascii_case(ns_name))
    }
}

pub struct ResponseParser {
    max_pointer_hops: usize,
}

impl ResponseParser {
    pub fn new(max_pointer_hops: usize) -> Self {
        Self { max_pointer_hops }
    }

    /// Decode the record sections of `message` given its already parsed
    /// header. Names are always decompressed against the full message.
    pub fn parse_sections(
        &self,
        message: &[u8],
        header: ResponseHeader,
    ) -> Result<DnsResponse, DomainError> {
        let mut pos = self.skip_questions(message, header.qdcount)?;

        let mut answers = Vec::with_capacity(header.ancount as usize);
        let mut nameservers = Vec::with_capacity(header.nscount as usize);
        let mut additional = Vec::with_capacity(header.arcount as usize);

        for _ in 0..header.ancount {
            let (record, next) = self.parse_record(message, pos)?;
            answers.push(record);
            pos = next;
        }
        for _ in 0..header.nscount {
            let (record, next) = self.parse_record(message, pos)?;
            nameservers.push(record);
            pos = next;
        }
        for _ in 0..header.arcount {
            let (record, next) = self.parse_record(message, pos)?;
            additional.push(record);
            pos = next;
        }

        debug!(
            id = header.id,
            authoritative = header.authoritative,
            answers = answers.len(),
            authority = nameservers.len(),
            additional = additional.len(),
            "DNS response parsed"
        );

        Ok(DnsResponse {
            header,
            answers,
            nameservers,
            additional,
        })
    }

    fn skip_questions(&self, message: &[u8], qdcount: u16) -> Result<usize, DomainError> {
        let mut pos = HEADER_LEN;
        for _ in 0..qdcount {
            let (_, name_len) = NameCodec::decode(message, pos, self.max_pointer_hops)?;
            pos += name_len + 4;
            if pos > message.len() {
                return Err(DomainError::MalformedMessage(
                    "question section runs past end".to_string(),
                ));
            }
        }
        Ok(pos)
    }

    /// Decode one resource record at `offset`; returns it with the offset of
    /// the next record.
    fn parse_record(
        &self,
        message: &[u8],
        offset: usize,
    ) -> Result<(ResourceRecord, usize), DomainError> {
        let (name, name_len) = NameCodec::decode(message, offset, self.max_pointer_hops)?;
        let mut pos = offset + name_len;

        let fixed = message
            .get(pos..pos + RECORD_FIXED_LEN)
            .ok_or_else(|| truncated_record(&name))?;
        let record_type = RecordType::from_u16(u16::from_be_bytes([fixed[0], fixed[1]]));
        let ttl = i32::from_be_bytes([fixed[4], fixed[5], fixed[6], fixed[7]]);
        let rdlength = u16::from_be_bytes([fixed[8], fixed[9]]) as usize;
        pos += RECORD_FIXED_LEN;

        let rdata = message
            .get(pos..pos + rdlength)
            .ok_or_else(|| truncated_record(&name))?;

        let value = match record_type {
            RecordType::A => format_ipv4(rdata)?,
            RecordType::AAAA => format_ipv6(rdata)?,
            RecordType::NS | RecordType::CNAME => {
                NameCodec::decode(message, pos, self.max_pointer_hops)?.0
            }
            RecordType::SOA => SOA_MARKER.to_string(),
            RecordType::Other(_) => String::new(),
        };

        Ok((
            ResourceRecord::new(name, ttl, record_type, value),
            pos + rdlength,
        ))
    }
}

fn truncated_record(name: &str) -> DomainError {
    DomainError::MalformedMessage(format!("record for '{}' runs past end", name))
}

fn format_ipv4(rdata: &[u8]) -> Result<String, DomainError> {
    let octets: [u8; 4] = rdata.try_into().map_err(|_| {
        DomainError::MalformedMessage(format!("A record with {} bytes of data", rdata.len()))
    })?;
    Ok(Ipv4Addr::from(octets).to_string())
}

/// Eight lowercase hex groups without zero compression, e.g.
/// `2001:db8:0:0:0:0:0:1`.
fn format_ipv6(rdata: &[u8]) -> Result<String, DomainError> {
    if rdata.len() != 16 {
        return Err(DomainError::MalformedMessage(format!(
            "AAAA record with {} bytes of data",
            rdata.len()
        )));
    }

    let groups: Vec<String> = rdata
        .chunks_exact(2)
        .map(|pair| format!("{:x}", u16::from_be_bytes([pair[0], pair[1]])))
        .collect();
    Ok(groups.join(":"))
}
