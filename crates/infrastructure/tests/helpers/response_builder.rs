#![allow(dead_code)]
use ferrous_lookup_infrastructure::dns::wire::NameCodec;
use std::net::{Ipv4Addr, Ipv6Addr};

const TYPE_A: u16 = 1;
const TYPE_NS: u16 = 2;
const TYPE_CNAME: u16 = 5;
const TYPE_SOA: u16 = 6;
const TYPE_AAAA: u16 = 28;

/// Builds raw response datagrams for a captured query.
pub struct ResponseBuilder {
    id: u16,
    flags: [u8; 2],
    question: Vec<u8>,
    answers: Vec<Vec<u8>>,
    authority: Vec<Vec<u8>>,
    additional: Vec<Vec<u8>>,
}

impl ResponseBuilder {
    /// Echo the query's ID and question, QR set, everything else clear.
    pub fn reply_to(query: &[u8]) -> Self {
        Self {
            id: u16::from_be_bytes([query[0], query[1]]),
            flags: [0x80, 0x00],
            question: query[12..].to_vec(),
            answers: Vec::new(),
            authority: Vec::new(),
            additional: Vec::new(),
        }
    }

    pub fn id(mut self, id: u16) -> Self {
        self.id = id;
        self
    }

    pub fn authoritative(mut self) -> Self {
        self.flags[0] |= 0x04;
        self
    }

    pub fn not_response(mut self) -> Self {
        self.flags[0] &= !0x80;
        self
    }

    pub fn rcode(mut self, rcode: u8) -> Self {
        self.flags[1] = (self.flags[1] & 0xF0) | (rcode & 0x0F);
        self
    }

    pub fn answer_a(mut self, name: &str, ttl: i32, ip: Ipv4Addr) -> Self {
        self.answers.push(record(name, TYPE_A, ttl, &ip.octets()));
        self
    }

    /// A record whose owner is a compression pointer to the question name.
    pub fn answer_a_compressed(mut self, ttl: i32, ip: Ipv4Addr) -> Self {
        self.answers
            .push(record_with_owner(&[0xC0, 0x0C], TYPE_A, ttl, &ip.octets()));
        self
    }

    pub fn answer_aaaa(mut self, name: &str, ttl: i32, ip: Ipv6Addr) -> Self {
        self.answers.push(record(name, TYPE_AAAA, ttl, &ip.octets()));
        self
    }

    pub fn answer_cname(mut self, name: &str, ttl: i32, target: &str) -> Self {
        self.answers.push(record(name, TYPE_CNAME, ttl, &encode(target)));
        self
    }

    pub fn authority_ns(mut self, zone: &str, host: &str) -> Self {
        self.authority.push(record(zone, TYPE_NS, 172800, &encode(host)));
        self
    }

    pub fn authority_soa(mut self, zone: &str) -> Self {
        let mut rdata = encode(&format!("ns1.{}", zone));
        rdata.extend_from_slice(&encode(&format!("hostmaster.{}", zone)));
        for value in [2024010101u32, 7200, 3600, 1209600, 300] {
            rdata.extend_from_slice(&value.to_be_bytes());
        }
        self.authority.push(record(zone, TYPE_SOA, 900, &rdata));
        self
    }

    pub fn additional_a(mut self, name: &str, ip: Ipv4Addr) -> Self {
        self.additional.push(record(name, TYPE_A, 172800, &ip.octets()));
        self
    }

    pub fn build(self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(512);
        buf.extend_from_slice(&self.id.to_be_bytes());
        buf.extend_from_slice(&self.flags);
        buf.extend_from_slice(&1u16.to_be_bytes());
        buf.extend_from_slice(&(self.answers.len() as u16).to_be_bytes());
        buf.extend_from_slice(&(self.authority.len() as u16).to_be_bytes());
        buf.extend_from_slice(&(self.additional.len() as u16).to_be_bytes());
        buf.extend_from_slice(&self.question);
        for rr in self
            .answers
            .iter()
            .chain(&self.authority)
            .chain(&self.additional)
        {
            buf.extend_from_slice(rr);
        }
        buf
    }
}

/// QNAME of a captured query.
pub fn query_name(query: &[u8]) -> String {
    NameCodec::decode(query, 12, 16).unwrap().0
}

/// QTYPE of a captured query.
pub fn query_type(query: &[u8]) -> u16 {
    let (_, consumed) = NameCodec::decode(query, 12, 16).unwrap();
    let at = 12 + consumed;
    u16::from_be_bytes([query[at], query[at + 1]])
}

pub fn query_id(query: &[u8]) -> u16 {
    u16::from_be_bytes([query[0], query[1]])
}

fn encode(name: &str) -> Vec<u8> {
    NameCodec::encode(name).unwrap()
}

fn record(name: &str, rtype: u16, ttl: i32, rdata: &[u8]) -> Vec<u8> {
    record_with_owner(&encode(name), rtype, ttl, rdata)
}

fn record_with_owner(owner: &[u8], rtype: u16, ttl: i32, rdata: &[u8]) -> Vec<u8> {
    let mut rr = owner.to_vec();
    rr.extend_from_slice(&rtype.to_be_bytes());
    rr.extend_from_slice(&1u16.to_be_bytes());
    rr.extend_from_slice(&ttl.to_be_bytes());
    rr.extend_from_slice(&(rdata.len() as u16).to_be_bytes());
    rr.extend_from_slice(rdata);
    rr
}
