//! Outcome of one top-level lookup.
//!
//! A lookup either produces records or fails with exactly one
//! [`ResolveError`]. Callers that need the flat "records or one sentinel
//! record" view use [`Resolution::into_records`] and
//! [`ResolveError::sentinel_record`].

use crate::dns_record::{RecordType, ResourceRecord, SENTINEL_VALUE};
use crate::errors::DomainError;
use thiserror::Error;

pub const NXDOMAIN_TTL: i32 = -1;
pub const TIMEOUT_TTL: i32 = -2;
pub const QUERY_LIMIT_TTL: i32 = -3;
pub const FAILURE_TTL: i32 = -4;
pub const NEGATIVE_ANSWER_TTL: i32 = -6;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Final answer records, in wire order.
    Answers(Vec<ResourceRecord>),

    /// Authoritative reply without answers. Holds the authority-section
    /// records exactly as received.
    NoData(Vec<ResourceRecord>),
}

impl Resolution {
    pub fn records(&self) -> &[ResourceRecord] {
        match self {
            Resolution::Answers(records) | Resolution::NoData(records) => records,
        }
    }

    pub fn is_nodata(&self) -> bool {
        matches!(self, Resolution::NoData(_))
    }

    /// Flattens into printable records. Authority records of a `NoData`
    /// result keep their owner name but are relabelled `-6 A 0.0.0.0`.
    pub fn into_records(self) -> Vec<ResourceRecord> {
        match self {
            Resolution::Answers(records) => records,
            Resolution::NoData(records) => records
                .into_iter()
                .map(|r| {
                    ResourceRecord::new(r.name, NEGATIVE_ANSWER_TTL, RecordType::A, SENTINEL_VALUE)
                })
                .collect(),
        }
    }
}

/// Terminal failure of a resolution chain.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    #[error("Root server host could not be resolved: {0}")]
    HostUnresolvable(String),

    #[error("No response after retransmission")]
    Timeout,

    #[error("Transaction ID mismatch: expected {expected}, received {received}")]
    TransactionMismatch { expected: u16, received: u16 },

    #[error("Received message is not a response")]
    NotAResponse,

    #[error("Server failure (RCODE {0})")]
    ServerError(u8),

    #[error("Domain not found (NXDOMAIN)")]
    NameError,

    #[error("Query limit of {0} exceeded")]
    QueryLimitExceeded(u32),

    #[error("Response carried neither answers nor a referral")]
    NoProgress,

    #[error("CNAME loop detected at {0}")]
    CnameLoop(String),

    #[error("Malformed DNS message: {0}")]
    MalformedMessage(String),

    #[error("Invalid domain name: {0}")]
    InvalidDomainName(String),

    #[error("Transport error: {0}")]
    Transport(String),
}

impl ResolveError {
    /// TTL of the sentinel record that stands for this error, if any.
    /// `NoProgress` has none: nothing is reported for it.
    pub fn sentinel_ttl(&self) -> Option<i32> {
        match self {
            ResolveError::NameError => Some(NXDOMAIN_TTL),
            ResolveError::Timeout => Some(TIMEOUT_TTL),
            ResolveError::QueryLimitExceeded(_) => Some(QUERY_LIMIT_TTL),
            ResolveError::NoProgress => None,
            _ => Some(FAILURE_TTL),
        }
    }

    pub fn sentinel_record(&self, fqdn: &str) -> Option<ResourceRecord> {
        self.sentinel_ttl().map(|ttl| ResourceRecord::sentinel(fqdn, ttl))
    }

    /// Maps an RCODE other than 0.
    pub fn from_rcode(rcode: u8) -> Self {
        match rcode {
            3 => ResolveError::NameError,
            other => ResolveError::ServerError(other),
        }
    }
}

impl From<DomainError> for ResolveError {
    fn from(error: DomainError) -> Self {
        match error {
            DomainError::QueryTimeout => ResolveError::Timeout,
            DomainError::MalformedMessage(msg) => ResolveError::MalformedMessage(msg),
            DomainError::InvalidDomainName(msg) => ResolveError::InvalidDomainName(msg),
            DomainError::IoError(msg) => ResolveError::Transport(msg),
        }
    }
}
