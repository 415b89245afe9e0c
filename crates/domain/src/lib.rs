//! Ferrous Lookup Domain Layer
pub mod config;
pub mod dns_query;
pub mod dns_record;
pub mod dns_request;
pub mod errors;
pub mod resolution;

pub use config::{CliOverrides, ConfigError, LoggingConfig, LookupConfig, ResolverConfig};
pub use dns_query::DnsQuery;
pub use dns_record::{RecordType, ResourceRecord};
pub use dns_request::LookupRequest;
pub use errors::DomainError;
pub use resolution::{Resolution, ResolveError};
