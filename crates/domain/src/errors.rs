use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid domain name: {0}")]
    InvalidDomainName(String),

    #[error("Malformed DNS message: {0}")]
    MalformedMessage(String),

    #[error("Query timeout")]
    QueryTimeout,

    #[error("I/O error: {0}")]
    IoError(String),
}
