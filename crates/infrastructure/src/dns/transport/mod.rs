pub mod udp;

use async_trait::async_trait;
use ferrous_lookup_domain::DomainError;
use std::net::SocketAddr;
use std::time::Duration;

pub use udp::UdpTransport;

#[derive(Debug)]
pub struct TransportResponse {
    pub bytes: Vec<u8>,

    pub from: SocketAddr,
}

/// A datagram endpoint that the resolver drives one message at a time.
///
/// Send and receive are separate so the caller can wait for a further
/// datagram on the same socket without retransmitting.
#[async_trait]
pub trait DnsTransport: Send + Sync {
    /// Start a new query round towards `server`. Datagrams still pending
    /// from earlier rounds must not be delivered afterwards.
    async fn begin_round(&self, server: SocketAddr) -> Result<(), DomainError>;

    async fn send_to(&self, message_bytes: &[u8], server: SocketAddr) -> Result<(), DomainError>;

    /// Wait up to `timeout` for the next datagram.
    /// Expiry is reported as `DomainError::QueryTimeout`.
    async fn recv(&self, timeout: Duration) -> Result<TransportResponse, DomainError>;

    fn protocol_name(&self) -> &'static str;
}
