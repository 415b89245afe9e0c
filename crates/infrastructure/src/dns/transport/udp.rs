//! UDP Transport for DNS queries (RFC 1035 §4.2.1)
//!
//! Messages are sent as-is (no framing). Each query round gets its own
//! ephemeral socket, so late or duplicated replies from an earlier round
//! never reach the next one. A retransmission stays on the round's socket.

use super::{DnsTransport, TransportResponse};
use async_trait::async_trait;
use ferrous_lookup_domain::DomainError;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::net::UdpSocket;
use tracing::debug;

/// DNS over UDP transport
pub struct UdpTransport {
    socket: Mutex<Option<Arc<UdpSocket>>>,
    recv_buffer_size: usize,
}

impl UdpTransport {
    pub fn new(recv_buffer_size: usize) -> Self {
        Self {
            socket: Mutex::new(None),
            recv_buffer_size,
        }
    }

    /// Bind an ephemeral socket of the same address family as `server`.
    async fn bind_for(server: SocketAddr) -> Result<UdpSocket, DomainError> {
        // Bind to ephemeral port (0 = OS assigns)
        let bind_addr = if server.is_ipv4() {
            SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), 0)
        } else {
            SocketAddr::new(IpAddr::V6(Ipv6Addr::UNSPECIFIED), 0)
        };

        UdpSocket::bind(bind_addr)
            .await
            .map_err(|e| DomainError::IoError(format!("Failed to bind UDP socket: {}", e)))
    }

    fn current(&self) -> Result<Arc<UdpSocket>, DomainError> {
        self.socket
            .lock()
            .map_err(|_| DomainError::IoError("UDP socket lock poisoned".to_string()))?
            .clone()
            .ok_or_else(|| DomainError::IoError("No query round in progress".to_string()))
    }

    fn replace(&self, socket: UdpSocket) -> Result<Arc<UdpSocket>, DomainError> {
        let socket = Arc::new(socket);
        let mut slot = self
            .socket
            .lock()
            .map_err(|_| DomainError::IoError("UDP socket lock poisoned".to_string()))?;
        *slot = Some(Arc::clone(&socket));
        Ok(socket)
    }
}

/// An IPv6 socket reaches IPv4 servers through v4-mapped addresses.
fn target_for(socket: &UdpSocket, server: SocketAddr) -> SocketAddr {
    match (socket.local_addr(), server) {
        (Ok(SocketAddr::V6(_)), SocketAddr::V4(v4)) => {
            SocketAddr::new(IpAddr::V6(v4.ip().to_ipv6_mapped()), v4.port())
        }
        _ => server,
    }
}

#[async_trait]
impl DnsTransport for UdpTransport {
    async fn begin_round(&self, server: SocketAddr) -> Result<(), DomainError> {
        let socket = self.replace(Self::bind_for(server).await?)?;
        debug!(server = %server, local_addr = ?socket.local_addr().ok(), "UDP socket bound");
        Ok(())
    }

    async fn send_to(&self, message_bytes: &[u8], server: SocketAddr) -> Result<(), DomainError> {
        let socket = match self.current() {
            Ok(socket) => socket,
            Err(_) => self.replace(Self::bind_for(server).await?)?,
        };
        let target = target_for(&socket, server);

        let bytes_sent = socket.send_to(message_bytes, target).await.map_err(|e| {
            DomainError::IoError(format!("Failed to send UDP query to {}: {}", server, e))
        })?;

        debug!(server = %server, bytes_sent = bytes_sent, "UDP query sent");
        Ok(())
    }

    async fn recv(&self, timeout: Duration) -> Result<TransportResponse, DomainError> {
        let socket = self.current()?;
        let mut recv_buf = vec![0u8; self.recv_buffer_size];

        let (bytes_received, from) = tokio::time::timeout(timeout, socket.recv_from(&mut recv_buf))
            .await
            .map_err(|_| DomainError::QueryTimeout)?
            .map_err(|e| DomainError::IoError(format!("Failed to receive UDP response: {}", e)))?;

        recv_buf.truncate(bytes_received);

        debug!(from = %from, bytes_received = bytes_received, "UDP response received");

        Ok(TransportResponse {
            bytes: recv_buf,
            from,
        })
    }

    fn protocol_name(&self) -> &'static str {
        "UDP"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn local_addr(transport: &UdpTransport) -> SocketAddr {
        transport.current().unwrap().local_addr().unwrap()
    }

    #[tokio::test]
    async fn test_begin_round_binds_matching_family() {
        let transport = UdpTransport::new(512);
        transport
            .begin_round("198.41.0.4:53".parse().unwrap())
            .await
            .unwrap();

        assert!(local_addr(&transport).is_ipv4());
        assert_eq!(transport.protocol_name(), "UDP");
    }

    #[tokio::test]
    async fn test_recv_without_round_fails() {
        let transport = UdpTransport::new(512);
        let result = transport.recv(Duration::from_millis(20)).await;
        assert!(matches!(result, Err(DomainError::IoError(_))));
    }

    #[tokio::test]
    async fn test_recv_times_out() {
        let transport = UdpTransport::new(512);
        transport
            .begin_round("127.0.0.1:53".parse().unwrap())
            .await
            .unwrap();

        let result = transport.recv(Duration::from_millis(20)).await;
        assert!(matches!(result, Err(DomainError::QueryTimeout)));
    }

    #[tokio::test]
    async fn test_round_trip_over_loopback() {
        let peer = UdpSocket::bind("127.0.0.1:0").await.unwrap();
        let peer_addr = peer.local_addr().unwrap();

        let transport = UdpTransport::new(512);
        transport.begin_round(peer_addr).await.unwrap();
        transport.send_to(&[1, 2, 3], peer_addr).await.unwrap();

        let mut buf = [0u8; 16];
        let (len, client) = peer.recv_from(&mut buf).await.unwrap();
        assert_eq!(&buf[..len], &[1, 2, 3]);
        peer.send_to(&[4, 5], client).await.unwrap();

        let response = transport.recv(Duration::from_secs(1)).await.unwrap();
        assert_eq!(response.bytes, vec![4, 5]);
        assert_eq!(response.from, peer_addr);
    }

    #[tokio::test]
    async fn test_new_round_drops_pending_datagrams() {
        let peer = UdpSocket::bind("127.0.0.1:0").await.unwrap();
        let peer_addr = peer.local_addr().unwrap();

        let transport = UdpTransport::new(512);
        transport.begin_round(peer_addr).await.unwrap();
        transport.send_to(&[1], peer_addr).await.unwrap();

        let mut buf = [0u8; 16];
        let (_, client) = peer.recv_from(&mut buf).await.unwrap();
        peer.send_to(&[9, 9], client).await.unwrap();
        peer.send_to(&[9, 9], client).await.unwrap();

        let first = transport.recv(Duration::from_secs(1)).await.unwrap();
        assert_eq!(first.bytes, vec![9, 9]);

        transport.begin_round(peer_addr).await.unwrap();
        let result = transport.recv(Duration::from_millis(50)).await;
        assert!(matches!(result, Err(DomainError::QueryTimeout)));
    }
}
