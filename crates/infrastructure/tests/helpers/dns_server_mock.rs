#![allow(dead_code)]
use std::net::SocketAddr;
use tokio::net::UdpSocket;
use tokio::sync::oneshot;

/// UDP nameserver on loopback. `handler` maps each received query to an
/// optional reply; `None` leaves the query unanswered.
pub struct MockDnsServer {
    addr: SocketAddr,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl MockDnsServer {
    pub async fn start<F>(handler: F) -> Result<Self, std::io::Error>
    where
        F: Fn(&[u8]) -> Option<Vec<u8>> + Send + Sync + 'static,
    {
        Self::start_with_copies(1, handler).await
    }

    /// Like `start`, but every reply is sent `copies` times.
    pub async fn start_with_copies<F>(copies: usize, handler: F) -> Result<Self, std::io::Error>
    where
        F: Fn(&[u8]) -> Option<Vec<u8>> + Send + Sync + 'static,
    {
        let socket = UdpSocket::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let addr = socket.local_addr()?;

        let (shutdown_tx, mut shutdown_rx) = oneshot::channel();

        tokio::spawn(async move {
            let mut buf = vec![0u8; 512];

            loop {
                tokio::select! {
                    _ = &mut shutdown_rx => {
                        break;
                    }
                    result = socket.recv_from(&mut buf) => {
                        if let Ok((len, peer)) = result {
                            if let Some(response) = handler(&buf[..len]) {
                                for _ in 0..copies {
                                    let _ = socket.send_to(&response, peer).await;
                                }
                            }
                        }
                    }
                }
            }
        });

        Ok(Self {
            addr,
            shutdown_tx: Some(shutdown_tx),
        })
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    pub fn shutdown(mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

impl Drop for MockDnsServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}
