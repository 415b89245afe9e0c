#![allow(dead_code)]
use async_trait::async_trait;
use ferrous_lookup_domain::DomainError;
use ferrous_lookup_infrastructure::dns::transport::{DnsTransport, TransportResponse};
use std::collections::VecDeque;
use std::net::SocketAddr;
use std::sync::Mutex;
use std::time::Duration;

type Handler = dyn Fn(SocketAddr, &[u8]) -> Vec<Vec<u8>> + Send + Sync;

#[derive(Debug, Clone)]
pub struct SentQuery {
    pub server: SocketAddr,
    pub bytes: Vec<u8>,
}

/// In-memory transport. Every send is handed to `handler`, whose returned
/// datagrams are queued for subsequent receives. An empty queue times out
/// immediately and a new round discards whatever is still queued.
pub struct MockTransport {
    handler: Box<Handler>,
    inbox: Mutex<VecDeque<TransportResponse>>,
    sent: Mutex<Vec<SentQuery>>,
}

impl MockTransport {
    pub fn new<F>(handler: F) -> Self
    where
        F: Fn(SocketAddr, &[u8]) -> Vec<Vec<u8>> + Send + Sync + 'static,
    {
        Self {
            handler: Box::new(handler),
            inbox: Mutex::new(VecDeque::new()),
            sent: Mutex::new(Vec::new()),
        }
    }

    pub fn sent(&self) -> Vec<SentQuery> {
        self.sent.lock().unwrap().clone()
    }

    pub fn sent_count(&self) -> usize {
        self.sent.lock().unwrap().len()
    }
}

#[async_trait]
impl DnsTransport for MockTransport {
    async fn begin_round(&self, _server: SocketAddr) -> Result<(), DomainError> {
        self.inbox.lock().unwrap().clear();
        Ok(())
    }

    async fn send_to(&self, message_bytes: &[u8], server: SocketAddr) -> Result<(), DomainError> {
        self.sent.lock().unwrap().push(SentQuery {
            server,
            bytes: message_bytes.to_vec(),
        });

        let replies = (self.handler)(server, message_bytes);
        let mut inbox = self.inbox.lock().unwrap();
        inbox.extend(replies.into_iter().map(|bytes| TransportResponse {
            bytes,
            from: server,
        }));
        Ok(())
    }

    async fn recv(&self, _timeout: Duration) -> Result<TransportResponse, DomainError> {
        self.inbox
            .lock()
            .unwrap()
            .pop_front()
            .ok_or(DomainError::QueryTimeout)
    }

    fn protocol_name(&self) -> &'static str {
        "MOCK"
    }
}
