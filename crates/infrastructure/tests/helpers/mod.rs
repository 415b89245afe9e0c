#![allow(dead_code)]

pub mod dns_server_mock;
pub mod mock_transport;
pub mod response_builder;

pub use dns_server_mock::MockDnsServer;
pub use mock_transport::{MockTransport, SentQuery};
pub use response_builder::{query_id, query_name, query_type, ResponseBuilder};
