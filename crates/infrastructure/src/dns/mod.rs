pub mod resolver;
pub mod transport;
pub mod wire;

pub use resolver::IterativeResolver;
pub use transport::{DnsTransport, TransportResponse, UdpTransport};
pub use wire::{DnsResponse, MessageBuilder, NameCodec, ResponseHeader, ResponseParser};
