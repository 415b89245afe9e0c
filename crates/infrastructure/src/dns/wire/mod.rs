pub mod message_builder;
pub mod name_codec;
pub mod response_parser;

pub use message_builder::MessageBuilder;
pub use name_codec::NameCodec;
pub use response_parser::{DnsResponse, ResponseHeader, ResponseParser};
