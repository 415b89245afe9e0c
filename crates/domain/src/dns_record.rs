mod record;
mod record_type;

pub use record::{ResourceRecord, SENTINEL_VALUE, SOA_MARKER};
pub use record_type::RecordType;
