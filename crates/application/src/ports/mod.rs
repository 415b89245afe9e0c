mod dns_resolver;
mod query_tracer;

pub use dns_resolver::DnsResolver;
pub use query_tracer::{QueryTrace, QueryTracer, ResponseTrace};

// Re-export for convenience
pub use ferrous_lookup_domain::{LookupRequest, Resolution, ResolveError};
