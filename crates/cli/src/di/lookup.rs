use crate::output::ConsoleTracer;
use ferrous_lookup_application::use_cases::LookupUseCase;
use ferrous_lookup_domain::LookupConfig;
use ferrous_lookup_infrastructure::dns::{IterativeResolver, UdpTransport};
use std::sync::Arc;

pub struct LookupServices {
    pub lookup: Arc<LookupUseCase>,
}

impl LookupServices {
    pub fn new(config: &LookupConfig, trace: bool) -> Self {
        let transport = UdpTransport::new(config.resolver.recv_buffer_size);

        let mut resolver = IterativeResolver::new(Arc::new(transport), config.resolver.clone());
        if trace {
            resolver = resolver.with_tracer(Arc::new(ConsoleTracer));
        }

        Self {
            lookup: Arc::new(LookupUseCase::new(Arc::new(resolver))),
        }
    }
}
