use super::state::{ResolutionState, Step, Target};
use crate::dns::transport::DnsTransport;
use crate::dns::wire::{DnsResponse, MessageBuilder, ResponseHeader, ResponseParser};
use async_trait::async_trait;
use ferrous_lookup_application::ports::{DnsResolver, QueryTrace, QueryTracer, ResponseTrace};
use ferrous_lookup_domain::{
    DnsQuery, LookupRequest, Resolution, ResolveError, ResolverConfig,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Resolves a name by walking delegations down from a root server, one
/// non-recursive query at a time.
pub struct IterativeResolver {
    transport: Arc<dyn DnsTransport>,
    config: ResolverConfig,
    parser: ResponseParser,
    tracer: Option<Arc<dyn QueryTracer>>,
}

impl IterativeResolver {
    pub fn new(transport: Arc<dyn DnsTransport>, config: ResolverConfig) -> Self {
        info!(
            protocol = transport.protocol_name(),
            timeout_ms = config.timeout_ms,
            max_queries = config.max_queries,
            retries = config.retries,
            "Iterative DNS resolver created"
        );

        Self {
            transport,
            parser: ResponseParser::new(config.max_pointer_hops),
            config,
            tracer: None,
        }
    }

    pub fn with_tracer(mut self, tracer: Arc<dyn QueryTracer>) -> Self {
        self.tracer = Some(tracer);
        self
    }

    /// One query round: send (retransmitting once on silence), validate the
    /// reply and decode its sections.
    async fn query_round(
        &self,
        state: &mut ResolutionState,
        target: &Target,
    ) -> Result<DnsResponse, ResolveError> {
        state.record_query()?;

        let query = DnsQuery::for_address(Arc::clone(&target.domain), target.want_ipv6);
        let (id, bytes) = MessageBuilder::build_query_with_id(&query)?;

        debug!(
            id,
            domain = %query.domain,
            record_type = %query.record_type,
            server = %target.server,
            query_number = state.queries_sent(),
            "Sending iterative query"
        );

        self.transport.begin_round(target.server).await?;
        let raw = self.exchange(id, &bytes, &query, target.server).await?;

        let response = match self.accept(&raw, id) {
            Err(ResolveError::TransactionMismatch { expected, received }) => {
                warn!(
                    expected,
                    received,
                    server = %target.server,
                    "Transaction ID mismatch, waiting for one more response"
                );
                let second = self.receive(target.server).await?;
                self.accept(&second, id)?
            }
            other => other?,
        };

        if let Some(tracer) = &self.tracer {
            tracer.response_received(&ResponseTrace {
                id: response.header.id,
                authoritative: response.is_authoritative(),
                answers: &response.answers,
                nameservers: &response.nameservers,
                additional: &response.additional,
            });
        }

        Ok(response)
    }

    async fn exchange(
        &self,
        id: u16,
        bytes: &[u8],
        query: &DnsQuery,
        server: SocketAddr,
    ) -> Result<Vec<u8>, ResolveError> {
        for attempt in 0..=self.config.retries {
            if let Some(tracer) = &self.tracer {
                tracer.query_sent(&QueryTrace {
                    id,
                    domain: &query.domain,
                    record_type: query.record_type,
                    server,
                    attempt,
                });
            }

            self.transport.send_to(bytes, server).await?;

            match self.receive(server).await {
                Err(ResolveError::Timeout) => {
                    debug!(id, attempt, server = %server, "No response before timeout");
                }
                other => return other,
            }
        }

        Err(ResolveError::Timeout)
    }

    async fn receive(&self, server: SocketAddr) -> Result<Vec<u8>, ResolveError> {
        let response = self.transport.recv(self.config.timeout()).await?;

        if response.from.ip().to_canonical() != server.ip().to_canonical() {
            warn!(
                expected = %server,
                from = %response.from,
                "Response came from an unexpected address"
            );
        }

        Ok(response.bytes)
    }

    fn accept(&self, raw: &[u8], id: u16) -> Result<DnsResponse, ResolveError> {
        let header = ResponseHeader::parse(raw)?;
        header.validate(id)?;
        Ok(self.parser.parse_sections(raw, header)?)
    }
}

#[async_trait]
impl DnsResolver for IterativeResolver {
    async fn resolve(&self, request: &LookupRequest) -> Result<Resolution, ResolveError> {
        let mut state =
            ResolutionState::new(request, self.config.max_queries, self.config.dns_port);
        let mut target = state.initial_target();

        loop {
            let response = self.query_round(&mut state, &target).await?;

            match state.next_step(&target, response)? {
                Step::Finished(resolution) => {
                    debug!(
                        fqdn = %request.fqdn,
                        queries = state.queries_sent(),
                        records = resolution.records().len(),
                        "Resolution finished"
                    );
                    return Ok(resolution);
                }
                Step::Continue(next) => {
                    debug!(
                        domain = %next.domain,
                        server = %next.server,
                        ipv6 = next.want_ipv6,
                        "Following referral"
                    );
                    target = next;
                }
            }
        }
    }
}
