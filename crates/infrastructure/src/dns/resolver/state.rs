//! Per-lookup resolution state and the decision taken after each response.
//!
//! Only the query counter and the set of followed CNAMEs survive from one
//! round to the next; each response's record sections are consumed by the
//! decision that reads them.

use crate::dns::wire::DnsResponse;
use ferrous_lookup_domain::{
    LookupRequest, RecordType, Resolution, ResolveError, ResourceRecord,
};
use std::collections::HashSet;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::sync::Arc;

/// Where the next query goes and what it asks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    pub server: SocketAddr,
    pub domain: Arc<str>,
    pub want_ipv6: bool,
}

#[derive(Debug, PartialEq, Eq)]
pub enum Step {
    Finished(Resolution),
    Continue(Target),
}

#[derive(Debug)]
pub struct ResolutionState {
    fqdn: Arc<str>,
    root_server: SocketAddr,
    want_ipv6: bool,
    dns_port: u16,
    max_queries: u32,
    queries: u32,
    cnames: HashSet<String>,
}

impl ResolutionState {
    pub fn new(request: &LookupRequest, max_queries: u32, dns_port: u16) -> Self {
        Self {
            fqdn: Arc::clone(&request.fqdn),
            root_server: request.root_server,
            want_ipv6: request.want_ipv6,
            dns_port,
            max_queries,
            queries: 0,
            cnames: HashSet::new(),
        }
    }

    pub fn initial_target(&self) -> Target {
        Target {
            server: self.root_server,
            domain: Arc::clone(&self.fqdn),
            want_ipv6: self.want_ipv6,
        }
    }

    pub fn queries_sent(&self) -> u32 {
        self.queries
    }

    /// Account for a query about to be sent. Fails once the ceiling is
    /// reached, before anything goes on the wire.
    pub fn record_query(&mut self) -> Result<(), ResolveError> {
        if self.queries >= self.max_queries {
            return Err(ResolveError::QueryLimitExceeded(self.max_queries));
        }
        self.queries += 1;
        Ok(())
    }

    /// Decide what follows a validated response to a query for `target`.
    pub fn next_step(
        &mut self,
        target: &Target,
        response: DnsResponse,
    ) -> Result<Step, ResolveError> {
        if !response.answers.is_empty() {
            return self.follow_answers(target, response.answers);
        }

        if response.is_authoritative() {
            return Ok(Step::Finished(Resolution::NoData(response.nameservers)));
        }

        let ns = response
            .first_nameserver()
            .ok_or(ResolveError::NoProgress)?;

        match response.glue_for(&ns.value) {
            Some(glue) => {
                // Nameserver addresses are always looked up over IPv4.
                let want_ipv6 = self.is_lookup_target(&target.domain) && self.want_ipv6;
                Ok(Step::Continue(Target {
                    server: self.server_at(&glue.value)?,
                    domain: Arc::clone(&target.domain),
                    want_ipv6,
                }))
            }
            None => Ok(Step::Continue(Target {
                server: self.root_server,
                domain: ns.value.as_str().into(),
                want_ipv6: false,
            })),
        }
    }

    fn follow_answers(
        &mut self,
        target: &Target,
        answers: Vec<ResourceRecord>,
    ) -> Result<Step, ResolveError> {
        if let Some(first) = answers.first().filter(|r| r.is_type(RecordType::CNAME)) {
            let canonical = first.value.clone();
            self.follow_cname(&canonical)?;
            return Ok(Step::Continue(Target {
                server: self.root_server,
                domain: canonical.into(),
                want_ipv6: self.want_ipv6,
            }));
        }

        // An A record owned by some other name means we just resolved a
        // nameserver's address: ask that server for the original name.
        if !self.is_alias(&target.domain) {
            let server_record = answers
                .iter()
                .find(|r| r.is_type(RecordType::A) && !same_name(&r.name, &self.fqdn));
            if let Some(record) = server_record {
                return Ok(Step::Continue(Target {
                    server: self.server_at(&record.value)?,
                    domain: Arc::clone(&self.fqdn),
                    want_ipv6: self.want_ipv6,
                }));
            }
        }

        Ok(Step::Finished(Resolution::Answers(answers)))
    }

    fn follow_cname(&mut self, canonical: &str) -> Result<(), ResolveError> {
        let first_visit = !same_name(canonical, &self.fqdn)
            && self.cnames.insert(canonical.to_ascii_lowercase());
        if !first_visit {
            return Err(ResolveError::CnameLoop(canonical.to_string()));
        }
        Ok(())
    }

    fn is_alias(&self, name: &str) -> bool {
        self.cnames.contains(&name.to_ascii_lowercase())
    }

    /// The requested name itself or one of the aliases it led to.
    fn is_lookup_target(&self, name: &str) -> bool {
        same_name(name, &self.fqdn) || self.is_alias(name)
    }

    fn server_at(&self, address: &str) -> Result<SocketAddr, ResolveError> {
        let ip: Ipv4Addr = address.parse().map_err(|_| {
            ResolveError::MalformedMessage(format!("'{}' is not an IPv4 address", address))
        })?;
        Ok(SocketAddr::new(IpAddr::V4(ip), self.dns_port))
    }
}

fn same_name(a: &str, b: &str) -> bool {
    a.trim_end_matches('.')
        .eq_ignore_ascii_case(b.trim_end_matches('.'))
}
