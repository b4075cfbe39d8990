use super::budget::QueryBudget;
use super::referral::NextStep;
use crate::dns::transport::DnsTransport;
use crate::dns::wire::{MessageBuilder, ResponseParser};
use async_trait::async_trait;
use futures::future::{BoxFuture, FutureExt};
use std::net::{Ipv4Addr, SocketAddr};
use std::sync::{Mutex, PoisonError};
use tracing::{debug, info};
use walkdns_application::ports::{DnsResolution, DnsResolver};
use walkdns_domain::{DnsQuery, DomainError, Packet, RecordData, RecordType, ResolverConfig};

/// Walks the delegation chain from the root, one non-recursive query per hop.
pub struct IterativeResolver<T> {
    transport: T,
    root_server: Ipv4Addr,
    port: u16,
    max_queries: u32,
    rng: Mutex<fastrand::Rng>,
}

impl<T: DnsTransport> IterativeResolver<T> {
    pub fn new(transport: T, config: &ResolverConfig) -> Self {
        let rng = config
            .query_id_seed
            .map(fastrand::Rng::with_seed)
            .unwrap_or_else(fastrand::Rng::new);

        info!(
            root_server = %config.root_server,
            port = config.port,
            max_queries = config.max_queries,
            protocol = transport.protocol_name(),
            "Iterative resolver created"
        );

        Self {
            transport,
            root_server: config.root_server,
            port: config.port,
            max_queries: config.max_queries,
            rng: Mutex::new(rng),
        }
    }

    pub fn root_server(&self) -> Ipv4Addr {
        self.root_server
    }

    /// Sends one query to `server` and decodes whatever comes back.
    pub async fn query(
        &self,
        server: Ipv4Addr,
        domain: &str,
        record_type: RecordType,
    ) -> Result<Packet, DomainError> {
        let (id, message) = self.build_query(domain, record_type)?;
        let addr = SocketAddr::from((server, self.port));

        let response = self.transport.send(&message, addr).await?;
        let packet = ResponseParser::parse(&response.bytes)?;

        debug!(
            server = %addr,
            id,
            protocol = response.protocol_used,
            answers = packet.answers.len(),
            authorities = packet.authorities.len(),
            additionals = packet.additionals.len(),
            "Response received"
        );

        Ok(packet)
    }

    fn build_query(
        &self,
        domain: &str,
        record_type: RecordType,
    ) -> Result<(u16, Vec<u8>), DomainError> {
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        MessageBuilder::build_query(domain, record_type, &mut rng)
    }

    /// Resolves `domain` starting at the root, charging every query sent
    /// (nested nameserver lookups included) to `budget`.
    ///
    /// Returns the answer payload and the nameserver that gave it.
    pub fn resolve_with_budget<'a>(
        &'a self,
        domain: &'a str,
        record_type: RecordType,
        budget: &'a mut QueryBudget,
    ) -> BoxFuture<'a, Result<(RecordData, Ipv4Addr), DomainError>> {
        async move {
            let mut nameserver = self.root_server;

            loop {
                budget.charge(domain)?;

                info!(
                    nameserver = %nameserver,
                    domain,
                    record_type = %record_type,
                    "Querying nameserver"
                );

                let response = self.query(nameserver, domain, record_type).await?;

                match NextStep::from_response(&response, record_type) {
                    NextStep::Answer(data) => return Ok((data, nameserver)),
                    NextStep::Glue(next) => {
                        debug!(domain, from = %nameserver, to = %next, "Following glue referral");
                        nameserver = next;
                    }
                    NextStep::Delegate(ns_name) => {
                        debug!(
                            domain,
                            nameserver = %ns_name,
                            "Referral without glue, resolving nameserver address"
                        );
                        let (data, _) = self
                            .resolve_with_budget(&ns_name, RecordType::A, budget)
                            .await?;
                        nameserver = data.as_ipv4().ok_or_else(|| {
                            DomainError::Resolution(format!(
                                "nameserver {} did not resolve to an IPv4 address",
                                ns_name
                            ))
                        })?;
                    }
                    NextStep::DeadEnd => {
                        return Err(DomainError::Resolution(format!(
                            "no usable referral in response from {} for {} {}",
                            nameserver, domain, record_type
                        )));
                    }
                }
            }
        }
        .boxed()
    }
}

#[async_trait]
impl<T: DnsTransport> DnsResolver for IterativeResolver<T> {
    async fn resolve(&self, query: &DnsQuery) -> Result<DnsResolution, DomainError> {
        let mut budget = QueryBudget::new(self.max_queries);
        let (data, nameserver) = self
            .resolve_with_budget(&query.domain, query.record_type, &mut budget)
            .await?;

        Ok(DnsResolution::new(data, nameserver, budget.used()))
    }
}
