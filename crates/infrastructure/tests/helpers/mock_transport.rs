#![allow(dead_code)]
use super::response_builder::{ResponseBuilder, TestRecord};
use async_trait::async_trait;
use std::collections::HashMap;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::sync::{Arc, Mutex};
use walkdns_domain::DomainError;
use walkdns_infrastructure::dns::transport::{DnsTransport, TransportResponse};
use walkdns_infrastructure::dns::wire::ResponseParser;

#[derive(Debug, Clone, Default)]
pub struct CannedResponse {
    answers: Vec<TestRecord>,
    authorities: Vec<TestRecord>,
    additionals: Vec<TestRecord>,
}

impl CannedResponse {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn answer(mut self, record: TestRecord) -> Self {
        self.answers.push(record);
        self
    }

    pub fn authority(mut self, record: TestRecord) -> Self {
        self.authorities.push(record);
        self
    }

    pub fn additional(mut self, record: TestRecord) -> Self {
        self.additionals.push(record);
        self
    }

    fn reply(&self, id: u16, qname: &str, qtype: u16) -> Vec<u8> {
        let mut builder = ResponseBuilder::new(id).question(qname, qtype);
        for r in &self.answers {
            builder = builder.answer(r.clone());
        }
        for r in &self.authorities {
            builder = builder.authority(r.clone());
        }
        for r in &self.additionals {
            builder = builder.additional(r.clone());
        }
        builder.build()
    }
}

#[derive(Debug, Clone)]
enum Route {
    Respond(CannedResponse),
    Fail(DomainError),
    Bytes(Vec<u8>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentQuery {
    pub server: Ipv4Addr,
    pub port: u16,
    pub domain: String,
    pub qtype: u16,
    pub id: u16,
}

#[derive(Default)]
struct State {
    routes: HashMap<(Ipv4Addr, String), Route>,
    sent: Vec<SentQuery>,
}

/// In-memory nameserver hierarchy keyed by (server address, query name).
/// Clones share state so a test can inspect traffic after handing one
/// to the resolver.
#[derive(Clone, Default)]
pub struct MockTransport {
    state: Arc<Mutex<State>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(&self, server: &str, domain: &str, response: CannedResponse) {
        self.route(server, domain, Route::Respond(response));
    }

    pub fn fail(&self, server: &str, domain: &str, error: DomainError) {
        self.route(server, domain, Route::Fail(error));
    }

    /// Replies with these exact bytes, ignoring the query id.
    pub fn respond_bytes(&self, server: &str, domain: &str, bytes: Vec<u8>) {
        self.route(server, domain, Route::Bytes(bytes));
    }

    pub fn sent(&self) -> Vec<SentQuery> {
        self.state.lock().unwrap().sent.clone()
    }

    pub fn servers_contacted(&self) -> Vec<(Ipv4Addr, String)> {
        self.sent()
            .into_iter()
            .map(|q| (q.server, q.domain))
            .collect()
    }

    fn route(&self, server: &str, domain: &str, route: Route) {
        self.state
            .lock()
            .unwrap()
            .routes
            .insert((server.parse().unwrap(), domain.to_string()), route);
    }
}

#[async_trait]
impl DnsTransport for MockTransport {
    async fn send(
        &self,
        message_bytes: &[u8],
        server: SocketAddr,
    ) -> Result<TransportResponse, DomainError> {
        let query = ResponseParser::parse(message_bytes).expect("resolver sent undecodable query");
        assert_eq!(query.header.flags, 0, "queries must not request recursion");
        assert_eq!(query.questions.len(), 1);

        let question = &query.questions[0];
        let ip = match server.ip() {
            IpAddr::V4(ip) => ip,
            IpAddr::V6(ip) => panic!("unexpected IPv6 server {}", ip),
        };

        let route = {
            let mut state = self.state.lock().unwrap();
            state.sent.push(SentQuery {
                server: ip,
                port: server.port(),
                domain: question.name.clone(),
                qtype: question.qtype,
                id: query.header.id,
            });
            state.routes.get(&(ip, question.name.clone())).cloned()
        };

        let bytes = match route {
            Some(Route::Respond(canned)) => {
                canned.reply(query.header.id, &question.name, question.qtype)
            }
            Some(Route::Bytes(bytes)) => bytes,
            Some(Route::Fail(e)) => return Err(e),
            None => {
                return Err(DomainError::Transport {
                    server: server.to_string(),
                    reason: format!("no canned response for {}", question.name),
                })
            }
        };

        Ok(TransportResponse {
            bytes,
            protocol_used: "mock",
        })
    }

    fn protocol_name(&self) -> &'static str {
        "mock"
    }
}
