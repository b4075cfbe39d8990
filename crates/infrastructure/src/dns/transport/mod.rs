pub mod udp;

use async_trait::async_trait;
use std::net::SocketAddr;
use walkdns_domain::DomainError;

pub use udp::UdpTransport;

#[derive(Debug)]
pub struct TransportResponse {
    pub bytes: Vec<u8>,

    pub protocol_used: &'static str,
}

/// Sends one query message to one server and returns the raw reply.
///
/// Implementations bound their own wait time and report socket, OS and
/// timeout failures as transport errors. Callers never retry.
#[async_trait]
pub trait DnsTransport: Send + Sync {
    async fn send(
        &self,
        message_bytes: &[u8],
        server: SocketAddr,
    ) -> Result<TransportResponse, DomainError>;

    fn protocol_name(&self) -> &'static str;
}
