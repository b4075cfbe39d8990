use async_trait::async_trait;
use std::net::Ipv4Addr;
use walkdns_domain::{DnsQuery, DomainError, RecordData};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnsResolution {
    /// Payload of the first answer record of the requested type.
    pub data: RecordData,
    /// Nameserver that produced the answer.
    pub nameserver: Ipv4Addr,
    /// Queries sent for this resolution, nested nameserver lookups included.
    pub queries_sent: u32,
}

impl DnsResolution {
    pub fn new(data: RecordData, nameserver: Ipv4Addr, queries_sent: u32) -> Self {
        Self {
            data,
            nameserver,
            queries_sent,
        }
    }
}

#[async_trait]
pub trait DnsResolver: Send + Sync {
    async fn resolve(&self, query: &DnsQuery) -> Result<DnsResolution, DomainError>;
}
